use cosmwasm_std::{Addr, Empty, Uint128};
use cw_storage_plus::{Item, Map};

/// Account with exclusive rights to configuration and withdrawal
pub const OWNER: Item<Addr> = Item::new("owner");

/// Native denom accepted as mint payment
pub const MINT_DENOM: Item<String> = Item::new("mint_denom");

/// Price of a single mint, in base units of the mint denom
pub const MINTING_COST: Item<Uint128> = Item::new("minting_cost");

/// Prefix the token id is appended to when building a token URI
pub const BASE_URI: Item<String> = Item::new("base_uri");

/// Id assigned to the next minted card. Starts at 1 and only ever grows,
/// ids are never reused.
pub const NEXT_TOKEN_ID: Item<u64> = Item::new("next_token_id");

/// Map for storing the holder of each minted card (token_id, owner)
pub const TOKEN_OWNERS: Map<u64, Addr> = Map::new("token_owners");

/// Yap score recorded for each card at mint time (token_id, score)
pub const YAP_SCORES: Map<u64, u64> = Map::new("yap_scores");

/// Number of cards held per account
pub const BALANCES: Map<&Addr, u64> = Map::new("balances");

/// Index of card ids per holder, kept in step with TOKEN_OWNERS
pub const TOKENS_BY_OWNER: Map<(&Addr, u64), Empty> = Map::new("tokens_by_owner");
