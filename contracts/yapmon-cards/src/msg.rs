use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Coin, Uint128};

#[cw_serde]
pub struct InstantiateMsg {
    /// Account allowed to change configuration and withdraw sale funds
    pub owner: String,

    /// Native denom accepted as mint payment
    pub mint_denom: String,

    /// Prefix for token metadata URIs. Defaults to an empty string,
    /// the owner can set it later.
    pub base_uri: Option<String>,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Mint a new card to `recipient`, paying at least the current minting
    /// cost. Overpayment is refunded to the sender of the message, which is
    /// not necessarily the recipient.
    MintYapmon { recipient: String, yap_score: u64 },

    /// Move a card to another holder. Only the current holder may call this.
    TransferYapmon { recipient: String, token_id: u64 },

    /// Replace the token URI prefix. Owner only.
    SetBaseUri { base_uri: String },

    /// Replace the price of a mint, in base units of the mint denom.
    /// Owner only.
    SetMintingCost { cost: Uint128 },

    /// Send the contract's entire balance of the mint denom to the owner.
    /// Owner only.
    Withdraw {},
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    /// Current holder of a card
    #[returns(OwnerOfResponse)]
    OwnerOf { token_id: u64 },

    /// Number of cards held by an account
    #[returns(BalanceOfResponse)]
    BalanceOf { address: String },

    /// Metadata location for a card
    #[returns(TokenUriResponse)]
    TokenUri { token_id: u64 },

    /// Holder, yap score and metadata location for a card
    #[returns(YapmonInfoResponse)]
    YapmonInfo { token_id: u64 },

    /// Card ids held by an account, ascending, paginated
    #[returns(TokensResponse)]
    Tokens {
        owner: String,
        start_after: Option<u64>,
        limit: Option<u32>,
    },

    /// The collection owner
    #[returns(OwnerResponse)]
    Owner {},

    /// Current price of a mint
    #[returns(MintingCostResponse)]
    MintingCost {},

    /// Total number of cards minted so far
    #[returns(NumTokensResponse)]
    NumTokens {},
}

#[cw_serde]
pub struct OwnerOfResponse {
    pub owner: Addr,
}

#[cw_serde]
pub struct BalanceOfResponse {
    pub balance: u64,
}

#[cw_serde]
pub struct TokenUriResponse {
    pub token_uri: String,
}

#[cw_serde]
pub struct YapmonInfoResponse {
    pub owner: Addr,
    pub yap_score: u64,
    pub token_uri: String,
}

#[cw_serde]
pub struct TokensResponse {
    pub tokens: Vec<u64>,
}

#[cw_serde]
pub struct OwnerResponse {
    pub owner: Addr,
}

#[cw_serde]
pub struct MintingCostResponse {
    pub cost: Coin,
}

#[cw_serde]
pub struct NumTokensResponse {
    pub count: u64,
}
