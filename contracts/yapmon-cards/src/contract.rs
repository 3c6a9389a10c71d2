use cosmwasm_std::{
    entry_point, to_binary, Addr, BankMsg, Binary, Coin, Deps, DepsMut, Empty, Env, MessageInfo,
    Order, Response, StdError, StdResult, Storage, Uint128,
};
use cw_denom::UncheckedDenom;
use cw_storage_plus::Bound;
use cw_utils::may_pay;

use crate::{
    msg::{
        BalanceOfResponse, ExecuteMsg, InstantiateMsg, MintingCostResponse, NumTokensResponse,
        OwnerOfResponse, OwnerResponse, QueryMsg, TokenUriResponse, TokensResponse,
        YapmonInfoResponse,
    },
    state::{
        BALANCES, BASE_URI, MINTING_COST, MINT_DENOM, NEXT_TOKEN_ID, OWNER, TOKENS_BY_OWNER,
        TOKEN_OWNERS, YAP_SCORES,
    },
    ContractError,
};

// Version info for migration
pub const CONTRACT_NAME: &str = "crates.io:yapmon-cards";
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Price of a mint until the owner changes it: 0.001 of a native unit
/// with six decimal places.
pub const DEFAULT_MINTING_COST: Uint128 = Uint128::new(1_000);

const DEFAULT_LIMIT: u32 = 30;
const MAX_LIMIT: u32 = 100;

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    cw2::set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let owner = deps
        .api
        .addr_validate(&msg.owner)
        .map_err(|_| ContractError::InvalidAddress {
            address: msg.owner.clone(),
        })?;

    // Validate the payment denom is formatted correctly
    let checked_denom = UncheckedDenom::Native(msg.mint_denom)
        .into_checked(deps.as_ref())
        .map_err(|_| StdError::generic_err("Invalid mint denom"))?;
    MINT_DENOM.save(deps.storage, &checked_denom.to_string())?;

    OWNER.save(deps.storage, &owner)?;
    MINTING_COST.save(deps.storage, &DEFAULT_MINTING_COST)?;
    BASE_URI.save(deps.storage, &msg.base_uri.unwrap_or_default())?;

    // Set initial token id, ids start at 1
    NEXT_TOKEN_ID.save(deps.storage, &1)?;

    Ok(Response::default()
        .add_attribute("action", "instantiate")
        .add_attribute("owner", owner.to_string()))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::MintYapmon {
            recipient,
            yap_score,
        } => execute_mint(deps, env, info, recipient, yap_score),
        ExecuteMsg::TransferYapmon {
            recipient,
            token_id,
        } => execute_transfer(deps, env, info, recipient, token_id),
        ExecuteMsg::SetBaseUri { base_uri } => execute_set_base_uri(deps, info, base_uri),
        ExecuteMsg::SetMintingCost { cost } => execute_set_minting_cost(deps, info, cost),
        ExecuteMsg::Withdraw {} => execute_withdraw(deps, env, info),
    }
}

pub fn execute_mint(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    recipient: String,
    yap_score: u64,
) -> Result<Response, ContractError> {
    let recipient = deps.api.addr_validate(&recipient)?;

    let denom = MINT_DENOM.load(deps.storage)?;
    let minting_cost = MINTING_COST.load(deps.storage)?;

    // Check the right kind of funds were sent
    let amount = may_pay(&info, &denom)?;
    if amount < minting_cost {
        return Err(ContractError::InsufficientPayment {
            sent: amount,
            required: minting_cost,
        });
    }

    // Assign the next id, incrementing the counter. Ids are never reused.
    let token_id = NEXT_TOKEN_ID.load(deps.storage)?;
    NEXT_TOKEN_ID.save(deps.storage, &(token_id + 1))?;

    TOKEN_OWNERS.save(deps.storage, token_id, &recipient)?;
    YAP_SCORES.save(deps.storage, token_id, &yap_score)?;
    TOKENS_BY_OWNER.save(deps.storage, (&recipient, token_id), &Empty {})?;
    BALANCES.update(deps.storage, &recipient, |balance| -> StdResult<_> {
        Ok(balance.unwrap_or_default() + 1)
    })?;

    // Refund any overpayment to the payer, who is not necessarily the
    // recipient. The send is dispatched after the state above commits.
    let mut msgs = vec![];
    let excess = amount - minting_cost;
    if !excess.is_zero() {
        msgs.push(BankMsg::Send {
            to_address: info.sender.to_string(),
            amount: vec![Coin {
                denom,
                amount: excess,
            }],
        });
    }

    Ok(Response::default()
        .add_messages(msgs)
        .add_attribute("action", "mint_yapmon")
        .add_attribute("recipient", recipient.to_string())
        .add_attribute("token_id", token_id.to_string())
        .add_attribute("yap_score", yap_score.to_string())
        .add_attribute("cost_paid", minting_cost.to_string()))
}

pub fn execute_transfer(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    recipient: String,
    token_id: u64,
) -> Result<Response, ContractError> {
    let recipient = deps.api.addr_validate(&recipient)?;

    // Only the current holder may move a card
    let holder = TOKEN_OWNERS
        .may_load(deps.storage, token_id)?
        .ok_or(ContractError::TokenNotFound { token_id })?;
    if holder != info.sender {
        return Err(ContractError::Unauthorized {});
    }

    TOKEN_OWNERS.save(deps.storage, token_id, &recipient)?;
    TOKENS_BY_OWNER.remove(deps.storage, (&holder, token_id));
    TOKENS_BY_OWNER.save(deps.storage, (&recipient, token_id), &Empty {})?;
    BALANCES.update(deps.storage, &holder, |balance| -> StdResult<_> {
        Ok(balance.unwrap_or_default().saturating_sub(1))
    })?;
    BALANCES.update(deps.storage, &recipient, |balance| -> StdResult<_> {
        Ok(balance.unwrap_or_default() + 1)
    })?;

    Ok(Response::default()
        .add_attribute("action", "transfer_yapmon")
        .add_attribute("sender", holder.to_string())
        .add_attribute("recipient", recipient.to_string())
        .add_attribute("token_id", token_id.to_string()))
}

pub fn execute_set_base_uri(
    deps: DepsMut,
    info: MessageInfo,
    base_uri: String,
) -> Result<Response, ContractError> {
    assert_owner(deps.storage, &info.sender)?;

    // Replaces the previous prefix wholesale, no format validation
    BASE_URI.save(deps.storage, &base_uri)?;

    Ok(Response::default()
        .add_attribute("action", "update_base_uri")
        .add_attribute("new_uri", base_uri))
}

pub fn execute_set_minting_cost(
    deps: DepsMut,
    info: MessageInfo,
    cost: Uint128,
) -> Result<Response, ContractError> {
    assert_owner(deps.storage, &info.sender)?;

    MINTING_COST.save(deps.storage, &cost)?;

    Ok(Response::default()
        .add_attribute("action", "update_minting_cost")
        .add_attribute("new_cost", cost.to_string()))
}

pub fn execute_withdraw(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
) -> Result<Response, ContractError> {
    assert_owner(deps.storage, &info.sender)?;

    let denom = MINT_DENOM.load(deps.storage)?;
    let balance = deps.querier.query_balance(env.contract.address, denom)?;

    // A zero balance withdraw succeeds without a bank send
    let mut msgs = vec![];
    if !balance.amount.is_zero() {
        msgs.push(BankMsg::Send {
            to_address: info.sender.to_string(),
            amount: vec![balance.clone()],
        });
    }

    Ok(Response::default()
        .add_messages(msgs)
        .add_attribute("action", "withdraw")
        .add_attribute("recipient", info.sender.to_string())
        .add_attribute("amount", balance.amount.to_string()))
}

/// Owner gate for configuration and withdrawal calls
fn assert_owner(storage: &dyn Storage, sender: &Addr) -> Result<(), ContractError> {
    let owner = OWNER.load(storage)?;
    if *sender != owner {
        return Err(ContractError::Unauthorized {});
    }
    Ok(())
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> Result<Binary, ContractError> {
    match msg {
        QueryMsg::OwnerOf { token_id } => Ok(to_binary(&query_owner_of(deps, token_id)?)?),
        QueryMsg::BalanceOf { address } => Ok(to_binary(&query_balance_of(deps, address)?)?),
        QueryMsg::TokenUri { token_id } => Ok(to_binary(&query_token_uri(deps, token_id)?)?),
        QueryMsg::YapmonInfo { token_id } => Ok(to_binary(&query_yapmon_info(deps, token_id)?)?),
        QueryMsg::Tokens {
            owner,
            start_after,
            limit,
        } => Ok(to_binary(&query_tokens(deps, owner, start_after, limit)?)?),
        QueryMsg::Owner {} => Ok(to_binary(&OwnerResponse {
            owner: OWNER.load(deps.storage)?,
        })?),
        QueryMsg::MintingCost {} => Ok(to_binary(&MintingCostResponse {
            cost: Coin {
                denom: MINT_DENOM.load(deps.storage)?,
                amount: MINTING_COST.load(deps.storage)?,
            },
        })?),
        QueryMsg::NumTokens {} => Ok(to_binary(&NumTokensResponse {
            count: NEXT_TOKEN_ID.load(deps.storage)? - 1,
        })?),
    }
}

fn query_owner_of(deps: Deps, token_id: u64) -> Result<OwnerOfResponse, ContractError> {
    let owner = TOKEN_OWNERS
        .may_load(deps.storage, token_id)?
        .ok_or(ContractError::TokenNotFound { token_id })?;
    Ok(OwnerOfResponse { owner })
}

fn query_balance_of(deps: Deps, address: String) -> Result<BalanceOfResponse, ContractError> {
    let address = deps.api.addr_validate(&address)?;
    let balance = BALANCES
        .may_load(deps.storage, &address)?
        .unwrap_or_default();
    Ok(BalanceOfResponse { balance })
}

fn query_token_uri(deps: Deps, token_id: u64) -> Result<TokenUriResponse, ContractError> {
    // Check the card exists before building the URI
    if !TOKEN_OWNERS.has(deps.storage, token_id) {
        return Err(ContractError::TokenNotFound { token_id });
    }
    let base_uri = BASE_URI.load(deps.storage)?;
    Ok(TokenUriResponse {
        token_uri: format!("{}{}", base_uri, token_id),
    })
}

fn query_yapmon_info(deps: Deps, token_id: u64) -> Result<YapmonInfoResponse, ContractError> {
    let owner = TOKEN_OWNERS
        .may_load(deps.storage, token_id)?
        .ok_or(ContractError::TokenNotFound { token_id })?;
    let yap_score = YAP_SCORES.load(deps.storage, token_id)?;
    let base_uri = BASE_URI.load(deps.storage)?;
    Ok(YapmonInfoResponse {
        owner,
        yap_score,
        token_uri: format!("{}{}", base_uri, token_id),
    })
}

fn query_tokens(
    deps: Deps,
    owner: String,
    start_after: Option<u64>,
    limit: Option<u32>,
) -> Result<TokensResponse, ContractError> {
    let owner = deps.api.addr_validate(&owner)?;
    let limit = limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT) as usize;
    let start = start_after.map(Bound::exclusive);

    let tokens = TOKENS_BY_OWNER
        .prefix(&owner)
        .keys(deps.storage, start, None, Order::Ascending)
        .take(limit)
        .collect::<StdResult<Vec<u64>>>()?;

    Ok(TokensResponse { tokens })
}
