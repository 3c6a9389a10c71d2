use cosmwasm_std::{StdError, Uint128};
use cw_utils::PaymentError;
use thiserror::Error;

/// Custom errors for this contract
#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("{0}")]
    PaymentError(#[from] PaymentError),

    #[error("Unauthorized")]
    Unauthorized {},

    #[error("Insufficient payment: sent {sent}, minting costs {required}")]
    InsufficientPayment { sent: Uint128, required: Uint128 },

    #[error("Token {token_id} does not exist")]
    TokenNotFound { token_id: u64 },

    #[error("Invalid owner address: {address}")]
    InvalidAddress { address: String },
}
