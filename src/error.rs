use cosmwasm_std::StdError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("Ownable: caller is not the owner")]
    NotAuthorized,

    #[error("Not enough value of ETH sent.")]
    InsufficientPayment,

    #[error("You can not mint more than 10.")]
    BatchCapExceeded,

    #[error("You can not mint more than the max supply.")]
    SupplyExceeded,

    #[error("Token {token_id} does not exist")]
    NoSuchToken { token_id: u64 },
}
