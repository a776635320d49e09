use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::Uint128;

#[cw_serde]
pub struct InstantiateMsg {
    pub name: String,
    pub symbol: String,
    /// Token URIs are `base_uri` + token id.
    pub base_uri: String,
    pub max_supply: u64,
    pub price_denom: String,
    pub price_amount: Uint128,
    /// Defaults to the instantiating sender.
    pub owner: Option<String>,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Payable mint to the sender, at most 10 per call.
    Mint { quantity: u64 },

    /// Owner-only mint to the owner, exempt from price and per-call cap.
    AdminMint { quantity: u64 },

    ProposeOwner { new_owner: String },
    AcceptOwner {},
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(OwnerOfResponse)]
    OwnerOf { token_id: u64 },

    /// All token ids held by `address`, ascending.
    #[returns(WalletOfOwnerResponse)]
    WalletOfOwner { address: String },

    #[returns(OwnerResponse)]
    Owner {},

    #[returns(ContractInfoResponse)]
    ContractInfo {},

    #[returns(TokenUriResponse)]
    TokenUri { token_id: u64 },

    #[returns(MintPriceResponse)]
    MintPrice {},

    #[returns(SupplyResponse)]
    Supply {},

    #[returns(ConfigResponse)]
    Config {},
}

#[cw_serde]
pub struct OwnerOfResponse {
    pub owner: String,
}

#[cw_serde]
pub struct WalletOfOwnerResponse {
    pub tokens: Vec<u64>,
}

#[cw_serde]
pub struct OwnerResponse {
    pub owner: String,
}

#[cw_serde]
pub struct ContractInfoResponse {
    pub name: String,
    pub symbol: String,
}

#[cw_serde]
pub struct TokenUriResponse {
    pub token_uri: String,
}

#[cw_serde]
pub struct MintPriceResponse {
    pub denom: String,
    pub amount: Uint128,
}

#[cw_serde]
pub struct SupplyResponse {
    pub total_minted: u64,
    pub max_supply: u64,
}

#[cw_serde]
pub struct ConfigResponse {
    pub owner: String,
    pub name: String,
    pub symbol: String,
    pub base_uri: String,
    pub max_supply: u64,
    pub price_denom: String,
    pub price_amount: Uint128,
    pub pending_owner: Option<String>,
}
