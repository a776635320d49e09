use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Uint128};
use cw_storage_plus::{Item, Map};

#[cw_serde]
pub struct Config {
    pub owner: Addr,

    // collection metadata
    pub name: String,
    pub symbol: String,
    pub base_uri: String,

    // hard cap on ever-issued tokens
    pub max_supply: u64,

    // public mint price per token
    pub price_denom: String,
    pub price_amount: Uint128,

    // two-step owner handover
    pub pending_owner: Option<Addr>,
}

pub const CONFIG: Item<Config> = Item::new("config");

// count of token ids ever issued; also the id allocator
pub const TOTAL_MINTED: Item<u64> = Item::new("total_minted");

// token id -> current owner, ids are 1..=TOTAL_MINTED
pub const TOKENS: Map<u64, Addr> = Map::new("tokens");
