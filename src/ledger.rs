use cosmwasm_std::{Addr, Order, StdError, StdResult, Storage};

use crate::error::ContractError;
use crate::state::{CONFIG, TOKENS, TOTAL_MINTED};

/// Issue `quantity` fresh token ids to `recipient` and return them ascending.
///
/// Ids are strictly sequential starting at 1 and never reused. The batch is
/// all-or-nothing: on any error the counter and the ownership map are left
/// untouched.
pub fn issue(
    storage: &mut dyn Storage,
    recipient: &Addr,
    quantity: u64,
) -> Result<Vec<u64>, ContractError> {
    if quantity == 0 {
        return Err(StdError::generic_err("quantity must be at least 1").into());
    }

    let cfg = CONFIG.load(storage)?;
    let minted = TOTAL_MINTED.load(storage)?;

    let new_total = minted
        .checked_add(quantity)
        .ok_or(ContractError::SupplyExceeded)?;
    if new_total > cfg.max_supply {
        return Err(ContractError::SupplyExceeded);
    }

    let ids: Vec<u64> = (minted + 1..=new_total).collect();
    for id in &ids {
        TOKENS.save(storage, *id, recipient)?;
    }
    TOTAL_MINTED.save(storage, &new_total)?;

    Ok(ids)
}

pub fn owner_of(storage: &dyn Storage, token_id: u64) -> Result<Addr, ContractError> {
    TOKENS
        .may_load(storage, token_id)?
        .ok_or(ContractError::NoSuchToken { token_id })
}

/// Ascending token ids currently held by `owner`.
///
/// Walks the full issued range (u64 keys iterate in numeric order); linear
/// in total supply, which is fine at this collection's scale.
pub fn wallet_of(storage: &dyn Storage, owner: &Addr) -> StdResult<Vec<u64>> {
    let mut out = Vec::new();
    for item in TOKENS.range(storage, None, None, Order::Ascending) {
        let (id, holder) = item?;
        if holder == *owner {
            out.push(id);
        }
    }
    Ok(out)
}
