#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;

use cosmwasm_std::{
    to_json_binary, Addr, BankMsg, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdError,
    Uint128,
};
use cw2::set_contract_version;

pub mod error;
pub mod ledger;
pub mod msg;
pub mod state;

use crate::error::ContractError;
use crate::msg::{
    ConfigResponse, ContractInfoResponse, ExecuteMsg, InstantiateMsg, MintPriceResponse,
    OwnerOfResponse, OwnerResponse, QueryMsg, SupplyResponse, TokenUriResponse,
    WalletOfOwnerResponse,
};
use crate::state::{Config, CONFIG, TOTAL_MINTED};

const CONTRACT_NAME: &str = "crates.io:software_mint";
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Most tokens a single public mint call may issue.
const PUBLIC_MINT_MAX: u64 = 10;
/// Issued to the owner at instantiation, before anyone else can mint.
const PREMINT_AMOUNT: u64 = 10;

/* ===========================
 * role helpers
 * =========================== */

fn ensure_owner(cfg: &Config, sender: &Addr) -> Result<(), ContractError> {
    if &cfg.owner != sender {
        return Err(ContractError::NotAuthorized);
    }
    Ok(())
}

/// Attached funds of the price denom, summed.
fn paid_amount(info: &MessageInfo, denom: &str) -> Uint128 {
    info.funds
        .iter()
        .filter(|c| c.denom == denom)
        .fold(Uint128::zero(), |acc, c| acc + c.amount)
}

/// `base_uri` + token id, with a joining `/` when the base does not end in one.
fn token_uri(base: &str, token_id: u64) -> String {
    let mut uri = base.to_string();
    if !uri.ends_with('/') {
        uri.push('/');
    }
    uri.push_str(&token_id.to_string());
    uri
}

/* ===========================
 * entry points
 * =========================== */

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    let owner = match msg.owner {
        Some(a) => deps.api.addr_validate(&a)?,
        None => info.sender.clone(),
    };

    let cfg = Config {
        owner: owner.clone(),
        name: msg.name.clone(),
        symbol: msg.symbol.clone(),
        base_uri: msg.base_uri,
        max_supply: msg.max_supply,
        price_denom: msg.price_denom,
        price_amount: msg.price_amount,
        pending_owner: None,
    };
    CONFIG.save(deps.storage, &cfg)?;
    TOTAL_MINTED.save(deps.storage, &0)?;
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    // starting distribution, issued before any external caller can mint
    let ids = ledger::issue(deps.storage, &owner, PREMINT_AMOUNT)?;

    Ok(Response::new()
        .add_attribute("action", "instantiate")
        .add_attribute("name", msg.name)
        .add_attribute("symbol", msg.symbol)
        .add_attribute("owner", owner)
        .add_attribute("preminted", ids.len().to_string()))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::Mint { quantity } => exec_mint(deps, info, quantity),
        ExecuteMsg::AdminMint { quantity } => exec_admin_mint(deps, info, quantity),
        ExecuteMsg::ProposeOwner { new_owner } => exec_propose_owner(deps, info, new_owner),
        ExecuteMsg::AcceptOwner {} => exec_accept_owner(deps, info),
    }
}

/* ===========================
 * mint
 * =========================== */

fn exec_mint(deps: DepsMut, info: MessageInfo, quantity: u64) -> Result<Response, ContractError> {
    let cfg = CONFIG.load(deps.storage)?;

    // cap first: an oversized request reports the cap even when also underpaid
    if quantity > PUBLIC_MINT_MAX {
        return Err(ContractError::BatchCapExceeded);
    }

    let required = cfg
        .price_amount
        .checked_mul(Uint128::from(quantity))
        .map_err(StdError::overflow)?;
    if paid_amount(&info, &cfg.price_denom) < required {
        return Err(ContractError::InsufficientPayment);
    }

    let ids = ledger::issue(deps.storage, &info.sender, quantity)?;

    let mut resp = Response::new()
        .add_attribute("action", "mint")
        .add_attribute("minter", info.sender)
        .add_attribute("quantity", quantity.to_string())
        .add_attribute("first_id", ids[0].to_string());

    // the full attached payment goes to the owner, excess included; the
    // bank message is only dispatched once issuance has succeeded
    if !info.funds.is_empty() {
        resp = resp.add_message(BankMsg::Send {
            to_address: cfg.owner.to_string(),
            amount: info.funds,
        });
    }

    Ok(resp)
}

fn exec_admin_mint(
    deps: DepsMut,
    info: MessageInfo,
    quantity: u64,
) -> Result<Response, ContractError> {
    let cfg = CONFIG.load(deps.storage)?;
    ensure_owner(&cfg, &info.sender)?;

    // no price, no per-call cap; the max supply still binds
    let ids = ledger::issue(deps.storage, &cfg.owner, quantity)?;

    Ok(Response::new()
        .add_attribute("action", "admin_mint")
        .add_attribute("quantity", quantity.to_string())
        .add_attribute("first_id", ids[0].to_string()))
}

/* ===========================
 * owner handover
 * =========================== */

fn exec_propose_owner(
    deps: DepsMut,
    info: MessageInfo,
    new_owner: String,
) -> Result<Response, ContractError> {
    let pending = deps.api.addr_validate(&new_owner)?;
    CONFIG.update(deps.storage, |mut cfg| -> Result<_, ContractError> {
        ensure_owner(&cfg, &info.sender)?;
        cfg.pending_owner = Some(pending.clone());
        Ok(cfg)
    })?;

    Ok(Response::new()
        .add_attribute("action", "propose_owner")
        .add_attribute("pending_owner", pending))
}

fn exec_accept_owner(deps: DepsMut, info: MessageInfo) -> Result<Response, ContractError> {
    CONFIG.update(deps.storage, |mut cfg| -> Result<_, ContractError> {
        let Some(pending) = &cfg.pending_owner else {
            return Err(StdError::generic_err("no pending owner").into());
        };
        if pending != &info.sender {
            return Err(ContractError::NotAuthorized);
        }
        cfg.owner = info.sender.clone();
        cfg.pending_owner = None;
        Ok(cfg)
    })?;

    Ok(Response::new()
        .add_attribute("action", "accept_owner")
        .add_attribute("owner", info.sender))
}

/* ===========================
 * queries
 * =========================== */

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> Result<Binary, ContractError> {
    match msg {
        QueryMsg::OwnerOf { token_id } => Ok(to_json_binary(&query_owner_of(deps, token_id)?)?),
        QueryMsg::WalletOfOwner { address } => {
            Ok(to_json_binary(&query_wallet_of_owner(deps, address)?)?)
        }
        QueryMsg::Owner {} => {
            let cfg = CONFIG.load(deps.storage)?;
            Ok(to_json_binary(&OwnerResponse {
                owner: cfg.owner.to_string(),
            })?)
        }
        QueryMsg::ContractInfo {} => {
            let cfg = CONFIG.load(deps.storage)?;
            Ok(to_json_binary(&ContractInfoResponse {
                name: cfg.name,
                symbol: cfg.symbol,
            })?)
        }
        QueryMsg::TokenUri { token_id } => {
            let cfg = CONFIG.load(deps.storage)?;
            Ok(to_json_binary(&TokenUriResponse {
                token_uri: token_uri(&cfg.base_uri, token_id),
            })?)
        }
        QueryMsg::MintPrice {} => {
            let cfg = CONFIG.load(deps.storage)?;
            Ok(to_json_binary(&MintPriceResponse {
                denom: cfg.price_denom,
                amount: cfg.price_amount,
            })?)
        }
        QueryMsg::Supply {} => {
            let cfg = CONFIG.load(deps.storage)?;
            Ok(to_json_binary(&SupplyResponse {
                total_minted: TOTAL_MINTED.load(deps.storage)?,
                max_supply: cfg.max_supply,
            })?)
        }
        QueryMsg::Config {} => {
            let cfg = CONFIG.load(deps.storage)?;
            Ok(to_json_binary(&ConfigResponse {
                owner: cfg.owner.to_string(),
                name: cfg.name,
                symbol: cfg.symbol,
                base_uri: cfg.base_uri,
                max_supply: cfg.max_supply,
                price_denom: cfg.price_denom,
                price_amount: cfg.price_amount,
                pending_owner: cfg.pending_owner.map(|a| a.to_string()),
            })?)
        }
    }
}

fn query_owner_of(deps: Deps, token_id: u64) -> Result<OwnerOfResponse, ContractError> {
    let owner = ledger::owner_of(deps.storage, token_id)?;
    Ok(OwnerOfResponse {
        owner: owner.to_string(),
    })
}

fn query_wallet_of_owner(
    deps: Deps,
    address: String,
) -> Result<WalletOfOwnerResponse, ContractError> {
    let addr = deps.api.addr_validate(&address)?;
    let tokens = ledger::wallet_of(deps.storage, &addr)?;
    Ok(WalletOfOwnerResponse { tokens })
}
