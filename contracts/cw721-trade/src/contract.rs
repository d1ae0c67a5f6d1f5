use std::collections::BTreeMap;

use cosmwasm_std::{
    to_json_binary, Addr, BankMsg, Coin, CosmosMsg, Deps, DepsMut, Env, MessageInfo,
    QueryResponse, Response, StdError, StdResult, Timestamp, Uint128,
};
#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cw_utils::nonpayable;
use pegasus::cw721_trade::{
    ExecuteMsg, InstantiateMsg, MigrateMsg, Offer, OfferResponse, OffersResponse,
    ParamsResponse, QueryMsg, SudoMsg, SudoParams, Token, TokenMsg, CW721_TRADE,
};
use pegasus::ExpiryRange;

use crate::error::ContractError;
use crate::nfts::{
    any_not_owned_by, ensure_owned_and_approved, owner_of, transfer_msg, validate_tokens,
};
use crate::state::{
    count_offers_by_sender, find_offer_with_token, next_offer_id, offers, offers_page,
    SUDO_PARAMS,
};

// Version info for migration info
const CONTRACT_NAME: &str = concat!("crates.io:", env!("CARGO_PKG_NAME"));
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

// Query limits
const DEFAULT_QUERY_LIMIT: u32 = 10;
const MAX_QUERY_LIMIT: u32 = 30;

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    cw2::set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    msg.offer_expiry.validate()?;
    let maintainer = deps.api.addr_validate(&msg.maintainer)?;

    let params = SudoParams {
        offer_expiry: msg.offer_expiry,
        maintainer,
        max_offers: msg.max_offers,
        bundle_limit: msg.bundle_limit,
    };
    SUDO_PARAMS.save(deps.storage, &params)?;

    Ok(Response::new()
        .add_attribute("action", "instantiate")
        .add_attribute("contract", CW721_TRADE)
        .add_attribute("maintainer", params.maintainer))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::CreateOffer {
            offered_nfts,
            wanted_nfts,
            offered_balances,
            message,
            peer,
            expires_at,
        } => execute_create_offer(
            deps,
            env,
            info,
            OfferInfo {
                offered_nfts,
                wanted_nfts,
                offered_balances,
                message,
                peer,
                expires_at,
            },
        ),
        ExecuteMsg::RemoveOffer { id } => execute_remove_offer(deps, info, id),
        ExecuteMsg::AcceptOffer { id } => execute_accept_offer(deps, env, info, id),
        ExecuteMsg::RejectOffer { id } => execute_reject_offer(deps, info, id),
        ExecuteMsg::RemoveStaleOffer { id } => execute_remove_stale_offer(deps, env, info, id),
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn sudo(deps: DepsMut, _env: Env, msg: SudoMsg) -> Result<Response, ContractError> {
    match msg {
        SudoMsg::UpdateParams {
            offer_expiry,
            maintainer,
            max_offers,
            bundle_limit,
        } => sudo_update_params(deps, offer_expiry, maintainer, max_offers, bundle_limit),
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    // Only the same contract and only upgrades
    let previous = cw2::ensure_from_older_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;
    Ok(Response::new()
        .add_attribute("action", "migrate")
        .add_attribute("from_version", previous.to_string())
        .add_attribute("to_version", CONTRACT_VERSION))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<QueryResponse> {
    let response = match msg {
        QueryMsg::Offer { id } => to_json_binary(&query_offer(deps, id)?)?,
        QueryMsg::OffersBySender {
            sender,
            start_after,
            limit,
        } => to_json_binary(&query_offers_by_sender(deps, sender, start_after, limit)?)?,
        QueryMsg::OffersByPeer {
            peer,
            start_after,
            limit,
        } => to_json_binary(&query_offers_by_peer(deps, peer, start_after, limit)?)?,
        QueryMsg::Params {} => to_json_binary(&query_params(deps)?)?,
    };
    Ok(response)
}

/// The user supplied part of a new offer
pub struct OfferInfo {
    pub offered_nfts: Vec<TokenMsg>,
    pub wanted_nfts: Vec<TokenMsg>,
    pub offered_balances: Vec<Coin>,
    pub message: Option<String>,
    pub peer: String,
    pub expires_at: Option<Timestamp>,
}

fn execute_create_offer(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    offer_info: OfferInfo,
) -> Result<Response, ContractError> {
    let OfferInfo {
        offered_nfts,
        wanted_nfts,
        offered_balances,
        message,
        peer,
        expires_at,
    } = offer_info;
    let params = SUDO_PARAMS.load(deps.storage)?;

    if offered_nfts.is_empty() || wanted_nfts.is_empty() {
        return Err(ContractError::EmptyTokenVector {});
    }
    let limit = params.bundle_limit;
    if offered_nfts.len() as u64 > limit || wanted_nfts.len() as u64 > limit {
        return Err(ContractError::MaxBundle { limit });
    }

    let peer = deps.api.addr_validate(&peer)?;
    if peer == info.sender {
        return Err(ContractError::AlreadyOwned {});
    }

    if count_offers_by_sender(deps.storage, &info.sender) as u64 >= params.max_offers {
        return Err(ContractError::MaxOffers {
            addr: info.sender.to_string(),
            max_offers: params.max_offers,
        });
    }

    ensure_funds_match(&info.funds, &offered_balances)?;

    let expires_at =
        expires_at.unwrap_or_else(|| params.offer_expiry.default_expiration(env.block.time));
    params.offer_expiry.is_valid(env.block.time, expires_at)?;

    let offered_nfts = validate_tokens(deps.api, offered_nfts)?;
    let wanted_nfts = validate_tokens(deps.api, wanted_nfts)?;

    let contract = &env.contract.address;
    for token in &offered_nfts {
        if let Some(offer_id) = find_offer_with_token(deps.storage, &info.sender, token)? {
            return Err(ContractError::TokenAlreadyOffered {
                collection: token.collection.to_string(),
                token_id: token.token_id,
                offer_id,
            });
        }
    }
    ensure_owned_and_approved(
        &deps.querier,
        &offered_nfts,
        &info.sender,
        contract,
        |_| ContractError::UnauthorizedSender {},
    )?;
    for token in &wanted_nfts {
        if owner_of(&deps.querier, token)? != peer {
            return Err(not_owned_by_peer(token, &peer));
        }
    }

    let id = next_offer_id(deps.storage)?;
    let offer = Offer {
        id,
        offered_nfts,
        wanted_nfts,
        offered_balances,
        message,
        sender: info.sender,
        peer,
        created_at: env.block.time,
        expires_at,
    };
    offers().save(deps.storage, id, &offer)?;

    Ok(Response::new()
        .add_attribute("action", "create_offer")
        .add_attribute("offer_id", id.to_string())
        .add_attribute("sender", offer.sender)
        .add_attribute("peer", offer.peer)
        .add_attribute("expires_at", offer.expires_at.to_string()))
}

fn execute_remove_offer(
    deps: DepsMut,
    info: MessageInfo,
    id: u64,
) -> Result<Response, ContractError> {
    nonpayable(&info)?;
    let offer = offers().load(deps.storage, id)?;
    if offer.sender != info.sender {
        return Err(ContractError::UnauthorizedSender {});
    }
    offers().remove(deps.storage, id)?;

    Ok(Response::new()
        .add_messages(refund_msgs(&offer))
        .add_attribute("action", "remove_offer")
        .add_attribute("offer_id", id.to_string()))
}

fn execute_reject_offer(
    deps: DepsMut,
    info: MessageInfo,
    id: u64,
) -> Result<Response, ContractError> {
    nonpayable(&info)?;
    let offer = offers().load(deps.storage, id)?;
    if offer.peer != info.sender {
        return Err(ContractError::UnauthorizedOperator {});
    }
    offers().remove(deps.storage, id)?;

    Ok(Response::new()
        .add_messages(refund_msgs(&offer))
        .add_attribute("action", "reject_offer")
        .add_attribute("offer_id", id.to_string()))
}

fn execute_accept_offer(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    id: u64,
) -> Result<Response, ContractError> {
    nonpayable(&info)?;
    let offer = offers().load(deps.storage, id)?;
    if offer.peer != info.sender {
        return Err(ContractError::UnauthorizedOperator {});
    }
    if offer.is_expired(env.block.time) {
        return Err(ContractError::OfferExpired { id });
    }

    let contract = &env.contract.address;
    ensure_owned_and_approved(
        &deps.querier,
        &offer.offered_nfts,
        &offer.sender,
        contract,
        |_| ContractError::UnauthorizedSender {},
    )?;
    ensure_owned_and_approved(
        &deps.querier,
        &offer.wanted_nfts,
        &offer.peer,
        contract,
        |token| not_owned_by_peer(token, &offer.peer),
    )?;

    offers().remove(deps.storage, id)?;

    let mut msgs: Vec<CosmosMsg> =
        Vec::with_capacity(offer.offered_nfts.len() + offer.wanted_nfts.len() + 1);
    for token in &offer.offered_nfts {
        msgs.push(transfer_msg(token, &offer.peer)?);
    }
    for token in &offer.wanted_nfts {
        msgs.push(transfer_msg(token, &offer.sender)?);
    }
    if !offer.offered_balances.is_empty() {
        msgs.push(
            BankMsg::Send {
                to_address: offer.peer.to_string(),
                amount: offer.offered_balances.clone(),
            }
            .into(),
        );
    }

    Ok(Response::new()
        .add_messages(msgs)
        .add_attribute("action", "accept_offer")
        .add_attribute("offer_id", id.to_string())
        .add_attribute("sender", offer.sender)
        .add_attribute("peer", offer.peer))
}

fn execute_remove_stale_offer(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    id: u64,
) -> Result<Response, ContractError> {
    nonpayable(&info)?;
    let offer = offers().load(deps.storage, id)?;

    let stale = offer.is_expired(env.block.time)
        || any_not_owned_by(&deps.querier, &offer.offered_nfts, &offer.sender)
        || any_not_owned_by(&deps.querier, &offer.wanted_nfts, &offer.peer);
    if !stale {
        return Err(ContractError::OfferNotStale { id });
    }
    offers().remove(deps.storage, id)?;

    Ok(Response::new()
        .add_messages(refund_msgs(&offer))
        .add_attribute("action", "remove_stale_offer")
        .add_attribute("offer_id", id.to_string())
        .add_attribute("operator", info.sender))
}

/// Only governance can update contract params
fn sudo_update_params(
    deps: DepsMut,
    offer_expiry: Option<ExpiryRange>,
    maintainer: Option<String>,
    max_offers: Option<u64>,
    bundle_limit: Option<u64>,
) -> Result<Response, ContractError> {
    let mut params = SUDO_PARAMS.load(deps.storage)?;

    if let Some(offer_expiry) = offer_expiry {
        offer_expiry.validate()?;
        params.offer_expiry = offer_expiry;
    }
    if let Some(maintainer) = maintainer {
        params.maintainer = deps.api.addr_validate(&maintainer)?;
    }
    if let Some(max_offers) = max_offers {
        params.max_offers = max_offers;
    }
    if let Some(bundle_limit) = bundle_limit {
        params.bundle_limit = bundle_limit;
    }

    SUDO_PARAMS.save(deps.storage, &params)?;

    Ok(Response::new().add_attribute("action", "update_params"))
}

fn query_offer(deps: Deps, id: u64) -> StdResult<OfferResponse> {
    let offer = offers().may_load(deps.storage, id)?;
    Ok(OfferResponse { offer })
}

fn query_offers_by_sender(
    deps: Deps,
    sender: String,
    start_after: Option<u64>,
    limit: Option<u32>,
) -> StdResult<OffersResponse> {
    let sender = deps.api.addr_validate(&sender)?;
    let offers = offers_page(
        deps.storage,
        &offers().idx.by_sender,
        sender,
        start_after,
        page_limit(limit),
    )?;
    Ok(OffersResponse { offers })
}

fn query_offers_by_peer(
    deps: Deps,
    peer: String,
    start_after: Option<u64>,
    limit: Option<u32>,
) -> StdResult<OffersResponse> {
    let peer = deps.api.addr_validate(&peer)?;
    let offers = offers_page(
        deps.storage,
        &offers().idx.by_peer,
        peer,
        start_after,
        page_limit(limit),
    )?;
    Ok(OffersResponse { offers })
}

fn query_params(deps: Deps) -> StdResult<ParamsResponse> {
    let params = SUDO_PARAMS.load(deps.storage)?;
    Ok(ParamsResponse { params })
}

fn page_limit(limit: Option<u32>) -> usize {
    limit.unwrap_or(DEFAULT_QUERY_LIMIT).min(MAX_QUERY_LIMIT) as usize
}

fn not_owned_by_peer(token: &Token, peer: &Addr) -> ContractError {
    ContractError::UnauthorizedPeer {
        collection: token.collection.to_string(),
        token_id: token.token_id,
        peer: peer.to_string(),
    }
}

/// Sums coins per denom. Zero amounts are not allowed.
fn coins_by_denom(coins: &[Coin]) -> Result<BTreeMap<&str, Uint128>, ContractError> {
    let mut out: BTreeMap<&str, Uint128> = BTreeMap::new();
    for coin in coins {
        if coin.amount.is_zero() {
            return Err(ContractError::FundsMismatch {});
        }
        let sum = out.entry(coin.denom.as_str()).or_default();
        *sum = sum.checked_add(coin.amount).map_err(StdError::from)?;
    }
    Ok(out)
}

/// Attached funds are escrowed and must equal the offered balances
fn ensure_funds_match(funds: &[Coin], offered: &[Coin]) -> Result<(), ContractError> {
    if coins_by_denom(funds)? != coins_by_denom(offered)? {
        return Err(ContractError::FundsMismatch {});
    }
    Ok(())
}

fn refund_msgs(offer: &Offer) -> Vec<CosmosMsg> {
    if offer.offered_balances.is_empty() {
        return vec![];
    }
    vec![BankMsg::Send {
        to_address: offer.sender.to_string(),
        amount: offer.offered_balances.clone(),
    }
    .into()]
}
