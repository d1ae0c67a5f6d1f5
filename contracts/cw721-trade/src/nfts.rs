//! Queries and messages against the CW721 collections taking part in a trade.

use cosmwasm_std::{
    to_json_binary, Addr, Api, CosmosMsg, QuerierWrapper, StdResult, WasmMsg,
};
use cw721::{ApprovalResponse, Cw721ExecuteMsg, Cw721QueryMsg, OwnerOfResponse};
use pegasus::cw721_trade::{Token, TokenMsg};

use crate::error::ContractError;

/// Validates the collection addresses of a bundle and rejects duplicates
pub fn validate_tokens(api: &dyn Api, tokens: Vec<TokenMsg>) -> Result<Vec<Token>, ContractError> {
    let mut out: Vec<Token> = Vec::with_capacity(tokens.len());
    for TokenMsg {
        collection,
        token_id,
    } in tokens
    {
        let collection = api
            .addr_validate(&collection)
            .map_err(|_| ContractError::InvalidCollection {})?;
        let token = Token {
            collection,
            token_id,
        };
        if out.contains(&token) {
            return Err(ContractError::DuplicateToken {
                collection: token.collection.to_string(),
                token_id,
            });
        }
        out.push(token);
    }
    Ok(out)
}

/// The current owner of the token according to its collection contract
pub fn owner_of(querier: &QuerierWrapper, token: &Token) -> StdResult<Addr> {
    let res: OwnerOfResponse = querier.query_wasm_smart(
        &token.collection,
        &Cw721QueryMsg::OwnerOf {
            token_id: token.token_id.to_string(),
            include_expired: Some(false),
        },
    )?;
    Ok(Addr::unchecked(res.owner))
}

/// Whether `spender` holds a non-expired approval for the token.
/// The collection answers the approval query with an error when there is none.
pub fn is_approved(querier: &QuerierWrapper, token: &Token, spender: &Addr) -> bool {
    querier
        .query_wasm_smart::<ApprovalResponse>(
            &token.collection,
            &Cw721QueryMsg::Approval {
                token_id: token.token_id.to_string(),
                spender: spender.to_string(),
                include_expired: Some(false),
            },
        )
        .is_ok()
}

/// Errors unless every token is owned by `owner` and approved for `spender`.
/// `not_owned` builds the error for a token owned by someone else.
pub fn ensure_owned_and_approved(
    querier: &QuerierWrapper,
    tokens: &[Token],
    owner: &Addr,
    spender: &Addr,
    not_owned: impl Fn(&Token) -> ContractError,
) -> Result<(), ContractError> {
    for token in tokens {
        if owner_of(querier, token)? != *owner {
            return Err(not_owned(token));
        }
        if !is_approved(querier, token, spender) {
            return Err(unauthorized(token));
        }
    }
    Ok(())
}

/// True if at least one token changed hands or no longer exists since the offer was made
pub fn any_not_owned_by(querier: &QuerierWrapper, tokens: &[Token], owner: &Addr) -> bool {
    tokens
        .iter()
        .any(|token| !matches!(owner_of(querier, token), Ok(current) if current == *owner))
}

pub fn unauthorized(token: &Token) -> ContractError {
    ContractError::Unauthorized {
        collection: token.collection.to_string(),
        token_id: token.token_id,
    }
}

pub fn transfer_msg(token: &Token, recipient: &Addr) -> StdResult<CosmosMsg> {
    Ok(WasmMsg::Execute {
        contract_addr: token.collection.to_string(),
        msg: to_json_binary(&Cw721ExecuteMsg::TransferNft {
            recipient: recipient.to_string(),
            token_id: token.token_id.to_string(),
        })?,
        funds: vec![],
    }
    .into())
}
