use thiserror::Error;

use cosmwasm_std::StdError;
use cw_utils::PaymentError;
use pegasus::ExpiryRangeError;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("{0}")]
    Payment(#[from] PaymentError),

    #[error("{0}")]
    ExpiryRange(#[from] ExpiryRangeError),

    #[error("Can't create an offer without nfts")]
    EmptyTokenVector {},

    #[error("Invalid collection address")]
    InvalidCollection {},

    #[error("UnauthorizedOwner")]
    UnauthorizedSender {},

    #[error("Cant offer to same address")]
    AlreadyOwned {},

    #[error("Contract is not authorized to spend token (collection: {collection}, token_id: {token_id})")]
    Unauthorized { collection: String, token_id: u32 },

    #[error("Token (collection: {collection}, id: {token_id}) is already offered in offer {offer_id}")]
    TokenAlreadyOffered {
        collection: String,
        token_id: u32,
        offer_id: u64,
    },

    #[error("Token (collection: {collection}, id: {token_id}) appears more than once in the bundle")]
    DuplicateToken { collection: String, token_id: u32 },

    #[error("Address {peer} is not owner of token (collection: {collection}, id: {token_id})")]
    UnauthorizedPeer {
        collection: String,
        token_id: u32,
        peer: String,
    },

    #[error("UnauthorizedOperator")]
    UnauthorizedOperator {},

    #[error("Address {addr} cannot create more than {max_offers} offers")]
    MaxOffers { addr: String, max_offers: u64 },

    #[error("Bundle size cannot exceed {limit}")]
    MaxBundle { limit: u64 },

    #[error("Offered balances must be non-zero and match the attached funds exactly")]
    FundsMismatch {},

    #[error("Offer {id} has expired")]
    OfferExpired { id: u64 },

    #[error("Offer {id} can still be accepted")]
    OfferNotStale { id: u64 },
}
