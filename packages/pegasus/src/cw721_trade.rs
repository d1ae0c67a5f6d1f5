use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Coin, Timestamp};

use crate::ExpiryRange;

pub const CW721_TRADE: &str = "cw721-trade";

pub type TokenId = u32;

#[cw_serde]
pub struct InstantiateMsg {
    /// Valid time range for Offers
    /// (min, max) in seconds
    pub offer_expiry: ExpiryRange,

    /// Developer address
    pub maintainer: String,

    /// Maximum amount of offers that can be sent by a user
    pub max_offers: u64,

    /// Maximum amount of NFTs in bundle
    pub bundle_limit: u64,
}

/// An NFT as referenced in messages, before the collection address is validated
#[cw_serde]
pub struct TokenMsg {
    pub collection: String,
    pub token_id: TokenId,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Create a new offer. Coins listed in `offered_balances` must be attached as funds.
    CreateOffer {
        offered_nfts: Vec<TokenMsg>,
        wanted_nfts: Vec<TokenMsg>,
        offered_balances: Vec<Coin>,
        message: Option<String>,
        peer: String,
        /// Defaults to the maximum allowed expiry
        expires_at: Option<Timestamp>,
    },
    /// Remove an offer (called by sender)
    RemoveOffer { id: u64 },
    /// Accept an existing offer (called by peer)
    AcceptOffer { id: u64 },
    /// Reject an existing offer (called by peer)
    RejectOffer { id: u64 },
    /// Remove an offer that can no longer be accepted (called by anyone)
    RemoveStaleOffer { id: u64 },
}

#[cw_serde]
pub enum SudoMsg {
    /// Update the contract parameters
    /// Can only be called by governance
    UpdateParams {
        offer_expiry: Option<ExpiryRange>,
        maintainer: Option<String>,
        max_offers: Option<u64>,
        bundle_limit: Option<u64>,
    },
}

#[cw_serde]
pub struct MigrateMsg {}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(OfferResponse)]
    Offer { id: u64 },
    /// Offers created by `sender`, ascending by ID
    #[returns(OffersResponse)]
    OffersBySender {
        sender: String,
        start_after: Option<u64>,
        limit: Option<u32>,
    },
    /// Offers addressed to `peer`, ascending by ID
    #[returns(OffersResponse)]
    OffersByPeer {
        peer: String,
        start_after: Option<u64>,
        limit: Option<u32>,
    },
    #[returns(ParamsResponse)]
    Params {},
}

#[cw_serde]
pub struct OfferResponse {
    pub offer: Option<Offer>,
}

#[cw_serde]
pub struct OffersResponse {
    pub offers: Vec<Offer>,
}

#[cw_serde]
pub struct ParamsResponse {
    pub params: SudoParams,
}

#[cw_serde]
pub struct SudoParams {
    /// Valid time range for Offers
    /// (min, max) in seconds
    pub offer_expiry: ExpiryRange,

    /// Developer address
    pub maintainer: Addr,

    /// Maximum amount of offers a user can send
    pub max_offers: u64,

    /// Maximum amount of NFTs in bundle
    pub bundle_limit: u64,
}

/// Represents a token that can be offered
#[cw_serde]
pub struct Token {
    pub collection: Addr,
    pub token_id: TokenId,
}

/// A proposed swap between a sender and a peer
#[cw_serde]
pub struct Offer {
    /// Unique identifier
    pub id: u64,

    /// Arrays of offered & wanted NFTs, both defined by the sender
    pub offered_nfts: Vec<Token>,
    pub wanted_nfts: Vec<Token>,

    /// Native/IBC tokens held in escrow by the contract until the offer is closed
    pub offered_balances: Vec<Coin>,

    /// Optional text message from the sender
    pub message: Option<String>,

    pub sender: Addr,
    pub peer: Addr,
    pub created_at: Timestamp,
    pub expires_at: Timestamp,
}

impl Offer {
    pub fn is_expired(&self, now: Timestamp) -> bool {
        now > self.expires_at
    }
}
