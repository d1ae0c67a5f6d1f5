use cosmwasm_std::{Addr, Order, StdResult, Storage};
use cw_storage_plus::{Bound, Index, IndexList, IndexedMap, Item, MultiIndex};
use pegasus::cw721_trade::{Offer, SudoParams, Token};

pub const SUDO_PARAMS: Item<SudoParams> = Item::new("sudo-params");

/// Incrementing ID counter. Holds the last ID handed out.
pub const OFFER_ID_COUNTER: Item<u64> = Item::new("offer_id_counter");

/// Get next incrementing ID. The first offer gets ID 1.
pub fn next_offer_id(store: &mut dyn Storage) -> StdResult<u64> {
    let id: u64 = OFFER_ID_COUNTER.may_load(store)?.unwrap_or_default() + 1;
    OFFER_ID_COUNTER.save(store, &id)?;
    Ok(id)
}

pub const OFFER_NAMESPACE: &str = "offers";

pub struct OfferIndexes<'a> {
    pub by_sender: MultiIndex<'a, Addr, Offer, u64>,
    pub by_peer: MultiIndex<'a, Addr, Offer, u64>,
}

impl<'a> IndexList<Offer> for OfferIndexes<'a> {
    fn get_indexes(&'_ self) -> Box<dyn Iterator<Item = &'_ dyn Index<Offer>> + '_> {
        let v: Vec<&dyn Index<Offer>> = vec![&self.by_sender, &self.by_peer];
        Box::new(v.into_iter())
    }
}

/// All open offers by ID, indexed by sender and by peer
pub fn offers<'a>() -> IndexedMap<'a, u64, Offer, OfferIndexes<'a>> {
    let indexes = OfferIndexes {
        by_sender: MultiIndex::new(
            |_pk, offer: &Offer| offer.sender.clone(),
            OFFER_NAMESPACE,
            "offers__sender",
        ),
        by_peer: MultiIndex::new(
            |_pk, offer: &Offer| offer.peer.clone(),
            OFFER_NAMESPACE,
            "offers__peer",
        ),
    };
    IndexedMap::new(OFFER_NAMESPACE, indexes)
}

/// Number of open offers created by `sender`
pub fn count_offers_by_sender(store: &dyn Storage, sender: &Addr) -> usize {
    offers()
        .idx
        .by_sender
        .prefix(sender.clone())
        .keys_raw(store, None, None, Order::Ascending)
        .count()
}

/// Finds the open offer of `sender` that already contains `token` on the offered side
pub fn find_offer_with_token(
    store: &dyn Storage,
    sender: &Addr,
    token: &Token,
) -> StdResult<Option<u64>> {
    for item in offers()
        .idx
        .by_sender
        .prefix(sender.clone())
        .range(store, None, None, Order::Ascending)
    {
        let (id, offer) = item?;
        if offer.offered_nfts.contains(token) {
            return Ok(Some(id));
        }
    }
    Ok(None)
}

/// A page of offers from one of the secondary indexes
pub fn offers_page(
    store: &dyn Storage,
    index: &MultiIndex<Addr, Offer, u64>,
    addr: Addr,
    start_after: Option<u64>,
    limit: usize,
) -> StdResult<Vec<Offer>> {
    index
        .prefix(addr)
        .range(
            store,
            start_after.map(Bound::exclusive),
            None,
            Order::Ascending,
        )
        .take(limit)
        .map(|item| item.map(|(_id, offer)| offer))
        .collect()
}
