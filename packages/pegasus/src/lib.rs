pub mod cw721_trade;
mod expiry;

pub use expiry::{ExpiryRange, ExpiryRangeError, MAX_EXPIRY, MIN_EXPIRY};
