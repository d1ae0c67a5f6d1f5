pub mod contract;
pub mod error;
pub mod helpers;
mod nfts;
pub mod state;

pub use crate::error::ContractError;
pub use crate::helpers::TradeContract;
