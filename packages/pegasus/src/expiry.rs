use cosmwasm_schema::cw_serde;
use cosmwasm_std::Timestamp;
use thiserror::Error;

/// Shortest lifetime an offer can be configured with (one day)
pub const MIN_EXPIRY: u64 = 3600 * 24;
/// Longest lifetime an offer can be configured with (28 days)
pub const MAX_EXPIRY: u64 = 3600 * 24 * 28;

#[derive(Error, Debug, PartialEq)]
pub enum ExpiryRangeError {
    #[error("Invalid expiration range")]
    InvalidExpirationRange {},

    #[error("Expiry min > max")]
    InvalidExpiry {},
}

/// Valid time range for offers, (min, max) in seconds
#[cw_serde]
pub struct ExpiryRange {
    pub min: u64,
    pub max: u64,
}

impl ExpiryRange {
    pub fn new(min: u64, max: u64) -> Self {
        ExpiryRange { min, max }
    }

    /// Checks that the range is ordered and within [`MIN_EXPIRY`, `MAX_EXPIRY`].
    pub fn validate(&self) -> Result<(), ExpiryRangeError> {
        if self.min > self.max {
            return Err(ExpiryRangeError::InvalidExpiry {});
        }
        if self.min < MIN_EXPIRY || self.max > MAX_EXPIRY {
            return Err(ExpiryRangeError::InvalidExpirationRange {});
        }
        Ok(())
    }

    /// Validates if given expires time is within the allowable range
    pub fn is_valid(&self, now: Timestamp, expires: Timestamp) -> Result<(), ExpiryRangeError> {
        if expires < now.plus_seconds(self.min) || expires > now.plus_seconds(self.max) {
            return Err(ExpiryRangeError::InvalidExpirationRange {});
        }
        Ok(())
    }

    /// The expiration used when the sender does not pick one
    pub fn default_expiration(&self, now: Timestamp) -> Timestamp {
        now.plus_seconds(self.max)
    }
}
