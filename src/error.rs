// Sorteio - Errors
use thiserror::Error;

/// Errors that may be returned while running a raffle
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SorteioError {
    /// The seeded draw found nothing anywhere in the pool
    #[error("No eligible coupons available for the raffle")]
    NoEligibleCoupons,

    /// Draw request bytes are short or malformed
    #[error("Invalid draw request data")]
    InvalidRequestData,

    /// Coupon number is not a non-negative integer
    #[error("Invalid coupon number: {0}")]
    InvalidCouponNumber(String),

    /// Coupon status is not one the backend uses
    #[error("Invalid coupon status: {0}")]
    InvalidCouponStatus(String),

    /// The ledger refused to mark a winning coupon as used
    #[error("Failed to mark coupon {0} as used in raffle")]
    LedgerUpdateFailed(String),

    /// Exported history bytes could not be decoded
    #[error("Raffle history data is corrupted")]
    HistoryCorrupted,
}
