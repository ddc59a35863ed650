// Sorteio - State
use borsh::{BorshDeserialize, BorshSerialize};
use std::convert::TryFrom;
use std::str::FromStr;

use crate::error::SorteioError;

/// Number of winners drawn by a full raffle
pub const DEFAULT_WINNER_COUNT: u8 = 5;

/// Series used when a coupon record carries none
pub const DEFAULT_SERIES: u8 = 1;

/// Status of a coupon
#[derive(BorshSerialize, BorshDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum CouponStatus {
    /// Coupon can still be drawn
    Active,
    /// Coupon already won a raffle
    UsedInRaffle,
}

impl TryFrom<u8> for CouponStatus {
    type Error = SorteioError;

    fn try_from(val: u8) -> Result<Self, Self::Error> {
        match val {
            0 => Ok(CouponStatus::Active),
            1 => Ok(CouponStatus::UsedInRaffle),
            _ => Err(SorteioError::InvalidCouponStatus(val.to_string())),
        }
    }
}

impl From<CouponStatus> for u8 {
    fn from(status: CouponStatus) -> Self {
        match status {
            CouponStatus::Active => 0,
            CouponStatus::UsedInRaffle => 1,
        }
    }
}

impl FromStr for CouponStatus {
    type Err = SorteioError;

    /// Accepts the backend's status strings as well as the english ones
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "ativo" | "active" => Ok(CouponStatus::Active),
            "usado_sorteio" | "used_in_raffle" => Ok(CouponStatus::UsedInRaffle),
            other => Err(SorteioError::InvalidCouponStatus(other.to_string())),
        }
    }
}

/// One unit of raffle eligibility issued to a customer for a purchase
#[derive(BorshSerialize, BorshDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct Coupon {
    /// Opaque coupon identifier
    pub id: String,
    /// Lucky number, repeats across series and customers
    pub number: u64,
    /// Series in 1..=10
    pub series: u8,
    /// Owning customer
    pub customer_id: String,
    /// Only active coupons can be drawn
    pub status: CouponStatus,
}

impl Coupon {
    pub fn new(id: &str, number: u64, series: u8, customer_id: &str) -> Self {
        Self {
            id: id.to_string(),
            number,
            series,
            customer_id: customer_id.to_string(),
            status: CouponStatus::Active,
        }
    }

    pub fn is_active(&self) -> bool {
        self.status == CouponStatus::Active
    }
}

/// Coupon record as it arrives from the data layer, before sanitizing
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CouponSnapshot {
    pub id: String,
    pub number: String,
    pub series: Option<u8>,
    pub customer_id: String,
    pub status: String,
}

impl TryFrom<CouponSnapshot> for Coupon {
    type Error = SorteioError;

    fn try_from(snapshot: CouponSnapshot) -> Result<Self, Self::Error> {
        let number = snapshot
            .number
            .trim()
            .parse::<u64>()
            .map_err(|_| SorteioError::InvalidCouponNumber(snapshot.number.clone()))?;
        let status = snapshot.status.parse::<CouponStatus>()?;

        Ok(Coupon {
            id: snapshot.id,
            number,
            series: snapshot.series.unwrap_or(DEFAULT_SERIES),
            customer_id: snapshot.customer_id,
            status,
        })
    }
}

/// Sanitize a whole snapshot batch, failing on the first bad record
pub fn parse_snapshots<I>(snapshots: I) -> Result<Vec<Coupon>, SorteioError>
where
    I: IntoIterator<Item = CouponSnapshot>,
{
    snapshots.into_iter().map(Coupon::try_from).collect()
}

/// A drawn coupon, in draw order
#[derive(BorshSerialize, BorshDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct WinnerRecord {
    /// 1-based position in the draw
    pub position: u8,
    /// Winning coupon, to be marked used by the caller
    pub coupon_id: String,
    /// Lucky number on the winning coupon
    pub number: u64,
    /// Series of the winning coupon
    pub series: u8,
    /// Customer who won
    pub customer_id: String,
}

impl WinnerRecord {
    pub fn from_coupon(position: u8, coupon: &Coupon) -> Self {
        Self {
            position,
            coupon_id: coupon.id.clone(),
            number: coupon.number,
            series: coupon.series,
            customer_id: coupon.customer_id.clone(),
        }
    }
}

/// Which series the automatic draws search first
#[derive(BorshSerialize, BorshDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum SeriesAnchor {
    /// Series of the first coupon in the supplied pool
    PoolHead,
    /// Series of the previous winner
    LastWinner,
}

/// Raffle settings
#[derive(BorshSerialize, BorshDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct RaffleConfig {
    /// Winners to draw; the seeded draw always runs even when this is 0
    pub winner_count: u8,
    /// Keep automatic draws inside winner 1's series
    pub single_series_only: bool,
    /// Series the automatic draws start from when not held to one series
    pub series_anchor: SeriesAnchor,
}

impl Default for RaffleConfig {
    fn default() -> Self {
        Self {
            winner_count: DEFAULT_WINNER_COUNT,
            single_series_only: false,
            series_anchor: SeriesAnchor::PoolHead,
        }
    }
}

impl RaffleConfig {
    pub fn single_series(mut self, single_series_only: bool) -> Self {
        self.single_series_only = single_series_only;
        self
    }

    pub fn anchored_to(mut self, series_anchor: SeriesAnchor) -> Self {
        self.series_anchor = series_anchor;
        self
    }

    pub fn winners(mut self, winner_count: u8) -> Self {
        self.winner_count = winner_count;
        self
    }
}
