// Sorteio - Utility Functions
use crate::state::{Coupon, DEFAULT_SERIES};

/// Number of series on the raffle drum
pub const SERIES_COUNT: u8 = 10;

/// Drums are labelled 0-9 and 0 stands for the tenth series
pub fn map_start_series(series: u8) -> u8 {
    if series == 0 {
        SERIES_COUNT
    } else {
        series
    }
}

/// Series reached by walking `offset` steps forward from `anchor`, wrapping 10 -> 1
///
/// Offsets run 1..=10, so the last step lands back on `anchor` itself.
pub fn circular_series(anchor: u8, offset: u8) -> u8 {
    let step = (anchor as u16 + offset as u16 + SERIES_COUNT as u16 - 1) % SERIES_COUNT as u16;
    (step + 1) as u8
}

/// Series of the first coupon in the pool, or the default when the pool is empty
pub fn pool_head_series(coupons: &[Coupon]) -> u8 {
    coupons.first().map(|c| c.series).unwrap_or(DEFAULT_SERIES)
}

/// Absolute distance between two lucky numbers
pub fn number_distance(a: u64, b: u64) -> u64 {
    a.abs_diff(b)
}
