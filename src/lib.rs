// Sorteio
// Winner selection for the bakers' association coupon raffle

// Core modules
pub mod error;
pub mod state;
pub mod utils;
pub mod selector;

// Raffle running
pub mod instruction;
pub mod processor;
pub mod history;

pub use error::SorteioError;
pub use history::{RaffleEntry, RaffleHistory};
pub use instruction::DrawRequest;
pub use processor::{CouponLedger, MemoryLedger, Processor};
pub use selector::{select_winners_with, Exclusions};
pub use state::{Coupon, CouponSnapshot, CouponStatus, RaffleConfig, SeriesAnchor, WinnerRecord};

// The selector is the entrypoint most callers need; the processor wraps it
// with ledger updates and history

pub fn select_winners(
    start_number: u64,
    start_series: u8,
    coupons: &[Coupon],
    single_series_only: bool,
) -> Result<Vec<WinnerRecord>, SorteioError> {
    selector::select_winners(start_number, start_series, coupons, single_series_only)
}
