// Sorteio - Raffle Processor
use std::collections::HashSet;

use tracing::{info, warn};

use crate::{
    error::SorteioError,
    history::RaffleHistory,
    instruction::DrawRequest,
    selector::select_winners_with,
    state::{Coupon, CouponStatus, RaffleConfig, WinnerRecord},
};

/// Where won coupons get their `used_in_raffle` status
pub trait CouponLedger {
    fn mark_used(&mut self, coupon_id: &str) -> Result<(), SorteioError>;
}

/// Ledger that only remembers which coupons were marked
#[derive(Clone, Debug, Default)]
pub struct MemoryLedger {
    marked: Vec<String>,
}

impl MemoryLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn marked(&self) -> &[String] {
        &self.marked
    }

    /// Flip every marked coupon in `coupons` to used, as a re-fetch would show it
    pub fn apply(&self, coupons: &mut [Coupon]) {
        let marked: HashSet<&str> = self.marked.iter().map(String::as_str).collect();
        for coupon in coupons.iter_mut() {
            if marked.contains(coupon.id.as_str()) {
                coupon.status = CouponStatus::UsedInRaffle;
            }
        }
    }
}

impl CouponLedger for MemoryLedger {
    fn mark_used(&mut self, coupon_id: &str) -> Result<(), SorteioError> {
        self.marked.push(coupon_id.to_string());
        Ok(())
    }
}

/// Runs a raffle and applies its side effects through the caller's ledger.
pub struct Processor;

impl Processor {
    /// Draw winners, mark each winning coupon used in draw order, then log the raffle
    ///
    /// Nothing is marked or logged when the seeded draw fails. A ledger failure stops
    /// the marking at that coupon; earlier winners stay marked.
    pub fn process<L: CouponLedger>(
        config: &RaffleConfig,
        request: &DrawRequest,
        coupons: &[Coupon],
        ledger: &mut L,
        history: &mut RaffleHistory,
    ) -> Result<Vec<WinnerRecord>, SorteioError> {
        let config = config.single_series(config.single_series_only || request.single_series_only);

        info!(
            "Raffle: start number={}, series={}, single series={}, pool={}",
            request.start_number,
            request.start_series,
            config.single_series_only,
            coupons.len()
        );

        let winners = match select_winners_with(
            &config,
            request.start_number,
            request.start_series,
            coupons,
        ) {
            Ok(winners) => winners,
            Err(err) => {
                warn!("Raffle aborted: {}", err);
                return Err(err);
            }
        };

        for winner in &winners {
            info!(
                "Winner {}: coupon {} number {} series {} customer {}",
                winner.position, winner.coupon_id, winner.number, winner.series, winner.customer_id
            );
            if let Err(err) = ledger.mark_used(&winner.coupon_id) {
                warn!("Could not mark coupon {} as used: {}", winner.coupon_id, err);
                return Err(err);
            }
        }

        history.record(*request, winners.clone());
        info!("Raffle complete with {} winners", winners.len());
        Ok(winners)
    }

    /// Same as `process`, reading the request from its packed form
    pub fn process_packed<L: CouponLedger>(
        config: &RaffleConfig,
        request_data: &[u8],
        coupons: &[Coupon],
        ledger: &mut L,
        history: &mut RaffleHistory,
    ) -> Result<Vec<WinnerRecord>, SorteioError> {
        let request = DrawRequest::unpack(request_data)?;
        Self::process(config, &request, coupons, ledger, history)
    }
}
