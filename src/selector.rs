// Sorteio - Winner Selection
//
// Draw 1 is seeded by the number the operator reads off the drum and takes the
// closest coupon. Every later draw advances upward from the previous winner's
// number, so one physical draw yields a reproducible list of winners.
use std::collections::HashSet;

use tracing::debug;

use crate::error::SorteioError;
use crate::state::{Coupon, RaffleConfig, SeriesAnchor, WinnerRecord};
use crate::utils::{circular_series, map_start_series, number_distance, pool_head_series, SERIES_COUNT};

/// Customers and coupons already drawn during one raffle invocation
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Exclusions {
    pub winning_customers: HashSet<String>,
    pub used_coupons: HashSet<String>,
}

impl Exclusions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Active, owned by a customer who has not won yet, and not drawn yet
    pub fn is_eligible(&self, coupon: &Coupon) -> bool {
        coupon.is_active()
            && !self.winning_customers.contains(&coupon.customer_id)
            && !self.used_coupons.contains(&coupon.id)
    }

    /// Exclude the winner's customer and coupon from the rest of the invocation
    pub fn record(&mut self, winner: &Coupon) {
        self.winning_customers.insert(winner.customer_id.clone());
        self.used_coupons.insert(winner.id.clone());
    }
}

/// Keep the first candidate seen and only replace it on a strictly better score
fn first_best_by<'a, I, F>(candidates: I, score: F) -> Option<&'a Coupon>
where
    I: Iterator<Item = &'a Coupon>,
    F: Fn(&Coupon) -> u64,
{
    candidates.fold(None, |best: Option<(&'a Coupon, u64)>, coupon| {
        let s = score(coupon);
        match best {
            Some((_, best_score)) if s >= best_score => best,
            _ => Some((coupon, s)),
        }
    })
    .map(|(coupon, _)| coupon)
}

fn nearest<'a, I>(candidates: I, target: u64) -> Option<&'a Coupon>
where
    I: Iterator<Item = &'a Coupon>,
{
    first_best_by(candidates, |c| number_distance(c.number, target))
}

fn lowest_above<'a, I>(candidates: I, current: u64) -> Option<&'a Coupon>
where
    I: Iterator<Item = &'a Coupon>,
{
    first_best_by(candidates.filter(|c| c.number > current), |c| c.number)
}

fn eligible<'a: 'e, 'e>(
    coupons: &'a [Coupon],
    exclusions: &'e Exclusions,
) -> impl Iterator<Item = &'a Coupon> + 'e {
    coupons.iter().filter(move |c| exclusions.is_eligible(c))
}

/// Seeded draw: exact match, then nearest in the start series, then nearest in the
/// first non-empty series walking forward, then nearest anywhere
pub fn find_seeded_winner<'a>(
    start_number: u64,
    start_series: u8,
    coupons: &'a [Coupon],
    exclusions: &Exclusions,
) -> Option<&'a Coupon> {
    let series = map_start_series(start_series);

    if let Some(exact) = eligible(coupons, exclusions)
        .find(|c| c.number == start_number && c.series == series)
    {
        return Some(exact);
    }

    if let Some(close) = nearest(
        eligible(coupons, exclusions).filter(|c| c.series == series),
        start_number,
    ) {
        debug!("No exact match for {} in series {}, taking nearest", start_number, series);
        return Some(close);
    }

    for offset in 1..=SERIES_COUNT {
        let next = circular_series(series, offset);
        if eligible(coupons, exclusions).any(|c| c.series == next) {
            debug!("Series {} exhausted, moving to series {}", series, next);
            return nearest(
                eligible(coupons, exclusions).filter(|c| c.series == next),
                start_number,
            );
        }
    }

    debug!("No series has eligible coupons, taking nearest overall");
    nearest(eligible(coupons, exclusions), start_number)
}

/// Automatic draw: lowest number strictly above `current`, first in the anchor series,
/// then in the first series walking forward that has one, then anywhere
pub fn find_next_winner<'a>(
    current: u64,
    anchor_series: u8,
    coupons: &'a [Coupon],
    exclusions: &Exclusions,
    single_series_only: bool,
) -> Option<&'a Coupon> {
    if let Some(next) = lowest_above(
        eligible(coupons, exclusions).filter(|c| c.series == anchor_series),
        current,
    ) {
        return Some(next);
    }

    if single_series_only {
        debug!("Series {} has nothing above {}, stopping", anchor_series, current);
        return None;
    }

    for offset in 1..=SERIES_COUNT {
        let series = circular_series(anchor_series, offset);
        if let Some(next) = lowest_above(
            eligible(coupons, exclusions).filter(|c| c.series == series),
            current,
        ) {
            debug!("Advancing past {} into series {}", current, series);
            return Some(next);
        }
    }

    lowest_above(eligible(coupons, exclusions), current)
}

/// Draw up to `config.winner_count` winners, each from a distinct customer
///
/// Fails only when the seeded draw finds nothing. A shorter list means the pool ran
/// out of eligible coupons and is a complete raffle. The pool is read-only here;
/// marking winners as used is the caller's job.
pub fn select_winners_with(
    config: &RaffleConfig,
    start_number: u64,
    start_series: u8,
    coupons: &[Coupon],
) -> Result<Vec<WinnerRecord>, SorteioError> {
    let mut exclusions = Exclusions::new();
    let total = config.winner_count.max(1);

    let first = find_seeded_winner(start_number, start_series, coupons, &exclusions)
        .ok_or(SorteioError::NoEligibleCoupons)?;
    exclusions.record(first);

    let mut winners = Vec::with_capacity(total as usize);
    winners.push(WinnerRecord::from_coupon(1, first));

    let head_series = pool_head_series(coupons);
    let mut previous = first;

    for position in 2..=total {
        // Single-series raffles stay in the series winner 1 came from
        let anchor = if config.single_series_only {
            first.series
        } else {
            match config.series_anchor {
                SeriesAnchor::PoolHead => head_series,
                SeriesAnchor::LastWinner => previous.series,
            }
        };

        let next = match find_next_winner(
            previous.number,
            anchor,
            coupons,
            &exclusions,
            config.single_series_only,
        ) {
            Some(next) => next,
            None => {
                debug!("Pool exhausted after {} winners", winners.len());
                break;
            }
        };

        exclusions.record(next);
        winners.push(WinnerRecord::from_coupon(position, next));
        previous = next;
    }

    Ok(winners)
}

/// Draw with the default settings, optionally keeping automatic draws in one series
pub fn select_winners(
    start_number: u64,
    start_series: u8,
    coupons: &[Coupon],
    single_series_only: bool,
) -> Result<Vec<WinnerRecord>, SorteioError> {
    let config = RaffleConfig::default().single_series(single_series_only);
    select_winners_with(&config, start_number, start_series, coupons)
}
