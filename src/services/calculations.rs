// src/services/calculations.rs
use chrono::{Datelike, Days, NaiveDate, Weekday};
use log::warn;

use crate::config::{EstimatorParams, TARGET_JACKPOT};
use crate::models::EstimationResult;

const DRAWS_PER_WEEK: u32 = 3;

/// Extra days to the next draw when one draw is left over after full weeks,
/// indexed by today's weekday (Monday = 0).
pub const ONE_DRAW_OFFSETS: [u64; 7] = [0, 6, 4, 3, 2, 1, 1];

/// Same, for two leftover draws.
pub const TWO_DRAW_OFFSETS: [u64; 7] = [2, 1, 7, 6, 5, 4, 3];

fn valid_inputs(current: f64, historical_avg_draws: u32) -> bool {
    current.is_finite() && current > 0.0 && historical_avg_draws > 0
}

/// Linear interpolation between "nothing grown yet" (the full historical
/// average remains) and "target reached" (no draws remain).
///
/// Returns `None` for a non-positive jackpot or a zero draw average.
/// Ties round half to even, so 0.5 becomes 0 and 1.5 becomes 2.
pub fn estimate_draws(current: f64, params: &EstimatorParams) -> Option<u32> {
    if !valid_inputs(current, params.historical_avg_draws) {
        return None;
    }
    if current >= params.target {
        return Some(0);
    }

    let remaining = params.target - current;
    let total_growth = params.target - params.start_jackpot;
    if total_growth <= 0.0 {
        return Some(params.historical_avg_draws);
    }

    let proportion_remaining = remaining / total_growth;
    let estimated = params.historical_avg_draws as f64 * proportion_remaining;
    Some(estimated.round_ties_even() as u32)
}

/// Day offset for the draws that do not fill a whole week.
pub fn leftover_draw_offset(leftover_draws: u32, today: Weekday) -> u64 {
    let idx = today.num_days_from_monday() as usize;
    match leftover_draws {
        1 => ONE_DRAW_OFFSETS[idx],
        2 => TWO_DRAW_OFFSETS[idx],
        _ => 0,
    }
}

/// Date of the draw expected to reach one billion. The billion target and
/// the default start jackpot are fixed here whatever the draw estimate uses.
pub fn estimate_date_to_target(
    current: f64,
    historical_avg_draws: u32,
    today: NaiveDate,
) -> Option<NaiveDate> {
    if !valid_inputs(current, historical_avg_draws) {
        return None;
    }
    if current >= TARGET_JACKPOT {
        return Some(today);
    }

    let params = EstimatorParams {
        historical_avg_draws,
        ..EstimatorParams::default()
    };
    let draws = estimate_draws(current, &params)?;

    let full_week_days = u64::from(draws / DRAWS_PER_WEEK) * 7;
    let extra_days = leftover_draw_offset(draws % DRAWS_PER_WEEK, today.weekday());

    today.checked_add_days(Days::new(full_week_days + extra_days))
}

pub fn estimate(current: f64, params: &EstimatorParams, today: NaiveDate) -> EstimationResult {
    let result = EstimationResult {
        estimated_draws: estimate_draws(current, params),
        estimated_date: estimate_date_to_target(current, params.historical_avg_draws, today),
    };
    if result.estimated_draws.is_none() {
        warn!(
            "No draw estimate for jackpot {} with {} historical draws",
            current, params.historical_avg_draws
        );
    }
    result
}
