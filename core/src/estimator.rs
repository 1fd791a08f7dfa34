//! Calorie and recovery estimates.
//!
//! Both estimates are closed-form and total: callers validate ranges at the
//! input boundary, nothing here rejects a value.

use crate::model::workout::Activity;
use tracing::warn;

/// Factor applied to activity names outside the selectable set.
pub const DEFAULT_FACTOR: f64 = 5.0;
pub const DEFAULT_WEIGHT_KG: f64 = 70.0;

// Exertion multiplier: 0.8 at exertion 1, +0.15 per step.
const EXERTION_BASE: f64 = 0.8;
const EXERTION_STEP: f64 = 0.15;

// Recovery multiplier: 0.5 + 0.25 per exertion step.
const RECOVERY_BASE: f64 = 0.5;
const RECOVERY_STEP: f64 = 0.25;

pub fn activity_factor(activity: &str) -> f64 {
    match Activity::from_name(activity) {
        Some(a) => a.factor(),
        None => {
            warn!(activity, factor = DEFAULT_FACTOR, "unknown activity, using default factor");
            DEFAULT_FACTOR
        }
    }
}

pub fn estimate_calories(activity: &str, duration_minutes: f64, exertion: u8, weight_kg: f64) -> f64 {
    let factor = activity_factor(activity);
    let multiplier = EXERTION_BASE + EXERTION_STEP * (exertion as f64 - 1.0);
    round_one_decimal(factor * weight_kg * (duration_minutes / 60.0) * multiplier)
}

/// Same as [`estimate_calories`] with [`DEFAULT_WEIGHT_KG`].
pub fn estimate_calories_default_weight(activity: &str, duration_minutes: f64, exertion: u8) -> f64 {
    estimate_calories(activity, duration_minutes, exertion, DEFAULT_WEIGHT_KG)
}

pub fn estimate_recovery(duration_minutes: f64, exertion: u8) -> f64 {
    round_one_decimal(duration_minutes * (RECOVERY_BASE + RECOVERY_STEP * exertion as f64))
}

fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round_ties_even() / 10.0
}
