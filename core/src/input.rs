use std::fmt;
use std::ops::RangeInclusive;
use thiserror::Error;

use crate::model::workout::Activity;

pub const DURATION_RANGE: RangeInclusive<u16> = 5..=300;
pub const EXERTION_RANGE: RangeInclusive<u8> = 1..=5;
pub const WEIGHT_RANGE: RangeInclusive<f64> = 30.0..=200.0;

pub const DEFAULT_DURATION: u16 = 30;
pub const DEFAULT_EXERTION: u8 = 3;
pub const DEFAULT_WEIGHT: f64 = 70.0;

#[derive(Error, Debug, PartialEq)]
pub enum InputError {
    #[error("{field} must be between {min} and {max}, got {value}")]
    OutOfRange {
        field: &'static str,
        value: String,
        min: String,
        max: String,
    },

    #[error("Unknown activity: '{0}'")]
    UnknownActivity(String),
}

/// A workout as entered by the user, with every field inside its bounds.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkoutInput {
    pub activity: Activity,
    pub duration_minutes: u16,
    pub exertion: u8,
    pub body_weight_kg: f64,
}

impl WorkoutInput {
    pub fn new(activity: Activity, duration_minutes: u16, exertion: u8, body_weight_kg: f64) -> Result<Self, InputError> {
        check_range("duration", duration_minutes, &DURATION_RANGE)?;
        check_range("exertion", exertion, &EXERTION_RANGE)?;
        check_range("weight", body_weight_kg, &WEIGHT_RANGE)?;

        Ok(Self {
            activity,
            duration_minutes,
            exertion,
            body_weight_kg,
        })
    }
}

fn check_range<T>(field: &'static str, value: T, range: &RangeInclusive<T>) -> Result<(), InputError>
where
    T: PartialOrd + fmt::Display,
{
    if range.contains(&value) {
        return Ok(());
    }
    Err(InputError::OutOfRange {
        field,
        value: value.to_string(),
        min: range.start().to_string(),
        max: range.end().to_string(),
    })
}

/// Resolves an activity by exact name or unique prefix, ignoring case.
pub fn resolve_activity(input: &str) -> Result<Activity, InputError> {
    let key = input.trim().to_lowercase();

    // 1. Exact match
    if let Some(activity) = Activity::from_name(&key) {
        return Ok(activity);
    }

    // 2. Prefix match
    let matches: Vec<Activity> = Activity::ALL
        .into_iter()
        .filter(|a| !key.is_empty() && a.name().starts_with(&key))
        .collect();

    match matches.as_slice() {
        [only] => Ok(*only),
        _ => Err(InputError::UnknownActivity(input.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let input = WorkoutInput::new(Activity::Running, DEFAULT_DURATION, DEFAULT_EXERTION, DEFAULT_WEIGHT);
        assert!(input.is_ok());
    }

    #[test]
    fn test_bounds_are_inclusive() {
        assert!(WorkoutInput::new(Activity::Walking, 5, 1, 30.0).is_ok());
        assert!(WorkoutInput::new(Activity::Walking, 300, 5, 200.0).is_ok());
    }

    #[test]
    fn test_out_of_range() {
        let err = WorkoutInput::new(Activity::Walking, 4, 3, 70.0).unwrap_err();
        assert_eq!(
            err,
            InputError::OutOfRange {
                field: "duration",
                value: "4".to_string(),
                min: "5".to_string(),
                max: "300".to_string(),
            }
        );

        assert!(WorkoutInput::new(Activity::Walking, 301, 3, 70.0).is_err());
        assert!(WorkoutInput::new(Activity::Walking, 30, 0, 70.0).is_err());
        assert!(WorkoutInput::new(Activity::Walking, 30, 6, 70.0).is_err());
        assert!(WorkoutInput::new(Activity::Walking, 30, 3, 29.5).is_err());
        assert!(WorkoutInput::new(Activity::Walking, 30, 3, 200.5).is_err());
    }

    #[test]
    fn test_resolve_activity() {
        assert_eq!(resolve_activity("running").unwrap(), Activity::Running);
        assert_eq!(resolve_activity("Run").unwrap(), Activity::Running);
        assert_eq!(resolve_activity("s").unwrap(), Activity::StrengthTraining);
        assert_eq!(resolve_activity("pad").unwrap(), Activity::Padel);
        assert_eq!(resolve_activity("w").unwrap(), Activity::Walking);

        // Unknown
        assert!(matches!(resolve_activity("yoga"), Err(InputError::UnknownActivity(_))));
        assert!(matches!(resolve_activity(""), Err(InputError::UnknownActivity(_))));
    }
}
