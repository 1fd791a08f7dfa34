use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

use crate::input::EXERTION_RANGE;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Activity {
    StrengthTraining,
    Running,
    Basketball,
    Padel,
    Walking,
}

impl Activity {
    /// Selector order, as offered by the input form.
    pub const ALL: [Activity; 5] = [
        Activity::StrengthTraining,
        Activity::Running,
        Activity::Basketball,
        Activity::Padel,
        Activity::Walking,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Activity::StrengthTraining => "strength-training",
            Activity::Running => "running",
            Activity::Basketball => "basketball",
            Activity::Padel => "padel",
            Activity::Walking => "walking",
        }
    }

    /// Intensity factor used by the calorie estimate.
    pub fn factor(&self) -> f64 {
        match self {
            Activity::StrengthTraining => 6.0,
            Activity::Running => 9.0,
            Activity::Basketball => 8.0,
            Activity::Padel => 7.0,
            Activity::Walking => 3.0,
        }
    }

    pub fn from_name(name: &str) -> Option<Activity> {
        let lower = name.to_lowercase();
        Activity::ALL.into_iter().find(|a| a.name() == lower)
    }
}

impl fmt::Display for Activity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One logged workout. Written once, never edited.
///
/// `activity` stays a plain string so that logs holding names outside the
/// selectable set still load.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct WorkoutRecord {
    pub date: NaiveDate,
    pub activity: String,
    #[serde(rename = "duration")]
    pub duration_minutes: f64,
    #[serde(deserialize_with = "deserialize_exertion")]
    pub exertion: u8,
    #[serde(rename = "weight")]
    pub body_weight_kg: f64,
    pub calories: f64,
    #[serde(rename = "recovery")]
    pub recovery_minutes: f64,
}

fn deserialize_exertion<'de, D>(deserializer: D) -> Result<u8, D::Error>
where
    D: Deserializer<'de>,
{
    let value = u8::deserialize(deserializer)?;
    if !EXERTION_RANGE.contains(&value) {
        return Err(serde::de::Error::custom(format!(
            "exertion must be between {} and {}, got {}",
            EXERTION_RANGE.start(),
            EXERTION_RANGE.end(),
            value
        )));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name_is_case_insensitive() {
        assert_eq!(Activity::from_name("Running"), Some(Activity::Running));
        assert_eq!(Activity::from_name("PADEL"), Some(Activity::Padel));
        assert_eq!(Activity::from_name("strength-training"), Some(Activity::StrengthTraining));
        assert_eq!(Activity::from_name("yoga"), None);
    }

    #[test]
    fn test_record_uses_log_file_keys() {
        let record = WorkoutRecord {
            date: NaiveDate::from_ymd_opt(2024, 5, 3).unwrap(),
            activity: "padel".to_string(),
            duration_minutes: 45.0,
            exertion: 4,
            body_weight_kg: 82.5,
            calories: 541.4,
            recovery_minutes: 56.3,
        };

        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["date"], "2024-05-03");
        assert_eq!(value["activity"], "padel");
        assert_eq!(value["duration"], 45.0);
        assert_eq!(value["exertion"], 4);
        assert_eq!(value["weight"], 82.5);
        assert_eq!(value["calories"], 541.4);
        assert_eq!(value["recovery"], 56.3);
    }

    #[test]
    fn test_integer_numbers_are_accepted() {
        let json = r#"{"date":"2024-05-03","activity":"walking","duration":30,"exertion":2,"weight":70,"calories":115.5,"recovery":30}"#;
        let record: WorkoutRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.duration_minutes, 30.0);
        assert_eq!(record.body_weight_kg, 70.0);
        assert_eq!(record.recovery_minutes, 30.0);
    }

    #[test]
    fn test_missing_field_is_rejected() {
        let json = r#"{"date":"2024-05-03","activity":"walking","duration":30,"exertion":2,"weight":70,"calories":115.5}"#;
        assert!(serde_json::from_str::<WorkoutRecord>(json).is_err());
    }

    #[test]
    fn test_exertion_outside_scale_is_rejected() {
        for exertion in [0, 6, 9] {
            let json = format!(
                r#"{{"date":"2024-05-03","activity":"walking","duration":30,"exertion":{},"weight":70,"calories":115.5,"recovery":30}}"#,
                exertion
            );
            assert!(serde_json::from_str::<WorkoutRecord>(&json).is_err(), "exertion {}", exertion);
        }
    }

    #[test]
    fn test_wrongly_typed_field_is_rejected() {
        let json = r#"{"date":"yesterday","activity":"walking","duration":30,"exertion":2,"weight":70,"calories":115.5,"recovery":30}"#;
        assert!(serde_json::from_str::<WorkoutRecord>(json).is_err());
    }
}
