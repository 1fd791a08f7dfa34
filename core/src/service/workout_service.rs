use crate::estimator::{estimate_calories, estimate_recovery};
use crate::input::WorkoutInput;
use crate::model::workout::WorkoutRecord;
use crate::repository::WorkoutRepository;
use anyhow::Result;
use chrono::NaiveDate;
use tracing::info;

pub struct WorkoutService<R: WorkoutRepository> {
    repo: R,
}

impl<R: WorkoutRepository> WorkoutService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub fn repository(&self) -> &R {
        &self.repo
    }

    /// Derives calories and recovery for `input`, stores the record dated
    /// `date` and returns it.
    pub fn log_workout(&self, input: &WorkoutInput, date: NaiveDate) -> Result<WorkoutRecord> {
        let activity = input.activity.name();
        let duration = f64::from(input.duration_minutes);

        let record = WorkoutRecord {
            date,
            activity: activity.to_string(),
            duration_minutes: duration,
            exertion: input.exertion,
            body_weight_kg: input.body_weight_kg,
            calories: estimate_calories(activity, duration, input.exertion, input.body_weight_kg),
            recovery_minutes: estimate_recovery(duration, input.exertion),
        };

        self.repo.append_record(record.clone())?;
        info!(
            activity,
            calories = record.calories,
            recovery = record.recovery_minutes,
            "workout logged"
        );
        Ok(record)
    }

    pub fn history(&self) -> Result<Vec<WorkoutRecord>> {
        Ok(self.repo.read_all()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::workout::Activity;
    use crate::repository::FileWorkoutRepository;
    use tempfile::TempDir;

    #[test]
    fn test_log_workout_derives_and_stores() {
        let dir = TempDir::new().unwrap();
        let repo = FileWorkoutRepository::new(Some(dir.path().to_path_buf())).unwrap();
        let service = WorkoutService::new(repo);
        let date = NaiveDate::from_ymd_opt(2024, 6, 10).unwrap();

        let input = WorkoutInput::new(Activity::Running, 60, 3, 70.0).unwrap();
        let record = service.log_workout(&input, date).unwrap();

        assert_eq!(record.activity, "running");
        assert_eq!(record.calories, 693.0);
        assert_eq!(record.recovery_minutes, 75.0);
        assert_eq!(record.date, date);

        let history = service.history().unwrap();
        assert_eq!(history.last(), Some(&record));
    }

    #[test]
    fn test_history_empty_without_log() {
        let dir = TempDir::new().unwrap();
        let repo = FileWorkoutRepository::new(Some(dir.path().to_path_buf())).unwrap();
        let service = WorkoutService::new(repo);

        assert!(service.history().unwrap().is_empty());
    }
}
