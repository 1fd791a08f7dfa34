use anyhow::Result;
use ratatui::widgets::TableState;
use treeni_core::input::{DEFAULT_DURATION, DEFAULT_EXERTION, DURATION_RANGE, EXERTION_RANGE, WEIGHT_RANGE};
use treeni_core::time::today;
use treeni_core::{Activity, FileWorkoutRepository, HistoryView, SummaryUseCase, WorkoutInput, WorkoutService};

use crate::history::saved_message;

const DURATION_STEP: u16 = 5;
const WEIGHT_STEP: f64 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Field {
    Activity,
    Duration,
    Exertion,
    Weight,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Activity, Field::Duration, Field::Exertion, Field::Weight];

    pub fn label(&self) -> &'static str {
        match self {
            Field::Activity => "Activity",
            Field::Duration => "Duration (min)",
            Field::Exertion => "Exertion (1-5)",
            Field::Weight => "Weight (kg)",
        }
    }

    fn index(&self) -> usize {
        Field::ALL.iter().position(|f| f == self).unwrap_or(0)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Status {
    Saved(String),
    Error(String),
}

pub struct App {
    pub service: WorkoutService<FileWorkoutRepository>,
    pub view: HistoryView,
    pub activity_index: usize,
    pub duration: u16,
    pub exertion: u8,
    pub weight: f64,
    pub focus: Field,
    pub status: Option<Status>,
    pub state: TableState,
}

impl App {
    pub fn new(repo: FileWorkoutRepository, default_weight: f64) -> Result<App> {
        let mut app = App {
            service: WorkoutService::new(repo),
            view: HistoryView::Empty,
            activity_index: 0,
            duration: DEFAULT_DURATION,
            exertion: DEFAULT_EXERTION,
            weight: default_weight,
            focus: Field::Activity,
            status: None,
            state: TableState::default(),
        };
        app.reload()?;
        Ok(app)
    }

    pub fn activity(&self) -> Activity {
        Activity::ALL[self.activity_index % Activity::ALL.len()]
    }

    pub fn next_field(&mut self) {
        let i = self.focus.index();
        self.focus = Field::ALL[(i + 1) % Field::ALL.len()];
    }

    pub fn previous_field(&mut self) {
        let i = self.focus.index();
        self.focus = if i == 0 { Field::ALL[Field::ALL.len() - 1] } else { Field::ALL[i - 1] };
    }

    pub fn increase(&mut self) {
        match self.focus {
            Field::Activity => {
                self.activity_index = (self.activity_index + 1) % Activity::ALL.len();
            },
            Field::Duration => {
                self.duration = self.duration.saturating_add(DURATION_STEP).min(*DURATION_RANGE.end());
            },
            Field::Exertion => {
                self.exertion = self.exertion.saturating_add(1).min(*EXERTION_RANGE.end());
            },
            Field::Weight => {
                self.weight = (self.weight + WEIGHT_STEP).min(*WEIGHT_RANGE.end());
            },
        }
    }

    pub fn decrease(&mut self) {
        match self.focus {
            Field::Activity => {
                self.activity_index = if self.activity_index == 0 {
                    Activity::ALL.len() - 1
                } else {
                    self.activity_index - 1
                };
            },
            Field::Duration => {
                self.duration = self.duration.saturating_sub(DURATION_STEP).max(*DURATION_RANGE.start());
            },
            Field::Exertion => {
                self.exertion = self.exertion.saturating_sub(1).max(*EXERTION_RANGE.start());
            },
            Field::Weight => {
                self.weight = (self.weight - WEIGHT_STEP).max(*WEIGHT_RANGE.start());
            },
        }
    }

    /// Saves the form as a workout dated today and reloads the history.
    /// Input errors land in the status line; storage errors are returned.
    pub fn submit(&mut self) -> Result<()> {
        let input = match WorkoutInput::new(self.activity(), self.duration, self.exertion, self.weight) {
            Ok(input) => input,
            Err(e) => {
                self.status = Some(Status::Error(e.to_string()));
                return Ok(());
            }
        };

        let record = self.service.log_workout(&input, today())?;
        self.status = Some(Status::Saved(saved_message(&record)));
        self.reload()
    }

    pub fn reload(&mut self) -> Result<()> {
        self.view = SummaryUseCase::new(self.service.repository()).build(today())?;
        self.state.select(self.record_count().checked_sub(1));
        Ok(())
    }

    pub fn record_count(&self) -> usize {
        match &self.view {
            HistoryView::Empty => 0,
            HistoryView::Populated(summary) => summary.records.len(),
        }
    }

    pub fn next_row(&mut self) {
        let count = self.record_count();
        if count == 0 { return; }

        let i = match self.state.selected() {
            Some(i) if i + 1 < count => i + 1,
            Some(i) => i,
            None => 0,
        };
        self.state.select(Some(i));
    }

    pub fn previous_row(&mut self) {
        if self.record_count() == 0 { return; }

        let i = match self.state.selected() {
            Some(i) => i.saturating_sub(1),
            None => 0,
        };
        self.state.select(Some(i));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;
    use treeni_core::WorkoutRepository;

    fn app(dir: &TempDir) -> App {
        let repo = FileWorkoutRepository::with_path(dir.path().join("treenit.json"));
        App::new(repo, 70.0).unwrap()
    }

    #[test]
    fn test_form_defaults() {
        let dir = TempDir::new().unwrap();
        let app = app(&dir);

        assert_eq!(app.activity(), Activity::StrengthTraining);
        assert_eq!(app.duration, 30);
        assert_eq!(app.exertion, 3);
        assert_eq!(app.weight, 70.0);
        assert_eq!(app.view, HistoryView::Empty);
        assert_eq!(app.state.selected(), None);
    }

    #[test]
    fn test_steppers_clamp_to_bounds() {
        let dir = TempDir::new().unwrap();
        let mut app = app(&dir);

        app.focus = Field::Exertion;
        for _ in 0..10 { app.increase(); }
        assert_eq!(app.exertion, 5);
        for _ in 0..10 { app.decrease(); }
        assert_eq!(app.exertion, 1);

        app.focus = Field::Duration;
        for _ in 0..100 { app.increase(); }
        assert_eq!(app.duration, 300);
        for _ in 0..100 { app.decrease(); }
        assert_eq!(app.duration, 5);

        app.focus = Field::Weight;
        for _ in 0..500 { app.increase(); }
        assert_eq!(app.weight, 200.0);
        for _ in 0..500 { app.decrease(); }
        assert_eq!(app.weight, 30.0);
    }

    #[test]
    fn test_activity_selector_wraps() {
        let dir = TempDir::new().unwrap();
        let mut app = app(&dir);

        app.decrease();
        assert_eq!(app.activity(), Activity::Walking);
        app.increase();
        app.increase();
        assert_eq!(app.activity(), Activity::Running);
    }

    #[test]
    fn test_field_focus_wraps() {
        let dir = TempDir::new().unwrap();
        let mut app = app(&dir);

        app.previous_field();
        assert_eq!(app.focus, Field::Weight);
        app.next_field();
        assert_eq!(app.focus, Field::Activity);
    }

    #[test]
    fn test_submit_saves_and_reloads() {
        let dir = TempDir::new().unwrap();
        let mut app = app(&dir);
        app.activity_index = 1; // running
        app.duration = 60;

        app.submit().unwrap();

        assert_eq!(app.record_count(), 1);
        assert_eq!(app.state.selected(), Some(0));
        assert_eq!(
            app.status,
            Some(Status::Saved("Workout saved! Calories: 693.0 kcal, recovery: 75.0 min".to_string()))
        );

        let stored = app.service.repository().read_all().unwrap();
        assert_eq!(stored[0].calories, 693.0);
    }

    #[test]
    fn test_submit_rejects_out_of_range_weight() {
        let dir = TempDir::new().unwrap();
        let mut app = app(&dir);
        app.weight = 250.0;

        app.submit().unwrap();

        assert!(matches!(app.status, Some(Status::Error(_))));
        assert_eq!(app.record_count(), 0);
    }

    #[test]
    fn test_malformed_log_fails_to_open() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("treenit.json");
        std::fs::write(&path, "not a log").unwrap();

        assert!(App::new(FileWorkoutRepository::with_path(path), 70.0).is_err());
    }
}
