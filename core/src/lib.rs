pub mod config;
pub mod error;
pub mod estimator;
pub mod input;
pub mod model;
pub mod repository;
pub mod service;
pub mod time;
pub mod usecase;

pub use config::Config;
pub use error::{ConfigError, StoreError};
pub use estimator::{estimate_calories, estimate_recovery};
pub use input::{resolve_activity, InputError, WorkoutInput};
pub use model::workout::{Activity, WorkoutRecord};
pub use repository::{FileWorkoutRepository, WorkoutRepository};
pub use service::dto::{ActivityTotals, HistorySummary, HistoryView};
pub use service::workout_service::WorkoutService;
pub use usecase::summary::SummaryUseCase;
