use chrono::NaiveDate;
use serde::Serialize;

use crate::model::workout::WorkoutRecord;

/// Per-activity sums over a window of records.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ActivityTotals {
    pub activity: String,
    pub calories: f64,
    pub exertion: u32,
    pub sessions: usize,
}

/// One chart point. Points keep the order of the records they came from.
pub type SeriesPoint = (NaiveDate, f64);

#[derive(Debug, Clone, PartialEq)]
pub enum HistoryView {
    /// Nothing logged yet.
    Empty,
    Populated(HistorySummary),
}

#[derive(Debug, Clone, PartialEq)]
pub struct HistorySummary {
    pub today: NaiveDate,
    pub records: Vec<WorkoutRecord>,
    /// Empty when no record falls inside the last week.
    pub weekly: Vec<ActivityTotals>,
    /// Empty when no record falls inside the last 30 days.
    pub monthly: Vec<ActivityTotals>,
    pub calories_series: Vec<SeriesPoint>,
    pub exertion_series: Vec<SeriesPoint>,
}
