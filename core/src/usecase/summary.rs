use crate::model::workout::WorkoutRecord;
use crate::repository::WorkoutRepository;
use crate::service::dto::{ActivityTotals, HistorySummary, HistoryView, SeriesPoint};
use crate::time::in_window;
use anyhow::Result;
use chrono::NaiveDate;
use std::collections::BTreeMap;

pub const WEEK_DAYS: i64 = 7;
pub const MONTH_DAYS: i64 = 30;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SeriesField {
    Calories,
    Exertion,
}

/// Records dated on or after `today - days`, in stored order.
pub fn filter_since(records: &[WorkoutRecord], today: NaiveDate, days: i64) -> Vec<WorkoutRecord> {
    records
        .iter()
        .filter(|r| in_window(r.date, today, days))
        .cloned()
        .collect()
}

/// Sums calories and exertion per activity, ordered by activity name.
pub fn group_by_activity(records: &[WorkoutRecord]) -> Vec<ActivityTotals> {
    let mut groups: BTreeMap<&str, ActivityTotals> = BTreeMap::new();

    for record in records {
        let entry = groups
            .entry(record.activity.as_str())
            .or_insert_with(|| ActivityTotals {
                activity: record.activity.clone(),
                calories: 0.0,
                exertion: 0,
                sessions: 0,
            });
        entry.calories += record.calories;
        entry.exertion += u32::from(record.exertion);
        entry.sessions += 1;
    }

    groups.into_values().collect()
}

/// Chart points in record order. Rows are not re-sorted by date, so a log
/// entered out of date order draws its line in entry order.
pub fn series(records: &[WorkoutRecord], field: SeriesField) -> Vec<SeriesPoint> {
    records
        .iter()
        .map(|r| {
            let value = match field {
                SeriesField::Calories => r.calories,
                SeriesField::Exertion => f64::from(r.exertion),
            };
            (r.date, value)
        })
        .collect()
}

pub struct SummaryUseCase<'a, R: WorkoutRepository> {
    repo: &'a R,
}

impl<'a, R: WorkoutRepository> SummaryUseCase<'a, R> {
    pub fn new(repo: &'a R) -> Self {
        Self { repo }
    }

    /// Reloads the full log and builds everything the history view renders.
    pub fn build(&self, today: NaiveDate) -> Result<HistoryView> {
        let records = self.repo.read_all()?;
        Ok(summarize(records, today))
    }
}

pub fn summarize(records: Vec<WorkoutRecord>, today: NaiveDate) -> HistoryView {
    if records.is_empty() {
        return HistoryView::Empty;
    }

    let week = filter_since(&records, today, WEEK_DAYS);
    let month = filter_since(&records, today, MONTH_DAYS);

    HistoryView::Populated(HistorySummary {
        today,
        weekly: group_by_activity(&week),
        monthly: group_by_activity(&month),
        calories_series: series(&week, SeriesField::Calories),
        exertion_series: series(&week, SeriesField::Exertion),
        records,
    })
}
