use tabled::{Table, Tabled};
use tabled::settings::{Color, Modify, Style};
use tabled::settings::object::Rows;
use treeni_core::estimator::{estimate_calories_default_weight, DEFAULT_WEIGHT_KG};
use treeni_core::input::DEFAULT_EXERTION;
use treeni_core::{Activity, ActivityTotals, HistoryView, WorkoutRecord};

pub const EMPTY_MESSAGE: &str = "No workouts logged yet.";

#[derive(Tabled)]
struct RecordRow {
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Activity")]
    activity: String,
    #[tabled(rename = "Duration (min)")]
    duration: String,
    #[tabled(rename = "Exertion")]
    exertion: u8,
    #[tabled(rename = "Weight (kg)")]
    weight: String,
    #[tabled(rename = "Calories")]
    calories: String,
    #[tabled(rename = "Recovery (min)")]
    recovery: String,
}

impl From<&WorkoutRecord> for RecordRow {
    fn from(r: &WorkoutRecord) -> Self {
        Self {
            date: r.date.format("%Y-%m-%d").to_string(),
            activity: r.activity.clone(),
            duration: format!("{}", r.duration_minutes),
            exertion: r.exertion,
            weight: format!("{}", r.body_weight_kg),
            calories: format!("{:.1}", r.calories),
            recovery: format!("{:.1}", r.recovery_minutes),
        }
    }
}

#[derive(Tabled)]
struct TotalsRow {
    #[tabled(rename = "Activity")]
    activity: String,
    #[tabled(rename = "Calories")]
    calories: String,
    #[tabled(rename = "Exertion")]
    exertion: u32,
}

pub fn saved_message(record: &WorkoutRecord) -> String {
    format!(
        "Workout saved! Calories: {:.1} kcal, recovery: {:.1} min",
        record.calories, record.recovery_minutes
    )
}

/// One line per selectable activity with its factor and the calories of an
/// hour at the default weight and exertion.
pub fn render_activities() -> String {
    Activity::ALL
        .iter()
        .map(|activity| {
            let hourly = estimate_calories_default_weight(activity.name(), 60.0, DEFAULT_EXERTION);
            format!(
                "{:<20} factor {}  (~{:.1} kcal/h at {} kg, exertion {})",
                activity.name(),
                activity.factor(),
                hourly,
                DEFAULT_WEIGHT_KG,
                DEFAULT_EXERTION
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Renders the history view: all records, then the weekly and monthly
/// totals. A window with no records gets its heading but no table.
pub fn render_history(view: &HistoryView) -> String {
    let summary = match view {
        HistoryView::Empty => return EMPTY_MESSAGE.to_string(),
        HistoryView::Populated(summary) => summary,
    };

    let mut out = String::new();

    out.push_str("\x1b[1;36mWorkout history\x1b[0m\n");
    let rows: Vec<RecordRow> = summary.records.iter().map(RecordRow::from).collect();
    out.push_str(&styled(Table::new(rows)));
    out.push('\n');

    out.push_str("\n\x1b[1;36mWeekly summary\x1b[0m\n");
    if !summary.weekly.is_empty() {
        out.push_str(&totals_table(&summary.weekly));
        out.push('\n');
    }

    out.push_str("\n\x1b[1;36mMonthly summary\x1b[0m\n");
    if !summary.monthly.is_empty() {
        out.push_str(&totals_table(&summary.monthly));
        out.push('\n');
    }

    out
}

fn totals_table(totals: &[ActivityTotals]) -> String {
    let rows: Vec<TotalsRow> = totals
        .iter()
        .map(|t| TotalsRow {
            activity: t.activity.clone(),
            calories: format!("{:.1}", t.calories),
            exertion: t.exertion,
        })
        .collect();
    styled(Table::new(rows))
}

fn styled(mut table: Table) -> String {
    table
        .with(Style::modern())
        .with(Modify::new(Rows::first()).with(Color::FG_CYAN)); // Header color
    table.to_string()
}
