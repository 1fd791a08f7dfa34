use std::{io, time::Duration};
use anyhow::Result;
use chrono::NaiveDate;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    prelude::*,
    symbols::Marker,
    widgets::{Axis, Block, Borders, BorderType, Chart, Dataset, GraphType, Padding, Paragraph},
};
use treeni_core::service::dto::SeriesPoint;
use treeni_core::time::window_start;
use treeni_core::usecase::summary::WEEK_DAYS;
use treeni_core::HistorySummary;

// --- THEME ---
pub struct Theme {
    pub primary: Color,
    pub muted: Color,
    pub text: Color,
    pub calories: Color,
    pub exertion: Color,
}

pub const THEME: Theme = Theme {
    primary: Color::Cyan,
    muted: Color::DarkGray,
    text: Color::White,
    calories: Color::Blue,
    exertion: Color::Rgb(255, 165, 0),
};

pub fn run(summary: &HistorySummary) -> Result<()> {
    // Terminal setup
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Main loop
    loop {
        terminal.draw(|f| ui(f, summary))?;

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    match key.code {
                        KeyCode::Char('q') | KeyCode::Esc => break,
                        _ => {}
                    }
                }
            }
        }
    }

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    Ok(())
}

fn ui(frame: &mut Frame, summary: &HistorySummary) {
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(8),    // Calories
            Constraint::Min(8),    // Exertion
            Constraint::Length(1), // Footer
        ])
        .split(frame.area());

    let header = Paragraph::new(Span::styled("TREENI - LAST 7 DAYS", Style::default().fg(THEME.primary).add_modifier(Modifier::BOLD)))
        .block(Block::default().borders(Borders::BOTTOM).border_style(Style::default().fg(THEME.muted)).padding(Padding::new(0, 0, 1, 0)));
    frame.render_widget(header, main_layout[0]);

    draw_calories_chart(frame, summary, main_layout[1]);
    draw_exertion_chart(frame, summary, main_layout[2]);

    let help = Line::from(vec![
        Span::styled("QUIT: ", Style::default().fg(THEME.muted)),
        Span::styled("q", Style::default().fg(THEME.text)),
    ]);
    frame.render_widget(Paragraph::new(help).alignment(Alignment::Center), main_layout[3]);
}

pub fn draw_calories_chart(frame: &mut Frame, summary: &HistorySummary, area: Rect) {
    let max = summary.calories_series.iter().map(|(_, v)| *v).fold(0.0, f64::max);
    let top = if max > 0.0 { (max * 1.1).ceil() } else { 1.0 };
    draw_series_chart(
        frame,
        area,
        " Weekly calories ",
        "kcal",
        &summary.calories_series,
        summary.today,
        [0.0, top],
        THEME.calories,
    );
}

pub fn draw_exertion_chart(frame: &mut Frame, summary: &HistorySummary, area: Rect) {
    draw_series_chart(
        frame,
        area,
        " Weekly exertion ",
        "1-5",
        &summary.exertion_series,
        summary.today,
        [0.0, 5.0],
        THEME.exertion,
    );
}

/// Maps dated points onto day offsets from the start of the weekly window.
/// Point order is kept, so the connecting line follows entry order.
fn to_chart_points(series: &[SeriesPoint], start: NaiveDate) -> Vec<(f64, f64)> {
    series
        .iter()
        .map(|(date, value)| ((*date - start).num_days() as f64, *value))
        .collect()
}

#[allow(clippy::too_many_arguments)]
fn draw_series_chart(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    y_title: &str,
    series: &[SeriesPoint],
    today: NaiveDate,
    y_bounds: [f64; 2],
    color: Color,
) {
    let start = window_start(today, WEEK_DAYS);
    let points = to_chart_points(series, start);

    // Line for the connections, dots on top for the markers.
    let datasets = vec![
        Dataset::default()
            .marker(Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(color))
            .data(&points),
        Dataset::default()
            .marker(Marker::Dot)
            .graph_type(GraphType::Scatter)
            .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
            .data(&points),
    ];

    let x_labels = vec![
        start.format("%m-%d").to_string(),
        today.format("%m-%d").to_string(),
    ];
    let y_labels = vec![
        format!("{:.0}", y_bounds[0]),
        format!("{:.0}", y_bounds[1]),
    ];

    let chart = Chart::new(datasets)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(THEME.muted))
                .title(title),
        )
        .x_axis(
            Axis::default()
                .title("Date")
                .style(Style::default().fg(THEME.muted))
                .bounds([0.0, WEEK_DAYS as f64])
                .labels(x_labels),
        )
        .y_axis(
            Axis::default()
                .title(y_title)
                .style(Style::default().fg(THEME.muted))
                .bounds(y_bounds)
                .labels(y_labels),
        );

    frame.render_widget(chart, area);
}
