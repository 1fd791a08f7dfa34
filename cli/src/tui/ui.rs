use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, BorderType, Paragraph, Row, Table, Wrap},
    Frame,
};
use treeni_core::{ActivityTotals, HistorySummary, HistoryView};

use crate::history::EMPTY_MESSAGE;
use crate::stats::{draw_calories_chart, draw_exertion_chart};
use crate::tui::app::{App, Field, Status};

pub fn draw(f: &mut Frame, app: &mut App) {
    let size = f.area();

    // Header and Main Content Split
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(1),    // Content
            Constraint::Length(1), // Footer/Help
        ])
        .split(size);

    // Header
    let header = Paragraph::new("TREENI")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_type(BorderType::Rounded));
    f.render_widget(header, main_chunks[0]);

    // Split Content into Left (Form) and Right (History)
    let content_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(38),
            Constraint::Min(20),
        ])
        .split(main_chunks[1]);

    draw_form(f, app, content_chunks[0]);
    draw_history(f, app, content_chunks[1]);

    // Footer
    let footer = Paragraph::new("j/k: Field | h/l: Change | Enter: Save | PgUp/PgDn: Scroll | q: Quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    f.render_widget(footer, main_chunks[2]);
}

fn draw_form(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(8), // Fields
            Constraint::Min(3),    // Status
        ])
        .split(area);

    let mut lines = vec![Line::from("")];
    for field in Field::ALL {
        let value = match field {
            Field::Activity => app.activity().name().to_string(),
            Field::Duration => app.duration.to_string(),
            Field::Exertion => app.exertion.to_string(),
            Field::Weight => format!("{:.1}", app.weight),
        };
        let focused = field == app.focus;
        let marker = if focused { ">> " } else { "   " };
        let value_style = if focused {
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };

        lines.push(Line::from(vec![
            Span::raw(marker),
            Span::styled(format!("{:<16}", field.label()), Style::default().fg(Color::Blue)),
            Span::styled(format!("< {} >", value), value_style),
        ]));
    }

    let form = Paragraph::new(lines)
        .block(Block::default().title(" New workout ").borders(Borders::ALL).border_type(BorderType::Rounded));
    f.render_widget(form, chunks[0]);

    let status = match &app.status {
        Some(Status::Saved(msg)) => Line::from(Span::styled(msg.as_str(), Style::default().fg(Color::Green))),
        Some(Status::Error(msg)) => Line::from(Span::styled(msg.as_str(), Style::default().fg(Color::Red))),
        None => Line::from(Span::styled("Press Enter to save.", Style::default().fg(Color::DarkGray))),
    };
    let status_block = Paragraph::new(status)
        .block(Block::default().title(" Status ").borders(Borders::ALL).border_type(BorderType::Rounded))
        .wrap(Wrap { trim: true });
    f.render_widget(status_block, chunks[1]);
}

fn draw_history(f: &mut Frame, app: &mut App, area: Rect) {
    let summary = match &app.view {
        HistoryView::Empty => {
            let empty = Paragraph::new(EMPTY_MESSAGE)
                .alignment(Alignment::Center)
                .block(Block::default().title(" History ").borders(Borders::ALL).border_type(BorderType::Rounded));
            f.render_widget(empty, area);
            return;
        }
        HistoryView::Populated(summary) => summary.clone(),
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(40), // Records
            Constraint::Length(8),      // Summaries
            Constraint::Min(8),         // Charts
        ])
        .split(area);

    draw_records(f, app, &summary, chunks[0]);

    let summary_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[1]);
    draw_totals(f, " Weekly summary ", &summary.weekly, summary_chunks[0]);
    draw_totals(f, " Monthly summary ", &summary.monthly, summary_chunks[1]);

    let chart_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[2]);
    draw_calories_chart(f, &summary, chart_chunks[0]);
    draw_exertion_chart(f, &summary, chart_chunks[1]);
}

fn draw_records(f: &mut Frame, app: &mut App, summary: &HistorySummary, area: Rect) {
    let rows: Vec<Row> = summary.records.iter().map(|r| {
        Row::new(vec![
            Span::raw(r.date.format("%Y-%m-%d").to_string()),
            Span::styled(r.activity.clone(), Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(format!("{}", r.duration_minutes)),
            Span::raw(r.exertion.to_string()),
            Span::raw(format!("{}", r.body_weight_kg)),
            Span::raw(format!("{:.1}", r.calories)),
            Span::raw(format!("{:.1}", r.recovery_minutes)),
        ])
    }).collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(10), // Date
            Constraint::Min(10),    // Activity
            Constraint::Length(5),  // Duration
            Constraint::Length(3),  // Exertion
            Constraint::Length(6),  // Weight
            Constraint::Length(7),  // Calories
            Constraint::Length(7),  // Recovery
        ]
    )
    .header(Row::new(vec!["Date", "Activity", "Min", "Ex", "Kg", "Kcal", "Rec"]).style(Style::default().fg(Color::Yellow)))
    .block(Block::default().title(" History ").borders(Borders::ALL).border_type(BorderType::Rounded))
    .row_highlight_style(Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD));

    f.render_stateful_widget(table, area, &mut app.state);
}

fn draw_totals(f: &mut Frame, title: &str, totals: &[ActivityTotals], area: Rect) {
    let rows: Vec<Row> = totals.iter().map(|t| {
        Row::new(vec![
            t.activity.clone(),
            format!("{:.1}", t.calories),
            t.exertion.to_string(),
        ])
    }).collect();

    let table = Table::new(
        rows,
        [
            Constraint::Min(10),    // Activity
            Constraint::Length(9),  // Calories
            Constraint::Length(8),  // Exertion
        ]
    )
    .header(Row::new(vec!["Activity", "Calories", "Exertion"]).style(Style::default().fg(Color::Yellow)))
    .block(Block::default().title(title).borders(Borders::ALL).border_type(BorderType::Rounded));

    f.render_widget(table, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};
    use tempfile::TempDir;
    use treeni_core::FileWorkoutRepository;

    fn screen(app: &mut App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
        terminal.draw(|f| draw(f, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_empty_history_shows_message() {
        let dir = TempDir::new().unwrap();
        let repo = FileWorkoutRepository::with_path(dir.path().join("treenit.json"));
        let mut app = App::new(repo, 70.0).unwrap();

        let text = screen(&mut app);
        assert!(text.contains(EMPTY_MESSAGE));
        assert!(!text.contains("Weekly summary"));
    }

    #[test]
    fn test_history_after_save() {
        let dir = TempDir::new().unwrap();
        let repo = FileWorkoutRepository::with_path(dir.path().join("treenit.json"));
        let mut app = App::new(repo, 70.0).unwrap();
        app.submit().unwrap();

        let text = screen(&mut app);
        assert!(!text.contains(EMPTY_MESSAGE));
        assert!(text.contains("Weekly summary"));
        assert!(text.contains("Monthly summary"));
        assert!(text.contains("Weekly calories"));
        assert!(text.contains("strength-training"));
    }
}
