pub mod app;
pub mod ui;

use std::io;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use treeni_core::FileWorkoutRepository;

use crate::tui::app::App;

pub fn run(repo: FileWorkoutRepository, default_weight: f64) -> Result<()> {
    // Load before touching the terminal so a broken log reports normally.
    let mut app = App::new(repo, default_weight)?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, app))
            .map_err(|e| io::Error::other(e.to_string()))?;

        if event::poll(std::time::Duration::from_millis(250))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                match key.code {
                    KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                    KeyCode::Down | KeyCode::Char('j') | KeyCode::Tab => app.next_field(),
                    KeyCode::Up | KeyCode::Char('k') | KeyCode::BackTab => app.previous_field(),
                    KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('+') => app.increase(),
                    KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('-') => app.decrease(),
                    KeyCode::PageDown => app.next_row(),
                    KeyCode::PageUp => app.previous_row(),
                    KeyCode::Enter | KeyCode::Char('s') => app.submit()?,
                    _ => {}
                }
            }
        }
    }
}
