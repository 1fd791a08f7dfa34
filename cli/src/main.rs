mod history;
mod logging;
mod stats;
mod tui;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use treeni_core::input::{DEFAULT_DURATION, DEFAULT_EXERTION};
use treeni_core::time::today;
use treeni_core::usecase::summary::summarize;
use treeni_core::{resolve_activity, Config, FileWorkoutRepository, HistoryView, SummaryUseCase, WorkoutInput, WorkoutService};

#[derive(Parser)]
#[command(name = "treeni")]
#[command(about = "A personal workout logger", long_about = None)]
struct Cli {
    /// Workout log file (default: ~/.treeni/treenit.json)
    #[arg(long, global = true)]
    file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Log a workout (usage: log --activity running --duration 45 --exertion 4)
    #[command(alias = "add")]
    Log {
        /// Activity name or unique prefix
        #[arg(short, long)]
        activity: String,
        /// Duration in minutes (5-300)
        #[arg(short, long, default_value_t = DEFAULT_DURATION)]
        duration: u16,
        /// Perceived exertion (1-5)
        #[arg(short, long, default_value_t = DEFAULT_EXERTION)]
        exertion: u8,
        /// Body weight in kg (30-200, default from config)
        #[arg(short, long)]
        weight: Option<f64>,
    },
    /// Show all workouts with weekly and monthly summaries
    History,
    /// Chart calories and exertion for the last week
    Chart,
    /// List selectable activities
    Activities,
    /// Open the Terminal User Interface
    Tui,
}

fn open_repository(cli_file: Option<PathBuf>, config: &Config) -> Result<FileWorkoutRepository> {
    let repo = match cli_file.or_else(|| config.log_file.clone()) {
        Some(path) => FileWorkoutRepository::with_path(path),
        None => FileWorkoutRepository::new(None)?,
    };
    Ok(repo)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Full-screen views keep log output off the terminal unless asked for.
    let interactive = matches!(cli.command, None | Some(Commands::Tui) | Some(Commands::Chart));
    logging::init(if interactive { "off" } else { "warn" });

    let config = Config::load().context("Failed to load config")?;
    let repo = open_repository(cli.file, &config)?;
    tracing::debug!(path = %repo.path().display(), "using workout log");

    match cli.command {
        Some(Commands::Log { activity, duration, exertion, weight }) => {
            let activity = resolve_activity(&activity)?;
            let weight = weight.unwrap_or(config.default_weight_kg);
            let input = WorkoutInput::new(activity, duration, exertion, weight)?;

            let service = WorkoutService::new(repo);
            let record = service.log_workout(&input, today())?;
            println!("{}", history::saved_message(&record));
        },
        Some(Commands::History) => {
            let service = WorkoutService::new(repo);
            let view = summarize(service.history()?, today());
            println!("{}", history::render_history(&view));
        },
        Some(Commands::Chart) => {
            match SummaryUseCase::new(&repo).build(today())? {
                HistoryView::Populated(summary) => stats::run(&summary)?,
                HistoryView::Empty => println!("{}", history::EMPTY_MESSAGE),
            }
        },
        Some(Commands::Activities) => {
            println!("{}", history::render_activities());
        },
        Some(Commands::Tui) | None => {
            tui::run(repo, config.default_weight_kg)?;
        }
    }
    Ok(())
}
