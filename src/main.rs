mod app;
mod domain;
mod input;
mod persistence;
mod report;
mod timer;
mod ui;

use anyhow::Result;
use app::AppState;
use clap::{Parser, Subcommand};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use domain::SubjectList;
use persistence::{
    data_file, ensure_swot_dir, get_swot_dir, init_local_swot, load_metadata, load_store, meta_file,
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;

/// Event poll timeout. The running-timer readout is recomputed on every
/// draw, so this only bounds how often the screen refreshes.
const TICK: Duration = Duration::from_millis(250);

#[derive(Parser)]
#[command(name = "swot")]
#[command(about = "A terminal-based study time tracker with per-subject tasks and analytics", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a local .swot directory in the current directory
    Init,
    /// Generate the study analytics report from the persisted store
    Report {
        /// Output file path. Defaults to ~/.swot/report.txt
        #[arg(short, long)]
        output: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Init) => {
            let swot_dir = init_local_swot()?;
            println!("Initialized swot directory: {}", swot_dir.display());
            println!();
            println!("Swot will now use this local directory for subject storage.");
            println!("Run 'swot' to start tracking study time.");
            Ok(())
        }
        Some(Commands::Report { output }) => {
            let output_path = output.map(std::path::PathBuf::from);
            let report_path = report::generate_report(output_path)?;
            println!("Report generated: {}", report_path.display());
            Ok(())
        }
        None => run_tui(),
    }
}

fn run_tui() -> Result<()> {
    ensure_swot_dir()?;

    // Show which directory we're using
    let swot_dir = get_swot_dir()?;
    eprintln!("Using swot directory: {}", swot_dir.display());

    let data_path = data_file()?;
    let meta_path = meta_file()?;

    // Load the store; malformed rows and I/O problems are diagnostics, not
    // failures, and the app starts with whatever decoded cleanly
    let loaded = load_store(&data_path);
    let mut load_notices = Vec::new();
    if let Some(notice) = loaded.io_notice {
        eprintln!("Warning: {}", notice);
        load_notices.push(notice);
    }
    for warning in &loaded.warnings {
        eprintln!("Warning: {}", warning);
        load_notices.push(warning.to_string());
    }

    let subjects = SubjectList::from_subjects(loaded.subjects);
    let meta = load_metadata(&meta_path).unwrap_or_default();
    let mut app = AppState::new(subjects, load_notices, meta, data_path, meta_path);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // Commit any in-flight measurement, then save on exit
    app.stop_timer_if_running();
    if let Err(e) = app.save() {
        eprintln!("Error saving data: {:#}", e);
    }

    if let Err(err) = result {
        eprintln!("Error: {}", err);
    }

    Ok(())
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut AppState,
) -> Result<()> {
    loop {
        terminal.draw(|f| ui::render(f, app))?;

        // Poll with a timeout so the timer readout keeps refreshing
        if event::poll(TICK)? {
            if let Event::Key(key) = event::read()? {
                // Only process key press events (ignore key release)
                if key.kind == KeyEventKind::Press {
                    let should_quit = input::handle_key(app, key)?;
                    if should_quit {
                        return Ok(());
                    }
                }
            }
        }
    }
}
