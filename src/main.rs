//! Kaizen - Entry Point
//!
//! Initializes logging and the terminal, loads the profile, and runs
//! the event loop.

use std::fs::OpenOptions;
use std::io;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use kaizen::save::{load_profile, Profile};
use kaizen::ui::App;

fn main() -> Result<()> {
    // Log to a file so output never interferes with the TUI
    let log_file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open("kaizen.log")
        .unwrap_or_else(|_| OpenOptions::new().write(true).open("/dev/null").unwrap());

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(log_file)))
        .init();

    log::info!("Starting Kaizen v{}", env!("CARGO_PKG_VERSION"));

    let mut profile = load_profile();

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new();
    let result = run_event_loop(&mut terminal, &mut app, &mut profile);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(ref e) = result {
        log::error!("Exited with error: {}", e);
        eprintln!("Error: {}", e);
    }

    log::info!("Kaizen shut down cleanly");
    result
}

/// Draw, block on input, repeat. Nothing animates, so there is no frame
/// timer; the app only redraws after a key event.
fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    profile: &mut Profile,
) -> Result<()> {
    loop {
        terminal.draw(|frame| app.render(frame, profile))?;

        if let Event::Key(key) = event::read()? {
            // Only handle key press events, not releases
            if key.kind == KeyEventKind::Press && app.handle_input(key, profile)? {
                break;
            }
        }
    }
    Ok(())
}
