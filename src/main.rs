//! La Harde TUI - the roller derby club's site in a terminal.
//!
//! A keyboard-driven interface for the club's promotional content: events,
//! photo gallery, membership registration, and contact forms. Runs against
//! the club's backend API, or on built-in demo data with `--demo`.

mod api;
mod app;
mod config;
mod models;
mod source;
mod ui;
mod utils;

use std::io;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::{info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use api::ApiClient;
use app::App;
use config::Config;
use source::{DataSource, FixtureSource, RemoteSource};
use ui::input::handle_input;
use ui::render::render;

/// Timeout for polling terminal events (in milliseconds)
const EVENT_POLL_TIMEOUT_MS: u64 = 100;

/// Initialize the tracing subscriber for logging
fn init_tracing() {
    // Use RUST_LOG env var to control log level (e.g., RUST_LOG=debug)
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if not found)
    let _ = dotenvy::dotenv();

    init_tracing();
    info!("La Harde TUI starting");

    let config = Config::load().unwrap_or_else(|e| {
        warn!(error = %e, "Failed to load config, using defaults");
        Config::default()
    });

    let demo = config.demo_mode || std::env::args().any(|arg| arg == "--demo");

    let source: Arc<dyn DataSource> = if demo {
        info!("Running on built-in demo data");
        Arc::new(FixtureSource::new())
    } else {
        let base_url = config.backend_url();
        info!(url = %base_url, "Using backend API");
        Arc::new(RemoteSource::new(ApiClient::new(base_url)?))
    };

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(source);
    app.refresh_all();

    let result = run_app(&mut terminal, &mut app).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(e) = result {
        eprintln!("Error: {}", e);
    }

    info!("La Harde TUI shutting down");
    Ok(())
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<()> {
    loop {
        terminal.draw(|f| render(f, app))?;

        // Poll with timeout so background refresh results still get applied
        if event::poll(Duration::from_millis(EVENT_POLL_TIMEOUT_MS))? {
            if let Event::Key(key) = event::read()? {
                // Ctrl+C to quit
                if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
                    return Ok(());
                }

                if handle_input(app, key).await? {
                    return Ok(());
                }
            }
        }

        app.drain_events();
    }
}
