//! signup-tui - registration form in the terminal
//!
//! A Ratatui-based form that collects name, e-mail, password and a list of
//! technologies, validates them against a declarative schema and shows the
//! normalized payload as pretty-printed JSON.

mod app;
mod cli;
mod clipboard;
mod config;
mod platform;
mod state;
mod ui;
mod validation;

use anyhow::{Context, Result};
use app::App;
use clap::Parser;
use cli::Cli;
use clipboard::SystemClipboard;
use config::TuiConfig;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const POLL_INTERVAL: Duration = Duration::from_millis(100);

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "signup_tui=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();

    let mut config = TuiConfig::load().context("failed to load config")?;
    if let Some(variant) = cli.variant {
        config.variant = Some(variant);
    }

    if cli.write_config {
        let path = TuiConfig::config_path().context("no config directory on this platform")?;
        config.save_to(&path)?;
        println!("Wrote {}", path.display());
        return Ok(());
    }

    let variant = config.variant();
    tracing::info!("Starting with {variant} form");
    let mut app = App::new(
        variant,
        &config.schema_settings(),
        Box::new(SystemClipboard),
    );

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // Handle any errors
    if let Err(err) = result {
        eprintln!("Error: {err:?}");
        std::process::exit(1);
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|frame| ui::draw(frame, app))?;

        if event::poll(POLL_INTERVAL)? {
            if let Event::Key(key) = event::read()? {
                // Windows reports releases too
                if key.kind != KeyEventKind::Press {
                    continue;
                }

                // Global quit: Ctrl+C
                if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL)
                {
                    return Ok(());
                }

                app.handle_key(key)?;
            }
        }

        if app.should_quit() {
            return Ok(());
        }
    }
}
