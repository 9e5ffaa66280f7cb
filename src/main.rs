use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use raise_to_four::config::AppConfig;
use raise_to_four::ui::App;

/// Play Raise To Four in the terminal.
#[derive(Parser)]
#[command(name = "raise-to-four", about = "Two-player drop-four board game")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "config.toml")]
    config: PathBuf,

    /// Print the default configuration as TOML and exit
    #[arg(long)]
    print_default_config: bool,

    /// Prefill the first player's name
    #[arg(long, default_value = "")]
    player1: String,

    /// Prefill the second player's name
    #[arg(long, default_value = "")]
    player2: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.print_default_config {
        print!("{}", AppConfig::default_toml());
        return Ok(());
    }

    let config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    raise_to_four::logging::init(&config.logging).context("initialising logging")?;

    let app = App::new(config, cli.player1, cli.player2);
    run(app).context("running terminal UI")
}

fn run(mut app: App) -> io::Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = app.run(&mut terminal);

    // Restore terminal; always runs, even on error
    let _ = disable_raw_mode();
    let _ = execute!(terminal.backend_mut(), LeaveAlternateScreen);
    let _ = terminal.show_cursor();

    if let Err(err) = &res {
        tracing::error!(%err, "terminal UI failed");
    }
    res
}
