use std::fs::File;
use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use connect_four::config::{AppConfig, LoggingConfig};
use connect_four::game::GameEngine;
use connect_four::ui::{plain, App};

/// Play Connect Four in the terminal.
#[derive(Parser)]
#[command(name = "connect_four", about = "Two-player Connect Four")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "connect_four.toml")]
    config: PathBuf,

    /// Read moves line by line from stdin instead of the interactive UI
    #[arg(long)]
    plain: bool,

    /// Print the default configuration as TOML and exit
    #[arg(long)]
    print_default_config: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.print_default_config {
        print!("{}", AppConfig::default_toml());
        return Ok(());
    }

    let config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;
    init_logging(&config.logging)?;
    if !cli.config.exists() {
        log::warn!("config file '{}' not found, using defaults", cli.config.display());
    }
    log::info!("starting connect four (plain: {})", cli.plain);

    if cli.plain {
        let mut engine = GameEngine::new();
        plain::run(&mut engine, io::stdin().lock(), io::stdout().lock())
            .context("running plain front-end")?;
        return Ok(());
    }

    run_tui(&config).context("running terminal UI")
}

/// The UI owns the terminal, so log records only go to the configured file.
fn init_logging(config: &LoggingConfig) -> Result<()> {
    let level = config.level_filter()?;
    let file = File::create(&config.file)
        .with_context(|| format!("creating log file {}", config.file.display()))?;
    let log_config = simplelog::ConfigBuilder::new()
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    simplelog::WriteLogger::init(level, log_config, file).context("initializing logger")?;
    Ok(())
}

type Tui = Terminal<CrosstermBackend<io::Stdout>>;

fn run_tui(config: &AppConfig) -> io::Result<()> {
    let mut terminal = enter_tui()?;
    let result = App::new(&config.ui).run(&mut terminal);
    // Leave raw mode even when the app failed, so the error is readable
    leave_tui(&mut terminal);
    result
}

fn enter_tui() -> io::Result<Tui> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    Terminal::new(CrosstermBackend::new(stdout))
}

fn leave_tui(terminal: &mut Tui) {
    if let Err(e) = disable_raw_mode() {
        log::warn!("failed to disable raw mode: {e}");
    }
    if let Err(e) = execute!(terminal.backend_mut(), LeaveAlternateScreen) {
        log::warn!("failed to leave alternate screen: {e}");
    }
    if let Err(e) = terminal.show_cursor() {
        log::warn!("failed to restore cursor: {e}");
    }
}
