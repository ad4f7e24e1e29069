//! Command-line front end: plays levels in the terminal.

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use tracing::error;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

use rule_grid::core::{DrawRect, SessionConfig, MAX_COLS, MAX_ROWS};
use rule_grid::render::TextRenderer;
use rule_grid::session::SessionRunner;
use rule_grid::turn::{InputSource, LineInput, ScriptedInput};

/// Play rule-grid levels in the terminal.
#[derive(Debug, Parser)]
#[command(name = "rule-grid")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "A puzzle where the words on the board are the rules")]
struct Cli {
    /// A level file to play (repeatable, played in order)
    #[arg(long = "level", value_name = "FILE")]
    levels: Vec<PathBuf>,

    /// Play every file in a directory, sorted by name
    #[arg(long = "levels", value_name = "DIR")]
    levels_dir: Option<PathBuf>,

    /// Replay these moves instead of reading stdin (U/D/L/R or N/S/W/E)
    #[arg(long, value_name = "SEQ")]
    moves: Option<String>,

    /// Columns of indentation before the board
    #[arg(long, default_value_t = 0)]
    left: u32,

    /// Blank lines above the board
    #[arg(long, default_value_t = 0)]
    top: u32,

    /// Default log level, overridden by RUST_LOG
    #[arg(long, value_enum, default_value_t = LogLevel::Warn)]
    log_level: LogLevel,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::ERROR,
            LogLevel::Warn => LevelFilter::WARN,
            LogLevel::Info => LevelFilter::INFO,
            LogLevel::Debug => LevelFilter::DEBUG,
            LogLevel::Trace => LevelFilter::TRACE,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.log_level);

    match run(&cli) {
        Ok(code) => code,
        Err(err) => {
            error!(%err, "session aborted");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

/// Logs go to stderr so they never interleave with the board on stdout.
fn init_logging(level: LogLevel) {
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::from(level).into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn session_config(cli: &Cli) -> rule_grid::Result<SessionConfig> {
    let area = DrawRect::new(cli.left, cli.top, MAX_ROWS as u32, MAX_COLS as u32);
    let mut config = SessionConfig::new().with_draw_area(area);
    for path in &cli.levels {
        config = config.with_level(path);
    }
    if let Some(dir) = &cli.levels_dir {
        config = config.with_levels_dir(dir)?;
    }
    Ok(config)
}

fn run(cli: &Cli) -> rule_grid::Result<ExitCode> {
    let config = session_config(cli)?;

    let mut input: Box<dyn InputSource> = match &cli.moves {
        Some(script) => Box::new(ScriptedInput::parse(script)?),
        None => Box::new(LineInput::new(io::stdin().lock())),
    };
    let mut renderer = TextRenderer::new(io::stdout());

    let report = SessionRunner::run(&config, &mut renderer, input.as_mut(), &mut io::stdout())?;

    Ok(if report.success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
