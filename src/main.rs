use std::{
    fs::File,
    io::{self, BufWriter, Write},
    num::NonZeroUsize,
    path::PathBuf,
    process::ExitCode,
    time::Instant,
};

use ccx_lexer::{
    config::ScannerConfig,
    errors::errors::{ErrorTip, ScanError},
    lexer::{lexer::Scanner, tokens::TokenKind},
};
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Dump the tokens of a CCX source file, one per line.
#[derive(Parser, Debug)]
#[command(name = "ccx-lex")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Dump the tokens of a CCX source file", long_about = None)]
struct Cli {
    /// Source file to scan
    file: PathBuf,

    /// Enable debug logging
    #[arg(short, long, env = "CCX_LEX_VERBOSE")]
    verbose: bool,

    /// Do not print comment tokens
    #[arg(long)]
    no_comments: bool,

    /// Truncate lexemes longer than this many bytes
    #[arg(long, value_name = "N")]
    max_lexeme: Option<NonZeroUsize>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            display_error(&error);
            ExitCode::FAILURE
        }
    }
}

/// Logs go to stderr so they never mix with the token dump. `RUST_LOG`
/// overrides the level picked by `--verbose`.
fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    let subscriber = fmt::layer()
        .with_writer(io::stderr)
        .with_target(false)
        .without_time();

    // Only fails if a subscriber is already installed.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init();
}

fn run(cli: &Cli) -> Result<(), ScanError> {
    let start = Instant::now();

    let mut config = ScannerConfig::new();
    if let Some(limit) = cli.max_lexeme {
        config = config.with_max_lexeme_len(limit);
    }

    let file = File::open(&cli.file).map_err(|e| ScanError::open(&cli.file, e))?;
    let mut scanner = Scanner::with_config(file, config);

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let mut total = 0usize;
    let mut unknown = 0usize;

    for token in &mut scanner {
        total += 1;
        if token.kind == TokenKind::Unknown {
            unknown += 1;
        }
        if cli.no_comments && token.kind.is_comment() {
            continue;
        }
        writeln!(out, "{}\t{:?}", token.kind, token.value).map_err(ScanError::Write)?;
    }
    out.flush().map_err(ScanError::Write)?;

    scanner.finish()?;

    if unknown > 0 {
        warn!(unknown, "source contains unrecognised input");
    }
    info!(tokens = total, elapsed = ?start.elapsed(), "scanned {}", cli.file.display());

    Ok(())
}

fn display_error(error: &ScanError) {
    if let ErrorTip::None = error.get_tip() {
        eprintln!("Error: {}: {}", error.get_error_name(), error);
    } else {
        eprintln!(
            "Error: {}: {} ({})",
            error.get_error_name(),
            error,
            error.get_tip()
        );
    }
}
