use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use log::{LevelFilter, debug, error, info};
use nsclean_extends::Config;
use std::io::{BufWriter, Write};
use std::process::ExitCode;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "nsclean")]
#[command(
    about = "Rewrite fully qualified PHP extends clauses to imported short names",
    long_about = None
)]
struct Cli {
    #[command(flatten)]
    config: Config,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logger(cli.config.debug);
    debug!("Parsed CLI arguments: {:?}", cli.config);

    // stdio is blocked by LineWriter, use a BufWriter to reduce syscalls.
    // See https://github.com/rust-lang/rust/issues/60673
    let mut stdout = BufWriter::new(std::io::stdout());

    match run(cli.config, &mut stdout) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report_fatal(&mut stdout, &err);
            ExitCode::FAILURE
        }
    }
}

/// `RUST_LOG` drives verbosity; `--debug` turns on debug output for our crates.
fn init_logger(debug: bool) {
    let mut builder = env_logger::Builder::from_default_env();
    if debug {
        for module in ["nsclean", "nsclean_core", "nsclean_extends"] {
            builder.filter_module(module, LevelFilter::Debug);
        }
    }
    builder.init();
}

fn run<W: Write>(config: Config, stdout: &mut W) -> Result<()> {
    let start = Instant::now();
    info!("Fixing extends clauses under {}", config.target_directory.display());

    let result = nsclean_extends::run_fix_extends(config, stdout)?;
    debug!(
        "Matched {} files, modified {}, skipped {}, failed {}",
        result.files_matched, result.modified, result.skipped, result.failed
    );

    let elapsed_ms = start.elapsed().as_millis();
    writeln!(
        stdout,
        "{} Finished in {}ms on {} files.",
        "●".bright_blue(),
        elapsed_ms.to_string().cyan(),
        result.files_matched.to_string().cyan()
    )?;
    stdout.flush()?;
    Ok(())
}

/// Last stop for any error: human message on stdout, full chain (and backtrace
/// when `RUST_BACKTRACE` is set) on stderr through the logger.
fn report_fatal<W: Write>(stdout: &mut W, err: &anyhow::Error) {
    error!("{:?}", err);
    // Nothing left to report a failed write to.
    let _ = writeln!(stdout, "{} {:#}", "Error:".red().bold(), err);
    let _ = stdout.flush();
}
