mod cli;
mod report;

use clap::Parser;
use cli::{Args, Command};
use damm::{append_check_symbol, check_symbol, is_valid, quasigroup, AlphabetKind};
use report::{CheckReport, TableReport};
use std::process::ExitCode;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Input parsed, but it does not validate
const EXIT_INVALID: u8 = 1;
/// Engine error or bad argument
const EXIT_ERROR: u8 = 2;

fn init_tracing(verbose: bool) {
    let env_filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(env_filter)
        .init();
}

fn emit(json: bool, report: &CheckReport, text: &str) -> Result<(), serde_json::Error> {
    if json {
        println!("{}", serde_json::to_string_pretty(report)?);
    } else {
        println!("{}", text);
    }
    Ok(())
}

fn run(args: Args) -> Result<ExitCode, Box<dyn std::error::Error>> {
    let alphabet: AlphabetKind = args.alphabet;

    match args.command {
        Command::Check { input } => {
            tracing::debug!(%alphabet, len = input.len(), "computing check symbol");
            let symbol = char::from(check_symbol(&alphabet, input.as_bytes())?);
            let mut report = CheckReport::new(alphabet, &input);
            report.check_symbol = Some(symbol.to_string());
            emit(args.json, &report, &symbol.to_string())?;
        }
        Command::Append { input } => {
            tracing::debug!(%alphabet, len = input.len(), "appending check symbol");
            let extended = append_check_symbol(&alphabet, input.as_bytes())?;
            let extended = String::from_utf8(extended)?;
            let mut report = CheckReport::new(alphabet, &input);
            report.check_symbol = extended.chars().last().map(String::from);
            report.output = Some(extended.clone());
            emit(args.json, &report, &extended)?;
        }
        Command::Validate { input } => {
            tracing::debug!(%alphabet, len = input.len(), "validating");
            let valid = is_valid(&alphabet, input.as_bytes())?;
            let mut report = CheckReport::new(alphabet, &input);
            report.valid = Some(valid);
            emit(args.json, &report, if valid { "valid" } else { "invalid" })?;
            if !valid {
                return Ok(ExitCode::from(EXIT_INVALID));
            }
        }
        Command::Tables => {
            let mut reports = Vec::new();
            for order in quasigroup::registered_orders() {
                reports.push(TableReport::from_table(quasigroup::lookup(order)?));
            }
            if args.json {
                println!("{}", serde_json::to_string_pretty(&reports)?);
            } else {
                for report in &reports {
                    println!("{}", report);
                }
            }
            if !reports.iter().all(TableReport::is_sound) {
                tracing::warn!("registered quasigroup table failed verification");
                return Ok(ExitCode::from(EXIT_INVALID));
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.verbose);

    match run(args) {
        Ok(code) => code,
        Err(e) => {
            tracing::warn!(error = %e, "command failed");
            eprintln!("Error: {}", e);
            ExitCode::from(EXIT_ERROR)
        }
    }
}
