use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::{debug, warn};

use semverx::config::Config;
use semverx::version::{Range, Version, compare, par_sort_versions};

#[derive(Parser)]
#[command(name = "semverx")]
#[command(version, about = "Parse, compare and range-match versions")]
struct Cli {
    /// JSON configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the canonical form of each version
    Parse { versions: Vec<String> },
    /// Print -1, 0 or 1
    Compare { a: String, b: String },
    /// Print whether VERSION satisfies RANGE; exits with 1 if it does not
    Satisfies { version: String, range: String },
    /// Sort versions read from stdin, one per line
    Sort,
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    let config = match cli.config.as_deref() {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    semverx::logging::init(&config.log)?;

    let mut out = io::stdout().lock();
    match cli.command {
        Command::Parse { versions } => {
            let mut failed = false;
            for text in versions {
                match Version::parse(&text) {
                    Ok(version) => writeln!(out, "{version}")?,
                    Err(e) => {
                        failed = true;
                        writeln!(out, "{text}: {e}")?;
                    }
                }
            }
            Ok(if failed { ExitCode::FAILURE } else { ExitCode::SUCCESS })
        }
        Command::Compare { a, b } => {
            let a = Version::parse(&a).with_context(|| format!("invalid version '{a}'"))?;
            let b = Version::parse(&b).with_context(|| format!("invalid version '{b}'"))?;
            writeln!(out, "{}", compare(&a, &b))?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Satisfies { version, range } => {
            let parsed = Version::parse(&version)
                .with_context(|| format!("invalid version '{version}'"))?;
            let range = Range::parse(&range).with_context(|| format!("invalid range '{range}'"))?;
            let satisfied = range.is_satisfied_by(&parsed);
            debug!(%parsed, ?range, satisfied, "checked range");
            writeln!(out, "{satisfied}")?;
            Ok(if satisfied { ExitCode::SUCCESS } else { ExitCode::FAILURE })
        }
        Command::Sort => {
            let mut versions = Vec::new();
            for line in io::stdin().lock().lines() {
                let line = line?;
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                match Version::parse(line) {
                    Ok(version) => versions.push(version),
                    Err(e) => warn!("Skipping '{}': {}", line, e),
                }
            }
            par_sort_versions(&mut versions, &config.sort);
            for version in versions {
                writeln!(out, "{version}")?;
            }
            Ok(ExitCode::SUCCESS)
        }
    }
}
