use std::fs;
use std::path::{Component, Path, PathBuf};
use std::process;

use balancer_core::core_api::{BalanceReport, CoreError, Engine};
use clap::{ArgAction, Parser};
use serde::Serialize;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(
    name = "vcmi-balancer",
    version = "1.0",
    about = "Calculates AI and Fight values of creatures in VCMI and balances their stats.",
    long_about = "Calculates AI and Fight values of creatures in VCMI and balances their stats.\n\
                  Based on the GrayFace and Macron1 formulas (http://wforum.heroes35.net/).",
    disable_version_flag = true
)]
struct Cli {
    /// Creature JSON files, or directories holding them
    #[arg(value_name = "PATH", required = true)]
    paths: Vec<PathBuf>,
    /// Directory the balanced files are written under
    #[arg(short, long, value_name = "DIR", default_value = "balanced")]
    output: PathBuf,
    /// Print a JSON report per document instead of "Done."
    #[arg(long)]
    json: bool,
    #[arg(short = 'v', long, action = ArgAction::Version)]
    version: Option<bool>,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
enum DocumentResult {
    Balanced {
        path: PathBuf,
        output: PathBuf,
        report: BalanceReport,
    },
    Failed {
        path: PathBuf,
        error: String,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let engine = Engine::new();
    let mut results = Vec::new();

    for path in &cli.paths {
        let inputs = match collect_inputs(path) {
            Ok(Some(inputs)) => inputs,
            Ok(None) => {
                let warning = format!("Warning: {} is not file nor directory", path.display());
                // stdout carries the JSON array in --json mode
                if cli.json {
                    eprintln!("{warning}");
                } else {
                    println!("{warning}");
                }
                continue;
            }
            Err(e) => {
                eprintln!("Error reading {}: {e}", path.display());
                results.push(DocumentResult::Failed {
                    path: path.clone(),
                    error: e.to_string(),
                });
                continue;
            }
        };

        for input in inputs {
            let result = match balance_file(&engine, &input, &cli.output) {
                Ok((output, report)) => {
                    info!(input = %input.display(), output = %output.display(), "balanced");
                    DocumentResult::Balanced {
                        path: input,
                        output,
                        report,
                    }
                }
                Err(e) => {
                    eprintln!("Error balancing {}: {e}", input.display());
                    DocumentResult::Failed {
                        path: input,
                        error: e.to_string(),
                    }
                }
            };
            results.push(result);
        }
    }

    let failed = results
        .iter()
        .any(|r| matches!(r, DocumentResult::Failed { .. }));

    if cli.json {
        let rendered = serde_json::to_string_pretty(&results).unwrap_or_else(|e| {
            eprintln!("Error rendering JSON output: {e}");
            process::exit(1);
        });
        println!("{rendered}");
    } else {
        println!("Done.");
    }

    if failed {
        process::exit(1);
    }
}

/// Files to balance for one command-line path.
///
/// A directory contributes its regular files (not recursively) in name order.
/// `None` means the path is neither a file nor a directory.
fn collect_inputs(path: &Path) -> Result<Option<Vec<PathBuf>>, CoreError> {
    if path.is_file() {
        return Ok(Some(vec![path.to_path_buf()]));
    }
    if !path.is_dir() {
        return Ok(None);
    }

    let mut files = Vec::new();
    for entry in fs::read_dir(path)? {
        let entry_path = entry?.path();
        if entry_path.is_file() {
            files.push(entry_path);
        }
    }
    files.sort();
    debug!(dir = %path.display(), count = files.len(), "collected directory");
    Ok(Some(files))
}

fn balance_file(
    engine: &Engine,
    input: &Path,
    output_root: &Path,
) -> Result<(PathBuf, BalanceReport), CoreError> {
    let text = fs::read_to_string(input)?;
    let outcome = engine.balance_text(&text)?;

    let output = output_path(output_root, input);
    if let Some(parent) = output.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&output, outcome.document.to_text())?;
    Ok((output, outcome.report))
}

/// Mirrors `input` under `output_root`, dropping root, prefix, `.` and `..`
/// components so the result always stays inside the output directory.
fn output_path(output_root: &Path, input: &Path) -> PathBuf {
    let mut out = output_root.to_path_buf();
    for component in input.components() {
        if let Component::Normal(part) = component {
            out.push(part);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_path_mirrors_relative_input() {
        assert_eq!(
            output_path(Path::new("balanced"), Path::new("config/creatures/castle.json")),
            PathBuf::from("balanced/config/creatures/castle.json")
        );
    }

    #[test]
    fn output_path_stays_under_root() {
        assert_eq!(
            output_path(Path::new("out"), Path::new("/abs/../x/./y.json")),
            PathBuf::from("out/abs/x/y.json")
        );
    }

    #[test]
    fn version_flag_is_lowercase_v() {
        let err = Cli::try_parse_from(["vcmi-balancer", "-v"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayVersion);
    }

    #[test]
    fn at_least_one_path_is_required() {
        assert!(Cli::try_parse_from(["vcmi-balancer"]).is_err());
        let cli = Cli::try_parse_from(["vcmi-balancer", "a.json", "dir"]).unwrap();
        assert_eq!(cli.paths.len(), 2);
        assert_eq!(cli.output, PathBuf::from("balanced"));
        assert!(!cli.json);
    }
}
