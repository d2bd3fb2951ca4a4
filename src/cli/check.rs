//! # Check Command
//!
//! This module implements the check command: it resolves options from the
//! config file and the command line, streams one result line per file, and
//! turns the aggregate outcome into the process exit status.

use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Instant;

use anyhow::{Context, Result};
use apache_license_check::config::{Config, load_config};
use apache_license_check::logging::{ColorMode, init_tracing};
use apache_license_check::output::print_file_line;
use apache_license_check::processor::{CheckOptions, CheckSummary, FileCheck, Processor};
use apache_license_check::report::{ReportFormat, ReportGenerator, ReportSummary};
use clap::Args;
use tracing::{debug, info};

/// Arguments for the check command
#[derive(Args, Debug, Default)]
pub struct CheckArgs {
  /// Path(s) of files or directories to check. Directories are checked
  /// recursively [default: current directory]
  #[arg(value_name = "PATH")]
  pub paths: Vec<PathBuf>,

  /// Also check hidden files and directories
  #[arg(long)]
  pub include_hidden: bool,

  /// Require headers in empty files (e.g. empty __init__.py), which are
  /// skipped by default
  #[arg(long)]
  pub include_empty: bool,

  /// Path(s) of files or directories to ignore
  #[arg(long, value_name = "PATH", num_args = 1..)]
  pub exclude: Vec<PathBuf>,

  /// Check that the header has a copyright notice containing the provided
  /// substring
  #[arg(long, value_name = "SUBSTRING")]
  pub copyright: Option<String>,

  /// Path to config file (default: .apache-license-check.toml in the current
  /// directory)
  #[arg(long, value_name = "FILE")]
  pub config: Option<PathBuf>,

  /// Ignore config file even if present
  #[arg(long, conflicts_with = "config")]
  pub no_config: bool,

  /// Control when to use colored output (auto, never, always)
  #[arg(
    long,
    value_name = "WHEN",
    num_args = 0..=1,
    default_value_t = ColorMode::Auto,
    default_missing_value = "always",
    value_enum
  )]
  pub colors: ColorMode,

  /// Increase diagnostic verbosity on stderr (-v info, -vv debug, -vvv trace)
  #[arg(short, long, action = clap::ArgAction::Count)]
  pub verbose: u8,

  /// Write a JSON report of every checked file to the specified path
  #[arg(long, value_name = "OUTPUT")]
  pub report_json: Option<PathBuf>,

  /// Write a CSV report of every checked file to the specified path
  #[arg(long, value_name = "OUTPUT")]
  pub report_csv: Option<PathBuf>,
}

impl CheckArgs {
  /// Merges the command line over the config file.
  ///
  /// Flags can only switch behavior on, `--copyright` replaces the configured
  /// substring, and `--exclude` paths are added to the configured ones.
  fn check_options(&self, config: Option<Config>) -> CheckOptions {
    let mut options = config.map(Config::into_options).unwrap_or_default();

    options.include_hidden |= self.include_hidden;
    options.include_empty |= self.include_empty;
    options.excludes.extend(self.exclude.iter().cloned());
    if let Some(ref copyright) = self.copyright {
      options.copyright = Some(copyright.clone());
    }

    options
  }

  /// Requested reports, in the order they are written.
  fn reports(&self) -> Vec<(ReportFormat, &Path)> {
    [
      (ReportFormat::Json, self.report_json.as_deref()),
      (ReportFormat::Csv, self.report_csv.as_deref()),
    ]
    .into_iter()
    .filter_map(|(format, path)| path.map(|p| (format, p)))
    .collect()
  }
}

/// Run the check command with the given arguments
pub fn run_check(args: CheckArgs) -> Result<ExitCode> {
  // Initialize tracing subscriber for diagnostics on stderr
  init_tracing(args.verbose, args.colors);
  args.colors.apply();

  let current_dir = std::env::current_dir().context("Failed to get current directory")?;
  let config = load_config(args.config.as_deref(), &current_dir, args.no_config)?;
  if config.is_some() {
    debug!("Using configuration file");
  }

  let options = args.check_options(config);
  debug!("Check options: {:?}", options);

  let paths = if args.paths.is_empty() {
    vec![current_dir]
  } else {
    args.paths.clone()
  };

  let reports = args.reports();
  let mut checks: Vec<FileCheck> = Vec::new();

  let start_time = Instant::now();
  let processor = Processor::new(options);
  let summary = processor.process(&paths, |check| {
    print_file_line(check).context("Failed to write to stdout")?;
    if !reports.is_empty() {
      checks.push(check.clone());
    }
    Ok(())
  })?;
  let elapsed = start_time.elapsed();

  write_reports(&reports, &checks, summary, elapsed);

  Ok(exit_code(&summary))
}

/// Writes each requested report. A failed report is reported on stderr but
/// does not change the outcome of the check.
fn write_reports(
  reports: &[(ReportFormat, &Path)],
  checks: &[FileCheck],
  summary: CheckSummary,
  elapsed: std::time::Duration,
) {
  if reports.is_empty() {
    return;
  }

  let report_summary = ReportSummary::new(summary, elapsed);
  for (format, output_path) in reports {
    let report_generator = ReportGenerator::new(*format, output_path);
    if let Err(e) = report_generator.generate(checks, &report_summary) {
      eprintln!("Error generating {format} report: {e:#}");
    } else {
      info!("Generated {} report at {}", format, output_path.display());
    }
  }
}

const fn exit_code(summary: &CheckSummary) -> ExitCode {
  if summary.success() {
    ExitCode::SUCCESS
  } else {
    ExitCode::FAILURE
  }
}

#[cfg(test)]
mod tests {
  use clap::Parser;

  use super::*;

  #[derive(Parser)]
  struct TestCli {
    #[command(flatten)]
    args: CheckArgs,
  }

  fn parse(argv: &[&str]) -> CheckArgs {
    TestCli::try_parse_from(std::iter::once("apache-license-check").chain(argv.iter().copied()))
      .expect("arguments should parse")
      .args
  }

  #[test]
  fn test_defaults() {
    let args = parse(&[]);
    assert!(args.paths.is_empty());
    assert!(!args.include_hidden);
    assert!(!args.include_empty);
    assert_eq!(args.colors, ColorMode::Auto);
    assert_eq!(args.check_options(None), CheckOptions::default());
  }

  #[test]
  fn test_exclude_takes_multiple_values() {
    let args = parse(&["src", "--exclude", "build", "dist", "--copyright", "Acme"]);
    assert_eq!(args.paths, vec![PathBuf::from("src")]);
    assert_eq!(args.exclude, vec![PathBuf::from("build"), PathBuf::from("dist")]);
    assert_eq!(args.copyright.as_deref(), Some("Acme"));
  }

  #[test]
  fn test_exclude_requires_a_value() {
    let result = TestCli::try_parse_from(["apache-license-check", "--exclude"]);
    assert!(result.is_err());
  }

  #[test]
  fn test_bare_colors_flag_means_always() {
    assert_eq!(parse(&["--colors"]).colors, ColorMode::Always);
    assert_eq!(parse(&["--colors=never"]).colors, ColorMode::Never);
  }

  #[test]
  fn test_cli_merges_over_config() {
    let config = Config {
      extensions: Some(vec!["pyi".to_string()]),
      exclude: vec![PathBuf::from("vendor")],
      include_hidden: true,
      include_empty: false,
      copyright: Some("Config Corp".to_string()),
    };

    let args = parse(&["--include-empty", "--exclude", "build", "--copyright", "Cli Corp"]);
    let options = args.check_options(Some(config));

    assert!(options.include_hidden);
    assert!(options.include_empty);
    assert_eq!(options.excludes, vec![PathBuf::from("vendor"), PathBuf::from("build")]);
    assert_eq!(options.copyright.as_deref(), Some("Cli Corp"));
    assert_eq!(options.extensions, vec!["pyi".to_string()]);
  }

  #[test]
  fn test_requested_reports() {
    assert!(parse(&[]).reports().is_empty());

    let args = parse(&["--report-csv", "out.csv", "--report-json", "out.json"]);
    let reports = args.reports();
    assert_eq!(reports.len(), 2);
    assert_eq!(reports[0], (ReportFormat::Json, Path::new("out.json")));
    assert_eq!(reports[1], (ReportFormat::Csv, Path::new("out.csv")));
  }

  #[test]
  fn test_exit_code_follows_summary() {
    let debug = |code: ExitCode| format!("{code:?}");

    let mut summary = CheckSummary::new();
    summary.files_empty = 2;
    assert_eq!(debug(exit_code(&summary)), debug(ExitCode::SUCCESS));
    summary.files_failed = 1;
    assert_eq!(debug(exit_code(&summary)), debug(ExitCode::FAILURE));
  }
}
