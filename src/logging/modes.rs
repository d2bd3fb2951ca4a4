use std::io::IsTerminal;

use clap::ValueEnum;
use tracing_subscriber::EnvFilter;

/// Enum representing the color mode options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ColorMode {
  /// Automatically determine whether to use colors based on TTY detection
  #[default]
  Auto,
  /// Never use colors
  Never,
  /// Always use colors
  Always,
}

impl ColorMode {
  /// Applies this mode to all colored output on stdout.
  ///
  /// `Auto` defers to owo-colors' own terminal detection.
  pub fn apply(self) {
    match self {
      ColorMode::Auto => owo_colors::unset_override(),
      ColorMode::Never => owo_colors::set_override(false),
      ColorMode::Always => owo_colors::set_override(true),
    }
  }

  /// Whether diagnostics written to stderr should carry ANSI codes.
  fn stderr_ansi(self) -> bool {
    match self {
      ColorMode::Auto => std::io::stderr().is_terminal(),
      ColorMode::Never => false,
      ColorMode::Always => true,
    }
  }
}

/// Maps the `-v` count to a tracing level name.
///
/// Nothing below a warning is shown by default.
pub const fn level_for_verbosity(verbose: u8) -> &'static str {
  match verbose {
    0 => "warn",
    1 => "info",
    2 => "debug",
    _ => "trace",
  }
}

/// Initializes the global tracing subscriber.
///
/// `RUST_LOG` takes precedence over the verbosity flag when set. Calling this
/// more than once is harmless; only the first subscriber is installed.
pub fn init_tracing(verbose: u8, color_mode: ColorMode) {
  let filter = EnvFilter::try_from_default_env()
    .unwrap_or_else(|_| EnvFilter::new(format!("apache_license_check={}", level_for_verbosity(verbose))));

  let _ = tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_writer(std::io::stderr)
    .with_ansi(color_mode.stderr_ansi())
    .with_target(false)
    .without_time()
    .try_init();
}
