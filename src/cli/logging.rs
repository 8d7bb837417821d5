// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Console output for the CLI.
//!
//! Output goes through the macros below, filtered by a process-wide [`Verbosity`].
//! Warnings and errors always reach stderr.

use std::sync::atomic::{AtomicU8, Ordering};

/// How much the CLI prints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[repr(u8)]
pub enum Verbosity {
    /// Only warnings, errors and requested data output.
    Quiet = 0,
    /// Headers and summaries.
    Normal = 1,
    /// Per-frame feedback as well.
    Verbose = 2,
}

impl Verbosity {
    const fn from_u8(value: u8) -> Self {
        match value {
            0 => Self::Quiet,
            1 => Self::Normal,
            _ => Self::Verbose,
        }
    }

    /// Level selected by the `--verbose` and `--quiet` flags.
    #[must_use]
    pub const fn from_flags(verbose: bool, quiet: bool) -> Self {
        if quiet {
            Self::Quiet
        } else if verbose {
            Self::Verbose
        } else {
            Self::Normal
        }
    }
}

static VERBOSITY: AtomicU8 = AtomicU8::new(Verbosity::Verbose as u8);

/// Set the global verbosity.
pub fn set_verbosity(verbosity: Verbosity) {
    VERBOSITY.store(verbosity as u8, Ordering::Relaxed);
}

/// Current global verbosity.
pub fn verbosity() -> Verbosity {
    Verbosity::from_u8(VERBOSITY.load(Ordering::Relaxed))
}

/// Whether output at `level` should be printed.
pub fn enabled(level: Verbosity) -> bool {
    verbosity() >= level
}

/// Check if per-frame output is enabled.
pub fn is_verbose() -> bool {
    enabled(Verbosity::Verbose)
}

/// Macro for standard info messages.
#[macro_export]
macro_rules! info {
    ($($arg:tt)*) => {
        if $crate::cli::logging::enabled($crate::cli::logging::Verbosity::Normal) {
            println!("{}", format!($($arg)*));
        }
    }
}

/// Macro for warning messages.
#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {{
        use colored::Colorize;
        eprintln!("{} {}", "WARNING ⚠️".yellow().bold(), format!($($arg)*));
    }}
}

/// Macro for error messages.
#[macro_export]
macro_rules! error {
    ($($arg:tt)*) => {{
        use colored::Colorize;
        eprintln!("{} {}", "Error:".red().bold(), format!($($arg)*));
    }}
}

/// Macro for verbose messages.
#[macro_export]
macro_rules! verbose {
    ($($arg:tt)*) => {
        if $crate::cli::logging::is_verbose() {
            println!("{}", format!($($arg)*));
        }
    }
}

/// Macro for section headers.
#[macro_export]
macro_rules! section {
    ($($arg:tt)*) => {{
        use colored::Colorize;
        if $crate::cli::logging::enabled($crate::cli::logging::Verbosity::Normal) {
            println!();
            println!("{}", format!($($arg)*).cyan().bold());
        }
    }}
}

/// Macro for per-frame posture feedback.
///
/// Acceptable posture prints green, anything else yellow.
#[macro_export]
macro_rules! feedback {
    ($ok:expr, $($arg:tt)*) => {{
        use colored::Colorize;
        if $crate::cli::logging::is_verbose() {
            let line = format!($($arg)*);
            if $ok {
                println!("{}", line.green());
            } else {
                println!("{}", line.yellow());
            }
        }
    }}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbosity_levels() {
        assert_eq!(Verbosity::from_flags(true, false), Verbosity::Verbose);
        assert_eq!(Verbosity::from_flags(false, false), Verbosity::Normal);
        assert_eq!(Verbosity::from_flags(true, true), Verbosity::Quiet);
        assert!(Verbosity::Quiet < Verbosity::Normal);
        assert!(Verbosity::Normal < Verbosity::Verbose);
    }

    #[test]
    fn test_verbosity_round_trips_through_u8() {
        for level in [Verbosity::Quiet, Verbosity::Normal, Verbosity::Verbose] {
            assert_eq!(Verbosity::from_u8(level as u8), level);
        }
        assert_eq!(Verbosity::from_u8(9), Verbosity::Verbose);
    }
}
