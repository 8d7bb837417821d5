// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! CLI module for checking bowing posture.
//!
//! This module contains the command-line interface logic, including argument parsing,
//! console output and the `check` and `ranges` commands.

// Modules
/// CLI arguments.
pub mod args;

/// Posture check over a recorded session.
pub mod check;

/// Console output macros and verbosity.
pub mod logging;

/// Angle range table.
pub mod ranges;
