// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::config::{DEFAULT_MIDDLE_THRESHOLD, DEFAULT_TIP_THRESHOLD, PostureConfig};
use crate::locale::Language;

/// CLI arguments parser.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
#[command(after_help = r#"Check Options:
    --keypoints, -k <FILE>      Recorded keypoint session (JSON)
    --lang <LANG>               Feedback language (en, ja) [default: en]
    --min-conf <CONF>           Minimum keypoint confidence [default: 0]
    --tip-threshold <RATIO>     Relative distance above which the hand is at the tip [default: 1.1]
    --middle-threshold <RATIO>  Relative distance above which the hand is at the middle [default: 0.7]
    --clamp                     Clamp angle range interpolation to the reference ranges
    --json                      Print one JSON verdict per frame
    --verbose <BOOL>            Show per-frame feedback [default: true]
    --quiet, -q                 Only print warnings, errors and JSON output

Examples:
    bowing-posture check --keypoints session.json
    bowing-posture check -k session.json --lang ja --min-conf 0.3
    bowing-posture check -k session.json --json --verbose false
    bowing-posture ranges --steps 20"#)]
pub struct Cli {
    #[command(subcommand)]
    /// Subcommand to execute.
    pub command: Commands,
}

/// Commands for the CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Check bowing posture over a recorded keypoint session
    Check(CheckArgs),
    /// Print the acceptable elbow angle range along the bow
    Ranges(RangesArgs),
}

/// Arguments for the check command.
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Recorded keypoint session (JSON)
    #[arg(short, long)]
    pub keypoints: PathBuf,

    /// Feedback language (en, ja)
    #[arg(long, default_value = "en")]
    pub lang: Language,

    /// Minimum keypoint confidence for a joint to count as detected
    #[arg(long, default_value_t = 0.0)]
    pub min_conf: f32,

    /// Relative wrist distance above which the hand is at the tip
    #[arg(long, default_value_t = DEFAULT_TIP_THRESHOLD)]
    pub tip_threshold: f32,

    /// Relative wrist distance above which the hand is at the middle
    #[arg(long, default_value_t = DEFAULT_MIDDLE_THRESHOLD)]
    pub middle_threshold: f32,

    /// Clamp angle range interpolation to the reference ranges
    #[arg(long, default_value_t = false)]
    pub clamp: bool,

    /// Print one JSON verdict per frame
    #[arg(long, default_value_t = false)]
    pub json: bool,

    /// Show per-frame feedback
    #[arg(long, default_value_t = true, action = clap::ArgAction::Set)]
    pub verbose: bool,

    /// Only print warnings, errors and JSON output
    #[arg(short, long, default_value_t = false)]
    pub quiet: bool,
}

impl CheckArgs {
    /// Evaluation settings selected on the command line.
    #[must_use]
    pub const fn to_config(&self) -> PostureConfig {
        PostureConfig {
            tip_threshold: self.tip_threshold,
            middle_threshold: self.middle_threshold,
            min_confidence: self.min_conf,
            clamp_interpolation: self.clamp,
            language: self.lang,
            ..PostureConfig::DEFAULT
        }
    }
}

/// Arguments for the ranges command.
#[derive(Args, Debug)]
pub struct RangesArgs {
    /// Number of intervals between the frog and the tip
    #[arg(long, default_value_t = 10, value_parser = clap::value_parser!(u32).range(1..=1000))]
    pub steps: u32,

    /// Clamp angle range interpolation to the reference ranges
    #[arg(long, default_value_t = false)]
    pub clamp: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_check_args_defaults() {
        let args = Cli::parse_from(["app", "check", "--keypoints", "session.json"]);
        match args.command {
            Commands::Check(check_args) => {
                assert_eq!(check_args.keypoints, PathBuf::from("session.json"));
                assert_eq!(check_args.lang, Language::English);
                assert!(check_args.min_conf.abs() < f32::EPSILON);
                assert!(!check_args.clamp);
                assert!(!check_args.json);
                assert!(check_args.verbose);
                assert!(!check_args.quiet);
                assert_eq!(check_args.to_config(), PostureConfig::default());
            }
            Commands::Ranges(_) => panic!("expected check command"),
        }
    }

    #[test]
    fn test_check_args_custom() {
        let args = Cli::parse_from([
            "app",
            "check",
            "-k",
            "take2.json",
            "--lang",
            "ja",
            "--min-conf",
            "0.3",
            "--tip-threshold",
            "1.2",
            "--clamp",
            "--verbose",
            "false",
        ]);
        match args.command {
            Commands::Check(check_args) => {
                let config = check_args.to_config();
                assert_eq!(config.language, Language::Japanese);
                assert!((config.min_confidence - 0.3).abs() < f32::EPSILON);
                assert!((config.tip_threshold - 1.2).abs() < f32::EPSILON);
                assert!((config.middle_threshold - 0.7).abs() < f32::EPSILON);
                assert!(config.clamp_interpolation);
                assert!(!check_args.verbose);
            }
            Commands::Ranges(_) => panic!("expected check command"),
        }
    }

    #[test]
    fn test_invalid_language_rejected() {
        let result = Cli::try_parse_from(["app", "check", "-k", "s.json", "--lang", "fr"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_ranges_args() {
        let args = Cli::parse_from(["app", "ranges", "--steps", "4"]);
        match args.command {
            Commands::Ranges(ranges_args) => {
                assert_eq!(ranges_args.steps, 4);
                assert!(!ranges_args.clamp);
            }
            Commands::Check(_) => panic!("expected ranges command"),
        }

        assert!(Cli::try_parse_from(["app", "ranges", "--steps", "0"]).is_err());
    }
}
