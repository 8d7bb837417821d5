// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

use std::io::{self, Write};

use image::DynamicImage;
use serde::Serialize;

use crate::cli::args::CheckArgs;
use crate::cli::logging::{self, Verbosity};
use crate::error::Result;
use crate::posture::{PostureStatus, PostureVerdict};
use crate::source::{KeypointSource, RecordedSource};
use crate::{
    BowPosition, PostureEvaluator, Recording, SessionSummary, VERSION, feedback, info, section,
    verbose, warn,
};

/// One line of `--json` output.
#[derive(Debug, Serialize)]
struct FrameReport<'a> {
    frame: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    time: Option<f32>,
    #[serde(flatten)]
    verdict: &'a PostureVerdict,
}

/// Replay a recorded session through the posture evaluator, printing to stdout.
///
/// # Errors
///
/// Returns an error if the recording cannot be loaded, the options are invalid, or
/// output cannot be written.
pub fn run_check(args: &CheckArgs) -> Result<SessionSummary> {
    let stdout = io::stdout();
    check_session(args, &mut stdout.lock())
}

/// Verbosity for a check run. `--json` keeps stdout free of anything but verdicts.
#[must_use]
pub const fn check_verbosity(args: &CheckArgs) -> Verbosity {
    if args.json {
        Verbosity::Quiet
    } else {
        Verbosity::from_flags(args.verbose, args.quiet)
    }
}

/// Replay a recorded session, writing JSON verdicts to `out` when `--json` is set.
///
/// Human-readable feedback goes through the logging macros.
///
/// # Errors
///
/// Returns an error if the recording cannot be loaded, the options are invalid, or
/// writing to `out` fails.
pub fn check_session<W: Write>(args: &CheckArgs, out: &mut W) -> Result<SessionSummary> {
    logging::set_verbosity(check_verbosity(args));

    let config = args.to_config();
    config.validate()?;
    let evaluator = PostureEvaluator::new(config);
    let language = config.language;

    let recording = Recording::load(&args.keypoints)?;
    info!("Bowing Posture {VERSION} 🎻 {}", args.keypoints.display());
    verbose!(
        "{} frames, thresholds tip>{} middle>{}, min confidence {}",
        recording.len(),
        config.tip_threshold,
        config.middle_threshold,
        config.min_confidence
    );
    if recording.is_empty() {
        warn!("Recording '{}' has no frames", args.keypoints.display());
    }

    let timestamps: Vec<Option<f32>> = (0..recording.len())
        .map(|i| recording.timestamp(i))
        .collect();
    let mut source = RecordedSource::from(recording);
    // Recorded frames carry no pixels; the source ignores the image it is handed.
    let blank = DynamicImage::new_rgb8(1, 1);

    let mut summary = SessionSummary::new();
    let mut index = 0;
    while !source.is_exhausted() {
        let frame = source.detect(&blank)?;
        let verdict = evaluator.check_frame(frame.as_ref());
        let time = timestamps.get(index).copied().flatten();

        if args.json {
            let report = FrameReport {
                frame: index,
                time,
                verdict: &verdict,
            };
            writeln!(out, "{}", serde_json::to_string(&report)?)?;
        } else {
            let prefix = time.map_or_else(
                || format!("frame {index}"),
                |t| format!("frame {index} ({t:.2}s)"),
            );
            let position = verdict
                .bow_position
                .map(|p| format!(" | {}", language.current_position(p)))
                .unwrap_or_default();
            feedback!(
                verdict.is_acceptable(),
                "{prefix}: {}{position}",
                verdict.message
            );
        }

        summary.record(&verdict);
        index += 1;
    }

    out.flush()?;
    print_summary(&summary);
    Ok(summary)
}

fn print_summary(summary: &SessionSummary) {
    section!("Session summary");
    info!("{} frames", summary.frames);
    for status in PostureStatus::ALL {
        let count = summary.count(status);
        if count > 0 {
            info!("  {status:<15} {count}");
        }
    }
    for position in BowPosition::ALL {
        let count = summary.position_count(position);
        if count > 0 {
            info!("  at {position:<12} {count}");
        }
    }
    match summary.acceptable_rate() {
        Some(rate) => info!("Acceptable posture in {:.1}% of measured frames", rate * 100.0),
        None => {
            warn!("No frame allowed the elbow angle to be measured");
        }
    }
}
