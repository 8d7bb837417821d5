// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

use crate::cli::args::RangesArgs;
use crate::range::{AngleRange, SEGMENT_SPLIT};
use crate::{BowPosition, PostureConfig, section};

/// One row of the range table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RangeRow {
    /// Position along the bow.
    pub ratio: f32,
    /// Acceptable range at `ratio`.
    pub range: AngleRange,
}

/// Interpolated ranges at `steps + 1` evenly spaced ratios from the frog to the tip.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn range_table(config: &PostureConfig, steps: u32) -> Vec<RangeRow> {
    let steps = steps.max(1);
    (0..=steps)
        .map(|i| {
            let ratio = i as f32 / steps as f32;
            RangeRow {
                ratio,
                range: crate::range::angle_range(ratio, config),
            }
        })
        .collect()
}

/// Print the acceptable elbow angle range along the bow.
pub fn run_ranges(args: &RangesArgs) {
    let config = PostureConfig::new().with_clamp_interpolation(args.clamp);

    section!("Reference ranges");
    for position in BowPosition::ALL {
        let reference = match position {
            BowPosition::Frog => config.frog_range,
            BowPosition::Middle => config.middle_range,
            BowPosition::Tip => config.tip_range,
        };
        let applied = crate::range::angle_range(position.ratio(), &config);
        println!(
            "  {position:<7} ratio {:.2}  reference {reference}  applied {applied}",
            position.ratio()
        );
    }

    section!("Interpolated ranges (segments split at ratio {SEGMENT_SPLIT})");
    println!("  {:>6}  {:>8}  {:>8}", "ratio", "min", "max");
    for row in range_table(&config, args.steps) {
        println!(
            "  {:>6.2}  {:>7.2}°  {:>7.2}°",
            row.ratio, row.range.min, row.range.max
        );
    }
}
