// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

use std::process;

use clap::Parser;

use bowing_posture::cli::args::{Cli, Commands};
use bowing_posture::cli::check::run_check;
use bowing_posture::cli::ranges::run_ranges;
use bowing_posture::error;

fn main() {
    let cli = Cli::parse();

    match &cli.command {
        Commands::Check(args) => {
            if let Err(e) = run_check(args) {
                error!("{e}");
                process::exit(1);
            }
        }
        Commands::Ranges(args) => run_ranges(args),
    }
}
