//! Command line flags.

use clap::Parser;
use petalfall_core::Intensity;

const ENV_HELP: &str = "\
Environment:
  PETALFALL_REDUCED_MOTION, REDUCE_MOTION  Set to 1 to minimize animation
  PETALFALL_LOG                            Log filter (written to the data dir)";

/// A romantic terminal celebration screen with falling rose petals.
#[derive(Debug, Clone, Default, PartialEq, Eq, Parser)]
#[command(name = "petalfall", version, about, after_help = ENV_HELP)]
pub struct Args {
    /// Petal intensity: low, medium, high, celebration
    #[arg(short, long, value_parser = parse_intensity)]
    pub intensity: Option<Intensity>,

    /// Minimize animation regardless of the environment
    #[arg(long, overrides_with = "motion")]
    pub reduced_motion: bool,

    /// Animate regardless of the environment
    #[arg(long, overrides_with = "reduced_motion")]
    pub motion: bool,
}

impl Args {
    /// Reduced-motion override given on the command line, if any.
    pub fn reduced_motion_override(&self) -> Option<bool> {
        match (self.reduced_motion, self.motion) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        }
    }
}

fn parse_intensity(value: &str) -> Result<Intensity, String> {
    Intensity::from_name(value).ok_or_else(|| {
        format!("expected one of: low, medium, high, celebration (got {value:?})")
    })
}
