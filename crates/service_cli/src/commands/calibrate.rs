//! Calibrate command implementation
//!
//! Estimates spot, drift and volatility from a closing-price CSV.

use tracing::info;

use crate::cli::CalibrateArgs;
use crate::config::CliConfig;
use crate::output::{render_calibration, CalibrationReport};
use crate::Result;

/// Run the calibrate command
pub fn run(config: &CliConfig, args: &CalibrateArgs) -> Result<String> {
    info!("Calibrating {} from {}", args.data.symbol, args.data.data.display());

    let snapshot = super::load_snapshot(config, &args.data)?;
    let report = CalibrationReport::new(&args.data.symbol, &snapshot);

    info!("Calibration complete ({} observations)", report.observations);
    render_calibration(&report, args.format)
}
