//! Price command implementation
//!
//! Calibrates the underlying, then prices a European or Asian option by
//! Monte Carlo, sequentially or on the rayon pool.

use pricer_models::analytical::BlackScholes;
use pricer_models::{OptionSpec, OptionStyle};
use pricer_pricing::mc::{sample_paths, MonteCarloPricer};
use pricer_pricing::rng::PricerRng;
use tracing::{info, warn};

use crate::cli::PriceArgs;
use crate::config::CliConfig;
use crate::output::{render_price, PriceReport};
use crate::{CliError, Result};

/// Stream index reserved for sample paths so they never overlap pricing draws.
const SAMPLE_PATH_STREAM: u64 = u64::MAX;

/// Run the price command
pub fn run(config: &CliConfig, args: &PriceArgs) -> Result<String> {
    let snapshot = super::load_snapshot(config, &args.data)?;

    let spec = match (args.strike, args.strike_pct) {
        (Some(strike), None) => {
            let spec = OptionSpec::new(args.style, args.right, strike, args.maturity, args.rate);
            spec.validate()?;
            spec
        }
        (None, Some(pct)) => OptionSpec::with_moneyness(
            args.style,
            args.right,
            snapshot.spot(),
            pct,
            args.maturity,
            args.rate,
        )?,
        _ => {
            return Err(CliError::InvalidArgument(
                "exactly one of --strike or --strike-pct is required".to_string(),
            ))
        }
    };

    let pricer = MonteCarloPricer::new(config.simulation_config()?)?;
    let seed = config
        .seed
        .unwrap_or_else(|| PricerRng::from_entropy().seed());

    info!(
        "Pricing {} {} K={:.4} T={} on {} paths (seed {})",
        spec.style,
        spec.right,
        spec.strike,
        spec.maturity,
        pricer.config().num_paths(),
        seed
    );

    let result = if config.parallel {
        pricer.price_parallel(&snapshot, &spec, seed)?
    } else {
        pricer.price(&snapshot, &spec, &mut PricerRng::from_seed(seed))?
    };

    let black_scholes = match spec.style {
        OptionStyle::European => {
            match BlackScholes::price_option(snapshot.spot(), snapshot.volatility(), &spec) {
                Ok(price) => Some(price),
                Err(e) => {
                    warn!("Black-Scholes reference unavailable: {}", e);
                    None
                }
            }
        }
        OptionStyle::Asian => None,
    };

    let paths = if args.sample_paths > 0 {
        let mut rng = PricerRng::for_stream(seed, SAMPLE_PATH_STREAM);
        sample_paths(&snapshot, &spec, pricer.config(), args.sample_paths, &mut rng)?
    } else {
        Vec::new()
    };

    info!("Price {:.6} (std error {:.6})", result.price, result.std_error);

    let report = PriceReport {
        symbol: args.data.symbol.clone(),
        style: spec.style,
        right: spec.right,
        strike: spec.strike,
        maturity: spec.maturity,
        rate: spec.rate,
        spot: snapshot.spot(),
        volatility: snapshot.volatility(),
        price: result.price,
        std_error: result.std_error,
        confidence_95: result.confidence_95(),
        num_paths: result.num_paths,
        num_steps: result.num_steps,
        seed,
        parallel: config.parallel,
        black_scholes,
        sample_paths: paths,
    };

    render_price(&report, args.format)
}
