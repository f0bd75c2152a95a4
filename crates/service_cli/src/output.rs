//! Rendering of command results as text tables or JSON.

use clap::ValueEnum;
use pricer_core::MarketSnapshot;
use pricer_models::{OptionRight, OptionStyle};
use pricer_pricing::mc::PricePath;
use serde::Serialize;

use crate::Result;

/// Output format (table, json)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Aligned key/value lines
    #[default]
    Table,
    /// Pretty-printed JSON
    Json,
}

/// Calibrated parameters for one symbol.
#[derive(Debug, Clone, Serialize)]
pub struct CalibrationReport {
    /// Instrument label
    pub symbol: String,
    /// Last close (S0)
    pub spot: f64,
    /// Annualised mean log-return (mu)
    pub drift: f64,
    /// Annualised volatility (sigma)
    pub volatility: f64,
    /// Log-returns used
    pub observations: usize,
    /// True if sigma is zero
    pub degenerate: bool,
}

impl CalibrationReport {
    /// Builds the report from a snapshot.
    pub fn new(symbol: &str, snapshot: &MarketSnapshot) -> Self {
        Self {
            symbol: symbol.to_string(),
            spot: snapshot.spot(),
            drift: snapshot.drift(),
            volatility: snapshot.volatility(),
            observations: snapshot.observations(),
            degenerate: snapshot.is_degenerate(),
        }
    }
}

/// Price estimate and the inputs that produced it.
#[derive(Debug, Clone, Serialize)]
pub struct PriceReport {
    /// Instrument label
    pub symbol: String,
    /// European or Asian
    pub style: OptionStyle,
    /// Call or put
    pub right: OptionRight,
    /// Strike price
    pub strike: f64,
    /// Maturity in years
    pub maturity: f64,
    /// Risk-free rate
    pub rate: f64,
    /// Spot from calibration
    pub spot: f64,
    /// Volatility from calibration
    pub volatility: f64,
    /// Discounted Monte Carlo estimate
    pub price: f64,
    /// Standard error of the estimate
    pub std_error: f64,
    /// 95% confidence half-width
    pub confidence_95: f64,
    /// Trials simulated
    pub num_paths: usize,
    /// Steps per trial
    pub num_steps: usize,
    /// Seed used
    pub seed: u64,
    /// Whether the rayon pool was used
    pub parallel: bool,
    /// Closed-form price for European options
    #[serde(skip_serializing_if = "Option::is_none")]
    pub black_scholes: Option<f64>,
    /// Sample paths, if requested
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub sample_paths: Vec<PricePath>,
}

/// Renders a calibration report.
pub fn render_calibration(report: &CalibrationReport, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
        OutputFormat::Table => {
            let mut out = String::new();
            push_row(&mut out, "symbol", &report.symbol);
            push_row(&mut out, "spot (S0)", &format!("{:.4}", report.spot));
            push_row(&mut out, "drift (mu)", &format!("{:.6}", report.drift));
            push_row(&mut out, "volatility (sigma)", &format!("{:.6}", report.volatility));
            push_row(&mut out, "observations", &report.observations.to_string());
            if report.degenerate {
                push_row(&mut out, "note", "zero volatility, pricing is deterministic");
            }
            Ok(out)
        }
    }
}

/// Renders a price report.
pub fn render_price(report: &PriceReport, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
        OutputFormat::Table => {
            let mut out = String::new();
            push_row(&mut out, "symbol", &report.symbol);
            push_row(&mut out, "option", &format!("{} {}", report.style, report.right));
            push_row(&mut out, "strike", &format!("{:.4}", report.strike));
            push_row(&mut out, "maturity", &format!("{}", report.maturity));
            push_row(&mut out, "rate", &format!("{}", report.rate));
            push_row(&mut out, "spot", &format!("{:.4}", report.spot));
            push_row(&mut out, "volatility", &format!("{:.6}", report.volatility));
            push_row(&mut out, "price", &format!("{:.4}", report.price));
            push_row(
                &mut out,
                "95% CI",
                &format!(
                    "[{:.4}, {:.4}]",
                    report.price - report.confidence_95,
                    report.price + report.confidence_95
                ),
            );
            push_row(&mut out, "std error", &format!("{:.6}", report.std_error));
            if let Some(bs) = report.black_scholes {
                push_row(&mut out, "black-scholes", &format!("{:.4}", bs));
            }
            push_row(&mut out, "paths", &report.num_paths.to_string());
            push_row(&mut out, "steps", &report.num_steps.to_string());
            push_row(&mut out, "seed", &report.seed.to_string());
            push_row(&mut out, "parallel", &report.parallel.to_string());
            for (i, path) in report.sample_paths.iter().enumerate() {
                push_row(
                    &mut out,
                    &format!("path {}", i),
                    &format!(
                        "{} points, terminal {:.4}, average {:.4}",
                        path.len(),
                        path.terminal(),
                        path.average()
                    ),
                );
            }
            Ok(out)
        }
    }
}

fn push_row(out: &mut String, key: &str, value: &str) {
    out.push_str(&format!("{:<20} {}\n", key, value));
}
