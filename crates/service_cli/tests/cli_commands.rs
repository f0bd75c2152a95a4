//! End-to-end tests for the `mcprice` commands against CSV and TOML fixtures.

use std::io::Write;

use approx::assert_relative_eq;
use chrono::{Duration, NaiveDate};
use clap::Parser;
use service_cli::cli::{Cli, Commands};
use service_cli::commands;
use service_cli::config::{build_config_with_env, CliConfig};
use service_cli::CliError;
use tempfile::NamedTempFile;

/// Writes a dated closing-price CSV.
fn price_csv(closes: &[f64]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "date,close").unwrap();
    let start = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
    for (i, close) in closes.iter().enumerate() {
        writeln!(file, "{},{}", start + Duration::days(i as i64), close).unwrap();
    }
    file.flush().unwrap();
    file
}

/// Zig-zag closes with roughly 20% annualised volatility around 100.
fn volatile_closes() -> Vec<f64> {
    (0..200)
        .map(|i| if i % 2 == 0 { 100.0 } else { 101.27 })
        .collect()
}

fn parse(args: &[&str]) -> (Cli, CliConfig) {
    let cli = Cli::try_parse_from(args).unwrap();
    let config = build_config_with_env(&cli.overrides(), |_| None).unwrap();
    (cli, config)
}

fn run(args: &[&str]) -> Result<String, CliError> {
    let (cli, config) = parse(args);
    match &cli.command {
        Commands::Calibrate(a) => commands::calibrate::run(&config, a),
        Commands::Price(a) => commands::price::run(&config, a),
        Commands::Check => commands::check::run(&config),
    }
}

fn run_json(args: &[&str]) -> serde_json::Value {
    serde_json::from_str(&run(args).unwrap()).unwrap()
}

#[test]
fn test_calibrate_json() {
    let csv = price_csv(&volatile_closes());
    let path = csv.path().to_str().unwrap();

    let json = run_json(&["mcprice", "calibrate", "--data", path, "--symbol", "ZIG", "--format", "json"]);

    assert_eq!(json["symbol"], "ZIG");
    assert_eq!(json["spot"], 101.27);
    assert_eq!(json["observations"], 199);
    assert_eq!(json["degenerate"], false);
    assert!(json["volatility"].as_f64().unwrap() > 0.1);
}

#[test]
fn test_calibrate_constant_closes_is_degenerate() {
    let csv = price_csv(&[100.0; 30]);
    let path = csv.path().to_str().unwrap();

    let json = run_json(&["mcprice", "calibrate", "--data", path, "--format", "json"]);
    assert_eq!(json["volatility"], 0.0);
    assert_eq!(json["degenerate"], true);

    let table = run(&["mcprice", "calibrate", "--data", path]).unwrap();
    assert!(table.contains("deterministic"));
}

#[test]
fn test_lookback_limits_observations() {
    let csv = price_csv(&volatile_closes());
    let path = csv.path().to_str().unwrap();

    // 30 calendar days before the last date, inclusive, gives 31 closes
    let json = run_json(&[
        "mcprice", "calibrate", "--data", path, "--lookback-days", "30", "--format", "json",
    ]);
    assert_eq!(json["observations"], 30);
}

#[test]
fn test_oversized_lookback_is_rejected() {
    let csv = price_csv(&volatile_closes());
    let path = csv.path().to_str().unwrap();

    let cli = Cli::try_parse_from([
        "mcprice", "calibrate", "--data", path, "--lookback-days", "4294967295",
    ])
    .unwrap();
    let err = build_config_with_env(&cli.overrides(), |_| None).unwrap_err();
    assert!(err.to_string().contains("lookback_days"));
}

#[test]
fn test_missing_file() {
    let err = run(&["mcprice", "calibrate", "--data", "/nonexistent/prices.csv"]).unwrap_err();
    assert!(matches!(err, CliError::FileNotFound(_)));
}

#[test]
fn test_too_few_closes() {
    let csv = price_csv(&[100.0]);
    let path = csv.path().to_str().unwrap();

    let err = run(&["mcprice", "calibrate", "--data", path]).unwrap_err();
    assert!(matches!(err, CliError::Data(_)));
}

#[test]
fn test_price_european_matches_black_scholes() {
    let csv = price_csv(&volatile_closes());
    let path = csv.path().to_str().unwrap();

    let json = run_json(&[
        "mcprice", "price", "--data", path, "--strike", "100", "--maturity", "1", "--rate",
        "0.04", "--paths", "40000", "--seed", "11", "--format", "json",
    ]);

    let price = json["price"].as_f64().unwrap();
    let se = json["std_error"].as_f64().unwrap();
    let bs = json["black_scholes"].as_f64().unwrap();
    assert_eq!(json["num_steps"], 1);
    assert_eq!(json["seed"], 11);
    assert!((price - bs).abs() < 4.0 * se, "mc {} bs {} se {}", price, bs, se);
}

#[test]
fn test_seeded_price_is_reproducible() {
    let csv = price_csv(&volatile_closes());
    let path = csv.path().to_str().unwrap();
    let args = [
        "mcprice", "price", "--data", path, "--style", "asian", "--right", "put", "--strike",
        "100", "--maturity", "0.5", "--rate", "0.02", "--paths", "3000", "--steps", "20",
        "--seed", "5", "--format", "json",
    ];

    let first = run_json(&args);
    let second = run_json(&args);
    assert_eq!(first["price"], second["price"]);
    assert_eq!(first["num_steps"], 20);
    assert!(first.get("black_scholes").is_none());
}

#[test]
fn test_parallel_price_is_reproducible() {
    let csv = price_csv(&volatile_closes());
    let path = csv.path().to_str().unwrap();
    let args = [
        "mcprice", "price", "--data", path, "--strike", "95", "--maturity", "1", "--rate",
        "0.03", "--paths", "10000", "--seed", "8", "--parallel", "--format", "json",
    ];

    let first = run_json(&args);
    let second = run_json(&args);
    assert_eq!(first["price"], second["price"]);
    assert_eq!(first["parallel"], true);
}

#[test]
fn test_strike_pct_scales_spot() {
    let csv = price_csv(&volatile_closes());
    let path = csv.path().to_str().unwrap();

    let json = run_json(&[
        "mcprice", "price", "--data", path, "--strike-pct", "1.1", "--maturity", "1", "--rate",
        "0.0", "--paths", "500", "--seed", "1", "--format", "json",
    ]);
    assert_relative_eq!(json["strike"].as_f64().unwrap(), 101.27 * 1.1, epsilon = 1e-9);
}

#[test]
fn test_degenerate_put_is_exact() {
    let csv = price_csv(&[100.0; 30]);
    let path = csv.path().to_str().unwrap();

    let json = run_json(&[
        "mcprice", "price", "--data", path, "--style", "asian", "--right", "put", "--strike",
        "110", "--maturity", "1", "--rate", "0", "--paths", "200", "--seed", "2", "--format",
        "json",
    ]);
    assert_eq!(json["price"], 10.0);
    assert_eq!(json["std_error"], 0.0);
}

#[test]
fn test_sample_paths_in_output() {
    let csv = price_csv(&volatile_closes());
    let path = csv.path().to_str().unwrap();

    let json = run_json(&[
        "mcprice", "price", "--data", path, "--style", "asian", "--strike", "100",
        "--maturity", "1", "--rate", "0.04", "--paths", "500", "--steps", "12", "--seed", "3",
        "--sample-paths", "2", "--format", "json",
    ]);

    let paths = json["sample_paths"].as_array().unwrap();
    assert_eq!(paths.len(), 2);
    for p in paths {
        let points = p.as_array().unwrap();
        assert_eq!(points.len(), 13);
        assert_eq!(points[0], 101.27);
    }
}

#[test]
fn test_invalid_maturity_is_rejected() {
    let csv = price_csv(&volatile_closes());
    let path = csv.path().to_str().unwrap();

    let err = run(&[
        "mcprice", "price", "--data", path, "--strike", "100", "--maturity", "0", "--rate",
        "0.04",
    ])
    .unwrap_err();
    assert!(matches!(err, CliError::Instrument(_)));
}

#[test]
fn test_config_file_sets_defaults() {
    let mut toml_file = NamedTempFile::new().unwrap();
    writeln!(toml_file, "num_paths = 1234\nseed = 77\nsteps_per_year = 52").unwrap();
    toml_file.flush().unwrap();

    let csv = price_csv(&volatile_closes());
    let path = csv.path().to_str().unwrap();
    let config_path = toml_file.path().to_str().unwrap();

    let json = run_json(&[
        "mcprice", "--config", config_path, "price", "--data", path, "--style", "asian",
        "--strike", "100", "--maturity", "0.5", "--rate", "0.04", "--format", "json",
    ]);
    assert_eq!(json["num_paths"], 1234);
    assert_eq!(json["seed"], 77);
    assert_eq!(json["num_steps"], 26);

    // Command-line flags win over the file
    let json = run_json(&[
        "mcprice", "--config", config_path, "price", "--data", path, "--strike", "100",
        "--maturity", "0.5", "--rate", "0.04", "--paths", "999", "--format", "json",
    ]);
    assert_eq!(json["num_paths"], 999);
}

#[test]
fn test_check_reports_effective_config() {
    let out = run(&["mcprice", "check"]).unwrap();
    assert!(out.contains("num_paths"));
    assert!(out.contains("Fixed(252)"));
}
