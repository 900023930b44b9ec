use std::env;
use std::path::Path;
use std::process;

use anyhow::Context;
use tablescope::{
    build_time_series, select_date_column, select_value_column, ColumnProfiler, ConfigManager,
    Decomposition, Forecaster, JsonConnector, TrendAnalyzer,
};

const CONFIG_FILE: &str = "tablescope.toml";

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().skip(1).collect();
    let Some(path) = args.first() else {
        eprintln!("Usage: tablescope <records.json> [horizon-days]");
        process::exit(2);
    };
    let horizon: Option<usize> = args
        .get(1)
        .map(|raw| raw.parse())
        .transpose()
        .context("Horizon must be a positive integer")?;

    let manager = ConfigManager::new();
    if Path::new(CONFIG_FILE).exists() {
        manager
            .load_from_file(CONFIG_FILE)
            .with_context(|| format!("Failed to load {}", CONFIG_FILE))?;
        log::info!("Loaded configuration from {}", CONFIG_FILE);
    }
    let config = manager.get();
    let profiling = config.profiling;
    let timeseries = config.timeseries;

    let table = JsonConnector::load(path).with_context(|| format!("Failed to load {}", path))?;
    println!("{}: {} rows x {} columns", path, table.height(), table.width());

    let profile = ColumnProfiler::new(profiling.clone()).profile(&table);

    println!();
    println!(
        "{:<24} {:<12} {:>8} {:>9}  range",
        "column", "type", "unique", "missing%"
    );
    for name in table.columns() {
        if let Some(info) = profile.get(name) {
            let range = match (info.min, info.max) {
                (Some(min), Some(max)) => format!("{:.2} - {:.2}", min, max),
                _ => "n/a".to_string(),
            };
            println!(
                "{:<24} {:<12} {:>8} {:>8.1}%  {}",
                info.name, info.column_type, info.unique_values, info.missing_percentage, range
            );
        }
    }

    let (Some(date_column), Some(value_column)) = (
        select_date_column(&table, &profile, &profiling),
        select_value_column(&table, &profile),
    ) else {
        println!();
        println!("No date/value column pair detected; skipping time-series analysis");
        return Ok(());
    };

    println!();
    println!("Time series: {} over {}", value_column, date_column);
    let series = build_time_series(&table, &date_column, &value_column)?;
    println!("{} usable points", series.len());

    match TrendAnalyzer::calculate(&series, &timeseries) {
        Ok(summary) => println!(
            "trend {:+.2}% ({}), volatility {:.2}%",
            summary.overall_trend_pct, summary.direction, summary.volatility_pct
        ),
        Err(err) => println!("trend: {}", err),
    }

    match Decomposition::calculate(&series, &timeseries) {
        Ok(result) => println!(
            "decomposition: residual std {:.4}",
            tablescope::stats::population_std_dev(&result.residual)
        ),
        Err(err) => println!("decomposition: {}", err),
    }

    if let Some(horizon) = horizon {
        match Forecaster::forecast(&series, horizon, &timeseries) {
            Ok(result) => {
                println!("forecast ({:.0}% confidence):", result.confidence);
                for i in 0..result.forecast.len() {
                    println!(
                        "  {}  {:>12.4}  [{:.4}, {:.4}]",
                        result.dates[i].date(),
                        result.forecast[i],
                        result.lower_bound[i],
                        result.upper_bound[i]
                    );
                }
            }
            Err(err) => println!("forecast: {}", err),
        }
    }

    Ok(())
}
