use chrono::Duration;

use tablescope::{
    build_time_series, select_date_column, select_value_column, ColumnProfiler, ColumnType,
    Decomposition, Forecaster, JsonConnector, ProfilingConfig, Table, TimeSeriesConfig,
    TrendAnalyzer, TrendDirection, Value,
};

/// Two years of monthly revenue records with some noise in the data:
/// a missing value, a junk amount, and a categorical region column.
fn monthly_records() -> String {
    let mut rows = Vec::new();
    for year in 0..2 {
        for month in 1..=12u32 {
            let index = (year * 12 + month - 1) as f64;
            let amount = 100.0 + 10.0 * index;
            let region = if month % 2 == 0 { "east" } else { "west" };
            rows.push(format!(
                r#"{{"period": "202{}-{:02}-01", "revenue": {}, "region": "{}"}}"#,
                3 + year,
                month,
                amount,
                region
            ));
        }
    }
    // Rows the series builder must drop.
    rows.push(r#"{"period": "junk", "revenue": 1.0, "region": "east"}"#.to_string());
    rows.push(r#"{"period": "2025-01-01", "revenue": null, "region": "west"}"#.to_string());
    format!("[{}]", rows.join(","))
}

#[test]
fn test_profile_select_and_analyze_end_to_end() {
    let table = JsonConnector::from_json_str(&monthly_records()).unwrap();
    assert_eq!(table.height(), 26);

    let profiling = ProfilingConfig::default();
    let profile = ColumnProfiler::new(profiling.clone()).profile(&table);

    assert_eq!(profile["period"].column_type, ColumnType::Datetime);
    assert_eq!(profile["revenue"].column_type, ColumnType::Numeric);
    assert_eq!(profile["region"].column_type, ColumnType::Categorical);
    assert_eq!(profile["revenue"].missing_count, 1);

    // Selection strategies pick the obvious pair.
    let date_column = select_date_column(&table, &profile, &profiling).unwrap();
    let value_column = select_value_column(&table, &profile).unwrap();
    assert_eq!(date_column, "period");
    assert_eq!(value_column, "revenue");

    let series = build_time_series(&table, &date_column, &value_column).unwrap();
    // The junk date and the null revenue are gone.
    assert_eq!(series.len(), 24);
    for pair in series.points.windows(2) {
        assert!(pair[0].date <= pair[1].date);
    }

    let config = TimeSeriesConfig::default();

    let summary = TrendAnalyzer::calculate(&series, &config).unwrap();
    assert_eq!(summary.direction, TrendDirection::Increasing);
    assert!(summary.overall_trend_pct > 5.0);
    assert_eq!(summary.point_count, 24);

    let decomposition = Decomposition::calculate(&series, &config).unwrap();
    let values = series.values();
    for i in 0..series.len() {
        let rebuilt =
            decomposition.trend[i] + decomposition.seasonal[i] + decomposition.residual[i];
        assert!((values[i] - rebuilt).abs() < 1e-9);
    }

    let forecast = Forecaster::forecast(&series, 7, &config).unwrap();
    assert_eq!(forecast.forecast.len(), 7);
    for i in 0..7 {
        assert!(forecast.lower_bound[i] <= forecast.forecast[i]);
        assert!(forecast.forecast[i] <= forecast.upper_bound[i]);
        assert!(forecast.forecast[i].is_finite());
    }
    // Daily cadence from the last observation, whatever the input spacing.
    let last = series.points.last().unwrap().date;
    assert_eq!(forecast.dates[0], last + Duration::days(1));
    assert_eq!(forecast.dates[6], last + Duration::days(7));
}

#[test]
fn test_selection_prefers_typed_datetime_column() {
    let table = JsonConnector::from_json_str(
        r#"[
            {"label": "a", "stamp": "2024-02-01", "v": 1},
            {"label": "b", "stamp": "2024-02-02", "v": 2},
            {"label": "c", "stamp": "2024-02-03", "v": 3}
        ]"#,
    )
    .unwrap();

    let profiling = ProfilingConfig::default();
    let profile = ColumnProfiler::new(profiling.clone()).profile(&table);
    assert_eq!(profile["stamp"].column_type, ColumnType::Datetime);
    assert_eq!(
        select_date_column(&table, &profile, &profiling).as_deref(),
        Some("stamp")
    );
    assert_eq!(select_value_column(&table, &profile).as_deref(), Some("v"));
}

#[test]
fn test_selection_falls_back_to_sampling() {
    // Historical dates parse but sit outside the profiler's year window,
    // so no column is typed datetime; the sampling fallback still finds
    // the date column by parsing its leading values.
    let table = JsonConnector::from_json_str(
        r#"[
            {"stamp": "1850-06-01", "v": 1},
            {"stamp": "1850-06-02", "v": 2},
            {"stamp": "1850-06-03", "v": 3}
        ]"#,
    )
    .unwrap();

    let profiling = ProfilingConfig::default();
    let profile = ColumnProfiler::new(profiling.clone()).profile(&table);
    assert_ne!(profile["stamp"].column_type, ColumnType::Datetime);
    assert_eq!(
        select_date_column(&table, &profile, &profiling).as_deref(),
        Some("stamp")
    );
}

#[test]
fn test_programmatic_table_construction() {
    let mut table = Table::new(vec!["t".to_string(), "v".to_string()]);
    table
        .push_row(vec![Value::Text("2024-03-01".to_string()), Value::Number(1.0)])
        .unwrap();
    table
        .push_row(vec![Value::Text("2024-03-02".to_string()), Value::Number(2.0)])
        .unwrap();
    // Ragged rows are rejected up front.
    assert!(table.push_row(vec![Value::Number(3.0)]).is_err());

    let series = build_time_series(&table, "t", "v").unwrap();
    assert_eq!(series.len(), 2);
    assert_eq!(series.values(), vec![1.0, 2.0]);
}

#[test]
fn test_no_candidates_yields_none() {
    let table = JsonConnector::from_json_str(
        r#"[
            {"label": "alpha"},
            {"label": "beta"}
        ]"#,
    )
    .unwrap();

    let profiling = ProfilingConfig::default();
    let profile = ColumnProfiler::new(profiling.clone()).profile(&table);
    assert!(select_date_column(&table, &profile, &profiling).is_none());
    assert!(select_value_column(&table, &profile).is_none());
}
