use chrono::{Duration, NaiveDate};
use stock_forecast::{enrich, ForecastError, PriceBar, PriceSeries};

// Build a series whose closes rise by `step` per calendar day
fn linear_series(bars: usize, start_close: f64, step: f64) -> PriceSeries {
    let start = NaiveDate::from_ymd_opt(2023, 1, 2).unwrap();
    let bars = (0..bars)
        .map(|i| {
            let close = start_close + step * i as f64;
            PriceBar {
                date: start + Duration::days(i as i64),
                open: close - 0.5,
                high: close + 1.0,
                low: close - 1.0,
                close,
                volume: 1_000 + i as u64,
            }
        })
        .collect();

    PriceSeries::new("TEST.NS", bars).unwrap()
}

#[test]
fn test_enrichment_truncates_rows_without_full_windows() {
    let series = linear_series(250, 100.0, 1.0);
    let enriched = enrich(&series).unwrap();

    // Rows survive only from the 200th bar onward
    assert_eq!(enriched.len(), 51);
    assert_eq!(
        enriched.first_date().unwrap(),
        NaiveDate::from_ymd_opt(2023, 1, 2).unwrap() + Duration::days(199)
    );
}

#[test]
fn test_enrichment_of_short_history_is_empty() {
    for bars in [0, 1, 50, 199] {
        let series = linear_series(bars, 100.0, 1.0);
        let enriched = enrich(&series).unwrap();
        assert!(
            enriched.is_empty(),
            "{} bars should not fill a 200-bar window",
            bars
        );
    }
}

#[test]
fn test_trailing_means_are_window_averages() {
    // Closes run 100, 101, ..., 299
    let series = linear_series(200, 100.0, 1.0);
    let enriched = enrich(&series).unwrap();

    assert_eq!(enriched.len(), 1);
    let row = &enriched.rows()[0];
    assert!((row.close - 299.0).abs() < 1e-9);
    // 200-bar mean of 100..=299, 50-bar mean of 250..=299
    assert!((row.ma200 - 199.5).abs() < 1e-9);
    assert!((row.ma50 - 274.5).abs() < 1e-9);
}

#[test]
fn test_out_of_order_bars_are_rejected() {
    let day = NaiveDate::from_ymd_opt(2023, 1, 2).unwrap();
    let bar = |date: NaiveDate, close: f64| PriceBar {
        date,
        open: close,
        high: close,
        low: close,
        close,
        volume: 0,
    };

    let reversed = vec![bar(day + Duration::days(1), 10.0), bar(day, 11.0)];
    assert!(matches!(
        PriceSeries::new("TEST.NS", reversed),
        Err(ForecastError::Data(_))
    ));

    let duplicated = vec![bar(day, 10.0), bar(day, 11.0)];
    assert!(matches!(
        PriceSeries::new("TEST.NS", duplicated),
        Err(ForecastError::Data(_))
    ));
}

#[test]
fn test_empty_series_accessors() {
    let series = PriceSeries::empty("TEST.NS");

    assert!(series.is_empty());
    assert_eq!(series.len(), 0);
    assert_eq!(series.last_date(), None);
    assert!(series.closes().is_empty());
}
