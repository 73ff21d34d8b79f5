use chrono::{Duration, NaiveDate};
use pretty_assertions::assert_eq;
use stock_forecast::forecast::ForecastPoint;
use stock_forecast::ledger::PredictionLedger;
use tempfile::TempDir;

fn sample_points(count: usize, start_close: f64) -> Vec<ForecastPoint> {
    let anchor = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    (0..count)
        .map(|i| ForecastPoint {
            date: anchor + Duration::days(1 + i as i64),
            predicted_close: start_close + i as f64,
        })
        .collect()
}

#[test]
fn test_append_then_query_round_trips_in_order() {
    let dir = TempDir::new().unwrap();
    let ledger = PredictionLedger::new(dir.path().join("predictions.csv"));

    let points = sample_points(5, 100.0);
    ledger.append("INFY.NS", &points).unwrap();

    let records = ledger.query("INFY.NS").unwrap();
    assert_eq!(records.len(), points.len());
    for (record, point) in records.iter().zip(points.iter()) {
        assert_eq!(record.ticker, "INFY.NS");
        assert_eq!(record.date, point.date);
        assert_eq!(record.predicted_price, point.predicted_close);
    }
}

#[test]
fn test_appending_twice_doubles_the_count() {
    let dir = TempDir::new().unwrap();
    let ledger = PredictionLedger::new(dir.path().join("predictions.csv"));

    let points = sample_points(3, 100.0);
    ledger.append("TCS.NS", &points).unwrap();
    ledger.append("TCS.NS", &points).unwrap();

    // No implicit dedup: the ledger only grows
    assert_eq!(ledger.query("TCS.NS").unwrap().len(), 6);
}

#[test]
fn test_querying_missing_ledger_is_empty() {
    let dir = TempDir::new().unwrap();
    let ledger = PredictionLedger::new(dir.path().join("predictions.csv"));

    assert!(ledger.query("INFY.NS").unwrap().is_empty());
}

#[test]
fn test_queries_filter_by_ticker() {
    let dir = TempDir::new().unwrap();
    let ledger = PredictionLedger::new(dir.path().join("predictions.csv"));

    ledger.append("INFY.NS", &sample_points(4, 100.0)).unwrap();
    ledger.append("WIPRO.NS", &sample_points(2, 400.0)).unwrap();

    assert_eq!(ledger.query("INFY.NS").unwrap().len(), 4);
    assert_eq!(ledger.query("WIPRO.NS").unwrap().len(), 2);
    assert!(ledger.query("SBIN.NS").unwrap().is_empty());
}

#[test]
fn test_ledger_file_uses_the_flat_csv_layout() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("predictions.csv");
    let ledger = PredictionLedger::new(&path);

    ledger.append("INFY.NS", &sample_points(2, 1500.5)).unwrap();

    let contents = std::fs::read_to_string(&path).unwrap();
    let mut lines = contents.lines();
    assert_eq!(lines.next(), Some("Date,Ticker,Predicted_Price"));
    assert_eq!(lines.next(), Some("2024-01-02,INFY.NS,1500.5"));
    assert_eq!(lines.next(), Some("2024-01-03,INFY.NS,1501.5"));
}

#[test]
fn test_appends_preserve_earlier_records() {
    let dir = TempDir::new().unwrap();
    let ledger = PredictionLedger::new(dir.path().join("predictions.csv"));

    ledger.append("INFY.NS", &sample_points(2, 100.0)).unwrap();
    ledger.append("TCS.NS", &sample_points(2, 3000.0)).unwrap();

    // Earlier rows keep their storage order after a rewrite
    let infy = ledger.query("INFY.NS").unwrap();
    assert_eq!(infy.len(), 2);
    assert_eq!(infy[0].predicted_price, 100.0);
    assert_eq!(infy[1].predicted_price, 101.0);
}
