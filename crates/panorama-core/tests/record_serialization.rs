use chrono::NaiveDate;
use serde_json::json;

use panorama_core::PricePoint;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

#[test]
fn missing_moving_average_serializes_as_null() {
    let point = PricePoint {
        date: date(2024, 1, 1),
        price: 100.0,
        volume: 250_000,
        high: 103.5,
        low: 97.25,
        moving_avg: None,
    };

    let value = serde_json::to_value(&point).expect("serialize price point");
    assert_eq!(value["date"], json!("2024-01-01"));
    assert_eq!(value["moving_avg"], serde_json::Value::Null);
}

#[test]
fn present_moving_average_serializes_as_number() {
    let point = PricePoint {
        date: date(2024, 1, 7),
        price: 101.0,
        volume: 250_000,
        high: 104.0,
        low: 99.0,
        moving_avg: Some(100.5),
    };

    let value = serde_json::to_value(&point).expect("serialize price point");
    assert_eq!(value["moving_avg"], json!(100.5));
}
