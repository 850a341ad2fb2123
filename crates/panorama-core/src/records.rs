use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One month of sales for a single product category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesRecord {
    /// Month-end date of the period.
    pub date: NaiveDate,
    /// Product category name.
    pub product: String,
    /// Sales revenue for the period, floored at 1000.
    pub sales: i64,
    /// Units sold, derived from sales.
    pub units: i64,
}

/// Aggregate figures for one sales region.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionalRecord {
    pub region: String,
    pub revenue: i64,
    /// Year-over-year growth in percent; may be negative.
    pub growth: f64,
    pub customers: i64,
    /// Customer satisfaction on a 3.5–5.0 scale.
    pub satisfaction: f64,
}

/// Metrics for one team.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformanceRecord {
    pub team: String,
    pub productivity: f64,
    pub quality: f64,
    pub efficiency: f64,
    pub headcount: i64,
}

/// One day in the price history random walk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    pub date: NaiveDate,
    /// Closing price, floored at 10.
    pub price: f64,
    pub volume: i64,
    pub high: f64,
    pub low: f64,
    /// Trailing 7-day simple moving average; absent for the first 6 days.
    pub moving_avg: Option<f64>,
}

/// One clustered scatter observation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScatterRecord {
    pub x: f64,
    pub y: f64,
    /// Marker size in the 5–20 range.
    pub size: f64,
    pub category: String,
    /// Derived measure, `x * y / 100`.
    pub value: f64,
}

/// Share of traffic for one device category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShareRecord {
    pub category: String,
    /// Fixed relative weight of the category.
    pub value: i64,
    /// Weight expressed as a percentage of the total.
    pub percentage: f64,
    /// Cumulative wedge start angle in radians.
    pub start_angle: f64,
    /// Cumulative wedge end angle in radians.
    pub end_angle: f64,
    /// Hex color assigned to the category.
    pub color: String,
}
