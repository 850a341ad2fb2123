use serde::Serialize;

use panorama_core::{RegionalRecord, SalesRecord};

/// Headline numbers shown at the top of the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KpiSummary {
    pub total_sales: i64,
    pub total_customers: i64,
    pub avg_satisfaction: f64,
    pub avg_growth: f64,
}

/// Aggregate the sales and regional tables into the KPI row.
///
/// Empty inputs yield zeroed figures rather than a division by zero.
pub fn summarize(sales: &[SalesRecord], regional: &[RegionalRecord]) -> KpiSummary {
    let total_sales = sales.iter().map(|row| row.sales).sum();
    let total_customers = regional.iter().map(|row| row.customers).sum();

    let (avg_satisfaction, avg_growth) = if regional.is_empty() {
        (0.0, 0.0)
    } else {
        let count = regional.len() as f64;
        (
            regional.iter().map(|row| row.satisfaction).sum::<f64>() / count,
            regional.iter().map(|row| row.growth).sum::<f64>() / count,
        )
    };

    KpiSummary {
        total_sales,
        total_customers,
        avg_satisfaction,
        avg_growth,
    }
}
