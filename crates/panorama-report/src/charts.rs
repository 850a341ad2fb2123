//! Figure builders, one per dashboard chart.
//!
//! Each builder consumes a generated table and returns a declarative
//! `plotly::Plot`; interactivity comes from the plotly.js runtime.

use chrono::NaiveDate;
use plotly::color::Rgba;
use plotly::common::{DashType, Fill, Line, Marker, Mode, Orientation};
use plotly::layout::BarMode;
use plotly::{Bar, Pie, Plot, Scatter};

use panorama_core::{
    PerformanceRecord, PricePoint, RegionalRecord, SalesRecord, ScatterRecord, ShareRecord,
};

use crate::theme;

const PERFORMANCE_TARGET: f64 = 85.0;

/// Multi-line chart of monthly sales per product category.
pub fn sales_trend(records: &[SalesRecord]) -> Plot {
    let mut plot = Plot::new();

    for (index, product) in unique_products(records).into_iter().enumerate() {
        let dates: Vec<NaiveDate> = rows_for(records, &product).map(|row| row.date).collect();
        let sales: Vec<i64> = rows_for(records, &product).map(|row| row.sales).collect();
        let trace = Scatter::new(dates, sales)
            .name(&product)
            .mode(Mode::LinesMarkers)
            .line(Line::new().color(palette(index)).width(3.0))
            .marker(Marker::new().size(8));
        plot.add_trace(trace);
    }

    plot.set_layout(
        theme::base_layout("Monthly Sales Trends by Product Category")
            .x_axis(theme::styled_axis("Month"))
            .y_axis(theme::styled_axis("Sales Revenue").tick_format("$,.0f")),
    );
    plot
}

/// Horizontal bars of revenue per region, ascending.
pub fn regional_revenue(records: &[RegionalRecord]) -> Plot {
    let mut sorted: Vec<&RegionalRecord> = records.iter().collect();
    sorted.sort_by_key(|row| row.revenue);

    let revenue: Vec<i64> = sorted.iter().map(|row| row.revenue).collect();
    let regions: Vec<String> = sorted.iter().map(|row| row.region.clone()).collect();
    let colors: Vec<&str> = (0..sorted.len()).map(palette).collect();

    let trace = Bar::new(revenue, regions)
        .orientation(Orientation::Horizontal)
        .marker(Marker::new().color_array(colors));

    let mut plot = Plot::new();
    plot.add_trace(trace);
    plot.set_layout(
        theme::base_layout("Revenue by Region")
            .x_axis(theme::styled_axis("Revenue ($)").tick_format("$,.0f"))
            .y_axis(theme::styled_axis("")),
    );
    plot
}

/// Clustered scatter with per-point marker sizes.
pub fn cluster_map(records: &[ScatterRecord]) -> Plot {
    let mut plot = Plot::new();

    for (index, category) in unique_categories(records).into_iter().enumerate() {
        let rows: Vec<&ScatterRecord> = records
            .iter()
            .filter(|row| row.category == category)
            .collect();
        let xs: Vec<f64> = rows.iter().map(|row| row.x).collect();
        let ys: Vec<f64> = rows.iter().map(|row| row.y).collect();
        let sizes: Vec<usize> = rows.iter().map(|row| row.size.round() as usize).collect();

        let trace = Scatter::new(xs, ys)
            .name(&category)
            .mode(Mode::Markers)
            .marker(
                Marker::new()
                    .size_array(sizes)
                    .color(palette(index))
                    .opacity(0.7),
            );
        plot.add_trace(trace);
    }

    plot.set_layout(
        theme::base_layout("Multi-dimensional Data Analysis")
            .x_axis(theme::styled_axis("Feature X"))
            .y_axis(theme::styled_axis("Feature Y")),
    );
    plot
}

/// Stacked area chart of cumulative sales per product.
///
/// Stacking is explicit: each trace carries the running total and fills
/// down to the previous one.
pub fn stacked_sales(records: &[SalesRecord]) -> Plot {
    let dates = unique_dates(records);
    let mut plot = Plot::new();
    let mut bottom = vec![0.0; dates.len()];

    for (index, product) in unique_products(records).into_iter().enumerate() {
        let mut top = bottom.clone();
        for row in rows_for(records, &product) {
            if let Some(position) = dates.iter().position(|date| *date == row.date) {
                top[position] += row.sales as f64;
            }
        }

        let trace = Scatter::new(dates.clone(), top.clone())
            .name(&product)
            .mode(Mode::Lines)
            .line(Line::new().color(palette(index)).width(0.5))
            .fill(if index == 0 {
                Fill::ToZeroY
            } else {
                Fill::ToNextY
            });
        plot.add_trace(trace);
        bottom = top;
    }

    plot.set_layout(
        theme::base_layout("Cumulative Sales Distribution")
            .x_axis(theme::styled_axis("Month"))
            .y_axis(theme::styled_axis("Cumulative Sales").tick_format("$,.0f")),
    );
    plot
}

/// Donut chart of traffic share per device category.
pub fn device_share_donut(records: &[ShareRecord]) -> Plot {
    let values: Vec<i64> = records.iter().map(|row| row.value).collect();
    let labels: Vec<String> = records.iter().map(|row| row.category.clone()).collect();

    let trace = Pie::new(values).labels(labels).hole(0.4);

    let mut plot = Plot::new();
    plot.add_trace(trace);
    plot.set_layout(theme::base_layout("Traffic by Device Type"));
    plot
}

/// Price history with high-low band and trailing moving average.
pub fn price_trend(records: &[PricePoint]) -> Plot {
    let dates: Vec<NaiveDate> = records.iter().map(|row| row.date).collect();
    let prices: Vec<f64> = records.iter().map(|row| row.price).collect();
    let highs: Vec<f64> = records.iter().map(|row| row.high).collect();
    let lows: Vec<f64> = records.iter().map(|row| row.low).collect();
    let moving: Vec<Option<f64>> = records.iter().map(|row| row.moving_avg).collect();

    let low_band = Scatter::new(dates.clone(), lows)
        .mode(Mode::Lines)
        .line(Line::new().width(0.0))
        .show_legend(false);
    let high_band = Scatter::new(dates.clone(), highs)
        .name("High-Low Range")
        .mode(Mode::Lines)
        .line(Line::new().width(0.0))
        .fill(Fill::ToNextY)
        .fill_color(Rgba::new(124, 58, 237, 0.2));
    let price = Scatter::new(dates.clone(), prices)
        .name("Price")
        .mode(Mode::Lines)
        .line(Line::new().color(palette(0)).width(2.0));
    // Leading rows carry no average; plotly renders the nulls as a gap.
    let average = Scatter::new(dates, moving)
        .name("7-Day MA")
        .mode(Mode::Lines)
        .line(Line::new().color(palette(2)).width(2.0).dash(DashType::Dash));

    let mut plot = Plot::new();
    plot.add_trace(low_band);
    plot.add_trace(high_band);
    plot.add_trace(price);
    plot.add_trace(average);
    plot.set_layout(
        theme::base_layout("Stock Price Analysis with Moving Average")
            .x_axis(theme::styled_axis("Date"))
            .y_axis(theme::styled_axis("Price ($)").tick_format("$.2f")),
    );
    plot
}

/// Grouped bars of the three team scores with a dashed target line.
pub fn team_metrics(records: &[PerformanceRecord]) -> Plot {
    let teams: Vec<String> = records.iter().map(|row| row.team.clone()).collect();
    let metrics: [(&str, Vec<f64>); 3] = [
        (
            "Productivity",
            records.iter().map(|row| row.productivity).collect(),
        ),
        ("Quality", records.iter().map(|row| row.quality).collect()),
        (
            "Efficiency",
            records.iter().map(|row| row.efficiency).collect(),
        ),
    ];

    let mut plot = Plot::new();
    for (index, (label, values)) in metrics.into_iter().enumerate() {
        let trace = Bar::new(teams.clone(), values)
            .name(label)
            .marker(Marker::new().color(palette(index)));
        plot.add_trace(trace);
    }

    if !teams.is_empty() {
        let target = Scatter::new(teams.clone(), vec![PERFORMANCE_TARGET; teams.len()])
            .name("Target 85%")
            .mode(Mode::Lines)
            .line(Line::new().color(palette(3)).width(2.0).dash(DashType::Dash));
        plot.add_trace(target);
    }

    plot.set_layout(
        theme::base_layout("Team Performance Metrics")
            .bar_mode(BarMode::Group)
            .x_axis(theme::styled_axis(""))
            .y_axis(theme::styled_axis("Score (%)").range(vec![0.0, 110.0])),
    );
    plot
}

fn palette(index: usize) -> &'static str {
    theme::PALETTE[index % theme::PALETTE.len()]
}

fn unique_products(records: &[SalesRecord]) -> Vec<String> {
    let mut products = Vec::new();
    for record in records {
        if !products.contains(&record.product) {
            products.push(record.product.clone());
        }
    }
    products
}

fn unique_categories(records: &[ScatterRecord]) -> Vec<String> {
    let mut categories = Vec::new();
    for record in records {
        if !categories.contains(&record.category) {
            categories.push(record.category.clone());
        }
    }
    categories
}

fn unique_dates(records: &[SalesRecord]) -> Vec<NaiveDate> {
    let mut dates = Vec::new();
    for record in records {
        if !dates.contains(&record.date) {
            dates.push(record.date);
        }
    }
    dates.sort();
    dates
}

fn rows_for<'a>(
    records: &'a [SalesRecord],
    product: &'a str,
) -> impl Iterator<Item = &'a SalesRecord> {
    records.iter().filter(move |row| row.product == product)
}
