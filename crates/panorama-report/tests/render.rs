use std::fs;

use panorama_core::{DatasetSizes, SampleOptions};
use panorama_data::{monthly_sales, price_history, regional_summary};
use panorama_report::{build_dashboard, charts};

const CHART_IDS: [&str; 7] = [
    "sales-trend",
    "regional-revenue",
    "cluster-map",
    "device-share",
    "price-history",
    "stacked-sales",
    "team-metrics",
];

#[test]
fn dashboard_embeds_every_chart() {
    let opts = SampleOptions::default();
    let sizes = DatasetSizes {
        months: 6,
        days: 30,
        points: 30,
    };

    let html = build_dashboard(&opts, &sizes, "Panorama Analytics")
        .render()
        .into_string();

    assert!(html.contains("cdn.plot.ly"));
    assert!(html.contains("Panorama Analytics"));
    for id in CHART_IDS {
        assert!(html.contains(id), "missing chart div {id}");
    }
    for heading in [
        "Sales &amp; Revenue Analytics",
        "Advanced Analytics &amp; Insights",
        "Performance Overview",
    ] {
        assert!(html.contains(heading), "missing section {heading}");
    }
    for label in [
        "Total Revenue",
        "Total Customers",
        "Avg. Satisfaction",
        "Avg. Growth Rate",
    ] {
        assert!(html.contains(label), "missing KPI card {label}");
    }
}

#[test]
fn figures_embed_with_their_div_ids() {
    let opts = SampleOptions::default();
    let sales = monthly_sales(&opts, 6);

    let inline = charts::sales_trend(&sales).to_inline_html(Some("sales-trend"));
    assert!(inline.contains("sales-trend"));

    let inline = charts::regional_revenue(&regional_summary(&opts))
        .to_inline_html(Some("regional-revenue"));
    assert!(inline.contains("regional-revenue"));

    let inline = charts::price_trend(&price_history(&opts, 30)).to_inline_html(Some("price-history"));
    assert!(inline.contains("price-history"));
}

#[test]
fn figures_tolerate_empty_tables() {
    let _ = charts::sales_trend(&[]);
    let _ = charts::regional_revenue(&[]);
    let _ = charts::cluster_map(&[]);
    let _ = charts::stacked_sales(&[]);
    let _ = charts::device_share_donut(&[]);
    let _ = charts::price_trend(&[]);
    let _ = charts::team_metrics(&[]);
}

#[test]
fn write_html_creates_the_artifact() {
    let mut path = std::env::temp_dir();
    path.push(format!("panorama_dashboard_{}.html", std::process::id()));
    let _ = fs::remove_file(&path);

    let opts = SampleOptions::default();
    let sizes = DatasetSizes {
        months: 3,
        days: 14,
        points: 15,
    };
    build_dashboard(&opts, &sizes, "Panorama Analytics")
        .write_html(&path)
        .expect("write dashboard");

    let contents = fs::read_to_string(&path).expect("read dashboard artifact");
    assert!(contents.starts_with("<!DOCTYPE html>"));
    assert!(contents.contains("plotly"));
}
