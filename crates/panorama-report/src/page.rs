//! Page assembly: sections of embedded figures wrapped in the dashboard
//! chrome, emitted as a single static HTML file.

use std::path::Path;

use chrono::Local;
use maud::{DOCTYPE, Markup, PreEscaped, html};
use plotly::Plot;
use tracing::info;

use panorama_core::{DatasetSizes, SampleOptions};
use panorama_data::{
    cluster_points, device_share, monthly_sales, price_history, regional_summary, team_performance,
};

use crate::charts;
use crate::errors::RenderError;
use crate::kpi::{KpiSummary, summarize};
use crate::theme;

const PLOTLY_CDN: &str = "https://cdn.plot.ly/plotly-latest.min.js";

/// One titled group of charts on the page.
pub struct Section {
    title: String,
    blocks: Vec<Markup>,
}

impl Section {
    pub fn new(title: &str) -> Self {
        Section {
            title: title.to_string(),
            blocks: Vec::new(),
        }
    }

    /// Add an arbitrary block of markup.
    pub fn add_html(&mut self, content: Markup) {
        self.blocks.push(content);
    }

    /// Embed a figure into the section grid.
    pub fn add_plot(&mut self, div_id: &str, plot: &Plot) {
        self.blocks.push(html! {
            div class="chart-card" {
                (PreEscaped(plot.to_inline_html(Some(div_id))))
            }
        });
    }

    /// Embed a figure spanning the full grid width.
    pub fn add_wide_plot(&mut self, div_id: &str, plot: &Plot) {
        self.blocks.push(html! {
            div class="chart-card chart-card--wide" {
                (PreEscaped(plot.to_inline_html(Some(div_id))))
            }
        });
    }

    fn render(&self) -> Markup {
        html! {
            section {
                h2 { (self.title) }
                div class="chart-grid" {
                    @for block in &self.blocks {
                        (block)
                    }
                }
            }
        }
    }
}

/// The complete dashboard document.
pub struct Dashboard {
    title: String,
    kpis: Option<KpiSummary>,
    sections: Vec<Section>,
}

impl Dashboard {
    pub fn new(title: &str) -> Self {
        Dashboard {
            title: title.to_string(),
            kpis: None,
            sections: Vec::new(),
        }
    }

    pub fn set_kpis(&mut self, kpis: KpiSummary) {
        self.kpis = Some(kpis);
    }

    pub fn add_section(&mut self, section: Section) {
        self.sections.push(section);
    }

    /// Render the whole document.
    pub fn render(&self) -> Markup {
        let generated = Local::now().format("%Y-%m-%d %H:%M:%S");

        html! {
            (DOCTYPE)
            html {
                head {
                    meta charset="utf-8";
                    title { (self.title) }
                    script src=(PLOTLY_CDN) {}
                    style { (PreEscaped(theme::GLOBAL_CSS)) }
                }
                body {
                    div class="banner" {
                        h1 { (self.title) }
                        p {
                            "Interactive analytics powered by plotly.js \u{2022} "
                            "Explore trends, compare metrics, and discover insights"
                        }
                    }
                    @if let Some(kpis) = &self.kpis {
                        (render_kpis(kpis))
                    }
                    @for section in &self.sections {
                        (section.render())
                    }
                    footer {
                        "Generated on " (generated)
                    }
                }
            }
        }
    }

    /// Write the rendered document to `path`.
    pub fn write_html(&self, path: &Path) -> Result<(), RenderError> {
        std::fs::write(path, self.render().into_string())?;
        info!(path = %path.display(), "dashboard written");
        Ok(())
    }
}

/// Generate all datasets and assemble the standard dashboard.
pub fn build_dashboard(opts: &SampleOptions, sizes: &DatasetSizes, title: &str) -> Dashboard {
    let sales = monthly_sales(opts, sizes.months);
    let regional = regional_summary(opts);
    let performance = team_performance(opts);
    let prices = price_history(opts, sizes.days);
    let points = cluster_points(opts, sizes.points);
    let share = device_share(opts);

    let mut dashboard = Dashboard::new(title);
    dashboard.set_kpis(summarize(&sales, &regional));

    let mut revenue = Section::new("Sales & Revenue Analytics");
    revenue.add_plot("sales-trend", &charts::sales_trend(&sales));
    revenue.add_plot("regional-revenue", &charts::regional_revenue(&regional));
    dashboard.add_section(revenue);

    let mut insights = Section::new("Advanced Analytics & Insights");
    insights.add_plot("cluster-map", &charts::cluster_map(&points));
    insights.add_plot("device-share", &charts::device_share_donut(&share));
    insights.add_wide_plot("price-history", &charts::price_trend(&prices));
    dashboard.add_section(insights);

    let mut overview = Section::new("Performance Overview");
    overview.add_plot("stacked-sales", &charts::stacked_sales(&sales));
    overview.add_plot("team-metrics", &charts::team_metrics(&performance));
    dashboard.add_section(overview);

    info!(sections = 3, charts = 7, "dashboard assembled");
    dashboard
}

fn render_kpis(kpis: &KpiSummary) -> Markup {
    html! {
        div class="kpi-row" {
            div class="kpi-card" {
                div class="label" { "Total Revenue" }
                div class="value" { "$" (group_thousands(kpis.total_sales)) }
            }
            div class="kpi-card" {
                div class="label" { "Total Customers" }
                div class="value" { (group_thousands(kpis.total_customers)) }
            }
            div class="kpi-card" {
                div class="label" { "Avg. Satisfaction" }
                div class="value" { (format!("{:.1}/5.0", kpis.avg_satisfaction)) }
            }
            div class="kpi-card" {
                div class="label" { "Avg. Growth Rate" }
                div class="value" { (format!("{:.1}%", kpis.avg_growth)) }
            }
        }
    }
}

/// Format an integer with thousands separators.
fn group_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    if value < 0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}

#[cfg(test)]
mod tests {
    use super::group_thousands;

    #[test]
    fn groups_digits_in_threes() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1_000), "1,000");
        assert_eq!(group_thousands(2_345_678), "2,345,678");
        assert_eq!(group_thousands(-12_000), "-12,000");
    }
}
