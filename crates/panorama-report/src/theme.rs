//! Dark theme shared by every figure and the page chrome.

use plotly::Layout;
use plotly::common::{Font, Title};
use plotly::layout::Axis;

pub const BACKGROUND: &str = "#0a0a0f";
pub const PANEL: &str = "#12121a";
pub const GRID: &str = "#2a2a3a";
pub const TEXT: &str = "#e0e0e0";
pub const TEXT_MUTED: &str = "#a0a0a0";

/// Accent colors, in trace order.
pub const PALETTE: [&str; 5] = ["#00d4aa", "#7c3aed", "#f59e0b", "#ec4899", "#3b82f6"];

/// Base layout applied to every figure.
pub fn base_layout(title: &str) -> Layout {
    Layout::new()
        .title(Title::with_text(title))
        .paper_background_color(BACKGROUND)
        .plot_background_color(PANEL)
        .font(Font::new().color(TEXT).family("Helvetica, Arial, sans-serif"))
        .colorway(PALETTE.to_vec())
        .height(400)
}

/// Axis with the shared grid styling and a title.
pub fn styled_axis(title: &str) -> Axis {
    Axis::new()
        .title(Title::with_text(title))
        .grid_color(GRID)
        .line_color(GRID)
        .zero_line(false)
}

/// Page stylesheet for the assembled dashboard.
pub const GLOBAL_CSS: &str = r#"
:root {
  --bg: #0a0a0f;
  --panel: #12121a;
  --border: #2a2a3a;
  --text: #e0e0e0;
  --text-muted: #a0a0a0;
  --accent-1: #00d4aa;
  --accent-2: #7c3aed;
  --accent-3: #f59e0b;
  --accent-4: #ec4899;
}

* { box-sizing: border-box; }

body {
  background-color: var(--bg);
  color: var(--text);
  font-family: "Segoe UI", Helvetica, Arial, sans-serif;
  margin: 0;
  padding: 20px;
}

.banner {
  background: linear-gradient(135deg, #12121a 0%, #1a1a2e 50%, #12121a 100%);
  border: 1px solid var(--border);
  border-radius: 16px;
  padding: 30px;
  margin-bottom: 20px;
}

.banner h1 {
  color: var(--accent-1);
  font-size: 2.5em;
  margin: 0 0 10px 0;
  letter-spacing: -0.5px;
}

.banner p {
  color: var(--text-muted);
  font-size: 1.1em;
  margin: 0;
  line-height: 1.6;
}

.kpi-row {
  display: flex;
  gap: 20px;
  margin-bottom: 25px;
}

.kpi-card {
  flex: 1;
  border: 1px solid var(--border);
  border-radius: 12px;
  padding: 20px;
  text-align: center;
  background: var(--panel);
}

.kpi-card .label {
  color: var(--text-muted);
  font-size: 0.9em;
  margin-bottom: 5px;
}

.kpi-card .value {
  font-size: 2em;
  font-weight: bold;
}

.kpi-card:nth-child(1) .value { color: var(--accent-1); }
.kpi-card:nth-child(2) .value { color: var(--accent-2); }
.kpi-card:nth-child(3) .value { color: var(--accent-3); }
.kpi-card:nth-child(4) .value { color: var(--accent-4); }

section h2 {
  color: var(--text);
  border-bottom: 2px solid var(--border);
  padding-bottom: 10px;
  margin: 30px 0 20px 0;
}

.chart-grid {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(540px, 1fr));
  gap: 20px;
}

.chart-card {
  background: var(--panel);
  border: 1px solid var(--border);
  border-radius: 12px;
  padding: 10px;
}

.chart-card--wide {
  grid-column: 1 / -1;
}

footer {
  text-align: center;
  padding: 20px;
  margin-top: 30px;
  border-top: 1px solid var(--border);
  color: #606060;
  font-size: 0.9em;
}
"#;
