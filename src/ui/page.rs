//! Server-side HTML rendering of the dashboard.
//!
//! Charts are inline SVG so the page needs no scripts. Bar geometry is
//! computed here; `templates/dashboard.html` only lays it out. Each section
//! shows a loading placeholder until its data is present.

use askama::Template;

use crate::models::report::Kpis;
use crate::ui::charts::{self, BarChart};
use crate::ui::client::DashboardData;

const CHART_WIDTH: f64 = 720.0;
const CHART_HEIGHT: f64 = 320.0;
const PLOT_TOP: f64 = 28.0;
const PLOT_BOTTOM: f64 = 40.0;
const PLOT_SIDE: f64 = 16.0;
const LABEL_Y: f64 = CHART_HEIGHT - 12.0;

#[derive(Template)]
#[template(path = "dashboard.html")]
pub struct DashboardTemplate {
    pub kpis: Vec<KpiCard>,
    pub sections: Vec<ChartSection>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct KpiCard {
    pub title: &'static str,
    pub value: String,
}

/// One card holding a chart, or its placeholder while the chart is empty.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSection {
    pub title: &'static str,
    pub placeholder: &'static str,
    pub last: bool,
    pub svg: Option<SvgChart>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SvgChart {
    pub series_label: &'static str,
    pub width: f64,
    pub height: f64,
    pub side: f64,
    pub label_y: f64,
    pub baseline: f64,
    pub baseline_end: f64,
    pub bars: Vec<SvgBar>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SvgBar {
    pub label: String,
    pub value: String,
    pub color: &'static str,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub center: f64,
}

fn tenths(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}

fn kpi_cards(kpis: &Kpis) -> Vec<KpiCard> {
    vec![
        KpiCard {
            title: "Total Users",
            value: kpis.total_users.to_string(),
        },
        KpiCard {
            title: "Total Orders",
            value: kpis.total_orders.to_string(),
        },
        KpiCard {
            title: "Total Revenue",
            value: format!("£{:.2}", kpis.total_revenue),
        },
    ]
}

/// Vertical bar layout with a zero baseline; negative values hang below it.
pub fn layout(chart: &BarChart) -> Option<SvgChart> {
    if chart.is_empty() {
        return None;
    }

    let (lo, hi) = chart.value_range();
    let span = if hi - lo > 0.0 { hi - lo } else { 1.0 };
    let plot_height = CHART_HEIGHT - PLOT_TOP - PLOT_BOTTOM;
    let plot_width = CHART_WIDTH - 2.0 * PLOT_SIDE;
    let y_of = |v: f64| PLOT_TOP + (hi - v) / span * plot_height;
    let baseline = y_of(0.0);

    let slot = plot_width / chart.bars.len() as f64;
    let bar_width = slot * 0.7;

    let bars = chart
        .bars
        .iter()
        .enumerate()
        .map(|(i, bar)| {
            let value = if bar.value.is_finite() { bar.value } else { 0.0 };
            let x = PLOT_SIDE + i as f64 * slot + (slot - bar_width) / 2.0;
            SvgBar {
                label: bar.label.clone(),
                value: format!("{value:.2}"),
                color: bar.color,
                x: tenths(x),
                y: tenths(y_of(value).min(baseline)),
                width: tenths(bar_width),
                height: tenths((y_of(value) - baseline).abs()),
                center: tenths(x + bar_width / 2.0),
            }
        })
        .collect();

    Some(SvgChart {
        series_label: chart.series_label,
        width: CHART_WIDTH,
        height: CHART_HEIGHT,
        side: PLOT_SIDE,
        label_y: LABEL_Y,
        baseline: tenths(baseline),
        baseline_end: CHART_WIDTH - PLOT_SIDE,
        bars,
    })
}

impl DashboardTemplate {
    pub fn new(data: &DashboardData) -> Self {
        let sections = [
            (charts::mom_growth_chart(&data.mom_growth), "Loading growth data…"),
            (
                charts::country_chart(&data.revenue_by_country),
                "Loading country revenue…",
            ),
            (
                charts::top_customers_chart(&data.top_customers),
                "Loading top customers…",
            ),
        ];
        let count = sections.len();

        Self {
            kpis: data.kpis.as_ref().map(kpi_cards).unwrap_or_default(),
            sections: sections
                .into_iter()
                .enumerate()
                .map(|(i, (chart, placeholder))| ChartSection {
                    title: chart.title,
                    placeholder,
                    last: i + 1 == count,
                    svg: layout(&chart),
                })
                .collect(),
        }
    }
}

/// Render the complete dashboard document.
pub fn render(data: &DashboardData) -> Result<String, askama::Error> {
    DashboardTemplate::new(data).render()
}
