//! Bar chart series derived from report rows.

use crate::models::report::{CountryRevenue, MomGrowth, TopCustomer};

pub const GROWTH_POSITIVE_COLOR: &str = "#16a34a";
pub const GROWTH_NEGATIVE_COLOR: &str = "#dc2626";
pub const COUNTRY_COLOR: &str = "#2563eb";
pub const CUSTOMER_COLOR: &str = "#7c3aed";

#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    pub label: String,
    pub value: f64,
    pub color: &'static str,
}

/// One data series of bars, in display order.
#[derive(Debug, Clone, PartialEq)]
pub struct BarChart {
    pub title: &'static str,
    pub series_label: &'static str,
    pub bars: Vec<Bar>,
}

impl BarChart {
    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    /// Value range to plot, always spanning zero.
    pub fn value_range(&self) -> (f64, f64) {
        self.bars
            .iter()
            .map(|b| b.value)
            .filter(|v| v.is_finite())
            .fold((0.0_f64, 0.0_f64), |(lo, hi), v| (lo.min(v), hi.max(v)))
    }
}

/// Growth bars: green at or above zero, red below. Months without a prior
/// month plot as zero.
pub fn mom_growth_chart(rows: &[MomGrowth]) -> BarChart {
    let bars = rows
        .iter()
        .map(|row| {
            let value = row.mom_growth.unwrap_or(0.0);
            Bar {
                label: row.month.format("%b %Y").to_string(),
                value,
                color: if value >= 0.0 {
                    GROWTH_POSITIVE_COLOR
                } else {
                    GROWTH_NEGATIVE_COLOR
                },
            }
        })
        .collect();

    BarChart {
        title: "📈 Month-over-Month Growth",
        series_label: "MoM Growth (%)",
        bars,
    }
}

pub fn country_chart(rows: &[CountryRevenue]) -> BarChart {
    let bars = rows
        .iter()
        .map(|row| Bar {
            label: row.country.clone(),
            value: row.revenue,
            color: COUNTRY_COLOR,
        })
        .collect();

    BarChart {
        title: "🌍 Revenue by Country",
        series_label: "Revenue (£)",
        bars,
    }
}

pub fn top_customers_chart(rows: &[TopCustomer]) -> BarChart {
    let bars = rows
        .iter()
        .map(|row| Bar {
            label: format!("User {}", row.user_id),
            value: row.lifetime_value,
            color: CUSTOMER_COLOR,
        })
        .collect();

    BarChart {
        title: "🧠 Top Customers (Pareto / 80–20)",
        series_label: "Lifetime Value (£)",
        bars,
    }
}
