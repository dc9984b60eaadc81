//! Response records, one per reporting endpoint.
//!
//! Each record is decoded straight from its aggregate query and serialized
//! as-is. The dashboard deserializes the same types on the other side.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Headline totals across all orders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Kpis {
    pub total_users: i64,
    pub total_orders: i64,
    pub total_revenue: f64,
}

/// Revenue for one calendar month; `month` is the first day of that month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct MonthlyRevenue {
    pub month: NaiveDate,
    pub revenue: f64,
}

/// Percent change in revenue against the previous month.
///
/// `mom_growth` is `None` when there is no previous month or its revenue
/// was zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct MomGrowth {
    pub month: NaiveDate,
    pub mom_growth: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct CountryRevenue {
    pub country: String,
    pub revenue: f64,
}

/// A customer ranked by total spend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct TopCustomer {
    pub user_id: i64,
    pub lifetime_value: f64,
}
