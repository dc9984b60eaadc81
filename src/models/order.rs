//! Seed input rows for the users and orders tables.

use chrono::NaiveDate;
use serde::Deserialize;

/// One line of a seed CSV: an order together with its customer's country.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct OrderRecord {
    pub user_id: i64,
    pub country: String,
    pub amount: f64,
    pub order_date: NaiveDate,
}

impl OrderRecord {
    pub fn new(user_id: i64, country: &str, amount: f64, order_date: NaiveDate) -> Self {
        Self {
            user_id,
            country: country.to_string(),
            amount,
            order_date,
        }
    }
}
