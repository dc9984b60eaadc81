//! Revenue reporting aggregation queries.
//!
//! Every report is a single read statement over `orders` (and `users` for the
//! country breakdown). Money is rounded to 2 decimals inside the query and
//! cast to `double precision` so rows decode into plain `f64` fields; the
//! `::numeric` casts keep `ROUND(_, 2)` valid whatever the column type.

use sqlx::PgPool;

use crate::models::report::{CountryRevenue, Kpis, MomGrowth, MonthlyRevenue, TopCustomer};

/// Row limit of the ranking reports.
pub const TOP_N: i64 = 10;

/// Distinct customers, order count and total revenue.
pub async fn fetch_kpis(pool: &PgPool) -> Result<Kpis, sqlx::Error> {
    sqlx::query_as::<_, Kpis>(
        r#"
        SELECT
            COUNT(DISTINCT user_id) AS total_users,
            COUNT(*) AS total_orders,
            COALESCE(ROUND(SUM(amount)::numeric, 2), 0)::double precision AS total_revenue
        FROM orders
        "#,
    )
    .fetch_one(pool)
    .await
}

/// Revenue per calendar month, oldest first.
pub async fn fetch_monthly_revenue(pool: &PgPool) -> Result<Vec<MonthlyRevenue>, sqlx::Error> {
    sqlx::query_as::<_, MonthlyRevenue>(
        r#"
        SELECT
            DATE_TRUNC('month', order_date)::date AS month,
            ROUND(SUM(amount)::numeric, 2)::double precision AS revenue
        FROM orders
        GROUP BY 1
        ORDER BY 1
        "#,
    )
    .fetch_all(pool)
    .await
}

/// Month-over-month revenue growth in percent, oldest first.
///
/// Growth is computed from unrounded monthly sums. The first month, and any
/// month following a zero-revenue month, has no growth (`NULL`).
pub async fn fetch_mom_growth(pool: &PgPool) -> Result<Vec<MomGrowth>, sqlx::Error> {
    sqlx::query_as::<_, MomGrowth>(
        r#"
        WITH monthly_revenue AS (
            SELECT
                DATE_TRUNC('month', order_date)::date AS month,
                SUM(amount)::numeric AS revenue
            FROM orders
            GROUP BY 1
        ),
        with_prior AS (
            SELECT
                month,
                revenue,
                LAG(revenue) OVER (ORDER BY month) AS prior_revenue
            FROM monthly_revenue
        )
        SELECT
            month,
            ROUND(
                100 * (revenue - prior_revenue) / NULLIF(prior_revenue, 0),
                2
            )::double precision AS mom_growth
        FROM with_prior
        ORDER BY month
        "#,
    )
    .fetch_all(pool)
    .await
}

/// Top countries by revenue, highest first.
pub async fn fetch_revenue_by_country(pool: &PgPool) -> Result<Vec<CountryRevenue>, sqlx::Error> {
    sqlx::query_as::<_, CountryRevenue>(
        r#"
        SELECT
            u.country,
            ROUND(SUM(o.amount)::numeric, 2)::double precision AS revenue
        FROM orders o
        INNER JOIN users u ON o.user_id = u.id
        GROUP BY u.country
        ORDER BY revenue DESC, u.country
        LIMIT $1
        "#,
    )
    .bind(TOP_N)
    .fetch_all(pool)
    .await
}

/// Top customers by lifetime spend, highest first.
pub async fn fetch_top_customers(pool: &PgPool) -> Result<Vec<TopCustomer>, sqlx::Error> {
    sqlx::query_as::<_, TopCustomer>(
        r#"
        SELECT
            o.user_id::bigint AS user_id,
            ROUND(SUM(o.amount)::numeric, 2)::double precision AS lifetime_value
        FROM orders o
        GROUP BY o.user_id
        ORDER BY lifetime_value DESC, o.user_id
        LIMIT $1
        "#,
    )
    .bind(TOP_N)
    .fetch_all(pool)
    .await
}
