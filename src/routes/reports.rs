//! Reporting routes: one fixed aggregate per endpoint, no parameters.

use axum::{extract::State, Json};

use crate::errors::AppError;
use crate::models::report::{CountryRevenue, Kpis, MomGrowth, MonthlyRevenue, TopCustomer};
use crate::services::reports;
use crate::AppState;

/// GET /api/kpis — distinct users, order count and total revenue.
pub async fn kpis(State(state): State<AppState>) -> Result<Json<Kpis>, AppError> {
    let kpis = reports::fetch_kpis(&state.db)
        .await
        .map_err(AppError::query("Failed to fetch KPIs"))?;
    Ok(Json(kpis))
}

/// GET /api/monthly-revenue — revenue per month, ascending.
pub async fn monthly_revenue(
    State(state): State<AppState>,
) -> Result<Json<Vec<MonthlyRevenue>>, AppError> {
    let rows = reports::fetch_monthly_revenue(&state.db)
        .await
        .map_err(AppError::query("Failed to fetch monthly revenue"))?;
    Ok(Json(rows))
}

/// GET /api/mom-growth — month-over-month growth percentage, ascending.
pub async fn mom_growth(State(state): State<AppState>) -> Result<Json<Vec<MomGrowth>>, AppError> {
    let rows = reports::fetch_mom_growth(&state.db)
        .await
        .map_err(AppError::query("Failed to fetch MoM growth"))?;
    Ok(Json(rows))
}

/// GET /api/revenue-by-country — top 10 countries by revenue.
pub async fn revenue_by_country(
    State(state): State<AppState>,
) -> Result<Json<Vec<CountryRevenue>>, AppError> {
    let rows = reports::fetch_revenue_by_country(&state.db)
        .await
        .map_err(AppError::query("Failed to fetch revenue by country"))?;
    Ok(Json(rows))
}

/// GET /api/top-customers — top 10 customers by lifetime value.
pub async fn top_customers(
    State(state): State<AppState>,
) -> Result<Json<Vec<TopCustomer>>, AppError> {
    let rows = reports::fetch_top_customers(&state.db)
        .await
        .map_err(AppError::query("Failed to fetch top customers"))?;
    Ok(Json(rows))
}
