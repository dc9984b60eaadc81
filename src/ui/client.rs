//! HTTP client for the reporting API and the dashboard's initial load.

use serde::de::DeserializeOwned;

use crate::models::report::{CountryRevenue, Kpis, MomGrowth, TopCustomer};

#[derive(Debug, thiserror::Error)]
pub enum UiError {
    #[error("Request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Request to {url} returned {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },
}

/// Typed client over the reporting endpoints.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, UiError> {
        let url = format!("{}{path}", self.base_url);
        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|source| UiError::Request {
                url: url.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(UiError::Status { url, status });
        }

        response
            .json::<T>()
            .await
            .map_err(|source| UiError::Request { url, source })
    }

    pub async fn kpis(&self) -> Result<Kpis, UiError> {
        self.get("/api/kpis").await
    }

    pub async fn mom_growth(&self) -> Result<Vec<MomGrowth>, UiError> {
        self.get("/api/mom-growth").await
    }

    pub async fn revenue_by_country(&self) -> Result<Vec<CountryRevenue>, UiError> {
        self.get("/api/revenue-by-country").await
    }

    pub async fn top_customers(&self) -> Result<Vec<TopCustomer>, UiError> {
        self.get("/api/top-customers").await
    }
}

/// Everything the dashboard shows. Missing or empty parts render as loading.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardData {
    pub kpis: Option<Kpis>,
    pub mom_growth: Vec<MomGrowth>,
    pub revenue_by_country: Vec<CountryRevenue>,
    pub top_customers: Vec<TopCustomer>,
}

/// Fetch the four dashboard metrics concurrently.
///
/// Failures are logged and leave their part of the dashboard empty; they
/// never affect the other requests.
pub async fn load_dashboard(client: &ApiClient) -> DashboardData {
    let (kpis, mom_growth, revenue_by_country, top_customers) = tokio::join!(
        client.kpis(),
        client.mom_growth(),
        client.revenue_by_country(),
        client.top_customers(),
    );

    DashboardData {
        kpis: logged("KPI", kpis),
        mom_growth: logged("MoM growth", mom_growth).unwrap_or_default(),
        revenue_by_country: logged("Country revenue", revenue_by_country).unwrap_or_default(),
        top_customers: logged("Top customers", top_customers).unwrap_or_default(),
    }
}

fn logged<T>(metric: &str, result: Result<T, UiError>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::error!(error = %e, metric, "Dashboard fetch failed");
            None
        }
    }
}
