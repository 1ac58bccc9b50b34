//! Backend REST client for employee snapshots.

use crate::config::BackendConfig;
use crate::error::{AppError, Result};
use crate::models::EmployeeRecord;
use reqwest::Client;
use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue};
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info};

/// HTTP client for the HR backend.
///
/// Only reads data. Loading and error states belong to the caller; the
/// directory engine just receives the parsed list.
pub struct BackendClient {
    client: Client,
    employees_url: String,
}

impl BackendClient {
    /// Create a new client instance from backend settings.
    pub fn new(config: &BackendConfig) -> Result<Self> {
        if !config.is_configured() {
            return Err(AppError::config("Backend URL is not configured"));
        }

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        if let Some(token) = &config.api_token {
            let value = HeaderValue::from_str(&format!("Bearer {token}"))
                .map_err(|e| AppError::config(format!("Invalid API token: {e}")))?;
            headers.insert(AUTHORIZATION, value);
        }

        let client = Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            employees_url: config.employees_url(),
        })
    }

    /// Download the current employee list.
    pub async fn fetch_employees(&self) -> Result<Vec<EmployeeRecord>> {
        debug!("GET {}", self.employees_url);
        let response = self.client.get(&self.employees_url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::Backend {
                status: status.as_u16(),
                url: self.employees_url.clone(),
            });
        }

        let body = response.text().await?;
        let employees = parse_employees(&body)?;
        info!("Fetched {} employees from backend", employees.len());
        Ok(employees)
    }
}

/// Parse an employee list body. `null` is treated as an empty list.
pub fn parse_employees(body: &str) -> Result<Vec<EmployeeRecord>> {
    serde_json::from_str::<Option<Vec<EmployeeRecord>>>(body)
        .map(Option::unwrap_or_default)
        .map_err(|e| AppError::parse(format!("Invalid employee list: {e}")))
}

/// Load an employee snapshot previously saved as JSON.
pub fn load_snapshot(path: &Path) -> Result<Vec<EmployeeRecord>> {
    let content = std::fs::read_to_string(path)?;
    let employees = parse_employees(&content)?;
    info!("Loaded {} employees from {}", employees.len(), path.display());
    Ok(employees)
}
