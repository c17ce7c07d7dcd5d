//! HTTP client for the patient and recommendation endpoints.

use std::time::Duration;

use dianovi_types::{Patient, Recommendation};
use reqwest::Response;

use crate::error::{ApiError, ApiResult};

/// Base URL used when no override is configured.
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Client for the dianovi patient API.
///
/// Wraps a [`reqwest::Client`] and a base URL. Every method maps to exactly
/// one HTTP request; there is no caching, retrying or request coalescing.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Creates a client for the given base URL.
    ///
    /// A trailing slash on the base URL is stripped so path construction is
    /// uniform.
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    /// Returns the base URL this client talks to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Probes the backend's readiness endpoint (`GET /`).
    ///
    /// # Errors
    ///
    /// Returns an `ApiError` on transport failure or a non-2xx status.
    pub async fn health(&self) -> ApiResult<()> {
        let response = self.http.get(self.url("/")).send().await?;
        ensure_success("health", response).await?;
        Ok(())
    }

    /// Fetches all patients.
    ///
    /// # Returns
    ///
    /// The patients in the order the backend returned them.
    ///
    /// # Errors
    ///
    /// Returns an `ApiError` on transport failure, a non-2xx status, or a
    /// body that does not parse as a patient array.
    pub async fn list_patients(&self) -> ApiResult<Vec<Patient>> {
        tracing::debug!("GET {}", self.url("/api/v1/patients"));
        let response = self.http.get(self.url("/api/v1/patients")).send().await?;
        let response = ensure_success("list patients", response).await?;
        Ok(response.json().await?)
    }

    /// Fetches a single patient by identifier.
    ///
    /// # Errors
    ///
    /// Returns an `ApiError` on transport failure or a non-2xx status; a
    /// missing record surfaces as 404 (`ApiError::is_not_found`).
    pub async fn get_patient(&self, patient_id: &str) -> ApiResult<Patient> {
        let url = self.url(&format!("/api/v1/patients/{patient_id}"));
        tracing::debug!("GET {}", url);
        let response = self.http.get(url).send().await?;
        let response = ensure_success("get patient", response).await?;
        Ok(response.json().await?)
    }

    /// Creates a patient record.
    ///
    /// # Errors
    ///
    /// Returns an `ApiError` on transport failure or a non-2xx status; an
    /// already-used identifier surfaces as 409 (`ApiError::is_conflict`).
    pub async fn create_patient(&self, patient: &Patient) -> ApiResult<()> {
        let url = self.url("/api/v1/patients");
        tracing::debug!("POST {}", url);
        let response = self.http.post(url).json(patient).send().await?;
        ensure_success("create patient", response).await?;
        Ok(())
    }

    /// Replaces a patient's mutable fields.
    ///
    /// # Errors
    ///
    /// Returns an `ApiError` on transport failure or a non-2xx status.
    pub async fn update_patient(&self, patient_id: &str, patient: &Patient) -> ApiResult<()> {
        let url = self.url(&format!("/api/v1/patients/{patient_id}"));
        tracing::debug!("PUT {}", url);
        let response = self.http.put(url).json(patient).send().await?;
        ensure_success("update patient", response).await?;
        Ok(())
    }

    /// Deletes a patient record.
    ///
    /// # Errors
    ///
    /// Returns an `ApiError` on transport failure or a non-2xx status.
    pub async fn delete_patient(&self, patient_id: &str) -> ApiResult<()> {
        let url = self.url(&format!("/api/v1/patients/{patient_id}"));
        tracing::debug!("DELETE {}", url);
        let response = self.http.delete(url).send().await?;
        ensure_success("delete patient", response).await?;
        Ok(())
    }

    /// Fetches the recommendations for a patient.
    ///
    /// # Returns
    ///
    /// The recommendations in the order the backend returned them; an empty
    /// vector when the patient has none.
    ///
    /// # Errors
    ///
    /// Returns an `ApiError` on transport failure, a non-2xx status, or a
    /// body that does not parse as a recommendation array.
    pub async fn list_recommendations(&self, patient_id: &str) -> ApiResult<Vec<Recommendation>> {
        let url = self.url(&format!("/api/v1/patients/{patient_id}/recommendations"));
        tracing::debug!("GET {}", url);
        let response = self.http.get(url).send().await?;
        let response = ensure_success("list recommendations", response).await?;
        Ok(response.json().await?)
    }

    /// Polls the readiness endpoint until it answers or attempts run out.
    ///
    /// Used by the bulk import flow, which may start before the backend
    /// does. Interactive operations never retry.
    ///
    /// # Errors
    ///
    /// Returns the last observed `ApiError` when every attempt failed.
    pub async fn wait_until_ready(&self, attempts: u32, delay: Duration) -> ApiResult<()> {
        let attempts = attempts.max(1);
        let mut attempt = 1;
        loop {
            match self.health().await {
                Ok(()) => {
                    tracing::info!("API is ready");
                    return Ok(());
                }
                Err(e) if attempt >= attempts => return Err(e),
                Err(e) => {
                    tracing::warn!("API not ready (attempt {}/{}): {}", attempt, attempts, e);
                }
            }
            attempt += 1;
            tokio::time::sleep(delay).await;
        }
    }
}

/// Checks the response status, converting any non-2xx into `ApiError::Status`
/// with whatever body text could be read.
async fn ensure_success(operation: &'static str, response: Response) -> ApiResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let detail = response.text().await.unwrap_or_default();
    Err(ApiError::Status {
        operation,
        status,
        detail,
    })
}
