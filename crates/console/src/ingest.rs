//! Bulk patient import.
//!
//! Reads a JSON array of patients and creates each against the backend,
//! after waiting for the API to become ready. An identifier the backend
//! already knows (409) is skipped; any other failure is counted and the
//! import carries on.

use std::path::Path;
use std::time::Duration;

use api_client::{ApiClient, ApiError};
use dianovi_types::Patient;

/// Default readiness attempts before giving up on the backend.
pub const READY_ATTEMPTS: u32 = 12;
/// Default delay between readiness attempts.
pub const READY_DELAY: Duration = Duration::from_secs(5);

/// Outcome counts of one import run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ImportSummary {
    pub created: usize,
    pub skipped: usize,
    pub failed: usize,
}

/// Errors that abort an import before any record is sent.
#[derive(Debug, thiserror::Error)]
pub enum ImportError {
    #[error("failed to read patient file: {0}")]
    FileRead(#[from] std::io::Error),
    #[error("patient file is not a JSON array of patients: {0}")]
    FileParse(#[from] serde_json::Error),
    #[error("API never became ready: {0}")]
    ApiUnavailable(ApiError),
}

/// Imports every patient in the given JSON file.
///
/// # Arguments
///
/// * `client` - The API client to create records through.
/// * `path` - A file holding a JSON array of patient objects.
/// * `attempts` / `delay` - Readiness polling before the first create.
///
/// # Returns
///
/// A summary of created, skipped (already existing) and failed records.
/// Per-record failures do not abort the run.
///
/// # Errors
///
/// Returns an `ImportError` if the file cannot be read or parsed, or if
/// the backend never answers the readiness probe.
pub async fn import_patients(
    client: &ApiClient,
    path: &Path,
    attempts: u32,
    delay: Duration,
) -> Result<ImportSummary, ImportError> {
    let contents = std::fs::read_to_string(path)?;
    let patients: Vec<Patient> = serde_json::from_str(&contents)?;
    tracing::info!(
        "Found {} patient records in {}",
        patients.len(),
        path.display()
    );

    client
        .wait_until_ready(attempts, delay)
        .await
        .map_err(ImportError::ApiUnavailable)?;

    let mut summary = ImportSummary::default();
    for patient in &patients {
        match client.create_patient(patient).await {
            Ok(()) => {
                tracing::info!("Created patient {}", patient.patient_id);
                summary.created += 1;
            }
            Err(e) if e.is_conflict() => {
                tracing::info!("Patient {} already exists, skipping", patient.patient_id);
                summary.skipped += 1;
            }
            Err(e) => {
                tracing::warn!("Failed to create patient {}: {}", patient.patient_id, e);
                summary.failed += 1;
            }
        }
    }
    Ok(summary)
}
