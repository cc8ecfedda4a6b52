use clinova_core::models::diagnostic::{DiagnosticOutcome, DiagnosticRecord, NewDiagnostic};

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::routes;

/// Submit a diagnostic for a confirmed session. The backend stores the
/// diagnostic and completes the session in one step; both come back.
pub async fn submit_diagnostic(
    client: &ApiClient,
    payload: &NewDiagnostic,
) -> Result<DiagnosticOutcome, ApiError> {
    client.post_json(routes::DIAGNOSTICS, payload).await
}

/// A patient's diagnostic history: every session, paired with its
/// diagnostic where one has been recorded.
pub async fn patient_history(
    client: &ApiClient,
    patient_id: &str,
) -> Result<Vec<DiagnosticRecord>, ApiError> {
    client
        .get_json(
            routes::DIAGNOSTICS,
            &[("paciente_id", patient_id.to_string())],
        )
        .await
}
