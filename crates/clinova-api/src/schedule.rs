use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use clinova_core::models::booking::BookingRequest;
use clinova_core::schedule::{ReservedSlot, WeeklyAvailability};

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::retry::{RETRY_DELAY, retry_once};
use crate::routes;

#[derive(Serialize, Deserialize)]
struct WeeklyEnvelope {
    dias: WeeklyAvailability,
}

#[derive(Deserialize)]
struct ReservationsEnvelope {
    listed: Vec<ReservedSlot>,
}

/// Ids of the two participants of a prospective booking, resolved from
/// their account emails before any scheduling call is made.
#[derive(Debug, Clone, Deserialize)]
pub struct BookingParticipants {
    #[serde(rename = "terapeuta_id")]
    pub therapist_id: String,
    #[serde(rename = "paciente_id")]
    pub patient_id: String,
}

/// Fetch a therapist's weekly availability template.
pub async fn fetch_weekly(
    client: &ApiClient,
    therapist_id: &str,
) -> Result<WeeklyAvailability, ApiError> {
    let envelope: WeeklyEnvelope = client
        .get_json(&routes::weekly_schedule(therapist_id), &[])
        .await?;
    Ok(envelope.dias)
}

/// Persist a therapist's weekly availability template. The body is the
/// same envelope the fetch returns.
pub async fn save_weekly(
    client: &ApiClient,
    therapist_id: &str,
    weekly: &WeeklyAvailability,
) -> Result<(), ApiError> {
    client
        .put_json_unit(
            &routes::weekly_schedule(therapist_id),
            &WeeklyEnvelope {
                dias: weekly.clone(),
            },
        )
        .await
}

/// Fetch the reservations already made for a therapist on one date.
///
/// This is the one backend call that retries: once, after a fixed delay.
pub async fn fetch_reservations(
    client: &ApiClient,
    therapist_id: &str,
    date: Date,
) -> Result<Vec<ReservedSlot>, ApiError> {
    let path = routes::reservations(therapist_id);
    let query = [("fecha", date.to_string())];
    let envelope: ReservationsEnvelope =
        retry_once(RETRY_DELAY, || client.get_json(&path, &query)).await?;
    Ok(envelope.listed)
}

/// Create a reservation.
pub async fn book(client: &ApiClient, request: &BookingRequest) -> Result<(), ApiError> {
    client.post_json_unit(routes::BOOK, request).await
}

/// Resolve the participant ids for a booking from the two account emails.
pub async fn resolve_participants(
    client: &ApiClient,
    therapist_email: &str,
    patient_email: &str,
) -> Result<BookingParticipants, ApiError> {
    client
        .get_json(
            routes::SESSION_PARTICIPANTS,
            &[
                ("terapeutaEmail", therapist_email.to_string()),
                ("pacienteEmail", patient_email.to_string()),
            ],
        )
        .await
}
