use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Lifecycle of a booked session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum SessionStatus {
    #[serde(rename = "pendiente")]
    Pending,
    #[serde(rename = "confirmada")]
    Confirmed,
    #[serde(rename = "rechazada")]
    Rejected,
    #[serde(rename = "completada")]
    Completed,
}

/// A scheduled therapy session as served by the backend.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Session {
    #[serde(rename = "session_id")]
    pub id: String,
    #[serde(rename = "terapeuta_id")]
    pub therapist_id: String,
    #[serde(rename = "paciente_id")]
    pub patient_id: String,
    #[serde(rename = "fecha")]
    pub date: jiff::civil::Date,
    #[serde(rename = "hora_inicio")]
    #[ts(type = "string")]
    pub starts_at: jiff::civil::DateTime,
    #[serde(rename = "hora_final")]
    #[ts(type = "string")]
    pub ends_at: jiff::civil::DateTime,
    #[serde(rename = "duracion")]
    pub duration_minutes: u32,
    #[serde(rename = "motivo", default)]
    pub reason: Option<String>,
    #[serde(rename = "estado")]
    pub status: SessionStatus,
}

impl Session {
    pub fn is_pending(&self) -> bool {
        self.status == SessionStatus::Pending
    }

    pub fn is_confirmed(&self) -> bool {
        self.status == SessionStatus::Confirmed
    }
}
