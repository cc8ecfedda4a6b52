use jiff::civil::Date;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;
use crate::schedule::{FIRST_BLOCK, LAST_BLOCK, block_end_hour, block_start_hour, day_key};

/// Wire payload for creating a reservation.
///
/// Start and end timestamps are `YYYY-MM-DDTHH:00` local with no offset,
/// derived from the block number through the shared hour convention.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct BookingRequest {
    #[serde(rename = "terapeuta_id")]
    pub therapist_id: String,
    #[serde(rename = "paciente_id")]
    pub patient_id: String,
    #[serde(rename = "fecha")]
    pub date: Date,
    #[serde(rename = "hora_inicio")]
    pub starts_at: String,
    #[serde(rename = "hora_final")]
    pub ends_at: String,
    #[serde(rename = "motivo")]
    pub reason: String,
    #[serde(rename = "dia")]
    pub day: String,
    #[serde(rename = "bloque")]
    pub block: u8,
}

impl BookingRequest {
    pub fn new(
        therapist_id: impl Into<String>,
        patient_id: impl Into<String>,
        date: Date,
        block: u8,
        reason: impl Into<String>,
    ) -> Result<Self, CoreError> {
        if !(FIRST_BLOCK..=LAST_BLOCK).contains(&block) {
            return Err(CoreError::BlockOutOfRange(block));
        }
        Ok(Self {
            therapist_id: therapist_id.into(),
            patient_id: patient_id.into(),
            date,
            starts_at: format!("{date}T{:02}:00", block_start_hour(block)),
            ends_at: format!("{date}T{:02}:00", block_end_hour(block)),
            reason: reason.into(),
            day: day_key(date.weekday()).to_string(),
            block,
        })
    }
}
