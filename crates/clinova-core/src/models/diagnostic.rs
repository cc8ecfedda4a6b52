use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::session::Session;

/// Clinical notes a therapist attaches to a confirmed session.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Diagnostic {
    #[serde(rename = "nota_terapeuta")]
    pub therapist_note: String,
    #[serde(rename = "diagnostico")]
    pub diagnosis: String,
    #[serde(rename = "tratamiento_recomendado")]
    pub recommended_treatment: String,
    #[serde(rename = "estado_emocional_inicio")]
    pub emotional_state_start: String,
    #[serde(rename = "estado_emocional_final")]
    pub emotional_state_end: String,
}

impl Diagnostic {
    /// Every field must carry text before submission; the backend rejects
    /// partial diagnostics, so the client checks first.
    pub fn is_complete(&self) -> bool {
        !self.therapist_note.trim().is_empty()
            && !self.diagnosis.trim().is_empty()
            && !self.recommended_treatment.trim().is_empty()
            && !self.emotional_state_start.trim().is_empty()
            && !self.emotional_state_end.trim().is_empty()
    }
}

/// Submission payload tying a diagnostic to its session.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct NewDiagnostic {
    pub session_id: String,
    #[serde(flatten)]
    pub diagnostic: Diagnostic,
}

/// Backend response to a diagnostic submission: the stored diagnostic and
/// the session it completed.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DiagnosticOutcome {
    pub diagnostic: Diagnostic,
    pub session: Session,
}

/// One entry of a patient's diagnostic history: a session paired with its
/// diagnostic, if one has been recorded yet.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DiagnosticRecord {
    pub session: Session,
    #[serde(default)]
    pub diagnostic: Option<Diagnostic>,
}
