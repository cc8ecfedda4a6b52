//! Backend route conventions.
//!
//! Pure string functions — no HTTP dependency. These define the canonical
//! route layout of the Clinova backend API.

pub fn weekly_schedule(therapist_id: &str) -> String {
    format!("/api/horario/{therapist_id}")
}

pub fn reservations(therapist_id: &str) -> String {
    format!("/api/listed/{therapist_id}")
}

pub const BOOK: &str = "/api/listed";

pub const SESSION_PARTICIPANTS: &str = "/api/sesion";

pub const SESSION_LIST: &str = "/api/sesion/list";

pub fn session_status(session_id: &str) -> String {
    format!("/api/sesion/{session_id}/estado")
}

pub const DIAGNOSTICS: &str = "/api/diagnostic";

pub const REGISTER_PROFILE: &str = "/api/auth/profile";

pub fn profile(uid: &str) -> String {
    format!("/api/profile/{uid}")
}

pub const USERS: &str = "/api/users";

pub fn user_role(uid: &str) -> String {
    format!("/api/users/rol/{uid}")
}

pub const THERAPISTS: &str = "/api/users/terapeutas";

pub fn user_therapist_type(uid: &str) -> String {
    format!("/api/users/{uid}/terapeuta")
}

pub const THERAPIST_TYPES: &str = "/api/terapeuta";
