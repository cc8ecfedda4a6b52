use serde::Serialize;

use clinova_core::models::session::{Session, SessionStatus};
use clinova_core::models::user::Role;

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::routes;

/// List the sessions visible to a user: patients see the sessions they
/// booked, therapists the sessions booked with them. Administrators have
/// no session list.
pub async fn list_sessions(
    client: &ApiClient,
    role: Role,
    uid: &str,
) -> Result<Vec<Session>, ApiError> {
    let key = match role {
        Role::Patient => "paciente_id",
        Role::Therapist => "terapeuta_id",
        Role::Admin => {
            return Err(ApiError::NotAuthorized(
                "administrators do not have a session list".to_string(),
            ));
        }
    };
    client
        .get_json(routes::SESSION_LIST, &[(key, uid.to_string())])
        .await
}

#[derive(Serialize)]
struct StatusChange {
    estado: SessionStatus,
}

/// Move a session to a new status and return the updated record.
pub async fn set_session_status(
    client: &ApiClient,
    session_id: &str,
    status: SessionStatus,
) -> Result<Session, ApiError> {
    client
        .put_json(
            &routes::session_status(session_id),
            &StatusChange { estado: status },
        )
        .await
}
