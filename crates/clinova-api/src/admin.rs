use serde::Serialize;

use clinova_core::models::therapist::TherapistType;
use clinova_core::models::user::{Role, UserProfile};

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::routes;

/// Every registered user. Admin-only on the backend.
pub async fn list_users(client: &ApiClient) -> Result<Vec<UserProfile>, ApiError> {
    client.get_json(routes::USERS, &[]).await
}

#[derive(Serialize)]
struct RoleChange {
    #[serde(rename = "nuevoRol")]
    new_role: Role,
}

/// Reassign a user's role.
pub async fn set_user_role(client: &ApiClient, uid: &str, role: Role) -> Result<(), ApiError> {
    client
        .put_json_unit(&routes::user_role(uid), &RoleChange { new_role: role })
        .await
}

/// The therapist directory shown to patients.
pub async fn list_therapists(client: &ApiClient) -> Result<Vec<UserProfile>, ApiError> {
    client.get_json(routes::THERAPISTS, &[]).await
}

/// The specialty catalog.
pub async fn list_therapist_types(client: &ApiClient) -> Result<Vec<TherapistType>, ApiError> {
    client.get_json(routes::THERAPIST_TYPES, &[]).await
}

#[derive(Serialize)]
struct TherapistTypeChange<'a> {
    tipo_terapeuta: &'a str,
}

/// Set a therapist's own specialty from the catalog.
pub async fn set_therapist_type(
    client: &ApiClient,
    uid: &str,
    type_name: &str,
) -> Result<(), ApiError> {
    client
        .put_json_unit(
            &routes::user_therapist_type(uid),
            &TherapistTypeChange {
                tipo_terapeuta: type_name,
            },
        )
        .await
}
