use clinova_core::models::user::{NewProfile, UserProfile};

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::routes;

/// Fetch a user record by identity uid. Deserialization is the role
/// boundary: wire codes become [`clinova_core::models::user::Role`] here
/// and integer comparisons never leak past this call.
pub async fn fetch_profile(client: &ApiClient, uid: &str) -> Result<UserProfile, ApiError> {
    client.get_json(&routes::profile(uid), &[]).await
}

/// Create or refresh the caller's profile right after the identity
/// provider account exists. Authenticated with the provider's id token.
pub async fn register_profile(
    client: &ApiClient,
    id_token: &str,
    profile: &NewProfile,
) -> Result<(), ApiError> {
    client
        .post_json_bearer(routes::REGISTER_PROFILE, profile, id_token)
        .await
}
