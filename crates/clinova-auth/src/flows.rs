use serde::Deserialize;
use tracing::info;

use crate::client::IdentityClient;
use crate::error::AuthError;

/// Tokens issued by the identity provider for a signed-in account.
#[derive(Debug, Clone)]
pub struct AuthTokens {
    pub uid: String,
    pub email: Option<String>,
    pub id_token: String,
    pub refresh_token: String,
    pub expires_in_seconds: u64,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct AccountsResponse {
    id_token: String,
    refresh_token: String,
    expires_in: String,
    local_id: String,
    #[serde(default)]
    email: Option<String>,
}

impl From<AccountsResponse> for AuthTokens {
    fn from(body: AccountsResponse) -> Self {
        AuthTokens {
            uid: body.local_id,
            email: body.email,
            id_token: body.id_token,
            refresh_token: body.refresh_token,
            expires_in_seconds: body.expires_in.parse().unwrap_or(3600),
        }
    }
}

// The refresh endpoint answers in snake_case, unlike the accounts API.
#[derive(Deserialize)]
struct RefreshResponse {
    id_token: String,
    refresh_token: String,
    expires_in: String,
    user_id: String,
}

#[derive(Deserialize)]
struct ProviderError {
    error: ProviderErrorBody,
}

#[derive(Deserialize)]
struct ProviderErrorBody {
    message: String,
}

async fn provider_message(resp: reqwest::Response) -> String {
    match resp.json::<ProviderError>().await {
        Ok(body) => body.error.message,
        Err(_) => "unexpected response".to_string(),
    }
}

/// Sign in with email and password.
pub async fn sign_in_with_password(
    client: &IdentityClient,
    email: &str,
    password: &str,
) -> Result<AuthTokens, AuthError> {
    info!(email = email, "signing in");

    let resp = client
        .http
        .post(format!(
            "{}/accounts:signInWithPassword",
            client.accounts_url
        ))
        .query(&[("key", client.api_key.as_str())])
        .json(&serde_json::json!({
            "email": email,
            "password": password,
            "returnSecureToken": true,
        }))
        .send()
        .await?;

    if !resp.status().is_success() {
        return Err(AuthError::AuthFailed(provider_message(resp).await));
    }

    let body: AccountsResponse = resp.json().await?;
    Ok(body.into())
}

/// Create a new account with email and password.
pub async fn sign_up(
    client: &IdentityClient,
    email: &str,
    password: &str,
) -> Result<AuthTokens, AuthError> {
    info!(email = email, "creating account");

    let resp = client
        .http
        .post(format!("{}/accounts:signUp", client.accounts_url))
        .query(&[("key", client.api_key.as_str())])
        .json(&serde_json::json!({
            "email": email,
            "password": password,
            "returnSecureToken": true,
        }))
        .send()
        .await?;

    if !resp.status().is_success() {
        return Err(AuthError::Provider(provider_message(resp).await));
    }

    let body: AccountsResponse = resp.json().await?;
    Ok(body.into())
}

/// Exchange a refresh token for fresh tokens.
pub async fn refresh_auth(
    client: &IdentityClient,
    refresh_token: &str,
) -> Result<AuthTokens, AuthError> {
    let resp = client
        .http
        .post(format!("{}/token", client.token_url))
        .query(&[("key", client.api_key.as_str())])
        .form(&[
            ("grant_type", "refresh_token"),
            ("refresh_token", refresh_token),
        ])
        .send()
        .await?;

    if !resp.status().is_success() {
        return Err(AuthError::AuthFailed(provider_message(resp).await));
    }

    let body: RefreshResponse = resp.json().await?;
    Ok(AuthTokens {
        uid: body.user_id,
        email: None,
        id_token: body.id_token,
        refresh_token: body.refresh_token,
        expires_in_seconds: body.expires_in.parse().unwrap_or(3600),
    })
}
