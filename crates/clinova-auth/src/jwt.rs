use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};
use serde::Deserialize;

use crate::error::AuthError;

/// Claims extracted from an identity-provider JWT.
#[derive(Debug, Deserialize)]
pub struct IdentityClaims {
    pub sub: String,
    pub iss: String,
    pub aud: String,
    pub exp: u64,
    pub iat: u64,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub user_id: Option<String>,
}

/// Validate an identity token against the project it was issued for.
///
/// In production, you would fetch the provider's current public keys and
/// use the one matching the token's key id. This function takes a
/// pre-fetched key.
pub fn validate_token(
    token: &str,
    decoding_key: &DecodingKey,
    project_id: &str,
) -> Result<IdentityClaims, AuthError> {
    let issuer = format!("https://securetoken.google.com/{project_id}");

    let mut validation = Validation::new(Algorithm::RS256);
    validation.set_issuer(&[&issuer]);
    validation.set_audience(&[project_id]);
    validation.validate_exp = true;

    let token_data =
        decode::<IdentityClaims>(token, decoding_key, &validation).map_err(|err| {
            if matches!(
                err.kind(),
                jsonwebtoken::errors::ErrorKind::ExpiredSignature
            ) {
                AuthError::TokenExpired
            } else {
                AuthError::Jwt(err)
            }
        })?;

    if token_data.claims.sub.is_empty() {
        return Err(AuthError::InvalidToken("empty subject".to_string()));
    }

    Ok(token_data.claims)
}
