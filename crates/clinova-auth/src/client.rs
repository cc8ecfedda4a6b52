/// Handle on the identity provider's REST API. The provider scopes every
/// call to a project API key; no SDK exists for it, so the wrapper speaks
/// plain HTTPS.
#[derive(Debug, Clone)]
pub struct IdentityClient {
    pub(crate) http: reqwest::Client,
    pub(crate) accounts_url: String,
    pub(crate) token_url: String,
    pub(crate) api_key: String,
}

const DEFAULT_ACCOUNTS_URL: &str = "https://identitytoolkit.googleapis.com/v1";
const DEFAULT_TOKEN_URL: &str = "https://securetoken.googleapis.com/v1";

/// Build an identity client for the hosted provider endpoints.
pub fn build_client(api_key: impl Into<String>) -> IdentityClient {
    IdentityClient {
        http: reqwest::Client::new(),
        accounts_url: DEFAULT_ACCOUNTS_URL.to_string(),
        token_url: DEFAULT_TOKEN_URL.to_string(),
        api_key: api_key.into(),
    }
}

/// Build an identity client against specific endpoints (a local emulator,
/// or a regional deployment).
pub fn build_client_with_endpoints(
    api_key: impl Into<String>,
    accounts_url: impl Into<String>,
    token_url: impl Into<String>,
) -> IdentityClient {
    IdentityClient {
        http: reqwest::Client::new(),
        accounts_url: accounts_url.into().trim_end_matches('/').to_string(),
        token_url: token_url.into().trim_end_matches('/').to_string(),
        api_key: api_key.into(),
    }
}
