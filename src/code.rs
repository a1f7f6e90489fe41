//! This module builds the authorization request that starts the login flow.
//!
//! # Key Structures
//!
//! ## `CodeRequest`
//! Holds the query parameters of Google's authorization endpoint.
//! - Includes the client ID, scope, redirect URI, state and nonce.
//!
//! ## `Code`
//! The authorization code Google appends to the redirect URI after the user consents.
//! It is exchanged for tokens with `verifier::exchange_code`.
//!
//! # Example
//! ```rust,no_run
//! use google_web_login::{code::build_auth_url, config::Config};
//!
//! let config = Config::builder()
//!     .client_id("your_client_id")
//!     .client_secret("your_client_secret")
//!     .build();
//!
//! let url = build_auth_url(&config).unwrap();
//! println!("Auth URL: {}", url);
//! ```
use tracing::{debug, error};
use url::Url;

use crate::{
    config::{AuthEndPoint, ClientID, Config, RedirectURI},
    error::Error,
    nonce::{DEFAULT_NONCE_LEN, Nonce},
    state::{DEFAULT_STATE_LEN, State},
};

/// Represents the value of the `code` query parameter sent by Google on the callback.
/// Codes are single use: Google rejects a second exchange of the same code.
#[derive(Debug, Clone, PartialEq)]
pub struct Code(pub(crate) String);

impl Code {
    pub fn value(&self) -> &str {
        &self.0
    }
}

impl From<String> for Code {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for Code {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Generates a URL to initiate the authorization request.
/// # Example
/// ```rust,no_run
/// use google_web_login::{code::CodeRequest, config::Config, nonce::Nonce, state::State};
///
/// let config = Config::builder().client_id("your_client_id").build();
/// let state = State::default();
/// let nonce = Nonce::new(16).unwrap();
///
/// let request = CodeRequest::new(&config, &state, &nonce);
/// let url = request.into_url().unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct CodeRequest {
    auth_endpoint: AuthEndPoint,
    client_id: ClientID,
    response_type: String,
    scope: String,
    redirect_uri: RedirectURI,
    state: State,
    nonce: Nonce,
}

impl CodeRequest {
    pub fn new(config: &Config, state: &State, nonce: &Nonce) -> Self {
        Self {
            auth_endpoint: config.auth_endpoint.to_owned(),
            client_id: config.client_id.to_owned(),
            response_type: "code".to_string(),
            scope: "openid".to_string(),
            redirect_uri: config.redirect_uri.to_owned(),
            state: state.to_owned(),
            nonce: nonce.to_owned(),
        }
    }

    /// Creates a request with a fresh `State` and `Nonce`.
    /// Fails with `Error::RandomSource` when the nonce cannot be generated.
    pub fn generate(config: &Config) -> Result<Self, Error> {
        let state = State::new(DEFAULT_STATE_LEN);
        let nonce = Nonce::new(DEFAULT_NONCE_LEN)?;
        Ok(Self::new(config, &state, &nonce))
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    pub fn nonce(&self) -> &Nonce {
        &self.nonce
    }

    /// Constructs the authorization endpoint URL with form-encoded query parameters.
    pub fn into_url(&self) -> Result<String, Error> {
        let url = Url::parse_with_params(
            &self.auth_endpoint.0,
            &[
                ("client_id", self.client_id.0.as_str()),
                ("scope", self.scope.as_str()),
                ("redirect_uri", self.redirect_uri.0.as_str()),
                ("state", self.state.0.as_str()),
                ("nonce", self.nonce.0.as_str()),
                ("response_type", self.response_type.as_str()),
            ],
        )
        .map_err(|e| {
            error!("Failed to parse auth endpoint: {}", e);
            Error::URL
        })?;
        Ok(url.into())
    }
}

/// Builds the URL the user should be sent to in order to log in with Google.
pub fn build_auth_url(config: &Config) -> Result<String, Error> {
    let url = CodeRequest::generate(config)?.into_url()?;
    debug!("url: {}", url);
    Ok(url)
}

// ==========Tests==========
#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use url::Url;

    use crate::{
        config::{CALLBACK_URL, ConfigBuilder, GOOGLE_AUTH_ENDPOINT},
        error::Error,
        nonce::Nonce,
        state::State,
    };

    use super::{Code, CodeRequest, build_auth_url};

    fn query(url: &str) -> HashMap<String, String> {
        Url::parse(url)
            .unwrap()
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect()
    }

    #[test]
    fn test_code_from() {
        assert_eq!(Code::from("auth_code").value(), "auth_code");
        assert_eq!(Code::from("auth_code".to_string()), Code::from("auth_code"));
    }

    #[test]
    fn test_code_req_new() {
        let config = ConfigBuilder::new()
            .auth_endpoint("https://auth.example.com/auth")
            .client_id("my_client_id")
            .redirect_uri("https://redirect.example.com")
            .build();
        let state = State::new(16);
        let nonce = Nonce::new(16).unwrap();

        let code_req = CodeRequest::new(&config, &state, &nonce);

        assert_eq!(code_req.auth_endpoint.0, "https://auth.example.com/auth");
        assert_eq!(code_req.client_id.0, "my_client_id");
        assert_eq!(code_req.redirect_uri.0, "https://redirect.example.com");
        assert_eq!(code_req.state(), &state);
        assert_eq!(code_req.nonce(), &nonce);
        assert_eq!(code_req.scope, "openid");
        assert_eq!(code_req.response_type, "code");
    }

    #[test]
    fn test_code_req_into_url() {
        let config = ConfigBuilder::new().client_id("my_client_id").build();
        let state = State::new(16);
        let nonce = Nonce::new(16).unwrap();

        let url = CodeRequest::new(&config, &state, &nonce).into_url().unwrap();
        let expected = format!(
            "{}?client_id={}&scope={}&redirect_uri={}&state={}&nonce={}&response_type={}",
            GOOGLE_AUTH_ENDPOINT,
            "my_client_id",
            "openid",
            "http%3A%2F%2Flocalhost%3A3000%2Fcallback",
            state.0,
            nonce.0,
            "code",
        );
        assert_eq!(url, expected);
    }

    #[test]
    fn test_build_auth_url() {
        let config = ConfigBuilder::new()
            .client_id("1234.apps.googleusercontent.com")
            .build();

        let url = build_auth_url(&config).unwrap();
        assert!(url.starts_with(GOOGLE_AUTH_ENDPOINT));

        let params = query(&url);
        assert_eq!(params["response_type"], "code");
        assert_eq!(params["scope"], "openid");
        assert_eq!(params["redirect_uri"], CALLBACK_URL);
        assert_eq!(params["client_id"], "1234.apps.googleusercontent.com");
        assert!(!params["state"].is_empty());
        assert!(!params["nonce"].is_empty());
        assert_eq!(params["nonce"].len(), 32);
    }

    #[test]
    fn test_build_auth_url_fresh_values() {
        let config = ConfigBuilder::new().client_id("my_client_id").build();

        let first = query(&build_auth_url(&config).unwrap());
        let second = query(&build_auth_url(&config).unwrap());
        assert_ne!(first["state"], second["state"]);
        assert_ne!(first["nonce"], second["nonce"]);
    }

    #[test]
    fn test_build_auth_url_invalid_endpoint() {
        let config = ConfigBuilder::new().auth_endpoint("not a url").build();
        assert_eq!(build_auth_url(&config), Err(Error::URL));
    }
}
