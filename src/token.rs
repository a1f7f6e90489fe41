//! Provides the process of exchanging an authorization code for tokens.
//!
//! This module:
//! TokenRequest: A data structure for sending requests to the token endpoint.
//! TokenInfo: A data structure for parsing the response from the token endpoint.
//! AccessToken, RefreshToken, RawIDToken: The tokens contained in that response.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::{
    code::Code,
    config::{ClientID, ClientSecret, Config, RedirectURI, TokenEndPoint},
};

/// Represents an OAuth 2.0 access token.
/// This token is used to access Google APIs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccessToken(pub(crate) String);

impl AccessToken {
    /// Retrieves the access token as a string.
    pub fn value(&self) -> &str {
        &self.0
    }
}

/// Represents an OAuth 2.0 refresh token.
/// Google only returns one when offline access was requested.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RefreshToken(pub(crate) String);

impl RefreshToken {
    pub fn value(&self) -> &str {
        &self.0
    }
}

/// An ID token exactly as Google issued it.
///
/// It is not an identity until `verifier::verify_id_token` has accepted it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawIDToken(pub(crate) String);

impl RawIDToken {
    pub fn value(&self) -> &str {
        &self.0
    }
}

impl From<String> for RawIDToken {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for RawIDToken {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// A structure used to send a code exchange request to Google's token endpoint.
#[derive(Debug, Clone)]
pub struct TokenRequest {
    token_endpoint: TokenEndPoint,
    code: Code,
    client_id: ClientID,
    client_secret: ClientSecret,
    redirect_uri: RedirectURI,
    grant_type: String,
    timeout: Option<Duration>,
}

impl TokenRequest {
    /// Creates a new request using parameters from Config.
    pub fn new(config: &Config, code: Code) -> Self {
        Self {
            token_endpoint: config.token_endpoint.to_owned(),
            code,
            client_id: config.client_id.to_owned(),
            client_secret: config.client_secret.to_owned(),
            redirect_uri: config.redirect_uri.to_owned(),
            grant_type: "authorization_code".to_string(),
            timeout: config.timeout,
        }
    }

    pub fn token_endpoint(&self) -> &str {
        &self.token_endpoint.0
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// Form body of the request, in the order Google documents it.
    pub fn params(&self) -> [(&'static str, &str); 5] {
        [
            ("code", self.code.0.as_str()),
            ("client_id", self.client_id.0.as_str()),
            ("client_secret", self.client_secret.0.as_str()),
            ("redirect_uri", self.redirect_uri.0.as_str()),
            ("grant_type", self.grant_type.as_str()),
        ]
    }
}

/// Represents the response from Google's token endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenInfo {
    access_token: AccessToken,
    expires_in: u32,
    id_token: RawIDToken,
    #[serde(default)]
    scope: String,
    #[serde(default)]
    token_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    refresh_token: Option<RefreshToken>,
}

impl TokenInfo {
    pub fn access_token(&self) -> &AccessToken {
        &self.access_token
    }

    /// Lifetime of the access token in seconds.
    pub fn expires_in(&self) -> u32 {
        self.expires_in
    }

    pub fn id_token(&self) -> &RawIDToken {
        &self.id_token
    }

    pub fn scope(&self) -> &str {
        &self.scope
    }

    pub fn token_type(&self) -> &str {
        &self.token_type
    }

    pub fn refresh_token(&self) -> Option<&RefreshToken> {
        self.refresh_token.as_ref()
    }
}
