//! Provides the request to Google's token-info endpoint and the claims it returns.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::error;

use crate::{
    config::{Config, TokenInfoEndPoint},
    error::Error,
    token::RawIDToken,
};

/// Issuers Google uses in its ID tokens.
pub const GOOGLE_ISSUERS: [&str; 2] = ["https://accounts.google.com", "accounts.google.com"];

/// Claims of an ID token as reported by the token-info endpoint.
///
/// Google returns every value as a JSON string, numbers and booleans included.
/// A claim missing from the response is left empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IDTokenClaims {
    pub iss: String,            // Issuer
    pub azp: String,            // Authorized party
    pub aud: String,            // Client ID
    pub sub: String,            // User ID
    pub at_hash: String,        // Access token hash
    pub hd: String,             // Hosted domain (Google Workspace only)
    pub email: String,          // User's email address
    pub email_verified: String, // "true" or "false"
    pub iat: String,            // Issued-at (UNIX time)
    pub exp: String,            // Expiration (UNIX time)
    pub nonce: String,          // Nonce sent with the authorization request
}

impl IDTokenClaims {
    /// Checks issuer, audience and expiry, in that order, stopping at the first failure.
    /// `now` is the current time in seconds since the UNIX epoch.
    pub fn validate(&self, client_id: &str, now: i64) -> Result<(), Error> {
        if !GOOGLE_ISSUERS.contains(&self.iss.as_str()) {
            return Err(Error::InvalidIssuer {
                actual: self.iss.clone(),
            });
        }
        if self.aud != client_id {
            return Err(Error::InvalidAudience {
                actual: self.aud.clone(),
            });
        }
        let exp = self.exp.parse::<i64>().map_err(|e| {
            error!("Failed to parse exp {:?}: {}", self.exp, e);
            Error::MalformedClaim { field: "exp" }
        })?;
        if exp < now {
            return Err(Error::TokenExpired);
        }
        Ok(())
    }
}

/// A structure used to ask Google's token-info endpoint about an ID token.
#[derive(Debug, Clone)]
pub struct TokenInfoRequest {
    token_info_endpoint: TokenInfoEndPoint,
    id_token: RawIDToken,
    timeout: Option<Duration>,
}

impl TokenInfoRequest {
    pub fn new(config: &Config, id_token: &RawIDToken) -> Self {
        Self {
            token_info_endpoint: config.token_info_endpoint.to_owned(),
            id_token: id_token.to_owned(),
            timeout: config.timeout,
        }
    }

    pub fn token_info_endpoint(&self) -> &str {
        &self.token_info_endpoint.0
    }

    pub fn id_token(&self) -> &str {
        &self.id_token.0
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }
}
