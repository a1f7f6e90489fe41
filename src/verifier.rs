//! Runs the network steps of the login flow and validates the resulting ID token.
//!
//! # Flow
//! 1. `exchange_code` trades the authorization code for a `TokenInfo`.
//! 2. `verify_id_token` asks Google about the contained ID token and checks issuer, audience and expiry.
//! 3. `verify_authorization_code` runs both steps back to back.
//!
//! # Example
//! ```rust,no_run
//! use google_web_login::{code::Code, config::Config, verifier::verify_authorization_code};
//!
//! # async fn run(config: Config, code: String) -> Result<(), google_web_login::error::Error> {
//! let claims = verify_authorization_code(&config, &Code::from(code)).await?;
//! println!("Logged in as {}", claims.sub);
//! # Ok(())
//! # }
//! ```
use std::time::{SystemTime, UNIX_EPOCH};

use tracing::{debug, error};

use crate::{
    code::Code,
    config::Config,
    error::Error,
    executer::{Executer, TokenExe, TokenInfoExe},
    token::{RawIDToken, TokenInfo, TokenRequest},
    token_info::{IDTokenClaims, TokenInfoRequest},
};

/// Exchanges an authorization code for tokens. The code is consumed by Google.
pub async fn exchange_code(config: &Config, code: &Code) -> Result<TokenInfo, Error> {
    let req = TokenRequest::new(config, code.to_owned());
    TokenExe::new().execute(&req).await
}

/// Fetches the claims of `id_token` from the token-info endpoint and validates them.
pub async fn verify_id_token(config: &Config, id_token: &RawIDToken) -> Result<IDTokenClaims, Error> {
    let req = TokenInfoRequest::new(config, id_token);
    let claims = TokenInfoExe::new().execute(&req).await?;
    claims.validate(config.client_id(), unix_now()?)?;
    debug!("Verified IDToken for sub {}", claims.sub);
    Ok(claims)
}

/// Exchanges `code` and verifies the ID token Google returned for it.
pub async fn verify_authorization_code(config: &Config, code: &Code) -> Result<IDTokenClaims, Error> {
    let info = exchange_code(config, code).await?;
    verify_id_token(config, info.id_token()).await
}

// A clock set before 1970 cannot vouch for any exp, so every token counts as expired.
fn unix_now() -> Result<i64, Error> {
    let now = SystemTime::now().duration_since(UNIX_EPOCH).map_err(|e| {
        error!("System clock is before UNIX epoch: {}", e);
        Error::TokenExpired
    })?;
    Ok(now.as_secs() as i64)
}
