use http::StatusCode;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    #[error("Failed to generate random value")]
    RandomSource,
    #[error("Failed to send request")]
    Transport,
    #[error("Provider responded with status code {status_code}")]
    Provider { status_code: StatusCode },
    #[error("Failed to decode response body")]
    Decode,
    #[error("Invalid iss: {actual}")]
    InvalidIssuer { actual: String },
    #[error("Invalid aud: {actual}")]
    InvalidAudience { actual: String },
    #[error("Malformed claim: {field}")]
    MalformedClaim { field: &'static str },
    #[error("IDToken expired")]
    TokenExpired,
    #[error("Request cancelled")]
    Cancelled,
    #[error("Failed to parse url")]
    URL,
}

impl Error {
    /// Status code an HTTP layer should answer with when an operation fails with `self`.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Error::InvalidIssuer { .. }
            | Error::InvalidAudience { .. }
            | Error::MalformedClaim { .. }
            | Error::TokenExpired => StatusCode::UNAUTHORIZED,
            Error::Provider { .. } | Error::Transport | Error::Decode => StatusCode::BAD_GATEWAY,
            Error::Cancelled => StatusCode::GATEWAY_TIMEOUT,
            Error::RandomSource | Error::URL => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}
