//! Represents a cryptographic nonce for OpenID Connect authentication.
use rand::{TryRngCore, rngs::OsRng};
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::error::Error;

/// Number of random bytes used by `CodeRequest::generate`.
pub const DEFAULT_NONCE_LEN: usize = 16;

/// A `Nonce` is a **unique, random value** used to prevent replay attacks in OpenID Connect authentication.
/// Google copies it into the `nonce` claim of the ID token issued for the request.
///
/// # **Implementation Details**
///
/// - Random bytes come from `OsRng`.
/// - The value is the lowercase hex encoding of those bytes, so it is twice as long as the byte count.
///
/// # **Example**
///
/// ```rust,no_run
/// use google_web_login::nonce::Nonce;
///
/// let nonce = Nonce::new(16).expect("Failed to generate nonce");
/// assert_eq!(nonce.value().len(), 32);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Nonce(pub(crate) String);

impl Nonce {
    /// Generates `length` random bytes and hex-encodes them.
    /// Returns an `Error::RandomSource` if the OS cannot supply entropy.
    pub fn new(length: usize) -> Result<Self, Error> {
        let mut bytes = vec![0u8; length];
        OsRng.try_fill_bytes(&mut bytes).map_err(|e| {
            error!("Failed to generate nonce: {:?}", e);
            Error::RandomSource
        })?;
        Ok(Self(hex::encode(bytes)))
    }

    /// Returns the nonce as a string reference.
    pub fn value(&self) -> &str {
        &self.0
    }
}
