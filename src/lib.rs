//! Minimal "Login with Google" flow on top of Google's OpenID Connect endpoints.
//!
//! Implementation in server flow.
//! [google document](https://developers.google.com/identity/openid-connect/openid-connect)
//! # Feature
//! - Generate the `state` and `nonce` of an authorization request
//! - Generate an authentication request URL (code) for Google
//! - Exchange code for tokens (using reqwest)
//! - Verify an id_token with Google's token-info endpoint (issuer, audience, expiry)
//! # Caution
//! - The `state` value is generated but never checked on the callback.
//! - An `id_token` must not be treated as an identity before `verifier::verify_id_token` accepted it.
//! # Examples
//! For an HTTP server exposing `/auth`, `/token` and `/verify`, see `demos/axum_server.rs`.
pub mod code;
pub mod config;
pub mod error;
pub mod executer;
pub mod nonce;
pub mod state;
pub mod token;
pub mod token_info;
pub mod verifier;
