//! Provides an asynchronous execution framework for sending HTTP requests to Google.
//!
//! This module:
//! - Defines the Executer trait, which provides a unified interface for making HTTP requests.
//! - Implements executers for the code exchange and the token-info lookup.

use std::{pin::Pin, time::Duration};

use http::StatusCode;
use reqwest::{Client, RequestBuilder, Url};
use serde::de::DeserializeOwned;
use tracing::{debug, error};

use crate::{
    error::Error,
    token::{TokenInfo, TokenRequest},
    token_info::{IDTokenClaims, TokenInfoRequest},
};

/// generic asynchronous execution interface for sending HTTP requests.
/// Key Components:
/// - Req: The request type that the executer will handle.
/// - Response: The expected response type.
/// - Error: The error type that will be returned on failure.
/// - Future: The asynchronous execution result, returning either Response or Error
pub trait Executer<'a, Req>
where
    Req: Send,
{
    type Response;
    type Error: std::error::Error;
    type Future: Future<Output = Result<Self::Response, Self::Error>> + Send + 'a;

    fn execute(&'a self, req: &'a Req) -> Self::Future;
}

/// Exchanges an authorization code for tokens.
#[derive(Debug, Clone, Default)]
pub struct TokenExe {
    client: Client,
}

impl TokenExe {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Request Workflow
/// 1. Parse the token endpoint URL.
/// 2. Send the form-encoded parameters with an HTTP POST request.
/// 3. Reject any status other than 200.
/// 4. Parse and return the response as TokenInfo.
impl<'a> Executer<'a, TokenRequest> for TokenExe {
    type Response = TokenInfo;
    type Error = Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send + 'a>>;

    fn execute(&'a self, req: &'a TokenRequest) -> Self::Future {
        Box::pin(async move {
            let url = Url::parse(req.token_endpoint()).map_err(|e| {
                error!("Failed to parse url: {:?}", e);
                Error::URL
            })?;

            let builder = self.client.post(url).form(&req.params());
            fetch_json(builder, req.timeout()).await
        })
    }
}

/// Looks up the claims of an ID token.
#[derive(Debug, Clone, Default)]
pub struct TokenInfoExe {
    client: Client,
}

impl TokenInfoExe {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Request Workflow
/// 1. Append the ID token to the token-info endpoint URL.
/// 2. Send an HTTP GET request.
/// 3. Reject any status other than 200.
/// 4. Parse and return the response as IDTokenClaims. Claims are not checked here.
impl<'a> Executer<'a, TokenInfoRequest> for TokenInfoExe {
    type Response = IDTokenClaims;
    type Error = Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send + 'a>>;

    fn execute(&'a self, req: &'a TokenInfoRequest) -> Self::Future {
        Box::pin(async move {
            let url = Url::parse_with_params(
                req.token_info_endpoint(),
                &[("id_token", req.id_token())],
            )
            .map_err(|e| {
                error!("Failed to parse url: {:?}", e);
                Error::URL
            })?;

            let builder = self.client.get(url);
            fetch_json(builder, req.timeout()).await
        })
    }
}

async fn fetch_json<T>(builder: RequestBuilder, timeout: Option<Duration>) -> Result<T, Error>
where
    T: DeserializeOwned,
{
    let builder = match timeout {
        Some(timeout) => builder.timeout(timeout),
        None => builder,
    };
    let res = builder.send().await.map_err(send_error)?;

    let status_code = res.status();
    if status_code != StatusCode::OK {
        let body = res.text().await.unwrap_or_default();
        debug!("Provider responded with {}: {}", status_code, body);
        return Err(Error::Provider { status_code });
    }

    // A body cut off mid-stream is a network failure, not a malformed response.
    let body = res.bytes().await.map_err(send_error)?;
    serde_json::from_slice::<T>(&body).map_err(|e| {
        error!("Failed to parse JSON: {:?}", e);
        Error::Decode
    })
}

fn send_error(e: reqwest::Error) -> Error {
    if e.is_timeout() {
        error!("Request deadline exceeded: {:?}", e);
        Error::Cancelled
    } else {
        error!("Failed to send request: {:?}", e);
        Error::Transport
    }
}
