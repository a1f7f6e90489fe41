//! Defines the provider configuration shared by every step of the login flow.
//!
//! ## Structures
//! - `Config`: Stores the credentials and endpoints. Read-only once built.
//! - `ConfigBuilder`: A builder for constructing a `Config` instance.
//!
//! Endpoints default to Google's, so in most cases only the credentials need to be set.
//!
//! # Example
//! ```rust,no_run
//! use google_web_login::config::Config;
//!
//! let config = Config::builder()
//!     .app_name("your-app-name")
//!     .client_id("your-client-id")
//!     .client_secret("your-client-secret")
//!     .build();
//! ```
use std::time::Duration;

pub const GOOGLE_AUTH_ENDPOINT: &str = "https://accounts.google.com/o/oauth2/v2/auth";
pub const GOOGLE_TOKEN_ENDPOINT: &str = "https://oauth2.googleapis.com/token";
pub const GOOGLE_TOKEN_INFO_ENDPOINT: &str = "https://oauth3.googleapis.com/tokeninfo";
pub const CALLBACK_URL: &str = "http://localhost:3000/callback";

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct AuthEndPoint(pub String);

#[derive(Debug, Clone, Default, PartialEq)]
pub(crate) struct AppName(pub String);

#[derive(Debug, Clone, Default, PartialEq)]
pub(crate) struct ClientID(pub String);

#[derive(Debug, Clone, Default, PartialEq)]
pub(crate) struct ClientSecret(pub String);

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct TokenEndPoint(pub String);

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct TokenInfoEndPoint(pub String);

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct RedirectURI(pub String);

impl Default for AuthEndPoint {
    fn default() -> Self {
        Self(GOOGLE_AUTH_ENDPOINT.to_string())
    }
}

impl Default for TokenEndPoint {
    fn default() -> Self {
        Self(GOOGLE_TOKEN_ENDPOINT.to_string())
    }
}

impl Default for TokenInfoEndPoint {
    fn default() -> Self {
        Self(GOOGLE_TOKEN_INFO_ENDPOINT.to_string())
    }
}

impl Default for RedirectURI {
    fn default() -> Self {
        Self(CALLBACK_URL.to_string())
    }
}

/// Holds the information required for the Google login flow.
///
/// # Fields
/// - `app_name`: The application name registered in Google Cloud Console.
/// - `client_id`: The client ID obtained from Google Cloud Console.
/// - `client_secret`: The client secret linked to the client ID.
/// - `auth_endpoint`, `token_endpoint`, `token_info_endpoint`: Google's endpoints.
/// - `redirect_uri`: The redirect URI registered in Google Cloud Console.
/// - `timeout`: Optional deadline applied to each request sent to Google.
#[derive(Debug, Clone)]
pub struct Config {
    pub(crate) app_name: AppName,
    pub(crate) client_id: ClientID,
    pub(crate) client_secret: ClientSecret,
    pub(crate) auth_endpoint: AuthEndPoint,
    pub(crate) token_endpoint: TokenEndPoint,
    pub(crate) token_info_endpoint: TokenInfoEndPoint,
    pub(crate) redirect_uri: RedirectURI,
    pub(crate) timeout: Option<Duration>,
}
// ==========impl Config==========
impl Config {
    /// Returns a new `ConfigBuilder` instance to create a `Config` object.
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    pub fn app_name(&self) -> &str {
        &self.app_name.0
    }

    pub fn client_id(&self) -> &str {
        &self.client_id.0
    }

    pub fn redirect_uri(&self) -> &str {
        &self.redirect_uri.0
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }
}

/// Provides a convenient way to create a `Config` instance step by step.
#[derive(Debug, Clone, Default)]
pub struct ConfigBuilder {
    app_name: AppName,
    client_id: ClientID,
    client_secret: ClientSecret,
    auth_endpoint: AuthEndPoint,
    token_endpoint: TokenEndPoint,
    token_info_endpoint: TokenInfoEndPoint,
    redirect_uri: RedirectURI,
    timeout: Option<Duration>,
}

// ==========impl ConfigBuilder==========
impl ConfigBuilder {
    /// Creates a new `ConfigBuilder` with Google's endpoints and empty credentials.
    pub fn new() -> Self {
        ConfigBuilder::default()
    }

    /// Constructs a `Config` instance with the provided values.
    pub fn build(self) -> Config {
        Config {
            app_name: self.app_name,
            client_id: self.client_id,
            client_secret: self.client_secret,
            auth_endpoint: self.auth_endpoint,
            token_endpoint: self.token_endpoint,
            token_info_endpoint: self.token_info_endpoint,
            redirect_uri: self.redirect_uri,
            timeout: self.timeout,
        }
    }

    pub fn app_name(mut self, app_name: &str) -> Self {
        self.app_name = AppName(app_name.to_string());
        self
    }

    /// Sets the client ID obtained from Google Cloud Console.
    pub fn client_id(mut self, client_id: &str) -> Self {
        self.client_id = ClientID(client_id.to_string());
        self
    }

    /// Sets the client secret associated with the client ID.
    pub fn client_secret(mut self, client_secret: &str) -> Self {
        self.client_secret = ClientSecret(client_secret.to_string());
        self
    }

    /// Overrides the authorization endpoint URL.
    pub fn auth_endpoint(mut self, auth_endpoint: &str) -> Self {
        self.auth_endpoint = AuthEndPoint(auth_endpoint.to_string());
        self
    }

    /// Overrides the token exchange endpoint URL.
    pub fn token_endpoint(mut self, token_endpoint: &str) -> Self {
        self.token_endpoint = TokenEndPoint(token_endpoint.to_string());
        self
    }

    /// Overrides the token-info endpoint URL.
    pub fn token_info_endpoint(mut self, token_info_endpoint: &str) -> Self {
        self.token_info_endpoint = TokenInfoEndPoint(token_info_endpoint.to_string());
        self
    }

    /// Overrides the redirect URI. Must match the one registered in Google Cloud Console.
    pub fn redirect_uri(mut self, redirect_uri: &str) -> Self {
        self.redirect_uri = RedirectURI(redirect_uri.to_string());
        self
    }

    /// Sets a deadline for each request sent to Google.
    /// A request that exceeds it fails with `Error::Cancelled`.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}
