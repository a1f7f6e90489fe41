// In Google Cloud console
// Set
// - Redirect_url: http://localhost:3000/callback
// And then you will get client_secret.json file from google.
// Set .env file
// ```.env
// GOOGLE_APP_NAME="your_app_name"
// GOOGLE_CLIENT_ID="your_client_id"
// GOOGLE_CLIENT_SECRET="your_client_secret"
// ```
// finally ```cargo run --example axum_server```
use std::sync::Arc;

use anyhow::Context;
use axum::{
    Json, Router,
    extract::{Query, State},
    response::{IntoResponse, Response},
    routing::get,
};
use google_web_login::{
    code::{Code, build_auth_url},
    config::{Config, ConfigBuilder},
    error::Error,
    token::RawIDToken,
    verifier::{exchange_code, verify_authorization_code, verify_id_token},
};
use http::StatusCode;
use serde::Deserialize;
use serde_json::json;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, TraceLayer},
};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Log settings
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "google_web_login=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Build Config from environment (.env supported)
    let config = ConfigBuilder::new()
        .app_name(&read_env("GOOGLE_APP_NAME")?)
        .client_id(&read_env("GOOGLE_CLIENT_ID")?)
        .client_secret(&read_env("GOOGLE_CLIENT_SECRET")?)
        .build();

    let listener = tokio::net::TcpListener::bind("0.0.0.0:8080")
        .await
        .context("Failed to bind 0.0.0.0:8080")?;
    info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app(config)).await?;
    anyhow::Ok(())
}

fn app(config: Config) -> Router {
    Router::new()
        .route("/hello", get(hello))
        .route("/auth", get(auth))
        .route("/token", get(token))
        .route("/verify", get(verify))
        .route("/verify/id_token", get(verify_code))
        .layer(TraceLayer::new_for_http().make_span_with(DefaultMakeSpan::default()))
        .layer(CorsLayer::permissive())
        .with_state(Arc::new(config))
}

async fn hello() -> impl IntoResponse {
    Json(json!({ "message": "Hello Google" }))
}

// The frontend reads `url` from the body and navigates there itself.
async fn auth(State(config): State<Arc<Config>>) -> Result<impl IntoResponse, ApiError> {
    let url = build_auth_url(&config)?;
    Ok((StatusCode::FOUND, Json(json!({ "url": url }))))
}

async fn token(
    State(config): State<Arc<Config>>,
    Query(params): Query<CodeParams>,
) -> Result<impl IntoResponse, ApiError> {
    let info = exchange_code(&config, &Code::from(params.code)).await?;
    Ok(Json(info))
}

async fn verify(
    State(config): State<Arc<Config>>,
    Query(params): Query<TokenParams>,
) -> Result<impl IntoResponse, ApiError> {
    let claims = verify_id_token(&config, &RawIDToken::from(params.token)).await?;
    Ok(Json(claims))
}

// Callback page of the frontend: exchange the code and verify the ID token in one go.
async fn verify_code(
    State(config): State<Arc<Config>>,
    Query(params): Query<CodeParams>,
) -> Result<impl IntoResponse, ApiError> {
    let claims = verify_authorization_code(&config, &Code::from(params.code)).await?;
    Ok(Json(claims))
}

// Get env from .env file
fn read_env(key: &str) -> anyhow::Result<String> {
    dotenvy::var(key).with_context(|| format!("Failed to read env {}", key))
}

#[derive(Debug, Clone, Deserialize)]
struct CodeParams {
    #[serde(default)]
    code: String,
}

#[derive(Debug, Clone, Deserialize)]
struct TokenParams {
    #[serde(default)]
    token: String,
}

struct ApiError(Error);

impl From<Error> for ApiError {
    fn from(value: Error) -> Self {
        Self(value)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        error!("Request failed: {}", self.0);
        let body = Json(json!({ "error": self.0.to_string() }));
        (self.0.status_code(), body).into_response()
    }
}

// ==========Tests==========
#[cfg(test)]
mod tests {
    use std::time::{SystemTime, UNIX_EPOCH};

    use google_web_login::config::ConfigBuilder;
    use http::StatusCode;
    use mockito::{Matcher, Server, ServerGuard};
    use serde_json::{Value, json};

    use super::app;

    const CLIENT_ID: &str = "1234.apps.googleusercontent.com";

    // Serves the demo app on an ephemeral port, talking to `provider` instead of Google.
    async fn spawn_app(provider: &ServerGuard) -> String {
        let config = ConfigBuilder::new()
            .client_id(CLIENT_ID)
            .client_secret("my_secret")
            .token_endpoint(&format!("{}/token", provider.url()))
            .token_info_endpoint(&format!("{}/tokeninfo", provider.url()))
            .build();
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app(config)).await.unwrap();
        });
        format!("http://{}", addr)
    }

    #[tokio::test]
    async fn test_verify_code_route() {
        let mut provider = Server::new_async().await;
        let exp = SystemTime::now().duration_since(UNIX_EPOCH).unwrap().as_secs() + 3600;
        let _token = provider
            .mock("POST", "/token")
            .match_body(Matcher::UrlEncoded("code".into(), "auth_code".into()))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                json!({
                    "access_token": "ya29.access",
                    "expires_in": 3599,
                    "id_token": "header.payload.signature",
                    "scope": "openid",
                    "token_type": "Bearer",
                })
                .to_string(),
            )
            .create_async()
            .await;
        let _token_info = provider
            .mock("GET", "/tokeninfo")
            .match_query(Matcher::UrlEncoded(
                "id_token".into(),
                "header.payload.signature".into(),
            ))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                json!({
                    "iss": "accounts.google.com",
                    "aud": CLIENT_ID,
                    "sub": "110169484474386276334",
                    "exp": exp.to_string(),
                })
                .to_string(),
            )
            .create_async()
            .await;

        let base = spawn_app(&provider).await;
        let res = reqwest::get(format!("{}/verify/id_token?code=auth_code", base))
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::OK);
        let body: Value = res.json().await.unwrap();
        assert_eq!(body["sub"], "110169484474386276334");
        assert_eq!(body["aud"], CLIENT_ID);
    }

    #[tokio::test]
    async fn test_verify_code_route_exchange_fails() {
        let mut provider = Server::new_async().await;
        let _token = provider
            .mock("POST", "/token")
            .with_status(400)
            .with_body(r#"{"error":"invalid_grant"}"#)
            .create_async()
            .await;

        let base = spawn_app(&provider).await;
        let res = reqwest::get(format!("{}/verify/id_token?code=used_code", base))
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::BAD_GATEWAY);
        let body: Value = res.json().await.unwrap();
        assert_eq!(
            body["error"],
            "Provider responded with status code 400 Bad Request"
        );
    }
}
