/// Thin wrapper over the HBnB REST API. One function per endpoint, one
/// attempt per call; HTTP and network failures both come back as `ApiError`
/// values instead of escaping as panics.
use gloo_net::http::{Request, RequestBuilder, Response};
use leptos::logging::error;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use thiserror::Error;
use urlencoding::encode;

use crate::models::place::Place;
use crate::models::review::{NewReview, Review};
use crate::session;

const DEFAULT_API_BASE: &str = "http://127.0.0.1:5000/api/v1";

/// Base URL of the API, overridable at build time with `HBNB_API_BASE`.
pub fn api_base() -> &'static str {
    option_env!("HBNB_API_BASE").unwrap_or(DEFAULT_API_BASE)
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    #[error("{message}")]
    Http { status: u16, message: String },
    #[error("network error: {0}")]
    Network(String),
}

impl ApiError {
    pub fn is_network(&self) -> bool {
        matches!(self, ApiError::Network(_))
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Deserialize, Debug, Clone)]
pub struct LoginResponse {
    pub access_token: String,
}

/// POST /auth/login
pub async fn login(email: &str, password: &str) -> ApiResult<LoginResponse> {
    let body = serde_json::json!({ "email": email, "password": password });
    let request = Request::post(&format!("{}/auth/login", api_base()))
        .json(&body)
        .map_err(network_error)?;
    into_result(request.send().await.map_err(network_error)?).await
}

/// GET /places — anonymous reads are allowed, the bearer header is only
/// attached when a session token exists.
pub async fn fetch_places() -> ApiResult<Vec<Place>> {
    let request = with_optional_auth(Request::get(&format!("{}/places", api_base())));
    into_result(request.send().await.map_err(network_error)?).await
}

/// GET /places/{id}
pub async fn fetch_place(id: &str) -> ApiResult<Place> {
    let url = format!("{}/places/{}", api_base(), encode(id));
    let request = with_optional_auth(Request::get(&url));
    into_result(request.send().await.map_err(network_error)?).await
}

/// GET /places/{id}/reviews
pub async fn fetch_reviews(place_id: &str) -> ApiResult<Vec<Review>> {
    let url = format!("{}/places/{}/reviews", api_base(), encode(place_id));
    let request = with_optional_auth(Request::get(&url));
    into_result(request.send().await.map_err(network_error)?).await
}

/// POST /reviews — bearer auth required.
pub async fn submit_review(token: &str, review: &NewReview) -> ApiResult<Review> {
    let request = Request::post(&format!("{}/reviews", api_base()))
        .header("Authorization", &format!("Bearer {token}"))
        .json(review)
        .map_err(network_error)?;
    into_result(request.send().await.map_err(network_error)?).await
}

/// Pulls a human-readable message out of an error body. The API is not
/// consistent about the key: auth endpoints use `message`, place endpoints
/// use `error`.
pub fn error_body_message(body: &serde_json::Value, fallback: &str) -> String {
    body.get("message")
        .or_else(|| body.get("error"))
        .and_then(|value| value.as_str())
        .map(str::to_string)
        .unwrap_or_else(|| fallback.to_string())
}

fn with_optional_auth(builder: RequestBuilder) -> RequestBuilder {
    match session::token() {
        Some(token) => builder.header("Authorization", &format!("Bearer {token}")),
        None => builder,
    }
}

async fn into_result<T: DeserializeOwned>(response: Response) -> ApiResult<T> {
    if !response.ok() {
        let status = response.status();
        let fallback = response.status_text();
        let message = match response.json::<serde_json::Value>().await {
            Ok(body) => error_body_message(&body, &fallback),
            Err(_) => fallback,
        };
        error!("[API] HTTP {status}: {message}");
        return Err(ApiError::Http { status, message });
    }
    response.json::<T>().await.map_err(network_error)
}

fn network_error(err: gloo_net::Error) -> ApiError {
    error!("[API] Request failed: {err}");
    ApiError::Network(err.to_string())
}
