//! HTTP helpers for the Medicheck JSON API with consistent timeouts and error
//! handling. Feature clients use these helpers to avoid duplicating request
//! setup and to keep failure behavior uniform across pages. The helpers do not
//! store tokens; callers pass the bearer token explicitly per request.

use super::{config::AppConfig, errors::AppError};
use gloo_net::http::Request;
use gloo_timers::callback::Timeout;
use leptos::logging;
use serde::{Serialize, de::DeserializeOwned};
use serde_json::to_string;
use web_sys::AbortController;

/// Default request timeout (milliseconds) applied to all HTTP helpers.
const DEFAULT_TIMEOUT_MS: u32 = 10_000;
/// Message used when the server gives us nothing better to show.
const GENERIC_ERROR_MESSAGE: &str = "Request failed.";

/// Fetches JSON, attaching `Authorization: Bearer` when a token is provided.
pub async fn get_json<T: DeserializeOwned>(path: &str, token: Option<&str>) -> Result<T, AppError> {
    let url = build_url(path);
    let authorization = token.map(bearer);
    let response = send_with_timeout(move |signal| {
        let mut builder = Request::get(&url).abort_signal(Some(signal));

        if let Some(value) = &authorization {
            builder = builder.header("Authorization", value);
        }

        builder
            .build()
            .map_err(|err| AppError::Serialization(format!("Failed to build request: {err}")))
    })
    .await?;

    handle_json_response(path, response).await
}

/// Posts JSON and parses a JSON response. Auth endpoints pass `None` for the token.
pub async fn post_json<B: Serialize, T: DeserializeOwned>(
    path: &str,
    body: &B,
    token: Option<&str>,
) -> Result<T, AppError> {
    send_json_body(Request::post, path, body, token).await
}

/// Puts JSON and parses a JSON response.
pub async fn put_json<B: Serialize, T: DeserializeOwned>(
    path: &str,
    body: &B,
    token: Option<&str>,
) -> Result<T, AppError> {
    send_json_body(Request::put, path, body, token).await
}

async fn send_json_body<B: Serialize, T: DeserializeOwned>(
    method: fn(&str) -> gloo_net::http::RequestBuilder,
    path: &str,
    body: &B,
    token: Option<&str>,
) -> Result<T, AppError> {
    let url = build_url(path);
    let payload = to_string(body)
        .map_err(|err| AppError::Serialization(format!("Failed to encode request: {err}")))?;
    let authorization = token.map(bearer);
    let response = send_with_timeout(move |signal| {
        let mut builder = method(&url)
            .header("Content-Type", "application/json")
            .abort_signal(Some(signal));

        if let Some(value) = &authorization {
            builder = builder.header("Authorization", value);
        }

        builder
            .body(payload)
            .map_err(|err| AppError::Serialization(format!("Failed to build request: {err}")))
    })
    .await?;

    handle_json_response(path, response).await
}

fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

/// Builds a URL from the configured API base URL and the provided path.
fn build_url(path: &str) -> String {
    let config = AppConfig::load();
    join_url(&config.api_base_url, path)
}

/// Joins a base URL and a path with exactly one separating slash.
pub fn join_url(base_url: &str, path: &str) -> String {
    let base = base_url.trim().trim_end_matches('/');
    let path = path.trim();

    if base.is_empty() {
        path.to_string()
    } else {
        format!("{}/{}", base, path.trim_start_matches('/'))
    }
}

/// Maps network errors into user-facing `AppError` variants with timeout detection.
fn map_request_error(err: gloo_net::Error) -> AppError {
    let message = err.to_string();
    let lowered = message.to_lowercase();

    if lowered.contains("timeout") || lowered.contains("abort") {
        AppError::Timeout("Request timed out. Please try again.".to_string())
    } else {
        AppError::Network(format!("Unable to reach the server: {message}"))
    }
}

/// Sends a request with an abort timeout to avoid hanging UI state.
async fn send_with_timeout(
    build_request: impl FnOnce(&web_sys::AbortSignal) -> Result<gloo_net::http::Request, AppError>,
) -> Result<gloo_net::http::Response, AppError> {
    let controller = AbortController::new()
        .map_err(|_| AppError::Config("Failed to initialize request timeout.".to_string()))?;
    let signal = controller.signal();
    let timeout_controller = controller.clone();
    let _timeout = Timeout::new(DEFAULT_TIMEOUT_MS, move || timeout_controller.abort());

    let request = build_request(&signal)?;
    request.send().await.map_err(map_request_error)
}

/// Reads the body and either decodes the expected shape or normalizes the failure.
async fn handle_json_response<T: DeserializeOwned>(
    path: &str,
    response: gloo_net::http::Response,
) -> Result<T, AppError> {
    if response.ok() {
        let body = response
            .text()
            .await
            .map_err(|err| AppError::Parse(format!("Failed to read response: {err}")))?;
        decode_json(&body)
    } else {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        logging::warn!("request to {path} failed with status {status}");
        Err(api_error(status, &body))
    }
}

/// Decodes a JSON body into the endpoint's typed response. A payload that does
/// not match the expected shape fails loudly instead of limping along with
/// partial data.
pub fn decode_json<T: DeserializeOwned>(body: &str) -> Result<T, AppError> {
    serde_json::from_str(body)
        .map_err(|err| AppError::Parse(format!("Failed to decode response: {err}")))
}

/// Normalizes a non-2xx response into [`AppError::Api`], preferring the
/// server's own message field and keeping the structured body for callers
/// that need more than the headline.
pub fn api_error(status: u16, body: &str) -> AppError {
    let parsed = serde_json::from_str::<serde_json::Value>(body).ok();
    let message = parsed
        .as_ref()
        .and_then(server_message)
        .unwrap_or_else(|| GENERIC_ERROR_MESSAGE.to_string());

    AppError::Api {
        status,
        message,
        body: parsed,
    }
}

/// Extracts a displayable message from a structured error body. The Medicheck
/// API answers with `message`; FastAPI-style validators answer with `detail`.
fn server_message(body: &serde_json::Value) -> Option<String> {
    ["message", "detail", "error"].iter().find_map(|key| {
        body.get(*key)
            .and_then(serde_json::Value::as_str)
            .map(str::trim)
            .filter(|text| !text.is_empty())
            .map(str::to_string)
    })
}

#[cfg(test)]
mod tests {
    use super::{AppError, api_error, decode_json, join_url};
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Sample {
        id: String,
        count: u32,
    }

    #[test]
    fn join_url_inserts_single_slash() {
        assert_eq!(
            join_url("http://localhost:8000", "/auth/login"),
            "http://localhost:8000/auth/login"
        );
        assert_eq!(
            join_url("http://localhost:8000/", "auth/login"),
            "http://localhost:8000/auth/login"
        );
        assert_eq!(
            join_url(" http://localhost:8000/ ", " /notes "),
            "http://localhost:8000/notes"
        );
    }

    #[test]
    fn join_url_with_empty_base_keeps_path() {
        assert_eq!(join_url("", "/notes"), "/notes");
    }

    #[test]
    fn decode_json_reads_expected_shape() {
        let decoded: Sample = decode_json(r#"{"id":"n1","count":3,"extra":"ignored"}"#)
            .expect("well-formed body should decode");
        assert_eq!(
            decoded,
            Sample {
                id: "n1".to_string(),
                count: 3,
            }
        );
    }

    #[test]
    fn decode_json_rejects_mismatched_shape() {
        let result: Result<Sample, AppError> = decode_json(r#"{"id":"n1"}"#);
        assert!(matches!(result, Err(AppError::Parse(_))));
    }

    #[test]
    fn api_error_prefers_server_message_field() {
        let err = api_error(401, r#"{"message":"invalid token"}"#);
        match err {
            AppError::Api {
                status,
                message,
                body,
            } => {
                assert_eq!(status, 401);
                assert_eq!(message, "invalid token");
                assert_eq!(body, Some(json!({"message": "invalid token"})));
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[test]
    fn api_error_falls_back_to_detail_field() {
        let err = api_error(403, r#"{"detail":"Access denied."}"#);
        assert_eq!(err.message(), "Access denied.");
        assert_eq!(err.status(), Some(403));
    }

    #[test]
    fn api_error_with_non_json_body_uses_generic_message() {
        let err = api_error(500, "<html>Internal Server Error</html>");
        assert_eq!(err.message(), "Request failed.");
        match err {
            AppError::Api { body, .. } => assert_eq!(body, None),
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[test]
    fn api_error_with_empty_body_uses_generic_message() {
        let err = api_error(502, "");
        assert!(!err.message().is_empty());
        assert_eq!(err.message(), "Request failed.");
    }

    #[test]
    fn api_error_keeps_body_when_message_is_not_a_string() {
        let err = api_error(422, r#"{"detail":[{"loc":["body","email"],"msg":"required"}]}"#);
        assert_eq!(err.message(), "Request failed.");
        match err {
            AppError::Api { body, .. } => {
                assert!(body.expect("array detail should be preserved").is_object());
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }
}
