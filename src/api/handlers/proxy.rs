//! Email verification pass-through.

use super::ProxyState;
use anyhow::{Context, Result};
use axum::{
    body::Bytes,
    extract::{Extension, RawQuery},
    http::{header::CONTENT_TYPE, HeaderValue, StatusCode},
    response::{IntoResponse, Json, Response},
};
use serde::{de::IgnoredAny, Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, error, instrument};
use utoipa::ToSchema;

pub const MISSING_TOKEN: &str = "Missing token parameter";
pub const CONNECT_ERROR: &str = "Error connecting to API server";

#[derive(ToSchema, Serialize, Deserialize, Debug)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    fn response(status: StatusCode, message: &str) -> Response {
        let body = Self {
            error: message.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

#[utoipa::path(
    get,
    path = "/api/proxy",
    params(
        ("token" = String, Query, description = "Email verification token")
    ),
    responses(
        (status = 200, description = "Upstream response relayed verbatim"),
        (status = 400, description = "Missing token parameter", body = ErrorBody),
        (status = 500, description = "Upstream could not be reached", body = ErrorBody)
    ),
    tag = "proxy"
)]
// Any upstream status is relayed as-is, including 4xx for invalid tokens.
#[instrument(skip_all)]
pub async fn proxy(
    state: Extension<Arc<ProxyState>>,
    RawQuery(query): RawQuery,
) -> impl IntoResponse {
    let Some(token) = token_param(query.as_deref()) else {
        debug!("Request without token parameter");
        return ErrorBody::response(StatusCode::BAD_REQUEST, MISSING_TOKEN);
    };

    match forward(&state, &token).await {
        Ok((status, body)) => {
            debug!("Upstream answered {status}");

            (
                status,
                [(CONTENT_TYPE, HeaderValue::from_static("application/json"))],
                body,
            )
                .into_response()
        }
        Err(err) => {
            error!("Proxy error: {err:#}");

            ErrorBody::response(StatusCode::INTERNAL_SERVER_ERROR, CONNECT_ERROR)
        }
    }
}

/// Value of the first `token` pair of the query string, if non-empty.
fn token_param(query: Option<&str>) -> Option<String> {
    url::form_urlencoded::parse(query?.as_bytes())
        .find(|(key, _)| key == "token")
        .map(|(_, value)| value.into_owned())
        .filter(|value| !value.is_empty())
}

/// Single attempt against the upstream: no retries, no timeout.
async fn forward(state: &ProxyState, token: &str) -> Result<(StatusCode, Bytes)> {
    let url = state.config().verify_email_url(token)?;

    let response = state
        .client()
        .get(url.as_str())
        .header(CONTENT_TYPE, "application/json")
        .send()
        .await
        .context("Upstream request failed")?;

    let status = response.status();
    let body = response
        .bytes()
        .await
        .context("Failed to read upstream body")?;

    // Only well-formed JSON is relayed.
    serde_json::from_slice::<IgnoredAny>(&body).context("Upstream body is not valid JSON")?;

    Ok((status, body))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_param_extracts_token() {
        assert_eq!(token_param(Some("token=abc123")), Some("abc123".to_string()));
        assert_eq!(
            token_param(Some("foo=1&token=a%2Fb%20c")),
            Some("a/b c".to_string())
        );
    }

    #[test]
    fn token_param_first_pair_wins() {
        assert_eq!(
            token_param(Some("token=first&token=second")),
            Some("first".to_string())
        );
    }

    #[test]
    fn token_param_missing_or_empty() {
        assert_eq!(token_param(None), None);
        assert_eq!(token_param(Some("")), None);
        assert_eq!(token_param(Some("other=1")), None);
        assert_eq!(token_param(Some("token=")), None);
        assert_eq!(token_param(Some("token")), None);
    }
}
