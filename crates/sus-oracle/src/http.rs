//! Shared HTTP helpers for provider clients.
//!
//! Centralizes client construction and status-code checks (429 rate limiting
//! with `Retry-After` parsing, non-success → [`OracleError::Api`]) so each
//! provider module stays focused on request and response shapes.

use std::time::Duration;

use crate::error::OracleError;

/// Build the HTTP client shared by every provider.
///
/// # Panics
///
/// Panics if the underlying `reqwest::Client` fails to build.
#[must_use]
pub fn build_client(timeout: Duration) -> reqwest::Client {
    reqwest::Client::builder()
        .user_agent(concat!("unusual-suspects/", env!("CARGO_PKG_VERSION")))
        .timeout(timeout)
        .build()
        .expect("reqwest client should build")
}

/// Check an HTTP response for common error conditions.
///
/// Returns the response unchanged on success. Handles:
/// - **429 Too Many Requests** → [`OracleError::RateLimited`] with
///   `Retry-After` header parsing (falls back to 60 s if absent or
///   unparseable).
/// - **Non-success status** → [`OracleError::Api`] with status code and
///   response body.
pub async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, OracleError> {
    if resp.status() == 429 {
        let retry_after = parse_retry_after(&resp);
        return Err(OracleError::RateLimited {
            retry_after_secs: retry_after,
        });
    }
    if !resp.status().is_success() {
        return Err(OracleError::Api {
            status: resp.status().as_u16(),
            message: resp.text().await.unwrap_or_default(),
        });
    }
    Ok(resp)
}

/// Parse the `Retry-After` header as seconds, falling back to 60 s.
fn parse_retry_after(resp: &reqwest::Response) -> u64 {
    resp.headers()
        .get(reqwest::header::RETRY_AFTER)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(60)
}

/// Treat a blank completion as a parse failure; callers persist text verbatim
/// and an empty string would read back as "still pending".
pub fn non_empty(text: Option<String>, provider: &str) -> Result<String, OracleError> {
    match text {
        Some(t) if !t.trim().is_empty() => Ok(t),
        _ => Err(OracleError::Parse(format!("{provider} returned no text"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mock_response(status: u16, body: &'static str) -> reqwest::Response {
        reqwest::Response::from(
            ::http::Response::builder()
                .status(status)
                .body(body)
                .unwrap(),
        )
    }

    fn mock_response_with_retry_after(status: u16, value: &str) -> reqwest::Response {
        reqwest::Response::from(
            ::http::Response::builder()
                .status(status)
                .header("Retry-After", value)
                .body("")
                .unwrap(),
        )
    }

    #[test]
    fn parse_retry_after_from_header() {
        let resp = mock_response_with_retry_after(429, "120");
        assert_eq!(parse_retry_after(&resp), 120);
    }

    #[test]
    fn parse_retry_after_missing_header() {
        let resp = mock_response(429, "");
        assert_eq!(parse_retry_after(&resp), 60);
    }

    #[tokio::test]
    async fn rate_limit_is_reported() {
        let resp = mock_response_with_retry_after(429, "7");
        let err = check_response(resp).await.unwrap_err();
        assert!(matches!(
            err,
            OracleError::RateLimited {
                retry_after_secs: 7
            }
        ));
    }

    #[tokio::test]
    async fn error_status_carries_body() {
        let resp = mock_response(401, "invalid x-api-key");
        match check_response(resp).await.unwrap_err() {
            OracleError::Api { status, message } => {
                assert_eq!(status, 401);
                assert_eq!(message, "invalid x-api-key");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn success_passes_through() {
        let resp = mock_response(200, "{}");
        assert!(check_response(resp).await.is_ok());
    }

    #[test]
    fn blank_completion_is_rejected() {
        assert!(non_empty(Some("  ".into()), "OpenAI").is_err());
        assert!(non_empty(None, "OpenAI").is_err());
        assert_eq!(non_empty(Some("YES".into()), "OpenAI").unwrap(), "YES");
    }
}
