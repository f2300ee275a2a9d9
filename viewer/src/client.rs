use std::time::Duration;

use anyhow::{bail, Context, Result};
use reqwest::StatusCode;
use serde_json::Value;

use crate::normalize::{normalize, NewsView};

/// HTTP access to the two endpoints the client drives: the query service
/// and the external workflow trigger. Both take a bodyless POST.
pub struct NewsClient {
    http: reqwest::Client,
    api_url: String,
    webhook_url: Option<String>,
}

impl NewsClient {
    /// `timeout` bounds a single request. The workflow webhook is observed
    /// to take tens of seconds, so keep it generous.
    pub fn new(api_url: String, webhook_url: Option<String>, timeout: Duration) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("failed to build HTTP client")?;

        Ok(Self {
            http,
            api_url,
            webhook_url,
        })
    }

    pub fn has_webhook(&self) -> bool {
        self.webhook_url.is_some()
    }

    /// Fetch the persisted active entry from the query service.
    pub async fn fetch_active(&self) -> Result<Option<NewsView>> {
        self.post(&self.api_url).await
    }

    /// Trigger the external generation pipeline and wait for its entry.
    /// Best-effort: availability and latency are entirely the pipeline's.
    pub async fn trigger_generation(&self) -> Result<Option<NewsView>> {
        let url = match &self.webhook_url {
            Some(url) => url.clone(),
            None => bail!("no webhook URL configured, dynamic mode is unavailable"),
        };
        self.post(&url).await
    }

    async fn post(&self, url: &str) -> Result<Option<NewsView>> {
        let response = self.http.post(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            bail!("{}", error_message(status, &body));
        }

        let payload: Value = response.json().await?;
        Ok(normalize(&payload))
    }
}

/// The user-visible message for a non-success response: the body's `error`
/// field when present, otherwise the numeric status code.
pub fn error_message(status: StatusCode, body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|value| value.get("error").and_then(Value::as_str).map(str::to_string))
        .unwrap_or_else(|| status.as_u16().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_field_is_surfaced_verbatim() {
        let message = error_message(StatusCode::INTERNAL_SERVER_ERROR, r#"{"error":"db down"}"#);
        assert_eq!(message, "db down");
    }

    #[test]
    fn non_json_body_falls_back_to_the_status_code() {
        let message = error_message(StatusCode::BAD_GATEWAY, "<html>oops</html>");
        assert_eq!(message, "502");
    }

    #[test]
    fn empty_body_falls_back_to_the_status_code() {
        let message = error_message(StatusCode::NOT_FOUND, "");
        assert_eq!(message, "404");
    }

    #[test]
    fn non_string_error_field_falls_back_to_the_status_code() {
        let message = error_message(StatusCode::INTERNAL_SERVER_ERROR, r#"{"error":{"code":1}}"#);
        assert_eq!(message, "500");
    }

    #[test]
    fn extra_fields_next_to_error_are_ignored() {
        // permissive deployments attach a stack field; it must not matter
        let message = error_message(
            StatusCode::INTERNAL_SERVER_ERROR,
            r#"{"error":"db down","stack":"at query (db.js:12)"}"#,
        );
        assert_eq!(message, "db down");
    }
}
