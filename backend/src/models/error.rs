use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use serde_json::json;
use serde_json::Value;

/// Error response carrying the status code and a `{"error": ...}` body.
#[derive(Debug)]
pub struct Error {
    pub code: StatusCode,
    pub body: Json<Value>,
}

impl Error {
    pub fn new(code: StatusCode, message: &str) -> Self {
        Self {
            code,
            body: Json(json!({"error": message})),
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        (self.code, self.body).into_response()
    }
}

impl From<(StatusCode, &str)> for Error {
    fn from((code, msg): (StatusCode, &str)) -> Self {
        Self::new(code, msg)
    }
}

impl From<anyhow::Error> for Error {
    fn from(error: anyhow::Error) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, &error.to_string())
    }
}

impl From<sqlx::Error> for Error {
    fn from(error: sqlx::Error) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, &error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn body_uses_error_key() {
        let error = Error::new(StatusCode::INTERNAL_SERVER_ERROR, "db down");
        assert_eq!(error.body.0["error"], "db down");
    }

    #[test]
    fn storage_faults_map_to_500() {
        let error = Error::from(anyhow::anyhow!("connection refused"));
        assert_eq!(error.code, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(error.body.0["error"], "connection refused");
    }

    #[test]
    fn into_response_keeps_status() {
        let response = Error::new(StatusCode::BAD_REQUEST, "nope").into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
