use serde::Deserialize;
use thiserror::Error;

/// Maximum length of a raw error body quoted back in a message.
const MAX_ERROR_BODY_LENGTH: usize = 200;

/// Only two kinds matter to the user: the server refused the request, or
/// the request never completed. Neither is retried or escalated.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Non-success HTTP response; `detail` comes from the response body.
    #[error("{detail}")]
    Rejected { detail: String },

    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("invalid response: {0}")]
    InvalidResponse(String),
}

/// FastAPI-style error body: `{ "detail": "..." }`.
#[derive(Deserialize)]
struct ErrorBody {
    detail: String,
}

impl ApiError {
    pub fn from_status(status: reqwest::StatusCode, body: &str) -> Self {
        if let Ok(parsed) = serde_json::from_str::<ErrorBody>(body) {
            return ApiError::Rejected {
                detail: parsed.detail,
            };
        }

        let detail = if body.trim().is_empty() {
            format!("HTTP {}", status.as_u16())
        } else {
            format!("HTTP {}: {}", status.as_u16(), truncate_body(body))
        };
        ApiError::Rejected { detail }
    }

    /// Status-bar message for a failed submission. Rejections surface the
    /// server's own wording; everything else gets the generic
    /// connection-error string.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Rejected { detail } => format!("❌ Erreur: {detail}"),
            ApiError::Network(_) | ApiError::InvalidResponse(_) => {
                "❌ Erreur de connexion. Veuillez réessayer.".to_string()
            }
        }
    }
}

fn truncate_body(body: &str) -> String {
    if body.chars().count() <= MAX_ERROR_BODY_LENGTH {
        body.to_string()
    } else {
        let truncated: String = body.chars().take(MAX_ERROR_BODY_LENGTH).collect();
        format!("{}... (truncated, {} total bytes)", truncated, body.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_status_extracts_detail_field() {
        let err = ApiError::from_status(
            reqwest::StatusCode::BAD_REQUEST,
            r#"{"detail": "email déjà utilisée"}"#,
        );
        assert_eq!(err.to_string(), "email déjà utilisée");
        assert!(err.user_message().contains("email déjà utilisée"));
    }

    #[test]
    fn test_from_status_falls_back_to_raw_body() {
        let err = ApiError::from_status(reqwest::StatusCode::BAD_GATEWAY, "upstream down");
        assert_eq!(err.to_string(), "HTTP 502: upstream down");

        let err = ApiError::from_status(reqwest::StatusCode::INTERNAL_SERVER_ERROR, "");
        assert_eq!(err.to_string(), "HTTP 500");
    }

    #[test]
    fn test_long_bodies_are_truncated() {
        let body = "x".repeat(1000);
        let err = ApiError::from_status(reqwest::StatusCode::INTERNAL_SERVER_ERROR, &body);
        assert!(err.to_string().contains("truncated"));
        assert!(err.to_string().len() < body.len());
    }

    #[test]
    fn test_user_message_for_transport_failure_is_generic() {
        let err = ApiError::InvalidResponse("connexion refusée".to_string());
        assert_eq!(err.user_message(), "❌ Erreur de connexion. Veuillez réessayer.");
    }
}
