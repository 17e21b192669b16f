//! HTTP client for the club's backend API.
//!
//! Thin typed wrapper over `reqwest`: one method per endpoint, with shared
//! GET/POST helpers that turn non-success responses into `ApiError`.

use reqwest::Client;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use tracing::debug;

use crate::models::{ClubStats, ContactDraft, Event, EventSignup, Photo, RegistrationPayload};

use super::ApiError;

/// HTTP request timeout in seconds. A hung request would otherwise leave
/// the in-flight flag set forever.
const REQUEST_TIMEOUT_SECS: u64 = 10;

#[derive(Deserialize)]
struct EventsResponse {
    #[serde(default)]
    evenements: Vec<Event>,
}

#[derive(Deserialize)]
struct GalleryResponse {
    #[serde(default)]
    photos: Vec<Photo>,
}

/// Submission endpoints answer `{ "message": "..." }` on success.
#[derive(Deserialize)]
struct MessageResponse {
    message: String,
}

/// API client for the club backend.
/// Clone is cheap - reqwest::Client shares its connection pool via Arc.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    /// Check if the response is successful, converting the body's `detail`
    /// field into a rejection otherwise.
    async fn check_response(response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
        if response.status().is_success() {
            Ok(response)
        } else {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            Err(ApiError::from_status(status, &body))
        }
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = format!("{}{}", self.base_url, path);
        let response = self.client.get(&url).send().await?;
        let response = Self::check_response(response).await?;
        response
            .json()
            .await
            .map_err(|e| ApiError::InvalidResponse(format!("{path}: {e}")))
    }

    async fn post<B: Serialize>(&self, path: &str, body: &B) -> Result<String, ApiError> {
        let url = format!("{}{}", self.base_url, path);
        let response = self.client.post(&url).json(body).send().await?;
        let response = Self::check_response(response).await?;
        let parsed: MessageResponse = response
            .json()
            .await
            .map_err(|e| ApiError::InvalidResponse(format!("{path}: {e}")))?;
        Ok(parsed.message)
    }

    pub async fn fetch_stats(&self) -> Result<ClubStats, ApiError> {
        self.get("/api/stats").await
    }

    pub async fn fetch_events(&self) -> Result<Vec<Event>, ApiError> {
        let response: EventsResponse = self.get("/api/evenements").await?;
        debug!(count = response.evenements.len(), "Events fetched");
        Ok(response.evenements)
    }

    pub async fn fetch_gallery(&self) -> Result<Vec<Photo>, ApiError> {
        let response: GalleryResponse = self.get("/api/galerie").await?;
        debug!(count = response.photos.len(), "Gallery fetched");
        Ok(response.photos)
    }

    pub async fn submit_registration(
        &self,
        payload: &RegistrationPayload,
    ) -> Result<String, ApiError> {
        self.post("/api/inscription", payload).await
    }

    pub async fn submit_contact(&self, draft: &ContactDraft) -> Result<String, ApiError> {
        self.post("/api/contact", draft).await
    }

    pub async fn register_for_event(&self, signup: &EventSignup) -> Result<String, ApiError> {
        self.post("/api/evenement/inscription", signup).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_events_wrapper() {
        let json = r#"{"evenements": [{
            "id": "1",
            "titre": "Entraînement débutants",
            "description": "Séance spéciale pour les nouveaux membres.",
            "date": "2025-01-20",
            "heure": "14:00",
            "lieu": "Gymnase Municipal",
            "type_evenement": "entraînement",
            "places_max": 15,
            "prix": "Gratuit pour les nouveaux"
        }]}"#;

        let parsed: EventsResponse = serde_json::from_str(json).expect("wrapper should parse");
        assert_eq!(parsed.evenements.len(), 1);
        assert_eq!(parsed.evenements[0].title, "Entraînement débutants");
    }

    #[test]
    fn test_parse_wrapper_with_missing_list() {
        let parsed: GalleryResponse = serde_json::from_str("{}").expect("wrapper should parse");
        assert!(parsed.photos.is_empty());
    }

    #[test]
    fn test_parse_message_response() {
        let json = r#"{"success": true, "message": "Inscription reçue avec succès!"}"#;
        let parsed: MessageResponse = serde_json::from_str(json).expect("message should parse");
        assert_eq!(parsed.message, "Inscription reçue avec succès!");
    }
}
