//! Live backend: delegates straight to the HTTP client.

use async_trait::async_trait;

use crate::api::{ApiClient, ApiError};
use crate::models::{ClubStats, ContactDraft, Event, EventSignup, Photo, RegistrationPayload};

use super::DataSource;

pub struct RemoteSource {
    client: ApiClient,
}

impl RemoteSource {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl DataSource for RemoteSource {
    async fn fetch_stats(&self) -> Result<ClubStats, ApiError> {
        self.client.fetch_stats().await
    }

    async fn fetch_events(&self) -> Result<Vec<Event>, ApiError> {
        self.client.fetch_events().await
    }

    async fn fetch_gallery(&self) -> Result<Vec<Photo>, ApiError> {
        self.client.fetch_gallery().await
    }

    async fn submit_registration(
        &self,
        payload: &RegistrationPayload,
    ) -> Result<String, ApiError> {
        self.client.submit_registration(payload).await
    }

    async fn submit_contact(&self, draft: &ContactDraft) -> Result<String, ApiError> {
        self.client.submit_contact(draft).await
    }

    async fn register_for_event(&self, signup: &EventSignup) -> Result<String, ApiError> {
        self.client.register_for_event(signup).await
    }
}
