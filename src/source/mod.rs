//! Data-source abstraction.
//!
//! The controller talks to a [`DataSource`] and never to HTTP directly,
//! so the same UI runs against the live backend ([`RemoteSource`]) or
//! against built-in demo data ([`FixtureSource`]).

mod fixture;
mod remote;

pub use fixture::FixtureSource;
pub use remote::RemoteSource;

use async_trait::async_trait;

use crate::api::ApiError;
use crate::models::{ClubStats, ContactDraft, Event, EventSignup, Photo, RegistrationPayload};

/// Everything the controller needs from a backend. Submissions resolve to
/// the server's confirmation message on success.
#[async_trait]
pub trait DataSource: Send + Sync {
    async fn fetch_stats(&self) -> Result<ClubStats, ApiError>;
    async fn fetch_events(&self) -> Result<Vec<Event>, ApiError>;
    async fn fetch_gallery(&self) -> Result<Vec<Photo>, ApiError>;

    async fn submit_registration(&self, payload: &RegistrationPayload)
        -> Result<String, ApiError>;
    async fn submit_contact(&self, draft: &ContactDraft) -> Result<String, ApiError>;
    async fn register_for_event(&self, signup: &EventSignup) -> Result<String, ApiError>;
}
