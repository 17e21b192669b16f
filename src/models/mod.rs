//! Domain models shared by the data sources, the controller, and the UI.
//!
//! Wire field names follow the backend API (French); Rust field names are
//! English, mapped with explicit `#[serde(rename)]` attributes:
//!
//! - `Event`, `EventType`: upcoming club activities
//! - `Photo`, `PhotoCategory`, `GalleryFilter`: the photo gallery
//! - `ClubStats`: display-only aggregate counters
//! - `RegistrationDraft`, `ContactDraft`, `EventSignup`: form data

mod event;
mod forms;
mod photo;
mod stats;

pub use event::{Event, EventType};
pub use forms::{
    ContactDraft, EventSignup, ExperienceLevel, RegistrationDraft, RegistrationPayload,
};
pub use photo::{filter_photos, GalleryFilter, Photo, PhotoCategory};
pub use stats::ClubStats;
