//! HTTP client module for the club's backend API.
//!
//! The backend is a small JSON API: three read-only resources (stats,
//! events, gallery) and three submission endpoints (membership
//! registration, contact message, per-event signup). No authentication.

pub mod client;
pub mod error;

pub use client::ApiClient;
pub use error::ApiError;
