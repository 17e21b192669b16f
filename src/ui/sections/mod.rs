//! Per-section content rendering.

pub mod events;
pub mod gallery;
pub mod home;
pub mod info;
