//! Display formatting helpers.

pub mod format;
