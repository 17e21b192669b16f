//! Terminal UI module using ratatui.
//!
//! - `render`: Main frame rendering and layout
//! - `input`: Keyboard event handling
//! - `styles`: Color scheme and text styling
//! - `sections`: Per-section content rendering
//! - `forms`: Modal form overlays

pub mod forms;
pub mod input;
pub mod render;
pub mod sections;
pub mod styles;
