//! Keyboard Inset - on-screen keyboard visibility and geometry as reactive state
//!
//! Reduces the host's keyboard lifecycle events (show, hide, frame change)
//! into a single snapshot that UI code can read synchronously on every render.

pub mod config;
pub mod keyboard;
pub mod replay;

pub use config::Config;
pub use keyboard::{KeyboardSnapshot, KeyboardStateTracker};
