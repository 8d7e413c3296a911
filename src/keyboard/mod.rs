//! Keyboard lifecycle events, state reduction and tracking

mod event;
mod frame;
pub mod source;
mod state;
mod tracker;

#[cfg(test)]
pub(crate) mod test_helpers;

pub use event::{KeyboardEvent, KeyboardEventKind};
pub use frame::{Coordinates, Frame};
pub use source::{EventQueue, KeyboardEmitter, KeyboardEventSource, SourceError, SubscriptionId};
pub use state::{reduce, KeyboardSnapshot, KeyboardStore, TrackerConfig, WillEventPolicy};
pub use tracker::{KeyboardStateTracker, TrackerError};
