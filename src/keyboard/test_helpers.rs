//! Shared test utilities for keyboard modules
//!
//! Provides builders for synthetic host events.

use super::{Coordinates, Frame, KeyboardEvent, KeyboardEventKind};

/// Coordinates with a zero start frame and an end frame of the given height.
pub fn coords_with_height(height: f64) -> Coordinates {
    Coordinates::new(Frame::default(), Frame::with_height(height))
}

/// Creates a payload-bearing event of any kind with the given end height.
pub fn frame_event(kind: KeyboardEventKind, height: f64) -> KeyboardEvent {
    KeyboardEvent::with_coordinates(kind, coords_with_height(height))
}

/// Creates a `keyboardDidShow` event with the given end height.
pub fn did_show(height: f64) -> KeyboardEvent {
    frame_event(KeyboardEventKind::DidShow, height)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn did_show_carries_end_height() {
        let event = did_show(123.0);
        assert_eq!(event.kind, KeyboardEventKind::DidShow);
        assert_eq!(event.payload.map(|c| c.end.height), Some(123.0));
    }

    #[test]
    fn coords_start_at_origin() {
        let coords = coords_with_height(10.0);
        assert_eq!(coords.start, Frame::default());
    }
}
