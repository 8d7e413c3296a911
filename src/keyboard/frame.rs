//! Keyboard geometry types

use serde::{Deserialize, Serialize};

/// Rectangle describing where the keyboard sits on screen.
///
/// Values are passed through exactly as the host reports them. No bounds
/// checks are made; negative or zero sizes are kept as-is.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Frame {
    pub screen_x: f64,
    pub screen_y: f64,
    pub width: f64,
    pub height: f64,
}

impl Frame {
    pub fn new(screen_x: f64, screen_y: f64, width: f64, height: f64) -> Self {
        Self {
            screen_x,
            screen_y,
            width,
            height,
        }
    }

    /// Zero-origin frame with only a height set
    pub fn with_height(height: f64) -> Self {
        Self {
            height,
            ..Self::default()
        }
    }
}

/// Start and end frames of a keyboard transition
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    /// Frame before the transition
    #[serde(rename = "startCoordinates")]
    pub start: Frame,
    /// Frame after the transition
    #[serde(rename = "endCoordinates")]
    pub end: Frame,
}

impl Coordinates {
    pub fn new(start: Frame, end: Frame) -> Self {
        Self { start, end }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_uses_host_field_names() {
        let frame = Frame::new(1.0, 2.0, 3.0, 4.0);
        let json = serde_json::to_string(&frame).unwrap();
        assert!(json.contains("\"screenX\":1.0"));
        assert!(json.contains("\"screenY\":2.0"));
        assert!(json.contains("\"width\":3.0"));
        assert!(json.contains("\"height\":4.0"));
    }

    #[test]
    fn coordinates_parse_host_payload() {
        let json = r#"{
            "startCoordinates": {"screenX": 0, "screenY": 800, "width": 390, "height": 0},
            "endCoordinates": {"screenX": 0, "screenY": 500, "width": 390, "height": 300}
        }"#;
        let coords: Coordinates = serde_json::from_str(json).unwrap();
        assert_eq!(coords.start.screen_y, 800.0);
        assert_eq!(coords.end.height, 300.0);
    }

    #[test]
    fn frame_accepts_negative_values() {
        let frame = Frame::new(-10.0, -20.0, 0.0, -5.0);
        assert_eq!(frame.height, -5.0);
        assert_eq!(frame.screen_x, -10.0);
    }

    #[test]
    fn with_height_zeroes_other_fields() {
        let frame = Frame::with_height(216.0);
        assert_eq!(frame, Frame::new(0.0, 0.0, 0.0, 216.0));
    }
}
