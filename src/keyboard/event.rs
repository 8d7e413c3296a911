//! Keyboard lifecycle event types

use super::Coordinates;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of keyboard lifecycle event delivered by the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KeyboardEventKind {
    /// Keyboard is about to appear
    #[serde(rename = "keyboardWillShow")]
    WillShow,
    /// Keyboard finished appearing
    #[serde(rename = "keyboardDidShow")]
    DidShow,
    /// Keyboard is about to disappear
    #[serde(rename = "keyboardWillHide")]
    WillHide,
    /// Keyboard finished disappearing (delivered without a payload)
    #[serde(rename = "keyboardDidHide")]
    DidHide,
    /// Keyboard frame is about to change
    #[serde(rename = "keyboardWillChangeFrame")]
    WillChangeFrame,
    /// Keyboard frame finished changing
    #[serde(rename = "keyboardDidChangeFrame")]
    DidChangeFrame,
}

impl KeyboardEventKind {
    pub fn all() -> &'static [KeyboardEventKind] {
        &[
            Self::WillShow,
            Self::DidShow,
            Self::WillHide,
            Self::DidHide,
            Self::WillChangeFrame,
            Self::DidChangeFrame,
        ]
    }

    /// Event name as used by the host
    pub fn name(&self) -> &'static str {
        match self {
            Self::WillShow => "keyboardWillShow",
            Self::DidShow => "keyboardDidShow",
            Self::WillHide => "keyboardWillHide",
            Self::DidHide => "keyboardDidHide",
            Self::WillChangeFrame => "keyboardWillChangeFrame",
            Self::DidChangeFrame => "keyboardDidChangeFrame",
        }
    }

    /// Look up a kind by its host event name
    pub fn from_name(name: &str) -> Option<Self> {
        Self::all().iter().copied().find(|kind| kind.name() == name)
    }

    /// Whether the host attaches start/end frames to this kind
    pub fn carries_payload(&self) -> bool {
        !matches!(self, Self::DidHide)
    }
}

impl fmt::Display for KeyboardEventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

/// A single keyboard event record
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KeyboardEvent {
    /// What happened
    pub kind: KeyboardEventKind,
    /// Start/end frames, absent for `keyboardDidHide`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payload: Option<Coordinates>,
}

impl KeyboardEvent {
    pub fn new(kind: KeyboardEventKind, payload: Option<Coordinates>) -> Self {
        Self { kind, payload }
    }

    /// Event carrying start/end frames
    pub fn with_coordinates(kind: KeyboardEventKind, coordinates: Coordinates) -> Self {
        Self::new(kind, Some(coordinates))
    }

    /// The payload-free hide completion event
    pub fn did_hide() -> Self {
        Self::new(KeyboardEventKind::DidHide, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keyboard::Frame;

    #[test]
    fn names_round_trip_through_lookup() {
        for kind in KeyboardEventKind::all() {
            assert_eq!(KeyboardEventKind::from_name(kind.name()), Some(*kind));
        }
    }

    #[test]
    fn unknown_name_is_rejected() {
        assert_eq!(KeyboardEventKind::from_name("keyboardDidExplode"), None);
        assert_eq!(KeyboardEventKind::from_name(""), None);
    }

    #[test]
    fn only_did_hide_lacks_payload() {
        let payload_free: Vec<_> = KeyboardEventKind::all()
            .iter()
            .filter(|kind| !kind.carries_payload())
            .collect();
        assert_eq!(payload_free, vec![&KeyboardEventKind::DidHide]);
    }

    #[test]
    fn display_matches_host_name() {
        assert_eq!(KeyboardEventKind::WillChangeFrame.to_string(), "keyboardWillChangeFrame");
    }

    #[test]
    fn event_record_parses_without_payload() {
        let event: KeyboardEvent = serde_json::from_str(r#"{"kind": "keyboardDidHide"}"#).unwrap();
        assert_eq!(event, KeyboardEvent::did_hide());
    }

    #[test]
    fn event_record_parses_with_payload() {
        let json = r#"{
            "kind": "keyboardDidShow",
            "payload": {
                "startCoordinates": {"screenX": 0, "screenY": 0, "width": 0, "height": 0},
                "endCoordinates": {"screenX": 0, "screenY": 0, "width": 0, "height": 123}
            }
        }"#;
        let event: KeyboardEvent = serde_json::from_str(json).unwrap();
        assert_eq!(event.kind, KeyboardEventKind::DidShow);
        assert_eq!(
            event.payload,
            Some(Coordinates::new(Frame::default(), Frame::with_height(123.0)))
        );
    }

    #[test]
    fn payload_free_event_serializes_without_payload_key() {
        let json = serde_json::to_string(&KeyboardEvent::did_hide()).unwrap();
        assert_eq!(json, r#"{"kind":"keyboardDidHide"}"#);
    }
}
