//! Event script replay and transcript export
//!
//! A script is a JSON array of event records:
//!
//! ```json
//! [
//!   {"kind": "keyboardDidShow", "payload": {
//!     "startCoordinates": {"screenX": 0, "screenY": 844, "width": 390, "height": 0},
//!     "endCoordinates": {"screenX": 0, "screenY": 553, "width": 390, "height": 291}}},
//!   {"kind": "keyboardDidHide"}
//! ]
//! ```

use crate::config::TrackerConfig;
use crate::keyboard::{
    KeyboardEmitter, KeyboardEvent, KeyboardEventKind, KeyboardSnapshot, KeyboardStateTracker,
    TrackerError,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::Path;
use std::rc::Rc;
use thiserror::Error;

/// Error type for replay operations
#[derive(Debug, Error)]
pub enum ReplayError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("Invalid event script: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Tracker error: {0}")]
    Tracker(#[from] TrackerError),
}

/// Ordered list of events to feed through a tracker
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventScript {
    pub events: Vec<KeyboardEvent>,
}

impl EventScript {
    pub fn new(events: Vec<KeyboardEvent>) -> Self {
        Self { events }
    }

    pub fn from_json(json: &str) -> Result<Self, ReplayError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load_from(path: &Path) -> Result<Self, ReplayError> {
        let contents = fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

/// Transcript metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranscriptMetadata {
    /// Generation timestamp (RFC 3339)
    pub generated_at: String,
    /// Application version
    pub version: String,
    /// Number of events replayed
    pub event_count: usize,
}

/// Snapshot observed after one event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReplayStep {
    pub index: usize,
    pub kind: KeyboardEventKind,
    pub snapshot: KeyboardSnapshot,
}

/// Result of replaying a script
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReplayTranscript {
    pub metadata: TranscriptMetadata,
    pub steps: Vec<ReplayStep>,
    pub final_snapshot: KeyboardSnapshot,
}

impl ReplayTranscript {
    /// Export transcript to JSON file
    pub fn export_json(&self, path: &Path) -> Result<(), ReplayError> {
        let json = self.to_json()?;
        fs::write(path, json)?;
        Ok(())
    }

    pub fn to_json(&self) -> Result<String, ReplayError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Feed every event of `script` through a freshly activated tracker.
pub fn replay(script: &EventScript, config: &TrackerConfig) -> Result<ReplayTranscript, ReplayError> {
    let emitter = Rc::new(KeyboardEmitter::new());
    let mut tracker = KeyboardStateTracker::with_config(emitter.clone(), config.clone());
    tracker.activate()?;

    let mut steps = Vec::with_capacity(script.len());
    for (index, event) in script.events.iter().enumerate() {
        if emitter.emit(event) == 0 {
            log::debug!("{} not subscribed; skipped", event.kind);
        }
        steps.push(ReplayStep {
            index,
            kind: event.kind,
            snapshot: tracker.snapshot(),
        });
    }

    tracker.deactivate();

    Ok(ReplayTranscript {
        metadata: TranscriptMetadata {
            generated_at: Utc::now().to_rfc3339(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            event_count: script.len(),
        },
        steps,
        final_snapshot: tracker.snapshot(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keyboard::test_helpers::{did_show, frame_event};
    use crate::keyboard::WillEventPolicy;
    use std::env;

    #[test]
    fn empty_script_yields_default() {
        let transcript = replay(&EventScript::default(), &TrackerConfig::default()).unwrap();
        assert!(transcript.steps.is_empty());
        assert_eq!(transcript.final_snapshot, KeyboardSnapshot::default());
        assert_eq!(transcript.metadata.event_count, 0);
    }

    #[test]
    fn records_snapshot_per_step() {
        let script = EventScript::new(vec![
            did_show(123.0),
            frame_event(KeyboardEventKind::WillChangeFrame, 124.0),
            KeyboardEvent::did_hide(),
        ]);
        let transcript = replay(&script, &TrackerConfig::default()).unwrap();

        let heights: Vec<f64> = transcript
            .steps
            .iter()
            .map(|s| s.snapshot.keyboard_height)
            .collect();
        assert_eq!(heights, vec![123.0, 124.0, 0.0]);
        assert!(transcript.steps[1].snapshot.keyboard_shown);
        assert!(!transcript.final_snapshot.keyboard_shown);
        assert_eq!(transcript.steps[2].kind, KeyboardEventKind::DidHide);
    }

    #[test]
    fn ignored_kinds_leave_snapshot_unchanged() {
        let config = TrackerConfig {
            will_show: WillEventPolicy::Ignore,
            ..TrackerConfig::default()
        };
        let script = EventScript::new(vec![frame_event(KeyboardEventKind::WillShow, 300.0)]);
        let transcript = replay(&script, &config).unwrap();
        assert_eq!(transcript.final_snapshot, KeyboardSnapshot::default());
    }

    #[test]
    fn parses_script_json() {
        let json = r#"[
            {"kind": "keyboardDidShow", "payload": {
                "startCoordinates": {"screenX": 0, "screenY": 844, "width": 390, "height": 0},
                "endCoordinates": {"screenX": 0, "screenY": 553, "width": 390, "height": 291}}},
            {"kind": "keyboardDidHide"}
        ]"#;
        let script = EventScript::from_json(json).unwrap();
        assert_eq!(script.len(), 2);
        assert_eq!(script.events[1], KeyboardEvent::did_hide());
    }

    #[test]
    fn rejects_unknown_event_name() {
        let result = EventScript::from_json(r#"[{"kind": "keyboardDidWobble"}]"#);
        assert!(matches!(result, Err(ReplayError::Json(_))));
    }

    #[test]
    fn transcript_exports_json() {
        let script = EventScript::new(vec![did_show(50.0)]);
        let transcript = replay(&script, &TrackerConfig::default()).unwrap();
        let path = env::temp_dir().join(format!("keyboard-inset-transcript-{}.json", std::process::id()));

        transcript.export_json(&path).unwrap();
        let written = fs::read_to_string(&path).unwrap();
        assert!(written.contains("\"keyboardHeight\": 50.0"));
        assert!(written.contains("\"generated_at\""));

        let _ = fs::remove_file(&path);
    }
}
