//! Keyboard visibility and geometry state

use super::{Coordinates, KeyboardEvent, KeyboardEventKind};
use serde::{Deserialize, Serialize};

/// How a `will` show/hide event affects the snapshot
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum WillEventPolicy {
    /// Not subscribed; the event has no effect
    Ignore,
    /// Record the reported frames only
    CoordinatesOnly,
    /// Record the frames and take the height from the end frame
    #[default]
    Eager,
}

/// How the tracker treats the optional `will` show/hide events
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct TrackerConfig {
    /// Policy for `keyboardWillShow`
    pub will_show: WillEventPolicy,
    /// Policy for `keyboardWillHide`
    pub will_hide: WillEventPolicy,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            will_show: WillEventPolicy::Eager,
            will_hide: WillEventPolicy::Ignore,
        }
    }
}

impl TrackerConfig {
    /// Whether events of `kind` are expected to carry frames that the
    /// reducer reads. `Ignore`d will-events and `DidHide` do not.
    pub fn expects_frames(&self, kind: KeyboardEventKind) -> bool {
        match kind {
            KeyboardEventKind::DidHide => false,
            KeyboardEventKind::WillShow => self.will_show != WillEventPolicy::Ignore,
            KeyboardEventKind::WillHide => self.will_hide != WillEventPolicy::Ignore,
            _ => true,
        }
    }

    /// Event kinds the tracker subscribes to under this configuration
    pub fn subscribed_kinds(&self) -> Vec<KeyboardEventKind> {
        KeyboardEventKind::all()
            .iter()
            .copied()
            .filter(|kind| match kind {
                KeyboardEventKind::WillShow => self.will_show != WillEventPolicy::Ignore,
                KeyboardEventKind::WillHide => self.will_hide != WillEventPolicy::Ignore,
                _ => true,
            })
            .collect()
    }
}

/// Published keyboard state
///
/// `keyboard_height` tracks `coordinates.end.height`, except before the first
/// height-setting event and after a hide, where it is `0` while `coordinates`
/// keeps the last reported frames.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyboardSnapshot {
    pub keyboard_shown: bool,
    pub keyboard_height: f64,
    pub coordinates: Coordinates,
}

impl KeyboardSnapshot {
    fn with_geometry(self, coordinates: Coordinates) -> Self {
        Self {
            keyboard_height: coordinates.end.height,
            coordinates,
            ..self
        }
    }

    fn with_coordinates(self, coordinates: Coordinates) -> Self {
        Self {
            coordinates,
            ..self
        }
    }
}

/// Compute the snapshot that follows `snapshot` once `kind` is delivered.
///
/// Total over every kind. `DidHide` and ignored will-events never read their
/// payload. Any other kind that arrives without one leaves the geometry untouched.
pub fn reduce(
    snapshot: KeyboardSnapshot,
    kind: KeyboardEventKind,
    payload: Option<&Coordinates>,
    config: &TrackerConfig,
) -> KeyboardSnapshot {
    let next = match kind {
        KeyboardEventKind::DidHide => {
            return KeyboardSnapshot {
                keyboard_shown: false,
                keyboard_height: 0.0,
                ..snapshot
            };
        }
        KeyboardEventKind::DidShow => KeyboardSnapshot {
            keyboard_shown: true,
            ..snapshot
        },
        _ => snapshot,
    };

    if !config.expects_frames(kind) {
        return next;
    }

    let Some(coordinates) = payload.copied() else {
        log::warn!("{} delivered without frames; geometry unchanged", kind);
        return next;
    };

    match kind {
        KeyboardEventKind::WillShow => apply_will(next, coordinates, config.will_show),
        KeyboardEventKind::WillHide => apply_will(next, coordinates, config.will_hide),
        _ => next.with_geometry(coordinates),
    }
}

fn apply_will(
    snapshot: KeyboardSnapshot,
    coordinates: Coordinates,
    policy: WillEventPolicy,
) -> KeyboardSnapshot {
    match policy {
        WillEventPolicy::Ignore => snapshot,
        WillEventPolicy::CoordinatesOnly => snapshot.with_coordinates(coordinates),
        WillEventPolicy::Eager => snapshot.with_geometry(coordinates),
    }
}

/// Holder of the latest snapshot for one tracker
#[derive(Debug, Clone, Default)]
pub struct KeyboardStore {
    snapshot: KeyboardSnapshot,
    config: TrackerConfig,
    events_applied: u64,
}

impl KeyboardStore {
    pub fn new(config: TrackerConfig) -> Self {
        Self {
            snapshot: KeyboardSnapshot::default(),
            config,
            events_applied: 0,
        }
    }

    /// Reduce one event and swap in the resulting snapshot
    pub fn apply(&mut self, kind: KeyboardEventKind, payload: Option<&Coordinates>) {
        let next = reduce(self.snapshot, kind, payload, &self.config);
        self.events_applied += 1;
        log::debug!(
            "{} -> shown={} height={}",
            kind,
            next.keyboard_shown,
            next.keyboard_height
        );
        self.snapshot = next;
    }

    /// Apply a full event record
    pub fn process_event(&mut self, event: &KeyboardEvent) {
        self.apply(event.kind, event.payload.as_ref());
    }

    pub fn snapshot(&self) -> KeyboardSnapshot {
        self.snapshot
    }

    pub fn config(&self) -> &TrackerConfig {
        &self.config
    }

    /// Number of events reduced since the last reset
    pub fn events_applied(&self) -> u64 {
        self.events_applied
    }

    /// Return to the default snapshot
    pub fn reset(&mut self) {
        self.snapshot = KeyboardSnapshot::default();
        self.events_applied = 0;
    }
}
