//! Keyboard state tracker bound to an event source

use super::source::{EventHandler, KeyboardEventSource, SourceError, SubscriptionId};
use super::{Coordinates, KeyboardEventKind, KeyboardSnapshot, KeyboardStore, TrackerConfig};
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use thiserror::Error;

/// Error type for tracker lifecycle operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TrackerError {
    /// `activate` called while subscriptions are held
    #[error("tracker is already active")]
    AlreadyActive,
    /// The source refused one of the subscriptions
    #[error("failed to subscribe to {kind}: {source}")]
    Subscribe {
        kind: KeyboardEventKind,
        #[source]
        source: SourceError,
    },
}

/// Subscriptions acquired together and released together on drop
struct SubscriptionSet {
    source: Rc<dyn KeyboardEventSource>,
    ids: Vec<SubscriptionId>,
}

impl SubscriptionSet {
    fn new(source: Rc<dyn KeyboardEventSource>) -> Self {
        Self {
            source,
            ids: Vec::new(),
        }
    }

    fn acquire(
        &mut self,
        kind: KeyboardEventKind,
        handler: EventHandler,
    ) -> Result<(), TrackerError> {
        let id = self
            .source
            .subscribe(kind, handler)
            .map_err(|source| TrackerError::Subscribe { kind, source })?;
        self.ids.push(id);
        Ok(())
    }
}

impl Drop for SubscriptionSet {
    fn drop(&mut self) {
        for id in self.ids.drain(..) {
            self.source.unsubscribe(id);
        }
    }
}

/// Keeps a [`KeyboardSnapshot`] in sync with a keyboard event source
///
/// ```
/// use std::rc::Rc;
/// use keyboard_inset::keyboard::{
///     Coordinates, Frame, KeyboardEmitter, KeyboardEvent, KeyboardEventKind,
///     KeyboardStateTracker,
/// };
///
/// let emitter = Rc::new(KeyboardEmitter::new());
/// let mut tracker = KeyboardStateTracker::new(emitter.clone());
/// tracker.activate().unwrap();
///
/// let coords = Coordinates::new(Frame::default(), Frame::with_height(291.0));
/// emitter.emit(&KeyboardEvent::with_coordinates(KeyboardEventKind::DidShow, coords));
///
/// assert!(tracker.keyboard_shown());
/// assert_eq!(tracker.keyboard_height(), 291.0);
/// ```
pub struct KeyboardStateTracker {
    source: Rc<dyn KeyboardEventSource>,
    store: Rc<RefCell<KeyboardStore>>,
    subscriptions: Option<SubscriptionSet>,
}

impl KeyboardStateTracker {
    /// Create an inactive tracker with the default configuration
    pub fn new(source: Rc<dyn KeyboardEventSource>) -> Self {
        Self::with_config(source, TrackerConfig::default())
    }

    pub fn with_config(source: Rc<dyn KeyboardEventSource>, config: TrackerConfig) -> Self {
        Self {
            source,
            store: Rc::new(RefCell::new(KeyboardStore::new(config))),
            subscriptions: None,
        }
    }

    /// Subscribe to every configured event kind, starting from the default snapshot.
    ///
    /// Either all subscriptions are acquired or none are kept.
    pub fn activate(&mut self) -> Result<(), TrackerError> {
        if self.subscriptions.is_some() {
            return Err(TrackerError::AlreadyActive);
        }

        self.store.borrow_mut().reset();

        let kinds = self.store.borrow().config().subscribed_kinds();
        let mut set = SubscriptionSet::new(Rc::clone(&self.source));
        for &kind in &kinds {
            set.acquire(kind, self.handler_for(kind))?;
        }

        log::info!("keyboard tracker active ({} subscriptions)", set.ids.len());
        self.subscriptions = Some(set);
        Ok(())
    }

    /// Release all subscriptions. The last snapshot stays readable.
    pub fn deactivate(&mut self) {
        if let Some(set) = self.subscriptions.take() {
            log::info!("keyboard tracker released ({} subscriptions)", set.ids.len());
        }
    }

    pub fn is_active(&self) -> bool {
        self.subscriptions.is_some()
    }

    /// Current published snapshot
    pub fn snapshot(&self) -> KeyboardSnapshot {
        self.store.borrow().snapshot()
    }

    pub fn keyboard_height(&self) -> f64 {
        self.snapshot().keyboard_height
    }

    pub fn keyboard_shown(&self) -> bool {
        self.snapshot().keyboard_shown
    }

    pub fn coordinates(&self) -> Coordinates {
        self.snapshot().coordinates
    }

    /// Events reduced since the last activation
    pub fn events_applied(&self) -> u64 {
        self.store.borrow().events_applied()
    }

    pub fn config(&self) -> TrackerConfig {
        self.store.borrow().config().clone()
    }

    fn handler_for(&self, kind: KeyboardEventKind) -> EventHandler {
        let store: Weak<RefCell<KeyboardStore>> = Rc::downgrade(&self.store);
        Rc::new(move |payload: Option<&Coordinates>| {
            if let Some(store) = store.upgrade() {
                store.borrow_mut().apply(kind, payload);
            }
        })
    }
}

impl Drop for KeyboardStateTracker {
    fn drop(&mut self) {
        self.deactivate();
    }
}
