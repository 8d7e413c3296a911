//! Keyboard event sources
//!
//! The tracker never talks to a platform directly. It subscribes through the
//! [`KeyboardEventSource`] trait, which a platform binding implements.
//! [`KeyboardEmitter`] is an in-process source that dispatches synchronously,
//! and [`EventQueue`] feeds it from an ordered channel of event records.

use super::{Coordinates, KeyboardEvent, KeyboardEventKind};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::sync::mpsc;
use thiserror::Error;

/// Handle returned by a successful subscription
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(pub u64);

/// Callback bound to one event kind. Receives the payload, if any.
pub type EventHandler = Rc<dyn Fn(Option<&Coordinates>)>;

/// Error type for subscription registration
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SourceError {
    /// The source does not deliver this kind
    #[error("event kind {0} is not supported by this source")]
    Unsupported(KeyboardEventKind),
    /// The source has been shut down
    #[error("event source is closed")]
    Closed,
}

/// Host capability delivering keyboard lifecycle events
pub trait KeyboardEventSource {
    /// Register `handler` for events of `kind`
    fn subscribe(
        &self,
        kind: KeyboardEventKind,
        handler: EventHandler,
    ) -> Result<SubscriptionId, SourceError>;

    /// Stop delivery to a previously registered handler. Unknown ids are ignored.
    fn unsubscribe(&self, id: SubscriptionId);
}

struct Registration {
    id: SubscriptionId,
    kind: KeyboardEventKind,
    handler: EventHandler,
}

/// In-process event source that calls handlers synchronously on `emit`
pub struct KeyboardEmitter {
    handlers: RefCell<Vec<Registration>>,
    next_id: Cell<u64>,
    supported: Vec<KeyboardEventKind>,
    closed: Cell<bool>,
}

impl KeyboardEmitter {
    /// Source that delivers every kind
    pub fn new() -> Self {
        Self::with_supported(KeyboardEventKind::all())
    }

    /// Source that only accepts subscriptions for `kinds`
    pub fn with_supported(kinds: &[KeyboardEventKind]) -> Self {
        Self {
            handlers: RefCell::new(Vec::new()),
            next_id: Cell::new(0),
            supported: kinds.to_vec(),
            closed: Cell::new(false),
        }
    }

    /// Deliver an event to every handler subscribed to its kind.
    /// Returns the number of handlers invoked.
    pub fn emit(&self, event: &KeyboardEvent) -> usize {
        // Collect first so handlers may unsubscribe while we dispatch
        let targets: Vec<EventHandler> = self
            .handlers
            .borrow()
            .iter()
            .filter(|reg| reg.kind == event.kind)
            .map(|reg| Rc::clone(&reg.handler))
            .collect();

        for handler in &targets {
            handler(event.payload.as_ref());
        }
        targets.len()
    }

    /// Number of live subscriptions
    pub fn subscriber_count(&self) -> usize {
        self.handlers.borrow().len()
    }

    /// Number of live subscriptions for one kind
    pub fn subscriber_count_for(&self, kind: KeyboardEventKind) -> usize {
        self.handlers
            .borrow()
            .iter()
            .filter(|reg| reg.kind == kind)
            .count()
    }

    /// Refuse further subscriptions. Existing ones keep receiving events.
    pub fn close(&self) {
        self.closed.set(true);
    }
}

impl Default for KeyboardEmitter {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyboardEventSource for KeyboardEmitter {
    fn subscribe(
        &self,
        kind: KeyboardEventKind,
        handler: EventHandler,
    ) -> Result<SubscriptionId, SourceError> {
        if self.closed.get() {
            return Err(SourceError::Closed);
        }
        if !self.supported.contains(&kind) {
            return Err(SourceError::Unsupported(kind));
        }

        let id = SubscriptionId(self.next_id.get());
        self.next_id.set(id.0 + 1);
        self.handlers
            .borrow_mut()
            .push(Registration { id, kind, handler });
        Ok(id)
    }

    fn unsubscribe(&self, id: SubscriptionId) {
        self.handlers.borrow_mut().retain(|reg| reg.id != id);
    }
}

/// Ordered queue of event records awaiting dispatch
///
/// Producers (e.g. a platform callback thread) hold senders; the UI thread
/// drains the queue into an emitter, one event at a time, in arrival order.
pub struct EventQueue {
    event_tx: mpsc::Sender<KeyboardEvent>,
    event_rx: mpsc::Receiver<KeyboardEvent>,
}

impl EventQueue {
    pub fn new() -> Self {
        let (event_tx, event_rx) = mpsc::channel();
        Self { event_tx, event_rx }
    }

    /// Sender half for producers
    pub fn sender(&self) -> mpsc::Sender<KeyboardEvent> {
        self.event_tx.clone()
    }

    /// Queue an event from the owning thread
    pub fn push(&self, event: KeyboardEvent) {
        // Receiver lives in self, so send cannot fail here
        let _ = self.event_tx.send(event);
    }

    /// Dispatch every queued event to `emitter`.
    /// Returns the number of events dispatched.
    pub fn pump(&self, emitter: &KeyboardEmitter) -> usize {
        let mut count = 0;
        while let Ok(event) = self.event_rx.try_recv() {
            emitter.emit(&event);
            count += 1;
        }
        count
    }
}

impl Default for EventQueue {
    fn default() -> Self {
        Self::new()
    }
}
