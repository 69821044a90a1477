//! Change notification for chart components.
//!
//! A single-threaded observer registry: styling mutations and axis-range
//! changes are coalesced by the caller into one [`ChangeEvent`] per logical
//! operation, then broadcast synchronously to every registered listener.
//! Dispatch snapshots the listener list first, so a listener may register or
//! unregister listeners (including itself) from inside its callback.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// The kind of change a [`ChangeEvent`] describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeKind {
    /// A series/default attribute of a renderer changed.
    Style,
    /// One or more axis ranges changed (zoom, pan, or auto-bounds restore).
    AxisRanges,
}

/// A change notification delivered to [`ChangeListener`]s.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChangeEvent {
    /// What changed.
    pub kind: ChangeKind,
}

impl ChangeEvent {
    /// Create a new change event.
    #[must_use]
    pub const fn new(kind: ChangeKind) -> Self {
        Self { kind }
    }
}

/// Receives change notifications from a chart component.
///
/// Listeners are responsible for their own side effects (typically scheduling
/// a repaint); the notifier has no rendering knowledge.
pub trait ChangeListener {
    /// Called synchronously for every fired event.
    fn chart_changed(&self, event: &ChangeEvent);
}

/// An ordered set of listener references with snapshot-before-dispatch
/// semantics.
///
/// Registration identity is exact reference identity (`Rc::ptr_eq`), so the
/// same listener object can be registered once and removed reliably.
/// Dispatch runs in reverse registration order; the order is deterministic
/// for a given registration sequence but is not part of the public contract.
///
/// Not thread-safe: `fire` is synchronous and may be re-entered from a
/// listener callback, but must only ever be called from one logical actor.
#[derive(Default)]
pub struct ChangeNotifier {
    listeners: RefCell<Vec<Rc<dyn ChangeListener>>>,
}

impl ChangeNotifier {
    /// Create an empty notifier.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener.
    pub fn register(&self, listener: Rc<dyn ChangeListener>) {
        self.listeners.borrow_mut().push(listener);
    }

    /// Unregister a listener by reference identity.
    ///
    /// Unregistering a listener that is not currently registered is a no-op.
    pub fn unregister(&self, listener: &Rc<dyn ChangeListener>) {
        self.listeners
            .borrow_mut()
            .retain(|l| !Rc::ptr_eq(l, listener));
    }

    /// Number of currently registered listeners.
    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().len()
    }

    /// Broadcast an event to every currently registered listener.
    ///
    /// The listener list is snapshotted before dispatch; registrations made
    /// during dispatch take effect for the next `fire`, not the current one.
    pub fn fire(&self, event: &ChangeEvent) {
        let snapshot: Vec<Rc<dyn ChangeListener>> = self.listeners.borrow().clone();
        for listener in snapshot.iter().rev() {
            listener.chart_changed(event);
        }
    }
}

impl fmt::Debug for ChangeNotifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChangeNotifier")
            .field("listeners", &self.listener_count())
            .finish()
    }
}
