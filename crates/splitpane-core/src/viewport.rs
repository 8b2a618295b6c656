#![forbid(unsafe_code)]

//! Viewport change observers.
//!
//! When a drag gesture finishes, other size-dependent components on the
//! surface may need to re-measure. Instead of an ambient broadcast, they
//! subscribe here and receive a [`ViewportChange`] for every notification.
//! Subscriptions are RAII: dropping the [`ViewportSubscription`] removes the
//! callback.

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

use tracing::debug;

use crate::surface::NodeId;

/// Payload of one viewport notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewportChange {
    /// Root of the split-pane whose layout changed.
    pub source: NodeId,
}

type Callback = Rc<dyn Fn(&ViewportChange)>;

#[derive(Default)]
struct ObserverList {
    next_id: u64,
    callbacks: Vec<(u64, Callback)>,
}

/// Shared list of viewport observers.
///
/// Single-threaded and cheap to clone; clones notify the same observers.
#[derive(Clone, Default)]
pub struct ViewportObservers {
    list: Rc<RefCell<ObserverList>>,
}

impl fmt::Debug for ViewportObservers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ViewportObservers")
            .field("subscribers", &self.len())
            .finish()
    }
}

impl ViewportObservers {
    /// Create an empty observer list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `callback`; it stays subscribed while the handle lives.
    pub fn subscribe(&self, callback: impl Fn(&ViewportChange) + 'static) -> ViewportSubscription {
        let mut list = self.list.borrow_mut();
        list.next_id = list.next_id.saturating_add(1);
        let id = list.next_id;
        list.callbacks.push((id, Rc::new(callback)));
        ViewportSubscription {
            id,
            list: Rc::downgrade(&self.list),
        }
    }

    /// Deliver `change` to every subscriber, in subscription order.
    ///
    /// Callbacks may subscribe or unsubscribe; changes take effect from the
    /// next notification. Returns the number of callbacks invoked.
    pub fn notify(&self, change: &ViewportChange) -> usize {
        let snapshot: Vec<Callback> = self
            .list
            .borrow()
            .callbacks
            .iter()
            .map(|(_, callback)| Rc::clone(callback))
            .collect();
        debug!(source = %change.source, observers = snapshot.len(), "viewport changed");
        for callback in &snapshot {
            callback(change);
        }
        snapshot.len()
    }

    /// Number of live subscriptions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.list.borrow().callbacks.len()
    }

    /// Whether nobody is subscribed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.list.borrow().callbacks.is_empty()
    }
}

/// Live subscription; unsubscribes on drop.
#[must_use = "dropping the subscription unsubscribes immediately"]
pub struct ViewportSubscription {
    id: u64,
    list: Weak<RefCell<ObserverList>>,
}

impl fmt::Debug for ViewportSubscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ViewportSubscription")
            .field("id", &self.id)
            .finish()
    }
}

impl Drop for ViewportSubscription {
    fn drop(&mut self) {
        let Some(list) = self.list.upgrade() else {
            return;
        };
        if let Ok(mut list) = list.try_borrow_mut() {
            list.callbacks.retain(|(id, _)| *id != self.id);
        }
    }
}
