#![forbid(unsafe_code)]

//! Scoped document-level pointer listeners.
//!
//! A drag gesture needs move/up delivery for exactly as long as it lives.
//! [`ListenerRegistry::register`] hands out a [`ListenerGuard`]; dropping the
//! guard removes the registration. Whatever ends the gesture (pointer-up,
//! pointer loss, the owning instance going away) releases its listeners
//! because the guards go with it.
//!
//! The registry is single-threaded (`Rc`-backed) and cheap to clone; clones
//! share the same registration table.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::{Rc, Weak};

use tracing::trace;

/// Identifier of one registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ListenerId(u64);

impl ListenerId {
    /// Get the raw numeric value.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

/// Event class a listener receives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListenerKind {
    /// Pointer movement anywhere on the surface.
    PointerMove,
    /// Pointer release anywhere on the surface.
    PointerUp,
}

#[derive(Debug, Default)]
struct RegistryTable {
    next_id: u64,
    active: BTreeMap<ListenerId, ListenerKind>,
}

/// Shared table of live pointer listeners.
#[derive(Debug, Clone, Default)]
pub struct ListenerRegistry {
    table: Rc<RefCell<RegistryTable>>,
}

impl ListenerRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener; it stays registered until the guard is dropped.
    pub fn register(&self, kind: ListenerKind) -> ListenerGuard {
        let mut table = self.table.borrow_mut();
        table.next_id = table.next_id.saturating_add(1);
        let id = ListenerId(table.next_id);
        table.active.insert(id, kind);
        trace!(listener = id.0, ?kind, "listener registered");
        ListenerGuard {
            id,
            kind,
            table: Rc::downgrade(&self.table),
        }
    }

    /// Number of live listeners of `kind`.
    #[must_use]
    pub fn count(&self, kind: ListenerKind) -> usize {
        self.table
            .borrow()
            .active
            .values()
            .filter(|registered| **registered == kind)
            .count()
    }

    /// Number of live listeners.
    #[must_use]
    pub fn len(&self) -> usize {
        self.table.borrow().active.len()
    }

    /// Whether no listener is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.table.borrow().active.is_empty()
    }

    /// Whether the registration behind `id` is still live.
    #[must_use]
    pub fn is_registered(&self, id: ListenerId) -> bool {
        self.table.borrow().active.contains_key(&id)
    }
}

/// Live registration; deregisters on drop.
#[derive(Debug)]
#[must_use = "dropping the guard deregisters the listener immediately"]
pub struct ListenerGuard {
    id: ListenerId,
    kind: ListenerKind,
    table: Weak<RefCell<RegistryTable>>,
}

impl ListenerGuard {
    /// Registration identifier.
    #[must_use]
    pub const fn id(&self) -> ListenerId {
        self.id
    }

    /// Event class of this registration.
    #[must_use]
    pub const fn kind(&self) -> ListenerKind {
        self.kind
    }
}

impl Drop for ListenerGuard {
    fn drop(&mut self) {
        let Some(table) = self.table.upgrade() else {
            return;
        };
        if let Ok(mut table) = table.try_borrow_mut() {
            table.active.remove(&self.id);
            trace!(listener = self.id.0, kind = ?self.kind, "listener released");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guard_drop_deregisters() {
        let registry = ListenerRegistry::new();
        let moves = registry.register(ListenerKind::PointerMove);
        let ups = registry.register(ListenerKind::PointerUp);
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.count(ListenerKind::PointerMove), 1);
        let move_id = moves.id();
        drop(moves);
        assert!(!registry.is_registered(move_id));
        assert_eq!(registry.count(ListenerKind::PointerMove), 0);
        assert_eq!(registry.count(ListenerKind::PointerUp), 1);
        drop(ups);
        assert!(registry.is_empty());
    }

    #[test]
    fn clones_share_the_table() {
        let registry = ListenerRegistry::new();
        let view = registry.clone();
        let _guard = registry.register(ListenerKind::PointerUp);
        assert_eq!(view.count(ListenerKind::PointerUp), 1);
    }

    #[test]
    fn guard_outliving_registry_is_harmless() {
        let registry = ListenerRegistry::new();
        let guard = registry.register(ListenerKind::PointerMove);
        drop(registry);
        drop(guard);
    }

    #[test]
    fn ids_are_unique() {
        let registry = ListenerRegistry::new();
        let a = registry.register(ListenerKind::PointerMove);
        let b = registry.register(ListenerKind::PointerMove);
        assert_ne!(a.id(), b.id());
        assert_eq!(a.kind(), ListenerKind::PointerMove);
    }
}
