//! In-memory cart storage.
//!
//! Carts live for the duration of a page session and are never persisted.
//! `DashMap` allows concurrent access from handlers without an external
//! mutex; each cart is only ever driven by one user, so the per-key lock
//! is all the coordination required.

use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use quickbite_core::CartId;

use super::Cart;

/// Concurrent store of live carts, keyed by [`CartId`].
///
/// Also tracks which carts have an order submission in flight so a second
/// submit is rejected until the first resolves.
#[derive(Debug, Default)]
pub struct CartStore {
    carts: DashMap<CartId, Cart>,
    in_flight: DashMap<CartId, ()>,
}

impl CartStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a cart under a freshly generated id.
    pub fn insert(&self, cart: Cart) -> CartId {
        let id = CartId::generate();
        self.carts.insert(id, cart);
        id
    }

    /// Run a closure against the identified cart, if it exists.
    pub fn with_cart<T>(&self, id: CartId, f: impl FnOnce(&mut Cart) -> T) -> Option<T> {
        self.carts.get_mut(&id).map(|mut entry| f(entry.value_mut()))
    }

    /// Clone the identified cart's current state.
    #[must_use]
    pub fn snapshot(&self, id: CartId) -> Option<Cart> {
        self.carts.get(&id).map(|entry| entry.value().clone())
    }

    /// Drop a cart, e.g. after a successful checkout.
    pub fn remove(&self, id: CartId) {
        self.carts.remove(&id);
    }

    /// Number of live carts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.carts.len()
    }

    /// Whether no carts are stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.carts.is_empty()
    }

    /// Mark a cart's submission as in flight.
    ///
    /// Returns `None` when a submission for this cart is already pending.
    /// The returned guard releases the marker when dropped, whether the
    /// submission succeeded or failed.
    pub fn try_begin_submission(&self, id: CartId) -> Option<SubmissionGuard<'_>> {
        match self.in_flight.entry(id) {
            Entry::Occupied(_) => None,
            Entry::Vacant(vacant) => {
                vacant.insert(());
                Some(SubmissionGuard { store: self, id })
            }
        }
    }
}

/// RAII marker for an in-flight order submission.
#[derive(Debug)]
pub struct SubmissionGuard<'a> {
    store: &'a CartStore,
    id: CartId,
}

impl Drop for SubmissionGuard<'_> {
    fn drop(&mut self) {
        self.store.in_flight.remove(&self.id);
    }
}
