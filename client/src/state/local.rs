//! Page-scoped stores tied to a view's mount/unmount lifecycle.
//!
//! SYSTEM CONTEXT
//! ==============
//! Global state (`FavouritesState`) lives for the whole session. Page-local
//! stores are created when their page view is built and torn down when the
//! view's reactive owner is cleaned up, so nothing page-specific outlives
//! the visit.

#[cfg(test)]
#[path = "local_test.rs"]
mod local_test;

use leptos::prelude::*;

/// A store that owns page-visit data and can release it on unmount.
pub trait LocalStore {
    /// Release held data. Called once, when the owning view is discarded.
    fn destroy(&mut self);
}

/// Context wrapper so each scoped store type gets its own context slot.
#[derive(Debug)]
pub struct LocalStoreContext<T: 'static>(RwSignal<T>);

impl<T> Clone for LocalStoreContext<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for LocalStoreContext<T> {}

/// Create a page-scoped store and register its teardown with the current
/// reactive owner.
pub fn use_local_store<T>(create: impl FnOnce() -> T) -> RwSignal<T>
where
    T: LocalStore + Send + Sync + 'static,
{
    let store = RwSignal::new(create());
    on_cleanup(move || {
        // The signal may already be disposed alongside its owner.
        let _ = store.try_update(LocalStore::destroy);
    });
    store
}

/// Expose a scoped store to the calling view's subtree.
pub fn provide_local_store<T>(store: RwSignal<T>)
where
    T: Send + Sync + 'static,
{
    provide_context(LocalStoreContext(store));
}

/// Read the scoped store provided by an ancestor view.
///
/// # Panics
///
/// Panics when called outside the subtree that provided the store; that is
/// a wiring defect, not a runtime condition.
pub fn use_local_store_context<T>() -> RwSignal<T>
where
    T: Send + Sync + 'static,
{
    match use_context::<LocalStoreContext<T>>() {
        Some(LocalStoreContext(store)) => store,
        None => panic!("{} must be used within a Provider", std::any::type_name::<T>()),
    }
}
