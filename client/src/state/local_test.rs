use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use super::*;
use crate::state::products_page::ProductsPageState;

#[test]
#[should_panic(expected = "must be used within a Provider")]
fn use_local_store_context_without_provider_panics() {
    let _ = use_local_store_context::<ProductsPageState>();
}

#[test]
fn destroy_through_trait_object_clears_store() {
    let mut page = ProductsPageState::default();
    page.finish_fetch(Ok(crate::state::catalog::mock_products()));
    let store: &mut dyn LocalStore = &mut page;
    store.destroy();
    assert!(page.products().is_empty());
}

// =============================================================
// Owner lifecycle
// =============================================================

/// Store that counts `destroy` calls in a shared counter.
#[derive(Debug)]
struct CountingStore {
    destroys: Arc<AtomicUsize>,
}

impl LocalStore for CountingStore {
    fn destroy(&mut self) {
        self.destroys.fetch_add(1, Ordering::SeqCst);
    }
}

#[test]
fn owner_cleanup_destroys_store_exactly_once() {
    let destroys = Arc::new(AtomicUsize::new(0));
    let owner = Owner::new();
    owner.with(|| {
        let _store = use_local_store(|| CountingStore { destroys: Arc::clone(&destroys) });
    });
    assert_eq!(destroys.load(Ordering::SeqCst), 0);

    owner.cleanup();
    assert_eq!(destroys.load(Ordering::SeqCst), 1);
}

#[test]
fn provided_store_is_visible_to_descendants() {
    let owner = Owner::new();
    owner.with(|| {
        let store = use_local_store(ProductsPageState::default);
        provide_local_store(store);
        store.update(|s| s.finish_fetch(Ok(crate::state::catalog::mock_products())));

        let child = Owner::current().map(|o| o.child()).unwrap();
        child.with(|| {
            let seen = use_local_store_context::<ProductsPageState>();
            assert_eq!(seen.with(|s| s.products().len()), store.with(|s| s.products().len()));
        });
    });
    owner.cleanup();
}
