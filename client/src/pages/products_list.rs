//! Catalog page backed by a page-scoped products store.
//!
//! SYSTEM CONTEXT
//! ==============
//! The page creates a `ProductsPageState` on mount, exposes it to its
//! subtree, and fetches the catalog once. Leaving the route disposes the
//! owner and the store's `destroy` clears the list.
//!
//! ERROR HANDLING
//! ==============
//! A failed fetch keeps any previous list and shows the error with a hint.

#[cfg(test)]
#[path = "products_list_test.rs"]
mod products_list_test;

use leptos::prelude::*;

use crate::components::cards_list::CardsList;
use crate::components::page_wrapper::PageWrapper;
use crate::components::typography::{Typography, TypographyColor, TypographyTag, TypographyVariant};
use crate::state::catalog::CatalogSource;
use crate::state::local::{provide_local_store, use_local_store, use_local_store_context};
use crate::state::products_page::ProductsPageState;

pub fn found_label(count: usize) -> String {
    format!("Products found: {count}")
}

#[component]
pub fn ProductsListPage() -> impl IntoView {
    let source = expect_context::<CatalogSource>();
    let store = use_local_store(|| {
        let mut state = ProductsPageState::default();
        state.begin_fetch();
        state
    });
    provide_local_store(store);

    // Effects only run in the browser, after hydration.
    Effect::new(move || {
        let source = source.clone();
        leptos::task::spawn_local(async move {
            let result = source.fetch_products().await;
            let _ = store.try_update(|state| state.finish_fetch(result));
        });
    });

    view! {
        <PageWrapper class="products">
            <Typography tag=TypographyTag::H1 variant=TypographyVariant::Heading>
                "Furniture catalog"
            </Typography>
            <ProductsBody />
        </PageWrapper>
    }
}

#[component]
fn ProductsBody() -> impl IntoView {
    let store = use_local_store_context::<ProductsPageState>();
    let products = Signal::derive(move || store.with(|s| s.products().to_vec()));

    view! {
        <Show when=move || store.with(|s| s.loading())>
            <Typography tag=TypographyTag::P color=TypographyColor::Gray class="products__status">
                "Loading..."
            </Typography>
        </Show>
        {move || {
            store
                .with(|s| s.error().cloned())
                .map(|error| {
                    view! {
                        <div class="products__error" role="alert">
                            <Typography tag=TypographyTag::P variant=TypographyVariant::TextBaseBold>
                                {format!("Error: {error}")}
                            </Typography>
                            <Typography tag=TypographyTag::P color=TypographyColor::Gray>
                                {error.hint()}
                            </Typography>
                        </div>
                    }
                })
        }}
        <Show when=move || store.with(|s| !s.loading())>
            <Typography tag=TypographyTag::P color=TypographyColor::Gray class="products__count">
                {move || found_label(store.with(|s| s.products().len()))}
            </Typography>
        </Show>
        <CardsList products=products />
    }
}
