//! Favourites page: products from the shared registry, filtered to the
//! ids the visitor has marked.
//!
//! SYSTEM CONTEXT
//! ==============
//! The registry only knows ids until a catalog snapshot is loaded, so the
//! page fetches the catalog on mount and hands the result to the registry.

use leptos::prelude::*;

use crate::app::PRODUCTS_PATH;
use crate::components::button::{Button, ButtonColor, ButtonSize};
use crate::components::cards_list::CardsList;
use crate::components::page_wrapper::PageWrapper;
use crate::components::typography::{Typography, TypographyColor, TypographyTag, TypographyVariant};
use crate::state::catalog::CatalogSource;
use crate::state::favourites::FavouritesState;

#[component]
pub fn FavouritesPage() -> impl IntoView {
    let favourites = expect_context::<RwSignal<FavouritesState>>();
    let source = expect_context::<CatalogSource>();

    Effect::new(move || {
        let source = source.clone();
        leptos::task::spawn_local(async move {
            let result = source.fetch_products().await;
            let _ = favourites.try_update(|f| f.apply_catalog_result(result));
        });
    });

    let products = Signal::derive(move || favourites.with(FavouritesState::favourite_products));
    let has_ids = move || favourites.with(|f| f.favourite_count() > 0);
    // Orphan ids and an unloaded catalog both leave nothing to show.
    let list_empty = move || favourites.with(FavouritesState::has_no_favourite_products);
    let on_clear = Callback::new(move |_: leptos::ev::MouseEvent| favourites.update(FavouritesState::clear_favourites));

    view! {
        <PageWrapper class="favourites">
            <div class="favourites__header">
                <Typography tag=TypographyTag::H1 variant=TypographyVariant::Heading>
                    "Favourites"
                </Typography>
                <Show when=has_ids>
                    <Button size=ButtonSize::S color=ButtonColor::Transparent on_click=on_clear>
                        "Clear"
                    </Button>
                </Show>
            </div>
            <Show
                when=move || !list_empty()
                fallback=|| {
                    view! {
                        <div class="favourites__empty">
                            <Typography tag=TypographyTag::P color=TypographyColor::Gray>
                                "List is empty"
                            </Typography>
                            <a class="btn btn--m btn--default" href=PRODUCTS_PATH>
                                "Open catalog"
                            </a>
                        </div>
                    }
                }
            >
                <CardsList products=products />
            </Show>
        </PageWrapper>
    }
}
