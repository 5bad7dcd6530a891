//! Root application component with routing and context providers.

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Redirect, Route, Router, Routes},
};

use crate::config::ClientConfig;
use crate::net::types::ProductId;
use crate::pages::{
    favourites::FavouritesPage, home::HomePage, product_detail::ProductDetailPage, products_list::ProductsListPage,
    ui_kit::UiKitPage,
};
use crate::state::catalog::CatalogSource;
use crate::state::favourites::FavouritesState;

pub const HOME_PATH: &str = "/";
pub const PRODUCTS_PATH: &str = "/products";
pub const FAVOURITES_PATH: &str = "/favourites";
pub const UI_KIT_PATH: &str = "/ui-kit";

/// Detail route for a product.
pub fn product_path(id: ProductId) -> String {
    format!("/product/{id}")
}

/// Parse the `:id` route segment. Only plain decimal ids are accepted.
pub fn parse_product_id(raw: &str) -> Option<ProductId> {
    let raw = raw.trim();
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    raw.parse().ok()
}

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the favourites registry and catalog source, then sets up
/// client-side routing. Unknown paths redirect home.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // Start empty on both sides so hydration matches the server markup; the
    // stored ids arrive once the app is mounted in the browser.
    let favourites = RwSignal::new(FavouritesState::browser());
    Effect::new(move || favourites.update(FavouritesState::reload_from_storage));

    provide_context(favourites);
    let config = ClientConfig::from_build_env();
    provide_context(CatalogSource::from_config(&config));
    provide_context(config);

    view! {
        <Stylesheet id="leptos" href="/pkg/hfurniture.css"/>
        <Title text="HFurniture"/>

        <Router>
            <Routes fallback=|| view! { <Redirect path=HOME_PATH/> }>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=StaticSegment("products") view=ProductsListPage/>
                <Route path=(StaticSegment("product"), ParamSegment("id")) view=ProductDetailPage/>
                <Route path=StaticSegment("favourites") view=FavouritesPage/>
                <Route path=StaticSegment("ui-kit") view=UiKitPage/>
            </Routes>
        </Router>
    }
}
