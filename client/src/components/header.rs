//! Site header: logo, navigation, search, and the favourites/cart actions.

#[cfg(test)]
#[path = "header_test.rs"]
mod header_test;

use leptos::prelude::*;

use super::icons::{BagIcon, HeartIcon, UserIcon};
use super::input::{Input, InputSize};
use crate::app::{FAVOURITES_PATH, HOME_PATH, PRODUCTS_PATH, UI_KIT_PATH};
use crate::state::favourites::FavouritesState;

/// Badge text for the favourites counter; hidden when zero.
pub fn count_badge(count: usize) -> Option<String> {
    match count {
        0 => None,
        1..=99 => Some(count.to_string()),
        _ => Some("99+".to_owned()),
    }
}

#[component]
pub fn Header() -> impl IntoView {
    let favourites = expect_context::<RwSignal<FavouritesState>>();
    let search = RwSignal::new(String::new());
    let badge = move || favourites.with(|f| count_badge(f.favourite_count()));

    view! {
        <header class="header">
            <a class="header__logo" href=HOME_PATH>
                "HFurniture"
            </a>
            <nav class="header__nav">
                <a class="header__link" href=PRODUCTS_PATH>
                    "Catalog"
                </a>
                <a class="header__link" href=UI_KIT_PATH>
                    "UI kit"
                </a>
            </nav>
            <Input
                id="header-search"
                size=InputSize::M
                placeholder="Search"
                value=search
                show_clear_button=true
                class="header__search"
            />
            <div class="header__actions">
                <a class="header__action" href=FAVOURITES_PATH title="Favourites">
                    <HeartIcon />
                    {move || badge().map(|text| view! { <span class="header__badge">{text}</span> })}
                    <span class="visually-hidden">"Favourites"</span>
                </a>
                <button
                    type="button"
                    class="header__action"
                    title="Cart"
                    on:click=move |_| leptos::logging::log!("Cart is not available yet")
                >
                    <BagIcon />
                    <span class="visually-hidden">"Cart"</span>
                </button>
                <button
                    type="button"
                    class="header__action"
                    title="Profile"
                    on:click=move |_| leptos::logging::log!("Profile is not available yet")
                >
                    <UserIcon />
                    <span class="visually-hidden">"Profile"</span>
                </button>
            </div>
        </header>
    }
}
