//! Grid of product cards wired to the shared favourites registry.

use leptos::prelude::*;

use super::card::Card;
use crate::app::product_path;
use crate::net::types::Product;
use crate::state::favourites::FavouritesState;

#[component]
pub fn CardsList(#[prop(into)] products: Signal<Vec<Product>>) -> impl IntoView {
    let favourites = expect_context::<RwSignal<FavouritesState>>();

    view! {
        <div class="cards-list">
            {move || {
                products
                    .get()
                    .into_iter()
                    .map(|product| {
                        let id = product.id;
                        let title = product.title.clone();
                        let is_favorite = Signal::derive(move || favourites.with(|f| f.is_favourite(id)));
                        let on_favorite_click = Callback::new(move |()| {
                            favourites.update(|f| {
                                f.toggle_favourite(id);
                            });
                        });
                        let on_add_to_cart = Callback::new(move |()| {
                            leptos::logging::log!("Added to cart: {title} (id {id})");
                        });
                        view! {
                            <Card
                                title=product.title
                                price=product.price.to_string()
                                image_url=product.image_url
                                image_placeholder=product.image_placeholder
                                is_favorite=is_favorite
                                on_favorite_click=on_favorite_click
                                on_add_to_cart=on_add_to_cart
                                href=product_path(id)
                            />
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}
