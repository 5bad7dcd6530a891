//! Product card with favourite toggle and add-to-cart action.
//!
//! DESIGN
//! ======
//! The card is presentational: favourite state arrives as a signal and the
//! toggle is reported through a callback, so the same card renders in the
//! catalog, the favourites page, and the UI kit. When `href` is set the card
//! is a link; its buttons stop the click from reaching the link.

#[cfg(test)]
#[path = "card_test.rs"]
mod card_test;

use leptos::prelude::*;

use super::button::{Button, ButtonSize};
use super::icon_button::{IconButton, IconButtonVariant};
use super::icons::HeartIcon;
use super::product_image::ProductImage;
use super::typography::{Typography, TypographyColor, TypographyTag, TypographyVariant};

/// Accessible label for the favourite toggle.
pub fn favourite_label(active: bool) -> &'static str {
    if active { "Remove from favorites" } else { "Add to favorites" }
}

#[component]
pub fn Card(
    #[prop(into)] title: String,
    #[prop(into)] price: String,
    image_url: Option<String>,
    image_placeholder: Option<String>,
    #[prop(into)] is_favorite: Signal<bool>,
    #[prop(optional)] on_favorite_click: Option<Callback<()>>,
    #[prop(optional)] on_add_to_cart: Option<Callback<()>>,
    #[prop(optional, into)] href: Option<String>,
) -> impl IntoView {
    let favourite_click = Callback::new(move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        ev.stop_propagation();
        if let Some(cb) = on_favorite_click.as_ref() {
            cb.run(());
        }
    });
    let cart_click = Callback::new(move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        ev.stop_propagation();
        if let Some(cb) = on_add_to_cart.as_ref() {
            cb.run(());
        }
    });

    let image_alt = title.clone();
    let body = view! {
        <div class="card__media">
            <ProductImage
                image_url=image_url
                image_placeholder=image_placeholder
                alt=image_alt
                class="card"
            />
            <IconButton
                variant=IconButtonVariant::Favorite
                active=is_favorite
                alt=Signal::derive(move || favourite_label(is_favorite.get()).to_owned())
                class="card__favorite"
                on_click=favourite_click
            >
                <HeartIcon filled=true />
            </IconButton>
        </div>
        <div class="card__info">
            <Typography tag=TypographyTag::P variant=TypographyVariant::TextBaseBold class="card__price">
                {price}
            </Typography>
            <Typography tag=TypographyTag::P color=TypographyColor::Gray class="card__title">
                {title}
            </Typography>
        </div>
        <Button size=ButtonSize::M class="card__cart" on_click=cart_click>
            "Add to cart"
        </Button>
    };

    match href {
        Some(href) => view! { <a class="card card--link" href=href>{body}</a> }.into_any(),
        None => view! { <div class="card">{body}</div> }.into_any(),
    }
}
