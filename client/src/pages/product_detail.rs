//! Product detail page: image, title, price, description, and the
//! favourite toggle backed by the shared registry.
//!
//! ERROR HANDLING
//! ==============
//! A malformed id or an id the catalog does not know renders the not-found
//! view with a back button. Fetch failures render the error and its hint.

#[cfg(test)]
#[path = "product_detail_test.rs"]
mod product_detail_test;

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::app::{PRODUCTS_PATH, parse_product_id};
use crate::components::button::{Button, ButtonColor, ButtonSize};
use crate::components::card::favourite_label;
use crate::components::icon_button::{IconButton, IconButtonSize, IconButtonVariant};
use crate::components::icons::{ArrowLeftIcon, HeartIcon};
use crate::components::page_wrapper::PageWrapper;
use crate::components::product_image::ProductImage;
use crate::components::typography::{Typography, TypographyColor, TypographyTag, TypographyVariant};
use crate::net::api::CatalogError;
use crate::net::types::{Product, ProductId};
use crate::state::catalog::CatalogSource;
use crate::state::favourites::FavouritesState;

/// Lookup status for the routed product.
#[derive(Clone, Debug, PartialEq)]
pub enum DetailState {
    Loading,
    Found(Product),
    NotFound,
    Failed(CatalogError),
}

impl DetailState {
    pub fn from_lookup(result: Result<Option<Product>, CatalogError>) -> Self {
        match result {
            Ok(Some(product)) => Self::Found(product),
            Ok(None) => Self::NotFound,
            Err(e) => Self::Failed(e),
        }
    }
}

fn go_back() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(history) = web_sys::window().and_then(|w| w.history().ok()) {
            let _ = history.back();
        }
    }
}

#[component]
pub fn ProductDetailPage() -> impl IntoView {
    let params = use_params_map();
    let source = expect_context::<CatalogSource>();
    let product_id = Memo::new(move |_| params.with(|p| p.get("id").as_deref().and_then(parse_product_id)));
    let detail = RwSignal::new(DetailState::Loading);

    Effect::new(move || {
        let Some(id) = product_id.get() else {
            detail.set(DetailState::NotFound);
            return;
        };
        detail.set(DetailState::Loading);
        let source = source.clone();
        leptos::task::spawn_local(async move {
            let result = source.fetch_product(id).await;
            if let Err(e) = &result {
                leptos::logging::warn!("Failed to fetch product {id}: {e}");
            }
            // Ignore responses for an id the route has already moved past.
            if product_id.try_get_untracked().flatten() == Some(id) {
                let _ = detail.try_set(DetailState::from_lookup(result));
            }
        });
    });

    view! {
        <PageWrapper class="detail">
            {move || match detail.get() {
                DetailState::Loading => {
                    view! {
                        <Typography tag=TypographyTag::P color=TypographyColor::Gray>
                            "Loading..."
                        </Typography>
                    }
                        .into_any()
                }
                DetailState::Found(product) => view! { <ProductDetail product=product /> }.into_any(),
                DetailState::NotFound => view! { <NotFound /> }.into_any(),
                DetailState::Failed(error) => {
                    view! {
                        <div class="detail__error" role="alert">
                            <Typography tag=TypographyTag::P variant=TypographyVariant::TextBaseBold>
                                {format!("Error: {error}")}
                            </Typography>
                            <Typography tag=TypographyTag::P color=TypographyColor::Gray>
                                {error.hint()}
                            </Typography>
                        </div>
                    }
                        .into_any()
                }
            }}
        </PageWrapper>
    }
}

#[component]
fn ProductDetail(product: Product) -> impl IntoView {
    let favourites = expect_context::<RwSignal<FavouritesState>>();
    let id: ProductId = product.id;
    let is_favorite = Signal::derive(move || favourites.with(|f| f.is_favourite(id)));
    let title = product.title.clone();
    let image_alt = product.title.clone();

    let on_favorite = Callback::new(move |_: leptos::ev::MouseEvent| {
        favourites.update(|f| f.toggle_favourite(id));
    });
    let on_add_to_cart = Callback::new(move |_: leptos::ev::MouseEvent| {
        leptos::logging::log!("Added to cart: {title} (id {id})");
    });
    let on_back = Callback::new(move |_: leptos::ev::MouseEvent| go_back());

    view! {
        <article class="detail__product">
            <Button color=ButtonColor::Transparent size=ButtonSize::S class="detail__back" on_click=on_back>
                <ArrowLeftIcon />
                "Back"
            </Button>
            <div class="detail__media">
                <ProductImage
                    image_url=product.image_url
                    image_placeholder=product.image_placeholder
                    alt=image_alt
                    class="detail"
                />
            </div>
            <div class="detail__info">
                <Typography tag=TypographyTag::H1 variant=TypographyVariant::Heading>
                    {product.title}
                </Typography>
                <Typography tag=TypographyTag::P variant=TypographyVariant::SubHeadingBold class="detail__price">
                    {product.price.to_string()}
                </Typography>
                <Typography tag=TypographyTag::P color=TypographyColor::Gray class="detail__description">
                    {product.description}
                </Typography>
                <div class="detail__actions">
                    <Button size=ButtonSize::L on_click=on_add_to_cart>
                        "Add to cart"
                    </Button>
                    <IconButton
                        size=IconButtonSize::L
                        variant=IconButtonVariant::Favorite
                        active=is_favorite
                        alt=Signal::derive(move || favourite_label(is_favorite.get()).to_owned())
                        on_click=on_favorite
                    >
                        <HeartIcon filled=true />
                    </IconButton>
                </div>
            </div>
        </article>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    let on_back = Callback::new(move |_: leptos::ev::MouseEvent| go_back());
    view! {
        <div class="detail__not-found">
            <Typography tag=TypographyTag::H2 variant=TypographyVariant::SubHeading>
                "Product not found"
            </Typography>
            <div class="detail__actions">
                <Button color=ButtonColor::Transparent on_click=on_back>
                    <ArrowLeftIcon />
                    "Back"
                </Button>
                <a class="btn btn--m btn--default" href=PRODUCTS_PATH>
                    "Open catalog"
                </a>
            </div>
        </div>
    }
}
