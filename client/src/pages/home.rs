//! Landing page with entry points into the storefront.

use leptos::prelude::*;

use crate::app::{FAVOURITES_PATH, PRODUCTS_PATH, UI_KIT_PATH, product_path};
use crate::components::page_wrapper::PageWrapper;
use crate::components::typography::{Typography, TypographyColor, TypographyTag, TypographyVariant};

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <PageWrapper class="home">
            <Typography tag=TypographyTag::H1 variant=TypographyVariant::Heading>
                "HFurniture"
            </Typography>
            <Typography tag=TypographyTag::P color=TypographyColor::Gray class="home__lead">
                "Sofas, chairs, and tables for every room."
            </Typography>
            <nav class="home__links">
                <a class="btn btn--l btn--default" href=PRODUCTS_PATH>
                    "Open catalog"
                </a>
                <a class="btn btn--l btn--transparent" href=product_path(1)>
                    "Featured product"
                </a>
                <a class="btn btn--l btn--transparent" href=FAVOURITES_PATH>
                    "Favourites"
                </a>
                <a class="btn btn--l btn--transparent" href=UI_KIT_PATH>
                    "UI kit"
                </a>
            </nav>
        </PageWrapper>
    }
}
