//! Product image slot: the photo when a URL is known, otherwise a
//! placeholder panel with the product's placeholder label.

use leptos::prelude::*;

#[component]
pub fn ProductImage(
    image_url: Option<String>,
    image_placeholder: Option<String>,
    #[prop(into)] alt: String,
    #[prop(into)] class: String,
) -> impl IntoView {
    match image_url {
        Some(src) => view! { <img class=format!("{class}__image") src=src alt=alt loading="lazy" /> }.into_any(),
        None => {
            let label = image_placeholder.unwrap_or(alt);
            let aria_label = label.clone();
            view! {
                <div class=format!("{class}__placeholder") role="img" aria-label=aria_label>
                    <span class=format!("{class}__placeholder-text")>{label}</span>
                </div>
            }
            .into_any()
        }
    }
}
