use leptos::prelude::*;

use crate::app::{FAVOURITES_PATH, PRODUCTS_PATH, UI_KIT_PATH};

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="footer__column">
                <span class="footer__brand">"HFurniture"</span>
                <span class="footer__note">"Furniture for every room"</span>
            </div>
            <nav class="footer__column">
                <a class="footer__link" href=PRODUCTS_PATH>
                    "Catalog"
                </a>
                <a class="footer__link" href=FAVOURITES_PATH>
                    "Favourites"
                </a>
                <a class="footer__link" href=UI_KIT_PATH>
                    "UI kit"
                </a>
            </nav>
            <div class="footer__column">
                <span class="footer__note">"support@hfurniture.example"</span>
                <span class="footer__note">"8 800 000-00-00"</span>
            </div>
        </footer>
    }
}
