use leptos::prelude::*;

use super::footer::Footer;
use super::header::Header;

/// Standard page chrome around routed content.
#[component]
pub fn PageWrapper(#[prop(optional, into)] class: String, children: Children) -> impl IntoView {
    let class = if class.is_empty() { "page".to_owned() } else { format!("page {class}") };
    view! {
        <div class="layout">
            <Header />
            <main class=class>{children()}</main>
            <Footer />
        </div>
    }
}
