//! Square button wrapping an icon, with an accessible hidden label.

#[cfg(test)]
#[path = "icon_button_test.rs"]
mod icon_button_test;

use leptos::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum IconButtonSize {
    #[default]
    M,
    L,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum IconButtonVariant {
    #[default]
    Default,
    Favorite,
}

pub fn icon_button_class(size: IconButtonSize, variant: IconButtonVariant, active: bool, extra: &str) -> String {
    let size = match size {
        IconButtonSize::M => "m",
        IconButtonSize::L => "l",
    };
    let variant = match variant {
        IconButtonVariant::Default => "default",
        IconButtonVariant::Favorite => "favorite",
    };
    let mut class = format!("icon-btn icon-btn--{size} icon-btn--{variant}");
    if active {
        class.push_str(" icon-btn--active");
    }
    if !extra.trim().is_empty() {
        class.push(' ');
        class.push_str(extra.trim());
    }
    class
}

#[component]
pub fn IconButton(
    #[prop(optional)] size: IconButtonSize,
    #[prop(optional)] variant: IconButtonVariant,
    #[prop(into)] active: Signal<bool>,
    #[prop(into)] alt: Signal<String>,
    #[prop(optional, into)] class: String,
    #[prop(optional)] on_click: Option<Callback<leptos::ev::MouseEvent>>,
    children: Children,
) -> impl IntoView {
    view! {
        <button
            type="button"
            class=move || icon_button_class(size, variant, active.get(), &class)
            aria-pressed=move || active.get().to_string()
            title=move || alt.get()
            on:click=move |ev: leptos::ev::MouseEvent| {
                if let Some(on_click) = on_click.as_ref() {
                    on_click.run(ev);
                }
            }
        >
            {children()}
            <span class="visually-hidden">{move || alt.get()}</span>
        </button>
    }
}
