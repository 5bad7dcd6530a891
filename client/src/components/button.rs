//! Text button used across the storefront.

#[cfg(test)]
#[path = "button_test.rs"]
mod button_test;

use leptos::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonSize {
    S,
    #[default]
    M,
    L,
    Xl,
}

impl ButtonSize {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::S => "s",
            Self::M => "m",
            Self::L => "l",
            Self::Xl => "xl",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonColor {
    #[default]
    Default,
    Transparent,
}

impl ButtonColor {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Transparent => "transparent",
        }
    }
}

pub fn button_class(size: ButtonSize, color: ButtonColor, extra: &str) -> String {
    let mut class = format!("btn btn--{} btn--{}", size.as_str(), color.as_str());
    if !extra.trim().is_empty() {
        class.push(' ');
        class.push_str(extra.trim());
    }
    class
}

#[component]
pub fn Button(
    #[prop(optional)] size: ButtonSize,
    #[prop(optional)] color: ButtonColor,
    #[prop(optional)] disabled: bool,
    #[prop(optional, into)] class: String,
    #[prop(optional)] on_click: Option<Callback<leptos::ev::MouseEvent>>,
    children: Children,
) -> impl IntoView {
    view! {
        <button
            type="button"
            class=button_class(size, color, &class)
            disabled=disabled
            on:click=move |ev: leptos::ev::MouseEvent| {
                if let Some(on_click) = on_click.as_ref() {
                    on_click.run(ev);
                }
            }
        >
            {children()}
        </button>
    }
}
