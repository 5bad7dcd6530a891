//! Labelled text input with an optional clear button.
//!
//! The input is controlled when a `value` signal is supplied; otherwise the
//! browser owns its value and the clear button only appears while focused.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use leptos::prelude::*;

use super::icons::CrossIcon;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum InputSize {
    #[default]
    M,
    L,
}

/// Whether the clear affordance is visible.
pub fn should_show_clear(enabled: bool, focused: bool, has_value: bool) -> bool {
    enabled && (focused || has_value)
}

pub fn input_class(size: InputSize, disabled: bool, extra: &str) -> String {
    let size = match size {
        InputSize::M => "m",
        InputSize::L => "l",
    };
    let mut class = format!("input input--{size}");
    if disabled {
        class.push_str(" input--disabled");
    }
    if !extra.trim().is_empty() {
        class.push(' ');
        class.push_str(extra.trim());
    }
    class
}

#[component]
pub fn Input(
    #[prop(into)] id: String,
    #[prop(optional)] size: InputSize,
    #[prop(optional, into)] label: Option<String>,
    #[prop(optional, into)] placeholder: String,
    #[prop(optional, into)] input_type: String,
    #[prop(optional)] value: Option<RwSignal<String>>,
    #[prop(optional)] show_clear_button: bool,
    #[prop(optional)] disabled: bool,
    #[prop(optional)] readonly: bool,
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    let focused = RwSignal::new(false);
    let input_type = if input_type.is_empty() { "text".to_owned() } else { input_type };
    let has_value = move || value.is_some_and(|v| v.with(|text| !text.is_empty()));
    let clear_visible = move || should_show_clear(show_clear_button && !disabled && !readonly, focused.get(), has_value());

    // mousedown fires before blur, so the button is still mounted when it lands
    let on_clear = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        if let Some(value) = value {
            value.set(String::new());
        }
    };

    let label_view = label.map(|text| {
        let for_id = id.clone();
        view! { <label class="input__label" for=for_id>{text}</label> }
    });

    view! {
        <div class=input_class(size, disabled, &class)>
            {label_view}
            <div class="input__field">
                <input
                    id=id
                    class="input__control"
                    type=input_type
                    placeholder=placeholder
                    disabled=disabled
                    readonly=readonly
                    prop:value=move || value.map(|v| v.get()).unwrap_or_default()
                    on:input=move |ev| {
                        if let Some(value) = value {
                            value.set(event_target_value(&ev));
                        }
                    }
                    on:focus=move |_| focused.set(true)
                    on:blur=move |_| focused.set(false)
                />
                <Show when=clear_visible>
                    <button
                        type="button"
                        class="input__clear"
                        aria-label="Clear"
                        on:mousedown=on_clear
                    >
                        <CrossIcon />
                    </button>
                </Show>
            </div>
        </div>
    }
}
