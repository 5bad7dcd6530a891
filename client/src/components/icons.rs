//! Inline SVG icons. All icons inherit `currentColor`.

use leptos::prelude::*;

#[component]
pub fn HeartIcon(#[prop(optional)] filled: bool) -> impl IntoView {
    view! {
        <svg class="icon icon--heart" width="24" height="24" viewBox="0 0 24 24" aria-hidden="true">
            <path
                d="M12 20.5s-7.5-4.6-9.4-9.1C1.3 8.2 3.3 4.5 6.9 4.5c2.1 0 3.6 1.2 5.1 3 1.5-1.8 3-3 5.1-3 3.6 0 5.6 3.7 4.3 6.9-1.9 4.5-9.4 9.1-9.4 9.1z"
                fill=if filled { "currentColor" } else { "none" }
                stroke="currentColor"
                stroke-width="1.5"
                stroke-linejoin="round"
            />
        </svg>
    }
}

#[component]
pub fn CrossIcon() -> impl IntoView {
    view! {
        <svg class="icon icon--cross" width="16" height="16" viewBox="0 0 16 16" aria-hidden="true">
            <path d="M3 3l10 10M13 3L3 13" stroke="currentColor" stroke-width="1.5" stroke-linecap="round" />
        </svg>
    }
}

#[component]
pub fn ArrowLeftIcon() -> impl IntoView {
    view! {
        <svg class="icon icon--arrow-left" width="24" height="24" viewBox="0 0 24 24" aria-hidden="true">
            <path
                d="M15 5l-7 7 7 7"
                fill="none"
                stroke="currentColor"
                stroke-width="1.5"
                stroke-linecap="round"
                stroke-linejoin="round"
            />
        </svg>
    }
}

#[component]
pub fn SearchIcon() -> impl IntoView {
    view! {
        <svg class="icon icon--search" width="24" height="24" viewBox="0 0 24 24" aria-hidden="true">
            <circle cx="11" cy="11" r="6.5" fill="none" stroke="currentColor" stroke-width="1.5" />
            <path d="M16 16l4.5 4.5" stroke="currentColor" stroke-width="1.5" stroke-linecap="round" />
        </svg>
    }
}

#[component]
pub fn BagIcon() -> impl IntoView {
    view! {
        <svg class="icon icon--bag" width="24" height="24" viewBox="0 0 24 24" aria-hidden="true">
            <path
                d="M5 8h14l-1 12H6L5 8zM9 8V6a3 3 0 016 0v2"
                fill="none"
                stroke="currentColor"
                stroke-width="1.5"
                stroke-linejoin="round"
            />
        </svg>
    }
}

#[component]
pub fn UserIcon() -> impl IntoView {
    view! {
        <svg class="icon icon--user" width="24" height="24" viewBox="0 0 24 24" aria-hidden="true">
            <circle cx="12" cy="8" r="4" fill="none" stroke="currentColor" stroke-width="1.5" />
            <path d="M4 20c1.5-4 4.5-6 8-6s6.5 2 8 6" fill="none" stroke="currentColor" stroke-width="1.5" />
        </svg>
    }
}
