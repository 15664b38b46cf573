//! Inline SVG glyphs shared by the report components. The `<img>`-based icons
//! (panel header, suggestion list) are referenced by asset path instead and
//! resolved by whatever serves static assets.

use leptos::prelude::*;

/// Asset path of the checkmark icon used in the ATS suggestion list.
pub const CHECK_ICON: &str = "/icons/check.svg";
/// Asset path of the warning icon used in the ATS suggestion list.
pub const WARNING_ICON: &str = "/icons/warning.svg";

#[component]
pub fn CheckGlyph(#[prop(into)] class: String) -> impl IntoView {
    view! {
        <svg
            class=class
            fill="none"
            stroke="currentColor"
            viewBox="0 0 24 24"
            xmlns="http://www.w3.org/2000/svg"
        >
            <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M5 13l4 4L19 7" />
        </svg>
    }
}

#[component]
pub fn WarningGlyph(#[prop(into)] class: String) -> impl IntoView {
    view! {
        <svg
            class=class
            fill="none"
            stroke="currentColor"
            viewBox="0 0 24 24"
            xmlns="http://www.w3.org/2000/svg"
        >
            <path
                stroke-linecap="round"
                stroke-linejoin="round"
                stroke-width="2"
                d="M12 9v2m0 4h.01m-6.938 4h13.856c1.54 0 2.502-1.667 1.732-3L13.732 4c-.77-1.333-2.694-1.333-3.464 0L3.34 16c-.77 1.333.192 3 1.732 3z"
            />
        </svg>
    }
}
