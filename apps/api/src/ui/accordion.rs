//! Collapsible-section shell composed by the feedback breakdown.
//!
//! These components only emit structure: the container, per-item wrappers, a
//! `<button>` trigger, and a content region, all keyed by an item identifier
//! carried in `data-accordion-*` attributes. Which sections are open is owned
//! by front-end behavior reading those attributes; nothing here toggles state.

use leptos::prelude::*;

#[component]
pub fn Accordion(children: Children) -> impl IntoView {
    view! { <div class="accordion w-full">{children()}</div> }
}

#[component]
pub fn AccordionItem(#[prop(into)] id: String, children: Children) -> impl IntoView {
    view! {
        <div class="accordion-item" data-accordion-item=id>
            {children()}
        </div>
    }
}

/// Trigger region. Toggles the content sharing the same `item_id`.
#[component]
pub fn AccordionHeader(#[prop(into)] item_id: String, children: Children) -> impl IntoView {
    view! {
        <button type="button" class="accordion-header w-full text-left p-4" data-accordion-trigger=item_id>
            {children()}
        </button>
    }
}

/// Content region, collapsed by default.
#[component]
pub fn AccordionContent(#[prop(into)] item_id: String, children: Children) -> impl IntoView {
    view! {
        <div class="accordion-content hidden p-4 pt-0" data-accordion-target=item_id>
            {children()}
        </div>
    }
}
