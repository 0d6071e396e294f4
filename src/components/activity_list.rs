//! Activity List Component
//!
//! Full re-render of every card whenever the list state changes. The markup
//! comes from `render::render_html`, which escapes all untrusted text.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::context::{use_app_context, BoardStateStoreFields};

/// Selector for unregister buttons in the rendered cards
const UNREGISTER_BUTTON: &str = "button[data-activity][data-email]";

#[component]
pub fn ActivityList() -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;

    let rendered_html = move || store.list().get().to_html();

    // Single delegated handler for every unregister button in the list
    let on_click = move |ev: web_sys::MouseEvent| {
        let Some(target) = ev.target().and_then(|t| t.dyn_into::<web_sys::Element>().ok()) else {
            return;
        };
        let Ok(Some(button)) = target.closest(UNREGISTER_BUTTON) else {
            return;
        };
        if let (Some(activity), Some(email)) = (
            button.get_attribute("data-activity"),
            button.get_attribute("data-email"),
        ) {
            ctx.unregister(activity, email);
        }
    };

    view! {
        <div id="activities-list" on:click=on_click inner_html=rendered_html></div>
    }
}
