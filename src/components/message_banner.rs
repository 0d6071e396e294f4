//! Message Banner Component

use leptos::prelude::*;

use crate::context::{use_app_context, BoardStateStoreFields};

/// Transient success/error message; class is `hidden` when not visible
#[component]
pub fn MessageBanner() -> impl IntoView {
    let store = use_app_context().store;

    view! {
        <div id="message" class=move || store.message().get().class()>
            {move || store.message().get().message.map(|m| m.text).unwrap_or_default()}
        </div>
    }
}
