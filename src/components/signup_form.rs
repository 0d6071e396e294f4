//! Signup Form Component
//!
//! Email input and activity select. Options come from the same list state as
//! the cards, so a failed load leaves only the placeholder.

use leptos::prelude::*;

use crate::context::{use_app_context, BoardStateStoreFields, ListState};
use crate::models::Activities;
use crate::render::select_options;

#[component]
pub fn SignupForm() -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;

    let options = move || match store.list().get() {
        ListState::Loaded(activities) => select_options(&activities),
        _ => select_options(&Activities::new()),
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let email = store.email().get();
        let activity = store.selected_activity().get();
        if email.is_empty() || activity.is_empty() {
            return;
        }
        ctx.signup(activity, email);
    };

    view! {
        <form id="signup-form" on:submit=on_submit>
            <div class="form-group">
                <label for="email">"Student Email:"</label>
                <input
                    type="email"
                    id="email"
                    required=true
                    placeholder="your-email@mergington.edu"
                    prop:value=move || store.email().get()
                    on:input=move |ev| *store.email().write() = event_target_value(&ev)
                />
            </div>
            <div class="form-group">
                <label for="activity">"Select Activity:"</label>
                <select
                    id="activity"
                    required=true
                    prop:value=move || store.selected_activity().get()
                    on:change=move |ev| *store.selected_activity().write() = event_target_value(&ev)
                >
                    // Options are rebuilt on every reload; mark the kept selection on the new nodes
                    {move || {
                        let selected = store.selected_activity().get();
                        options().into_iter().map(|opt| {
                            let is_selected = opt.value == selected;
                            view! {
                                <option value=opt.value prop:selected=is_selected>{opt.label}</option>
                            }
                        }).collect_view()
                    }}
                </select>
            </div>
            <button type="submit">"Sign Up"</button>
        </form>
    }
}
