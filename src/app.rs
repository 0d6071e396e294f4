//! Activity Board App
//!
//! Root component: activity list on the left, signup form and messages on the right.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::board::ActivityBoard;
use crate::commands::FetchClient;
use crate::components::{ActivityList, MessageBanner, SignupForm};
use crate::config::BoardConfig;
use crate::context::{AppContext, BoardState, StoreView};
use crate::notifier::{GlooTimers, Notifier};

#[component]
pub fn App() -> impl IntoView {
    let config = BoardConfig::from_document();
    let store = Store::new(BoardState::default());
    let view = StoreView(store);

    let board = ActivityBoard::new(
        FetchClient::new(config.api_base.clone()),
        view,
        Notifier::new(view, GlooTimers, config.message_ttl),
    );

    // Provide context to all children
    let ctx = AppContext::new(store, board);
    provide_context(ctx);

    // Load activities on mount
    Effect::new(move |_| {
        log::info!("[APP] Loading activities from '{}/activities'", config.api_base);
        ctx.reload();
    });

    view! {
        <header>
            <h1>"Mergington High School"</h1>
            <h2>"Extracurricular Activities"</h2>
        </header>

        <main class="app-layout">
            <section id="activities-container">
                <h3>"Available Activities"</h3>
                <ActivityList />
            </section>

            <section id="signup-container">
                <h3>"Sign Up for an Activity"</h3>
                <SignupForm />
                <MessageBanner />
            </section>
        </main>
    }
}
