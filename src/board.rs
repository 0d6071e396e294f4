//! Activity Board View-Model
//!
//! Keeps the rendered list in step with the server. Every successful mutation
//! is followed by a full `GET /activities` and a complete re-render; there is
//! no optimistic update and no client-side cache.

use crate::commands::{ActivityClient, ApiError};
use crate::models::{Activities, MutationReply, Outcome};
use crate::notifier::{MessageSink, Notifier, TimerHost};
use crate::render::LOAD_FAILED;

pub const SIGNUP_FAILED: &str = "Failed to sign up. Please try again.";
pub const UNREGISTER_FAILED: &str = "Failed to unregister. Please try again.";
pub const GENERIC_ERROR: &str = "An error occurred";
const SIGNED_UP: &str = "Signed up successfully";
const UNREGISTERED: &str = "Unregistered successfully";

/// Mount points the board draws into
pub trait BoardView {
    /// Replace the list and the select options
    fn render_activities(&self, activities: &Activities);
    /// Replace the list with a failure message, leaving the select unpopulated
    fn render_load_failure(&self, message: &str);
    fn reset_signup_form(&self);
}

pub struct ActivityBoard<C, V, S: MessageSink, T: TimerHost> {
    client: C,
    view: V,
    notifier: Notifier<S, T>,
}

impl<C, V, S, T> ActivityBoard<C, V, S, T>
where
    C: ActivityClient,
    V: BoardView,
    S: MessageSink,
    T: TimerHost,
{
    pub fn new(client: C, view: V, notifier: Notifier<S, T>) -> Self {
        Self { client, view, notifier }
    }

    /// Fetch the full list and re-render. Never fails to the caller.
    pub async fn load_activities(&self) {
        match self.client.list_activities().await {
            Ok(activities) => {
                log::debug!("[BOARD] Loaded {} activities", activities.len());
                self.view.render_activities(&activities);
            }
            Err(err) => {
                log::error!("[BOARD] Error fetching activities: {}", err);
                self.view.render_load_failure(LOAD_FAILED);
            }
        }
    }

    pub async fn signup(&self, activity: &str, email: &str) -> Outcome {
        log::info!("[BOARD] Signing up {} for {}", email, activity);
        let result = self.client.signup(activity, email).await;
        let outcome = settle(result, SIGNED_UP, SIGNUP_FAILED);
        if outcome.is_success() {
            self.view.reset_signup_form();
        }
        self.finish(outcome).await
    }

    pub async fn unregister(&self, activity: &str, email: &str) -> Outcome {
        log::info!("[BOARD] Unregistering {} from {}", email, activity);
        let result = self.client.unregister(activity, email).await;
        let outcome = settle(result, UNREGISTERED, UNREGISTER_FAILED);
        self.finish(outcome).await
    }

    async fn finish(&self, outcome: Outcome) -> Outcome {
        self.notifier.show(outcome.text.clone(), outcome.kind);
        if outcome.is_success() {
            self.load_activities().await;
        }
        outcome
    }
}

/// Turn a mutation result into the text the user sees
fn settle(result: Result<MutationReply, ApiError>, succeeded: &str, failed: &str) -> Outcome {
    match result {
        Ok(reply) if reply.is_success() => {
            Outcome::success(reply.body.message.unwrap_or_else(|| succeeded.to_string()))
        }
        Ok(reply) => {
            log::warn!("[BOARD] Server rejected request with status {}", reply.status);
            Outcome::error(reply.body.detail.unwrap_or_else(|| GENERIC_ERROR.to_string()))
        }
        Err(err) => {
            log::error!("[BOARD] Request failed: {}", err);
            Outcome::error(failed)
        }
    }
}
