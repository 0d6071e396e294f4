//! Activities API Commands
//!
//! Frontend bindings to the activities REST endpoints.

mod http;
mod routes;

use thiserror::Error;

use crate::models::{Activities, MutationReply};

pub use http::{decode_activities, decode_reply, FetchClient};
pub use routes::{activities_path, signup_path, unregister_path};

/// Failure to complete a request
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// Fetch rejected or the browser refused the request
    #[error("request failed: {0}")]
    Transport(String),
    /// Server answered with a non-2xx status where one was not expected
    #[error("unexpected status {0}")]
    Status(u16),
    /// Body was not the JSON we expected
    #[error("malformed response body: {0}")]
    Decode(String),
}

/// The three calls the board makes against the backend
#[allow(async_fn_in_trait)]
pub trait ActivityClient {
    /// `GET /activities`
    async fn list_activities(&self) -> Result<Activities, ApiError>;

    /// `POST /activities/{activity}/signup?email={email}`
    async fn signup(&self, activity: &str, email: &str) -> Result<MutationReply, ApiError>;

    /// `DELETE /activities/{activity}/unregister?email={email}`
    async fn unregister(&self, activity: &str, email: &str) -> Result<MutationReply, ApiError>;
}
