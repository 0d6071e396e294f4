//! Browser Fetch Client
//!
//! `ActivityClient` over `window.fetch`. Bodies are read as text and decoded
//! with serde_json so a non-JSON error page becomes an `ApiError` instead of
//! an unhandled rejection.

use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, Response};

use super::routes::{activities_path, signup_path, unregister_path};
use super::{ActivityClient, ApiError};
use crate::models::{Activities, MutationReply, ReplyBody};

/// Fetch-backed client rooted at `base` ("" for same-origin)
#[derive(Debug, Clone, Default)]
pub struct FetchClient {
    base: String,
}

impl FetchClient {
    pub fn new(base: impl Into<String>) -> Self {
        Self { base: base.into() }
    }

    async fn send(&self, method: &str, url: &str) -> Result<(u16, String), ApiError> {
        let window = web_sys::window().ok_or_else(|| ApiError::Transport("no window".to_string()))?;

        let init = RequestInit::new();
        init.set_method(method);
        let request = Request::new_with_str_and_init(url, &init).map_err(transport)?;

        let value = JsFuture::from(window.fetch_with_request(&request)).await.map_err(transport)?;
        let response: Response = value.dyn_into().map_err(transport)?;
        let text = JsFuture::from(response.text().map_err(transport)?).await.map_err(transport)?;

        Ok((response.status(), text.as_string().unwrap_or_default()))
    }
}

fn transport(err: JsValue) -> ApiError {
    ApiError::Transport(format!("{:?}", err))
}

/// Decode a `GET /activities` response
pub fn decode_activities(status: u16, body: &str) -> Result<Activities, ApiError> {
    if !(200..300).contains(&status) {
        return Err(ApiError::Status(status));
    }
    serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Decode a signup/unregister response of any status
///
/// A 2xx status means the change was applied, so an empty or unexpected body
/// still counts as success. Only error responses must carry a JSON body.
pub fn decode_reply(status: u16, body: &str) -> Result<MutationReply, ApiError> {
    let reply = match serde_json::from_str::<ReplyBody>(body) {
        Ok(body) => MutationReply { status, body },
        Err(err) if (200..300).contains(&status) => {
            log::warn!("[API] Ignoring undecodable {} reply body: {}", status, err);
            MutationReply { status, body: ReplyBody::default() }
        }
        Err(err) => return Err(ApiError::Decode(err.to_string())),
    };
    Ok(reply)
}

impl ActivityClient for FetchClient {
    async fn list_activities(&self) -> Result<Activities, ApiError> {
        let (status, body) = self.send("GET", &activities_path(&self.base)).await?;
        decode_activities(status, &body)
    }

    async fn signup(&self, activity: &str, email: &str) -> Result<MutationReply, ApiError> {
        let (status, body) = self.send("POST", &signup_path(&self.base, activity, email)).await?;
        decode_reply(status, &body)
    }

    async fn unregister(&self, activity: &str, email: &str) -> Result<MutationReply, ApiError> {
        let (status, body) = self.send("DELETE", &unregister_path(&self.base, activity, email)).await?;
        decode_reply(status, &body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_activities_ok() {
        let body = r#"{"Chess Club": {"description": "d", "schedule": "s", "max_participants": 2, "participants": ["a@x.com"]}}"#;
        let activities = decode_activities(200, body).unwrap();
        assert_eq!(activities.len(), 1);
    }

    #[test]
    fn test_decode_activities_error_status() {
        let result = decode_activities(500, r#"{"detail": "boom"}"#);
        assert_eq!(result, Err(ApiError::Status(500)));
    }

    #[test]
    fn test_decode_activities_not_json() {
        assert!(matches!(decode_activities(200, "<html></html>"), Err(ApiError::Decode(_))));
    }

    #[test]
    fn test_decode_reply_error_detail() {
        let reply = decode_reply(400, r#"{"detail": "Student is already signed up"}"#).unwrap();
        assert!(!reply.is_success());
        assert_eq!(reply.body.detail.as_deref(), Some("Student is already signed up"));
    }

    #[test]
    fn test_decode_reply_success_with_empty_body() {
        let reply = decode_reply(204, "").unwrap();
        assert!(reply.is_success());
        assert_eq!(reply.body, ReplyBody::default());
    }

    #[test]
    fn test_decode_reply_success_with_odd_body() {
        let reply = decode_reply(200, r#"{"message": 5}"#).unwrap();
        assert!(reply.is_success());
        assert_eq!(reply.body.message, None);

        let reply = decode_reply(200, "<p>done</p>").unwrap();
        assert!(reply.is_success());
    }

    #[test]
    fn test_decode_reply_html_error_page() {
        let result = decode_reply(500, "<h1>Internal Server Error</h1>");
        assert!(matches!(result, Err(ApiError::Decode(_))));
    }
}
