//! Frontend Models
//!
//! Data structures matching the activities API.

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer};

/// Activity detail (value of the `GET /activities` object)
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Activity {
    pub description: String,
    pub schedule: String,
    pub max_participants: u32,
    #[serde(default)]
    pub participants: Vec<String>,
}

impl Activity {
    /// Capacity minus roster size. Not clamped: an over-full roster goes negative.
    pub fn spots_left(&self) -> i64 {
        i64::from(self.max_participants) - self.participants.len() as i64
    }

    pub fn is_full(&self) -> bool {
        self.spots_left() == 0
    }
}

/// Activities keyed by name, in the order the server sent them.
///
/// A plain `HashMap` would lose the server ordering, so the JSON object is
/// collected into a vector of entries instead.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Activities {
    entries: Vec<(String, Activity)>,
}

impl Activities {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace an activity. A replaced entry keeps its original position.
    pub fn insert(&mut self, name: impl Into<String>, activity: Activity) {
        let name = name.into();
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = activity,
            None => self.entries.push((name, activity)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&Activity> {
        self.entries.iter().find(|(n, _)| n == name).map(|(_, a)| a)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Activity)> {
        self.entries.iter().map(|(n, a)| (n.as_str(), a))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(n, _)| n.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'de> Deserialize<'de> for Activities {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct ActivitiesVisitor;

        impl<'de> Visitor<'de> for ActivitiesVisitor {
            type Value = Activities;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("an object mapping activity names to activity details")
            }

            fn visit_map<M>(self, mut access: M) -> Result<Activities, M::Error>
            where
                M: MapAccess<'de>,
            {
                let mut activities = Activities {
                    entries: Vec::with_capacity(access.size_hint().unwrap_or(0)),
                };
                while let Some((name, activity)) = access.next_entry::<String, Activity>()? {
                    activities.insert(name, activity);
                }
                Ok(activities)
            }
        }

        deserializer.deserialize_map(ActivitiesVisitor)
    }
}

/// Style of a transient message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Success,
    Error,
}

impl MessageKind {
    /// CSS class applied to the message area
    pub fn class(self) -> &'static str {
        match self {
            MessageKind::Success => "success",
            MessageKind::Error => "error",
        }
    }
}

/// Message shown by the notifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiMessage {
    pub text: String,
    pub kind: MessageKind,
}

/// Contents and visibility of the message area
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageState {
    pub message: Option<UiMessage>,
    pub visible: bool,
}

impl MessageState {
    pub fn shown(message: UiMessage) -> Self {
        Self { message: Some(message), visible: true }
    }

    /// Class list of the message area: `hidden` or the message kind
    pub fn class(&self) -> &'static str {
        match (&self.message, self.visible) {
            (Some(message), true) => message.kind.class(),
            _ => "hidden",
        }
    }
}

/// Result of a signup/unregister attempt, carrying the user-facing text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub kind: MessageKind,
    pub text: String,
}

impl Outcome {
    pub fn success(text: impl Into<String>) -> Self {
        Self { kind: MessageKind::Success, text: text.into() }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self { kind: MessageKind::Error, text: text.into() }
    }

    pub fn is_success(&self) -> bool {
        self.kind == MessageKind::Success
    }
}

/// Response body of signup/unregister: `{message}` on success, `{detail}` on error
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ReplyBody {
    #[serde(default, deserialize_with = "text_only")]
    pub message: Option<String>,
    /// FastAPI validation errors send a list here; only plain text is shown
    #[serde(default, deserialize_with = "text_only")]
    pub detail: Option<String>,
}

fn text_only<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(text) => Some(text),
        _ => None,
    })
}

/// Status plus decoded body of a mutation request
#[derive(Debug, Clone, PartialEq)]
pub struct MutationReply {
    pub status: u16,
    pub body: ReplyBody,
}

impl MutationReply {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_activities_keep_server_order() {
        let json = r#"{
            "Programming Class": {"description": "Code", "schedule": "Tue", "max_participants": 20, "participants": []},
            "Chess Club": {"description": "Chess", "schedule": "Fri", "max_participants": 12, "participants": ["michael@mergington.edu"]},
            "Art Studio": {"description": "Paint", "schedule": "Mon", "max_participants": 5, "participants": []}
        }"#;
        let activities: Activities = serde_json::from_str(json).unwrap();

        let names: Vec<&str> = activities.names().collect();
        assert_eq!(names, vec!["Programming Class", "Chess Club", "Art Studio"]);
        assert_eq!(activities.get("Chess Club").unwrap().participants, vec!["michael@mergington.edu"]);
    }

    #[test]
    fn test_spots_left_not_clamped() {
        let activity = Activity {
            description: String::new(),
            schedule: String::new(),
            max_participants: 1,
            participants: vec!["a@x.com".into(), "b@x.com".into()],
        };
        assert_eq!(activity.spots_left(), -1);
        assert!(!activity.is_full());
    }

    #[test]
    fn test_full_when_no_spots_left() {
        let activity = Activity {
            description: String::new(),
            schedule: String::new(),
            max_participants: 1,
            participants: vec!["a@x.com".into()],
        };
        assert!(activity.is_full());
    }

    #[test]
    fn test_reply_body_accepts_either_field() {
        let ok: ReplyBody = serde_json::from_str(r#"{"message": "ok"}"#).unwrap();
        assert_eq!(ok.message.as_deref(), Some("ok"));
        assert_eq!(ok.detail, None);

        let err: ReplyBody = serde_json::from_str(r#"{"detail": "Already signed up"}"#).unwrap();
        assert_eq!(err.detail.as_deref(), Some("Already signed up"));
    }

    #[test]
    fn test_reply_body_ignores_structured_detail() {
        let body: ReplyBody = serde_json::from_str(
            r#"{"detail": [{"loc": ["query", "email"], "msg": "field required", "type": "value_error.missing"}]}"#,
        )
        .unwrap();
        assert_eq!(body.detail, None);
    }

    #[test]
    fn test_message_state_class() {
        let mut state = MessageState::default();
        assert_eq!(state.class(), "hidden");

        state = MessageState::shown(UiMessage { text: "ok".into(), kind: MessageKind::Success });
        assert_eq!(state.class(), "success");

        state.visible = false;
        assert_eq!(state.class(), "hidden");
    }

    #[test]
    fn test_reply_success_range() {
        let reply = |status| MutationReply { status, body: ReplyBody::default() };
        assert!(reply(200).is_success());
        assert!(reply(204).is_success());
        assert!(!reply(400).is_success());
        assert!(!reply(500).is_success());
    }
}
