//! Activity Renderer
//!
//! Projects the activities map into card view-models and renders them as the
//! HTML fragment mounted into the list container. Options for the activity
//! select come from the same map.

use std::fmt::Write;

use crate::escape::escape_html;
use crate::models::Activities;
use crate::roster::{initials, participants_label, sorted_participants};

pub const NO_PARTICIPANTS: &str = "No participants yet";
pub const LOADING: &str = "Loading activities...";
pub const LOAD_FAILED: &str = "Failed to load activities. Please try again later.";
pub const SELECT_PLACEHOLDER: &str = "-- Select an activity --";

/// One participant line: avatar initials + email
#[derive(Debug, Clone, PartialEq)]
pub struct ParticipantRow {
    pub email: String,
    pub initials: String,
}

/// Everything needed to draw one activity card
#[derive(Debug, Clone, PartialEq)]
pub struct ActivityCard {
    pub name: String,
    pub description: String,
    pub schedule: String,
    pub spots_left: i64,
    pub full: bool,
    pub participants_label: String,
    pub participants: Vec<ParticipantRow>,
}

impl ActivityCard {
    pub fn availability_class(&self) -> &'static str {
        if self.full { "availability full" } else { "availability" }
    }

    pub fn availability_text(&self) -> String {
        format!("{} spots left", self.spots_left)
    }
}

/// Option of the activity select
#[derive(Debug, Clone, PartialEq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

/// Cards in server order, participants sorted case-insensitively
pub fn project(activities: &Activities) -> Vec<ActivityCard> {
    activities
        .iter()
        .map(|(name, activity)| ActivityCard {
            name: name.to_string(),
            description: activity.description.clone(),
            schedule: activity.schedule.clone(),
            spots_left: activity.spots_left(),
            full: activity.is_full(),
            participants_label: participants_label(activity.participants.len()),
            participants: sorted_participants(&activity.participants)
                .into_iter()
                .map(|email| ParticipantRow {
                    email: email.to_string(),
                    initials: initials(email),
                })
                .collect(),
        })
        .collect()
}

/// Placeholder option followed by one option per activity
pub fn select_options(activities: &Activities) -> Vec<SelectOption> {
    std::iter::once(SelectOption {
        value: String::new(),
        label: SELECT_PLACEHOLDER.to_string(),
    })
    .chain(activities.names().map(|name| SelectOption {
        value: name.to_string(),
        label: name.to_string(),
    }))
    .collect()
}

/// HTML fragment of every card, untrusted text escaped
///
/// Unregister buttons carry `data-activity`/`data-email` for a single delegated
/// click handler on the list container.
pub fn render_html(activities: &Activities) -> String {
    let mut html = String::new();
    for card in project(activities) {
        let name = escape_html(&card.name);
        let _ = write!(
            html,
            r#"<div class="activity-card"><h4>{}</h4><p>{}</p><p><strong>Schedule:</strong> {}</p><p class="{}"><strong>Availability:</strong> {}</p><div class="participants-section"><strong>{}</strong>"#,
            name,
            escape_html(&card.description),
            escape_html(&card.schedule),
            card.availability_class(),
            card.availability_text(),
            card.participants_label,
        );
        if card.participants.is_empty() {
            let _ = write!(html, r#"<p class="no-participants">{}</p>"#, NO_PARTICIPANTS);
        } else {
            html.push_str(r#"<ul class="participants-list">"#);
            for row in &card.participants {
                let email = escape_html(&row.email);
                let _ = write!(
                    html,
                    r#"<li><span class="avatar">{}</span><span class="participant-email">{}</span><button type="button" class="delete-btn" data-activity="{}" data-email="{}" title="Unregister">×</button></li>"#,
                    escape_html(&row.initials),
                    email,
                    name,
                    email,
                );
            }
            html.push_str("</ul>");
        }
        html.push_str("</div></div>");
    }
    html
}

/// Single-paragraph fragment shown in place of the list (loading, load failure)
pub fn render_notice_html(message: &str) -> String {
    format!("<p>{}</p>", escape_html(message))
}
