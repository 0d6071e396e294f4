//! Endpoint Paths

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Characters left alone by JavaScript's `encodeURIComponent`
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

fn encode(component: &str) -> String {
    utf8_percent_encode(component, URI_COMPONENT).to_string()
}

pub fn activities_path(base: &str) -> String {
    format!("{}/activities", base.trim_end_matches('/'))
}

fn mutation_path(base: &str, activity: &str, action: &str, email: &str) -> String {
    format!(
        "{}/{}/{}?email={}",
        activities_path(base),
        encode(activity),
        action,
        encode(email)
    )
}

pub fn signup_path(base: &str, activity: &str, email: &str) -> String {
    mutation_path(base, activity, "signup", email)
}

pub fn unregister_path(base: &str, activity: &str, email: &str) -> String {
    mutation_path(base, activity, "unregister", email)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_activities_path() {
        assert_eq!(activities_path(""), "/activities");
        assert_eq!(activities_path("http://localhost:8000/"), "http://localhost:8000/activities");
    }

    #[test]
    fn test_signup_path_encodes_components() {
        assert_eq!(
            signup_path("", "Chess Club", "alice+1@example.com"),
            "/activities/Chess%20Club/signup?email=alice%2B1%40example.com"
        );
    }

    #[test]
    fn test_unregister_path() {
        assert_eq!(
            unregister_path("", "Chess Club", "daniel@mergington.edu"),
            "/activities/Chess%20Club/unregister?email=daniel%40mergington.edu"
        );
    }

    #[test]
    fn test_encoding_matches_uri_component() {
        assert_eq!(encode("a-b_c.d!e~f*g'h(i)"), "a-b_c.d!e~f*g'h(i)");
        assert_eq!(encode("a/b?c&d=e#f"), "a%2Fb%3Fc%26d%3De%23f");
        assert_eq!(encode("café"), "caf%C3%A9");
    }
}
