//! Roster Utilities
//!
//! Helpers for displaying an activity's participants.

use feruca::Collator;

/// Separators between name segments of an email local-part
const SEGMENT_SEPARATORS: &[char] = &['.', '-', '_'];

/// Avatar initials from the local-part of an email
///
/// `jane.doe@x.com` -> `JD`, `bob@x.com` -> `B`, `@x.com` -> empty.
pub fn initials(email: &str) -> String {
    let local = email.split('@').next().unwrap_or("");
    let mut segments = local.split(SEGMENT_SEPARATORS).filter(|s| !s.is_empty());

    let raw: String = match segments.next() {
        Some(first) => first
            .chars()
            .take(1)
            .chain(segments.next().into_iter().flat_map(|second| second.chars().take(1)))
            .collect(),
        None => local.chars().take(1).collect(),
    };

    raw.to_uppercase().chars().take(2).collect()
}

/// Participants in locale-aware, case-insensitive order
///
/// Uses the Unicode Collation Algorithm with the CLDR root order, so accented
/// letters sort with their base letter (`Émile` before `zoe`). Keys are
/// lowercased first so case never decides the order; the sort is stable.
pub fn sorted_participants(participants: &[String]) -> Vec<&str> {
    let mut keyed: Vec<(String, &str)> = participants
        .iter()
        .map(|p| (p.to_lowercase(), p.as_str()))
        .collect();
    let mut collator = Collator::default();
    keyed.sort_by(|(a, _), (b, _)| collator.collate(a.as_str(), b.as_str()));
    keyed.into_iter().map(|(_, p)| p).collect()
}

/// Label above the participants list
pub fn participants_label(count: usize) -> String {
    format!("Participants ({}):", count)
}
