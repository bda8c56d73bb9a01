//! Splitting a spoken full name into title, first and last name.

use serde::Serialize;

const TITLES: [&str; 5] = ["Dr.", "Prof.", "Mr.", "Ms.", "Mrs."];

/// Result of [`parse_name`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ParsedName {
    pub title: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    /// The name with the title removed and whitespace collapsed.
    pub full_name: String,
}

/// Parses a full name.
///
/// A leading title from a fixed list is stripped (case-insensitive, trailing
/// dot optional). The first remaining token is the first name and the rest,
/// joined by single spaces, the last name.
pub fn parse_name(raw: &str) -> ParsedName {
    let mut tokens: Vec<&str> = raw.split_whitespace().collect();

    let title = tokens.first().and_then(|first| match_title(first));
    if title.is_some() {
        tokens.remove(0);
    }

    let first_name = tokens.first().map(|t| t.to_string());
    let last_name = if tokens.len() > 1 {
        Some(tokens[1..].join(" "))
    } else {
        None
    };

    ParsedName {
        title: title.map(str::to_string),
        first_name,
        last_name,
        full_name: tokens.join(" "),
    }
}

fn match_title(token: &str) -> Option<&'static str> {
    let bare = token.strip_suffix('.').unwrap_or(token);
    TITLES
        .iter()
        .copied()
        .find(|title| title.trim_end_matches('.').eq_ignore_ascii_case(bare))
}
