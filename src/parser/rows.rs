use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::catalog::Entry;

// Cells after the first: Description | Auth (`code` or plain) | HTTPS | CORS |
const TAIL: &str = r"\s*(?P<description>[^|]+?)\s*\|\s*(?:`(?P<auth_code>[^`]+?)`|(?P<auth>[^|]+?))\s*\|\s*(?P<https>[^|]+?)\s*\|\s*(?P<cors>[^|]+?)\s*\|";

static LINK_ROW_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"^\|\s*\[(?P<name>[^\]]+)\]\((?P<link>[^)]+)\)\s*\|{TAIL}")).unwrap()
});
static PLAIN_ROW_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(&format!(r"^\|\s*(?P<name>[^|\[]+?)\s*\|{TAIL}")).unwrap());

pub const CORS_UNKNOWN: &str = "unknown";

/// Link-form first, plain-name form as fallback.
pub fn match_row(line: &str) -> Option<Entry> {
    LINK_ROW_RE
        .captures(line)
        .or_else(|| PLAIN_ROW_RE.captures(line))
        .and_then(|caps| build_entry(&caps))
}

fn build_entry(caps: &Captures) -> Option<Entry> {
    let cell = |key: &str| caps.name(key).map(|m| m.as_str().trim()).unwrap_or("");

    let name = cell("name");
    if name.is_empty() {
        return None;
    }
    let auth = match caps.name("auth_code") {
        Some(m) => m.as_str().trim(),
        None => cell("auth"),
    };

    Some(Entry {
        name: name.to_string(),
        description: cell("description").to_string(),
        auth: auth.to_string(),
        https: normalize_https(cell("https")),
        cors: normalize_cors(cell("cors")),
        link: cell("link").to_string(),
    })
}

pub fn normalize_https(raw: &str) -> bool {
    raw.trim().eq_ignore_ascii_case("yes")
}

/// `unknown` (any case), `-` and blank collapse to [`CORS_UNKNOWN`]; anything else is kept.
pub fn normalize_cors(raw: &str) -> String {
    let value = raw.trim();
    if value.is_empty() || value == "-" || value.eq_ignore_ascii_case(CORS_UNKNOWN) {
        CORS_UNKNOWN.to_string()
    } else {
        value.to_string()
    }
}
