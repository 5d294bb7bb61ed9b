use std::sync::LazyLock;

use regex::Regex;

use super::rows;
use crate::catalog::Entry;

static HEADING_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^###\s+([^#]+)").unwrap());
static SEPARATOR_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\|[\s:|-]*$").unwrap());

const HEADER_ROW: &str = "API | Description | Auth | HTTPS | CORS";

#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    /// `### Title`, trimmed. May be empty for lines like `###  #`.
    Heading(String),
    Row(Entry),
    TableHeader,
    Separator,
    /// Starts with a pipe but matched neither row shape.
    Malformed,
    Text,
    Empty,
}

pub fn classify_lines(markdown: &str) -> Vec<Block> {
    markdown.lines().map(classify_line).collect()
}

fn classify_line(raw: &str) -> Block {
    let line = raw.trim();

    if line.is_empty() {
        return Block::Empty;
    }

    // ── Heading: ### Title ──
    if let Some(caps) = HEADING_RE.captures(line) {
        return Block::Heading(caps[1].trim().to_string());
    }

    if !line.starts_with('|') {
        return Block::Text;
    }

    // ── Table scaffolding: |:---|:---| and the column titles ──
    if line.starts_with("|:") || SEPARATOR_RE.is_match(line) {
        return Block::Separator;
    }
    if line.contains(HEADER_ROW) {
        return Block::TableHeader;
    }

    match rows::match_row(line) {
        Some(entry) => Block::Row(entry),
        None => Block::Malformed,
    }
}
