//! Append-only comment transcript.
//!
//! Storage keeps the transcript as one newline-delimited text blob, each line
//! shaped `[YYYY-MM-DD HH:MM:SS] text`. At the API boundary the log is a
//! sequence of [`CommentEntry`] values. Lines that do not carry a bracketed
//! timestamp are kept verbatim as [`CommentEntry::Raw`].

use chrono::{DateTime, NaiveDateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A single timestamped comment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Comment {
    pub timestamp: DateTime<Utc>,
    pub text: String,
}

/// One line of a comment log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum CommentEntry {
    Parsed(Comment),
    /// A line without the expected timestamp prefix.
    Raw(String),
}

impl CommentEntry {
    fn render(&self) -> String {
        match self {
            Self::Parsed(comment) => format_line(comment.timestamp, &comment.text),
            Self::Raw(line) => line.clone(),
        }
    }

    /// Text of the entry regardless of whether it parsed.
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Self::Parsed(comment) => &comment.text,
            Self::Raw(line) => line,
        }
    }

    #[must_use]
    pub const fn timestamp(&self) -> Option<DateTime<Utc>> {
        match self {
            Self::Parsed(comment) => Some(comment.timestamp),
            Self::Raw(_) => None,
        }
    }
}

/// A ticket's comment transcript.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "Vec<CommentEntry>", from = "Vec<CommentEntry>")]
pub struct CommentLog(String);

impl CommentLog {
    /// Wrap a stored transcript without validating it.
    #[must_use]
    pub fn from_raw(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// The stored text blob.
    #[must_use]
    pub fn as_raw(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Append a comment stamped at `at`. The first comment has no leading
    /// separator.
    ///
    /// Newlines in `text` are stored as-is, so a multi-line comment reads
    /// back as one [`CommentEntry::Parsed`] followed by a
    /// [`CommentEntry::Raw`] per continuation line.
    pub fn append(&mut self, at: DateTime<Utc>, text: &str) {
        let line = format_line(at, text);
        if !self.0.is_empty() {
            self.0.push('\n');
        }
        self.0.push_str(&line);
    }

    /// Parse the transcript into ordered entries.
    #[must_use]
    pub fn entries(&self) -> Vec<CommentEntry> {
        if self.0.is_empty() {
            return Vec::new();
        }
        self.0.split('\n').map(parse_line).collect()
    }
}

impl From<CommentLog> for Vec<CommentEntry> {
    fn from(log: CommentLog) -> Self {
        log.entries()
    }
}

impl From<Vec<CommentEntry>> for CommentLog {
    fn from(entries: Vec<CommentEntry>) -> Self {
        Self(
            entries
                .iter()
                .map(CommentEntry::render)
                .collect::<Vec<_>>()
                .join("\n"),
        )
    }
}

fn format_line(at: DateTime<Utc>, text: &str) -> String {
    format!("[{}] {text}", at.format(TIMESTAMP_FORMAT))
}

fn parse_line(line: &str) -> CommentEntry {
    let parsed = line
        .strip_prefix('[')
        .and_then(|rest| rest.split_once("] "))
        .and_then(|(stamp, text)| {
            NaiveDateTime::parse_from_str(stamp, TIMESTAMP_FORMAT)
                .ok()
                .map(|naive| Comment {
                    timestamp: naive.and_utc(),
                    text: text.to_string(),
                })
        });

    parsed.map_or_else(|| CommentEntry::Raw(line.to_string()), CommentEntry::Parsed)
}
