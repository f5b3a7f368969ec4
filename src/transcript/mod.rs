//! Caption transcript fetching and flattening.
//!
//! Provides a trait-based interface for transcript sources so the tool layer
//! can be tested without network access.

mod youtube;

pub use youtube::YoutubeTranscriptClient;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One caption segment, ordered by appearance in the video.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranscriptEntry {
    /// Displayed caption text.
    pub text: String,
    /// Start offset in seconds.
    #[serde(default)]
    pub start: f64,
    /// Duration in seconds.
    #[serde(default)]
    pub duration: f64,
}

/// Failure modes of a transcript lookup.
#[derive(Error, Debug)]
pub enum TranscriptError {
    /// The video has no caption track.
    #[error("no transcript available")]
    NotFound,

    /// Captions are turned off for the video.
    #[error("transcripts are disabled")]
    Disabled,

    /// Anything else: network failure, unavailable video, parse failure.
    #[error("{0}")]
    Other(String),
}

/// A lookup keyed by video ID returning ordered caption entries.
#[async_trait]
pub trait TranscriptSource: Send + Sync {
    async fn fetch(&self, video_id: &str) -> Result<Vec<TranscriptEntry>, TranscriptError>;
}

/// Flatten entries into one string, joining text fields with single spaces
/// in source order. No trimming or normalization.
pub fn join_entries(entries: &[TranscriptEntry]) -> String {
    entries
        .iter()
        .map(|e| e.text.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(text: &str) -> TranscriptEntry {
        TranscriptEntry {
            text: text.to_string(),
            start: 0.0,
            duration: 0.0,
        }
    }

    #[test]
    fn test_join_entries() {
        let entries = vec![entry("Hello"), entry("world")];
        assert_eq!(join_entries(&entries), "Hello world");
    }

    #[test]
    fn test_join_preserves_order_and_content() {
        let entries = vec![entry("one"), entry("TWO,"), entry("three.")];
        assert_eq!(join_entries(&entries), "one TWO, three.");
    }

    #[test]
    fn test_join_empty() {
        assert_eq!(join_entries(&[]), "");
    }

    #[test]
    fn test_join_single_entry() {
        assert_eq!(join_entries(&[entry("alone")]), "alone");
    }
}
