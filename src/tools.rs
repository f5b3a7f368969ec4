//! The two tool implementations shared by the MCP server, the HTTP facade,
//! and the one-shot CLI commands.
//!
//! Both operations are pure request/response: they take text, return text,
//! and never propagate an error past their boundary. Failures are reported
//! through the content of the returned string so every transport can answer
//! with a well-formed success payload.

use crate::transcript::{join_entries, TranscriptError, TranscriptSource};
use crate::youtube::{IdExtractor, NO_VIDEO_ID_MESSAGE};

/// YouTube tool operations over a transcript source.
pub struct YoutubeTools<S: TranscriptSource> {
    extractor: IdExtractor,
    source: S,
}

impl<S: TranscriptSource> YoutubeTools<S> {
    pub fn new(source: S) -> Self {
        Self {
            extractor: IdExtractor::new(),
            source,
        }
    }

    /// Extract the video ID from a YouTube URL.
    ///
    /// Returns the 11-character ID, or a fixed failure message when the
    /// input contains no recognizable YouTube URL.
    pub fn get_video_id(&self, youtube_url: &str) -> String {
        match self.extractor.extract(youtube_url) {
            Some(id) => id,
            None => NO_VIDEO_ID_MESSAGE.to_string(),
        }
    }

    /// Fetch the full transcript of a video as a single space-joined string.
    ///
    /// Every failure of the transcript source is mapped to a descriptive
    /// message naming the video ID or the underlying error.
    pub async fn get_transcript(&self, video_id: &str) -> String {
        match self.source.fetch(video_id).await {
            Ok(entries) => join_entries(&entries),
            Err(TranscriptError::NotFound) => format!(
                "No transcript found for video ID: {}. It might not have captions.",
                video_id
            ),
            Err(TranscriptError::Disabled) => {
                format!("Transcripts are disabled for video ID: {}.", video_id)
            }
            Err(TranscriptError::Other(details)) => {
                format!("An error occurred while fetching the transcript: {}", details)
            }
        }
    }
}
