//! Transcript command implementation.

use crate::config::Settings;
use crate::tools::YoutubeTools;
use crate::transcript::YoutubeTranscriptClient;
use crate::youtube::{IdExtractor, NO_VIDEO_ID_MESSAGE};
use anyhow::Result;

/// Fetch and print a video's transcript. Accepts a URL or a bare video ID.
pub async fn run_transcript(input: &str, settings: Settings) -> Result<()> {
    let trimmed = input.trim();

    let video_id = if is_bare_video_id(trimmed) {
        trimmed.to_string()
    } else {
        match IdExtractor::new().extract(trimmed) {
            Some(id) => id,
            None => {
                println!("{}", NO_VIDEO_ID_MESSAGE);
                return Ok(());
            }
        }
    };

    let tools = YoutubeTools::new(YoutubeTranscriptClient::from_settings(&settings)?);
    println!("{}", tools.get_transcript(&video_id).await);

    Ok(())
}

fn is_bare_video_id(input: &str) -> bool {
    input.len() == 11
        && input
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_bare_video_id() {
        assert!(is_bare_video_id("dQw4w9WgXcQ"));
        assert!(is_bare_video_id("abc123XYZ_-"));
        assert!(!is_bare_video_id("too-short"));
        assert!(!is_bare_video_id("way-too-long-for-an-id"));
        assert!(!is_bare_video_id("has space :("));
    }
}
