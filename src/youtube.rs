//! Video ID extraction from YouTube URLs.

use regex::Regex;

/// Returned by the extraction tool when no video ID is present in the input.
pub const NO_VIDEO_ID_MESSAGE: &str =
    "Could not extract video ID. Please provide a valid YouTube URL.";

/// Extracts 11-character video IDs from YouTube URLs.
pub struct IdExtractor {
    pattern: Regex,
}

impl IdExtractor {
    pub fn new() -> Self {
        // Covers standard watch URLs, shortened youtu.be links, embed/v paths,
        // the nocookie domain, and watch URLs where v= is not the first
        // query parameter. Unanchored: the first conforming substring wins.
        let pattern = Regex::new(
            r"(?:https?://)?(?:www\.)?(?:youtube\.com|youtu\.be|youtube-nocookie\.com)(?:/(?:embed/|v/|watch\?v=|watch\?.+&v=)|/)?([a-zA-Z0-9_-]{11})",
        )
        .expect("Invalid regex");

        Self { pattern }
    }

    /// Extract the video ID from a URL, or `None` if no conforming substring
    /// is found anywhere in the input.
    pub fn extract(&self, input: &str) -> Option<String> {
        self.pattern
            .captures(input)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().to_string())
    }
}

impl Default for IdExtractor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_watch_url() {
        let extractor = IdExtractor::new();

        assert_eq!(
            extractor.extract("https://www.youtube.com/watch?v=dQw4w9WgXcQ"),
            Some("dQw4w9WgXcQ".to_string())
        );
        assert_eq!(
            extractor.extract("http://youtube.com/watch?v=dQw4w9WgXcQ"),
            Some("dQw4w9WgXcQ".to_string())
        );
        assert_eq!(
            extractor.extract("www.youtube.com/watch?v=dQw4w9WgXcQ"),
            Some("dQw4w9WgXcQ".to_string())
        );
    }

    #[test]
    fn test_extract_short_and_embed_urls() {
        let extractor = IdExtractor::new();

        assert_eq!(
            extractor.extract("https://youtu.be/dQw4w9WgXcQ"),
            Some("dQw4w9WgXcQ".to_string())
        );
        assert_eq!(
            extractor.extract("https://www.youtube.com/embed/dQw4w9WgXcQ"),
            Some("dQw4w9WgXcQ".to_string())
        );
        assert_eq!(
            extractor.extract("https://www.youtube-nocookie.com/v/dQw4w9WgXcQ"),
            Some("dQw4w9WgXcQ".to_string())
        );
    }

    #[test]
    fn test_extract_v_after_other_params() {
        let extractor = IdExtractor::new();

        assert_eq!(
            extractor.extract("https://www.youtube.com/watch?feature=share&v=dQw4w9WgXcQ"),
            Some("dQw4w9WgXcQ".to_string())
        );
    }

    #[test]
    fn test_extract_embedded_in_text() {
        let extractor = IdExtractor::new();

        // Search semantics: the URL may appear anywhere in the input.
        assert_eq!(
            extractor.extract("check this out: https://youtu.be/dQw4w9WgXcQ thanks"),
            Some("dQw4w9WgXcQ".to_string())
        );
        assert_eq!(
            extractor.extract("  https://www.youtube.com/watch?v=dQw4w9WgXcQ&t=42s  "),
            Some("dQw4w9WgXcQ".to_string())
        );
    }

    #[test]
    fn test_extract_preserves_case() {
        let extractor = IdExtractor::new();

        assert_eq!(
            extractor.extract("https://youtu.be/AbC123xyZ_-"),
            Some("AbC123xyZ_-".to_string())
        );
    }

    #[test]
    fn test_extract_no_match() {
        let extractor = IdExtractor::new();

        assert_eq!(extractor.extract("not a url"), None);
        assert_eq!(extractor.extract(""), None);
        assert_eq!(extractor.extract("https://vimeo.com/123456789"), None);
    }
}
