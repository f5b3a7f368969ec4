//! Id command implementation.

use crate::youtube::{IdExtractor, NO_VIDEO_ID_MESSAGE};
use anyhow::Result;

/// Extract and print the video ID from a URL.
pub fn run_id(url: &str) -> Result<()> {
    let extractor = IdExtractor::new();
    match extractor.extract(url) {
        Some(id) => println!("{}", id),
        None => println!("{}", NO_VIDEO_ID_MESSAGE),
    }
    Ok(())
}
