//! YouTube transcript client.
//!
//! Fetches caption tracks the same way a browser does: load the watch page,
//! read the player response embedded in it, then download the selected
//! caption track in json3 format.

use super::{TranscriptEntry, TranscriptError, TranscriptSource};
use crate::config::Settings;
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;
use std::time::Duration;

const WATCH_URL: &str = "https://www.youtube.com/watch?v=";
const PLAYER_RESPONSE_MARKER: &str = "ytInitialPlayerResponse = ";
const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
    AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0.0.0 Safari/537.36";

/// One caption track advertised by the player response.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaptionTrack {
    pub base_url: String,
    #[serde(default)]
    pub language_code: String,
}

/// Transcript source backed by youtube.com.
pub struct YoutubeTranscriptClient {
    http: reqwest::Client,
    languages: Vec<String>,
}

impl YoutubeTranscriptClient {
    /// Build a client from settings (language preference, request timeout).
    pub fn from_settings(settings: &Settings) -> crate::error::Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(settings.transcript.timeout_seconds))
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self {
            http,
            languages: settings.transcript.languages.clone(),
        })
    }

    async fn fetch_watch_page(&self, video_id: &str) -> Result<String, TranscriptError> {
        let url = format!("{}{}", WATCH_URL, video_id);
        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| TranscriptError::Other(e.to_string()))?;

        response
            .error_for_status()
            .map_err(|e| TranscriptError::Other(e.to_string()))?
            .text()
            .await
            .map_err(|e| TranscriptError::Other(e.to_string()))
    }

    async fn fetch_track(&self, track: &CaptionTrack) -> Result<Vec<TranscriptEntry>, TranscriptError> {
        let url = format!("{}&fmt=json3", track.base_url);
        let body: Value = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| TranscriptError::Other(e.to_string()))?
            .json()
            .await
            .map_err(|e| TranscriptError::Other(e.to_string()))?;

        Ok(parse_events(&body))
    }
}

#[async_trait]
impl TranscriptSource for YoutubeTranscriptClient {
    async fn fetch(&self, video_id: &str) -> Result<Vec<TranscriptEntry>, TranscriptError> {
        let html = self.fetch_watch_page(video_id).await?;
        let player_response = extract_player_response(&html)?;
        let tracks = caption_tracks(&player_response)?;
        let track = select_track(&tracks, &self.languages).ok_or(TranscriptError::NotFound)?;

        tracing::debug!(video_id, language = %track.language_code, "fetching caption track");

        let entries = self.fetch_track(track).await?;
        if entries.is_empty() {
            return Err(TranscriptError::NotFound);
        }

        Ok(entries)
    }
}

/// Locate and parse the `ytInitialPlayerResponse` blob in a watch page.
fn extract_player_response(html: &str) -> Result<Value, TranscriptError> {
    let start = html
        .find(PLAYER_RESPONSE_MARKER)
        .map(|i| i + PLAYER_RESPONSE_MARKER.len())
        .ok_or_else(|| {
            TranscriptError::Other("could not find player response in watch page".to_string())
        })?;

    // The blob is followed by more script text; parse just the first
    // complete JSON value.
    let mut stream = serde_json::Deserializer::from_str(&html[start..]).into_iter::<Value>();
    match stream.next() {
        Some(Ok(value)) => Ok(value),
        _ => Err(TranscriptError::Other(
            "could not parse player response".to_string(),
        )),
    }
}

/// Pull the caption track list out of a player response.
///
/// A playable video without a captions section has captions disabled; a
/// video that is not playable at all is reported as a generic failure.
fn caption_tracks(player_response: &Value) -> Result<Vec<CaptionTrack>, TranscriptError> {
    let status = player_response["playabilityStatus"]["status"]
        .as_str()
        .unwrap_or("OK");

    if status != "OK" {
        let reason = player_response["playabilityStatus"]["reason"]
            .as_str()
            .unwrap_or("video is unavailable");
        return Err(TranscriptError::Other(format!(
            "video is not playable ({})",
            reason
        )));
    }

    let captions = &player_response["captions"];
    if captions.is_null() {
        return Err(TranscriptError::Disabled);
    }

    let tracks = &captions["playerCaptionsTracklistRenderer"]["captionTracks"];
    match tracks.as_array() {
        Some(arr) if !arr.is_empty() => arr
            .iter()
            .map(|t| {
                serde_json::from_value(t.clone())
                    .map_err(|e| TranscriptError::Other(format!("malformed caption track: {}", e)))
            })
            .collect(),
        _ => Err(TranscriptError::NotFound),
    }
}

/// Pick the first track matching the language preference list, falling back
/// to the first advertised track.
fn select_track<'a>(tracks: &'a [CaptionTrack], languages: &[String]) -> Option<&'a CaptionTrack> {
    for lang in languages {
        if let Some(track) = tracks
            .iter()
            .find(|t| t.language_code == *lang || t.language_code.starts_with(&format!("{}-", lang)))
        {
            return Some(track);
        }
    }
    tracks.first()
}

/// Parse json3 caption events into transcript entries.
fn parse_events(body: &Value) -> Vec<TranscriptEntry> {
    let Some(events) = body["events"].as_array() else {
        return Vec::new();
    };

    let mut entries = Vec::new();
    for event in events {
        let Some(segs) = event["segs"].as_array() else {
            continue;
        };

        let text: String = segs
            .iter()
            .filter_map(|s| s["utf8"].as_str())
            .collect();

        // json3 interleaves newline-only filler events between captions.
        if text.trim().is_empty() {
            continue;
        }

        entries.push(TranscriptEntry {
            text,
            start: event["tStartMs"].as_f64().unwrap_or(0.0) / 1000.0,
            duration: event["dDurMs"].as_f64().unwrap_or(0.0) / 1000.0,
        });
    }

    entries
}
