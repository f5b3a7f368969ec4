//! Tekst - YouTube Caption Tools
//!
//! A small tool server that lets AI assistants work with YouTube captions.
//!
//! The name "Tekst" comes from the Norwegian word for "text" (as in
//! "undertekst" — subtitles).
//!
//! # Overview
//!
//! Tekst exposes two operations:
//!
//! - Extract the 11-character video ID from a YouTube URL
//! - Fetch a video's caption transcript and flatten it to plain text
//!
//! Both are available as MCP tools (stdio), as HTTP endpoints, and as
//! one-shot CLI commands.
//!
//! # Architecture
//!
//! - `config` - Configuration management
//! - `youtube` - Video ID extraction from URLs
//! - `transcript` - Caption fetching and flattening
//! - `tools` - The two tool implementations shared by all transports
//! - `mcp` - MCP server (JSON-RPC 2.0 over stdio)
//! - `cli` - Command-line interface and HTTP facade
//!
//! # Example
//!
//! ```rust,no_run
//! use tekst::config::Settings;
//! use tekst::tools::YoutubeTools;
//! use tekst::transcript::YoutubeTranscriptClient;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let settings = Settings::load()?;
//!     let tools = YoutubeTools::new(YoutubeTranscriptClient::from_settings(&settings)?);
//!
//!     let id = tools.get_video_id("https://www.youtube.com/watch?v=dQw4w9WgXcQ");
//!     let transcript = tools.get_transcript(&id).await;
//!     println!("{}", transcript);
//!
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod mcp;
pub mod tools;
pub mod transcript;
pub mod youtube;

pub use error::{Result, TekstError};
