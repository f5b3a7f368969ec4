//! CLI module for Tekst.

pub mod commands;
mod output;

pub use output::Output;

use clap::{Parser, Subcommand};

/// Tekst - YouTube Caption Tools
///
/// A small tool server exposing YouTube video ID extraction and transcript
/// fetching to AI assistants. The name "Tekst" comes from the Norwegian word
/// for "text" (as in "undertekst" — subtitles).
#[derive(Parser, Debug)]
#[command(name = "tekst")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Increase verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Extract the video ID from a YouTube URL
    Id {
        /// YouTube URL (watch, youtu.be, or embed form)
        url: String,
    },

    /// Fetch a video's caption transcript as plain text
    Transcript {
        /// YouTube URL or 11-character video ID
        input: String,
    },

    /// Start HTTP server exposing the tools for integration with other systems
    Serve {
        /// Host to bind to (overrides config)
        #[arg(long)]
        host: Option<String>,

        /// Port to bind to (overrides config)
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Start MCP server for AI assistant integration (Claude, etc.)
    Mcp,

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Open configuration file in editor
    Edit,

    /// Show configuration file path
    Path,
}
