//! Configuration module for Tekst.

mod settings;

pub use settings::{GeneralSettings, ServerSettings, Settings, TranscriptSettings};
