//! CLI command implementations.

mod config;
mod id;
mod mcp;
mod serve;
mod transcript;

pub use config::run_config;
pub use id::run_id;
pub use mcp::run_mcp;
pub use serve::run_serve;
pub use transcript::run_transcript;
