//! MCP server implementation.

use super::protocol::*;
use super::tools::get_tools;
use crate::config::Settings;
use crate::tools::YoutubeTools;
use crate::transcript::{TranscriptSource, YoutubeTranscriptClient};
use serde_json::{json, Value};
use std::io::{self, BufRead, Write};

const PROTOCOL_VERSION: &str = "2024-11-05";
const SERVER_NAME: &str = "tekst";
const SERVER_VERSION: &str = env!("CARGO_PKG_VERSION");

/// MCP Server for Tekst.
pub struct McpServer<S: TranscriptSource> {
    tools: YoutubeTools<S>,
}

impl McpServer<YoutubeTranscriptClient> {
    /// Create a server backed by the real YouTube transcript client.
    pub fn new(settings: &Settings) -> crate::error::Result<Self> {
        let client = YoutubeTranscriptClient::from_settings(settings)?;
        Ok(Self::with_source(client))
    }
}

impl<S: TranscriptSource> McpServer<S> {
    /// Create a server over an arbitrary transcript source.
    pub fn with_source(source: S) -> Self {
        Self {
            tools: YoutubeTools::new(source),
        }
    }

    /// Run the MCP server (reads from stdin, writes to stdout).
    pub async fn run(&self) -> anyhow::Result<()> {
        let stdin = io::stdin();
        let mut stdout = io::stdout();

        // Log to stderr so it doesn't interfere with JSON-RPC
        eprintln!("Tekst MCP server starting...");

        for line in stdin.lock().lines() {
            let line = line?;
            if line.is_empty() {
                continue;
            }

            let request: JsonRpcRequest = match serde_json::from_str(&line) {
                Ok(req) => req,
                Err(e) => {
                    eprintln!("Failed to parse request: {}", e);
                    let response = JsonRpcResponse::error(None, -32700, "Parse error");
                    writeln!(stdout, "{}", serde_json::to_string(&response)?)?;
                    stdout.flush()?;
                    continue;
                }
            };

            let response = self.handle_request(request).await;
            writeln!(stdout, "{}", serde_json::to_string(&response)?)?;
            stdout.flush()?;
        }

        Ok(())
    }

    /// Handle a single JSON-RPC request.
    pub async fn handle_request(&self, request: JsonRpcRequest) -> JsonRpcResponse {
        match request.method.as_str() {
            "initialize" => self.handle_initialize(request.id),
            "initialized" => {
                // Notification, no response needed but we'll send empty success
                JsonRpcResponse::success(request.id, json!({}))
            }
            "tools/list" => self.handle_tools_list(request.id),
            "tools/call" => self.handle_tools_call(request.id, request.params).await,
            _ => JsonRpcResponse::error(
                request.id,
                -32601,
                &format!("Method not found: {}", request.method),
            ),
        }
    }

    /// Handle initialize request.
    fn handle_initialize(&self, id: Option<Value>) -> JsonRpcResponse {
        let result = InitializeResult {
            protocol_version: PROTOCOL_VERSION.to_string(),
            capabilities: ServerCapabilities {
                tools: ToolsCapability { list_changed: false },
            },
            server_info: ServerInfo {
                name: SERVER_NAME.to_string(),
                version: SERVER_VERSION.to_string(),
            },
        };

        JsonRpcResponse::success(id, serde_json::to_value(result).unwrap())
    }

    /// Handle tools/list request.
    fn handle_tools_list(&self, id: Option<Value>) -> JsonRpcResponse {
        let result = ToolsListResult { tools: get_tools() };
        JsonRpcResponse::success(id, serde_json::to_value(result).unwrap())
    }

    /// Handle tools/call request.
    ///
    /// Tool outcomes, including lookup failures, are always returned as a
    /// successful text result; only malformed requests produce protocol
    /// errors or error-flagged results.
    async fn handle_tools_call(&self, id: Option<Value>, params: Option<Value>) -> JsonRpcResponse {
        let params: ToolCallParams = match params {
            Some(p) => match serde_json::from_value(p) {
                Ok(params) => params,
                Err(e) => {
                    return JsonRpcResponse::error(id, -32602, &format!("Invalid params: {}", e))
                }
            },
            None => return JsonRpcResponse::error(id, -32602, "Missing params"),
        };

        let result = match params.name.as_str() {
            "get_youtube_video_id" => self.tool_get_video_id(params.arguments),
            "get_youtube_transcript" => self.tool_get_transcript(params.arguments).await,
            _ => ToolCallResult::error(format!("Unknown tool: {}", params.name)),
        };

        JsonRpcResponse::success(id, serde_json::to_value(result).unwrap())
    }

    /// Video ID extraction tool.
    fn tool_get_video_id(&self, args: Option<Value>) -> ToolCallResult {
        let args = match args {
            Some(a) => a,
            None => return ToolCallResult::error("Missing arguments".to_string()),
        };

        let url = match args.get("youtube_url").and_then(|v| v.as_str()) {
            Some(u) => u,
            None => return ToolCallResult::error("Missing 'youtube_url' argument".to_string()),
        };

        ToolCallResult::text(self.tools.get_video_id(url))
    }

    /// Transcript fetching tool.
    async fn tool_get_transcript(&self, args: Option<Value>) -> ToolCallResult {
        let args = match args {
            Some(a) => a,
            None => return ToolCallResult::error("Missing arguments".to_string()),
        };

        let video_id = match args.get("video_id").and_then(|v| v.as_str()) {
            Some(id) => id,
            None => return ToolCallResult::error("Missing 'video_id' argument".to_string()),
        };

        ToolCallResult::text(self.tools.get_transcript(video_id).await)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transcript::{TranscriptEntry, TranscriptError};
    use async_trait::async_trait;

    struct StubSource;

    #[async_trait]
    impl TranscriptSource for StubSource {
        async fn fetch(&self, video_id: &str) -> Result<Vec<TranscriptEntry>, TranscriptError> {
            match video_id {
                "dQw4w9WgXcQ" => Ok(vec![
                    TranscriptEntry {
                        text: "Hello".to_string(),
                        start: 0.0,
                        duration: 1.0,
                    },
                    TranscriptEntry {
                        text: "world".to_string(),
                        start: 1.0,
                        duration: 1.0,
                    },
                ]),
                _ => Err(TranscriptError::NotFound),
            }
        }
    }

    fn request(method: &str, params: Option<Value>) -> JsonRpcRequest {
        JsonRpcRequest {
            jsonrpc: "2.0".to_string(),
            id: Some(json!(1)),
            method: method.to_string(),
            params,
        }
    }

    fn result_text(response: &JsonRpcResponse) -> String {
        response.result.as_ref().unwrap()["content"][0]["text"]
            .as_str()
            .unwrap()
            .to_string()
    }

    #[tokio::test]
    async fn test_tools_list() {
        let server = McpServer::with_source(StubSource);
        let response = server.handle_request(request("tools/list", None)).await;

        let result = response.result.unwrap();
        let tools = result["tools"].as_array().unwrap();
        assert_eq!(tools.len(), 2);
        assert_eq!(tools[0]["name"], "get_youtube_video_id");
    }

    #[tokio::test]
    async fn test_unknown_method() {
        let server = McpServer::with_source(StubSource);
        let response = server.handle_request(request("resources/list", None)).await;

        assert_eq!(response.error.unwrap().code, -32601);
    }

    #[tokio::test]
    async fn test_call_get_video_id() {
        let server = McpServer::with_source(StubSource);
        let params = json!({
            "name": "get_youtube_video_id",
            "arguments": { "youtube_url": "https://youtu.be/dQw4w9WgXcQ" }
        });

        let response = server.handle_request(request("tools/call", Some(params))).await;
        assert!(response.error.is_none());
        assert_eq!(result_text(&response), "dQw4w9WgXcQ");
    }

    #[tokio::test]
    async fn test_call_get_transcript() {
        let server = McpServer::with_source(StubSource);
        let params = json!({
            "name": "get_youtube_transcript",
            "arguments": { "video_id": "dQw4w9WgXcQ" }
        });

        let response = server.handle_request(request("tools/call", Some(params))).await;
        assert_eq!(result_text(&response), "Hello world");
    }

    #[tokio::test]
    async fn test_lookup_failure_is_not_a_protocol_error() {
        let server = McpServer::with_source(StubSource);
        let params = json!({
            "name": "get_youtube_transcript",
            "arguments": { "video_id": "abc123XYZ_-" }
        });

        let response = server.handle_request(request("tools/call", Some(params))).await;
        assert!(response.error.is_none());

        let result = response.result.unwrap();
        assert!(result.get("isError").is_none());
        assert_eq!(
            result["content"][0]["text"],
            "No transcript found for video ID: abc123XYZ_-. It might not have captions."
        );
    }

    #[tokio::test]
    async fn test_unknown_tool() {
        let server = McpServer::with_source(StubSource);
        let params = json!({ "name": "transcribe", "arguments": {} });

        let response = server.handle_request(request("tools/call", Some(params))).await;
        let result = response.result.unwrap();
        assert_eq!(result["isError"], true);
    }
}
