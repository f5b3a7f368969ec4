//! MCP tool definitions for Tekst.

use super::protocol::Tool;
use serde_json::json;

/// Get all available tools.
pub fn get_tools() -> Vec<Tool> {
    vec![
        Tool {
            name: "get_youtube_video_id".to_string(),
            description: "Extract the 11-character video ID from a YouTube URL. \
                Accepts standard watch URLs, youtu.be short links, and embed URLs. \
                Returns the video ID, or an explanatory message if none is found."
                .to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "youtube_url": {
                        "type": "string",
                        "description": "The full URL of the YouTube video"
                    }
                },
                "required": ["youtube_url"]
            }),
        },
        Tool {
            name: "get_youtube_transcript".to_string(),
            description: "Fetch the full caption transcript of a YouTube video by its ID. \
                Returns the transcript as a single string, or an explanatory message if \
                the video has no captions or captions are disabled."
                .to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "video_id": {
                        "type": "string",
                        "description": "The 11-character YouTube video ID"
                    }
                },
                "required": ["video_id"]
            }),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_both_tools_listed() {
        let tools = get_tools();
        let names: Vec<_> = tools.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["get_youtube_video_id", "get_youtube_transcript"]);
    }

    #[test]
    fn test_schemas_require_single_text_param() {
        for (tool, param) in get_tools().iter().zip(["youtube_url", "video_id"]) {
            assert_eq!(tool.input_schema["required"][0], param);
            assert_eq!(tool.input_schema["properties"][param]["type"], "string");
        }
    }
}
