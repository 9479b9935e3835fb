//! Tool definitions published to the model.

use super::names;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

/// A tool the model may call.
///
/// Each tool has a name, a description the model reads to decide when to
/// call it, and a JSON Schema for its arguments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolDefinition {
    /// Unique tool name
    pub name: String,

    /// Human-readable description of what the tool does
    pub description: String,

    /// JSON Schema defining the tool's input parameters
    #[serde(rename = "inputSchema")]
    pub input_schema: Value,
}

impl ToolDefinition {
    /// Create a new tool definition.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        input_schema: Value,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            input_schema,
        }
    }
}

fn title_property(description: &str) -> Value {
    json!({ "type": "string", "description": description })
}

fn no_arguments() -> Value {
    json!({ "type": "object", "properties": {}, "required": [] })
}

/// Returns the definitions of every note tool.
pub fn definitions() -> Vec<ToolDefinition> {
    vec![
        ToolDefinition::new(
            names::SAVE_NOTE,
            "Save a note to persistent storage. If a note with the same title already \
             exists, its content is replaced with the new content; otherwise a new note is \
             created. Use when asked to \"save that as a note titled ...\" or \"add this to \
             my notes\". Call list_note_titles first to avoid overwriting a note by accident.",
            json!({
                "type": "object",
                "properties": {
                    "title": title_property(
                        "Title of the note, without Markdown formatting."
                    ),
                    "content": {
                        "type": "string",
                        "description": "Full content of the note. Markdown is allowed; may be empty."
                    }
                },
                "required": ["title", "content"]
            }),
        ),
        ToolDefinition::new(
            names::GET_NOTE,
            "Get a note by its title. Returns a JSON object with the note's title and \
             content. Use when asked \"what is in my note called ...\".",
            json!({
                "type": "object",
                "properties": {
                    "title": title_property("Title of the note to read.")
                },
                "required": ["title"]
            }),
        ),
        ToolDefinition::new(
            names::LIST_NOTE_TITLES,
            "List the titles of all saved notes as a JSON array. Use when asked \"what \
             notes do I have?\" or before saving, to pick a title that is not taken.",
            no_arguments(),
        ),
        ToolDefinition::new(
            names::LIST_NOTES,
            "List all saved notes with their titles and contents as a JSON array. Use \
             when asked to show or summarize all notes.",
            no_arguments(),
        ),
        ToolDefinition::new(
            names::DELETE_NOTE,
            "Delete a note by its title. Fails if no note has that title.",
            json!({
                "type": "object",
                "properties": {
                    "title": title_property("Title of the note to delete.")
                },
                "required": ["title"]
            }),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn find(name: &str) -> ToolDefinition {
        definitions()
            .into_iter()
            .find(|d| d.name == name)
            .unwrap_or_else(|| panic!("missing definition for {}", name))
    }

    #[test]
    fn defines_every_tool_once() {
        let defined: Vec<_> = definitions().into_iter().map(|d| d.name).collect();
        assert_eq!(defined, names::ALL.to_vec());
    }

    #[test]
    fn every_schema_is_an_object() {
        for def in definitions() {
            assert_eq!(def.input_schema["type"], "object", "{}", def.name);
            assert!(def.input_schema["properties"].is_object(), "{}", def.name);
            assert!(def.input_schema["required"].is_array(), "{}", def.name);
            assert!(!def.description.is_empty(), "{}", def.name);
        }
    }

    #[test]
    fn save_requires_title_and_content() {
        let def = find(names::SAVE_NOTE);
        assert_eq!(def.input_schema["required"], json!(["title", "content"]));
    }

    #[test]
    fn listing_tools_take_no_arguments() {
        for name in [names::LIST_NOTE_TITLES, names::LIST_NOTES] {
            let def = find(name);
            assert_eq!(def.input_schema["required"], json!([]));
        }
    }

    #[test]
    fn serializes_schema_as_input_schema() {
        let json = serde_json::to_value(find(names::GET_NOTE)).unwrap();
        assert_eq!(json["name"], "get_note");
        assert!(json.get("inputSchema").is_some());
        assert!(json.get("input_schema").is_none());
    }
}
