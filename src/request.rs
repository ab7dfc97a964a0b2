//! Wire-side request types and the tool-class to match-field mapping.

use serde::Deserialize;

// ── Tool classes ─────────────────────────────────────────────────────────

/// Execution-style tools, matched on `input.command`.
const COMMAND_TOOLS: &[&str] = &["Bash"];

/// File-read and file-mutation tools, matched on `input.file_path`.
const PATH_TOOLS: &[&str] = &["Read", "Write", "Edit", "MultiEdit", "NotebookEdit"];

/// Which request field a rule's patterns are tested against.
///
/// Tools outside both classes map to no field at all; rules naming such a
/// tool match on tool equality alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchField {
    Command,
    Path,
}

impl MatchField {
    pub fn for_tool(tool: &str) -> Option<Self> {
        if COMMAND_TOOLS.contains(&tool) {
            Some(MatchField::Command)
        } else if PATH_TOOLS.contains(&tool) {
            Some(MatchField::Path)
        } else {
            None
        }
    }
}

// ── Request ──────────────────────────────────────────────────────────────

/// One incoming tool-use request.
///
/// Field names follow the documented contract (`tool` / `input`); the
/// host's native hook spellings (`tool_name` / `tool_input`) are accepted
/// as aliases. Payload fields this hook does not consume (`session_id`,
/// `cwd`, and friends) are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct ToolRequest {
    #[serde(alias = "tool_name")]
    pub tool: String,
    #[serde(default, alias = "tool_input")]
    pub input: ToolInput,
}

/// The recognized request input fields.
///
/// A non-string value in either slot fails deserialization, which the
/// invocation boundary turns into passthrough rather than matching against
/// some coerced stand-in.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ToolInput {
    pub command: Option<String>,
    pub file_path: Option<String>,
}

impl ToolRequest {
    /// Parse one request from the raw stdin payload.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    /// The value a field's patterns are tested against. An absent field
    /// reads as the empty string, so only a vacuous pattern list (or a
    /// pattern like `*`) can match it.
    pub fn match_value(&self, field: MatchField) -> &str {
        let value = match field {
            MatchField::Command => self.input.command.as_deref(),
            MatchField::Path => self.input.file_path.as_deref(),
        };
        value.unwrap_or("")
    }
}
