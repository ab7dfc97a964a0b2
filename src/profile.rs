//! Typed profile schema: verdicts, match specs, rules, and the profile
//! document itself.
//!
//! Profiles deserialize from TOML or JSON into the same structs. Every
//! field except a rule's `tool` is optional, and each optional field has a
//! safe default, so a minimal profile file is just `default = "allow"` or
//! even an empty file.

use serde::{Deserialize, Serialize};

// ── Verdict ──────────────────────────────────────────────────────────────

/// The tri-state outcome of a permission decision.
///
/// `Passthrough` means "this layer declines to decide": the host falls
/// through to whatever it would have done without the hook, usually an
/// interactive prompt. It is also the universal safe default. Every
/// failure mode in this crate terminates in `Passthrough`, never in
/// `Allow` or `Deny`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Allow,
    Deny,
    #[default]
    Passthrough,
}

impl Verdict {
    pub fn as_str(self) -> &'static str {
        match self {
            Verdict::Allow => "allow",
            Verdict::Deny => "deny",
            Verdict::Passthrough => "passthrough",
        }
    }
}

// ── Rules ────────────────────────────────────────────────────────────────

/// Per-field glob pattern lists for a rule.
///
/// `None` places no constraint on the field. An explicit empty list is
/// vacuously true, so `command = []` and `command = ["*"]` both mean "any
/// invocation of this tool"; the spelled-out form reads better in profile
/// files.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MatchSpec {
    /// Patterns tested against `input.command` for execution-style tools.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub command: Option<Vec<String>>,
    /// Patterns tested against `input.file_path` for file-oriented tools.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<Vec<String>>,
}

impl MatchSpec {
    /// True when neither field is constrained.
    pub fn is_unconditional(&self) -> bool {
        self.command.is_none() && self.path.is_none()
    }
}

/// One entry in a profile's ordered rule list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Rule {
    /// Tool name this rule applies to, compared for exact equality
    /// (e.g. "Bash", "Write").
    pub tool: String,
    /// Verdict returned when this rule matches. Absent means passthrough.
    #[serde(default)]
    pub action: Verdict,
    /// Optional matcher; a rule without one matches any request for its
    /// tool.
    #[serde(
        default,
        rename = "match",
        skip_serializing_if = "MatchSpec::is_unconditional"
    )]
    pub matcher: MatchSpec,
}

// ── Profile ──────────────────────────────────────────────────────────────

/// A named permission profile: ordered rules plus a default verdict.
///
/// Rule order is semantically significant. The first matching rule wins,
/// which is what lets a narrow deny sit in front of a broad allow.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    /// Advisory display name. Profiles are addressed by file name; this
    /// field is not required to agree with it.
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub rules: Vec<Rule>,
    /// Verdict applied when no rule matches. Absent means passthrough.
    #[serde(default)]
    pub default: Verdict,
}

impl Profile {
    /// The built-in fallback: no rules, passthrough default.
    ///
    /// Every profile-loading failure resolves to this value, so a broken
    /// or missing profile behaves like ordinary interactive prompting.
    pub fn empty() -> Self {
        Self {
            name: String::new(),
            description: None,
            rules: Vec::new(),
            default: Verdict::Passthrough,
        }
    }
}
