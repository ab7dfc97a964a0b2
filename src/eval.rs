//! The permission decision procedure.

use crate::matcher;
use crate::profile::{Profile, Rule, Verdict};
use crate::request::{MatchField, ToolRequest};

/// The outcome of scanning a profile for one request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Evaluation {
    pub verdict: Verdict,
    /// Index of the deciding rule, or `None` when the default applied.
    pub matched_rule: Option<usize>,
}

/// Decide one request against one profile.
///
/// First match wins: rules are scanned in stored order and the earliest
/// rule whose tool and patterns both accept the request decides
/// immediately. Profile authors rely on this to park narrow denies in
/// front of broad allows. With no matching rule the profile's default
/// applies, so every (profile, request) pair yields exactly one verdict.
pub fn evaluate(profile: &Profile, request: &ToolRequest) -> Evaluation {
    for (idx, rule) in profile.rules.iter().enumerate() {
        if rule_matches(rule, request) {
            return Evaluation {
                verdict: rule.action,
                matched_rule: Some(idx),
            };
        }
    }
    Evaluation {
        verdict: profile.default,
        matched_rule: None,
    }
}

/// Convenience wrapper returning just the verdict.
pub fn verdict_for(profile: &Profile, request: &ToolRequest) -> Verdict {
    evaluate(profile, request).verdict
}

fn rule_matches(rule: &Rule, request: &ToolRequest) -> bool {
    // Exact equality, no case folding and no aliasing.
    if rule.tool != request.tool {
        return false;
    }
    // Tools outside the known classes carry no matchable field; a rule
    // naming one matches every request for that tool.
    let Some(field) = MatchField::for_tool(&request.tool) else {
        return true;
    };
    let patterns = match field {
        MatchField::Command => rule.matcher.command.as_deref(),
        MatchField::Path => rule.matcher.path.as_deref(),
    };
    // Likewise a rule that puts no constraint on the relevant field.
    let Some(patterns) = patterns else {
        return true;
    };
    matcher::any_match(patterns, request.match_value(field))
}
