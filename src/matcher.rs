//! Anchored shell-glob matching for rule pattern lists.

use glob::Pattern;

/// Test a value against one glob pattern.
///
/// Semantics are classic shell globbing: `*` matches any run of characters
/// including none and including `/`, `?` matches exactly one character, and
/// `[...]` character classes work. Matching is case-sensitive and anchored,
/// so the pattern must cover the whole value: `git *` matches `git status`
/// but neither `mygit status` nor bare `git`.
///
/// Patterns are validated when a profile loads. An unparseable pattern that
/// somehow reaches this point matches nothing.
pub fn glob_match(pattern: &str, value: &str) -> bool {
    Pattern::new(pattern).is_ok_and(|p| p.matches(value))
}

/// Test a value against a pattern list.
///
/// An empty list is vacuously true, which is how `command = []` expresses
/// "any invocation of this tool".
pub fn any_match(patterns: &[String], value: &str) -> bool {
    patterns.is_empty() || patterns.iter().any(|p| glob_match(p, value))
}

/// Check that a pattern compiles, without matching anything.
pub fn check_pattern(pattern: &str) -> Result<(), glob::PatternError> {
    Pattern::new(pattern).map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn star_spans_arbitrary_text() {
        assert!(glob_match("git *", "git status"));
        assert!(glob_match("git *", "git log --oneline"));
        assert!(glob_match("npm *", "npm install left-pad"));
    }

    #[test]
    fn match_is_anchored_at_both_ends() {
        assert!(!glob_match("git *", "mygit status"));
        assert!(!glob_match("git *", "git"));
        assert!(!glob_match("status", "git status"));
    }

    #[test]
    fn star_requires_nothing() {
        assert!(glob_match("git*", "git"));
        assert!(glob_match("*", ""));
        assert!(glob_match("*", "anything at all"));
    }

    #[test]
    fn star_crosses_path_separators() {
        assert!(glob_match("cat *", "cat /etc/passwd"));
        assert!(glob_match("/home/*", "/home/alice/notes.txt"));
    }

    #[test]
    fn question_mark_is_exactly_one() {
        assert!(glob_match("ls -?", "ls -l"));
        assert!(!glob_match("ls -?", "ls -la"));
        assert!(!glob_match("ls -?", "ls -"));
    }

    #[test]
    fn character_classes() {
        assert!(glob_match("git [sd]*", "git status"));
        assert!(glob_match("git [sd]*", "git diff"));
        assert!(!glob_match("git [sd]*", "git push"));
    }

    #[test]
    fn matching_is_case_sensitive() {
        assert!(!glob_match("git *", "Git status"));
        assert!(!glob_match("/home/*", "/HOME/alice"));
    }

    #[test]
    fn literal_pattern_is_exact_equality() {
        assert!(glob_match("git status", "git status"));
        assert!(!glob_match("git status", "git status "));
    }

    #[test]
    fn glob_characters_in_the_value_are_literal() {
        assert!(glob_match("rm -rf /*", "rm -rf /*"));
        assert!(!glob_match("git status", "git *"));
        assert!(glob_match("echo *", "echo [a-z]?"));
    }

    #[test]
    fn empty_list_matches_everything() {
        assert!(any_match(&[], "rm -rf /"));
        assert!(any_match(&[], ""));
    }

    #[test]
    fn list_is_a_disjunction() {
        let patterns = vec!["ls *".to_string(), "find *".to_string()];
        assert!(any_match(&patterns, "ls -la"));
        assert!(any_match(&patterns, "find . -name foo"));
        assert!(!any_match(&patterns, "lsx -la"));
    }

    #[test]
    fn broken_pattern_matches_nothing() {
        assert!(check_pattern("[unclosed").is_err());
        assert!(!glob_match("[unclosed", "[unclosed"));
        assert!(!glob_match("[unclosed", "u"));
    }

    #[test]
    fn check_pattern_accepts_ordinary_globs() {
        for p in ["*", "git *", "ls -?", "[ab]c", "literal"] {
            assert!(check_pattern(p).is_ok(), "pattern {p:?} should compile");
        }
    }
}
