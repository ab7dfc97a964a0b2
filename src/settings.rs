//! Run configuration, collected once from the environment.

use std::path::{Path, PathBuf};

/// Environment variable naming the active profile.
pub const PROFILE_VAR: &str = "CC_PERMIT_PROFILE";
/// Environment variable overriding the profile directory.
pub const PROFILE_DIR_VAR: &str = "CC_PERMIT_PROFILE_DIR";
/// Environment variable overriding the audit log path.
pub const LOG_FILE_VAR: &str = "CC_PERMIT_LOG_FILE";
/// Environment variable enabling the audit log.
pub const DEBUG_VAR: &str = "CC_PERMIT_DEBUG";

/// Everything the hook reads from its surroundings, gathered up front.
///
/// The store, evaluator, and audit log all take their locations from here
/// rather than consulting the environment themselves, so tests can point a
/// `Settings` at temporary directories.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Active profile name. Defaults to "default".
    pub profile: String,
    /// Directory holding `{name}.toml` / `{name}.json` profile files.
    /// Empty when `$HOME` is unset and no override is given; the store
    /// treats an empty path as "nothing there".
    pub profiles_dir: PathBuf,
    /// Audit log destination, used only when `debug` is set.
    pub log_file: PathBuf,
    /// Audit logging toggle.
    pub debug: bool,
}

impl Settings {
    /// Read settings from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build settings from an arbitrary key lookup. Tests inject plain
    /// closures here instead of mutating the process environment.
    pub fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Self {
        let home = get("HOME");

        let profile = get(PROFILE_VAR)
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| "default".to_string());

        let profiles_dir = match get(PROFILE_DIR_VAR).filter(|v| !v.is_empty()) {
            Some(dir) => expand(&dir),
            None => home_join(home.as_deref(), ".config/cc-permit/profiles"),
        };

        let log_file = match get(LOG_FILE_VAR).filter(|v| !v.is_empty()) {
            Some(path) => expand(&path),
            None => home_join(home.as_deref(), ".local/share/cc-permit/decisions.log"),
        };

        let debug = get(DEBUG_VAR).as_deref().is_some_and(truthy);

        Self {
            profile,
            profiles_dir,
            log_file,
            debug,
        }
    }
}

/// Expand a leading tilde in an override path.
fn expand(path: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(path).to_string())
}

/// Join under `$HOME`, or yield the empty path when `$HOME` is unset or
/// blank. Resolving defaults against the working directory instead would
/// make the active profile depend on where the host was launched.
fn home_join(home: Option<&str>, rel: &str) -> PathBuf {
    match home {
        Some(h) if !h.is_empty() => Path::new(h).join(rel),
        _ => PathBuf::new(),
    }
}

fn truthy(value: &str) -> bool {
    matches!(
        value.to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn settings_from(pairs: &[(&str, &str)]) -> Settings {
        let env: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Settings::from_lookup(|key| env.get(key).cloned())
    }

    #[test]
    fn defaults_hang_off_home() {
        let s = settings_from(&[("HOME", "/home/alice")]);
        assert_eq!(s.profile, "default");
        assert_eq!(
            s.profiles_dir,
            PathBuf::from("/home/alice/.config/cc-permit/profiles")
        );
        assert_eq!(
            s.log_file,
            PathBuf::from("/home/alice/.local/share/cc-permit/decisions.log")
        );
        assert!(!s.debug);
    }

    #[test]
    fn overrides_win_over_defaults() {
        let s = settings_from(&[
            ("HOME", "/home/alice"),
            (PROFILE_VAR, "readonly"),
            (PROFILE_DIR_VAR, "/opt/profiles"),
            (LOG_FILE_VAR, "/var/log/permit.log"),
            (DEBUG_VAR, "1"),
        ]);
        assert_eq!(s.profile, "readonly");
        assert_eq!(s.profiles_dir, PathBuf::from("/opt/profiles"));
        assert_eq!(s.log_file, PathBuf::from("/var/log/permit.log"));
        assert!(s.debug);
    }

    #[test]
    fn empty_overrides_are_ignored() {
        let s = settings_from(&[("HOME", "/home/alice"), (PROFILE_VAR, ""), (PROFILE_DIR_VAR, "")]);
        assert_eq!(s.profile, "default");
        assert_eq!(
            s.profiles_dir,
            PathBuf::from("/home/alice/.config/cc-permit/profiles")
        );
    }

    #[test]
    fn no_home_yields_empty_paths() {
        let s = settings_from(&[]);
        assert_eq!(s.profile, "default");
        assert!(s.profiles_dir.as_os_str().is_empty());
        assert!(s.log_file.as_os_str().is_empty());
    }

    #[test]
    fn tilde_overrides_expand_against_the_real_home() {
        // shellexpand consults the process environment, not the lookup,
        // so only assert when the test runner has a home.
        let Ok(home) = std::env::var("HOME") else {
            return;
        };
        if home.is_empty() {
            return;
        }
        let s = settings_from(&[(PROFILE_DIR_VAR, "~/permit-profiles")]);
        assert_eq!(s.profiles_dir, Path::new(&home).join("permit-profiles"));
    }

    #[test]
    fn debug_accepts_the_usual_truthy_spellings() {
        for v in ["1", "true", "TRUE", "yes", "on", "On"] {
            assert!(settings_from(&[(DEBUG_VAR, v)]).debug, "{v:?} should enable");
        }
        for v in ["0", "false", "no", "off", "", "2", "enabled"] {
            assert!(!settings_from(&[(DEBUG_VAR, v)]).debug, "{v:?} should not");
        }
    }
}
