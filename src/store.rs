//! Profile resolution from a directory of `{name}.toml` / `{name}.json`
//! files, with safe degradation.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::matcher;
use crate::profile::Profile;

/// Why a profile could not be loaded.
///
/// The store reports failures precisely. The one policy every caller in
/// this crate applies, collapsing any failure to the empty profile, lives
/// in [`ProfileStore::load_or_empty`] where it is visible and testable.
#[derive(Debug, Error)]
pub enum LoadError {
    /// Profile names are plain file stems; path separators and `..` are
    /// rejected before touching the filesystem.
    #[error("profile name {0:?} is not a plain name")]
    InvalidName(String),
    #[error("no profile file for {0:?}")]
    NotFound(String),
    #[error("failed to read {path:?}: {source}")]
    Unreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid profile {path:?}: {message}")]
    Invalid { path: PathBuf, message: String },
}

#[derive(Clone, Copy)]
enum Format {
    Toml,
    Json,
}

/// Serializations tried for a name, in priority order: TOML first because
/// comments survive hand-editing, then plain JSON.
const FORMATS: &[(&str, Format)] = &[("toml", Format::Toml), ("json", Format::Json)];

/// Loads named profiles from a fixed directory.
pub struct ProfileStore {
    dir: PathBuf,
}

impl ProfileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Resolve `name` to a profile, reporting exactly what went wrong.
    ///
    /// The first candidate file that exists is the only one consulted: a
    /// malformed `dev.toml` is an error even if a valid `dev.json` sits
    /// next to it. Falling through to a second file would let a stale copy
    /// silently take over from the one the user is editing.
    pub fn load(&self, name: &str) -> Result<Profile, LoadError> {
        if !is_plain_name(name) {
            return Err(LoadError::InvalidName(name.to_string()));
        }
        // An empty directory path (no $HOME, no override) resolves nothing.
        if self.dir.as_os_str().is_empty() {
            return Err(LoadError::NotFound(name.to_string()));
        }
        for (ext, format) in FORMATS {
            let path = self.dir.join(format!("{name}.{ext}"));
            if path.exists() {
                return load_file(&path, *format);
            }
        }
        Err(LoadError::NotFound(name.to_string()))
    }

    /// Resolve `name`, substituting the built-in empty profile for any
    /// failure.
    ///
    /// This is the hard safety contract: a profile that cannot be obtained
    /// degrades to "defer to the host's prompting", never to a silent
    /// allow or deny.
    pub fn load_or_empty(&self, name: &str) -> Profile {
        match self.load(name) {
            Ok(profile) => profile,
            Err(err) => {
                log::debug!("profile {name:?} unavailable ({err}); using empty profile");
                Profile::empty()
            }
        }
    }
}

fn is_plain_name(name: &str) -> bool {
    !name.is_empty() && !name.contains(['/', '\\']) && !name.contains("..")
}

fn load_file(path: &Path, format: Format) -> Result<Profile, LoadError> {
    let text = fs::read_to_string(path).map_err(|source| LoadError::Unreadable {
        path: path.to_path_buf(),
        source,
    })?;
    let profile: Profile = match format {
        Format::Toml => toml::from_str(&text).map_err(|e| invalid(path, e.to_string()))?,
        Format::Json => serde_json::from_str(&text).map_err(|e| invalid(path, e.to_string()))?,
    };
    validate(&profile).map_err(|message| invalid(path, message))?;
    Ok(profile)
}

fn invalid(path: &Path, message: String) -> LoadError {
    LoadError::Invalid {
        path: path.to_path_buf(),
        message,
    }
}

/// Schema-level checks beyond what serde enforces: every glob pattern must
/// compile. A broken pattern rejects the whole file; skipping it at
/// evaluation time could drop a narrow deny out from in front of a broad
/// allow.
fn validate(profile: &Profile) -> Result<(), String> {
    for (idx, rule) in profile.rules.iter().enumerate() {
        let lists = [
            ("command", rule.matcher.command.as_deref()),
            ("path", rule.matcher.path.as_deref()),
        ];
        for (field, patterns) in lists {
            for pattern in patterns.unwrap_or_default() {
                matcher::check_pattern(pattern).map_err(|e| {
                    format!(
                        "rule {idx} ({tool}): bad {field} pattern {pattern:?}: {e}",
                        tool = rule.tool
                    )
                })?;
            }
        }
    }
    Ok(())
}
