//! cc-permit: a PreToolUse hook for Claude Code that decides tool calls
//! from named permission profiles.
//!
//! A profile is an ordered list of `(tool, match, action)` rules plus a
//! default verdict, loaded from `~/.config/cc-permit/profiles/{name}.toml`
//! (or `.json`). Evaluation scans the rules in order and the first match
//! wins; the result is one of three verdicts: [`profile::Verdict::Allow`],
//! [`profile::Verdict::Deny`], or [`profile::Verdict::Passthrough`], where
//! passthrough means "defer to the host's own prompting". Every failure
//! mode in the crate degrades to passthrough.
//!
//! # Architecture
//!
//! - **[`settings`]** — Run configuration, read once from the environment.
//! - **[`profile`]** — Typed profile schema: verdicts, match specs, rules.
//! - **[`store`]** — Profile resolution with degrade-to-empty fallback.
//! - **[`request`]** — Wire-side request types and tool-class mapping.
//! - **[`matcher`]** — Anchored shell-glob matching for pattern lists.
//! - **[`eval`]** — The first-match-wins decision procedure.
//! - **[`logging`]** — Debug-gated decision audit log.

/// First-match-wins evaluation over a profile's rule list.
pub mod eval;
/// Audit logging behind the `log` facade.
pub mod logging;
/// Glob pattern matching and validation.
pub mod matcher;
/// Profile schema types and serde wiring.
pub mod profile;
/// Incoming request types and the tool-class field mapping.
pub mod request;
/// Environment-derived run configuration.
pub mod settings;
/// Profile file resolution and validation.
pub mod store;

use eval::Evaluation;
use request::ToolRequest;
use settings::Settings;
use store::ProfileStore;

/// Load the active profile and decide one request.
///
/// This is the full hook pipeline minus process I/O: resolve the profile
/// named by `settings` (falling back to the empty profile on any load
/// failure), evaluate the request, append the audit record. Infallible by
/// construction; the worst available outcome is a passthrough.
pub fn decide(settings: &Settings, request: &ToolRequest) -> Evaluation {
    let store = ProfileStore::new(&settings.profiles_dir);
    let profile = store.load_or_empty(&settings.profile);
    let evaluation = eval::evaluate(&profile, request);
    logging::audit(settings, request, evaluation);
    evaluation
}
