//! cc-permit: PreToolUse hook for Claude Code.
//!
//! Reads one tool-use request as JSON from stdin, decides it against the
//! active permission profile, and writes a decision envelope to stdout:
//!
//! ```text
//! {"decision":{"behavior":"allow"}}
//! ```
//!
//! where behavior is one of `allow`, `deny`, or `passthrough`. The active
//! profile and the audit-log toggle come from the environment
//! (`CC_PERMIT_PROFILE`, `CC_PERMIT_DEBUG`). Nothing here fails loudly:
//! unreadable stdin, malformed JSON, a broken profile, even a panic all
//! collapse to a passthrough envelope and exit status 0, so a damaged hook
//! never blocks or approves anything on its own.

use std::io::Read;

use cc_permit::profile::Verdict;
use cc_permit::request::ToolRequest;
use cc_permit::settings::Settings;
use cc_permit::store::ProfileStore;
use cc_permit::{decide, logging};

fn main() {
    let settings = Settings::from_env();
    logging::init(&settings);

    let args: Vec<String> = std::env::args().skip(1).collect();
    match args.first().map(String::as_str) {
        Some("--dump-profile") => {
            dump_profile(&settings, args.get(1).map(String::as_str));
            return;
        }
        Some("--help" | "-h") => {
            print_usage();
            return;
        }
        _ => {}
    }

    // Invocation boundary: everything below, including a panic, resolves
    // to a verdict, and the only verdict a failure can produce is
    // passthrough.
    let verdict = std::panic::catch_unwind(|| run(&settings)).unwrap_or(Verdict::Passthrough);

    println!("{}", envelope(verdict));
}

fn run(settings: &Settings) -> Verdict {
    let mut raw = String::new();
    if std::io::stdin().read_to_string(&mut raw).is_err() {
        log::debug!("could not read stdin; passing through");
        return Verdict::Passthrough;
    }

    let request = match ToolRequest::from_json(&raw) {
        Ok(request) => request,
        Err(err) => {
            log::debug!("malformed request ({err}); passing through");
            return Verdict::Passthrough;
        }
    };

    decide(settings, &request).verdict
}

/// The entire output contract: one envelope on one line, nothing else.
fn envelope(verdict: Verdict) -> String {
    serde_json::json!({ "decision": { "behavior": verdict.as_str() } }).to_string()
}

/// Print the profile a name resolves to as pretty JSON, after the same
/// fallback the hook itself applies, so stdout is always the rule set a
/// session would actually run under. Load failures go to stderr.
fn dump_profile(settings: &Settings, name: Option<&str>) {
    let name = name.unwrap_or(&settings.profile);
    let store = ProfileStore::new(&settings.profiles_dir);
    let profile = match store.load(name) {
        Ok(profile) => profile,
        Err(err) => {
            eprintln!("cc-permit: {err}; falling back to the empty profile");
            cc_permit::profile::Profile::empty()
        }
    };
    match serde_json::to_string_pretty(&profile) {
        Ok(text) => println!("{text}"),
        Err(err) => eprintln!("cc-permit: cannot render profile {name:?}: {err}"),
    }
}

fn print_usage() {
    println!(
        "cc-permit: profile-driven PreToolUse permission hook\n\
         \n\
         Usage:\n\
           cc-permit                        decide a tool-use request read from stdin\n\
           cc-permit --dump-profile [name]  print the resolved profile as JSON\n\
         \n\
         Environment:\n\
           CC_PERMIT_PROFILE      active profile name (default: \"default\")\n\
           CC_PERMIT_PROFILE_DIR  profile directory (default: ~/.config/cc-permit/profiles)\n\
           CC_PERMIT_LOG_FILE     audit log path (default: ~/.local/share/cc-permit/decisions.log)\n\
           CC_PERMIT_DEBUG        set to 1/true/yes/on to log one line per decision"
    );
}
