//! Debug-gated audit log for decisions.

use std::fs::OpenOptions;

use log::LevelFilter;
use simplelog::{ConfigBuilder, WriteLogger};

use crate::eval::Evaluation;
use crate::request::{MatchField, ToolRequest};
use crate::settings::Settings;

/// Install the file logger behind the `log` facade when debug is enabled.
///
/// Best-effort: an empty log path, an unopenable file, or an already
/// installed logger all leave the facade unbacked, and logging must never
/// affect the verdict.
pub fn init(settings: &Settings) {
    if !settings.debug || settings.log_file.as_os_str().is_empty() {
        return;
    }
    if let Some(parent) = settings.log_file.parent() {
        let _ = std::fs::create_dir_all(parent);
    }
    let Ok(file) = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&settings.log_file)
    else {
        return;
    };
    let config = ConfigBuilder::new().set_time_format_rfc3339().build();
    let _ = WriteLogger::init(LevelFilter::Debug, config, file);
}

/// Append one record per decision: profile, tool, the value the rules saw,
/// the verdict, and which rule decided. A no-op unless [`init`] installed
/// the logger.
pub fn audit(settings: &Settings, request: &ToolRequest, evaluation: Evaluation) {
    let value = MatchField::for_tool(&request.tool)
        .map(|field| request.match_value(field))
        .unwrap_or("");
    // Keep pasted scripts from flooding the log.
    let value: String = value.chars().take(200).collect();
    let via = match evaluation.matched_rule {
        Some(idx) => format!("rule #{idx}"),
        None => "default".to_string(),
    };
    log::info!(
        "profile={} tool={} value={:?} verdict={} via {}",
        settings.profile,
        request.tool,
        value,
        evaluation.verdict.as_str(),
        via,
    );
}
