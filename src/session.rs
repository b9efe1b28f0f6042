// ABOUTME: Session logging module for the weekly-deck application
// ABOUTME: Appends a dated session summary to the per-user work log

use crate::config::Config;
use crate::errors::{DeckError, Result};
use crate::utils::ensure_parent_directory_exists;
use chrono::{Datelike, Local};
use log::{info, warn};
use std::env;
use std::fs;
use std::io::{IsTerminal, Read, Write};

/// Environment variable the host process may use to hand over a summary.
const SUMMARY_ENV_VAR: &str = "CLAUDE_SESSION_SUMMARY";

/// Log the current session to the work log.
///
/// This runs as a hook of a host process and must never fail it: any
/// internal error is recorded in the side error log and swallowed, and the
/// caller still sees success.
pub fn log_session(config: &Config) -> Result<()> {
    match append_entry(config) {
        Ok(()) => {
            info!("Logged session to {:?}", config.work_log_path);
        }
        Err(e) => {
            warn!("Session logging failed: {}", e);
            record_failure(config, &e);
        }
    }
    Ok(())
}

fn append_entry(config: &Config) -> Result<()> {
    let project = project_name()?;
    let summary = extract_key_activities(&read_session_context());

    let now = Local::now();
    let date_str = now.format("%Y-%m-%d").to_string();
    let day_name = now.format("%A").to_string();
    let time_str = now.format("%H:%M").to_string();

    let mut content = if config.work_log_path.exists() {
        fs::read_to_string(&config.work_log_path).map_err(DeckError::FileReadError)?
    } else {
        format!("# Work Log {}\n\n", now.year())
    };

    let date_header = format!("## {} ({})", date_str, day_name);
    if !content.contains(&date_header) {
        content.push_str(&format!("\n{}\n", date_header));
    }

    content.push_str(&format!("### [{}] {}\n- {}\n\n", project, time_str, summary));

    ensure_parent_directory_exists(&config.work_log_path)?;
    fs::write(&config.work_log_path, content).map_err(DeckError::FileReadError)?;
    Ok(())
}

/// Project name = basename of the current working directory.
fn project_name() -> Result<String> {
    let cwd = env::current_dir().map_err(DeckError::FileReadError)?;
    cwd.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .ok_or_else(|| DeckError::SessionLogError("working directory has no name".to_string()))
}

/// Read the session context from the environment, falling back to stdin when
/// data is being piped in.
fn read_session_context() -> String {
    if let Ok(summary) = env::var(SUMMARY_ENV_VAR) {
        if !summary.is_empty() {
            return summary;
        }
    }

    let stdin = std::io::stdin();
    if !stdin.is_terminal() {
        let mut buf = String::new();
        if stdin.lock().read_to_string(&mut buf).is_ok() {
            return buf;
        }
    }

    String::new()
}

/// Condense the raw session context into a one-line summary: the first three
/// non-blank lines, joined.
fn extract_key_activities(session_info: &str) -> String {
    if session_info.is_empty() {
        return "Session completed (no details available)".to_string();
    }

    let meaningful: Vec<&str> = session_info
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .take(3)
        .collect();

    if meaningful.is_empty() {
        "Session completed".to_string()
    } else {
        meaningful.join(" | ")
    }
}

/// Record an internal failure in the side error log. Failures here are
/// ignored outright; there is nowhere left to report them.
fn record_failure(config: &Config, err: &DeckError) {
    let _ = ensure_parent_directory_exists(&config.error_log_path);
    if let Ok(mut file) = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&config.error_log_path)
    {
        let _ = writeln!(file, "{}: {}", Local::now(), err);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_key_activities_empty() {
        assert_eq!(
            extract_key_activities(""),
            "Session completed (no details available)"
        );
    }

    #[test]
    fn test_extract_key_activities_blank_lines_only() {
        assert_eq!(extract_key_activities("\n  \n\t\n"), "Session completed");
    }

    #[test]
    fn test_extract_key_activities_takes_first_three() {
        let info = "Fixed parser bug\n\n  Added tests\nUpdated docs\nMore stuff";
        assert_eq!(
            extract_key_activities(info),
            "Fixed parser bug | Added tests | Updated docs"
        );
    }
}
