//! Analysis history log
//!
//! Appends one line per completed analysis so the user can look back at
//! past results. Write failures never disturb the workflow.

use crate::analysis::{AnalysisRequest, AnalysisResult};
use anyhow::Result;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

/// Longest text excerpt kept in a history entry
const EXCERPT_CHARS: usize = 80;

/// Append one completed analysis to the history log
pub fn log(request: &AnalysisRequest, result: &AnalysisResult) -> Result<()> {
    // Determine config directory (respecting XDG)
    let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from(".config"));
    let log_dir = config_dir.join("moodlens");
    std::fs::create_dir_all(&log_dir)?;

    let log_path = log_dir.join("history.log");

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_path)?;

    writeln!(
        file,
        "[{}] {}->{} {} {:.0}% \"{}\"",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
        request.source.code(),
        request.target.code(),
        result.sentiment,
        result.confidence * 100.0,
        excerpt(&request.text)
    )?;
    Ok(())
}

/// Char-boundary-safe excerpt of the analyzed text
fn excerpt(text: &str) -> String {
    if text.chars().count() <= EXCERPT_CHARS {
        text.to_string()
    } else {
        let head: String = text.chars().take(EXCERPT_CHARS).collect();
        format!("{}...", head)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_excerpt_short_text_unchanged() {
        assert_eq!(excerpt("hello"), "hello");
    }

    #[test]
    fn test_excerpt_truncates_long_text() {
        let long = "x".repeat(200);
        let e = excerpt(&long);
        assert_eq!(e.chars().count(), EXCERPT_CHARS + 3);
        assert!(e.ends_with("..."));
    }

    #[test]
    fn test_excerpt_respects_multibyte_boundaries() {
        // Persian text: every char is multibyte
        let long = "س".repeat(100);
        let e = excerpt(&long);
        assert!(e.ends_with("..."));
        assert_eq!(e.chars().count(), EXCERPT_CHARS + 3);
    }
}
