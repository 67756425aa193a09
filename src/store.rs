//! # Store
//!
//! Loading and persistence for the two plain-text formats:
//!
//! - the results file (`name: count` lines) — read at startup when present,
//!   rewritten at exit if the user confirms;
//! - the name-list file (comma-separated names) — the bootstrap source when
//!   no prior results are usable.
//!
//! Loading then saving without mutation reproduces the same names and counts
//! in the same order. All reporting here is user-visible text (the loop has
//! not started yet, or the terminal has already been restored), mirrored to
//! the log file.

use std::fmt;
use std::fs;
use std::io::{self, BufRead, Write};
use std::path::Path;

use log::{debug, info, warn};

use crate::core::state::Counter;

/// Bootstrap source: comma-separated names. Fixed path, no flags.
pub const NAMES_FILE: &str = "names.txt";
/// Persisted snapshot, also the restart source. Fixed path, no flags.
pub const RESULTS_FILE: &str = "results.txt";

#[derive(Debug)]
pub enum StoreError {
    /// The name-list file does not exist. Fatal: there is nothing to count.
    NotFound(String),
    /// The name-list file exists but yields no names.
    Empty(String),
    Io(String, io::Error),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::NotFound(path) => write!(f, "file '{path}' was not found"),
            StoreError::Empty(path) => write!(f, "file '{path}' contains no names"),
            StoreError::Io(path, e) => write!(f, "failed to read '{path}': {e}"),
        }
    }
}

impl std::error::Error for StoreError {}

/// Insert or overwrite by name, preserving first-seen order.
fn upsert(counters: &mut Vec<Counter>, name: &str, count: i64) {
    match counters.iter_mut().find(|c| c.name == name) {
        Some(existing) => existing.count = count,
        None => counters.push(Counter::new(name, count)),
    }
}

// ============================================================================
// Results file (prior counts)
// ============================================================================

/// Load prior counts from a results file.
///
/// Returns `None` when the file is absent, unreadable, or holds no usable
/// `name: count` line — the caller falls back to the name-list source.
pub fn load_results(path: &Path) -> Option<Vec<Counter>> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            debug!("No results file at {}", path.display());
            return None;
        }
        Err(e) => {
            warn!("Failed to read {}: {}", path.display(), e);
            eprintln!("Warning: could not read '{}': {}", path.display(), e);
            return None;
        }
    };

    let counters = parse_results(&contents, &path.display().to_string());
    if counters.is_empty() {
        warn!("{} exists but holds no usable count data", path.display());
        println!(
            "Warning: '{}' exists but holds no usable count data.",
            path.display()
        );
        return None;
    }
    info!(
        "Loaded {} counters from {}",
        counters.len(),
        path.display()
    );
    Some(counters)
}

/// Parse `name: count` lines. Blank lines and lines without a colon are
/// skipped silently; an unparseable count skips the line with a warning.
/// Only the first colon separates, so counts may not contain one but
/// names never do.
fn parse_results(contents: &str, source: &str) -> Vec<Counter> {
    let mut counters = Vec::new();
    for line in contents.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let Some((name, count_str)) = line.split_once(':') else {
            continue;
        };
        let name = name.trim();
        let count_str = count_str.trim();
        if name.is_empty() {
            continue;
        }
        match count_str.parse::<i64>() {
            Ok(count) => upsert(&mut counters, name, count),
            Err(_) => {
                warn!("Skipping invalid count '{count_str}' in {source}");
                println!("Warning: skipped invalid count '{count_str}' in '{source}'.");
            }
        }
    }
    counters
}

// ============================================================================
// Name-list file (bootstrap)
// ============================================================================

/// Load the comma-separated name list, every count starting at zero.
///
/// Unlike the results file there is nothing to fall back to, so a missing,
/// unreadable, or empty file is an error the caller reports before exiting.
pub fn load_names(path: &Path) -> Result<Vec<Counter>, StoreError> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return Err(StoreError::NotFound(path.display().to_string()));
        }
        Err(e) => return Err(StoreError::Io(path.display().to_string(), e)),
    };

    let counters = parse_names(&contents);
    if counters.is_empty() {
        return Err(StoreError::Empty(path.display().to_string()));
    }
    info!("Loaded {} names from {}", counters.len(), path.display());
    Ok(counters)
}

/// Split on commas, trim, drop empties. A repeated name keeps its
/// first-seen position and is not duplicated.
fn parse_names(contents: &str) -> Vec<Counter> {
    let mut counters = Vec::new();
    for token in contents.split(',') {
        let name = token.trim();
        if name.is_empty() {
            continue;
        }
        upsert(&mut counters, name, 0);
    }
    counters
}

// ============================================================================
// Save confirmation & writer
// ============================================================================

/// Line-buffered yes/no prompt for saving on exit.
///
/// Anything other than "n"/"N" (trimmed, case-insensitive) means yes.
/// An unreadable answer (read error or end of input) means no — the one
/// place where the default flips, kept deliberately.
pub fn confirm_save(input: &mut impl BufRead, out: &mut impl Write) -> bool {
    let _ = write!(out, "\nSave the results? (y/n) [Enter] >> ");
    let _ = out.flush();

    let mut line = String::new();
    match input.read_line(&mut line) {
        Ok(0) | Err(_) => false,
        Ok(_) => !line.trim().eq_ignore_ascii_case("n"),
    }
}

/// Write every counter as a `name: count` line, overwriting the file.
/// Each written line is echoed so the user sees what was persisted.
pub fn save_results(counters: &[Counter], path: &Path) -> io::Result<()> {
    println!("\nSaving results to '{}'...", path.display());
    let mut file = fs::File::create(path)?;
    for counter in counters {
        let line = format!("{}: {}", counter.name, counter.count);
        writeln!(file, "{line}")?;
        println!("   - {line}");
    }
    info!("Saved {} counters to {}", counters.len(), path.display());
    println!("Save complete.");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_parse_names_trims_and_drops_empties() {
        let counters = parse_names("Alice, Bob ,, Carol");
        let names: Vec<&str> = counters.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["Alice", "Bob", "Carol"]);
        assert!(counters.iter().all(|c| c.count == 0));
    }

    #[test]
    fn test_parse_names_dedupes_keeping_first_position() {
        let counters = parse_names("Alice, Bob, Alice");
        let names: Vec<&str> = counters.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["Alice", "Bob"]);
    }

    #[test]
    fn test_parse_names_all_whitespace_is_empty() {
        assert!(parse_names("  , ,\n").is_empty());
    }

    #[test]
    fn test_parse_results_skips_invalid_counts() {
        let counters = parse_results("Alice: 3\nBob: oops\nCarol: 5", "test");
        assert_eq!(
            counters,
            vec![Counter::new("Alice", 3), Counter::new("Carol", 5)]
        );
    }

    #[test]
    fn test_parse_results_splits_on_first_colon_only() {
        // The count segment is everything after the first colon; "12:34"
        // fails integer parsing and the line is skipped.
        let counters = parse_results("a:b: 7\nclock: 12:34", "test");
        assert_eq!(counters, vec![Counter::new("a", 7)]);
    }

    #[test]
    fn test_parse_results_ignores_blank_and_separator_less_lines() {
        let counters = parse_results("\n\nno separator here\nAlice: -2\n", "test");
        assert_eq!(counters, vec![Counter::new("Alice", -2)]);
    }

    #[test]
    fn test_parse_results_duplicate_name_overwrites() {
        let counters = parse_results("Alice: 1\nBob: 2\nAlice: 9", "test");
        assert_eq!(
            counters,
            vec![Counter::new("Alice", 9), Counter::new("Bob", 2)]
        );
    }

    #[test]
    fn test_confirm_save_defaults_to_yes() {
        let mut out = Vec::new();
        assert!(confirm_save(&mut Cursor::new(b"y\n".as_slice()), &mut out));
        assert!(confirm_save(&mut Cursor::new(b"\n".as_slice()), &mut out));
        assert!(confirm_save(&mut Cursor::new(b"whatever\n".as_slice()), &mut out));
    }

    #[test]
    fn test_confirm_save_n_declines() {
        let mut out = Vec::new();
        assert!(!confirm_save(&mut Cursor::new(b"n\n".as_slice()), &mut out));
        assert!(!confirm_save(&mut Cursor::new(b"  N \n".as_slice()), &mut out));
    }

    #[test]
    fn test_confirm_save_unreadable_input_declines() {
        // End of input flips the default: no answer means no save.
        let mut out = Vec::new();
        assert!(!confirm_save(&mut Cursor::new(b"".as_slice()), &mut out));
    }

    #[test]
    fn test_confirm_save_writes_prompt() {
        let mut out = Vec::new();
        confirm_save(&mut Cursor::new(b"y\n".as_slice()), &mut out);
        let prompt = String::from_utf8(out).unwrap();
        assert!(prompt.contains("(y/n)"));
    }
}
