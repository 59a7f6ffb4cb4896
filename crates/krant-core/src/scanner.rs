//! Injection scanner — heuristic screen for prompt-injection phrasing.
//!
//! Accepted submissions feed an automated editorial pipeline, so text that
//! tries to smuggle instructions into that pipeline ("ignore previous
//! instructions", "system:") is flagged for human review. Matching is a
//! detection signal only; flagged submissions still produce a record.

use std::sync::LazyLock;

use regex::Regex;

/// Trigger patterns, in reporting order. The matched source strings are
/// surfaced verbatim in the record's `triggers` list.
pub const INJECTION_PATTERNS: &[&str] = &[
    r"ignore\s+previous\s+instructions",
    r"system\s*:",
    r"developer\s*:",
    r"do\s+not\s+follow",
    r"voer\s+uit",
    r"run\s+command",
];

static COMPILED: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    INJECTION_PATTERNS
        .iter()
        .map(|pat| {
            Regex::new(&format!("(?i){pat}")).expect("built-in trigger pattern must be a valid regex")
        })
        .collect()
});

/// Return every trigger pattern that matches anywhere in `text`, in
/// declaration order. Patterns are checked independently.
pub fn scan(text: &str) -> Vec<&'static str> {
    let mut hits = Vec::new();
    for (pat, re) in INJECTION_PATTERNS.iter().zip(COMPILED.iter()) {
        if re.is_match(text) {
            tracing::debug!(pattern = *pat, "scanner: trigger matched");
            hits.push(*pat);
        }
    }
    hits
}
