//! Player roster — canonicalises submitted Minecraft names.
//!
//! The community keeps a roster file of participating players. When the
//! intake runs with a roster, the extracted name is matched against it
//! (exact, then case-insensitive, then small-typo distance) and replaced by
//! its canonical spelling. Until the unlock date only team OOST may submit,
//! so before that date only those names are eligible.

use std::path::Path;

use chrono::NaiveDate;
use serde::Deserialize;

use crate::error::IntakeError;

/// Maximum Levenshtein distance still accepted as the same name with a typo.
const MAX_AFSTAND: usize = 2;

/// Parsed roster file.
///
/// All keys are optional; a missing unlock date falls back to the built-in
/// default.
#[derive(Debug, Clone, Deserialize)]
pub struct Spelerslijst {
    #[serde(default)]
    teams: Teams,
    #[serde(default, rename = "allPlayersSorted")]
    all_players_sorted: Vec<String>,
    #[serde(default = "default_unlock", rename = "unlockAllTeamsFrom")]
    unlock_all_teams_from: NaiveDate,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct Teams {
    #[serde(default)]
    oost: Vec<String>,
}

fn default_unlock() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 2, 20).expect("built-in unlock date must be valid")
}

impl Spelerslijst {
    /// Load a roster from a JSON file.
    pub fn load(path: &Path) -> Result<Self, IntakeError> {
        let raw = std::fs::read_to_string(path).map_err(|source| IntakeError::RosterRead {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&raw).map_err(|source| IntakeError::RosterParse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Names eligible on `vandaag`: every player once all teams are
    /// unlocked, otherwise team OOST only.
    fn toegestaan(&self, vandaag: NaiveDate) -> &[String] {
        if vandaag >= self.unlock_all_teams_from {
            &self.all_players_sorted
        } else {
            &self.teams.oost
        }
    }

    /// Canonical roster spelling for a submitted name, if it matches.
    ///
    /// Exact and case-insensitive matches win outright; otherwise the
    /// closest name by Levenshtein distance is accepted up to
    /// [`MAX_AFSTAND`]. Empty input never matches.
    pub fn canonical(&self, naam: &str, vandaag: NaiveDate) -> Option<&str> {
        let naam = naam.trim();
        if naam.is_empty() {
            return None;
        }
        let namen = self.toegestaan(vandaag);
        if let Some(exact) = namen.iter().find(|n| n.as_str() == naam) {
            return Some(exact);
        }
        let naam_lower = naam.to_lowercase();
        if let Some(ci) = namen.iter().find(|n| n.to_lowercase() == naam_lower) {
            return Some(ci);
        }
        let mut best: Option<(&String, usize)> = None;
        for n in namen {
            let afstand = levenshtein(&naam_lower, &n.to_lowercase());
            if best.map_or(true, |(_, beste)| afstand < beste) {
                best = Some((n, afstand));
            }
        }
        best.filter(|(_, afstand)| *afstand <= MAX_AFSTAND)
            .map(|(n, _)| n.as_str())
    }
}

/// Edit distance between two strings, counted in code points.
fn levenshtein(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0usize; b.len() + 1];
    for (i, ca) in a.iter().enumerate() {
        curr[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            let cost = usize::from(ca != cb);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }
    prev[b.len()]
}
