//! Pipeline helpers with a frozen clock.

use chrono::NaiveDate;
use krant_core::{IntakeRecord, Spelerslijst};

/// Fixed date used by every harness so record output is reproducible. Falls
/// after the roster unlock date, so the full player list is eligible.
pub fn fixed_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 3, 1).unwrap()
}

/// Run the in-memory pipeline on `raw` with the frozen harness clock.
pub fn run_intake(raw: &str) -> IntakeRecord {
    krant_core::process(raw, None, fixed_date())
}

/// Same, with a player roster.
pub fn run_intake_with_roster(raw: &str, spelers: &Spelerslijst) -> IntakeRecord {
    krant_core::process(raw, Some(spelers), fixed_date())
}
