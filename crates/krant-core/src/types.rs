//! Core types for krant-core — the intake record and its parts.
//!
//! This module defines the data structures shared across the pipeline
//! stages: the extracted [`Velden`], the derived [`VeiligheidsFlags`] and
//! [`Validatie`], and the final [`IntakeRecord`] that is written to disk.

use chrono::NaiveDate;
use serde::Serialize;

/// Fallback subject used when the submission carries no recognisable
/// `Onderwerp:` line.
pub const ONBEKEND_ONDERWERP: &str = "Onbekend onderwerp";

/// The final output of one intake run, serialised as pretty-printed JSON.
///
/// Field order here is the key order in the output file. The camelCase
/// renames produce the exact key names downstream consumers read.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IntakeRecord {
    /// Date stamp of the run (`YYYY-MM-DD`).
    pub datum: NaiveDate,
    /// Subject line; [`ONBEKEND_ONDERWERP`] when the submission had none.
    pub onderwerp: String,
    /// Submitted Minecraft name, canonicalised against the roster when one
    /// was supplied. Empty when absent.
    pub minecraft_naam: String,
    /// Whether the submitter asked to be published anonymously.
    pub anoniem: bool,
    /// The event description, capped at 500 code points.
    pub samenvatting: String,
    /// When the event happened, in the submitter's own words.
    pub wanneer: String,
    /// Editorial workflow status; always starts out as [`Status::Nieuw`].
    pub status: Status,
    /// Injection-screening outcome.
    pub veiligheids_flags: VeiligheidsFlags,
    /// Presence checks on the required fields.
    pub validatie: Validatie,
    /// Leading fragment of the sanitized text, kept for audit.
    pub raw_fragment: String,
}

/// Editorial workflow status of a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Status {
    Nieuw,
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Status::Nieuw => write!(f, "Nieuw"),
        }
    }
}

/// Injection-screening outcome: a suspicion flag plus the trigger patterns
/// that raised it, in reporting order.
///
/// This is a signal for human review, not a block; suspicious submissions
/// still produce a record.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VeiligheidsFlags {
    pub prompt_injectie_verdacht: bool,
    pub triggers: Vec<String>,
}

/// Presence checks on the required fields, computed from the extracted
/// values before any default is substituted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Validatie {
    pub heeft_minecraft_naam: bool,
    pub heeft_onderwerp: bool,
    pub heeft_gebeurtenis: bool,
}

/// The labelled fields pulled out of one submission. Absent fields are
/// empty strings; `anoniem` is already coerced to a boolean.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Velden {
    pub minecraft_naam: String,
    pub onderwerp: String,
    pub gebeurtenis: String,
    pub wanneer: String,
    pub anoniem: bool,
}
