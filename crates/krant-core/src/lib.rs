//! krant-core — intake processing for krant submissions.
//!
//! One free-text submission form goes through a linear pipeline:
//!
//! ```text
//! read ──► sanitize ──► scan ──► extract ──► assemble ──► write
//! ```
//!
//! Every stage is synchronous and pure except the file boundaries in
//! [`io`]. [`process`] runs the in-memory part of the pipeline; the binary
//! wraps it with the reads and the atomic write.

pub mod error;
pub mod extractor;
pub mod io;
pub mod record;
pub mod roster;
pub mod sanitizer;
pub mod scanner;
pub mod types;

pub use error::IntakeError;
pub use roster::Spelerslijst;
pub use types::{IntakeRecord, Status, Validatie, Velden, VeiligheidsFlags, ONBEKEND_ONDERWERP};

use chrono::NaiveDate;

/// Run the in-memory pipeline over one raw submission.
///
/// When a [`Spelerslijst`] is supplied, the extracted Minecraft name is
/// canonicalised against it; an unmatched name is kept as submitted. `datum`
/// stamps the record and gates the roster's unlock date, so a frozen date
/// makes the whole run reproducible.
pub fn process(raw: &str, spelers: Option<&Spelerslijst>, datum: NaiveDate) -> IntakeRecord {
    let text = sanitizer::sanitize(raw);
    let triggers = scanner::scan(&text);
    let mut velden = extractor::extract(&text);

    if let Some(lijst) = spelers {
        match lijst.canonical(&velden.minecraft_naam, datum) {
            Some(canoniek) => {
                if canoniek != velden.minecraft_naam {
                    tracing::debug!(
                        ingevuld = %velden.minecraft_naam,
                        canoniek,
                        "roster: canonicalised submitted name"
                    );
                }
                velden.minecraft_naam = canoniek.to_string();
            }
            None => {
                if !velden.minecraft_naam.is_empty() {
                    tracing::warn!(naam = %velden.minecraft_naam, "roster: name not on the player list");
                }
            }
        }
    }

    IntakeRecord::assemble(&text, velden, &triggers, datum)
}
