//! Record assembly — combines the pipeline outputs into one [`IntakeRecord`].

use chrono::NaiveDate;

use crate::sanitizer::truncate_chars;
use crate::types::{IntakeRecord, Status, Validatie, Velden, VeiligheidsFlags, ONBEKEND_ONDERWERP};

/// Maximum length of the event summary, in code points.
pub const MAX_SAMENVATTING: usize = 500;
/// Maximum length of the audit fragment of sanitized text, in code points.
pub const MAX_RAW_FRAGMENT: usize = 1_200;

impl IntakeRecord {
    /// Assemble the record for one submission.
    ///
    /// `text` is the sanitized submission, `triggers` the matched injection
    /// patterns in reporting order, `datum` the date stamp. Validation flags
    /// reflect the extracted values before any default is substituted;
    /// afterwards an empty subject falls back to [`ONBEKEND_ONDERWERP`].
    pub fn assemble(text: &str, velden: Velden, triggers: &[&str], datum: NaiveDate) -> Self {
        let validatie = Validatie {
            heeft_minecraft_naam: !velden.minecraft_naam.is_empty(),
            heeft_onderwerp: !velden.onderwerp.is_empty(),
            heeft_gebeurtenis: !velden.gebeurtenis.is_empty(),
        };
        let onderwerp = if velden.onderwerp.is_empty() {
            ONBEKEND_ONDERWERP.to_string()
        } else {
            velden.onderwerp
        };
        IntakeRecord {
            datum,
            onderwerp,
            minecraft_naam: velden.minecraft_naam,
            anoniem: velden.anoniem,
            samenvatting: truncate_chars(&velden.gebeurtenis, MAX_SAMENVATTING).to_string(),
            wanneer: velden.wanneer,
            status: Status::Nieuw,
            veiligheids_flags: VeiligheidsFlags {
                prompt_injectie_verdacht: !triggers.is_empty(),
                triggers: triggers.iter().map(|t| t.to_string()).collect(),
            },
            validatie,
            raw_fragment: truncate_chars(text, MAX_RAW_FRAGMENT).to_string(),
        }
    }
}
