//! Field extractor — pulls labelled values out of free submission text.
//!
//! Each field has one fixed Dutch label ("Onderwerp:", "Wanneer:", ...)
//! searched case-insensitively over the whole sanitized block. The first
//! match in document order wins; the captured remainder of the line is
//! trimmed. Absent labels yield empty strings.

use std::sync::LazyLock;

use regex::Regex;

use crate::types::Velden;

static RE_MINECRAFT_NAAM: LazyLock<Regex> = LazyLock::new(|| veld_regex(r"minecraft\s*naam"));
static RE_ONDERWERP: LazyLock<Regex> = LazyLock::new(|| veld_regex(r"onderwerp"));
static RE_GEBEURTENIS: LazyLock<Regex> = LazyLock::new(|| veld_regex(r"wat\s+is\s+er\s+gebeurd"));
static RE_WANNEER: LazyLock<Regex> = LazyLock::new(|| veld_regex(r"wanneer"));
static RE_ANONIEM: LazyLock<Regex> = LazyLock::new(|| veld_regex(r"anoniem\s+publiceren"));

fn veld_regex(label: &str) -> Regex {
    Regex::new(&format!(r"(?i){label}\s*:\s*(.+)"))
        .expect("built-in field label must compile to a valid regex")
}

/// Extract all five fields from sanitized text.
pub fn extract(text: &str) -> Velden {
    let anoniem_raw = eerste_waarde(&RE_ANONIEM, text);
    let velden = Velden {
        minecraft_naam: eerste_waarde(&RE_MINECRAFT_NAAM, text),
        onderwerp: eerste_waarde(&RE_ONDERWERP, text),
        gebeurtenis: eerste_waarde(&RE_GEBEURTENIS, text),
        wanneer: eerste_waarde(&RE_WANNEER, text),
        anoniem: is_ja(&anoniem_raw),
    };
    tracing::debug!(
        minecraft_naam = %velden.minecraft_naam,
        onderwerp = %velden.onderwerp,
        anoniem = velden.anoniem,
        "extractor: fields parsed"
    );
    velden
}

fn eerste_waarde(re: &Regex, text: &str) -> String {
    re.captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
        .unwrap_or_default()
}

/// The anonymity answer counts as yes when it starts with "j" or "y",
/// case-insensitive ("Ja", "ja graag", "yes"). Anything else, including an
/// absent field, is no.
fn is_ja(antwoord: &str) -> bool {
    let lower = antwoord.to_lowercase();
    lower.starts_with('j') || lower.starts_with('y')
}
