//! File boundaries — lossy input reading and atomic record writing.

use std::fs;
use std::path::Path;

use crate::error::IntakeError;
use crate::types::IntakeRecord;

/// Read `path` as UTF-8 text, replacing invalid byte sequences with U+FFFD
/// instead of failing on them.
pub fn read_lossy(path: &Path) -> Result<String, IntakeError> {
    let bytes = fs::read(path).map_err(|source| IntakeError::InputRead {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Serialise `record` as pretty-printed JSON (2-space indent, non-ASCII
/// preserved literally) and write it to `path`.
///
/// The JSON lands in a hidden temp file next to the destination and is
/// renamed into place, so a failed run never leaves a truncated record.
pub fn write_record(path: &Path, record: &IntakeRecord) -> Result<(), IntakeError> {
    let json = serde_json::to_string_pretty(record).map_err(IntakeError::Encode)?;
    write_atomic(path, &json)
}

fn write_atomic(path: &Path, inhoud: &str) -> Result<(), IntakeError> {
    let naam = path.file_name().ok_or_else(|| {
        output_fout(
            path,
            std::io::Error::new(std::io::ErrorKind::InvalidInput, "output path has no file name"),
        )
    })?;
    let tmp = path.with_file_name(format!(".{}.tmp", naam.to_string_lossy()));
    fs::write(&tmp, inhoud).map_err(|source| output_fout(path, source))?;
    if let Err(source) = fs::rename(&tmp, path) {
        let _ = fs::remove_file(&tmp);
        return Err(output_fout(path, source));
    }
    Ok(())
}

fn output_fout(path: &Path, source: std::io::Error) -> IntakeError {
    IntakeError::OutputWrite {
        path: path.to_path_buf(),
        source,
    }
}
