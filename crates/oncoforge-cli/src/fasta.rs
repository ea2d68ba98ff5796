use oncoforge_core::error::{OfResult, OncoForgeError};
use std::fs;

/// Reads the first sequence from a FASTA file, concatenating its lines and
/// uppercasing them. Everything up to the second header line belongs to the
/// first record; plain sequence files without a header also work.
pub fn read_first_sequence(path: &str) -> OfResult<String> {
    let content = fs::read_to_string(path)?;
    let mut sequence = String::new();

    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if line.starts_with('>') {
            if !sequence.is_empty() {
                break;
            }
            continue;
        }
        sequence.push_str(&line.to_ascii_uppercase());
    }

    if sequence.is_empty() {
        return Err(OncoForgeError::Validation(format!(
            "No sequence found in {}",
            path
        )));
    }
    Ok(sequence)
}
