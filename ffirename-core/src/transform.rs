//! Filename transformer for the FFI plate naming convention.
//!
//! Input names look like `FFI-129 TopHat GREEN_E3_5_00d00h00m`:
//!
//! - four `_`-separated segments: `<head>_<well>_<slot>_<timestamp>`
//! - the head splits on single spaces into `<FFI-id> <label> <COLOR>`
//!
//! and are rewritten to `129_1_E_03_2_2`. The label and timestamp are dropped.

use crate::codes::{color_code, slot_code};
use crate::error::{RenameError, Result};
use std::fmt;

pub const PREFIX: &str = "FFI-";

const DIGIT_WIDTH: usize = 2;

/// The pieces of a matching filename, already mapped to their output codes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedName {
    pub id: String,
    /// Color code, or the raw color tag when it is not in the table
    pub color: String,
    pub letter: char,
    /// Zero-padded well number
    pub digits: String,
    pub slot: &'static str,
}

impl ParsedName {
    /// Parse a filename. `Ok(None)` means the name is not ours to rename.
    pub fn parse(filename: &str) -> Result<Option<Self>> {
        if !filename.starts_with(PREFIX) {
            return Ok(None);
        }

        let segments: Vec<&str> = filename.split('_').collect();
        let &[head, well, slot, _timestamp] = segments.as_slice() else {
            return Err(RenameError::malformed(
                filename,
                format!("expected 4 '_' segments, found {}", segments.len()),
            ));
        };

        let parts: Vec<&str> = head.split(' ').collect();
        let &[id_part, _label, color_part] = parts.as_slice() else {
            return Err(RenameError::malformed(
                filename,
                format!(
                    "expected 3 space-separated parts before the first '_', found {}",
                    parts.len()
                ),
            ));
        };

        let id = id_part.rsplit('-').next().unwrap_or(id_part);

        // Unknown colors pass through untouched, unlike unknown slots.
        let color = color_code(color_part).unwrap_or(color_part);

        let mut well_chars = well.chars();
        let Some(letter) = well_chars.next() else {
            return Err(RenameError::malformed(filename, "empty well segment"));
        };
        let digits = zero_pad(well_chars.as_str(), DIGIT_WIDTH);

        let slot = slot_code(slot).ok_or_else(|| RenameError::UnknownSlot {
            filename: filename.to_string(),
            slot: slot.to_string(),
        })?;

        Ok(Some(Self {
            id: id.to_string(),
            color: color.to_string(),
            letter,
            digits,
            slot,
        }))
    }
}

impl fmt::Display for ParsedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}_{}_{}_{}_{}",
            self.id, self.color, self.letter, self.digits, self.slot
        )
    }
}

/// Map a filename to its normalized form.
///
/// Returns `Ok(None)` for names without the `FFI-` prefix. Prefixed names that
/// do not fit the grammar are errors.
pub fn transform(filename: &str) -> Result<Option<String>> {
    Ok(ParsedName::parse(filename)?.map(|parsed| parsed.to_string()))
}

/// Left-pad with zeros to `width` characters, keeping a leading sign in front.
fn zero_pad(value: &str, width: usize) -> String {
    let len = value.chars().count();
    if len >= width {
        return value.to_string();
    }

    let fill = "0".repeat(width - len);
    match value.chars().next() {
        Some(sign @ ('+' | '-')) => format!("{sign}{fill}{}", &value[1..]),
        _ => format!("{fill}{value}"),
    }
}
