//! Byte/text inspector
//!
//! Indexes a text value by byte offset, then turns that single byte back
//! into a one-character string.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::InspectError;
use crate::types::labeled;

/// Text inspected when none is given
pub const DEFAULT_TEXT: &str = "Hello, World!";

/// Byte offset inspected when none is given
pub const DEFAULT_INDEX: i64 = 1;

/// Result of inspecting one byte of a text value
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Inspection {
    /// Zero-based byte offset that was read
    pub index: usize,
    /// Raw byte at that offset
    pub byte: u8,
    /// The byte read back as a single character
    pub converted: String,
}

impl Inspection {
    /// Report line for the raw byte, e.g. `byte: uint8, 101`
    pub fn byte_line(&self) -> String {
        format!("byte: {}", labeled(&self.byte))
    }

    /// Report line for the converted text, e.g. `text: string, e`
    pub fn text_line(&self) -> String {
        format!("text: {}", labeled(&self.converted))
    }
}

/// Convert one byte into a string holding the character with that code point
pub fn byte_to_text(byte: u8) -> String {
    char::from(byte).to_string()
}

/// Read the byte at `index` and convert it back into text
pub fn inspect(text: &str, index: usize) -> Result<Inspection, InspectError> {
    let bytes = text.as_bytes();
    let byte = *bytes.get(index).ok_or_else(|| InspectError::OutOfRange {
        index: i64::try_from(index).unwrap_or(i64::MAX),
        len: bytes.len(),
    })?;

    let converted = byte_to_text(byte);
    debug!(index, byte, converted = %converted, "inspected byte");

    Ok(Inspection {
        index,
        byte,
        converted,
    })
}

/// Like [`inspect`], but takes a signed offset. Negative offsets are out of range.
pub fn inspect_signed(text: &str, index: i64) -> Result<Inspection, InspectError> {
    let offset = usize::try_from(index).map_err(|_| InspectError::OutOfRange {
        index,
        len: text.len(),
    })?;
    inspect(text, offset)
}
