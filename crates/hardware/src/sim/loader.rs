//! Program loader.
//!
//! Reads a flat binary of little-endian 32-bit instruction words into
//! `InstructionMemory` ahead of cycle zero. Small and fallible: a length not
//! a multiple of four is the only thing that can go wrong, and there is no
//! retry.

use std::fs;
use std::path::Path;

use crate::common::SimError;
use crate::memory::InstructionMemory;

/// Decodes a byte slice into an `InstructionMemory`.
///
/// Each instruction word is four bytes, little-endian.
///
/// # Errors
///
/// Returns `SimError::DecodeError` if `bytes.len()` is not a multiple of four.
pub fn load_words(bytes: &[u8]) -> Result<InstructionMemory, SimError> {
    if bytes.len() % 4 != 0 {
        return Err(SimError::DecodeError {
            pc: 0,
            raw: bytes.len() as u32,
        });
    }

    let words = bytes
        .chunks_exact(4)
        .map(|chunk| u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]))
        .collect();

    Ok(InstructionMemory::new(words))
}

/// Reads a program image from disk and decodes it into `InstructionMemory`.
///
/// # Errors
///
/// Returns `SimError::DecodeError` if the file cannot be read or its length
/// is not a multiple of four.
pub fn load_file(path: impl AsRef<Path>) -> Result<InstructionMemory, SimError> {
    let bytes = fs::read(path).map_err(|_| SimError::DecodeError { pc: 0, raw: 0 })?;
    load_words(&bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_little_endian_words() {
        let bytes = [0x13, 0x00, 0x00, 0x00, 0x93, 0x01, 0x10, 0x00];
        let imem = load_words(&bytes).unwrap();
        assert_eq!(imem.fetch(0), Some(0x0000_0013));
        assert_eq!(imem.fetch(4), Some(0x0010_0193));
    }

    #[test]
    fn rejects_length_not_multiple_of_four() {
        let bytes = [0x13, 0x00, 0x00];
        assert!(load_words(&bytes).is_err());
    }
}
