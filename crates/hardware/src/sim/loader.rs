//! Machine-Code Image Loader.
//!
//! This module reads the textual memory images produced by the E20 assembler.
//! It performs:
//! 1. **Parsing:** Every line must have the form `ram[<addr>] = 16'b<bits>;`,
//!    optionally followed by a comment.
//! 2. **Sequencing:** Addresses start at 0 and increase by exactly one.
//! 3. **Bounds:** An address at or past the end of memory is rejected.

use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

use crate::common::LoadError;
use crate::common::constants::MEM_SIZE;

static IMAGE_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^ram\[(\d+)\] = 16'b([01]+);.*$").expect("image line pattern is valid")
});

/// Parses a machine-code image.
///
/// # Arguments
///
/// * `text` - The whole image, one `ram[...]` assignment per line.
///
/// # Returns
///
/// The words in address order, starting at address 0.
///
/// # Errors
///
/// - [`LoadError::Unparsable`] for a malformed line or a literal wider than 16 bits.
/// - [`LoadError::OutOfSequence`] when an address is not the next one expected.
/// - [`LoadError::ProgramTooBig`] when an address does not fit in memory.
pub fn parse_image(text: &str) -> Result<Vec<u16>, LoadError> {
    let mut words = Vec::new();

    for (idx, line) in text.lines().enumerate() {
        let line = line.strip_suffix('\r').unwrap_or(line);
        let unparsable = || LoadError::Unparsable {
            line: idx + 1,
            text: line.to_string(),
        };

        let caps = IMAGE_LINE.captures(line).ok_or_else(unparsable)?;
        let addr: usize = caps[1].parse().map_err(|_| unparsable())?;
        let word = u16::from_str_radix(&caps[2], 2).map_err(|_| unparsable())?;

        let expected = words.len();
        if addr != expected {
            return Err(LoadError::OutOfSequence { addr, expected });
        }
        if addr >= MEM_SIZE {
            return Err(LoadError::ProgramTooBig { addr });
        }
        words.push(word);
    }

    Ok(words)
}

/// Reads and parses a machine-code image file.
///
/// # Errors
///
/// [`LoadError::Io`] if the file cannot be read, otherwise as [`parse_image`].
pub fn load_image(path: impl AsRef<Path>) -> Result<Vec<u16>, LoadError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_image(&text)
}
