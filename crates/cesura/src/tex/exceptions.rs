// Streaming reader for TeX \hyphenation{...} blocks.

use std::io::{BufRead, BufReader, Lines, Read};

use crate::stream::{Exception, ExceptionSource};
use crate::CesuraError;

/// Streams hyphenation exceptions out of TeX-style pattern files.
///
/// Exceptions are one word per line inside a block like
///
/// ```text
/// \hyphenation{
/// ex-cep-tion
/// ta-ble
/// }
/// ```
///
/// Every `-` marks a break before the following letter; the emitted
/// position vector has one entry per letter of the stripped word, with a
/// 1 at each break.
pub struct TexExceptionSource<R: Read> {
    lines: Lines<BufReader<R>>,
    in_block: bool,
}

impl<R: Read> TexExceptionSource<R> {
    /// Creates a reader over raw TeX pattern data.
    pub fn new(reader: R) -> Self {
        Self {
            lines: BufReader::new(reader).lines(),
            in_block: false,
        }
    }
}

impl<R: Read> ExceptionSource for TexExceptionSource<R> {
    fn next_exception(&mut self) -> Result<Option<Exception>, CesuraError> {
        while let Some(line) = self.lines.next() {
            let line = line?;
            let line = line.trim();
            if !self.in_block {
                if line.starts_with("\\hyphenation{") {
                    self.in_block = true;
                }
                continue;
            }
            if line.starts_with('}') {
                self.in_block = false;
                continue;
            }
            if line.is_empty() {
                continue;
            }

            let mut positions = Vec::with_capacity(line.len());
            let mut was_hyphen = false;
            for ch in line.chars() {
                if ch == '-' {
                    positions.push(1);
                    was_hyphen = true;
                } else if was_hyphen {
                    was_hyphen = false;
                } else {
                    positions.push(0);
                }
            }
            let word: String = line.chars().filter(|&ch| ch != '-').collect();
            return Ok(Some(Exception { word, positions }));
        }
        Ok(None)
    }
}
