// Streaming reader for TeX \patterns{...} blocks.

use std::io::{BufRead, BufReader, Lines, Read};

use crate::stream::{Pattern, PatternSource};
use crate::CesuraError;

/// Streams Liang patterns out of TeX-style pattern files.
///
/// Pattern lines sit inside a block like
///
/// ```text
/// \patterns{ % some comment
/// .wil5i
/// .ye4
/// 4ab.
/// a5bal
/// }
/// ```
///
/// Odd digits mark discretionary break points, even digits forbid them.
/// A digit belongs to the letter after it, so `a5ban` reads as
/// `(a)(5b)(a)(n)` and yields weights `[0, 5, 0, 0]`; a digit at the end
/// of a line yields one more weight than there are letters.
///
/// Comment lines (`%`), TeX commands (`\...`), blank lines, and closing
/// braces are skipped. `\hyphenation{...}` blocks are skipped entirely;
/// [`TexExceptionSource`](crate::tex::TexExceptionSource) reads those. A
/// `\message{...}` line is captured as the pattern-set identifier.
pub struct TexPatternSource<R: Read> {
    lines: Lines<BufReader<R>>,
    identifier: Option<String>,
}

impl<R: Read> TexPatternSource<R> {
    /// Creates a reader over raw TeX pattern data.
    pub fn new(reader: R) -> Self {
        Self {
            lines: BufReader::new(reader).lines(),
            identifier: None,
        }
    }

    /// Identifier captured from a `\message{...}` line, if one was seen
    /// so far.
    pub fn identifier(&self) -> Option<&str> {
        self.identifier.as_deref()
    }
}

impl<R: Read> PatternSource for TexPatternSource<R> {
    fn next_pattern(&mut self) -> Result<Option<Pattern>, CesuraError> {
        while let Some(line) = self.lines.next() {
            let line = line?;
            let line = line.trim();
            if let Some(rest) = line.strip_prefix("\\message{") {
                self.identifier = Some(rest.trim_end_matches('}').to_string());
                continue;
            }
            if line.starts_with("\\hyphenation{") {
                skip_block(&mut self.lines)?;
                continue;
            }
            if line.is_empty()
                || line.starts_with('%')
                || line.starts_with('\\')
                || line.starts_with('}')
            {
                continue;
            }
            let (sequence, weights) = decode_pattern_line(line);
            if sequence.is_empty() {
                continue;
            }
            return Ok(Some(Pattern { sequence, weights }));
        }
        Ok(None)
    }
}

/// Decodes one pattern line into its letter sequence and weight vector.
/// Two adjacent letters imply a zero weight between them.
fn decode_pattern_line(line: &str) -> (Vec<char>, Vec<u8>) {
    let mut sequence = Vec::new();
    let mut weights = Vec::new();
    let mut was_digit = false;
    for ch in line.chars() {
        if let Some(digit) = ch.to_digit(10) {
            weights.push(digit as u8);
            was_digit = true;
            continue;
        }
        sequence.push(ch);
        if was_digit {
            was_digit = false;
        } else {
            weights.push(0);
        }
    }
    (sequence, weights)
}

/// Consumes lines up to and including the closing brace of a block.
fn skip_block<B: BufRead>(lines: &mut Lines<B>) -> Result<(), CesuraError> {
    for line in lines {
        if line?.trim_start().starts_with('}') {
            break;
        }
    }
    Ok(())
}
