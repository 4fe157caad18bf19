// Suffix-sweep hyphenation: merge pattern weights over every suffix of
// the dotted word, mask the edges, split at odd positions.

use crate::dictionary::Dictionary;

impl Dictionary {
    /// Splits `word` at legal hyphenation positions.
    ///
    /// Words present in the exception table return their stored split
    /// unchanged. Otherwise the word is wrapped in `.` sentinels, every
    /// suffix of the dotted form is walked through the pattern index, and
    /// matching payloads are merged into one position vector under the
    /// max-wins rule. Odd positions become breaks, subject to the left
    /// and right edge minimums.
    ///
    /// The query path is total: a word with no break points comes back as
    /// a single fragment, and the concatenation of the fragments is
    /// always exactly `word`.
    pub fn hyphenate<'a>(&self, word: &'a str) -> Vec<&'a str> {
        if let Some(positions) = self.exceptions.get(word) {
            return split_at_positions(word, positions);
        }

        let rune_count = word.chars().count();
        let mut dotted: Vec<char> = Vec::with_capacity(rune_count + 2);
        dotted.push('.');
        dotted.extend(word.chars());
        dotted.push('.');

        // Encode once; a 0 in the key stops any suffix walk that reaches
        // it, which is exactly the contract for out-of-alphabet runes.
        let key = self.index.encode_key(&dotted);

        // One entry per gap of the dotted word, both ends included.
        let mut positions = vec![0u8; dotted.len() + 1];
        for at in 0..dotted.len() {
            let mut cursor = self.index.cursor();
            for &symbol in &key[at..] {
                let Some(state) = cursor.advance(symbol) else {
                    break;
                };
                self.weights.merge_into(state as usize, at, &mut positions);
            }
        }

        // Drop the sentinel gaps; what remains aligns to the word's
        // inter-rune gaps plus both endpoints.
        let mut positions: Vec<u8> = positions[1..dotted.len()].to_vec();

        let left = usize::from(self.min_left).min(positions.len());
        for p in &mut positions[..left] {
            *p = 0;
        }
        let cutoff = (rune_count + 1)
            .saturating_sub(usize::from(self.min_right))
            .min(positions.len());
        for p in &mut positions[cutoff..] {
            *p = 0;
        }

        split_at_positions(word, &positions)
    }

    /// Returns `word` with `-` inserted at every legal break.
    pub fn hyphenation_string(&self, word: &str) -> String {
        self.hyphenate(word).join("-")
    }
}

/// Splits `word` before every rune index whose position entry is odd.
///
/// Byte offsets are derived from rune indices so that multibyte words
/// split cleanly. Entries at index 0 or at/past the rune count cannot
/// split (they would emit an empty fragment) and are ignored, which also
/// makes the splitter robust against over-long exception vectors.
fn split_at_positions<'a>(word: &'a str, positions: &[u8]) -> Vec<&'a str> {
    let offsets = char_byte_offsets(word);
    let mut parts = Vec::with_capacity(2);
    let mut prev = 0usize;
    for (i, &p) in positions.iter().enumerate() {
        if p % 2 == 1 && i > 0 {
            if let Some(&offset) = offsets.get(i) {
                parts.push(&word[prev..offset]);
                prev = offset;
            }
        }
    }
    parts.push(&word[prev..]);
    parts
}

/// Byte offset of every rune in `word`, in order.
fn char_byte_offsets(word: &str) -> Vec<usize> {
    word.char_indices().map(|(offset, _)| offset).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_at_odd_positions_only() {
        assert_eq!(
            split_at_positions("table", &[0, 0, 1, 0, 0]),
            vec!["ta", "ble"]
        );
        assert_eq!(
            split_at_positions("table", &[0, 0, 2, 0, 0]),
            vec!["table"]
        );
        assert_eq!(split_at_positions("table", &[0; 5]), vec!["table"]);
    }

    #[test]
    fn split_respects_multibyte_runes() {
        // ü is two bytes; the split must land on the rune boundary.
        assert_eq!(
            split_at_positions("fürung", &[0, 0, 1, 0, 0, 0, 0]),
            vec!["fü", "rung"]
        );
        assert_eq!(
            split_at_positions("mäßig", &[0, 0, 1, 0, 0]),
            vec!["mä", "ßig"]
        );
    }

    #[test]
    fn split_ignores_edge_and_overflow_entries() {
        // index 0 and indices at or past the rune count cannot split
        assert_eq!(
            split_at_positions("abc", &[1, 0, 0, 1, 1, 1]),
            vec!["abc"]
        );
        assert_eq!(split_at_positions("", &[1]), vec![""]);
    }

    #[test]
    fn offsets_follow_utf8_lengths() {
        assert_eq!(char_byte_offsets("abc"), vec![0, 1, 2]);
        assert_eq!(char_byte_offsets("über"), vec![0, 2, 3, 4]);
        assert_eq!(char_byte_offsets(""), Vec::<usize>::new());
    }
}
