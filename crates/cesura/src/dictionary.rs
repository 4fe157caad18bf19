// Dictionary facade: pattern ingest, freeze, payload binding, stats.

use cesura_dat::{pack_weights, DoubleArray, TrieBuilder, WeightStore};
use tracing::{debug, trace};

use crate::exceptions::ExceptionTable;
use crate::stream::{ExceptionSource, PatternSource};
use crate::CesuraError;

/// Backend label reported by [`Dictionary::stats`].
const BACKEND: &str = "dat";

/// Default number of runes kept unbroken at the left word edge.
const DEFAULT_LEFT_MIN: u8 = 2;

/// Default number of runes kept unbroken at the right word edge.
const DEFAULT_RIGHT_MIN: u8 = 2;

/// A pattern waiting for the freeze before its payload can be bound to a
/// final state.
struct PendingPattern {
    sequence: String,
    key: Vec<u16>,
    packed: Vec<u8>,
}

/// A loaded hyphenation dictionary.
///
/// Holds the frozen pattern index, the packed weight store bound to its
/// states, and the exception table. Building happens once, through
/// [`Dictionary::from_pattern_source`]; afterwards the dictionary is
/// immutable except for [`Dictionary::load_exceptions`] and the edge
/// minimums, and queries may run concurrently from shared references.
#[derive(Debug)]
pub struct Dictionary {
    identifier: String,
    pub(crate) index: DoubleArray,
    pub(crate) weights: WeightStore,
    pub(crate) exceptions: ExceptionTable,
    pub(crate) min_left: u8,
    pub(crate) min_right: u8,
    skipped_patterns: u64,
}

impl Dictionary {
    /// Compiles every pattern from `source` into a frozen dictionary.
    ///
    /// Ingest encodes each sequence to dense symbol IDs (assigning fresh
    /// IDs on first sight), allocates its position in the build trie, and
    /// packs its weights. Patterns that cannot enter the index (a
    /// supra-BMP code point, an alphabet overflow, or an empty sequence)
    /// are skipped and counted, never fatal. Out-of-range weights and
    /// source errors abort the build.
    ///
    /// On end of input the build trie is frozen into the double-array;
    /// each pending pattern is then re-walked through the frozen index to
    /// find its final state, and its packed weights are stored there.
    pub fn from_pattern_source(
        name: &str,
        source: &mut dyn PatternSource,
    ) -> Result<Self, CesuraError> {
        let mut builder = TrieBuilder::new();
        let mut pending: Vec<PendingPattern> = Vec::new();
        let mut max_packed: u8 = 0;
        let mut skipped: u64 = 0;

        while let Some(pattern) = source.next_pattern()? {
            let sequence: String = pattern.sequence.iter().collect();
            let Some(key) = builder.encode_key(&pattern.sequence) else {
                trace!(pattern = %sequence, "skipping unencodable pattern");
                skipped += 1;
                continue;
            };
            if builder.alloc_position(&key) == 0 {
                trace!(pattern = %sequence, "skipping pattern with no trie position");
                skipped += 1;
                continue;
            }
            let packed = pack_weights(&pattern.weights)?;
            max_packed = max_packed.max(packed.len() as u8);
            pending.push(PendingPattern {
                sequence,
                key,
                packed,
            });
        }
        debug!(
            name,
            patterns = pending.len(),
            skipped,
            sigma = builder.sigma(),
            "pattern ingest complete"
        );

        let index = builder.freeze()?;
        let mut weights = WeightStore::with_capacity(max_packed, index.n_states());
        for p in pending {
            let state = index.walk(&p.key);
            if state == 0 {
                return Err(CesuraError::UnresolvedPattern(p.sequence));
            }
            weights.put_packed(state as usize, &p.packed)?;
        }

        let stats = index.stats();
        debug!(
            name,
            used = stats.used_slots,
            total = stats.total_slots,
            fill = stats.fill_ratio(),
            "dictionary ready"
        );
        Ok(Self {
            identifier: name.to_string(),
            index,
            weights,
            exceptions: ExceptionTable::default(),
            min_left: DEFAULT_LEFT_MIN,
            min_right: DEFAULT_RIGHT_MIN,
            skipped_patterns: skipped,
        })
    }

    /// Adds every exception from `source` to the dictionary. Exceptions
    /// shadow the pattern computation for the exact words they name.
    pub fn load_exceptions(
        &mut self,
        source: &mut dyn ExceptionSource,
    ) -> Result<(), CesuraError> {
        while let Some(exception) = source.next_exception()? {
            self.exceptions.insert(exception.word, exception.positions);
        }
        Ok(())
    }

    /// Identifies the loaded pattern set, e.g. for diagnostics.
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    /// Replaces the identifier, e.g. with one found inside the source.
    pub fn set_identifier(&mut self, identifier: impl Into<String>) {
        self.identifier = identifier.into();
    }

    /// Sets how many runes stay unbroken at each word edge. Defaults to
    /// 2/2.
    pub fn set_edge_minimums(&mut self, left: u8, right: u8) {
        self.min_left = left;
        self.min_right = right;
    }

    /// Occupancy and ingest statistics of the frozen index.
    pub fn stats(&self) -> DictionaryStats {
        let stats = self.index.stats();
        DictionaryStats {
            backend: BACKEND,
            used_slots: stats.used_slots,
            total_slots: stats.total_slots,
            max_state_id: stats.max_state_id,
            fill_ratio: stats.fill_ratio(),
            skipped_patterns: self.skipped_patterns,
        }
    }
}

/// Diagnostic snapshot of a built dictionary.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DictionaryStats {
    /// Index backend label.
    pub backend: &'static str,
    /// Slots holding the root or a placed child.
    pub used_slots: usize,
    /// Allocated slot count.
    pub total_slots: usize,
    /// Highest used state index.
    pub max_state_id: usize,
    /// `used_slots / total_slots`.
    pub fill_ratio: f64,
    /// Patterns dropped during ingest because they could not enter the
    /// alphabet.
    pub skipped_patterns: u64,
}
