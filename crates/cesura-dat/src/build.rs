// Build-phase trie: temporary nodes, dense-symbol assignment, freeze.

use std::collections::VecDeque;

use hashbrown::HashMap;
use tracing::debug;

use crate::dat::DoubleArray;
use crate::map::PagedBmpMap;
use crate::{DatError, MAX_BASE_PROBES, SENTINEL_DENSE};

/// State index of the root, both as a temporary ID in the build arena and
/// as the final state in the frozen array. Index 0 is reserved so that 0
/// can mean "invalid position" everywhere.
pub const ROOT: u32 = 1;

#[derive(Debug, Default)]
struct BuildNode {
    children: HashMap<u16, u32>,
}

/// Mutable prefix tree used while ingesting patterns.
///
/// The builder owns everything that exists only before the freeze: the
/// node arena (indexed by temporary ID), the alphabet map, and the
/// rune-to-dense assignment that hands out fresh IDs in first-seen order.
/// [`TrieBuilder::freeze`] consumes it and relocates the tree into a
/// [`DoubleArray`]; temporary IDs do not survive the freeze.
pub struct TrieBuilder {
    arena: Vec<BuildNode>,
    map: PagedBmpMap,
    dense_ids: HashMap<char, u16>,
    next_dense: u16,
}

impl TrieBuilder {
    /// Creates a builder with the `.` sentinel pre-assigned to dense ID 1.
    pub fn new() -> Self {
        let mut map = PagedBmpMap::new();
        map.set(u16::from(b'.'), SENTINEL_DENSE);
        let mut dense_ids = HashMap::new();
        dense_ids.insert('.', SENTINEL_DENSE);
        Self {
            arena: vec![BuildNode::default(), BuildNode::default()],
            map,
            dense_ids,
            next_dense: SENTINEL_DENSE,
        }
    }

    /// Encodes a code-point sequence to dense symbol IDs, assigning fresh
    /// IDs to code points seen for the first time.
    ///
    /// Returns `None` when the sequence cannot enter the alphabet: it
    /// contains a supra-BMP code point, or the alphabet would overflow
    /// 65535 symbols. IDs assigned before the failing code point stay
    /// assigned.
    pub fn encode_key(&mut self, sequence: &[char]) -> Option<Vec<u16>> {
        let mut key = Vec::with_capacity(sequence.len());
        for &ch in sequence {
            let cp = u32::from(ch);
            if cp > 0xFFFF {
                return None;
            }
            let dense = match self.dense_ids.get(&ch) {
                Some(&d) => d,
                None => {
                    if self.next_dense == u16::MAX {
                        return None;
                    }
                    self.next_dense += 1;
                    self.dense_ids.insert(ch, self.next_dense);
                    self.map.set(cp as u16, self.next_dense);
                    self.next_dense
                }
            };
            key.push(dense);
        }
        Some(key)
    }

    /// Walks `key` from the root, creating missing children, and returns
    /// the temporary ID of the terminal node. An empty key or any 0
    /// symbol yields 0.
    pub fn alloc_position(&mut self, key: &[u16]) -> u32 {
        if key.is_empty() {
            return 0;
        }
        let mut node = ROOT;
        for &symbol in key {
            if symbol == 0 {
                return 0;
            }
            node = match self.arena[node as usize].children.get(&symbol) {
                Some(&child) => child,
                None => {
                    let child = self.arena.len() as u32;
                    self.arena.push(BuildNode::default());
                    self.arena[node as usize].children.insert(symbol, child);
                    child
                }
            };
        }
        node
    }

    /// Returns a walker over the existing tree, starting at the root.
    pub fn cursor(&self) -> BuildCursor<'_> {
        BuildCursor {
            arena: &self.arena,
            node: ROOT,
            dead: false,
        }
    }

    /// Alphabet size so far (the highest assigned dense ID).
    pub fn sigma(&self) -> u16 {
        self.next_dense
    }

    /// Relocates the tree into a frozen [`DoubleArray`] by breadth-first
    /// first-fit placement.
    ///
    /// For each node in BFS order, the smallest base `b >= 1` is chosen
    /// such that every child slot `b + c` is free; smallest `b` wins.
    /// Probing is bounded by [`MAX_BASE_PROBES`] per node.
    pub fn freeze(self) -> Result<DoubleArray, DatError> {
        let sigma = self.next_dense;
        let mut base = vec![0i32; ROOT as usize + 1];
        let mut check = vec![0i32; ROOT as usize + 1];

        // Final state of every build node, indexed by temporary ID.
        let mut state = vec![0u32; self.arena.len()];
        state[ROOT as usize] = ROOT;

        let mut queue = VecDeque::from([ROOT]);
        while let Some(node) = queue.pop_front() {
            let labels = sorted_labels(&self.arena[node as usize].children);
            if labels.is_empty() {
                continue;
            }
            let b = find_base(&check, &labels)?;
            ensure_slot(&mut base, &mut check, b + usize::from(labels[labels.len() - 1]));

            let s = state[node as usize];
            base[s as usize] = b as i32;
            for &label in &labels {
                let t = b + usize::from(label);
                check[t] = s as i32;
                let child = self.arena[node as usize].children[&label];
                state[child as usize] = t as u32;
                queue.push_back(child);
            }
        }

        debug!(
            states = base.len(),
            sigma,
            nodes = self.arena.len() - 1,
            "froze double-array"
        );
        Ok(DoubleArray::new(ROOT, sigma, base, check, self.map))
    }
}

impl Default for TrieBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Walker over the build trie. Returns 0 the moment a symbol is missing
/// and stays dead thereafter.
pub struct BuildCursor<'a> {
    arena: &'a [BuildNode],
    node: u32,
    dead: bool,
}

impl BuildCursor<'_> {
    /// Advances on `symbol` and returns the temporary ID of the node
    /// reached, or 0 if the walk failed here or earlier.
    pub fn advance(&mut self, symbol: u16) -> u32 {
        if self.dead || symbol == 0 {
            self.dead = true;
            return 0;
        }
        match self.arena[self.node as usize].children.get(&symbol) {
            Some(&child) => {
                self.node = child;
                child
            }
            None => {
                self.dead = true;
                0
            }
        }
    }
}

fn sorted_labels(children: &HashMap<u16, u32>) -> Vec<u16> {
    let mut labels: Vec<u16> = children.keys().copied().collect();
    labels.sort_unstable();
    labels
}

/// First-fit search: the smallest base where every child slot is free.
/// Slots beyond the current array length count as free; the arrays grow
/// when the winning base is applied.
fn find_base(check: &[i32], labels: &[u16]) -> Result<usize, DatError> {
    for b in 1..=MAX_BASE_PROBES {
        let free = labels.iter().all(|&label| {
            let t = b + usize::from(label);
            t >= check.len() || check[t] == 0
        });
        if free {
            return Ok(b);
        }
    }
    Err(DatError::BaseAllocation {
        fanout: labels.len(),
        probes: MAX_BASE_PROBES,
    })
}

fn ensure_slot(base: &mut Vec<i32>, check: &mut Vec<i32>, idx: usize) {
    if idx >= base.len() {
        base.resize(idx + 1, 0);
        check.resize(idx + 1, 0);
    }
}
