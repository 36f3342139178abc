//! Canonical Huffman codes
//!
//! A canonical code is fully determined by the bit length of each symbol.
//! Symbols are sorted by (length, value); the first gets the all-zero code and
//! each following code is the previous one plus one, shifted left by the
//! increase in length. This is what lets a PIF file carry nothing but a
//! 256-byte length table per channel.

use crate::{code_to_string, Code, CodeMap};
use pif_core::consts::SYMBOL_COUNT;
use pif_core::{PifError, PifResult};
use std::fmt;

/// Per-symbol code lengths for one channel (0 = symbol absent)
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct CodeLengths([u8; SYMBOL_COUNT]);

impl CodeLengths {
    pub fn new() -> Self {
        Self([0; SYMBOL_COUNT])
    }

    pub fn from_bytes(bytes: [u8; SYMBOL_COUNT]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; SYMBOL_COUNT] {
        &self.0
    }

    pub fn get(&self, symbol: u8) -> u8 {
        self.0[symbol as usize]
    }

    pub fn set(&mut self, symbol: u8, length: u8) {
        self.0[symbol as usize] = length;
    }

    pub fn max_length(&self) -> u8 {
        self.0.iter().copied().max().unwrap_or(0)
    }

    /// Number of symbols with a non-zero length
    pub fn symbol_count(&self) -> usize {
        self.0.iter().filter(|&&l| l > 0).count()
    }

    pub fn is_empty(&self) -> bool {
        self.symbol_count() == 0
    }
}

impl Default for CodeLengths {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for CodeLengths {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.0.iter().enumerate().filter(|(_, l)| **l > 0))
            .finish()
    }
}

/// Length of every code in `codes`
pub fn lengths_from_codes(codes: &CodeMap) -> PifResult<CodeLengths> {
    let mut lengths = CodeLengths::new();
    for (&symbol, code) in codes {
        let length = u8::try_from(code.len()).map_err(|_| {
            PifError::InvalidCodeLengths(format!(
                "Code for symbol {} is {} bits long",
                symbol,
                code.len()
            ))
        })?;
        lengths.set(symbol, length);
    }
    Ok(lengths)
}

/// One entry of a canonical code table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanonicalCode {
    pub symbol: u8,
    pub length: u8,
    pub code: Code,
}

impl CanonicalCode {
    /// Numeric value of the code, if it fits in 64 bits
    pub fn value(&self) -> Option<u64> {
        if self.code.len() > 64 {
            return None;
        }
        Some(
            self.code
                .iter()
                .by_vals()
                .fold(0u64, |acc, bit| (acc << 1) | bit as u64),
        )
    }
}

impl fmt::Display for CanonicalCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&code_to_string(&self.code))
    }
}

/// Canonical code table for one channel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanonicalTable {
    /// Entries in canonical order: by length, then by symbol
    entries: Vec<CanonicalCode>,
    by_symbol: Vec<Option<usize>>,
}

impl CanonicalTable {
    pub fn get(&self, symbol: u8) -> Option<&CanonicalCode> {
        self.by_symbol[symbol as usize].map(|i| &self.entries[i])
    }

    /// Entries in canonical order
    pub fn iter(&self) -> impl Iterator<Item = &CanonicalCode> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Assign canonical codes from a length table
///
/// Fails if the lengths are over-subscribed, i.e. no prefix code with these
/// lengths exists.
pub fn canonical_codes(lengths: &CodeLengths) -> PifResult<CanonicalTable> {
    let mut present: Vec<(u8, u8)> = (0..=u8::MAX)
        .filter(|&s| lengths.get(s) > 0)
        .map(|s| (lengths.get(s), s))
        .collect();
    present.sort_unstable();

    let mut entries: Vec<CanonicalCode> = Vec::with_capacity(present.len());
    let mut by_symbol = vec![None; SYMBOL_COUNT];
    let mut code = Code::new();

    for (i, &(length, symbol)) in present.iter().enumerate() {
        if i == 0 {
            code = Code::repeat(false, length as usize);
        } else {
            if !increment(&mut code) {
                return Err(PifError::InvalidCodeLengths(format!(
                    "Lengths are over-subscribed at symbol {} (length {})",
                    symbol, length
                )));
            }
            let shift = length as usize - code.len();
            code.resize(code.len() + shift, false);
        }

        by_symbol[symbol as usize] = Some(entries.len());
        entries.push(CanonicalCode {
            symbol,
            length,
            code: code.clone(),
        });
    }

    Ok(CanonicalTable { entries, by_symbol })
}

/// Add one to a code read as a big-endian number; false on overflow
fn increment(code: &mut Code) -> bool {
    let last_zero = (0..code.len()).rev().find(|&pos| !code[pos]);
    match last_zero {
        Some(pos) => {
            code.set(pos, true);
            code[pos + 1..].fill(false);
            true
        }
        None => false,
    }
}

/// Node of a [`DecodeTree`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DecodeNode {
    Branch {
        zero: Option<usize>,
        one: Option<usize>,
    },
    Leaf(u8),
}

const ROOT: usize = 0;

/// Decoding tree rebuilt from a length table, stored as an arena indexed by node handle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodeTree {
    nodes: Vec<DecodeNode>,
}

impl DecodeTree {
    fn empty() -> Self {
        Self {
            nodes: vec![DecodeNode::Branch {
                zero: None,
                one: None,
            }],
        }
    }

    /// Whether the tree holds no symbol at all
    pub fn is_empty(&self) -> bool {
        self.nodes.len() == 1
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    fn insert(&mut self, entry: &CanonicalCode) -> PifResult<()> {
        let collision = || {
            PifError::InvalidCodeLengths(format!(
                "Code for symbol {} collides with another code",
                entry.symbol
            ))
        };

        let mut current = ROOT;
        for bit in entry.code.iter().by_vals() {
            let child = match self.nodes[current] {
                DecodeNode::Leaf(_) => return Err(collision()),
                DecodeNode::Branch { zero, one } => {
                    if bit {
                        one
                    } else {
                        zero
                    }
                }
            };
            current = match child {
                Some(child) => child,
                None => {
                    let next = self.nodes.len();
                    self.nodes.push(DecodeNode::Branch {
                        zero: None,
                        one: None,
                    });
                    if let DecodeNode::Branch { zero, one } = &mut self.nodes[current] {
                        if bit {
                            *one = Some(next);
                        } else {
                            *zero = Some(next);
                        }
                    }
                    next
                }
            };
        }

        let node = self.nodes[current];
        match node {
            DecodeNode::Branch {
                zero: None,
                one: None,
            } if current != ROOT => {
                self.nodes[current] = DecodeNode::Leaf(entry.symbol);
                Ok(())
            }
            _ => Err(collision()),
        }
    }

    /// Decode one symbol, pulling bits from `read_bit` until a leaf is reached
    ///
    /// `read_bit` returns `None` at end of stream, which is reported as
    /// [`PifError::TruncatedStream`].
    pub fn decode<F>(&self, read_bit: &mut F) -> PifResult<u8>
    where
        F: FnMut() -> PifResult<Option<bool>>,
    {
        let mut current = ROOT;
        loop {
            match self.nodes[current] {
                DecodeNode::Leaf(symbol) => return Ok(symbol),
                DecodeNode::Branch { zero, one } => {
                    let bit = read_bit()?.ok_or_else(|| {
                        PifError::TruncatedStream("End of stream inside a code".to_string())
                    })?;
                    let child = if bit { one } else { zero };
                    current = child.ok_or_else(|| {
                        PifError::InvalidCode("Bit sequence matches no code".to_string())
                    })?;
                }
            }
        }
    }
}

/// Rebuild the decoding tree implied by a length table
pub fn rebuild_tree_from_lengths(lengths: &CodeLengths) -> PifResult<DecodeTree> {
    let table = canonical_codes(lengths)?;
    let mut tree = DecodeTree::empty();
    for entry in table.iter() {
        tree.insert(entry)?;
    }
    Ok(tree)
}
