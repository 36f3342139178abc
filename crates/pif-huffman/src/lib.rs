//! Canonical Huffman coding for PIF channels
//!
//! The pipeline for one channel is: [`count_frequencies`] -> [`build_tree`] ->
//! [`initial_codes`] -> [`lengths_from_codes`] -> [`canonical_codes`]. Only the
//! resulting [`CodeLengths`] table is persisted; decoders recover the code with
//! [`canonical_codes`] or [`rebuild_tree_from_lengths`].

pub mod canonical;
pub mod codebook;
pub mod frequency;
pub mod tree;

use bitvec::prelude::*;

pub use canonical::{
    canonical_codes, lengths_from_codes, rebuild_tree_from_lengths, CanonicalCode,
    CanonicalTable, CodeLengths, DecodeTree,
};
pub use codebook::ChannelCodebook;
pub use frequency::{count_frequencies, Frequencies};
pub use tree::{build_tree, initial_codes, CodeMap, HuffmanNode};

/// A code word, first bit first
pub type Code = BitVec<u8, Msb0>;

/// Render a code word as a string of `'0'` and `'1'`
pub fn code_to_string(code: &BitSlice<u8, Msb0>) -> String {
    code.iter()
        .by_vals()
        .map(|bit| if bit { '1' } else { '0' })
        .collect()
}
