//! Per-channel code construction

use crate::{
    build_tree, canonical_codes, count_frequencies, initial_codes, lengths_from_codes,
    CanonicalTable, CodeLengths, CodeMap, Frequencies,
};
use pif_core::PifResult;

/// Everything the encoder derives for one channel from its samples
#[derive(Debug, Clone)]
pub struct ChannelCodebook {
    pub frequencies: Frequencies,
    /// Codes read off the frequency-built tree
    pub initial: CodeMap,
    pub lengths: CodeLengths,
    pub table: CanonicalTable,
}

impl ChannelCodebook {
    /// Run the whole pipeline on one channel's samples
    pub fn build(samples: &[u8]) -> PifResult<Self> {
        let frequencies = count_frequencies(samples.iter().copied());
        Self::from_frequencies(frequencies)
    }

    pub fn from_frequencies(frequencies: Frequencies) -> PifResult<Self> {
        let initial = build_tree(&frequencies)
            .map(|root| initial_codes(&root))
            .unwrap_or_default();
        let lengths = lengths_from_codes(&initial)?;
        let table = canonical_codes(&lengths)?;

        log::debug!(
            "codebook: {} symbols, max code length {}",
            table.len(),
            lengths.max_length()
        );
        log::trace!("code lengths: {:?}", lengths);

        Ok(Self {
            frequencies,
            initial,
            lengths,
            table,
        })
    }

    /// Size in bits of the channel's share of the pixel stream
    pub fn encoded_bits(&self) -> u64 {
        self.table
            .iter()
            .map(|entry| self.frequencies[entry.symbol as usize] * entry.length as u64)
            .sum()
    }
}
