//! Per-channel code statistics
//!
//! For every channel, lists each present sample value with its frequency, the
//! code read off the frequency-built tree and the canonical code actually
//! written to the file.

use crate::{EncoderOptions, PifEncoder};
use pif_core::{Channel, PifImage, PifResult};
use pif_huffman::{code_to_string, ChannelCodebook};

/// One row of a channel report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolReport {
    pub symbol: u8,
    pub frequency: u64,
    pub initial_code: String,
    pub canonical_code: String,
}

/// Code statistics for one channel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelReport {
    pub channel: Channel,
    /// Present symbols in ascending value order
    pub symbols: Vec<SymbolReport>,
    /// Bits this channel contributes to the pixel stream
    pub encoded_bits: u64,
}

impl ChannelReport {
    pub fn from_codebook(channel: Channel, book: &ChannelCodebook) -> Self {
        let symbols = book
            .initial
            .iter()
            .map(|(&symbol, initial)| SymbolReport {
                symbol,
                frequency: book.frequencies[symbol as usize],
                initial_code: code_to_string(initial),
                canonical_code: book
                    .table
                    .get(symbol)
                    .map(|entry| entry.to_string())
                    .unwrap_or_default(),
            })
            .collect();

        Self {
            channel,
            symbols,
            encoded_bits: book.encoded_bits(),
        }
    }

    pub fn distinct_symbols(&self) -> usize {
        self.symbols.len()
    }

    /// Average code length in bits per sample
    pub fn bits_per_sample(&self) -> f64 {
        let samples: u64 = self.symbols.iter().map(|s| s.frequency).sum();
        if samples == 0 {
            0.0
        } else {
            self.encoded_bits as f64 / samples as f64
        }
    }
}

/// Compute the code statistics of every channel, in file channel order
pub fn analyze(image: &PifImage) -> PifResult<Vec<ChannelReport>> {
    let books = PifEncoder::new(EncoderOptions::default()).build_codebooks(image)?;
    Ok(Channel::ALL
        .iter()
        .zip(&books)
        .map(|(&channel, book)| ChannelReport::from_codebook(channel, book))
        .collect())
}
