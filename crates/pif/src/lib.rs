//! # PIF - canonical Huffman image container
//!
//! This crate provides a high-level API for storing 24-bit RGB rasters in the
//! PIF format and reading them back losslessly.
//!
//! ## Quick Start
//!
//! ### Encoding
//!
//! ```no_run
//! let pixels = vec![0xFF_20_40_60u32; 800 * 600];
//! pif::encode_to_path(800, 600, &pixels, "output.pif").unwrap();
//! ```
//!
//! ### Decoding
//!
//! ```no_run
//! let (width, height, pixels) = pif::decode_from_path("input.pif").unwrap();
//! println!("Decoded {}x{} image ({} pixels)", width, height, pixels.len());
//! ```
//!
//! ## Format
//!
//! Each of the red, green and blue channels gets its own canonical Huffman
//! code. The file stores the two 16-bit dimensions, three 256-byte code length
//! tables and then the code words of every pixel, bit-packed and zero-padded
//! to a whole byte. The `pif-headers` crate documents the exact layout.

use std::path::Path;

// Re-export core types
pub use pif_core::{
    consts, pack_rgb, unpack_rgb, Channel, Dimensions, PifError, PifImage, PifResult,
};

// Re-export Huffman building blocks
pub use pif_huffman::{
    build_tree, canonical_codes, count_frequencies, initial_codes, lengths_from_codes,
    rebuild_tree_from_lengths, CanonicalTable, ChannelCodebook, CodeLengths,
};

// Re-export decoder
pub use pif_decoder::{DecoderOptions, PifDecoder};

// Re-export encoder
pub use pif_encoder::{analyze, ChannelReport, EncoderOptions, PifEncoder, SymbolReport};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Encode a row-major raster of `0xAARRGGBB` pixels to `path`
///
/// The destination is created or truncated. A failure part-way through
/// leaves a partial file behind.
pub fn encode_to_path<P: AsRef<Path>>(
    width: u32,
    height: u32,
    pixels: &[u32],
    path: P,
) -> PifResult<()> {
    let image = PifImage::new(width, height, pixels.to_vec())?;
    PifEncoder::default().encode_file(&image, path)
}

/// Decode the file at `path` into `(width, height, pixels)`
///
/// Every decoded pixel has alpha `0xFF`.
pub fn decode_from_path<P: AsRef<Path>>(path: P) -> PifResult<(u32, u32, Vec<u32>)> {
    let image = PifDecoder::new().decode_file(path)?;
    Ok((image.width(), image.height(), image.pixels))
}

/// Encode an image into an in-memory PIF file
pub fn encode_to_vec(image: &PifImage) -> PifResult<Vec<u8>> {
    let mut bytes = Vec::new();
    PifEncoder::default().encode(image, &mut bytes)?;
    Ok(bytes)
}

/// Decode an in-memory PIF file
pub fn decode_from_slice(bytes: &[u8]) -> PifResult<PifImage> {
    PifDecoder::new().decode(bytes)
}
