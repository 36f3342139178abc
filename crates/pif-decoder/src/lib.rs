//! PIF decoder implementation

use pif_bitstream::BitReader;
use pif_core::*;
use pif_headers::PifHeader;
use pif_huffman::{rebuild_tree_from_lengths, DecodeTree};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Pixels reserved up front; the buffer grows past this as the stream proves longer
const INITIAL_PIXEL_CAPACITY: usize = 1 << 20;

/// Decoder options
#[derive(Debug, Clone)]
pub struct DecoderOptions {
    /// Reject files whose width*height exceeds this before allocating pixels
    pub max_pixels: Option<usize>,
}

impl Default for DecoderOptions {
    fn default() -> Self {
        Self {
            max_pixels: Some(consts::DEFAULT_MAX_PIXELS),
        }
    }
}

impl DecoderOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn max_pixels(mut self, max_pixels: Option<usize>) -> Self {
        self.max_pixels = max_pixels;
        self
    }
}

/// PIF decoder
pub struct PifDecoder {
    options: DecoderOptions,
    header: Option<PifHeader>,
}

impl PifDecoder {
    pub fn new() -> Self {
        Self::with_options(DecoderOptions::default())
    }

    pub fn with_options(options: DecoderOptions) -> Self {
        Self {
            options,
            header: None,
        }
    }

    /// Decode a PIF file from a path
    pub fn decode_file<P: AsRef<Path>>(&mut self, path: P) -> PifResult<PifImage> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);
        self.decode(reader)
    }

    /// Decode from a reader
    pub fn decode<R: Read>(&mut self, mut reader: R) -> PifResult<PifImage> {
        let header = PifHeader::read(&mut reader)?;
        let pixel_count = header.dimensions.pixel_count();
        if let Some(limit) = self.options.max_pixels {
            if pixel_count > limit {
                return Err(PifError::ImageTooLarge {
                    pixels: pixel_count,
                    limit,
                });
            }
        }

        let trees = Self::build_trees(&header)?;
        let dimensions = header.dimensions;
        self.header = Some(header);

        let mut bit_reader = BitReader::new(reader);
        let mut read_bit = || bit_reader.read_bit();
        let mut pixels = Vec::with_capacity(pixel_count.min(INITIAL_PIXEL_CAPACITY));

        for index in 0..pixel_count {
            let mut samples = [0u8; consts::CHANNEL_COUNT];
            for channel in Channel::ALL {
                samples[channel.index()] = trees[channel.index()]
                    .decode(&mut read_bit)
                    .map_err(|e| match e {
                        PifError::TruncatedStream(_) => PifError::TruncatedStream(format!(
                            "Pixel stream ends at pixel {} of {}",
                            index, pixel_count
                        )),
                        other => other,
                    })?;
            }
            pixels.push(pack_rgb(samples[0], samples[1], samples[2]));
        }

        let image = PifImage { dimensions, pixels };
        log::info!(
            "decoded {}x{} image ({} pixels)",
            image.width(),
            image.height(),
            image.pixel_count()
        );
        Ok(image)
    }

    /// Rebuild the decode tree of every channel, in file channel order
    fn build_trees(header: &PifHeader) -> PifResult<Vec<DecodeTree>> {
        Channel::ALL
            .iter()
            .map(|&channel| {
                let lengths = header.lengths(channel);
                let tree = rebuild_tree_from_lengths(lengths)?;
                if tree.is_empty() {
                    return Err(PifError::EmptyChannel(channel));
                }
                log::debug!(
                    "{} channel: {} symbols, max code length {}",
                    channel,
                    lengths.symbol_count(),
                    lengths.max_length()
                );
                Ok(tree)
            })
            .collect()
    }

    /// Get the decoded header
    pub fn header(&self) -> Option<&PifHeader> {
        self.header.as_ref()
    }
}

impl Default for PifDecoder {
    fn default() -> Self {
        Self::new()
    }
}
