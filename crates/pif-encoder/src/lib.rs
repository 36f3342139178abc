//! PIF encoder implementation

pub mod analysis;

use pif_bitstream::BitWriter;
use pif_core::*;
use pif_headers::PifHeader;
use pif_huffman::{ChannelCodebook, CodeLengths};
use rayon::prelude::*;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

pub use analysis::{analyze, ChannelReport, SymbolReport};

/// Encoder options
#[derive(Debug, Clone)]
pub struct EncoderOptions {
    /// Build the three channel codebooks on the rayon thread pool.
    /// The output is identical either way.
    pub parallel: bool,
}

impl Default for EncoderOptions {
    fn default() -> Self {
        Self { parallel: true }
    }
}

impl EncoderOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
}

/// PIF encoder
pub struct PifEncoder {
    options: EncoderOptions,
}

impl PifEncoder {
    pub fn new(options: EncoderOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &EncoderOptions {
        &self.options
    }

    /// Encode an image to a file, creating or truncating it
    pub fn encode_file<P: AsRef<Path>>(&self, image: &PifImage, path: P) -> PifResult<()> {
        let file = File::create(path)?;
        let writer = BufWriter::new(file);
        self.encode(image, writer)
    }

    /// Encode an image to a writer
    pub fn encode<W: Write>(&self, image: &PifImage, mut writer: W) -> PifResult<()> {
        image.dimensions.validate()?;
        if image.pixels.len() != image.dimensions.pixel_count() {
            return Err(PifError::PixelCountMismatch {
                expected: image.dimensions.pixel_count(),
                actual: image.pixels.len(),
            });
        }

        let codebooks = self.build_codebooks(image)?;

        let lengths: [CodeLengths; consts::CHANNEL_COUNT] =
            Channel::ALL.map(|c| codebooks[c.index()].lengths);
        PifHeader::new(image.dimensions, lengths).write(&mut writer)?;

        let mut bit_writer = BitWriter::new(&mut writer);
        for &pixel in &image.pixels {
            for channel in Channel::ALL {
                let sample = channel.sample(pixel);
                let entry = codebooks[channel.index()]
                    .table
                    .get(sample)
                    .ok_or_else(|| {
                        PifError::InvalidCode(format!(
                            "No {} code for sample {}",
                            channel, sample
                        ))
                    })?;
                bit_writer.write_code(&entry.code)?;
            }
        }
        bit_writer.flush()?;

        log::info!(
            "encoded {}x{} image: {} header bytes, {} stream bytes",
            image.width(),
            image.height(),
            PifHeader::size(),
            bit_writer.bits_written().div_ceil(8)
        );
        Ok(())
    }

    /// Build one codebook per channel, in file channel order
    pub fn build_codebooks(&self, image: &PifImage) -> PifResult<Vec<ChannelCodebook>> {
        let build = |channel: &Channel| {
            log::debug!("building {} channel codebook", channel);
            ChannelCodebook::build(&image.channel_samples(*channel))
        };

        if self.options.parallel {
            Channel::ALL[..].par_iter().map(build).collect()
        } else {
            Channel::ALL.iter().map(build).collect()
        }
    }
}

impl Default for PifEncoder {
    fn default() -> Self {
        Self::new(EncoderOptions::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gradient(width: u32, height: u32) -> PifImage {
        let pixels = (0..height)
            .flat_map(|y| {
                (0..width).map(move |x| pack_rgb((x * 7) as u8, (y * 3) as u8, ((x + y) % 5) as u8))
            })
            .collect();
        PifImage::new(width, height, pixels).unwrap()
    }

    #[test]
    fn test_two_pixel_scenario() {
        let image = PifImage::new(2, 1, vec![pack_rgb(10, 10, 10); 2]).unwrap();
        let mut out = Vec::new();
        PifEncoder::default().encode(&image, &mut out).unwrap();

        assert_eq!(out.len(), consts::PIXEL_STREAM_OFFSET + 1);
        assert_eq!(&out[..4], &[0x00, 0x02, 0x00, 0x01]);
        for table in 0..3 {
            let start = 4 + table * 256;
            for (symbol, &len) in out[start..start + 256].iter().enumerate() {
                assert_eq!(len, if symbol == 10 { 1 } else { 0 });
            }
        }
        assert_eq!(out[772], 0x00);
    }

    #[test]
    fn test_parallel_and_serial_agree() {
        let image = gradient(37, 19);
        let mut serial = Vec::new();
        let mut parallel = Vec::new();
        PifEncoder::new(EncoderOptions::new().parallel(false))
            .encode(&image, &mut serial)
            .unwrap();
        PifEncoder::new(EncoderOptions::new().parallel(true))
            .encode(&image, &mut parallel)
            .unwrap();
        assert_eq!(serial, parallel);
    }

    #[test]
    fn test_stream_size_matches_codebooks() {
        let image = gradient(16, 16);
        let encoder = PifEncoder::default();
        let books = encoder.build_codebooks(&image).unwrap();
        let bits: u64 = books.iter().map(|b| b.encoded_bits()).sum();

        let mut out = Vec::new();
        encoder.encode(&image, &mut out).unwrap();
        assert_eq!(
            out.len() as u64,
            consts::PIXEL_STREAM_OFFSET as u64 + bits.div_ceil(8)
        );
    }

    #[test]
    fn test_rejects_inconsistent_image() {
        let mut image = gradient(4, 4);
        image.pixels.pop();
        let result = PifEncoder::default().encode(&image, Vec::new());
        assert!(matches!(
            result,
            Err(PifError::PixelCountMismatch {
                expected: 16,
                actual: 15
            })
        ));
    }
}
