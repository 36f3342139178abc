//! PIF header parsing and generation
//!
//! Layout (all integers big-endian):
//!
//! | offset | size | field |
//! |---|---|---|
//! | 0 | 2 | width |
//! | 2 | 2 | height |
//! | 4 | 256 | red code lengths |
//! | 260 | 256 | green code lengths |
//! | 516 | 256 | blue code lengths |
//!
//! The bit-packed pixel stream follows at offset 772.

use byteorder::{BigEndian, ReadBytesExt, WriteBytesExt};
use pif_core::consts::{CHANNEL_COUNT, LENGTH_TABLE_SIZE, PIXEL_STREAM_OFFSET};
use pif_core::{Channel, Dimensions, PifError, PifResult};
use pif_huffman::CodeLengths;
use std::io::{ErrorKind, Read, Write};

/// PIF file header
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PifHeader {
    pub dimensions: Dimensions,
    /// Code length tables indexed by [`Channel::index`]
    pub lengths: [CodeLengths; CHANNEL_COUNT],
}

impl PifHeader {
    pub fn new(dimensions: Dimensions, lengths: [CodeLengths; CHANNEL_COUNT]) -> Self {
        Self {
            dimensions,
            lengths,
        }
    }

    pub fn lengths(&self, channel: Channel) -> &CodeLengths {
        &self.lengths[channel.index()]
    }

    /// Serialized size in bytes
    pub const fn size() -> usize {
        PIXEL_STREAM_OFFSET
    }

    /// Write header to output
    pub fn write<W: Write>(&self, writer: &mut W) -> PifResult<()> {
        self.dimensions.validate()?;

        writer.write_u16::<BigEndian>(self.dimensions.width as u16)?;
        writer.write_u16::<BigEndian>(self.dimensions.height as u16)?;
        for channel in Channel::ALL {
            writer.write_all(self.lengths(channel).as_bytes())?;
        }
        Ok(())
    }

    /// Parse header from input
    pub fn read<R: Read>(reader: &mut R) -> PifResult<Self> {
        let width = reader.read_u16::<BigEndian>().map_err(truncated("width"))?;
        let height = reader.read_u16::<BigEndian>().map_err(truncated("height"))?;
        let dimensions = Dimensions::new(width as u32, height as u32);
        dimensions.validate()?;

        let mut lengths = [CodeLengths::new(); CHANNEL_COUNT];
        for channel in Channel::ALL {
            let mut table = [0u8; LENGTH_TABLE_SIZE];
            reader
                .read_exact(&mut table)
                .map_err(truncated(channel.name()))?;
            lengths[channel.index()] = CodeLengths::from_bytes(table);
        }

        Ok(Self {
            dimensions,
            lengths,
        })
    }
}

fn truncated(field: &'static str) -> impl Fn(std::io::Error) -> PifError {
    move |e| {
        if e.kind() == ErrorKind::UnexpectedEof {
            PifError::TruncatedStream(format!("Header ends before the {} field", field))
        } else {
            PifError::Io(e)
        }
    }
}
