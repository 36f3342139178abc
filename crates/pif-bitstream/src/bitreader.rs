//! Bitstream reader implementation

use pif_core::{PifError, PifResult};
use std::io::{ErrorKind, Read};

/// A bitstream reader serving bits MSB-first from a byte stream
///
/// The underlying reader is only touched when the one-byte buffer is empty.
pub struct BitReader<R: Read> {
    reader: R,
    buffer: u8,
    bits_remaining: u8,
}

impl<R: Read> BitReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buffer: 0,
            bits_remaining: 0,
        }
    }

    /// Read a single bit, or `None` at end of stream
    pub fn read_bit(&mut self) -> PifResult<Option<bool>> {
        if self.bits_remaining == 0 {
            match self.next_byte()? {
                Some(byte) => {
                    self.buffer = byte;
                    self.bits_remaining = 8;
                }
                None => return Ok(None),
            }
        }

        self.bits_remaining -= 1;
        Ok(Some((self.buffer >> self.bits_remaining) & 1 == 1))
    }

    /// Read `num_bits` bits (up to 64), most significant first
    pub fn read_bits(&mut self, num_bits: usize) -> PifResult<u64> {
        if num_bits > 64 {
            return Err(PifError::InvalidParameter(
                "Cannot read more than 64 bits at once".to_string(),
            ));
        }

        let mut value = 0u64;
        for _ in 0..num_bits {
            let bit = self.read_bit()?.ok_or_else(|| {
                PifError::TruncatedStream("Unexpected end of stream".to_string())
            })?;
            value = (value << 1) | bit as u64;
        }
        Ok(value)
    }

    pub fn into_inner(self) -> R {
        self.reader
    }

    fn next_byte(&mut self) -> PifResult<Option<u8>> {
        let mut byte = [0u8; 1];
        loop {
            match self.reader.read(&mut byte) {
                Ok(0) => return Ok(None),
                Ok(_) => return Ok(Some(byte[0])),
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            }
        }
    }
}
