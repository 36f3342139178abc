//! Bitstream writer implementation

use bitvec::prelude::*;
use pif_core::{PifError, PifResult};
use std::io::Write;

/// A bitstream writer packing bits MSB-first into a byte stream
///
/// Partial bytes are only ever emitted by [`BitWriter::flush`], which pads the
/// low end of the last byte with zeros. Dropping the writer flushes it, so a
/// trailing partial byte is never lost; call `flush` explicitly to observe errors.
pub struct BitWriter<W: Write> {
    writer: W,
    buffer: u8,
    bits_in_buffer: u8,
    bits_written: u64,
}

impl<W: Write> BitWriter<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            buffer: 0,
            bits_in_buffer: 0,
            bits_written: 0,
        }
    }

    /// Write a single bit
    pub fn write_bit(&mut self, bit: bool) -> PifResult<()> {
        self.buffer = (self.buffer << 1) | bit as u8;
        self.bits_in_buffer += 1;
        self.bits_written += 1;

        if self.bits_in_buffer == 8 {
            self.writer.write_all(&[self.buffer])?;
            self.buffer = 0;
            self.bits_in_buffer = 0;
        }
        Ok(())
    }

    /// Write the low `num_bits` bits of `value`, most significant first
    pub fn write_bits(&mut self, value: u64, num_bits: usize) -> PifResult<()> {
        if num_bits > 64 {
            return Err(PifError::InvalidParameter(
                "Cannot write more than 64 bits at once".to_string(),
            ));
        }

        for i in (0..num_bits).rev() {
            self.write_bit((value >> i) & 1 == 1)?;
        }
        Ok(())
    }

    /// Write every bit of a code, in order
    pub fn write_code(&mut self, code: &BitSlice<u8, Msb0>) -> PifResult<()> {
        for bit in code.iter().by_vals() {
            self.write_bit(bit)?;
        }
        Ok(())
    }

    /// Write a code given as a string of `'0'` and `'1'` characters
    pub fn write_code_str(&mut self, code: &str) -> PifResult<()> {
        for c in code.chars() {
            match c {
                '0' => self.write_bit(false)?,
                '1' => self.write_bit(true)?,
                other => {
                    return Err(PifError::InvalidParameter(format!(
                        "Invalid character {:?} in binary code",
                        other
                    )))
                }
            }
        }
        Ok(())
    }

    /// Total number of bits written so far, padding excluded
    pub fn bits_written(&self) -> u64 {
        self.bits_written
    }

    /// Pad the pending partial byte with zero bits, emit it and flush the underlying writer
    pub fn flush(&mut self) -> PifResult<()> {
        if self.bits_in_buffer > 0 {
            let byte = self.buffer << (8 - self.bits_in_buffer);
            self.writer.write_all(&[byte])?;
            self.buffer = 0;
            self.bits_in_buffer = 0;
        }
        self.writer.flush()?;
        Ok(())
    }
}

impl<W: Write> Drop for BitWriter<W> {
    fn drop(&mut self) {
        let _ = self.flush();
    }
}
