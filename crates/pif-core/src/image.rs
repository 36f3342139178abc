//! Image data structures

use crate::consts::{MAX_DIMENSION, OPAQUE_ALPHA};
use crate::{PifError, PifResult};
use std::fmt;

/// Color channel of a packed `0xAARRGGBB` pixel
///
/// The declaration order is the order in which channels are stored on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    Red = 0,
    Green = 1,
    Blue = 2,
}

impl Channel {
    /// All stored channels, in file order
    pub const ALL: [Channel; 3] = [Channel::Red, Channel::Green, Channel::Blue];

    pub fn index(&self) -> usize {
        *self as usize
    }

    fn shift(&self) -> u32 {
        match self {
            Channel::Red => 16,
            Channel::Green => 8,
            Channel::Blue => 0,
        }
    }

    /// Extract this channel's 8-bit sample from a packed pixel
    pub fn sample(&self, pixel: u32) -> u8 {
        ((pixel >> self.shift()) & 0xFF) as u8
    }

    pub fn name(&self) -> &'static str {
        match self {
            Channel::Red => "red",
            Channel::Green => "green",
            Channel::Blue => "blue",
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Pack three channel samples into an opaque `0xAARRGGBB` pixel
pub fn pack_rgb(red: u8, green: u8, blue: u8) -> u32 {
    (OPAQUE_ALPHA << 24) | ((red as u32) << 16) | ((green as u32) << 8) | blue as u32
}

/// Split a packed pixel into its red, green and blue samples
pub fn unpack_rgb(pixel: u32) -> [u8; 3] {
    Channel::ALL.map(|c| c.sample(pixel))
}

/// Image dimensions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl Dimensions {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn pixel_count(&self) -> usize {
        (self.width as usize) * (self.height as usize)
    }

    /// Check that both sides are non-zero and fit the 16-bit header fields
    pub fn validate(&self) -> PifResult<()> {
        if self.width == 0
            || self.height == 0
            || self.width > MAX_DIMENSION
            || self.height > MAX_DIMENSION
        {
            return Err(PifError::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }
}

/// A raster of packed `0xAARRGGBB` pixels in row-major order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PifImage {
    pub dimensions: Dimensions,
    pub pixels: Vec<u32>,
}

impl PifImage {
    pub fn new(width: u32, height: u32, pixels: Vec<u32>) -> PifResult<Self> {
        let dimensions = Dimensions::new(width, height);
        dimensions.validate()?;

        let expected = dimensions.pixel_count();
        if pixels.len() != expected {
            return Err(PifError::PixelCountMismatch {
                expected,
                actual: pixels.len(),
            });
        }

        Ok(Self { dimensions, pixels })
    }

    /// Build an image from interleaved 8-bit RGB samples
    pub fn from_rgb8(width: u32, height: u32, rgb: &[u8]) -> PifResult<Self> {
        let expected = Dimensions::new(width, height).pixel_count() * 3;
        if rgb.len() != expected {
            return Err(PifError::PixelCountMismatch {
                expected,
                actual: rgb.len(),
            });
        }
        let pixels = rgb
            .chunks_exact(3)
            .map(|px| pack_rgb(px[0], px[1], px[2]))
            .collect();
        Self::new(width, height, pixels)
    }

    /// Interleaved 8-bit RGB samples, alpha dropped
    pub fn to_rgb8(&self) -> Vec<u8> {
        self.pixels.iter().flat_map(|&p| unpack_rgb(p)).collect()
    }

    pub fn width(&self) -> u32 {
        self.dimensions.width
    }

    pub fn height(&self) -> u32 {
        self.dimensions.height
    }

    pub fn pixel_count(&self) -> usize {
        self.pixels.len()
    }

    /// Samples of one channel, in pixel order
    pub fn channel_samples(&self, channel: Channel) -> Vec<u8> {
        self.pixels.iter().map(|&p| channel.sample(p)).collect()
    }
}
