//! Constants describing the PIF container layout

/// Number of distinct symbols per channel (8-bit samples)
pub const SYMBOL_COUNT: usize = 256;

/// Number of color channels stored in a file
pub const CHANNEL_COUNT: usize = 3;

/// Size of the width/height header in bytes
pub const DIMENSIONS_SIZE: usize = 4;

/// Size of one per-channel code length table in bytes
pub const LENGTH_TABLE_SIZE: usize = SYMBOL_COUNT;

/// Byte offset of the packed pixel stream
pub const PIXEL_STREAM_OFFSET: usize = DIMENSIONS_SIZE + CHANNEL_COUNT * LENGTH_TABLE_SIZE; // 772

/// Largest width or height a file can describe
pub const MAX_DIMENSION: u32 = u16::MAX as u32;

/// Default upper bound on width*height accepted by the decoder
pub const DEFAULT_MAX_PIXELS: usize = 1 << 28;

/// Alpha value applied to every decoded pixel
pub const OPAQUE_ALPHA: u32 = 0xFF;

/// Conventional file extension
pub const FILE_EXTENSION: &str = "pif";
