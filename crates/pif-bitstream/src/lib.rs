//! Bitstream reading and writing for PIF
//!
//! Both adapters pack bits most-significant-first within each byte, which is
//! the order in which canonical Huffman codes are laid out in a PIF pixel stream.

pub mod bitreader;
pub mod bitwriter;

pub use bitreader::BitReader;
pub use bitwriter::BitWriter;
