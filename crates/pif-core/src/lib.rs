//! Core types and utilities for the PIF image format
//!
//! This crate provides the fundamental data structures shared by every other
//! PIF crate: the raster type, the color channel enumeration, format constants
//! and the error type.

pub mod consts;
pub mod error;
pub mod image;

pub use error::{PifError, PifResult};
pub use image::*;
