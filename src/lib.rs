//! PhotoFrame image processor.
//!
//! Companion tool for a 7-color e-paper photo frame: decodes a photo,
//! runs the deterministic `epd-pipeline` transforms and writes the BMP
//! the device renders plus a JPEG preview thumbnail.
//! This library exposes modules for integration testing.

pub mod error;
pub mod io;
