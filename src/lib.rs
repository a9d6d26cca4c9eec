//! RustPDF417 - PDF417 barcode decoding core
//!
//! The aggregation stage of a PDF417 reading pipeline in pure Rust: given a
//! binarized image, a region locator and a symbol decoder, it estimates
//! codeword pixel-width bounds per candidate, drives the decode loop and
//! assembles the final results with geometry and metadata attached.
//!
//! Locating regions and decoding codewords are collaborator concerns behind
//! the [`RegionLocator`] and [`SymbolDecoder`] traits; this crate owns the
//! orchestration between them.

#![warn(missing_docs)]
#![allow(clippy::missing_docs_in_private_items)]

mod debug;
/// Classified decode failures
pub mod error;
/// Core data structures (Barcode, BitMatrix, Point, metadata types)
pub mod models;
/// Decode orchestration and collaborator traits
pub mod reader;
/// Codeword pixel-width estimation
pub mod width;

pub use error::DecodeError;
pub use models::{
    Barcode, BarcodeFormat, BitMatrix, CandidateAnchors, DecodedPayload, MacroMetadata,
    MetadataKey, MetadataValue, PayloadExtra, Point,
};
pub use reader::{DecodeOptions, Detection, Reader, RegionLocator, SymbolDecoder};
pub use width::{max_codeword_width, min_codeword_width};
