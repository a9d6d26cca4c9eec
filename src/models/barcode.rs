use std::collections::BTreeMap;

use super::Point;

/// Symbology of a decoded barcode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BarcodeFormat {
    /// PDF417 stacked linear barcode
    Pdf417,
}

/// Macro PDF417 control block linking a symbol to the other segments of a
/// multi-symbol file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MacroMetadata {
    /// Zero-based index of this segment within the file
    pub segment_index: u32,
    /// File identifier shared by all segments
    pub file_id: String,
    /// Optional-field codewords carried verbatim from the control block
    pub optional_data: Vec<u32>,
    /// Whether this segment is the last one of the file
    pub is_last_segment: bool,
}

/// Extra data a symbol decoder may attach to a payload
///
/// A closed set: the orchestrator pattern-matches on the kind and copies
/// only `Macro` blocks into result metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PayloadExtra {
    /// Macro PDF417 control block
    Macro(MacroMetadata),
    /// Free-form diagnostic text from the decoder, never surfaced in results
    Note(String),
}

/// Validated output of one successful symbol decode
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedPayload {
    /// Decoded content as UTF-8 string
    pub text: String,
    /// Raw decoded bytes
    pub raw_bytes: Vec<u8>,
    /// PDF417 security level (0-8) recovered during error correction
    pub ec_level: u8,
    /// Optional extra data attached by the decoder
    pub extra: Option<PayloadExtra>,
}

/// Kind of a metadata entry on a decoded barcode
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum MetadataKey {
    /// Error correction level used by the symbol
    ErrorCorrectionLevel,
    /// Macro PDF417 extra metadata
    Pdf417Extra,
}

/// Value of a metadata entry on a decoded barcode
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MetadataValue {
    /// PDF417 security level (0-8)
    ErrorCorrection(u8),
    /// Macro PDF417 control block
    Macro(MacroMetadata),
}

/// One decoded barcode with its geometry and metadata
#[derive(Debug, Clone, PartialEq)]
pub struct Barcode {
    /// Decoded content as UTF-8 string
    pub text: String,
    /// Raw decoded bytes
    pub raw_bytes: Vec<u8>,
    /// The eight anchor points of the symbol, all resolved
    pub position: [Point; 8],
    /// Symbology tag
    pub format: BarcodeFormat,
    /// Metadata entries keyed by kind
    pub metadata: BTreeMap<MetadataKey, MetadataValue>,
}

impl Barcode {
    /// Create a barcode result with an empty metadata map
    pub fn new(text: String, raw_bytes: Vec<u8>, position: [Point; 8], format: BarcodeFormat) -> Self {
        Self {
            text,
            raw_bytes,
            position,
            format,
            metadata: BTreeMap::new(),
        }
    }

    /// PDF417 security level of this symbol, if recorded
    pub fn ec_level(&self) -> Option<u8> {
        match self.metadata.get(&MetadataKey::ErrorCorrectionLevel) {
            Some(MetadataValue::ErrorCorrection(level)) => Some(*level),
            _ => None,
        }
    }

    /// Macro PDF417 control block of this symbol, if one was attached
    pub fn macro_metadata(&self) -> Option<&MacroMetadata> {
        match self.metadata.get(&MetadataKey::Pdf417Extra) {
            Some(MetadataValue::Macro(block)) => Some(block),
            _ => None,
        }
    }
}
