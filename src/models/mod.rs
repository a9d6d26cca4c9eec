pub mod barcode;
pub mod matrix;
pub mod point;

pub use barcode::{
    Barcode, BarcodeFormat, DecodedPayload, MacroMetadata, MetadataKey, MetadataValue, PayloadExtra,
};
pub use matrix::BitMatrix;
pub use point::{CandidateAnchors, Point};
