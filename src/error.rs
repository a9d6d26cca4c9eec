use thiserror::Error;

/// Classified decode failure
///
/// The closed set of outcomes this crate produces or forwards; success is
/// the absence of an error. `NotFound` covers both "nothing was located"
/// and "nothing that was located decoded".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// No symbol was found, or no located candidate produced a result
    #[error("no barcode found")]
    NotFound,
    /// A candidate was located but its codeword structure is invalid
    #[error("barcode format invalid")]
    Format,
    /// Error correction failed to validate the payload
    #[error("barcode checksum failed")]
    Checksum,
}
