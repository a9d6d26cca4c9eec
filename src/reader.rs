//! Decode orchestration: drives the locate -> estimate -> decode loop over
//! all candidate regions and applies the single/multi failure policy.

use crate::error::DecodeError;
use crate::models::{
    Barcode, BarcodeFormat, BitMatrix, CandidateAnchors, DecodedPayload, MetadataKey,
    MetadataValue, PayloadExtra, Point,
};
use crate::width::{max_codeword_width, min_codeword_width};

/// Pass-through hints for the region locator; opaque to the orchestrator
#[derive(Debug, Clone, Copy, Default)]
pub struct DecodeOptions {
    /// Spend more time searching for hard-to-find symbols
    pub try_harder: bool,
    /// Assume the symbol fills the frame and skip the full-image search
    pub pure_barcode: bool,
}

/// Everything the locator found in one image: the shared bit matrix and the
/// anchor octet of each candidate symbol, in discovery order
#[derive(Debug, Clone)]
pub struct Detection {
    /// Binarized matrix shared read-only by all candidates
    pub bits: BitMatrix,
    /// One anchor octet per candidate, in discovery order
    pub candidates: Vec<CandidateAnchors>,
}

/// Locates candidate symbol regions in a binarized image
pub trait RegionLocator {
    /// Find candidate regions.
    ///
    /// Candidates must come back in a deterministic order, and anchors 4-7
    /// of every candidate intended for decoding must be resolved.
    fn detect(
        &self,
        image: &BitMatrix,
        options: &DecodeOptions,
        multiple: bool,
    ) -> Result<Detection, DecodeError>;
}

/// Decodes the codeword region of one located candidate
pub trait SymbolDecoder {
    /// Recover a validated payload from the region bounded by the four
    /// corner anchors.
    ///
    /// Must not mutate the shared bit matrix; the orchestrator calls this
    /// repeatedly with different anchor sets against the same matrix.
    #[allow(clippy::too_many_arguments)]
    fn decode_region(
        &self,
        bits: &BitMatrix,
        top_left: Point,
        bottom_left: Point,
        top_right: Point,
        bottom_right: Point,
        min_codeword_width: i32,
        max_codeword_width: i32,
    ) -> Result<DecodedPayload, DecodeError>;
}

/// What the orchestrator does after one candidate attempt
#[derive(Debug, PartialEq, Eq)]
enum Step {
    /// Try the next candidate
    Continue,
    /// Stop and return what has been collected
    Stop,
    /// Stop and report this failure
    Fail(DecodeError),
}

/// The continue/stop/fail decision as a pure function of the mode and the
/// candidate outcome. Single mode stops on the first outcome either way;
/// multi mode always moves on.
fn after_candidate(multiple: bool, outcome: Result<(), DecodeError>) -> Step {
    match (multiple, outcome) {
        (true, _) => Step::Continue,
        (false, Ok(())) => Step::Stop,
        (false, Err(err)) => Step::Fail(err),
    }
}

/// PDF417 reader: wires a region locator and a symbol decoder together and
/// aggregates their per-candidate outcomes into final results
pub struct Reader<L, D> {
    locator: L,
    decoder: D,
}

impl<L: RegionLocator, D: SymbolDecoder> Reader<L, D> {
    /// Create a reader from its two collaborators
    pub fn new(locator: L, decoder: D) -> Self {
        Self { locator, decoder }
    }

    /// Decode the single barcode expected in the image.
    ///
    /// First success wins and first failure is fatal: the first candidate's
    /// outcome is the answer, remaining candidates are never attempted.
    pub fn decode(
        &self,
        image: &BitMatrix,
        options: &DecodeOptions,
    ) -> Result<Barcode, DecodeError> {
        // Single mode returns a non-empty list or an error, never both.
        let results = self.do_decode(image, options, false)?;
        results.into_iter().next().ok_or(DecodeError::NotFound)
    }

    /// Decode every readable barcode in the image.
    ///
    /// Best effort: an unreadable symbol does not suppress the others, and
    /// any propagated format or checksum failure collapses to `NotFound`,
    /// the only failure a multi-result caller can act on.
    pub fn decode_multiple(
        &self,
        image: &BitMatrix,
        options: &DecodeOptions,
    ) -> Result<Vec<Barcode>, DecodeError> {
        self.do_decode(image, options, true).map_err(|err| match err {
            DecodeError::Format | DecodeError::Checksum => DecodeError::NotFound,
            DecodeError::NotFound => DecodeError::NotFound,
        })
    }

    fn do_decode(
        &self,
        image: &BitMatrix,
        options: &DecodeOptions,
        multiple: bool,
    ) -> Result<Vec<Barcode>, DecodeError> {
        let detection = self.locator.detect(image, options, multiple)?;

        let mut results = Vec::new();
        for (idx, anchors) in detection.candidates.iter().enumerate() {
            let [p4, p5, p6, p7] = region_corners(anchors);
            let outcome = self.decoder.decode_region(
                &detection.bits,
                p4,
                p5,
                p6,
                p7,
                min_codeword_width(anchors),
                max_codeword_width(anchors),
            );

            if cfg!(debug_assertions) && crate::debug::debug_enabled() {
                eprintln!(
                    "DEBUG: candidate {} -> {}",
                    idx,
                    match &outcome {
                        Ok(payload) => format!("decoded {} bytes", payload.raw_bytes.len()),
                        Err(err) => format!("failed: {}", err),
                    }
                );
            }

            let status = outcome.as_ref().map(|_| ()).map_err(|err| *err);
            if let Ok(payload) = outcome {
                results.push(assemble(payload, anchors));
            }
            match after_candidate(multiple, status) {
                Step::Continue => {}
                Step::Stop => return Ok(results),
                Step::Fail(err) => return Err(err),
            }
        }

        if results.is_empty() {
            Err(DecodeError::NotFound)
        } else {
            Ok(results)
        }
    }
}

/// The four codeword-region corners of a candidate. Anchors 4-7 are
/// required by the locator contract; an absent one is a locator defect.
fn region_corners(anchors: &CandidateAnchors) -> [Point; 4] {
    [4, 5, 6, 7]
        .map(|i| anchors[i].expect("locator contract: candidate anchors 4-7 must be resolved"))
}

/// Build the aggregated result for one successfully decoded candidate.
/// Every anchor of a candidate that decoded is resolved, so the positions
/// copy over as plain points.
fn assemble(payload: DecodedPayload, anchors: &CandidateAnchors) -> Barcode {
    let position =
        anchors.map(|p| p.expect("locator contract: decoded candidate anchors must be resolved"));

    let mut barcode = Barcode::new(
        payload.text,
        payload.raw_bytes,
        position,
        BarcodeFormat::Pdf417,
    );
    barcode.metadata.insert(
        MetadataKey::ErrorCorrectionLevel,
        MetadataValue::ErrorCorrection(payload.ec_level),
    );
    if let Some(PayloadExtra::Macro(block)) = payload.extra {
        barcode
            .metadata
            .insert(MetadataKey::Pdf417Extra, MetadataValue::Macro(block));
    }
    barcode
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MacroMetadata;

    #[test]
    fn test_after_candidate_single_mode() {
        assert_eq!(after_candidate(false, Ok(())), Step::Stop);
        assert_eq!(
            after_candidate(false, Err(DecodeError::Checksum)),
            Step::Fail(DecodeError::Checksum)
        );
        assert_eq!(
            after_candidate(false, Err(DecodeError::Format)),
            Step::Fail(DecodeError::Format)
        );
    }

    #[test]
    fn test_after_candidate_multi_mode() {
        assert_eq!(after_candidate(true, Ok(())), Step::Continue);
        assert_eq!(
            after_candidate(true, Err(DecodeError::Format)),
            Step::Continue
        );
    }

    fn resolved_octet() -> CandidateAnchors {
        std::array::from_fn(|i| Some(Point::new(i as f32 * 10.0, 5.0)))
    }

    #[test]
    fn test_assemble_without_extra() {
        let payload = DecodedPayload {
            text: "abc".into(),
            raw_bytes: b"abc".to_vec(),
            ec_level: 2,
            extra: None,
        };
        let barcode = assemble(payload, &resolved_octet());

        assert_eq!(barcode.text, "abc");
        assert_eq!(barcode.format, BarcodeFormat::Pdf417);
        assert_eq!(barcode.ec_level(), Some(2));
        assert!(barcode.macro_metadata().is_none());
        assert_eq!(barcode.metadata.len(), 1);
        assert_eq!(barcode.position[3], Point::new(30.0, 5.0));
    }

    #[test]
    fn test_assemble_attaches_only_macro_extra() {
        let block = MacroMetadata {
            segment_index: 0,
            file_id: "42".into(),
            optional_data: Vec::new(),
            is_last_segment: false,
        };
        let payload = DecodedPayload {
            text: String::new(),
            raw_bytes: Vec::new(),
            ec_level: 0,
            extra: Some(PayloadExtra::Macro(block.clone())),
        };
        let barcode = assemble(payload, &resolved_octet());
        assert_eq!(barcode.macro_metadata(), Some(&block));

        // A non-macro extra kind never reaches the metadata map.
        let payload = DecodedPayload {
            text: String::new(),
            raw_bytes: Vec::new(),
            ec_level: 0,
            extra: Some(PayloadExtra::Note("row 3 resynced".into())),
        };
        let barcode = assemble(payload, &resolved_octet());
        assert!(barcode.macro_metadata().is_none());
        assert_eq!(barcode.metadata.len(), 1);
    }

    #[test]
    #[should_panic(expected = "locator contract")]
    fn test_region_corners_panics_on_absent_anchor() {
        let mut anchors = resolved_octet();
        anchors[5] = None;
        region_corners(&anchors);
    }
}
