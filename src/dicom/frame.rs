//! Grayscale frame header and samples

use super::photometric::PhotometricInterpretation;
use crate::field::{self, ConversionOptions, FieldError, IntensityField};
use crate::types::{BitDepth, Dimensions, SOPClass, TransferSyntax};

/// Everything about a grayscale image except its samples
#[derive(Debug, Clone, PartialEq)]
pub struct FrameHeader {
    pub dimensions: Dimensions,
    pub bit_depth: BitDepth,
    pub photometric_interpretation: PhotometricInterpretation,
    pub samples_per_pixel: u16,
    pub number_of_frames: u32,

    // Display metadata
    pub modality: Option<String>,
    pub sop_class: Option<SOPClass>,
    pub transfer_syntax: TransferSyntax,
}

impl FrameHeader {
    #[inline(always)]
    #[must_use]
    pub fn rows(&self) -> u16 {
        self.dimensions.rows
    }

    #[inline(always)]
    #[must_use]
    pub fn cols(&self) -> u16 {
        self.dimensions.cols
    }

    #[inline]
    #[must_use]
    pub fn suggests_inversion(&self) -> bool {
        self.photometric_interpretation.suggests_inversion()
    }
}

/// First frame of a grayscale image as a raw sample buffer
#[derive(Debug, Clone, PartialEq)]
pub struct GrayscaleFrame {
    pub header: FrameHeader,
    samples: Vec<u16>,
}

impl GrayscaleFrame {
    /// # Errors
    ///
    /// Returns [`FieldError::DimensionMismatch`] if `samples` does not hold
    /// exactly one frame
    pub fn new(header: FrameHeader, samples: Vec<u16>) -> Result<Self, FieldError> {
        let expected = header.dimensions.pixel_count();
        if samples.len() != expected {
            return Err(FieldError::DimensionMismatch {
                height: usize::from(header.rows()),
                width: usize::from(header.cols()),
                expected,
                actual: samples.len(),
            });
        }

        Ok(Self { header, samples })
    }

    /// Row-major unsigned samples, `rows * cols` long
    #[inline]
    #[must_use]
    pub fn samples(&self) -> &[u16] {
        &self.samples
    }

    /// Convert the samples into an intensity field
    ///
    /// # Errors
    ///
    /// Propagates [`FieldError`] from the conversion
    pub fn to_field(&self, options: &ConversionOptions) -> Result<IntensityField, FieldError> {
        field::convert(
            usize::from(self.header.rows()),
            usize::from(self.header.cols()),
            &self.samples,
            options,
        )
    }
}
