//! DICOM file parsing and grayscale frame extraction
//!
//! This module is the upstream side of the field conversion: it opens a DICOM
//! file, reads the image header and hands over the first frame as a flat
//! buffer of unsigned 16-bit samples.

mod error;
mod frame;
mod parser;
mod photometric;
mod pixel_data;
mod validation;

// Re-export public API
pub use error::ProcessError;
pub use frame::{FrameHeader, GrayscaleFrame};
pub use photometric::PhotometricInterpretation;

use anyhow::{Context, Result};
use dicom::object::{
    open_file,
    FileDicomObject,
    InMemDicomObject,
    StandardDataDictionary
};
use std::path::Path;
use tracing::debug;

/// A DICOM file held fully in memory
pub(crate) type DicomFile = FileDicomObject<InMemDicomObject<StandardDataDictionary>>;

/// Open and parse a DICOM file
pub fn open_dicom_file(file_path: &Path) -> Result<DicomFile> {
    open_file(file_path)
        .with_context(|| format!("Failed to open DICOM file: {}", file_path.display()))
}

/// Read the image header without touching pixel data
///
/// Also used to recover partial metadata after a failed extraction.
pub fn extract_frame_header(
    obj: &DicomFile,
) -> Result<FrameHeader> {
    let error_context = parser::ErrorContext::from(obj);

    let dimensions = parser::extract_dimensions(obj, &error_context)?;
    let bit_depth = parser::extract_bit_depth(obj, &error_context)?;

    Ok(FrameHeader {
        dimensions,
        bit_depth,
        photometric_interpretation: parser::extract_photometric_interpretation(obj),
        samples_per_pixel: parser::extract_samples_per_pixel(obj),
        number_of_frames: parser::extract_number_of_frames(obj),
        modality: error_context.modality,
        sop_class: error_context.sop_class,
        transfer_syntax: parser::extract_transfer_syntax(obj),
    })
}

/// Extract the first grayscale frame as a raw sample buffer
pub fn extract_grayscale_frame(
    obj: &DicomFile,
) -> Result<GrayscaleFrame> {
    let header = extract_frame_header(obj)?;

    validation::validate_header(
        &header.photometric_interpretation,
        header.samples_per_pixel,
        &header.bit_depth,
    )?;

    let samples = pixel_data::extract_samples(
        obj,
        header.dimensions,
        header.bit_depth,
        &header.transfer_syntax,
    )?;

    debug!(
        dimensions = %header.dimensions,
        bit_depth = %header.bit_depth,
        frames = header.number_of_frames,
        "extracted grayscale frame"
    );

    Ok(GrayscaleFrame::new(header, samples)?)
}
