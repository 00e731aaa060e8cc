use anyhow::{bail, Result};
use crate::dicom::PhotometricInterpretation;
use crate::types::BitDepth;

#[inline]
pub fn validate_grayscale(
    photometric_interpretation: &PhotometricInterpretation,
    samples_per_pixel: u16,
) -> Result<()> {
    if !photometric_interpretation.is_grayscale() {
        bail!(
            "Unsupported photometric interpretation {photometric_interpretation} (expected MONOCHROME1 or MONOCHROME2)"
        );
    }

    if samples_per_pixel != 1 {
        bail!(
            "Inconsistent photometric interpretation {photometric_interpretation} with samples per pixel {samples_per_pixel}"
        );
    }

    Ok(())
}

#[inline]
pub fn validate_bit_depth(bit_depth: &BitDepth) -> Result<()> {
    if !matches!(bit_depth.allocated, 8 | 16) {
        bail!(
            "Unsupported bits allocated: {} (expected 8 or 16)",
            bit_depth.allocated
        );
    }

    if !bit_depth.is_valid() {
        bail!("Inconsistent bit depth: {bit_depth}");
    }

    Ok(())
}

pub fn validate_header(
    photometric_interpretation: &PhotometricInterpretation,
    samples_per_pixel: u16,
    bit_depth: &BitDepth,
) -> Result<()> {
    validate_grayscale(photometric_interpretation, samples_per_pixel)?;
    validate_bit_depth(bit_depth)?;
    Ok(())
}
