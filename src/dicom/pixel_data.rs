//! DICOM pixel data extraction
//!
//! Produces the raw sample buffer for the first frame of a grayscale image.
//! Native (uncompressed) pixel data is read straight from the element;
//! encapsulated pixel data goes through the pixel data decoder.

use anyhow::{bail, Context, Result};
use dicom::core::PrimitiveValue;
use dicom::dictionary_std::tags;
use dicom::pixeldata::PixelDecoder;

use super::DicomFile;
use crate::types::{BitDepth, Dimensions, TransferSyntax};

/// Extract the first frame as unsigned 16-bit samples
///
/// 8-bit data is widened; anything past the first frame is dropped.
pub fn extract_samples(
    obj: &DicomFile,
    dimensions: Dimensions,
    bit_depth: BitDepth,
    transfer_syntax: &TransferSyntax,
) -> Result<Vec<u16>> {
    let element = obj.get(tags::PIXEL_DATA).context("Missing pixel data")?;

    let mut samples = match element.value().primitive() {
        // OW words are already in host byte order, whatever the transfer syntax
        Some(PrimitiveValue::U16(words)) if bit_depth.allocated == 16 => words.to_vec(),
        Some(_) => {
            let raw_bytes = element
                .to_bytes()
                .context("Failed to get raw pixel data bytes")?;
            samples_from_bytes(&raw_bytes, bit_depth, transfer_syntax.is_big_endian())?
        }
        None => extract_decoded_samples(obj, bit_depth)?,
    };

    let frame_len = dimensions.pixel_count();
    if samples.len() < frame_len {
        bail!(
            "Truncated pixel data: expected {frame_len} samples for a {dimensions} frame, got {}",
            samples.len()
        );
    }
    samples.truncate(frame_len);

    Ok(samples)
}

/// Samples from bytes laid out as stored in the file
fn samples_from_bytes(bytes: &[u8], bit_depth: BitDepth, big_endian: bool) -> Result<Vec<u16>> {
    match bit_depth.allocated {
        8 => Ok(bytes.iter().map(|&b| u16::from(b)).collect()),
        16 => {
            if !bytes.len().is_multiple_of(2) {
                bail!("Invalid 16-bit pixel data length");
            }

            let read: fn([u8; 2]) -> u16 = if big_endian {
                u16::from_be_bytes
            } else {
                u16::from_le_bytes
            };
            Ok(bytes
                .chunks_exact(2)
                .map(|chunk| read([chunk[0], chunk[1]]))
                .collect())
        }
        other => bail!("Unsupported bits allocated for grayscale: {other}"),
    }
}

fn extract_decoded_samples(obj: &DicomFile, bit_depth: BitDepth) -> Result<Vec<u16>> {
    let decoded = obj
        .decode_pixel_data()
        .context("Failed to decode pixel data")?;

    // Raw decoded bytes, so no modality LUT or VOI is applied
    let data = decoded.data();

    match bit_depth.allocated {
        8 => Ok(data.iter().map(|&b| u16::from(b)).collect()),
        16 => {
            if !data.len().is_multiple_of(2) {
                bail!("Invalid 16-bit pixel data length");
            }

            // Decoded samples are in native byte order
            Ok(data
                .chunks_exact(2)
                .map(|chunk| u16::from_ne_bytes([chunk[0], chunk[1]]))
                .collect())
        }
        other => bail!("Unsupported bits allocated for grayscale: {other}"),
    }
}
