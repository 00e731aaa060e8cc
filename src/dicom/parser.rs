use super::photometric::PhotometricInterpretation;
use super::DicomFile;
use crate::types::{BitDepth, Dimensions, SOPClass, TransferSyntax};
use anyhow::{Context, Result};
use dicom::core::dictionary::UidDictionary;
use dicom::dictionary_std::sop_class;
use dicom::dictionary_std::tags;
use dicom::encoding::TransferSyntaxIndex;
use dicom::transfer_syntax::TransferSyntaxRegistry;

/// Partial metadata for error message context
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    pub modality: Option<String>,
    pub sop_class: Option<SOPClass>,
}

impl ErrorContext {
    pub fn format_error(&self, tag_name: &str) -> String {
        let mut parts = Vec::new();

        if let Some(modality) = &self.modality {
            parts.push(format!("Modality: {modality}"));
        }

        if let Some(sc) = &self.sop_class {
            parts.push(format!("SOP Class: {sc}"));
        }

        if parts.is_empty() {
            format!("Missing or invalid {tag_name} tag")
        } else {
            format!(
                "Missing or invalid {tag_name} tag - this may be a non-image DICOM file ({})",
                parts.join(", ")
            )
        }
    }
}

impl From<&DicomFile> for ErrorContext {
    fn from(obj: &DicomFile) -> Self {
        ErrorContext {
            modality: extract_modality(obj),
            sop_class: extract_sop_class(obj),
        }
    }
}

pub fn extract_dimensions(obj: &DicomFile, error_context: &ErrorContext) -> Result<Dimensions> {
    let rows = obj
        .get(tags::ROWS)
        .and_then(|e| e.to_int::<u16>().ok())
        .with_context(|| error_context.format_error("Rows"))?;

    let cols = obj
        .get(tags::COLUMNS)
        .and_then(|e| e.to_int::<u16>().ok())
        .with_context(|| error_context.format_error("Columns"))?;

    Ok(Dimensions::new(rows, cols))
}

pub fn extract_bit_depth(obj: &DicomFile, error_context: &ErrorContext) -> Result<BitDepth> {
    let allocated = obj
        .get(tags::BITS_ALLOCATED)
        .and_then(|e| e.to_int::<u16>().ok())
        .with_context(|| error_context.format_error("Bits Allocated"))?;

    // Bits Stored is type 1 but often missing from hand-built files
    let stored = obj
        .get(tags::BITS_STORED)
        .and_then(|e| e.to_int::<u16>().ok())
        .unwrap_or(allocated);

    Ok(BitDepth::new(allocated, stored))
}

#[inline]
pub fn extract_number_of_frames(obj: &DicomFile) -> u32 {
    obj.get(tags::NUMBER_OF_FRAMES)
        .and_then(|e| e.to_int::<u32>().ok())
        .unwrap_or(1)
}

#[inline]
pub fn extract_samples_per_pixel(obj: &DicomFile) -> u16 {
    obj.get(tags::SAMPLES_PER_PIXEL)
        .and_then(|e| e.to_int::<u16>().ok())
        .unwrap_or(1)
}

/// Photometric interpretation, MONOCHROME2 when absent
pub fn extract_photometric_interpretation(obj: &DicomFile) -> PhotometricInterpretation {
    obj.get(tags::PHOTOMETRIC_INTERPRETATION)
        .and_then(|e| e.value().to_str().ok())
        .and_then(|s| s.parse().ok())
        .unwrap_or(PhotometricInterpretation::Monochrome2)
}

pub fn extract_modality(obj: &DicomFile) -> Option<String> {
    obj.get(tags::MODALITY)
        .and_then(|e| e.value().to_str().ok())
        .map(|s| s.trim().to_string())
}

pub fn extract_transfer_syntax(obj: &DicomFile) -> TransferSyntax {
    let uid = obj.meta().transfer_syntax().to_string();
    let name = TransferSyntaxRegistry
        .get(&uid)
        .map_or_else(|| "Unknown".to_string(), |ts| ts.name().to_string());

    TransferSyntax::new(uid, name)
}

pub fn extract_sop_class(obj: &DicomFile) -> Option<SOPClass> {
    obj.get(tags::SOP_CLASS_UID)
        .and_then(|e| e.value().to_str().ok())
        .and_then(|uid| {
            let uid = uid.trim_end_matches('\0').trim();
            sop_class::StandardSopClassDictionary
                .by_uid(uid)
                .map(|entry| SOPClass::new(uid.to_string(), entry.name.to_string()))
        })
}
