use crate::dicom::FrameHeader;
use crate::field::FieldError;
use thiserror::Error;

/// Error type that preserves the frame header when available
#[derive(Debug, Error)]
pub enum ProcessError {
    /// File could not be opened as DICOM
    #[error("{0}")]
    NotADicomFile(String),

    /// Valid DICOM file but the grayscale frame could not be extracted
    #[error("{0}")]
    ExtractionFailed(String),

    /// Frame extracted, but the sample buffer could not be converted
    #[error("{source}")]
    ConversionFailed {
        header: Box<FrameHeader>,
        #[source]
        source: FieldError,
    },

    /// Field ready but display failed
    #[error("{error}")]
    DisplayFailed {
        header: Box<FrameHeader>,
        error: String,
    },
}

impl ProcessError {
    /// Returns the header if available (for verbose display before error)
    #[must_use]
    pub fn header(&self) -> Option<&FrameHeader> {
        match self {
            ProcessError::ConversionFailed { header, .. }
            | ProcessError::DisplayFailed { header, .. } => Some(header.as_ref()),
            _ => None,
        }
    }
}
