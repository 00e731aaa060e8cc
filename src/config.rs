//! Run configuration resolved from the command line and environment

use crate::cli::Args;
use crate::dicom::FrameHeader;
use crate::field::{ConversionOptions, OutputType};
use std::net::IpAddr;

/// Settings shared by every file in one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub output_type: OutputType,
    pub invert: bool,
    pub auto_invert: bool,
    pub show: bool,
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub verbose: bool,
    pub dev_hosts: Vec<IpAddr>,
}

impl RunConfig {
    #[must_use]
    pub fn from_args(args: &Args) -> Self {
        Self {
            output_type: args.output_type,
            invert: args.invert,
            auto_invert: args.auto_invert,
            show: args.show,
            width: args.width,
            height: args.height,
            verbose: args.verbose,
            dev_hosts: args.dev_hosts.clone(),
        }
    }

    /// Conversion options for one frame
    ///
    /// An explicit `--invert` always wins; `--auto-invert` only flips
    /// MONOCHROME1 frames.
    #[must_use]
    pub fn conversion_options(&self, header: &FrameHeader) -> ConversionOptions {
        let invert = self.invert || (self.auto_invert && header.suggests_inversion());
        ConversionOptions::new(self.output_type, invert)
    }

    /// Default `tracing` filter directive when `RUST_LOG` is unset
    #[must_use]
    pub fn default_log_filter(&self) -> &'static str {
        if self.verbose { "info" } else { "warn" }
    }
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            output_type: OutputType::Integer,
            invert: false,
            auto_invert: false,
            show: false,
            width: None,
            height: None,
            verbose: false,
            dev_hosts: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dicom::PhotometricInterpretation;
    use crate::types::{BitDepth, Dimensions, TransferSyntax};
    use clap::Parser;

    fn header(pi: PhotometricInterpretation) -> FrameHeader {
        FrameHeader {
            dimensions: Dimensions::new(1, 1),
            bit_depth: BitDepth::new(16, 16),
            photometric_interpretation: pi,
            samples_per_pixel: 1,
            number_of_frames: 1,
            modality: None,
            sop_class: None,
            transfer_syntax: TransferSyntax::new("1.2.840.10008.1.2".into(), "Implicit VR Little Endian".into()),
        }
    }

    #[test]
    fn test_from_args() {
        let args = Args::try_parse_from(["dcmfield", "-t", "float", "-v", "x.dcm"]).unwrap();
        let config = RunConfig::from_args(&args);
        assert_eq!(config.output_type, OutputType::Float);
        assert!(config.verbose);
        assert_eq!(config.default_log_filter(), "info");
        assert_eq!(RunConfig::default().default_log_filter(), "warn");
    }

    #[test]
    fn test_auto_invert_only_for_monochrome1() {
        let config = RunConfig {
            auto_invert: true,
            ..RunConfig::default()
        };
        assert!(config.conversion_options(&header(PhotometricInterpretation::Monochrome1)).invert);
        assert!(!config.conversion_options(&header(PhotometricInterpretation::Monochrome2)).invert);
    }

    #[test]
    fn test_explicit_invert_wins() {
        let config = RunConfig {
            invert: true,
            ..RunConfig::default()
        };
        let options = config.conversion_options(&header(PhotometricInterpretation::Monochrome2));
        assert!(options.invert);
        assert_eq!(options.output_type, OutputType::Integer);
    }
}
