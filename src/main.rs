use clap::{CommandFactory, Parser};
use dcmfield::cli::Args;
use dcmfield::config::RunConfig;
use dcmfield::dicom::{self, ProcessError};
use dcmfield::display;
use dcmfield::environment::{is_development_system, LocalAddressProbe};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn main() {
    let args = Args::parse();
    let config = RunConfig::from_args(&args);

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.default_log_filter()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    if args.files.is_empty() {
        let _ = Args::command().print_help();
        println!();
        return;
    }

    if is_development_system(&LocalAddressProbe::default(), &config.dev_hosts) {
        info!("running on a development system");
    }

    let multiple_files = args.files.len() > 1;
    let mut any_failed = false;

    for (idx, file_path) in args.files.iter().enumerate() {
        if multiple_files {
            println!("{}", file_path.display());
        }

        if let Err(e) = process_file(file_path, &config) {
            warn!(file = %file_path.display(), error = %e, "processing failed");
            println!("Error: {e}");
            any_failed = true;
        }

        if multiple_files && idx < args.files.len() - 1 {
            println!();
        }
    }

    if any_failed {
        std::process::exit(1);
    }
}

/// Process a single DICOM file
fn process_file(file_path: &std::path::Path, config: &RunConfig) -> Result<(), ProcessError> {
    // Stage 1: Open DICOM file
    let obj = dicom::open_dicom_file(file_path)
        .map_err(|e| ProcessError::NotADicomFile(format!("{e:#}")))?;

    // Stage 2: Extract the first grayscale frame
    let frame = match dicom::extract_grayscale_frame(&obj) {
        Ok(f) => f,
        Err(e) => {
            // Extraction failed - try to get the header for verbose display
            if config.verbose
                && let Ok(header) = dicom::extract_frame_header(&obj) {
                    dcmfield::print_metadata(&header);
                }

            return Err(ProcessError::ExtractionFailed(format!("{e:#}")));
        }
    };

    // Stage 3: Verbose output
    if config.verbose {
        dcmfield::print_metadata(&frame.header);
    }

    // Stage 4: Convert to intensity field
    let options = config.conversion_options(&frame.header);
    let field = frame
        .to_field(&options)
        .map_err(|source| ProcessError::ConversionFailed {
            header: Box::new(frame.header.clone()),
            source,
        })?;

    println!("{}", display::field_summary(&field, options.invert));

    // Stage 5: Display
    if config.show {
        display::print_field(&field, config)
            .map_err(|e| ProcessError::DisplayFailed {
                header: Box::new(frame.header),
                error: format!("{e:#}"),
            })?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::path::Path;

    #[test]
    fn test_missing_file_returns_notadicomfile_error() {
        let result = process_file(Path::new("does-not-exist.dcm"), &RunConfig::default());
        assert_matches::assert_matches!(result, Err(ProcessError::NotADicomFile(_)));
    }

    #[test]
    fn test_text_file_returns_notadicomfile_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "not a dicom file").unwrap();

        let result = process_file(file.path(), &RunConfig::default());
        assert_matches::assert_matches!(result, Err(ProcessError::NotADicomFile(_)));
    }
}
