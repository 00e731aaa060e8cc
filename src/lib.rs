pub mod cli;
pub mod config;
pub mod dicom;
pub mod display;
pub mod display_metadata;
pub mod environment;
pub mod field;
pub mod render;
pub mod types;

// Re-export commonly used functions
pub use display_metadata::print_metadata;
pub use field::{convert, pixel_data_to_array, ConversionOptions, IntensityField, OutputType};
