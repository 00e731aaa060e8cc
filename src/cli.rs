use crate::field::OutputType;
use clap::Parser;
use std::net::IpAddr;
use std::path::PathBuf;

/// Convert DICOM grayscale frames into intensity fields
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// DICOM file path(s) to convert
    #[arg(value_name = "FILE")]
    pub files: Vec<PathBuf>,

    /// Invert intensities about the observed min/max
    #[arg(short, long)]
    pub invert: bool,

    /// Invert MONOCHROME1 images
    #[arg(long)]
    pub auto_invert: bool,

    /// Numeric type of the field
    #[arg(short = 't', long, value_enum, default_value_t = OutputType::Integer)]
    pub output_type: OutputType,

    /// Render the field in the terminal
    #[arg(short, long)]
    pub show: bool,

    /// Output width in terminal columns
    #[arg(short = 'W', long)]
    pub width: Option<u32>,

    /// Output height in terminal rows
    #[arg(short = 'H', long)]
    pub height: Option<u32>,

    /// Show DICOM metadata
    #[arg(short, long)]
    pub verbose: bool,

    /// Addresses of development machines
    #[arg(long = "dev-host", value_name = "IP", env = "DCMFIELD_DEV_HOSTS", value_delimiter = ',')]
    pub dev_hosts: Vec<IpAddr>,
}
