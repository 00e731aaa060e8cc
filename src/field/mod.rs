//! Intensity fields
//!
//! Converts a raw buffer of unsigned 16-bit detector samples into a
//! two-dimensional intensity array, optionally inverted about the image's own
//! observed range. Decoding always runs; inversion only on request.

mod decode;
mod error;
mod normalize;
mod sample;

pub use decode::{decode_samples, decode_words, expected_len};
pub use error::FieldError;
pub use normalize::{invert_in_place, min_max, normalize, IntensityRange};
pub use sample::Intensity;

use clap::ValueEnum;
use ndarray::Array2;
use std::fmt;

/// Numeric type of the produced field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputType {
    /// 32-bit signed integers
    #[default]
    Integer,
    /// 32-bit floats
    Float,
}

impl fmt::Display for OutputType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer => write!(f, "integer"),
            Self::Float => write!(f, "float"),
        }
    }
}

/// How a sample buffer is turned into a field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ConversionOptions {
    pub output_type: OutputType,
    pub invert: bool,
}

impl ConversionOptions {
    #[must_use]
    pub fn new(output_type: OutputType, invert: bool) -> Self {
        Self { output_type, invert }
    }
}

/// Decode `samples` into a `height x width` field and optionally invert it
///
/// # Errors
///
/// Returns [`FieldError::DimensionMismatch`] if `samples.len() != height * width`
pub fn pixel_data_to_array<T: Intensity>(
    height: usize,
    width: usize,
    samples: &[u16],
    invert: bool,
) -> Result<Array2<T>, FieldError> {
    let field = decode_samples(height, width, samples)?;
    Ok(normalize(field, invert))
}

/// A decoded field whose numeric type was chosen at runtime
#[derive(Debug, Clone, PartialEq)]
pub enum IntensityField {
    Integer(Array2<i32>),
    Float(Array2<f32>),
}

/// Convert with the numeric type selected by `options`
///
/// # Errors
///
/// Same as [`pixel_data_to_array`]
pub fn convert(
    height: usize,
    width: usize,
    samples: &[u16],
    options: &ConversionOptions,
) -> Result<IntensityField, FieldError> {
    Ok(match options.output_type {
        OutputType::Integer => {
            IntensityField::Integer(pixel_data_to_array(height, width, samples, options.invert)?)
        }
        OutputType::Float => {
            IntensityField::Float(pixel_data_to_array(height, width, samples, options.invert)?)
        }
    })
}

impl IntensityField {
    /// `(height, width)`
    #[must_use]
    pub fn dim(&self) -> (usize, usize) {
        match self {
            Self::Integer(a) => a.dim(),
            Self::Float(a) => a.dim(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Integer(a) => a.is_empty(),
            Self::Float(a) => a.is_empty(),
        }
    }

    #[must_use]
    pub fn output_type(&self) -> OutputType {
        match self {
            Self::Integer(_) => OutputType::Integer,
            Self::Float(_) => OutputType::Float,
        }
    }

    /// Value at `(row, col)`, widened to `f64`
    #[must_use]
    pub fn value(&self, row: usize, col: usize) -> Option<f64> {
        match self {
            Self::Integer(a) => a.get((row, col)).map(|&v| v.to_f64()),
            Self::Float(a) => a.get((row, col)).map(|&v| v.to_f64()),
        }
    }

    /// Row-major values widened to `f64`
    pub fn values(&self) -> Box<dyn Iterator<Item = f64> + '_> {
        match self {
            Self::Integer(a) => Box::new(a.iter().map(|&v| v.to_f64())),
            Self::Float(a) => Box::new(a.iter().map(|&v| v.to_f64())),
        }
    }

    /// Summary statistics, `None` for an empty field
    #[must_use]
    pub fn stats(&self) -> Option<FieldStats> {
        match self {
            Self::Integer(a) => FieldStats::from_array(a),
            Self::Float(a) => FieldStats::from_array(a),
        }
    }
}

/// Minimum, maximum and mean of a field
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldStats {
    pub min: f64,
    pub max: f64,
    pub mean: f64,
}

impl FieldStats {
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn from_array<T: Intensity>(field: &Array2<T>) -> Option<Self> {
        let range = min_max(field)?;
        let sum: f64 = field.iter().map(|&v| v.to_f64()).sum();

        Some(Self {
            min: range.min.to_f64(),
            max: range.max.to_f64(),
            mean: sum / field.len() as f64,
        })
    }

    #[inline]
    #[must_use]
    pub fn range(&self) -> f64 {
        self.max - self.min
    }
}

impl fmt::Display for FieldStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "min={min}, max={max}, mean={mean:.2}",
            min = self.min,
            max = self.max,
            mean = self.mean
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use assert_matches::assert_matches;
    use ndarray::array;

    #[test]
    fn test_convert_integer() {
        let options = ConversionOptions::new(OutputType::Integer, false);
        let field = convert(2, 2, &[0, 100, 65535, 50], &options).unwrap();
        assert_eq!(field, IntensityField::Integer(array![[0, 100], [65535, 50]]));
        assert_eq!(field.output_type(), OutputType::Integer);
    }

    #[test]
    fn test_convert_float_inverted() {
        let options = ConversionOptions::new(OutputType::Float, true);
        let field = convert(2, 2, &[0, 100, 65535, 50], &options).unwrap();
        assert_eq!(
            field,
            IntensityField::Float(array![[65535.0, 65435.0], [0.0, 65485.0]])
        );
    }

    #[test]
    fn test_convert_reports_mismatch() {
        let result = convert(2, 3, &[1, 2, 3], &ConversionOptions::default());
        assert_matches!(result, Err(FieldError::DimensionMismatch { expected: 6, actual: 3, .. }));
    }

    #[test]
    fn test_value_accessor() {
        let field = convert(1, 3, &[10, 20, 30], &ConversionOptions::default()).unwrap();
        assert_eq!(field.dim(), (1, 3));
        assert_eq!(field.value(0, 2), Some(30.0));
        assert_eq!(field.value(1, 0), None);
        assert_eq!(field.values().collect::<Vec<_>>(), vec![10.0, 20.0, 30.0]);
    }

    #[test]
    fn test_stats() {
        let field = convert(1, 4, &[10, 20, 30, 40], &ConversionOptions::default()).unwrap();
        let stats = field.stats().unwrap();
        assert_relative_eq!(stats.min, 10.0);
        assert_relative_eq!(stats.max, 40.0);
        assert_relative_eq!(stats.mean, 25.0);
        assert_relative_eq!(stats.range(), 30.0);
        assert_eq!(stats.to_string(), "min=10, max=40, mean=25.00");
    }

    #[test]
    fn test_stats_empty() {
        let field = convert(0, 0, &[], &ConversionOptions::new(OutputType::Float, true)).unwrap();
        assert!(field.is_empty());
        assert_eq!(field.stats(), None);
    }

    #[test]
    fn test_output_type_display() {
        assert_eq!(OutputType::Integer.to_string(), "integer");
        assert_eq!(OutputType::Float.to_string(), "float");
        assert_eq!(OutputType::default(), OutputType::Integer);
    }
}
