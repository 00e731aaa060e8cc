//! Sample decoding
//!
//! Lays a flat, row-major buffer of 16-bit detector samples out as a
//! `height x width` field. Samples are always read as unsigned: a stored word
//! of `0xFFFF` becomes 65535, never -1.

use ndarray::Array2;

use super::error::FieldError;
use super::sample::Intensity;

/// Number of samples a `height x width` field holds
///
/// # Errors
///
/// Returns [`FieldError::DimensionOverflow`] if the product overflows `usize`
#[inline]
pub fn expected_len(height: usize, width: usize) -> Result<usize, FieldError> {
    height
        .checked_mul(width)
        .ok_or(FieldError::DimensionOverflow { height, width })
}

/// Decode unsigned 16-bit samples into a `height x width` field
///
/// Element `(row, col)` is `samples[row * width + col]`.
///
/// # Errors
///
/// Returns [`FieldError::DimensionMismatch`] if `samples.len()` is not exactly
/// `height * width`
pub fn decode_samples<T: Intensity>(
    height: usize,
    width: usize,
    samples: &[u16],
) -> Result<Array2<T>, FieldError> {
    check_len(height, width, samples.len())?;

    Ok(Array2::from_shape_fn((height, width), |(row, col)| {
        T::from_sample(samples[row * width + col])
    }))
}

/// Decode signed 16-bit storage words, reinterpreting each as unsigned
///
/// Detector data is frequently handed over in signed 16-bit containers even
/// though the samples themselves are unsigned.
///
/// # Errors
///
/// Same as [`decode_samples`]
pub fn decode_words<T: Intensity>(
    height: usize,
    width: usize,
    words: &[i16],
) -> Result<Array2<T>, FieldError> {
    check_len(height, width, words.len())?;

    Ok(Array2::from_shape_fn((height, width), |(row, col)| {
        let word = words[row * width + col];
        T::from_sample(u16::from_ne_bytes(word.to_ne_bytes()))
    }))
}

fn check_len(height: usize, width: usize, actual: usize) -> Result<(), FieldError> {
    let expected = expected_len(height, width)?;
    if actual != expected {
        return Err(FieldError::DimensionMismatch {
            height,
            width,
            expected,
            actual,
        });
    }
    Ok(())
}
