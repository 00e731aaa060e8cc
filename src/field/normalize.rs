//! Intensity inversion
//!
//! Remaps a field about its own observed range (`v -> max - v`), so the
//! brightest sample becomes 0 and the darkest becomes `max - min`. This is
//! not a fixed-bit-depth negative: the range comes from the data.

use ndarray::{Array2, ArrayBase, Data, Ix2};
use tracing::debug;

use super::sample::Intensity;

/// Observed dynamic range of a field
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntensityRange<T> {
    pub min: T,
    pub max: T,
}

/// Scan every element for the minimum and maximum value
///
/// Returns `None` for an empty field.
#[must_use]
pub fn min_max<T, S>(field: &ArrayBase<S, Ix2>) -> Option<IntensityRange<T>>
where
    T: Intensity,
    S: Data<Elem = T>,
{
    let mut values = field.iter().copied();
    let first = values.next()?;

    let (min, max) = values.fold((first, first), |(min, max), v| {
        (if v < min { v } else { min }, if v > max { v } else { max })
    });

    Some(IntensityRange { min, max })
}

/// Invert `field` in place about its observed range
///
/// Returns the range the inversion was computed from, or `None` when the
/// field is empty and was left untouched.
pub fn invert_in_place<T: Intensity>(field: &mut Array2<T>) -> Option<IntensityRange<T>> {
    let Some(range) = min_max(&*field) else {
        debug!(shape = ?field.dim(), "skipping inversion of empty field");
        return None;
    };

    let max = range.max;
    field.mapv_inplace(|v| max - v);
    Some(range)
}

/// Optionally invert a decoded field
///
/// With `invert == false` the field is returned as is.
#[must_use]
pub fn normalize<T: Intensity>(mut field: Array2<T>, invert: bool) -> Array2<T> {
    if invert {
        invert_in_place(&mut field);
    }
    field
}
