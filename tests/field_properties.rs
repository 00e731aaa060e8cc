use dcmfield::field::{
    convert, decode_samples, invert_in_place, min_max, pixel_data_to_array, ConversionOptions,
    FieldError, IntensityField, OutputType,
};
use ndarray::{array, Array2};

fn argmin<T: PartialOrd + Copy>(field: &Array2<T>) -> (usize, usize) {
    let mut best = ((0, 0), field[[0, 0]]);
    for (idx, &v) in field.indexed_iter() {
        if v < best.1 {
            best = (idx, v);
        }
    }
    best.0
}

fn argmax<T: PartialOrd + Copy>(field: &Array2<T>) -> (usize, usize) {
    let mut best = ((0, 0), field[[0, 0]]);
    for (idx, &v) in field.indexed_iter() {
        if v > best.1 {
            best = (idx, v);
        }
    }
    best.0
}

#[test]
fn scenario_2x2_without_inversion() {
    let field = pixel_data_to_array::<i32>(2, 2, &[0, 100, 65535, 50], false).unwrap();
    assert_eq!(field, array![[0, 100], [65535, 50]]);
}

#[test]
fn scenario_2x2_with_inversion() {
    let field = pixel_data_to_array::<i32>(2, 2, &[0, 100, 65535, 50], true).unwrap();
    assert_eq!(field, array![[65535, 65435], [0, 65485]]);
}

#[test]
fn scenario_1x3_with_inversion() {
    let field = pixel_data_to_array::<f32>(1, 3, &[10, 20, 30], true).unwrap();
    assert_eq!(field, array![[20.0, 10.0, 0.0]]);
}

#[test]
fn integer_and_float_outputs_agree() {
    let samples = [3, 65535, 0, 1234, 40000, 7];
    for invert in [false, true] {
        let ints = convert(2, 3, &samples, &ConversionOptions::new(OutputType::Integer, invert)).unwrap();
        let floats = convert(2, 3, &samples, &ConversionOptions::new(OutputType::Float, invert)).unwrap();
        assert!(matches!(ints, IntensityField::Integer(_)));
        assert!(matches!(floats, IntensityField::Float(_)));
        assert_eq!(ints.values().collect::<Vec<_>>(), floats.values().collect::<Vec<_>>());
    }
}

#[test]
fn double_inversion_is_identity_when_min_is_zero() {
    let original = decode_samples::<i32>(2, 3, &[0, 5, 900, 65535, 42, 17]).unwrap();
    let mut field = original.clone();

    invert_in_place(&mut field);
    invert_in_place(&mut field);

    assert_eq!(field, original);
}

#[test]
fn double_inversion_is_not_identity_in_general() {
    let original = decode_samples::<i64>(1, 3, &[10, 20, 30]).unwrap();
    let mut field = original.clone();

    let first = invert_in_place(&mut field).unwrap();
    let second = invert_in_place(&mut field).unwrap();

    assert_ne!(field, original);
    // v -> max1 - v -> max2 - (max1 - v)
    assert_eq!(first.max, 30);
    assert_eq!(second.max, 20);
    for (&got, &v) in field.iter().zip(original.iter()) {
        assert_eq!(got, second.max - (first.max - v));
        assert_eq!(got, v - first.min);
    }
}

#[test]
fn inversion_swaps_extremes() {
    let original = decode_samples::<f32>(3, 3, &[500, 12, 9000, 77, 4000, 3, 8000, 650, 1]).unwrap();
    let mut inverted = original.clone();
    let range = invert_in_place(&mut inverted).unwrap();

    assert_eq!(argmax(&inverted), argmin(&original));
    assert_eq!(argmin(&inverted), argmax(&original));

    let new_range = min_max(&inverted).unwrap();
    assert_eq!(new_range.min, 0.0);
    assert_eq!(new_range.max, range.max - range.min);
}

#[test]
fn empty_field_inversion_is_a_no_op() {
    let field = pixel_data_to_array::<i32>(0, 7, &[], true).unwrap();
    assert_eq!(field.dim(), (0, 7));
}

#[test]
fn dimension_mismatch_is_an_error() {
    let result = pixel_data_to_array::<i32>(3, 3, &[0; 8], true);
    assert!(matches!(result, Err(FieldError::DimensionMismatch { .. })));

    let result = pixel_data_to_array::<f32>(1, 1, &[0; 2], false);
    assert!(matches!(result, Err(FieldError::DimensionMismatch { .. })));
}
