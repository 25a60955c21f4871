use approx::assert_abs_diff_eq;
use morph_chart::ChartError;
use morph_chart::core::{map_to_points, sample_range};

#[test]
fn two_samples_span_full_surface_without_padding() {
    let points = map_to_points(&[1.0, 2.0], 100.0, 100.0, 0.0).expect("map");
    assert_eq!(points.len(), 2);

    // min=1 sits on the baseline, max=2 on the top edge.
    assert_abs_diff_eq!(points[0].x, 0.0, epsilon = 1e-9);
    assert_abs_diff_eq!(points[0].y, 100.0, epsilon = 1e-9);
    assert_abs_diff_eq!(points[1].x, 100.0, epsilon = 1e-9);
    assert_abs_diff_eq!(points[1].y, 0.0, epsilon = 1e-9);
}

#[test]
fn padding_insets_both_axes() {
    let points = map_to_points(&[0.0, 5.0, 10.0], 500.0, 300.0, 50.0).expect("map");

    assert_abs_diff_eq!(points[0].x, 50.0, epsilon = 1e-9);
    assert_abs_diff_eq!(points[1].x, 250.0, epsilon = 1e-9);
    assert_abs_diff_eq!(points[2].x, 450.0, epsilon = 1e-9);

    assert_abs_diff_eq!(points[0].y, 250.0, epsilon = 1e-9);
    assert_abs_diff_eq!(points[1].y, 150.0, epsilon = 1e-9);
    assert_abs_diff_eq!(points[2].y, 50.0, epsilon = 1e-9);
}

#[test]
fn negative_values_stay_inside_drawable_area() {
    let samples = [-200.0, 150.0, -37.0, 199.0];
    let points = map_to_points(&samples, 640.0, 480.0, 20.0).expect("map");

    for point in &points {
        assert!((20.0..=620.0).contains(&point.x), "x out of bounds: {point:?}");
        assert!((20.0 - 1e-9..=460.0 + 1e-9).contains(&point.y), "y out of bounds: {point:?}");
    }
    assert_abs_diff_eq!(points[0].y, 460.0, epsilon = 1e-9);
    assert_abs_diff_eq!(points[3].y, 20.0, epsilon = 1e-9);
}

#[test]
fn single_sample_sits_at_left_padding_on_baseline() {
    let points = map_to_points(&[42.0], 300.0, 200.0, 10.0).expect("map");
    assert_eq!(points.len(), 1);
    assert_abs_diff_eq!(points[0].x, 10.0, epsilon = 1e-9);
    assert_abs_diff_eq!(points[0].y, 190.0, epsilon = 1e-9);
}

#[test]
fn constant_series_lies_flat_on_baseline() {
    let points = map_to_points(&[3.0, 3.0, 3.0, 3.0], 400.0, 100.0, 5.0).expect("map");
    for point in &points {
        assert!(point.y.is_finite());
        assert_abs_diff_eq!(point.y, 95.0, epsilon = 1e-9);
    }
}

#[test]
fn surface_smaller_than_padding_is_degenerate_but_finite() {
    let points = map_to_points(&[1.0, 4.0, 2.0], 40.0, 30.0, 25.0).expect("map");
    assert_eq!(points.len(), 3);
    for point in &points {
        assert!(point.is_finite());
    }
}

#[test]
fn empty_samples_are_rejected() {
    let err = map_to_points(&[], 100.0, 100.0, 0.0).expect_err("empty must fail");
    assert!(matches!(err, ChartError::InvalidInput(_)));

    let err = sample_range(&[]).expect_err("empty range must fail");
    assert!(matches!(err, ChartError::InvalidInput(_)));
}

#[test]
fn non_finite_samples_are_rejected() {
    for bad in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
        let err = map_to_points(&[1.0, bad], 100.0, 100.0, 0.0).expect_err("must fail");
        assert!(matches!(err, ChartError::InvalidInput(_)));
    }
}

#[test]
fn extreme_finite_range_stays_inside_surface() {
    let points = map_to_points(&[-1e308, 0.0, 1e308], 100.0, 100.0, 0.0).expect("map");

    assert_abs_diff_eq!(points[0].y, 100.0, epsilon = 1e-9);
    assert_abs_diff_eq!(points[1].y, 50.0, epsilon = 1e-9);
    assert_abs_diff_eq!(points[2].y, 0.0, epsilon = 1e-9);
}

#[test]
fn subnormal_range_is_treated_as_flat() {
    let points = map_to_points(&[0.0, 5e-324], 100.0, 100.0, 10.0).expect("map");

    for point in &points {
        assert!(point.is_finite());
        assert_abs_diff_eq!(point.y, 90.0, epsilon = 1e-9);
    }
}
