use morph_chart::ChartError;
use morph_chart::core::{Point, align_segments};

fn row(xs: &[f64]) -> Vec<Point> {
    xs.iter().map(|x| Point::new(*x, *x * 2.0)).collect()
}

#[test]
fn equal_lengths_are_returned_unchanged() {
    let from = row(&[0.0, 1.0, 2.0]);
    let to = row(&[5.0, 6.0, 7.0]);
    let (aligned_from, aligned_to) = align_segments(&from, &to).expect("align");
    assert_eq!(aligned_from, from);
    assert_eq!(aligned_to, to);
}

#[test]
fn single_point_is_duplicated_across_longer_target() {
    let from = row(&[10.0]);
    let to = row(&[0.0, 50.0, 100.0]);
    let (aligned_from, aligned_to) = align_segments(&from, &to).expect("align");

    assert_eq!(aligned_from, vec![from[0]; 3]);
    assert_eq!(aligned_to, to);
}

#[test]
fn shorter_destination_is_expanded_and_origin_kept() {
    let from = row(&[0.0, 1.0, 2.0, 3.0, 4.0, 5.0]);
    let to = row(&[10.0, 20.0]);
    let (aligned_from, aligned_to) = align_segments(&from, &to).expect("align");

    assert_eq!(aligned_from, from);
    assert_eq!(aligned_to.len(), 6);
    // ratio 1/3: indices 0,0,0,1,1,1
    assert_eq!(
        aligned_to,
        vec![to[0], to[0], to[0], to[1], to[1], to[1]]
    );
}

#[test]
fn uneven_ratio_uses_floor_of_scaled_index() {
    let from = row(&[0.0, 1.0, 2.0]);
    let to = row(&[0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    let (aligned_from, _) = align_segments(&from, &to).expect("align");

    // ratio 3/7: floor(i * 3 / 7) for i in 0..7 = 0,0,0,1,1,2,2
    let xs: Vec<f64> = aligned_from.iter().map(|point| point.x).collect();
    assert_eq!(xs, vec![0.0, 0.0, 0.0, 1.0, 1.0, 2.0, 2.0]);
}

#[test]
fn aligning_against_empty_side_is_rejected() {
    let err = align_segments(&[], &row(&[1.0])).expect_err("empty from must fail");
    assert!(matches!(err, ChartError::InvalidInput(_)));

    let err = align_segments(&row(&[1.0, 2.0]), &[]).expect_err("empty to must fail");
    assert!(matches!(err, ChartError::InvalidInput(_)));
}
