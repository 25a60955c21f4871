use crate::core::Point;
use crate::error::{ChartError, ChartResult};

/// Equalizes the lengths of two point sequences so they can be interpolated
/// point-for-point.
///
/// The shorter side is upsampled by nearest-neighbor index duplication:
/// `small[i] = small[floor(i * small_len / big_len)]`. Values are never
/// interpolated, and the longer side is returned unchanged.
pub fn align_segments(from: &[Point], to: &[Point]) -> ChartResult<(Vec<Point>, Vec<Point>)> {
    if from.len() == to.len() {
        return Ok((from.to_vec(), to.to_vec()));
    }
    if from.is_empty() || to.is_empty() {
        return Err(ChartError::InvalidInput(format!(
            "cannot align an empty point sequence (from={}, to={})",
            from.len(),
            to.len()
        )));
    }

    if from.len() < to.len() {
        Ok((upsample(from, to.len()), to.to_vec()))
    } else {
        Ok((from.to_vec(), upsample(to, from.len())))
    }
}

fn upsample(small: &[Point], target_len: usize) -> Vec<Point> {
    let ratio = small.len() as f64 / target_len as f64;
    (0..target_len)
        .map(|index| {
            let source = ((index as f64 * ratio).floor() as usize).min(small.len() - 1);
            small[source]
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upsample_distributes_duplicates_by_floor_ratio() {
        let small = [Point::new(0.0, 0.0), Point::new(1.0, 1.0)];
        let expanded = upsample(&small, 5);
        // ratio 0.4: indices 0,0,0,1,1
        let xs: Vec<f64> = expanded.iter().map(|point| point.x).collect();
        assert_eq!(xs, vec![0.0, 0.0, 0.0, 1.0, 1.0]);
    }

    #[test]
    fn both_empty_sequences_align_trivially() {
        let (from, to) = align_segments(&[], &[]).expect("align");
        assert!(from.is_empty());
        assert!(to.is_empty());
    }
}
