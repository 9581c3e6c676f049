use nalgebra::Point3;

use crate::core::models::position::PositionSet;

pub fn rmsd(coords1: &[Point3<f64>], coords2: &[Point3<f64>]) -> Option<f64> {
    if coords1.len() != coords2.len() || coords1.is_empty() {
        return None;
    }
    let n = coords1.len() as f64;
    let squared_dist_sum: f64 = coords1
        .iter()
        .zip(coords2.iter())
        .map(|(p1, p2)| (p1 - p2).norm_squared())
        .sum();
    Some((squared_dist_sum / n).sqrt())
}

// RMSD over the keys present in both sets; `None` when nothing is shared.
pub fn named_rmsd(set1: &PositionSet, set2: &PositionSet) -> Option<f64> {
    let mut squared_dist_sum = 0.0;
    let mut count = 0;

    for (key, p1) in set1.iter() {
        if let Some(p2) = set2.get(key) {
            squared_dist_sum += (p1 - p2).norm_squared();
            count += 1;
        }
    }
    if count == 0 {
        None
    } else {
        Some((squared_dist_sum / count as f64).sqrt())
    }
}

pub fn max_deviation<'a>(set1: &'a PositionSet, set2: &PositionSet) -> Option<(f64, &'a str)> {
    set1.iter()
        .filter_map(|(key, p1)| set2.get(key).map(|p2| ((p1 - p2).norm(), key)))
        .max_by(|(d1, _), (d2, _)| d1.partial_cmp(d2).unwrap_or(std::cmp::Ordering::Equal))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rmsd_of_identical_coordinates_is_zero() {
        let coords = vec![Point3::new(1.0, 2.0, 3.0), Point3::new(-1.0, 0.0, 4.0)];
        assert!(rmsd(&coords, &coords).unwrap() < 1e-12);
    }

    #[test]
    fn rmsd_of_uniformly_shifted_coordinates_equals_the_shift_length() {
        let coords1 = vec![Point3::new(0.0, 0.0, 0.0), Point3::new(1.0, 1.0, 1.0)];
        let coords2 = vec![Point3::new(3.0, 0.0, 0.0), Point3::new(4.0, 1.0, 1.0)];
        assert!((rmsd(&coords1, &coords2).unwrap() - 3.0).abs() < 1e-12);
    }

    #[test]
    fn rmsd_returns_none_for_mismatched_or_empty_input() {
        let one = vec![Point3::origin()];
        assert!(rmsd(&one, &[]).is_none());
        assert!(rmsd(&[], &[]).is_none());
    }

    #[test]
    fn named_rmsd_uses_only_shared_keys() {
        let mut set1 = PositionSet::new();
        set1.insert("CA", Point3::new(0.0, 0.0, 0.0));
        set1.insert("CB", Point3::new(1.0, 0.0, 0.0));
        set1.insert("ONLY1", Point3::new(100.0, 0.0, 0.0));

        let mut set2 = PositionSet::new();
        set2.insert("CA", Point3::new(0.0, 2.0, 0.0));
        set2.insert("CB", Point3::new(1.0, 2.0, 0.0));
        set2.insert("ONLY2", Point3::new(-100.0, 0.0, 0.0));

        assert!((named_rmsd(&set1, &set2).unwrap() - 2.0).abs() < 1e-12);
    }

    #[test]
    fn named_rmsd_returns_none_without_shared_keys() {
        let mut set1 = PositionSet::new();
        set1.insert("CA", Point3::origin());
        let mut set2 = PositionSet::new();
        set2.insert("CB", Point3::origin());

        assert!(named_rmsd(&set1, &set2).is_none());
    }

    #[test]
    fn max_deviation_reports_the_worst_shared_key() {
        let mut set1 = PositionSet::new();
        set1.insert("CA", Point3::new(0.0, 0.0, 0.0));
        set1.insert("CG", Point3::new(1.0, 0.0, 0.0));

        let mut set2 = PositionSet::new();
        set2.insert("CA", Point3::new(0.1, 0.0, 0.0));
        set2.insert("CG", Point3::new(1.0, 5.0, 0.0));

        let (deviation, key) = max_deviation(&set1, &set2).unwrap();
        assert_eq!(key, "CG");
        assert!((deviation - 5.0).abs() < 1e-12);
    }
}
