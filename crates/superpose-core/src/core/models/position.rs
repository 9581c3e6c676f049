use nalgebra::Point3;
use std::collections::HashMap;

/// An ad hoc named group of points transformed together.
///
/// Keys are atom identifiers; insertion order is irrelevant.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PositionSet {
    positions: HashMap<String, Point3<f64>>,
}

impl PositionSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: &str, position: Point3<f64>) -> Option<Point3<f64>> {
        self.positions.insert(key.to_string(), position)
    }

    pub fn get(&self, key: &str) -> Option<Point3<f64>> {
        self.positions.get(key).copied()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.positions.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.positions.keys().map(|k| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Point3<f64>)> {
        self.positions.iter().map(|(k, p)| (k.as_str(), p))
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (&str, &mut Point3<f64>)> {
        self.positions.iter_mut().map(|(k, p)| (k.as_str(), p))
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

impl FromIterator<(String, Point3<f64>)> for PositionSet {
    fn from_iter<I: IntoIterator<Item = (String, Point3<f64>)>>(iter: I) -> Self {
        Self {
            positions: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_and_get_round_trip() {
        let mut set = PositionSet::new();
        assert!(set.is_empty());

        set.insert("CA", Point3::new(1.0, 2.0, 3.0));
        assert_eq!(set.len(), 1);
        assert!(set.contains_key("CA"));
        assert_eq!(set.get("CA"), Some(Point3::new(1.0, 2.0, 3.0)));
        assert_eq!(set.get("CB"), None);
    }

    #[test]
    fn insert_replaces_existing_key_and_returns_previous_position() {
        let mut set = PositionSet::new();
        set.insert("N", Point3::origin());
        let previous = set.insert("N", Point3::new(1.0, 1.0, 1.0));

        assert_eq!(previous, Some(Point3::origin()));
        assert_eq!(set.len(), 1);
        assert_eq!(set.get("N"), Some(Point3::new(1.0, 1.0, 1.0)));
    }

    #[test]
    fn from_iterator_collects_all_entries() {
        let set: PositionSet = [
            ("CA".to_string(), Point3::new(1.0, 0.0, 0.0)),
            ("CB".to_string(), Point3::new(0.0, 1.0, 0.0)),
        ]
        .into_iter()
        .collect();

        assert_eq!(set.len(), 2);
        assert!(set.contains_key("CA"));
        assert!(set.contains_key("CB"));
    }
}
