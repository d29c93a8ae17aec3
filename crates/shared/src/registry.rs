use std::collections::HashMap;

use crate::models::{Cluster, Coord, CoordKey};

/// A rendered marker and the cluster it stands for.
#[derive(Debug, Clone)]
pub struct MarkerEntry<H> {
    pub handle: H,
    pub cluster: Cluster,
}

/// South-west and north-east corners enclosing every marker.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub south_west: Coord,
    pub north_east: Coord,
}

/// Coordinate key to marker lookup, filled once during load.
///
/// `H` is whatever the map surface hands back for a marker; the web app
/// stores Leaflet markers, tests store plain values.
#[derive(Debug, Clone)]
pub struct MarkerRegistry<H> {
    entries: Vec<MarkerEntry<H>>,
    by_key: HashMap<CoordKey, usize>,
}

impl<H> Default for MarkerRegistry<H> {
    fn default() -> Self {
        MarkerRegistry {
            entries: Vec::new(),
            by_key: HashMap::new(),
        }
    }
}

impl<H> MarkerRegistry<H> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create one marker per cluster through `create` and register it.
    pub fn populate<F>(clusters: Vec<Cluster>, mut create: F) -> Self
    where
        F: FnMut(&Cluster) -> H,
    {
        let mut registry = Self::new();
        for cluster in clusters {
            let handle = create(&cluster);
            registry.register(cluster, handle);
        }
        tracing::info!(markers = registry.len(), "Markers registered");
        registry
    }

    /// Register a marker. A second cluster under an existing key replaces the first.
    pub fn register(&mut self, cluster: Cluster, handle: H) {
        let entry = MarkerEntry { handle, cluster };
        match self.by_key.get(&entry.cluster.key) {
            Some(&i) => self.entries[i] = entry,
            None => {
                self.by_key.insert(entry.cluster.key.clone(), self.entries.len());
                self.entries.push(entry);
            }
        }
    }

    pub fn lookup(&self, key: &CoordKey) -> Option<&MarkerEntry<H>> {
        self.by_key.get(key).map(|&i| &self.entries[i])
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> impl Iterator<Item = &MarkerEntry<H>> {
        self.entries.iter()
    }

    /// Marker coordinates in registration order.
    pub fn coordinates(&self) -> Vec<Coord> {
        self.entries.iter().map(|e| e.cluster.coord).collect()
    }

    /// Box around every marker, `None` when nothing was registered.
    pub fn bounds(&self) -> Option<Bounds> {
        let mut coords = self.entries.iter().map(|e| e.cluster.coord);
        let first = coords.next()?;
        let mut bounds = Bounds {
            south_west: first,
            north_east: first,
        };
        for c in coords {
            bounds.south_west.lat = bounds.south_west.lat.min(c.lat);
            bounds.south_west.lng = bounds.south_west.lng.min(c.lng);
            bounds.north_east.lat = bounds.north_east.lat.max(c.lat);
            bounds.north_east.lng = bounds.north_east.lng.max(c.lng);
        }
        Some(bounds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grouping::group;
    use crate::models::Record;

    fn rec(lat: f64, lng: f64) -> Record {
        Record::new(vec![], Some(lat), Some(lng))
    }

    fn clusters() -> Vec<Cluster> {
        group(&[rec(50.615, 86.459), rec(50.615, 86.459), rec(55.0, 90.0)])
    }

    #[test]
    fn test_populate_creates_one_marker_per_cluster() {
        let mut created = Vec::new();
        let registry = MarkerRegistry::populate(clusters(), |c| {
            created.push(c.key.clone());
            created.len()
        });
        assert_eq!(registry.len(), 2);
        assert_eq!(created.len(), 2);
        assert_eq!(registry.lookup(&created[0]).unwrap().handle, 1);
        assert_eq!(registry.lookup(&created[1]).unwrap().handle, 2);
    }

    #[test]
    fn test_lookup_returns_cluster() {
        let registry = MarkerRegistry::populate(clusters(), |_| ());
        let key = CoordKey::parse("50.615,86.459").unwrap();
        assert_eq!(registry.lookup(&key).unwrap().cluster.len(), 2);
        assert!(registry.lookup(&CoordKey::parse("1,1").unwrap()).is_none());
    }

    #[test]
    fn test_register_same_key_replaces() {
        let mut registry = MarkerRegistry::new();
        let mut cs = clusters();
        let first = cs.remove(0);
        registry.register(first.clone(), "old");
        registry.register(first.clone(), "new");
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.lookup(&first.key).unwrap().handle, "new");
    }

    #[test]
    fn test_coordinates_in_registration_order() {
        let registry = MarkerRegistry::populate(clusters(), |_| ());
        assert_eq!(
            registry.coordinates(),
            vec![Coord::new(50.615, 86.459), Coord::new(55.0, 90.0)]
        );
    }

    #[test]
    fn test_bounds_cover_all_markers() {
        let registry = MarkerRegistry::populate(clusters(), |_| ());
        let b = registry.bounds().unwrap();
        assert_eq!(b.south_west, Coord::new(50.615, 86.459));
        assert_eq!(b.north_east, Coord::new(55.0, 90.0));
        for c in registry.coordinates() {
            assert!((b.south_west.lat..=b.north_east.lat).contains(&c.lat));
            assert!((b.south_west.lng..=b.north_east.lng).contains(&c.lng));
        }
    }

    #[test]
    fn test_bounds_empty_registry() {
        let registry: MarkerRegistry<()> = MarkerRegistry::new();
        assert!(registry.bounds().is_none());
        assert!(registry.coordinates().is_empty());
    }
}
