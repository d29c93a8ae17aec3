use std::collections::HashMap;

use crate::models::{Cluster, CoordKey, Record};

/// Group records by exact coordinate key.
///
/// Clusters come out in first-seen order and keep source order inside.
/// Records without a valid coordinate pair are left out.
pub fn group(records: &[Record]) -> Vec<Cluster> {
    let mut clusters: Vec<Cluster> = Vec::new();
    let mut index: HashMap<CoordKey, usize> = HashMap::new();

    for record in records {
        let Some(coord) = record.coord() else {
            continue;
        };
        let key = coord.key();
        match index.get(&key) {
            Some(&i) => clusters[i].records.push(record.clone()),
            None => {
                index.insert(key.clone(), clusters.len());
                clusters.push(Cluster {
                    key,
                    coord,
                    records: vec![record.clone()],
                });
            }
        }
    }

    let skipped = records.len() - clusters.iter().map(Cluster::len).sum::<usize>();
    if skipped > 0 {
        tracing::warn!(skipped, "Records without valid coordinates were not placed on the map");
    }
    clusters
}
