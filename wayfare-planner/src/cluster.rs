//! Single-link clustering of anchor POIs into day skeletons.

use wayfare_core::geo::haversine_distance;
use wayfare_core::{AnchorCluster, ScoredPoi};

/// Group anchor POIs into proximity clusters.
///
/// Single-link agglomerative clustering: each cluster is seeded from the
/// first unclustered anchor and grows by absorbing any anchor within
/// `threshold_meters` of **any** member, not just the seed. Two anchors
/// 25 km apart each therefore land in one cluster when a third anchor
/// bridges them, even if they are more than the threshold from each other.
///
/// Anchors arrive in priority order and clusters preserve it: the first
/// cluster is seeded from the highest-priority anchor. The loop always
/// terminates because every pass moves at least one anchor out of the
/// remaining set.
#[must_use]
pub fn cluster_anchors(anchors: Vec<ScoredPoi>, threshold_meters: f64) -> Vec<AnchorCluster> {
    let mut remaining = anchors;
    let mut clusters = Vec::new();

    while !remaining.is_empty() {
        let seed = remaining.remove(0);
        let mut members = vec![seed];

        loop {
            let absorbed = remaining.iter().position(|candidate| {
                members.iter().any(|member| {
                    haversine_distance(member.poi.location, candidate.poi.location)
                        <= threshold_meters
                })
            });
            match absorbed {
                Some(index) => members.push(remaining.remove(index)),
                None => break,
            }
        }

        clusters.push(AnchorCluster { pois: members });
    }

    log::debug!("formed {} anchor cluster(s)", clusters.len());
    clusters
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo::Coord;
    use rstest::rstest;
    use wayfare_core::PointOfInterest;

    const THRESHOLD: f64 = 30_000.0;

    fn anchor(id: &str, lon: f64, lat: f64) -> ScoredPoi {
        let poi = PointOfInterest::new(id, id, Coord { x: lon, y: lat }).with_popularity(50.0);
        ScoredPoi::new(poi, 100.0, true)
    }

    #[rstest]
    fn no_anchors_means_no_clusters() {
        assert!(cluster_anchors(Vec::new(), THRESHOLD).is_empty());
    }

    #[rstest]
    fn nearby_anchors_share_a_cluster() {
        // ~12 km apart.
        let anchors = vec![anchor("a", 100.30, 5.40), anchor("b", 100.30, 5.51)];
        let clusters = cluster_anchors(anchors, THRESHOLD);
        assert_eq!(clusters.len(), 1);
        assert_eq!(clusters.first().map(AnchorCluster::len), Some(2));
    }

    #[rstest]
    fn distant_anchors_split_into_clusters() {
        // ~111 km apart.
        let anchors = vec![anchor("a", 100.30, 5.40), anchor("b", 100.30, 6.40)];
        let clusters = cluster_anchors(anchors, THRESHOLD);
        assert_eq!(clusters.len(), 2);
    }

    #[rstest]
    fn single_link_chains_through_intermediate_anchors() {
        // a-b and b-c are ~25 km; a-c is ~50 km. Single-link bridges them.
        let anchors = vec![
            anchor("a", 100.30, 5.40),
            anchor("c", 100.30, 5.85),
            anchor("b", 100.30, 5.625),
        ];
        let clusters = cluster_anchors(anchors, THRESHOLD);
        assert_eq!(clusters.len(), 1);
        assert_eq!(clusters.first().map(AnchorCluster::len), Some(3));
    }
}
