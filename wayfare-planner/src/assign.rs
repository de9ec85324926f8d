//! Mapping anchor clusters onto trip days.

use wayfare_core::{AnchorCluster, ScoredPoi};

/// One trip day's anchors plus the fill capacity left over, before the
/// day filler runs.
#[derive(Debug, Clone)]
pub(crate) struct DaySkeleton {
    /// 1-based day number.
    pub day: u32,
    /// Anchors committed to this day.
    pub anchors: Vec<ScoredPoi>,
    /// Supporting-POI slots remaining after anchors are seated.
    pub capacity: usize,
}

/// Assign anchor clusters to trip days.
///
/// With no clusters every day starts flexible at full capacity. With at
/// most one cluster per day, clusters map onto days in cluster order and
/// leftover days stay flexible. With more clusters than days, clusters are
/// round-robined (`day = index mod days + 1`) and capacity is recomputed
/// after each addition; a day whose anchors already reach the per-day
/// maximum simply ends with zero fill capacity. Clusters are not
/// re-ordered to minimise day-to-day travel.
pub(crate) fn assign_days(
    clusters: Vec<AnchorCluster>,
    trip_days: u32,
    max_per_day: usize,
) -> Vec<DaySkeleton> {
    let mut skeletons: Vec<DaySkeleton> = (1..=trip_days)
        .map(|day| DaySkeleton {
            day,
            anchors: Vec::new(),
            capacity: max_per_day,
        })
        .collect();

    let days = skeletons.len();
    if days == 0 {
        return skeletons;
    }

    for (index, cluster) in clusters.into_iter().enumerate() {
        let slot = index % days;
        if let Some(skeleton) = skeletons.get_mut(slot) {
            skeleton.anchors.extend(cluster.pois);
            skeleton.capacity = max_per_day.saturating_sub(skeleton.anchors.len());
        }
    }

    skeletons
}
