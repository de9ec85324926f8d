//! Capacity-aware fill-in of supporting POIs around each day's anchors.

use std::collections::HashSet;

use rand::Rng;
use rand::seq::index::sample_weighted;
use wayfare_core::ScoredPoi;
use wayfare_core::geo::{centroid, haversine_distance};

use crate::assign::DaySkeleton;

/// The pool counts as scarce when fewer than this many unused POIs remain
/// per remaining day; scarcity switches selection to a deterministic
/// top-N so later days are not starved.
const ABUNDANCE_PER_DAY: usize = 3;
/// Weighted sampling draws from the top `SHORTLIST_FACTOR × capacity`
/// candidates, trading a little optimality for day-to-day variety.
const SHORTLIST_FACTOR: usize = 2;

/// A day's full POI set: anchors plus fill-ins, not yet sequenced.
#[derive(Debug, Clone)]
pub(crate) struct FilledDay {
    pub day: u32,
    pub pois: Vec<ScoredPoi>,
}

/// Fill each day's spare capacity from the non-anchor pool.
///
/// `pool` must be sorted by descending priority. Days with anchors draw
/// candidates from within `search_radius_meters` of their anchor
/// centroid; flexible days draw from the whole unused pool. A used-id set
/// scoped to this call guarantees no POI is assigned to two days.
pub(crate) fn fill_days<R: Rng>(
    skeletons: Vec<DaySkeleton>,
    pool: &[ScoredPoi],
    search_radius_meters: f64,
    rng: &mut R,
) -> Vec<FilledDay> {
    let total_days = skeletons.len();
    let mut used: HashSet<String> = HashSet::new();
    let mut filled = Vec::with_capacity(total_days);

    for (offset, skeleton) in skeletons.into_iter().enumerate() {
        let spare = skeleton.capacity;
        let mut pois = skeleton.anchors;

        if spare > 0 {
            let anchor_centroid = centroid(pois.iter().map(|anchor| anchor.poi.location));
            let candidates: Vec<&ScoredPoi> = pool
                .iter()
                .filter(|candidate| !used.contains(&candidate.poi.id))
                .filter(|candidate| {
                    anchor_centroid.is_none_or(|center| {
                        haversine_distance(candidate.poi.location, center) <= search_radius_meters
                    })
                })
                .collect();

            let unused_total = pool.len() - used.len();
            let remaining_days = total_days - offset;
            let selected = if unused_total >= ABUNDANCE_PER_DAY * remaining_days {
                weighted_pick(&candidates, spare, rng)
            } else {
                candidates
                    .into_iter()
                    .take(spare)
                    .cloned()
                    .collect()
            };

            for poi in &selected {
                used.insert(poi.poi.id.clone());
            }
            pois.extend(selected);
        }

        filled.push(FilledDay {
            day: skeleton.day,
            pois,
        });
    }

    filled
}

/// Priority-weighted sampling without replacement from the top of the
/// candidate list.
fn weighted_pick<R: Rng>(candidates: &[&ScoredPoi], amount: usize, rng: &mut R) -> Vec<ScoredPoi> {
    let shortlist: Vec<&ScoredPoi> = candidates
        .iter()
        .copied()
        .take(SHORTLIST_FACTOR * amount)
        .collect();
    let take = amount.min(shortlist.len());
    if take == 0 {
        return Vec::new();
    }

    let weight = |index: usize| -> f64 {
        shortlist
            .get(index)
            .map_or(f64::MIN_POSITIVE, |candidate| {
                f64::from(candidate.priority_score.max(f32::EPSILON))
            })
    };
    match sample_weighted(rng, shortlist.len(), weight, take) {
        Ok(indices) => indices
            .into_iter()
            .filter_map(|index| shortlist.get(index).map(|candidate| (*candidate).clone()))
            .collect(),
        Err(error) => {
            log::warn!("weighted sampling failed ({error}); taking top candidates instead");
            shortlist
                .into_iter()
                .take(take)
                .cloned()
                .collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo::Coord;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use rstest::rstest;
    use wayfare_core::PointOfInterest;

    const RADIUS: f64 = 50_000.0;

    fn scored(id: &str, priority: f32, lon: f64, lat: f64) -> ScoredPoi {
        let poi = PointOfInterest::new(id, id, Coord { x: lon, y: lat }).with_popularity(priority);
        ScoredPoi::new(poi, priority, false)
    }

    fn flexible_days(count: u32, capacity: usize) -> Vec<DaySkeleton> {
        (1..=count)
            .map(|day| DaySkeleton {
                day,
                anchors: Vec::new(),
                capacity,
            })
            .collect()
    }

    fn rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(7)
    }

    #[rstest]
    fn scarce_pool_is_taken_deterministically_in_priority_order() {
        // 4 POIs over 2 days at capacity 3: well under 3 per remaining day.
        let pool: Vec<ScoredPoi> = (0..4)
            .map(|i| scored(&format!("p{i}"), 100.0 - i as f32, 100.30, 5.40))
            .collect();
        let filled = fill_days(flexible_days(2, 3), &pool, RADIUS, &mut rng());
        let day1: Vec<&str> = filled[0].pois.iter().map(|p| p.poi.id.as_str()).collect();
        let day2: Vec<&str> = filled[1].pois.iter().map(|p| p.poi.id.as_str()).collect();
        assert_eq!(day1, vec!["p0", "p1", "p2"]);
        assert_eq!(day2, vec!["p3"]);
    }

    #[rstest]
    fn no_poi_lands_on_two_days() {
        let pool: Vec<ScoredPoi> = (0..20)
            .map(|i| scored(&format!("p{i}"), 100.0 - i as f32, 100.30, 5.40))
            .collect();
        let filled = fill_days(flexible_days(3, 4), &pool, RADIUS, &mut rng());
        let mut seen = HashSet::new();
        for day in &filled {
            for poi in &day.pois {
                assert!(seen.insert(poi.poi.id.clone()), "{} assigned twice", poi.poi.id);
            }
        }
    }

    #[rstest]
    fn abundant_pool_samples_from_the_shortlist_only() {
        let pool: Vec<ScoredPoi> = (0..20)
            .map(|i| scored(&format!("p{i:02}"), 100.0 - i as f32, 100.30, 5.40))
            .collect();
        let filled = fill_days(flexible_days(1, 3), &pool, RADIUS, &mut rng());
        // Top 2 × capacity = first six of the pool.
        let shortlist: HashSet<&str> = pool.iter().take(6).map(|p| p.poi.id.as_str()).collect();
        assert_eq!(filled[0].pois.len(), 3);
        for poi in &filled[0].pois {
            assert!(shortlist.contains(poi.poi.id.as_str()));
        }
    }

    #[rstest]
    fn anchored_day_only_draws_nearby_candidates() {
        let anchor = scored("anchor", 200.0, 100.30, 5.40);
        let skeletons = vec![DaySkeleton {
            day: 1,
            anchors: vec![anchor],
            capacity: 3,
        }];
        let pool = vec![
            scored("near", 90.0, 100.32, 5.42),
            // ~445 km north of the anchor.
            scored("far", 95.0, 100.30, 9.40),
        ];
        let filled = fill_days(skeletons, &pool, RADIUS, &mut rng());
        let ids: Vec<&str> = filled[0].pois.iter().map(|p| p.poi.id.as_str()).collect();
        assert!(ids.contains(&"near"));
        assert!(!ids.contains(&"far"));
    }

    #[rstest]
    fn zero_capacity_day_keeps_only_anchors() {
        let skeletons = vec![DaySkeleton {
            day: 1,
            anchors: vec![scored("anchor", 200.0, 100.30, 5.40)],
            capacity: 0,
        }];
        let pool = vec![scored("near", 90.0, 100.32, 5.42)];
        let filled = fill_days(skeletons, &pool, RADIUS, &mut rng());
        assert_eq!(filled[0].pois.len(), 1);
    }
}
