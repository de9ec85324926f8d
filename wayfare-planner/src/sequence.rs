//! Nearest-neighbour sequencing within a day and overnight transitions
//! between days.

use std::cmp::Ordering;

use geo::Coord;
use rand::Rng;
use wayfare_core::geo::haversine_distance;
use wayfare_core::{DayPlan, OvernightTransition, PlannedStop, ScoredPoi};

/// Order one day's POIs with a greedy nearest-neighbour walk.
///
/// The walk starts from `forced_start` (an index into `pois`) when given,
/// otherwise from a random POI so repeated runs vary. Each stop records
/// its 1-based `sequence_no` and the distance from the previous stop (0
/// for the first). Returns the stops and their summed distance.
///
/// Nearest-neighbour is a heuristic, not an optimal tour; at the handful
/// of POIs a day holds, the gap to optimal is acceptable.
pub(crate) fn sequence_day<R: Rng>(
    pois: Vec<ScoredPoi>,
    forced_start: Option<usize>,
    rng: &mut R,
) -> (Vec<PlannedStop>, f64) {
    let mut remaining = pois;
    if remaining.is_empty() {
        return (Vec::new(), 0.0);
    }

    let start = forced_start
        .unwrap_or_else(|| rng.gen_range(0..remaining.len()))
        .min(remaining.len() - 1);
    let first = remaining.remove(start);
    let mut last_location = first.poi.location;
    let mut stops = vec![PlannedStop {
        poi: first,
        sequence_no: 1,
        distance_from_previous_meters: 0.0,
    }];
    let mut total = 0.0;

    while !remaining.is_empty() {
        let (index, distance) = remaining
            .iter()
            .enumerate()
            .map(|(index, candidate)| {
                (index, haversine_distance(last_location, candidate.poi.location))
            })
            .min_by(|(_, lhs), (_, rhs)| lhs.partial_cmp(rhs).unwrap_or(Ordering::Equal))
            .unwrap_or((0, 0.0));
        let next = remaining.remove(index);
        last_location = next.poi.location;
        total += distance;
        let sequence_no = u32::try_from(stops.len()).unwrap_or(u32::MAX).saturating_add(1);
        stops.push(PlannedStop {
            poi: next,
            sequence_no,
            distance_from_previous_meters: distance,
        });
    }

    (stops, total)
}

/// Attach overnight transitions after every day has been sequenced.
///
/// Each non-empty day after the first records the travel from the most
/// recent non-empty day's final stop to its own first stop. Flexible days
/// neither carry nor reset the transition chain.
pub(crate) fn attach_transitions(days: &mut [DayPlan]) {
    let mut previous_last: Option<(String, Coord<f64>)> = None;
    for day in days.iter_mut() {
        if let (Some((from_id, from_location)), Some(first)) = (&previous_last, day.stops.first())
        {
            day.overnight_transition = Some(OvernightTransition {
                from_poi: from_id.clone(),
                to_poi: first.poi.poi.id.clone(),
                distance_meters: haversine_distance(*from_location, first.poi.poi.location),
            });
        }
        if let Some(last) = day.stops.last() {
            previous_last = Some((last.poi.poi.id.clone(), last.poi.poi.location));
        }
    }
}
