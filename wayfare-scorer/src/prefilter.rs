//! Geographic pre-filter applied when the user names specific POIs.
//!
//! Requesting "Cameron Highlands" should not indiscriminately pull in
//! similarly named places hundreds of kilometres away, so the candidate
//! pool is restricted to the area around the POIs that matched the
//! request. Matched POIs always survive the filter.

use wayfare_core::PointOfInterest;
use wayfare_core::geo::{centroid, haversine_distance};

use crate::matching::best_match;

/// Tunables for [`restrict_to_request_area`].
#[derive(Debug, Clone, Copy)]
pub(crate) struct PrefilterConfig {
    /// Name-similarity threshold (0–100) for treating a POI as requested.
    pub match_threshold: f64,
    /// Initial retention radius around the matched centroid, in meters.
    pub radius_meters: f64,
    /// Fallback radius when too few candidates survive, in meters.
    pub expanded_radius_meters: f64,
    /// Candidate count below which the radius is expanded.
    pub min_candidates: usize,
}

/// Restrict `pois` to the area around those matching `preferred` names.
///
/// When no POI matches, there is no area to anchor the filter to and the
/// pool passes through unchanged.
pub(crate) fn restrict_to_request_area<'a>(
    pois: &'a [PointOfInterest],
    preferred: &[String],
    config: &PrefilterConfig,
) -> Vec<&'a PointOfInterest> {
    let matched: Vec<bool> = pois
        .iter()
        .map(|poi| best_match(&poi.name, preferred) >= config.match_threshold)
        .collect();

    let Some(center) = centroid(
        pois.iter()
            .zip(&matched)
            .filter(|(_, is_match)| **is_match)
            .map(|(poi, _)| poi.location),
    ) else {
        log::debug!("no POI matched the preferred names; skipping area filter");
        return pois.iter().collect();
    };

    let within = |radius: f64| -> Vec<&'a PointOfInterest> {
        pois.iter()
            .zip(&matched)
            .filter(|(poi, is_match)| {
                **is_match || haversine_distance(poi.location, center) <= radius
            })
            .map(|(poi, _)| poi)
            .collect()
    };

    let kept = within(config.radius_meters);
    if kept.len() >= config.min_candidates {
        return kept;
    }
    log::debug!(
        "only {} candidates within {} m of the requested area; expanding to {} m",
        kept.len(),
        config.radius_meters,
        config.expanded_radius_meters
    );
    within(config.expanded_radius_meters)
}
