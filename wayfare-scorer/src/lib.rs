//! Contextual priority scoring for Wayfare points of interest.
//!
//! The scorer turns static popularity scores into user-specific priority
//! scores by applying a fixed chain of knowledge-based rules:
//!
//! 1. a geographic pre-filter around explicitly requested POIs;
//! 2. a ×2.0 boost (and anchor flag) for requested POIs;
//! 3. a ×1.5 boost for interest-category matches;
//! 4. a ×0.8 penalty for unproven venues when the group is larger than two;
//! 5. a ×1.2 boost for recognised landmarks on short trips;
//! 6. optional behavioural boosts (+3 viewed, +20 bookmarked, then ×1.4
//!    for POIs from previously saved trips).
//!
//! Scores are raw and unbounded above; they are only comparable within a
//! single run. POIs with a base popularity of 0 are excluded entirely.
//!
//! # Examples
//! ```
//! use geo::Coord;
//! use wayfare_core::PointOfInterest;
//! use wayfare_scorer::{PriorityScorer, ScoreContext};
//!
//! # fn main() -> Result<(), wayfare_scorer::ScoreContextError> {
//! let pois = vec![
//!     PointOfInterest::new("p1", "Mossy Forest", Coord { x: 101.38, y: 4.52 })
//!         .with_popularity(100.0)
//!         .with_categories(["forest"]),
//! ];
//! let context = ScoreContext::new(vec!["Nature".into()], 1, 5)?;
//! let scored = PriorityScorer::new().score(&pois, &context);
//! assert_eq!(scored[0].priority_score, 150.0);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]

mod context;
mod interests;
mod matching;
mod prefilter;

pub use context::{BehaviorSignals, ScoreContext, ScoreContextError};
pub use matching::name_similarity;

use std::cmp::Ordering;

use wayfare_core::{PointOfInterest, ScoredPoi};

use interests::matches_interests;
use matching::best_match;
use prefilter::{PrefilterConfig, restrict_to_request_area};

/// Review count below which a venue counts as unproven.
const MIN_REVIEWS_THRESHOLD: u32 = 50;
/// Sitelink count below which a venue counts as unproven.
const MIN_SITELINKS_THRESHOLD: u32 = 5;
/// Trips shorter than this many days prioritise must-see landmarks.
const SHORT_TRIP_DAYS: u32 = 3;
/// Sitelink count from which a POI counts as a recognised landmark.
const LANDMARK_SITELINKS: u32 = 20;

const PREFERRED_MULTIPLIER: f32 = 2.0;
const INTEREST_MULTIPLIER: f32 = 1.5;
const SAFETY_PENALTY: f32 = 0.8;
const LANDMARK_MULTIPLIER: f32 = 1.2;
const VIEWED_BOOST: f32 = 3.0;
const COLLECTED_BOOST: f32 = 20.0;
const SAVED_TRIP_MULTIPLIER: f32 = 1.4;

/// Assigns contextual priority scores to candidate POIs.
///
/// The scorer is stateless between calls; construction only fixes the
/// fuzzy-match threshold and pre-filter radii.
#[derive(Debug, Clone)]
pub struct PriorityScorer {
    match_threshold: f64,
    prefilter_radius_meters: f64,
    prefilter_expanded_radius_meters: f64,
    prefilter_min_candidates: usize,
}

impl Default for PriorityScorer {
    fn default() -> Self {
        Self {
            match_threshold: 60.0,
            prefilter_radius_meters: 50_000.0,
            prefilter_expanded_radius_meters: 80_000.0,
            prefilter_min_candidates: 20,
        }
    }
}

impl PriorityScorer {
    /// Construct a scorer with default thresholds.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the fuzzy name-match threshold (0–100 scale).
    #[must_use]
    pub fn with_match_threshold(mut self, threshold: f64) -> Self {
        self.match_threshold = threshold;
        self
    }

    /// Score every candidate POI against the user context.
    ///
    /// Returns annotated copies sorted by descending priority, ties broken
    /// by id for stable output. POIs with zero base popularity, and POIs
    /// outside the requested area when preferred names are supplied, are
    /// dropped.
    #[must_use]
    pub fn score(&self, pois: &[PointOfInterest], context: &ScoreContext) -> Vec<ScoredPoi> {
        let candidates: Vec<&PointOfInterest> = if context.preferred_names.is_empty() {
            pois.iter().collect()
        } else {
            let config = PrefilterConfig {
                match_threshold: self.match_threshold,
                radius_meters: self.prefilter_radius_meters,
                expanded_radius_meters: self.prefilter_expanded_radius_meters,
                min_candidates: self.prefilter_min_candidates,
            };
            restrict_to_request_area(pois, &context.preferred_names, &config)
        };

        let mut scored: Vec<ScoredPoi> = candidates
            .into_iter()
            .filter(|poi| poi.popularity > 0.0)
            .map(|poi| self.score_poi(poi, context))
            .collect();

        scored.sort_unstable_by(|lhs, rhs| {
            rhs.priority_score
                .partial_cmp(&lhs.priority_score)
                .unwrap_or(Ordering::Equal)
                .then_with(|| lhs.poi.id.cmp(&rhs.poi.id))
        });

        log::debug!(
            "scored {} of {} candidate POIs",
            scored.len(),
            pois.len()
        );
        scored
    }

    fn score_poi(&self, poi: &PointOfInterest, context: &ScoreContext) -> ScoredPoi {
        let mut score = poi.popularity;

        let is_preferred = !context.preferred_names.is_empty()
            && best_match(&poi.name, &context.preferred_names) >= self.match_threshold;
        if is_preferred {
            score *= PREFERRED_MULTIPLIER;
        }

        if matches_interests(&poi.categories, &context.interests) {
            score *= INTEREST_MULTIPLIER;
        }

        // Unproven venues are riskier for larger groups.
        if context.travelers > 2
            && (poi.review_count < MIN_REVIEWS_THRESHOLD
                || poi.sitelink_count < MIN_SITELINKS_THRESHOLD)
        {
            score *= SAFETY_PENALTY;
        }

        // Short trips should not miss the must-see landmarks.
        if context.trip_days < SHORT_TRIP_DAYS && poi.sitelink_count >= LANDMARK_SITELINKS {
            score *= LANDMARK_MULTIPLIER;
        }

        if let Some(behavior) = &context.behavior {
            let mut boost = 0.0;
            if behavior.viewed.contains(&poi.id) {
                boost += VIEWED_BOOST;
            }
            if behavior.collected.contains(&poi.id) {
                boost += COLLECTED_BOOST;
            }
            score += boost;
            if behavior.trips.contains(&poi.id) {
                score *= SAVED_TRIP_MULTIPLIER;
            }
        }

        log::trace!("{}: priority {score:.1} (preferred: {is_preferred})", poi.id);
        ScoredPoi::new(poi.clone(), score, is_preferred)
    }
}
