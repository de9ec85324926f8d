//! The end-to-end itinerary planner.

use std::time::{SystemTime, UNIX_EPOCH};

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use wayfare_core::{DayPlan, PlanError, ScoredPoi, TripPlan, TripSummary};

use crate::assign::assign_days;
use crate::cluster::cluster_anchors;
use crate::fill::fill_days;
use crate::sequence::{attach_transitions, sequence_day};

/// Unseeded plans share a seed within a six-hour window, so retries in
/// the same window reproduce the itinerary while later sessions vary.
const SEED_WINDOW_SECS: u64 = 6 * 60 * 60;

fn window_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs() / SEED_WINDOW_SECS)
        .unwrap_or_default()
}

/// Parameters for a single planning run.
///
/// # Examples
///
/// ```
/// use wayfare_planner::PlanRequest;
///
/// let request = PlanRequest::new(3, 5).with_seed(42);
/// assert_eq!(request.trip_days, 3);
/// assert_eq!(request.seed, Some(42));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct PlanRequest {
    /// Number of days to plan, at least 1.
    pub trip_days: u32,
    /// Upper bound on POIs per day, anchors included.
    pub max_pois_per_day: usize,
    /// Anchors within this distance of a cluster member join the cluster.
    pub anchor_threshold_meters: f64,
    /// Fill-in candidates must sit within this distance of a day's anchor
    /// centroid.
    pub search_radius_meters: f64,
    /// Explicit RNG seed; when `None` a time-window seed is derived.
    pub seed: Option<u64>,
}

impl PlanRequest {
    /// Create a request with the default clustering and search distances.
    #[must_use]
    pub const fn new(trip_days: u32, max_pois_per_day: usize) -> Self {
        Self {
            trip_days,
            max_pois_per_day,
            anchor_threshold_meters: 30_000.0,
            search_radius_meters: 50_000.0,
            seed: None,
        }
    }

    /// Pin the RNG seed for reproducible plans.
    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Override the anchor clustering threshold.
    #[must_use]
    pub const fn with_anchor_threshold_meters(mut self, meters: f64) -> Self {
        self.anchor_threshold_meters = meters;
        self
    }

    /// Override the fill-in search radius.
    #[must_use]
    pub const fn with_search_radius_meters(mut self, meters: f64) -> Self {
        self.search_radius_meters = meters;
        self
    }

    fn validate(&self) -> Result<(), PlanError> {
        if self.trip_days == 0 {
            return Err(PlanError::InvalidRequest {
                reason: "trip_days must be at least 1",
            });
        }
        if self.max_pois_per_day == 0 {
            return Err(PlanError::InvalidRequest {
                reason: "max_pois_per_day must be at least 1",
            });
        }
        Ok(())
    }
}

/// Builds multi-day itineraries from scored POIs.
///
/// Planning runs in fixed stages: preferred POIs become anchors and are
/// clustered by proximity, clusters are mapped onto days, spare capacity
/// is filled from the remaining pool, and each day is ordered with a
/// nearest-neighbour walk before overnight transitions are attached.
///
/// # Examples
///
/// ```
/// use geo::Coord;
/// use wayfare_core::{PointOfInterest, ScoredPoi};
/// use wayfare_planner::{ItineraryPlanner, PlanRequest};
///
/// let poi = PointOfInterest::new("q1", "Kek Lok Si", Coord { x: 100.27, y: 5.40 })
///     .with_popularity(80.0);
/// let pool = vec![ScoredPoi::new(poi, 120.0, false)];
/// let plan = ItineraryPlanner::new()
///     .plan(pool, &PlanRequest::new(2, 4).with_seed(1))
///     .expect("plan");
/// assert_eq!(plan.trip_days, 2);
/// assert_eq!(plan.summary.total_pois, 1);
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct ItineraryPlanner;

impl ItineraryPlanner {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Plan a trip from a scored candidate pool.
    ///
    /// # Errors
    ///
    /// Returns [`PlanError::NoCandidates`] when `pois` is empty and
    /// [`PlanError::InvalidRequest`] when the request fails validation.
    pub fn plan(&self, pois: Vec<ScoredPoi>, request: &PlanRequest) -> Result<TripPlan, PlanError> {
        request.validate()?;
        if pois.is_empty() {
            return Err(PlanError::NoCandidates);
        }

        let mut pool = pois;
        pool.sort_unstable_by(|a, b| {
            b.priority_score
                .partial_cmp(&a.priority_score)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.poi.id.cmp(&b.poi.id))
        });

        let seed = request.seed.unwrap_or_else(window_seed);
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        log::debug!(
            "planning {} day(s) over {} candidate(s), seed {seed}",
            request.trip_days,
            pool.len()
        );

        let (anchors, fillers): (Vec<ScoredPoi>, Vec<ScoredPoi>) =
            pool.iter().cloned().partition(|poi| poi.is_preferred);
        let preferred_requested = anchors.len();
        let centroid = anchors.first().cloned().or_else(|| pool.first().cloned());

        let clusters = cluster_anchors(anchors, request.anchor_threshold_meters);
        let anchor_clusters = clusters.len();
        let skeletons = assign_days(clusters, request.trip_days, request.max_pois_per_day);
        let filled = fill_days(skeletons, &fillers, request.search_radius_meters, &mut rng);

        let mut days: Vec<DayPlan> = filled
            .into_iter()
            .map(|day| {
                if day.pois.is_empty() {
                    log::debug!("day {} left flexible", day.day);
                }
                let (stops, total_distance_meters) = sequence_day(day.pois, None, &mut rng);
                DayPlan {
                    day: day.day,
                    stops,
                    total_distance_meters,
                    overnight_transition: None,
                }
            })
            .collect();
        attach_transitions(&mut days);

        let total_pois: usize = days.iter().map(DayPlan::total_pois).sum();
        let total_distance_meters: f64 = days.iter().map(|d| d.total_distance_meters).sum();
        let preferred_included = days
            .iter()
            .flat_map(|d| d.stops.iter())
            .filter(|stop| stop.poi.is_preferred)
            .count();
        let day_count = f64::from(request.trip_days);
        let summary = TripSummary {
            total_pois,
            total_days: request.trip_days,
            total_distance_meters,
            avg_pois_per_day: total_pois as f64 / day_count,
            avg_distance_per_day_meters: total_distance_meters / day_count,
            preferred_requested,
            preferred_included,
            anchor_clusters,
        };

        Ok(TripPlan {
            trip_days: request.trip_days,
            centroid,
            days,
            summary,
        })
    }
}
