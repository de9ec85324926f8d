use thiserror::Error;

use crate::{PlannedStop, ScoredPoi};

/// A set of anchor POIs deemed mutually close by single-link clustering.
///
/// Each cluster becomes the skeleton of one trip day. Clusters are created
/// once per run and are immutable afterwards.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AnchorCluster {
    /// Member anchors, in the order they were absorbed.
    pub pois: Vec<ScoredPoi>,
}

impl AnchorCluster {
    /// Number of anchors in the cluster.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pois.len()
    }

    /// Whether the cluster holds no anchors.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pois.is_empty()
    }
}

/// Travel between the last POI of one day and the first POI of the next.
///
/// The distance is informational and is not counted towards either day's
/// `total_distance_meters`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OvernightTransition {
    /// Id of the previous day's final POI.
    pub from_poi: String,
    /// Id of this day's first POI.
    pub to_poi: String,
    /// Great-circle distance between the two, in meters.
    pub distance_meters: f64,
}

/// One day's sequenced itinerary.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DayPlan {
    /// 1-based day number.
    pub day: u32,
    /// Ordered stops; empty for a flexible day.
    pub stops: Vec<PlannedStop>,
    /// Sum of consecutive-stop distances within the day, in meters.
    pub total_distance_meters: f64,
    /// Travel from the previous non-empty day, when one exists.
    pub overnight_transition: Option<OvernightTransition>,
}

impl DayPlan {
    /// Number of stops scheduled for the day.
    #[must_use]
    pub fn total_pois(&self) -> usize {
        self.stops.len()
    }

    /// A flexible day has no scheduled stops and is left open for rest or
    /// improvisation.
    #[must_use]
    pub fn is_flexible(&self) -> bool {
        self.stops.is_empty()
    }
}

/// Aggregate statistics over a [`TripPlan`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TripSummary {
    /// Total POIs scheduled across all days.
    pub total_pois: usize,
    /// Trip length in days.
    pub total_days: u32,
    /// Sum of all within-day travel distances, in meters.
    pub total_distance_meters: f64,
    /// Mean POIs per day over the whole trip.
    pub avg_pois_per_day: f64,
    /// Mean within-day travel distance per day, in meters.
    pub avg_distance_per_day_meters: f64,
    /// Anchor POIs the user explicitly requested.
    pub preferred_requested: usize,
    /// Anchor POIs actually present in the itinerary.
    pub preferred_included: usize,
    /// Number of anchor clusters formed.
    pub anchor_clusters: usize,
}

/// The aggregate planning result.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TripPlan {
    /// Trip length in days.
    pub trip_days: u32,
    /// The trip's reference POI: the first anchor, or the highest-priority
    /// POI when no anchors exist.
    pub centroid: Option<ScoredPoi>,
    /// One plan per trip day, in day order.
    pub days: Vec<DayPlan>,
    /// Aggregate statistics.
    pub summary: TripSummary,
}

/// Errors returned by the itinerary planner.
///
/// Insufficient coverage is not an error: days that cannot be filled are
/// simply left flexible. Only a totally empty candidate pool or malformed
/// request parameters abort a run.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlanError {
    /// The candidate pool was empty; no itinerary can be produced.
    #[error("no candidate POIs available")]
    NoCandidates,
    /// Request parameters were invalid, e.g. a zero-day trip.
    #[error("invalid request: {reason}")]
    InvalidRequest {
        /// Human-readable description of the rejected parameter.
        reason: &'static str,
    },
}
