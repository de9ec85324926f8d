//! Core domain types for the Wayfare itinerary engine.
//!
//! The crate defines the point-of-interest records consumed by the scorer
//! and planner, the day-by-day plan structures they produce, and the
//! great-circle distance math shared by both. All coordinates are WGS84
//! with `x = longitude` and `y = latitude`, following [`geo::Coord`].
//!
//! Distances are meters throughout; converting to kilometres is a
//! presentation concern and happens outside this crate.

#![forbid(unsafe_code)]

pub mod geo;
mod plan;
mod poi;

pub use plan::{
    AnchorCluster, DayPlan, OvernightTransition, PlanError, TripPlan, TripSummary,
};
pub use poi::{PlannedStop, PointOfInterest, ScoredPoi};
