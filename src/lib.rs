//! Facade crate for the Wayfare itinerary engine.
//!
//! Re-exports the core domain types together with the priority scorer and
//! the day-by-day itinerary planner, so applications can depend on a
//! single crate.
//!
//! # Examples
//!
//! ```
//! use geo::Coord;
//! use wayfare_engine::{
//!     ItineraryPlanner, PlanRequest, PointOfInterest, PriorityScorer, ScoreContext,
//! };
//!
//! let pois = vec![
//!     PointOfInterest::new("q1", "Penang Hill", Coord { x: 100.27, y: 5.42 })
//!         .with_popularity(80.0)
//!         .with_categories(["mountain", "viewpoint"]),
//!     PointOfInterest::new("q2", "Kek Lok Si Temple", Coord { x: 100.27, y: 5.40 })
//!         .with_popularity(70.0)
//!         .with_categories(["temple"]),
//! ];
//! let context = ScoreContext::new(vec!["Nature".into()], 2, 3)?;
//! let scored = PriorityScorer::new().score(&pois, &context);
//! let plan = ItineraryPlanner::new().plan(scored, &PlanRequest::new(3, 5).with_seed(1))?;
//! assert_eq!(plan.days.len(), 3);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![forbid(unsafe_code)]

pub use geo::Coord;
pub use wayfare_core::geo::haversine_distance;
pub use wayfare_core::{
    AnchorCluster, DayPlan, OvernightTransition, PlanError, PlannedStop, PointOfInterest,
    ScoredPoi, TripPlan, TripSummary,
};
pub use wayfare_planner::{ItineraryPlanner, PlanRequest, cluster_anchors};
pub use wayfare_scorer::{
    BehaviorSignals, PriorityScorer, ScoreContext, ScoreContextError, name_similarity,
};
