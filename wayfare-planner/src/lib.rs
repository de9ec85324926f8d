//! Multi-day itinerary construction over scored points of interest.
//!
//! The planner turns a priority-scored candidate pool into a [`TripPlan`]
//! in four stages:
//!
//! 1. **Cluster**: preferred POIs (anchors) are grouped by single-link
//!    proximity clustering ([`cluster_anchors`]).
//! 2. **Assign**: clusters are mapped onto trip days, round-robining when
//!    clusters outnumber days; days without anchors stay flexible.
//! 3. **Fill**: each day's spare capacity is filled from the non-anchor
//!    pool, sampling by priority weight when candidates are abundant and
//!    deterministically when scarce.
//! 4. **Sequence**: each day's POIs are ordered by a nearest-neighbour
//!    walk and consecutive days are linked by overnight transitions.
//!
//! All randomness flows through a single seeded RNG, so a pinned seed
//! reproduces a plan exactly.
//!
//! [`TripPlan`]: wayfare_core::TripPlan

#![forbid(unsafe_code)]

mod assign;
mod cluster;
mod fill;
mod planner;
mod sequence;

pub use cluster::cluster_anchors;
pub use planner::{ItineraryPlanner, PlanRequest};
