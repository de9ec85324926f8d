//! End-to-end planner behaviour over realistic candidate pools.

use std::collections::HashSet;

use geo::Coord;
use rstest::rstest;
use wayfare_core::{PlanError, PointOfInterest, ScoredPoi};
use wayfare_planner::{ItineraryPlanner, PlanRequest};

fn scored(id: &str, priority: f32, lon: f64, lat: f64, preferred: bool) -> ScoredPoi {
    let poi = PointOfInterest::new(id, id, Coord { x: lon, y: lat })
        .with_popularity(priority)
        .with_signals(Some(4.2), 120, 12);
    ScoredPoi::new(poi, priority, preferred)
}

/// 15 candidates around George Town, two of them preferred and ~12 km
/// apart.
fn george_town_pool() -> Vec<ScoredPoi> {
    let mut pool = vec![
        scored("anchor-hill", 180.0, 100.30, 5.40, true),
        scored("anchor-fort", 160.0, 100.30, 5.51, true),
    ];
    for i in 0..13 {
        let lat = 5.40 + 0.01 * f64::from(i);
        pool.push(scored(
            &format!("filler-{i:02}"),
            90.0 - i as f32,
            100.32,
            lat,
            false,
        ));
    }
    pool
}

#[rstest]
fn nearby_preferred_pois_share_the_first_day() {
    let plan = ItineraryPlanner::new()
        .plan(george_town_pool(), &PlanRequest::new(3, 5).with_seed(11))
        .expect("plan");

    assert_eq!(plan.summary.anchor_clusters, 1);
    assert_eq!(plan.summary.preferred_requested, 2);
    assert_eq!(plan.summary.preferred_included, 2);

    let day_one = plan.days.first().expect("day 1");
    let anchors_on_day_one = day_one
        .stops
        .iter()
        .filter(|stop| stop.poi.is_preferred)
        .count();
    assert_eq!(anchors_on_day_one, 2);
    assert!(day_one.total_pois() <= 5);
}

#[rstest]
fn whole_pool_is_consumed_when_capacity_allows() {
    let plan = ItineraryPlanner::new()
        .plan(george_town_pool(), &PlanRequest::new(3, 5).with_seed(11))
        .expect("plan");

    assert_eq!(plan.summary.total_pois, 15);
    let mut seen = HashSet::new();
    for stop in plan.days.iter().flat_map(|d| d.stops.iter()) {
        assert!(seen.insert(stop.poi.poi.id.clone()));
    }
}

#[rstest]
fn sparse_pool_leaves_later_days_flexible() {
    let pool = vec![
        scored("a", 30.0, 100.30, 5.40, false),
        scored("b", 20.0, 100.31, 5.41, false),
        scored("c", 10.0, 100.32, 5.42, false),
    ];
    let plan = ItineraryPlanner::new()
        .plan(pool, &PlanRequest::new(7, 4).with_seed(5))
        .expect("plan");

    assert_eq!(plan.days.len(), 7);
    assert_eq!(plan.summary.total_pois, 3);
    assert!(plan.days.iter().skip(1).all(|day| day.is_flexible()));
    let day_one = plan.days.first().expect("day 1");
    assert_eq!(day_one.total_pois(), 3);
    assert!(day_one.overnight_transition.is_none());
}

#[rstest]
fn pinned_seed_reproduces_the_itinerary() {
    let planner = ItineraryPlanner::new();
    let request = PlanRequest::new(3, 4).with_seed(42);
    let first = planner
        .plan(george_town_pool(), &request)
        .expect("first plan");
    let second = planner
        .plan(george_town_pool(), &request)
        .expect("second plan");

    let ids = |plan: &wayfare_core::TripPlan| -> Vec<Vec<String>> {
        plan.days
            .iter()
            .map(|day| day.stops.iter().map(|s| s.poi.poi.id.clone()).collect())
            .collect()
    };
    assert_eq!(ids(&first), ids(&second));
    assert_eq!(
        first.summary.total_distance_meters,
        second.summary.total_distance_meters
    );
}

#[rstest]
fn consecutive_active_days_are_bridged_overnight() {
    let plan = ItineraryPlanner::new()
        .plan(george_town_pool(), &PlanRequest::new(3, 5).with_seed(11))
        .expect("plan");

    for window in plan.days.windows(2) {
        let (previous, current) = (&window[0], &window[1]);
        if previous.is_flexible() || current.is_flexible() {
            continue;
        }
        let transition = current
            .overnight_transition
            .as_ref()
            .expect("transition between active days");
        let previous_last = previous.stops.last().expect("previous day last stop");
        let current_first = current.stops.first().expect("current day first stop");
        assert_eq!(transition.from_poi, previous_last.poi.poi.id);
        assert_eq!(transition.to_poi, current_first.poi.poi.id);
    }
}

#[rstest]
fn summary_distances_reconcile_with_the_days() {
    let plan = ItineraryPlanner::new()
        .plan(george_town_pool(), &PlanRequest::new(3, 5).with_seed(11))
        .expect("plan");

    let summed: f64 = plan.days.iter().map(|d| d.total_distance_meters).sum();
    assert!((plan.summary.total_distance_meters - summed).abs() < 1e-6);
    assert!(
        (plan.summary.avg_distance_per_day_meters - summed / 3.0).abs() < 1e-6
    );
}

#[rstest]
fn empty_pool_reports_no_candidates() {
    let result = ItineraryPlanner::new().plan(Vec::new(), &PlanRequest::new(3, 5));
    assert!(matches!(result, Err(PlanError::NoCandidates)));
}

#[rstest]
fn zero_day_trip_is_rejected_before_planning() {
    let pool = vec![scored("a", 30.0, 100.30, 5.40, false)];
    let result = ItineraryPlanner::new().plan(pool, &PlanRequest::new(0, 5));
    assert!(matches!(
        result,
        Err(PlanError::InvalidRequest { reason }) if reason.contains("trip_days")
    ));
}
