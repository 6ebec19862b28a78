//! Tests for the `GreedyPlanner` and `plan_route`.

use super::*;
use candy_core::test_support::{MemoryStore, house};
use rstest::{fixture, rstest};

const CENTER: Coord<f64> = Coord {
    x: 174.77,
    y: -36.84,
};

#[fixture]
fn neighbourhood() -> Vec<CandyLocation> {
    vec![
        house("a", 174.771, -36.841, &["kitkat"]),
        house("b", 174.780, -36.850, &["kitkat", "mars"]),
    ]
}

fn request(preferences: Preferences) -> PlanRequest {
    PlanRequest {
        center: Some(CENTER),
        radius_km: 5.0,
        preferences,
    }
}

#[rstest]
fn prefers_higher_score_over_distance(neighbourhood: Vec<CandyLocation>) {
    let preferences = Preferences::new().desiring("kitkat").desiring("mars");
    let route = plan_route(Some(CENTER), &neighbourhood, &preferences, 5.0)
        .expect("both houses match");
    assert_eq!(
        route.waypoints(),
        &[
            CENTER,
            Coord {
                x: 174.780,
                y: -36.850
            },
            Coord {
                x: 174.771,
                y: -36.841
            },
        ]
    );
}

#[rstest]
fn equal_scores_visit_nearest_first(neighbourhood: Vec<CandyLocation>) {
    let preferences = Preferences::new().desiring("kitkat");
    let route = plan_route(Some(CENTER), &neighbourhood, &preferences, 5.0)
        .expect("both houses match");
    assert_eq!(
        route.stops().first(),
        Some(&Coord {
            x: 174.771,
            y: -36.841
        })
    );
}

#[rstest]
fn undesired_only_yields_no_route(neighbourhood: Vec<CandyLocation>) {
    let preferences = Preferences::new().avoiding("kitkat");
    assert!(plan_route(Some(CENTER), &neighbourhood, &preferences, 5.0).is_none());
}

#[rstest]
fn missing_center_yields_no_route(neighbourhood: Vec<CandyLocation>) {
    let preferences = Preferences::new().desiring("kitkat");
    assert!(plan_route(None, &neighbourhood, &preferences, 5.0).is_none());
}

#[rstest]
fn empty_preferences_yield_no_route(neighbourhood: Vec<CandyLocation>) {
    assert!(plan_route(Some(CENTER), &neighbourhood, &Preferences::new(), 5.0).is_none());
}

#[rstest]
fn excludes_candidates_beyond_radius() {
    // Roughly 8 km east of the center.
    let far = house("far", 174.86, -36.84, &["kitkat"]);
    let near = house("near", 174.771, -36.841, &["kitkat"]);
    let preferences = Preferences::new().desiring("kitkat");
    let route = plan_route(Some(CENTER), &[far, near.clone()], &preferences, 5.0)
        .expect("the near house matches");
    assert_eq!(route.stops(), &[near.location]);
}

#[rstest]
fn exact_ties_keep_input_order() {
    let first = house("first", 174.771, -36.84, &["kitkat"]);
    let twin = house("twin", 174.771, -36.84, &["kitkat"]);
    let preferences = Preferences::new().desiring("kitkat");
    let pool = vec![
        Scored {
            location: first.location,
            score: 1,
        },
        Scored {
            location: twin.location,
            score: 1,
        },
    ];
    assert_eq!(best_index(CENTER, &pool), Some(0));
    let route = plan_route(Some(CENTER), &[first, twin], &preferences, 5.0)
        .expect("both houses match");
    assert_eq!(route.stops().len(), 2);
}

#[expect(
    clippy::float_arithmetic,
    reason = "test spreads houses on a small grid"
)]
fn grid(count: u32) -> Vec<CandyLocation> {
    (0..count)
        .map(|i| {
            let offset = f64::from(i) * 0.001;
            house(&i.to_string(), CENTER.x + offset, CENTER.y - offset, &["kitkat"])
        })
        .collect()
}

#[rstest]
fn caps_route_at_twenty_five_stops() {
    let candidates = grid(30);
    let preferences = Preferences::new().desiring("kitkat");
    let route = plan_route(Some(CENTER), &candidates, &preferences, 5.0)
        .expect("thirty houses match");
    assert_eq!(route.waypoints().len(), 26);
    assert_eq!(route.stops().len(), MAX_STOPS);
}

#[rstest]
fn planning_is_deterministic() {
    let candidates = grid(12);
    let preferences = Preferences::new().desiring("kitkat").avoiding("mars");
    let first = plan_route(Some(CENTER), &candidates, &preferences, 5.0);
    let second = plan_route(Some(CENTER), &candidates, &preferences, 5.0);
    assert_eq!(first, second);
}

#[rstest]
fn planner_matches_pure_function(neighbourhood: Vec<CandyLocation>) {
    let preferences = Preferences::new().desiring("kitkat").desiring("mars");
    let expected = plan_route(Some(CENTER), &neighbourhood, &preferences, 5.0);
    let planner = GreedyPlanner::new(MemoryStore::with_locations(neighbourhood), PreferenceScorer);
    assert_eq!(planner.plan(&request(preferences)), expected);
}

#[rstest]
fn planner_honours_configured_stop_limit() {
    let config = GreedyPlannerConfig { max_stops: 3 };
    let planner =
        GreedyPlanner::with_config(MemoryStore::with_locations(grid(10)), PreferenceScorer, config);
    let route = planner
        .plan(&request(Preferences::new().desiring("kitkat")))
        .expect("ten houses match");
    assert_eq!(route.stops().len(), 3);
}

#[rstest]
fn planner_without_stops_allowed_proposes_nothing(neighbourhood: Vec<CandyLocation>) {
    let config = GreedyPlannerConfig { max_stops: 0 };
    let planner = GreedyPlanner::with_config(
        MemoryStore::with_locations(neighbourhood),
        PreferenceScorer,
        config,
    );
    assert!(
        planner
            .plan(&request(Preferences::new().desiring("kitkat")))
            .is_none()
    );
}

#[rstest]
fn planner_finds_houses_across_the_antimeridian() {
    let center = Coord {
        x: 179.999,
        y: -16.5,
    };
    let store = MemoryStore::with_locations([house("east", -179.999, -16.5, &["kitkat"])]);
    let planner = GreedyPlanner::new(store, PreferenceScorer);
    let request = PlanRequest {
        center: Some(center),
        radius_km: 1.0,
        preferences: Preferences::new().desiring("kitkat"),
    };
    let route = planner.plan(&request).expect("house is about 200 m away");
    assert_eq!(route.stops().len(), 1);
}

#[rstest]
fn default_config_uses_route_cap() {
    assert_eq!(GreedyPlannerConfig::default().max_stops, MAX_STOPS);
}

#[rstest]
#[case(-185.229)]
#[case(534.771)]
fn store_backed_planner_agrees_on_unwrapped_longitudes(#[case] lng: f64) {
    let candidates = vec![house("west", lng, -36.841, &["kitkat"])];
    let preferences = Preferences::new().desiring("kitkat");
    let expected = plan_route(Some(CENTER), &candidates, &preferences, 5.0);
    assert_eq!(expected.as_ref().map(|route| route.stops().len()), Some(1));

    let planner = GreedyPlanner::new(MemoryStore::with_locations(candidates), PreferenceScorer);
    assert_eq!(planner.plan(&request(preferences)), expected);
}

#[rstest]
fn planner_over_a_thread_safe_store_is_thread_safe() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<GreedyPlanner<MemoryStore, PreferenceScorer>>();
}
