//! Behavioural tests for `GreedyPlanner` using rstest-bdd.

use std::cell::RefCell;

use candy_core::test_support::{MemoryStore, house};
use candy_core::{CandyLocation, PlanRequest, PreferenceScorer, Preferences, Route, RoutePlanner};
use candy_planner::GreedyPlanner;
use candy_planner::test_support::{ring, stops_within};
use geo::Coord;
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};

const CENTER: Coord<f64> = Coord {
    x: 174.77,
    y: -36.84,
};
const FURTHER_HOUSE: Coord<f64> = Coord {
    x: 174.780,
    y: -36.850,
};

#[derive(Debug, Default)]
struct PlannerWorld {
    houses: RefCell<Vec<CandyLocation>>,
    preferences: RefCell<Preferences>,
    route: RefCell<Option<Route>>,
}

impl PlannerWorld {
    #[expect(
        clippy::expect_used,
        reason = "behaviour tests use expect for readable failures"
    )]
    fn expect_route(&self) -> Route {
        self.route
            .borrow()
            .clone()
            .expect("a route should have been proposed")
    }
}

#[fixture]
fn world() -> PlannerWorld {
    PlannerWorld::default()
}

#[given("houses reporting KitKat nearby and KitKat with Mars further away")]
fn given_two_houses(world: &PlannerWorld) {
    world.houses.replace(vec![
        house("near", 174.771, -36.841, &["KitKat"]),
        house("far", FURTHER_HOUSE.x, FURTHER_HOUSE.y, &["KitKat", "Mars"]),
    ]);
}

#[given("a KitKat house 8 km away")]
fn given_distant_house(world: &PlannerWorld) {
    world.houses.replace(ring(CENTER, 1, 8.0, &["KitKat"]));
}

#[given("{count} KitKat houses around the center")]
fn given_many_houses(world: &PlannerWorld, count: u32) {
    world.houses.replace(ring(CENTER, count, 1.5, &["KitKat"]));
}

#[given("preferences desiring kitkat and mars")]
fn given_desiring_both(world: &PlannerWorld) {
    world
        .preferences
        .replace(Preferences::new().desiring("kitkat").desiring("mars"));
}

#[given("preferences desiring kitkat")]
fn given_desiring_kitkat(world: &PlannerWorld) {
    world.preferences.replace(Preferences::new().desiring("kitkat"));
}

#[given("preferences avoiding kitkat")]
fn given_avoiding_kitkat(world: &PlannerWorld) {
    world.preferences.replace(Preferences::new().avoiding("kitkat"));
}

#[when("I plan a route within {radius} km")]
fn when_plan(world: &PlannerWorld, radius: f64) {
    let store = MemoryStore::with_locations(world.houses.borrow().iter().cloned());
    let planner = GreedyPlanner::new(store, PreferenceScorer);
    let request = PlanRequest {
        center: Some(CENTER),
        radius_km: radius,
        preferences: world.preferences.borrow().clone(),
    };
    world.route.replace(planner.plan(&request));
}

#[then("the route visits {count} stops")]
fn then_stop_count(world: &PlannerWorld, count: usize) {
    let route = world.expect_route();
    assert_eq!(route.waypoints().first(), Some(&CENTER));
    assert_eq!(route.stops().len(), count);
}

#[then("the first stop is the house further away")]
fn then_first_stop_is_further(world: &PlannerWorld) {
    assert_eq!(world.expect_route().stops().first(), Some(&FURTHER_HOUSE));
}

#[then("every stop is within {radius} km of the center")]
fn then_within_radius(world: &PlannerWorld, radius: f64) {
    assert!(stops_within(&world.expect_route(), radius));
}

#[then("no route is proposed")]
fn then_no_route(world: &PlannerWorld) {
    assert!(world.route.borrow().is_none());
}

#[scenario(path = "tests/features/greedy_planner.feature", index = 0)]
fn higher_score_first(world: PlannerWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/greedy_planner.feature", index = 1)]
fn avoided_only(world: PlannerWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/greedy_planner.feature", index = 2)]
fn outside_radius(world: PlannerWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/greedy_planner.feature", index = 3)]
fn stop_cap(world: PlannerWorld) {
    let _ = world;
}
