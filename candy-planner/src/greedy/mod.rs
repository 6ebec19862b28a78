//! `GreedyPlanner` implementation and the pure `plan_route` entry point.
//!
//! Both share one ordering: highest score first, nearest to the current
//! position on equal score, earliest candidate on an exact tie.

use candy_core::{
    CandyLocation, LocationStore, MAX_STOPS, PlanRequest, PreferenceScorer, Preferences, Route,
    RoutePlanner, Scorer, SearchArea, haversine_km,
};
use geo::Coord;
use log::debug;

/// Configuration for [`GreedyPlanner`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GreedyPlannerConfig {
    /// Most stops a route may contain, excluding the center.
    pub max_stops: usize,
}

impl Default for GreedyPlannerConfig {
    fn default() -> Self {
        Self {
            max_stops: MAX_STOPS,
        }
    }
}

/// Planner that visits the best-scoring houses first.
///
/// The planner is generic over the engine boundaries: a read-only location
/// store and a preference scorer.
///
/// # Examples
/// ```rust
/// use geo::Coord;
/// use candy_core::test_support::{MemoryStore, house};
/// use candy_core::{PlanRequest, PreferenceScorer, Preferences, RoutePlanner};
/// use candy_planner::GreedyPlanner;
///
/// let store = MemoryStore::with_location(house("1", 174.771, -36.841, &["KitKat"]));
/// let planner = GreedyPlanner::new(store, PreferenceScorer);
/// let request = PlanRequest {
///     center: Some(Coord { x: 174.77, y: -36.84 }),
///     preferences: Preferences::new().desiring("kitkat"),
///     ..PlanRequest::default()
/// };
/// let route = planner.plan(&request).expect("one matching house nearby");
/// assert_eq!(route.stops().len(), 1);
/// ```
#[derive(Debug)]
pub struct GreedyPlanner<S, C>
where
    S: LocationStore,
    C: Scorer,
{
    store: S,
    scorer: C,
    config: GreedyPlannerConfig,
}

impl<S, C> GreedyPlanner<S, C>
where
    S: LocationStore,
    C: Scorer,
{
    /// Construct a planner using default configuration.
    pub fn new(store: S, scorer: C) -> Self {
        Self::with_config(store, scorer, GreedyPlannerConfig::default())
    }

    /// Construct a planner with explicit configuration.
    pub const fn with_config(store: S, scorer: C, config: GreedyPlannerConfig) -> Self {
        Self {
            store,
            scorer,
            config,
        }
    }

    /// Candidates inside the search circle, in store order.
    fn candidates_near(&self, center: Coord<f64>, radius_km: f64) -> Vec<CandyLocation> {
        SearchArea::around(center, radius_km)
            .rects()
            .iter()
            .flat_map(|rect| self.store.get_locations_in_bbox(rect))
            .collect()
    }
}

impl<S, C> RoutePlanner for GreedyPlanner<S, C>
where
    S: LocationStore + Send + Sync,
    C: Scorer,
{
    fn plan(&self, request: &PlanRequest) -> Option<Route> {
        let center = request.center?;
        if request.preferences.is_empty() {
            debug!("no candy preferences given; not proposing a route");
            return None;
        }
        let candidates = self.candidates_near(center, request.radius_km);
        order_route(
            center,
            &candidates,
            &request.preferences,
            request.radius_km,
            &self.scorer,
            self.config.max_stops,
        )
    }
}

/// Plan a route over an in-memory candidate list.
///
/// Returns `None` when `center` is absent, when both preference sets are
/// empty, or when no candidate within `radius_km` has a positive score.
/// Otherwise the route starts at the center and holds at most
/// [`MAX_STOPS`] stops.
///
/// # Examples
/// ```rust
/// use geo::Coord;
/// use candy_core::{CandyLocation, Preferences};
/// use candy_planner::plan_route;
///
/// let center = Coord { x: 174.77, y: -36.84 };
/// let candidates = vec![
///     CandyLocation::new("a", Coord { x: 174.771, y: -36.841 }, vec!["kitkat".into()]),
///     CandyLocation::new(
///         "b",
///         Coord { x: 174.780, y: -36.850 },
///         vec!["kitkat".into(), "mars".into()],
///     ),
/// ];
/// let preferences = Preferences::new().desiring("kitkat").desiring("mars");
/// let route = plan_route(Some(center), &candidates, &preferences, 5.0)
///     .expect("both houses match");
/// assert_eq!(route.waypoints()[1], Coord { x: 174.780, y: -36.850 });
/// ```
#[must_use]
pub fn plan_route(
    center: Option<Coord<f64>>,
    candidates: &[CandyLocation],
    preferences: &Preferences,
    radius_km: f64,
) -> Option<Route> {
    let center = center?;
    if preferences.is_empty() {
        return None;
    }
    order_route(
        center,
        candidates,
        preferences,
        radius_km,
        &PreferenceScorer,
        MAX_STOPS,
    )
}

/// A candidate that survived the radius and score filters.
#[derive(Debug, Clone, Copy)]
struct Scored {
    location: Coord<f64>,
    score: i64,
}

fn order_route<C: Scorer + ?Sized>(
    center: Coord<f64>,
    candidates: &[CandyLocation],
    preferences: &Preferences,
    radius_km: f64,
    scorer: &C,
    max_stops: usize,
) -> Option<Route> {
    let pool: Vec<Scored> = candidates
        .iter()
        .filter(|candidate| haversine_km(center, candidate.location) <= radius_km)
        .map(|candidate| Scored {
            location: candidate.location,
            score: scorer.score(candidate, preferences),
        })
        .filter(|scored| scored.score > 0)
        .collect();

    debug!(
        "{} of {} candidates within {radius_km} km have a positive score",
        pool.len(),
        candidates.len()
    );
    if pool.is_empty() {
        return None;
    }

    let stops = greedy_order(center, pool, max_stops);
    if stops.is_empty() {
        return None;
    }
    Some(Route::new(center, stops))
}

/// Repeatedly walk to the best remaining candidate.
fn greedy_order(center: Coord<f64>, mut pool: Vec<Scored>, max_stops: usize) -> Vec<Coord<f64>> {
    let mut stops = Vec::with_capacity(max_stops.min(pool.len()));
    let mut current = center;
    while stops.len() < max_stops {
        let Some(index) = best_index(current, &pool) else {
            break;
        };
        let chosen = pool.remove(index);
        current = chosen.location;
        stops.push(chosen.location);
    }
    stops
}

/// Index of the next stop from `current`.
///
/// Comparisons are strict so the earliest candidate wins an exact tie.
fn best_index(current: Coord<f64>, pool: &[Scored]) -> Option<usize> {
    let mut best: Option<(usize, i64, f64)> = None;
    for (index, candidate) in pool.iter().enumerate() {
        let distance = haversine_km(current, candidate.location);
        let better = best.is_none_or(|(_, score, best_distance)| {
            candidate.score > score || (candidate.score == score && distance < best_distance)
        });
        if better {
            best = Some((index, candidate.score, distance));
        }
    }
    best.map(|(index, _, _)| index)
}

#[cfg(test)]
mod tests;
