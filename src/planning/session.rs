//! Routing session: obstacle bookkeeping and the fallback policy
//!
//! Owns everything a sequence of user-driven searches shares between
//! invocations: the obstacle set, the chosen strategy and tunables, and the
//! last valid route. The search itself stays a pure function; obstacles are
//! only ever mutated between searches.

use crate::common::{GeoPath, GeoPoint, ObstacleSet, RoutePlanner, RouterResult};
use crate::planning::grid_search::{grid_search, GridRoutePlanner, SearchConfig, SearchStrategy};

/// Session state for interactive route planning
#[derive(Debug, Clone)]
pub struct RoutingSession {
    planner: GridRoutePlanner,
    obstacles: ObstacleSet,
    last_valid: Option<GeoPath>,
}

impl RoutingSession {
    pub fn new(strategy: SearchStrategy, config: SearchConfig) -> RouterResult<Self> {
        Ok(Self {
            planner: GridRoutePlanner::new(strategy, config)?,
            obstacles: ObstacleSet::new(),
            last_valid: None,
        })
    }

    pub fn with_defaults(strategy: SearchStrategy) -> Self {
        Self {
            planner: GridRoutePlanner::with_defaults(strategy),
            obstacles: ObstacleSet::new(),
            last_valid: None,
        }
    }

    pub fn strategy(&self) -> SearchStrategy {
        self.planner.strategy()
    }

    /// Switch strategy for subsequent searches.
    pub fn set_strategy(&mut self, strategy: SearchStrategy) {
        self.planner.set_strategy(strategy);
    }

    pub fn config(&self) -> &SearchConfig {
        self.planner.config()
    }

    pub fn obstacles(&self) -> &ObstacleSet {
        &self.obstacles
    }

    /// Mark an obstacle; returns false if its grid node was already marked.
    pub fn add_obstacle(&mut self, point: GeoPoint) -> bool {
        self.obstacles.add(point)
    }

    pub fn clear_obstacles(&mut self) {
        self.obstacles.clear();
    }

    /// Last non-trivial route produced by this session, if any.
    pub fn last_valid_path(&self) -> Option<&GeoPath> {
        self.last_valid.as_ref()
    }

    /// Drop obstacles and the remembered route.
    pub fn reset(&mut self) {
        self.obstacles.clear();
        self.last_valid = None;
    }

    /// Plan a route, relaxing the soft obstacle penalty on failure.
    ///
    /// While the search comes back trivial and the weight is above the
    /// configured floor, the penalty weight is halved and the search is
    /// retried; the hard obstacle exclusion is never relaxed. If every
    /// retry fails, the last valid route (when one exists) is substituted,
    /// trading path quality for availability.
    pub fn route(&mut self, start: GeoPoint, end: GeoPoint) -> GeoPath {
        let mut path = self.planner.plan(start, end, &self.obstacles);

        let base = *self.planner.config();
        let mut weight = base.obstacle_weight;
        while path.is_trivial() && weight > base.min_obstacle_weight {
            weight /= 2.0;
            let relaxed = SearchConfig {
                obstacle_weight: weight,
                ..base
            };
            path = grid_search(start, end, &self.obstacles, self.planner.strategy(), &relaxed);
        }

        if path.is_trivial() {
            if let Some(last) = &self.last_valid {
                return last.clone();
            }
        } else {
            self.last_valid = Some(path.clone());
        }
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const START: GeoPoint = GeoPoint { lat: 12.971, lng: 77.5946 };
    const STEP: f64 = 0.005;

    fn lattice(d_lat: f64, d_lng: f64) -> GeoPoint {
        GeoPoint::new(START.lat + d_lat * STEP, START.lng + d_lng * STEP)
    }

    /// Blocks the end node and all 8 of its lattice neighbors so no search
    /// can ever come within one step of the end.
    fn enclose(session: &mut RoutingSession, end: GeoPoint) {
        for d_lat in -1..=1 {
            for d_lng in -1..=1 {
                session.add_obstacle(GeoPoint::new(
                    end.lat + d_lat as f64 * STEP,
                    end.lng + d_lng as f64 * STEP,
                ));
            }
        }
    }

    #[test]
    fn test_direct_route_without_obstacles() {
        let mut session = RoutingSession::with_defaults(SearchStrategy::AStar);
        let end = GeoPoint::new(12.976, 77.5996);

        let path = session.route(START, end);
        assert_eq!(path.points(), &[START, end]);
        assert_eq!(session.last_valid_path(), Some(&path));
    }

    #[test]
    fn test_route_detours_around_obstacle() {
        let mut session = RoutingSession::with_defaults(SearchStrategy::AStar);
        let end = lattice(6.0, 6.0);
        session.add_obstacle(lattice(3.0, 3.0));

        let path = session.route(START, end);
        assert!(path.len() > 2);
        assert_eq!(path.last(), Some(&end));
    }

    #[test]
    fn test_strategy_switch() {
        // Generous cap: Dijkstra floods a wider region than A* here
        let config = SearchConfig {
            max_iterations: 5000,
            ..SearchConfig::default()
        };
        let mut session = RoutingSession::new(SearchStrategy::AStar, config).unwrap();
        let end = lattice(6.0, 6.0);
        session.add_obstacle(lattice(3.0, 3.0));

        let astar_path = session.route(START, end);
        session.set_strategy(SearchStrategy::Dijkstra);
        assert_eq!(session.strategy(), SearchStrategy::Dijkstra);

        let dijkstra_path = session.route(START, end);
        assert!(!astar_path.is_trivial());
        assert!(!dijkstra_path.is_trivial());
        assert_eq!(dijkstra_path.last(), Some(&end));
    }

    #[test]
    fn test_enclosed_end_falls_back_to_last_valid_path() {
        let mut session = RoutingSession::with_defaults(SearchStrategy::AStar);
        let end = lattice(2.0, 2.0);

        let first = session.route(START, end);
        assert!(!first.is_trivial());

        enclose(&mut session, end);
        let second = session.route(START, end);
        assert_eq!(second, first, "expected substitution of the last valid path");
    }

    #[test]
    fn test_enclosed_end_without_history_returns_sentinel() {
        let mut session = RoutingSession::with_defaults(SearchStrategy::AStar);
        let end = lattice(2.0, 2.0);
        enclose(&mut session, end);

        let path = session.route(START, end);
        assert!(path.is_trivial());
        assert_eq!(path.first(), Some(&START));
    }

    #[test]
    fn test_clear_obstacles_restores_direct_route() {
        let mut session = RoutingSession::with_defaults(SearchStrategy::AStar);
        let end = lattice(2.0, 2.0);
        enclose(&mut session, end);
        assert!(session.route(START, end).is_trivial());

        session.clear_obstacles();
        let path = session.route(START, end);
        assert_eq!(path.points(), &[START, end]);
    }

    #[test]
    fn test_reset_drops_history() {
        let mut session = RoutingSession::with_defaults(SearchStrategy::AStar);
        let end = GeoPoint::new(12.976, 77.5996);
        session.route(START, end);
        session.add_obstacle(GeoPoint::new(12.9735, 77.5971));

        session.reset();
        assert!(session.obstacles().is_empty());
        assert!(session.last_valid_path().is_none());
    }

    #[test]
    fn test_weight_relaxation_rescues_route() {
        // Obstacles flank the end one step before and one step beyond, so
        // every node within a step of the end carries a penalty from both.
        // At full weight the search floods cheap penalty-free nodes until
        // the cap hits; once halving shrinks the penalties below the move
        // costs, the end is reached well within the same cap.
        let config = SearchConfig {
            obstacle_weight: 0.64,
            min_obstacle_weight: 0.001,
            max_iterations: 60,
            ..SearchConfig::default()
        };
        let end = lattice(0.0, 4.0);
        let mut session = RoutingSession::new(SearchStrategy::AStar, config).unwrap();
        session.add_obstacle(lattice(0.0, 3.0));
        session.add_obstacle(lattice(0.0, 5.0));

        // At the configured weight the search exhausts its cap and fails.
        let full_weight = grid_search(
            START,
            end,
            session.obstacles(),
            SearchStrategy::AStar,
            &config,
        );
        assert!(full_weight.is_trivial());

        // No previous route exists, so a non-trivial result can only come
        // from a relaxed retry.
        let path = session.route(START, end);
        assert!(!path.is_trivial(), "relaxation never rescued the route");
        assert_eq!(path.first(), Some(&START));
        assert_eq!(path.last(), Some(&end));
        assert!(path
            .points()
            .iter()
            .all(|p| !session.obstacles().contains(p.grid_key())));
        assert_eq!(session.last_valid_path(), Some(&path));
    }

    #[test]
    fn test_relaxation_loop_terminates_when_every_search_fails() {
        // A one-iteration cap makes every grid search trivial; the weight
        // halving must still stop at the floor.
        let config = SearchConfig {
            max_iterations: 1,
            ..SearchConfig::default()
        };
        let mut session = RoutingSession::new(SearchStrategy::Dijkstra, config).unwrap();
        let end = lattice(6.0, 6.0);
        session.add_obstacle(lattice(3.0, 3.0));

        let path = session.route(START, end);
        assert!(path.is_trivial());
    }
}
