//! Grid-based best-first route search
//!
//! Plans over an implicit 8-connected lattice of geographic coordinates
//! anchored at the start point, with a fixed step size in degrees. A* and
//! Dijkstra share the expansion loop and differ only in the frontier
//! ordering key.
//!
//! Key features:
//! - Hard exclusion of obstacle grid nodes (never entered)
//! - Soft, linearly decaying penalty for passing near obstacles
//! - Iteration cap as the sole safeguard against unbounded search
//! - "No path" reported as data: a single-element sentinel path

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};
use std::str::FromStr;

use itertools::iproduct;
use ordered_float::NotNan;

use crate::common::{GeoPath, GeoPoint, GridKey, ObstacleSet, RoutePlanner, RouterError, RouterResult};

/// Frontier ordering rule: estimated total cost (A*) or accumulated cost
/// only (Dijkstra)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchStrategy {
    AStar,
    Dijkstra,
}

impl FromStr for SearchStrategy {
    type Err = RouterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "astar" => Ok(SearchStrategy::AStar),
            "dijkstra" => Ok(SearchStrategy::Dijkstra),
            other => Err(RouterError::InvalidParameter(format!(
                "unknown strategy: {}",
                other
            ))),
        }
    }
}

/// Tunable parameters for the grid search
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchConfig {
    /// Lattice spacing in degrees
    pub step: f64,
    /// Base obstacle penalty weight
    pub obstacle_weight: f64,
    /// Radius within which obstacles contribute penalty, in degrees
    pub influence_radius: f64,
    /// Frontier expansion cap per search invocation
    pub max_iterations: usize,
    /// Floor for penalty-weight relaxation (see `RoutingSession`)
    pub min_obstacle_weight: f64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        let step = 0.005;
        Self {
            step,
            obstacle_weight: 100.0,
            influence_radius: 2.0 * step,
            max_iterations: 1000,
            min_obstacle_weight: 5.0,
        }
    }
}

impl SearchConfig {
    pub fn validate(&self) -> RouterResult<()> {
        if !(self.step.is_finite() && self.step > 0.0) {
            return Err(RouterError::InvalidParameter(
                "step must be positive and finite".to_string(),
            ));
        }
        if !(self.influence_radius.is_finite() && self.influence_radius > 0.0) {
            return Err(RouterError::InvalidParameter(
                "influence_radius must be positive and finite".to_string(),
            ));
        }
        if !(self.obstacle_weight.is_finite() && self.obstacle_weight >= 0.0) {
            return Err(RouterError::InvalidParameter(
                "obstacle_weight must be non-negative and finite".to_string(),
            ));
        }
        if !(self.min_obstacle_weight.is_finite() && self.min_obstacle_weight >= 0.0) {
            return Err(RouterError::InvalidParameter(
                "min_obstacle_weight must be non-negative and finite".to_string(),
            ));
        }
        if self.max_iterations == 0 {
            return Err(RouterError::InvalidParameter(
                "max_iterations must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// Frontier record for the open set (min-heap)
///
/// Carries the full path taken to reach its node; the path doubles as the
/// per-candidate cycle guard and, on success, the result.
#[derive(Debug)]
struct FrontierRecord {
    node: GeoPoint,
    g: f64,
    priority: NotNan<f64>,
    seq: u64,
    path: Vec<GeoPoint>,
}

impl Eq for FrontierRecord {}

impl PartialEq for FrontierRecord {
    fn eq(&self, other: &Self) -> bool {
        self.priority == other.priority && self.seq == other.seq
    }
}

impl Ord for FrontierRecord {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering for min-heap behavior; FIFO among equal keys
        other
            .priority
            .cmp(&self.priority)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for FrontierRecord {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// f64::min discards a NaN operand, so construction cannot fail.
fn frontier_key(value: f64) -> NotNan<f64> {
    NotNan::new(value.min(f64::MAX)).unwrap_or_default()
}

/// The 8 lattice neighbors of a node: four axis-aligned plus four diagonal,
/// each offset by exactly one step.
fn neighbors(node: &GeoPoint, step: f64) -> Vec<GeoPoint> {
    let deltas = [-1.0f64, 0.0, 1.0];
    iproduct!(deltas.iter().copied(), deltas.iter().copied())
        .filter(|&(d_lat, d_lng)| d_lat != 0.0 || d_lng != 0.0)
        .map(|(d_lat, d_lng)| GeoPoint::new(node.lat + d_lat * step, node.lng + d_lng * step))
        .collect()
}

/// Best-first search from `start` towards `end` on the implicit lattice.
///
/// Pure function of its arguments: each invocation owns its frontier and
/// best-cost table. Succeeds once a popped node lies within one step of
/// `end` (Euclidean, degree space) and returns the accumulated path with the
/// exact end coordinate appended. Returns the single-element sentinel
/// `[start]` when the iteration cap is exhausted or the frontier empties.
pub fn grid_search(
    start: GeoPoint,
    end: GeoPoint,
    obstacles: &ObstacleSet,
    strategy: SearchStrategy,
    config: &SearchConfig,
) -> GeoPath {
    let mut open: BinaryHeap<FrontierRecord> = BinaryHeap::new();
    let mut best_g: HashMap<GridKey, f64> = HashMap::new();
    let mut seq: u64 = 0;

    best_g.insert(start.grid_key(), 0.0);
    let start_priority = match strategy {
        SearchStrategy::AStar => start.distance_deg(&end),
        SearchStrategy::Dijkstra => 0.0,
    };
    open.push(FrontierRecord {
        node: start,
        g: 0.0,
        priority: frontier_key(start_priority),
        seq,
        path: vec![start],
    });

    let mut iterations = 0;
    while iterations < config.max_iterations {
        let current = match open.pop() {
            Some(record) => record,
            None => break,
        };
        iterations += 1;

        // Within one grid step of the end: done, append the exact end
        if current.node.distance_deg(&end) < config.step {
            let mut points = current.path;
            points.push(end);
            return GeoPath::from_points(points);
        }

        for neighbor in neighbors(&current.node, config.step) {
            let key = neighbor.grid_key();

            // Obstacle nodes are never entered
            if obstacles.contains(key) {
                continue;
            }
            // Cycle guard within this candidate path
            if current.path.iter().any(|p| p.grid_key() == key) {
                continue;
            }

            let move_cost = current.node.distance_deg(&neighbor);
            let penalty = obstacles.proximity_penalty(
                &neighbor,
                config.influence_radius,
                config.obstacle_weight,
            );
            let new_g = current.g + move_cost + penalty;

            // Relaxation skip: a cheaper-or-equal route to this node exists
            if let Some(&g) = best_g.get(&key) {
                if new_g >= g {
                    continue;
                }
            }
            best_g.insert(key, new_g);

            let priority = match strategy {
                SearchStrategy::AStar => new_g + neighbor.distance_deg(&end),
                SearchStrategy::Dijkstra => new_g,
            };
            let mut path = current.path.clone();
            path.push(neighbor);
            seq += 1;
            open.push(FrontierRecord {
                node: neighbor,
                g: new_g,
                priority: frontier_key(priority),
                seq,
                path,
            });
        }
    }

    GeoPath::from_points(vec![start])
}

/// Stateless grid route planner
///
/// Wraps `grid_search` behind the `RoutePlanner` seam and short-circuits to
/// the direct two-point route when no obstacle comes within the influence
/// radius of the straight segment.
#[derive(Debug, Clone)]
pub struct GridRoutePlanner {
    strategy: SearchStrategy,
    config: SearchConfig,
}

impl GridRoutePlanner {
    pub fn new(strategy: SearchStrategy, config: SearchConfig) -> RouterResult<Self> {
        config.validate()?;
        Ok(Self { strategy, config })
    }

    pub fn with_defaults(strategy: SearchStrategy) -> Self {
        Self {
            strategy,
            config: SearchConfig::default(),
        }
    }

    pub fn strategy(&self) -> SearchStrategy {
        self.strategy
    }

    /// Tunables this planner was validated with; immutable after construction.
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    pub(crate) fn set_strategy(&mut self, strategy: SearchStrategy) {
        self.strategy = strategy;
    }
}

impl RoutePlanner for GridRoutePlanner {
    fn plan(&self, start: GeoPoint, end: GeoPoint, obstacles: &ObstacleSet) -> GeoPath {
        if !obstacles.blocks_segment(&start, &end, self.config.influence_radius) {
            return GeoPath::from_points(vec![start, end]);
        }
        grid_search(start, end, obstacles, self.strategy, &self.config)
    }
}
