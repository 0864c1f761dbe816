use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap, HashSet};
use std::fmt;

use gridpath_core::{Coord, Grid};
use log::{debug, trace};

use crate::distance::{Heuristic, Manhattan};

// ---------------------------------------------------------------------------
// SearchError
// ---------------------------------------------------------------------------

/// Endpoints rejected before the search starts.
///
/// An unreachable goal is not an error: [`PathFinder::search`] reports it as
/// `Ok(None)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchError {
    StartOutOfBounds(Coord),
    GoalOutOfBounds(Coord),
    StartBlocked(Coord),
    GoalBlocked(Coord),
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::StartOutOfBounds(c) => write!(f, "start {c} is outside the grid"),
            Self::GoalOutOfBounds(c) => write!(f, "goal {c} is outside the grid"),
            Self::StartBlocked(c) => write!(f, "start {c} is on a blocked cell"),
            Self::GoalBlocked(c) => write!(f, "goal {c} is on a blocked cell"),
        }
    }
}

impl std::error::Error for SearchError {}

// ---------------------------------------------------------------------------
// Frontier entry
// ---------------------------------------------------------------------------

/// Open-list entry, ordered for use in `BinaryHeap` so that the smallest `f`
/// pops first. Equal `f` pops the larger `g` first, then the smaller
/// coordinate.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
struct FrontierEntry {
    f: u32,
    g: u32,
    coord: Coord,
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .f
            .cmp(&self.f)
            .then(self.g.cmp(&other.g))
            .then(other.coord.cmp(&self.coord))
    }
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// ---------------------------------------------------------------------------
// PathFinder
// ---------------------------------------------------------------------------

/// A* search between two cells of a borrowed [`Grid`].
///
/// Movement is one step north, south, west or east onto a free cell, each
/// step costing 1. The endpoints are only checked when [`search`] runs.
///
/// [`search`]: PathFinder::search
#[derive(Debug, Clone)]
pub struct PathFinder<'a, H = Manhattan> {
    grid: &'a Grid,
    start: Coord,
    goal: Coord,
    heuristic: H,
}

impl<'a> PathFinder<'a> {
    /// Create a finder using the [`Manhattan`] heuristic.
    pub fn new(grid: &'a Grid, start: Coord, goal: Coord) -> Self {
        Self::with_heuristic(grid, start, goal, Manhattan)
    }
}

impl<'a, H: Heuristic> PathFinder<'a, H> {
    /// Create a finder with a custom heuristic. It must be admissible for
    /// the returned paths to be shortest.
    pub fn with_heuristic(grid: &'a Grid, start: Coord, goal: Coord, heuristic: H) -> Self {
        Self {
            grid,
            start,
            goal,
            heuristic,
        }
    }

    pub fn grid(&self) -> &'a Grid {
        self.grid
    }

    pub fn start(&self) -> Coord {
        self.start
    }

    pub fn goal(&self) -> Coord {
        self.goal
    }

    /// Whether `c` is inside the grid and free.
    #[inline]
    pub fn is_passable(&self, c: Coord) -> bool {
        self.grid.is_free(c)
    }

    /// Passable cardinal neighbours of `c`, in the order north, south, west,
    /// east.
    pub fn neighbors(&self, c: Coord) -> impl Iterator<Item = Coord> + '_ {
        c.neighbors_4()
            .into_iter()
            .filter(move |&n| self.is_passable(n))
    }

    fn check_endpoints(&self) -> Result<(), SearchError> {
        if !self.grid.contains(self.start) {
            return Err(SearchError::StartOutOfBounds(self.start));
        }
        if !self.is_passable(self.start) {
            return Err(SearchError::StartBlocked(self.start));
        }
        if !self.grid.contains(self.goal) {
            return Err(SearchError::GoalOutOfBounds(self.goal));
        }
        if !self.is_passable(self.goal) {
            return Err(SearchError::GoalBlocked(self.goal));
        }
        Ok(())
    }

    /// Compute a shortest path from start to goal.
    ///
    /// Returns the full path (including both endpoints), `Ok(None)` if the
    /// goal cannot be reached, or a [`SearchError`] if an endpoint is out of
    /// bounds or blocked. When start equals goal the path is `[start]`.
    ///
    /// All search state is local to the call, so repeated searches with the
    /// same inputs return the same path.
    pub fn search(&self) -> Result<Option<Vec<Coord>>, SearchError> {
        self.check_endpoints()?;
        let (start, goal) = (self.start, self.goal);
        debug!("astar: searching {start} -> {goal}");

        let mut open = BinaryHeap::new();
        let mut closed: HashSet<Coord> = HashSet::new();
        let mut best_g: HashMap<Coord, u32> = HashMap::new();
        let mut came_from: HashMap<Coord, Option<Coord>> = HashMap::new();

        best_g.insert(start, 0);
        came_from.insert(start, None);
        open.push(FrontierEntry {
            f: self.heuristic.estimate(start, goal),
            g: 0,
            coord: start,
        });

        while let Some(current) = open.pop() {
            // Stale duplicate of an already closed cell.
            if closed.contains(&current.coord) {
                continue;
            }

            if current.coord == goal {
                let path = reconstruct(&came_from, goal);
                debug!(
                    "astar: reached {goal} in {} steps after {} expansions",
                    path.len() - 1,
                    closed.len()
                );
                return Ok(Some(path));
            }

            closed.insert(current.coord);
            trace!(
                "astar: expand {} g={} f={}",
                current.coord, current.g, current.f
            );

            for next in self.neighbors(current.coord) {
                if closed.contains(&next) {
                    continue;
                }
                let g = current.g + 1;
                if best_g.get(&next).is_some_and(|&known| g >= known) {
                    continue;
                }
                best_g.insert(next, g);
                came_from.insert(next, Some(current.coord));
                open.push(FrontierEntry {
                    f: g + self.heuristic.estimate(next, goal),
                    g,
                    coord: next,
                });
            }
        }

        debug!(
            "astar: no path {start} -> {goal}, {} cells exhausted",
            closed.len()
        );
        Ok(None)
    }
}

/// Walk predecessors back from `goal` and return the path start-first.
fn reconstruct(came_from: &HashMap<Coord, Option<Coord>>, goal: Coord) -> Vec<Coord> {
    let mut path = vec![goal];
    let mut current = goal;
    while let Some(&Some(prev)) = came_from.get(&current) {
        path.push(prev);
        current = prev;
    }
    path.reverse();
    path
}
