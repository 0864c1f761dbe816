//! Shortest-path search on occupancy grids.
//!
//! - **A\*** with 4-directional movement and uniform step cost
//!   ([`PathFinder::search`])
//! - **BFS** step counts ([`bfs_steps`]), an independent reference for the
//!   A* result
//!
//! The estimate used by A* is pluggable through [`Heuristic`]; the default
//! is [`Manhattan`], which is admissible and consistent for unit steps in
//! the four cardinal directions.

mod astar;
mod bfs;
mod distance;

pub use astar::{PathFinder, SearchError};
pub use bfs::bfs_steps;
pub use distance::{Heuristic, Manhattan, manhattan};
