//! Random obstacle placement for *gridpath* grids.
//!
//! [`ObstacleGen`] turns an [`ObstacleConfig`] (dimensions plus obstacle
//! density) into a [`Grid`](gridpath_core::Grid) with exactly the requested
//! number of blocked cells.

pub mod obstacles;

pub use obstacles::{GenError, ObstacleConfig, ObstacleGen};
