//! **gridpath-core**: occupancy grid types shared across the *gridpath*
//! workspace.
//!
//! This crate provides the data model consumed by the path search: integer
//! [`Coord`]s addressed by `(row, col)`, the [`Tile`] occupancy marker and
//! the rectangular [`Grid`] that holds one tile per cell.

pub mod geom;
pub mod grid;

pub use geom::Coord;
pub use grid::{Grid, GridError, GridIter, Tile};
