//! Uniform random obstacle placement.

use std::fmt;

use gridpath_core::{Coord, Grid, GridError, Tile};
use log::debug;
use rand::{Rng, RngExt};

/// Dimensions and obstacle density of a generated grid.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ObstacleConfig {
    pub rows: usize,
    pub cols: usize,
    /// Percentage of cells to block, 0 to 100.
    pub density: f64,
}

impl Default for ObstacleConfig {
    fn default() -> Self {
        Self {
            rows: 10,
            cols: 10,
            density: 20.0,
        }
    }
}

impl ObstacleConfig {
    /// Number of cells that will be blocked: `floor(density% of rows × cols)`.
    pub fn obstacle_count(&self) -> usize {
        let total = self.rows.saturating_mul(self.cols);
        ((self.density / 100.0) * total as f64) as usize
    }
}

/// Errors that can occur when generating a grid.
#[derive(Debug, Clone, PartialEq)]
pub enum GenError {
    /// Density is NaN or outside 0 to 100.
    InvalidDensity(f64),
    /// The requested dimensions do not make a valid grid.
    Grid(GridError),
}

impl fmt::Display for GenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDensity(d) => {
                write!(f, "obstacle density must be between 0 and 100, got {d}")
            }
            Self::Grid(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for GenError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Grid(e) => Some(e),
            Self::InvalidDensity(_) => None,
        }
    }
}

impl From<GridError> for GenError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}

/// Grid generator owning its random source.
pub struct ObstacleGen<R: Rng> {
    pub rng: R,
}

impl<R: Rng> ObstacleGen<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Build a grid of the configured size with exactly
    /// [`obstacle_count`](ObstacleConfig::obstacle_count) distinct blocked
    /// cells, chosen uniformly at random.
    pub fn generate(&mut self, cfg: &ObstacleConfig) -> Result<Grid, GenError> {
        if !(0.0..=100.0).contains(&cfg.density) {
            return Err(GenError::InvalidDensity(cfg.density));
        }
        let mut grid = Grid::new(cfg.rows, cfg.cols)?;
        let n = self.block_random(&mut grid, cfg.obstacle_count());
        debug!(
            "gen: placed {n} obstacles on a {}x{} grid ({}%)",
            cfg.rows, cfg.cols, cfg.density
        );
        Ok(grid)
    }

    /// Block `count` distinct cells of `grid` (capped at the grid size),
    /// chosen without replacement. Returns the number of cells blocked.
    pub fn block_random(&mut self, grid: &mut Grid, count: usize) -> usize {
        let mut cells: Vec<Coord> = grid.iter().map(|(c, _)| c).collect();
        let count = count.min(cells.len());
        // Partial Fisher-Yates: the first `count` slots end up a uniform sample.
        for i in 0..count {
            let j = self.rng.random_range(i..cells.len());
            cells.swap(i, j);
            grid.set(cells[i], Tile::Blocked);
        }
        count
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn seeded(seed: u64) -> ObstacleGen<StdRng> {
        ObstacleGen::new(StdRng::seed_from_u64(seed))
    }

    #[test]
    fn places_exact_obstacle_count() {
        let cfg = ObstacleConfig {
            rows: 7,
            cols: 9,
            density: 30.0,
        };
        let grid = seeded(1).generate(&cfg).unwrap();
        assert_eq!(grid.rows(), 7);
        assert_eq!(grid.cols(), 9);
        // floor(0.3 * 63) = 18
        assert_eq!(grid.count(Tile::Blocked), 18);
    }

    #[test]
    fn density_bounds() {
        let mut mg = seeded(2);
        let empty = mg
            .generate(&ObstacleConfig {
                density: 0.0,
                ..Default::default()
            })
            .unwrap();
        assert_eq!(empty.count(Tile::Blocked), 0);

        let full = mg
            .generate(&ObstacleConfig {
                density: 100.0,
                ..Default::default()
            })
            .unwrap();
        assert_eq!(full.count(Tile::Free), 0);
    }

    #[test]
    fn invalid_density_rejected() {
        for d in [-1.0, 100.5, f64::NAN] {
            let cfg = ObstacleConfig {
                density: d,
                ..Default::default()
            };
            assert!(matches!(
                seeded(3).generate(&cfg),
                Err(GenError::InvalidDensity(_))
            ));
        }
    }

    #[test]
    fn empty_dimensions_rejected() {
        let cfg = ObstacleConfig {
            rows: 0,
            cols: 4,
            density: 10.0,
        };
        let err = seeded(4).generate(&cfg).unwrap_err();
        assert_eq!(
            err,
            GenError::Grid(GridError::EmptyDimensions { rows: 0, cols: 4 })
        );
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn oversized_dimensions_rejected() {
        let cfg = ObstacleConfig {
            rows: usize::MAX,
            cols: usize::MAX,
            density: 50.0,
        };
        let full = ObstacleConfig {
            density: 100.0,
            ..cfg
        };
        assert_eq!(full.obstacle_count(), usize::MAX);
        assert_eq!(
            seeded(6).generate(&cfg),
            Err(GenError::Grid(GridError::TooLarge {
                rows: usize::MAX,
                cols: usize::MAX
            }))
        );
    }

    #[test]
    fn same_seed_same_grid() {
        let cfg = ObstacleConfig::default();
        let a = seeded(42).generate(&cfg).unwrap();
        let b = seeded(42).generate(&cfg).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn block_random_caps_at_grid_size() {
        let mut grid = Grid::new(2, 2).unwrap();
        assert_eq!(seeded(5).block_random(&mut grid, 10), 4);
        assert_eq!(grid.count(Tile::Blocked), 4);
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn config_round_trip() {
        let cfg = ObstacleConfig {
            rows: 12,
            cols: 8,
            density: 35.5,
        };
        let json = serde_json::to_string(&cfg).unwrap();
        let back: ObstacleConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(cfg, back);
    }
}
