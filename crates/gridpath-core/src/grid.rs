//! The [`Grid`] type: a rectangular occupancy map of [`Tile`]s.
//!
//! A grid is plain owned storage. Mutation requires `&mut Grid`, so a grid
//! that is borrowed by a search cannot change underneath it.

use std::fmt;
use std::str::FromStr;

use crate::geom::Coord;

// ---------------------------------------------------------------------------
// Tile
// ---------------------------------------------------------------------------

/// Occupancy marker of a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Tile {
    /// The search may traverse this cell.
    #[default]
    Free,
    /// Obstacle.
    Blocked,
}

impl Tile {
    /// Character used by the text form of a grid.
    pub const fn as_char(self) -> char {
        match self {
            Tile::Free => '.',
            Tile::Blocked => '#',
        }
    }

    /// Parse a text-form character.
    pub const fn from_char(ch: char) -> Option<Tile> {
        match ch {
            '.' => Some(Tile::Free),
            '#' => Some(Tile::Blocked),
            _ => None,
        }
    }

    #[inline]
    pub const fn is_free(self) -> bool {
        matches!(self, Tile::Free)
    }
}

// ---------------------------------------------------------------------------
// GridError
// ---------------------------------------------------------------------------

/// Errors that can occur when building a grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// One of the dimensions is zero.
    EmptyDimensions { rows: usize, cols: usize },
    /// A row does not have the same length as the first one.
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// The text form contains a character other than `.` or `#`.
    InvalidChar { ch: char, at: Coord },
    /// A dimension exceeds what a [`Coord`] can address, or the cell count
    /// overflows `usize`.
    TooLarge { rows: usize, cols: usize },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyDimensions { rows, cols } => {
                write!(f, "grid: dimensions must be at least 1x1, got {rows}x{cols}")
            }
            Self::Ragged {
                row,
                expected,
                found,
            } => write!(
                f,
                "grid: row {row} has {found} cells, expected {expected}"
            ),
            Self::InvalidChar { ch, at } => {
                write!(f, "grid: invalid character \u{201c}{ch}\u{201d} at {at}")
            }
            Self::TooLarge { rows, cols } => {
                write!(f, "grid: {rows}x{cols} is too large")
            }
        }
    }
}

impl std::error::Error for GridError {}

// ---------------------------------------------------------------------------
// Grid
// ---------------------------------------------------------------------------

/// A `rows × cols` matrix of [`Tile`]s, stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    tiles: Vec<Tile>,
    rows: usize,
    cols: usize,
}

/// Largest row or column count: every cell must have an `i32` coordinate.
const MAX_DIM: usize = i32::MAX as usize;

/// Validate dimensions and return the cell count.
fn cell_count(rows: usize, cols: usize) -> Result<usize, GridError> {
    if rows == 0 || cols == 0 {
        return Err(GridError::EmptyDimensions { rows, cols });
    }
    if rows > MAX_DIM || cols > MAX_DIM {
        return Err(GridError::TooLarge { rows, cols });
    }
    rows.checked_mul(cols)
        .ok_or(GridError::TooLarge { rows, cols })
}

impl Grid {
    /// Create a grid with every cell [`Tile::Free`].
    ///
    /// Fails if a dimension is zero or larger than `i32::MAX`, or if the
    /// cell count overflows.
    pub fn new(rows: usize, cols: usize) -> Result<Self, GridError> {
        let len = cell_count(rows, cols)?;
        Ok(Self {
            tiles: vec![Tile::Free; len],
            rows,
            cols,
        })
    }

    /// Build a grid from a list of rows. All rows must have the same
    /// non-zero length.
    pub fn from_rows(rows: Vec<Vec<Tile>>) -> Result<Self, GridError> {
        let cols = rows.first().map_or(0, Vec::len);
        let n_rows = rows.len();
        let len = cell_count(n_rows, cols)?;
        let mut tiles = Vec::with_capacity(len);
        for (i, row) in rows.into_iter().enumerate() {
            if row.len() != cols {
                return Err(GridError::Ragged {
                    row: i,
                    expected: cols,
                    found: row.len(),
                });
            }
            tiles.extend(row);
        }
        Ok(Self {
            tiles,
            rows: n_rows,
            cols,
        })
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Total number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Always `false`: a grid has at least one cell.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    #[inline]
    fn index(&self, c: Coord) -> Option<usize> {
        if c.row < 0 || c.col < 0 {
            return None;
        }
        let (r, k) = (c.row as usize, c.col as usize);
        (r < self.rows && k < self.cols).then(|| r * self.cols + k)
    }

    /// Whether `c` lies inside the grid.
    #[inline]
    pub fn contains(&self, c: Coord) -> bool {
        self.index(c).is_some()
    }

    /// The tile at `c`, or `None` if out of bounds.
    #[inline]
    pub fn at(&self, c: Coord) -> Option<Tile> {
        self.index(c).map(|i| self.tiles[i])
    }

    /// Whether `c` is in bounds and free.
    #[inline]
    pub fn is_free(&self, c: Coord) -> bool {
        self.at(c).is_some_and(Tile::is_free)
    }

    /// Set the tile at `c`. Returns `false` (and does nothing) if `c` is
    /// out of bounds.
    pub fn set(&mut self, c: Coord, tile: Tile) -> bool {
        match self.index(c) {
            Some(i) => {
                self.tiles[i] = tile;
                true
            }
            None => false,
        }
    }

    /// Fill every cell with `tile`.
    pub fn fill(&mut self, tile: Tile) {
        self.tiles.fill(tile);
    }

    /// Count how many cells equal `tile`.
    pub fn count(&self, tile: Tile) -> usize {
        self.tiles.iter().filter(|&&t| t == tile).count()
    }

    /// Row-major iterator over `(Coord, Tile)` pairs.
    pub fn iter(&self) -> GridIter<'_> {
        GridIter {
            grid: self,
            pos: 0,
        }
    }

    /// Copy of the grid as a list of rows.
    pub fn to_rows(&self) -> Vec<Vec<Tile>> {
        self.tiles.chunks(self.cols).map(<[Tile]>::to_vec).collect()
    }
}

impl FromStr for Grid {
    type Err = GridError;

    /// Parse the text form: one line per row, `.` free and `#` blocked.
    /// Leading and trailing blank lines are ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lines: Vec<&str> = s
            .trim_matches(|c: char| c == '\n' || c == '\r')
            .lines()
            .map(str::trim_end)
            .collect();
        let mut rows = Vec::with_capacity(lines.len());
        for (r, line) in lines.iter().enumerate() {
            let mut row = Vec::with_capacity(line.len());
            for (k, ch) in line.chars().enumerate() {
                let tile = Tile::from_char(ch).ok_or(GridError::InvalidChar {
                    ch,
                    at: Coord::new(r as i32, k as i32),
                })?;
                row.push(tile);
            }
            rows.push(row);
        }
        Grid::from_rows(rows)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (r, row) in self.tiles.chunks(self.cols).enumerate() {
            if r > 0 {
                writeln!(f)?;
            }
            for t in row {
                write!(f, "{}", t.as_char())?;
            }
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// GridIter
// ---------------------------------------------------------------------------

/// Iterator over `(Coord, Tile)` pairs in a [`Grid`].
pub struct GridIter<'a> {
    grid: &'a Grid,
    pos: usize,
}

impl Iterator for GridIter<'_> {
    type Item = (Coord, Tile);

    fn next(&mut self) -> Option<Self::Item> {
        let tile = *self.grid.tiles.get(self.pos)?;
        let c = Coord::new(
            (self.pos / self.grid.cols) as i32,
            (self.pos % self.grid.cols) as i32,
        );
        self.pos += 1;
        Some((c, tile))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.grid.tiles.len() - self.pos;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for GridIter<'_> {}

impl<'a> IntoIterator for &'a Grid {
    type Item = (Coord, Tile);
    type IntoIter = GridIter<'a>;

    fn into_iter(self) -> GridIter<'a> {
        self.iter()
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Grid {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_rows().serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Grid {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let rows = Vec::<Vec<Tile>>::deserialize(deserializer)?;
        Grid::from_rows(rows).map_err(serde::de::Error::custom)
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn grid_round_trip() {
        let g: Grid = ".#\n#.\n..".parse().unwrap();
        let json = serde_json::to_string(&g).unwrap();
        let back: Grid = serde_json::from_str(&json).unwrap();
        assert_eq!(g, back);
    }

    #[test]
    fn ragged_json_rejected() {
        let json = r#"[["Free","Free"],["Free"]]"#;
        assert!(serde_json::from_str::<Grid>(json).is_err());
    }
}
