use gridpath_core::Coord;

/// Manhattan (L1) distance between two coordinates.
#[inline]
pub fn manhattan(a: Coord, b: Coord) -> u32 {
    (a.row - b.row).unsigned_abs() + (a.col - b.col).unsigned_abs()
}

/// Estimate of the remaining number of steps from `from` to `to`.
///
/// Implementations must never overestimate the true step count
/// (admissible), otherwise the first path A* returns may not be shortest.
pub trait Heuristic {
    fn estimate(&self, from: Coord, to: Coord) -> u32;
}

/// The [`manhattan`] distance as a [`Heuristic`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Manhattan;

impl Heuristic for Manhattan {
    #[inline]
    fn estimate(&self, from: Coord, to: Coord) -> u32 {
        manhattan(from, to)
    }
}

impl<F: Fn(Coord, Coord) -> u32> Heuristic for F {
    #[inline]
    fn estimate(&self, from: Coord, to: Coord) -> u32 {
        self(from, to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manhattan_is_symmetric() {
        let a = Coord::new(0, 0);
        let b = Coord::new(2, -3);
        assert_eq!(manhattan(a, b), 5);
        assert_eq!(manhattan(b, a), 5);
        assert_eq!(manhattan(a, a), 0);
    }

    #[test]
    fn closures_are_heuristics() {
        let zero = |_: Coord, _: Coord| 0u32;
        assert_eq!(zero.estimate(Coord::new(0, 0), Coord::new(9, 9)), 0);
        assert_eq!(Manhattan.estimate(Coord::new(1, 1), Coord::new(4, 5)), 7);
    }
}
