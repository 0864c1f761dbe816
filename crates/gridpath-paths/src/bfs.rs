use std::collections::VecDeque;

use gridpath_core::{Coord, Grid};

/// Number of 4-directional steps on a shortest path from `from` to `to`,
/// computed by breadth-first search.
///
/// Returns `None` if either endpoint is out of bounds or blocked, or if `to`
/// is unreachable.
pub fn bfs_steps(grid: &Grid, from: Coord, to: Coord) -> Option<usize> {
    if !grid.is_free(from) || !grid.is_free(to) {
        return None;
    }

    let cols = grid.cols();
    let idx = |c: Coord| c.row as usize * cols + c.col as usize;

    let mut dist = vec![usize::MAX; grid.len()];
    let mut queue = VecDeque::new();
    dist[idx(from)] = 0;
    queue.push_back(from);

    while let Some(c) = queue.pop_front() {
        let d = dist[idx(c)];
        if c == to {
            return Some(d);
        }
        for n in c.neighbors_4() {
            if !grid.is_free(n) || dist[idx(n)] != usize::MAX {
                continue;
            }
            dist[idx(n)] = d + 1;
            queue.push_back(n);
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_steps_around_walls() {
        let g: Grid = "...\n##.\n...".parse().unwrap();
        assert_eq!(bfs_steps(&g, Coord::new(0, 0), Coord::new(2, 0)), Some(6));
        assert_eq!(bfs_steps(&g, Coord::new(0, 0), Coord::new(0, 0)), Some(0));
    }

    #[test]
    fn unreachable_or_invalid() {
        let g: Grid = ".#.\n.#.\n.#.".parse().unwrap();
        assert_eq!(bfs_steps(&g, Coord::new(0, 0), Coord::new(0, 2)), None);
        assert_eq!(bfs_steps(&g, Coord::new(0, 0), Coord::new(0, 1)), None);
        assert_eq!(bfs_steps(&g, Coord::new(0, 0), Coord::new(5, 5)), None);
    }
}
