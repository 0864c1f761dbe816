//! Interactive A* demo: generate a random grid, pick two cells, show the path.
//!
//! Run: cargo run --bin astar

use std::io::{self, Write};

use gridpath_demos::{
    InputError, Scene, format_path, parse_coord, parse_number, prompt, read_line, wants_again,
};
use gridpath_gen::{ObstacleConfig, ObstacleGen};
use gridpath_paths::PathFinder;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), InputError> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut out = io::stdout();
    let mut obstacle_gen = ObstacleGen::new(rand::rng());

    loop {
        let cfg = ObstacleConfig {
            rows: prompt(&mut input, &mut out, "Number of rows: ", parse_number)?,
            cols: prompt(&mut input, &mut out, "Number of columns: ", parse_number)?,
            density: prompt(&mut input, &mut out, "Obstacle percentage (0-100): ", parse_number)?,
        };
        let grid = match obstacle_gen.generate(&cfg) {
            Ok(grid) => grid,
            Err(e) => {
                writeln!(out, "{e}")?;
                continue;
            }
        };
        Scene::new(&grid).draw(&mut out)?;

        let start = prompt(&mut input, &mut out, "Start (row col): ", parse_coord)?;
        let goal = prompt(&mut input, &mut out, "Goal (row col): ", parse_coord)?;

        let scene = Scene {
            start: Some(start),
            goal: Some(goal),
            ..Scene::new(&grid)
        };
        match PathFinder::new(&grid, start, goal).search() {
            Ok(Some(path)) => {
                writeln!(out, "Path found ({} steps): {}", path.len() - 1, format_path(&path))?;
                Scene {
                    path: Some(&path),
                    ..scene
                }
                .draw(&mut out)?;
            }
            Ok(None) => writeln!(out, "No path found.")?,
            Err(e) => writeln!(out, "Cannot search: {e}")?,
        }

        let again = read_line(&mut input, &mut out, "\nStart again? (y/N): ")?;
        if !wants_again(&again) {
            writeln!(out, "Bye!")?;
            break;
        }
    }
    Ok(())
}
