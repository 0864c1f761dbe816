//! Terminal front end for the A* demo: prompt parsing and grid rendering.
//!
//! The `astar` binary wires these helpers to stdin/stdout.

use std::collections::HashSet;
use std::fmt;
use std::io::{self, BufRead, Write};
use std::str::FromStr;

use crossterm::{
    queue,
    style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
};
use gridpath_core::{Coord, Grid, Tile};

// ---------------------------------------------------------------------------
// Input
// ---------------------------------------------------------------------------

/// Errors while reading user input.
#[derive(Debug)]
pub enum InputError {
    /// The line could not be understood.
    Parse(String),
    /// Input closed before an answer was given.
    Eof,
    Io(io::Error),
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse(s) => write!(f, "could not read input: {s}"),
            Self::Eof => write!(f, "unexpected end of input"),
            Self::Io(e) => write!(f, "I/O error: {e}"),
        }
    }
}

impl std::error::Error for InputError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for InputError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

/// Parse a single number, ignoring surrounding whitespace.
pub fn parse_number<T: FromStr>(line: &str) -> Result<T, InputError> {
    let s = line.trim();
    s.parse()
        .map_err(|_| InputError::Parse(format!("\u{201c}{s}\u{201d} is not a valid number")))
}

/// Parse `row col`. Whitespace, a comma and surrounding parentheses are all
/// accepted, so `3 4`, `3,4` and `(3, 4)` are equivalent.
pub fn parse_coord(line: &str) -> Result<Coord, InputError> {
    let s = line.trim().trim_start_matches('(').trim_end_matches(')');
    let parts: Vec<&str> = s
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|p| !p.is_empty())
        .collect();
    let [row, col] = parts[..] else {
        return Err(InputError::Parse(format!(
            "expected two numbers \u{201c}row col\u{201d}, got \u{201c}{}\u{201d}",
            line.trim()
        )));
    };
    Ok(Coord::new(parse_number(row)?, parse_number(col)?))
}

/// Whether a yes/no answer means "again". Accepts `y`/`s` answers in any
/// case; anything else, including an empty line, means no.
pub fn wants_again(line: &str) -> bool {
    matches!(
        line.trim().chars().next().map(|c| c.to_ascii_lowercase()),
        Some('y' | 's')
    )
}

/// Read one line after printing `msg`. Returns [`InputError::Eof`] when the
/// input is closed.
pub fn read_line<B: BufRead, W: Write>(
    input: &mut B,
    out: &mut W,
    msg: &str,
) -> Result<String, InputError> {
    write!(out, "{msg}")?;
    out.flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(InputError::Eof);
    }
    Ok(line)
}

/// Prompt until `parse` accepts the answer. Parse errors are reported on
/// `out` and the question is asked again; I/O errors and end of input are
/// returned.
pub fn prompt<B, W, T, F>(input: &mut B, out: &mut W, msg: &str, parse: F) -> Result<T, InputError>
where
    B: BufRead,
    W: Write,
    F: Fn(&str) -> Result<T, InputError>,
{
    loop {
        let line = read_line(input, out, msg)?;
        match parse(&line) {
            Ok(v) => return Ok(v),
            Err(InputError::Parse(e)) => writeln!(out, "{e}")?,
            Err(e) => return Err(e),
        }
    }
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

/// What is drawn at one cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    Free,
    Blocked,
    Path,
    Start,
    Goal,
}

impl Marker {
    pub const fn as_char(self) -> char {
        match self {
            Marker::Free => '.',
            Marker::Blocked => '#',
            Marker::Path => '*',
            Marker::Start => 'S',
            Marker::Goal => 'G',
        }
    }

    const fn color(self) -> Color {
        match self {
            Marker::Free => Color::White,
            Marker::Blocked => Color::DarkGrey,
            Marker::Path => Color::Rgb {
                r: 255,
                g: 165,
                b: 0,
            },
            Marker::Start => Color::Green,
            Marker::Goal => Color::Blue,
        }
    }
}

/// Grid cells and endpoints to overlay on them.
#[derive(Debug, Clone, Copy)]
pub struct Scene<'a> {
    pub grid: &'a Grid,
    pub start: Option<Coord>,
    pub goal: Option<Coord>,
    pub path: Option<&'a [Coord]>,
}

impl<'a> Scene<'a> {
    /// Just the grid, no overlay.
    pub fn new(grid: &'a Grid) -> Self {
        Self {
            grid,
            start: None,
            goal: None,
            path: None,
        }
    }

    /// Every cell with its marker, row-major. Endpoints take precedence over
    /// the path, which takes precedence over the tile.
    pub fn markers(&self) -> impl Iterator<Item = (Coord, Marker)> + '_ {
        let on_path: HashSet<Coord> = self.path.unwrap_or_default().iter().copied().collect();
        self.grid
            .iter()
            .map(move |(c, tile)| (c, self.marker(c, tile, &on_path)))
    }

    fn marker(&self, c: Coord, tile: Tile, on_path: &HashSet<Coord>) -> Marker {
        if self.start == Some(c) {
            Marker::Start
        } else if self.goal == Some(c) {
            Marker::Goal
        } else if on_path.contains(&c) {
            Marker::Path
        } else if tile.is_free() {
            Marker::Free
        } else {
            Marker::Blocked
        }
    }

    /// Plain-text map, one line per row.
    pub fn render(&self) -> String {
        let mut s = String::with_capacity(self.grid.len() + self.grid.rows());
        for (c, m) in self.markers() {
            s.push(m.as_char());
            if c.col as usize == self.grid.cols() - 1 {
                s.push('\n');
            }
        }
        s
    }

    /// Coloured map written with crossterm.
    pub fn draw<W: Write>(&self, out: &mut W) -> io::Result<()> {
        for (c, m) in self.markers() {
            queue!(
                out,
                SetBackgroundColor(m.color()),
                SetForegroundColor(Color::Black),
                Print(m.as_char()),
                Print(' ')
            )?;
            if c.col as usize == self.grid.cols() - 1 {
                queue!(out, ResetColor, Print('\n'))?;
            }
        }
        queue!(out, ResetColor)?;
        out.flush()
    }
}

/// Format a path as `(r, c) -> (r, c) -> ...`.
pub fn format_path(path: &[Coord]) -> String {
    path.iter()
        .map(Coord::to_string)
        .collect::<Vec<_>>()
        .join(" -> ")
}
