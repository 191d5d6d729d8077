//! Line-oriented input parsing for the interactive planner.
//!
//! The user speaks in `row col` pairs; internally the board uses points
//! with x = column and y = row.

use ruta_core::Point;

/// A parsed obstacle-menu line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Block a cell.
    Add(Point),
    /// Unblock a cell.
    Remove(Point),
    /// Leave the editing loop and run the search.
    Done,
}

/// Parse `"row col"` into a board point.
pub fn parse_cell(s: &str) -> Option<Point> {
    let mut it = s.split_whitespace();
    let row: i32 = it.next()?.parse().ok()?;
    let col: i32 = it.next()?.parse().ok()?;
    if it.next().is_some() {
        return None;
    }
    Some(Point::new(col, row))
}

/// Parse `"rows cols"` into `(width, height)`.
pub fn parse_size(s: &str) -> Option<(i32, i32)> {
    let mut it = s.split_whitespace();
    let rows: i32 = it.next()?.parse().ok()?;
    let cols: i32 = it.next()?.parse().ok()?;
    if it.next().is_some() {
        return None;
    }
    Some((cols, rows))
}

/// Parse an obstacle-menu line: `add R C`, `remove R C`, or `done`.
pub fn parse_command(s: &str) -> Option<Command> {
    let s = s.trim();
    if s.eq_ignore_ascii_case("done") {
        return Some(Command::Done);
    }
    let (verb, rest) = s.split_once(char::is_whitespace)?;
    let cell = parse_cell(rest)?;
    match verb.to_ascii_lowercase().as_str() {
        "add" => Some(Command::Add(cell)),
        "remove" | "rm" => Some(Command::Remove(cell)),
        _ => None,
    }
}
