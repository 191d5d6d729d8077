//! Board rendering: colored cell blocks, with the found route overlaid.

use std::collections::HashSet;

use crossterm::style::Stylize;
use ruta_core::{CellState, Grid, Point};

/// Two-column block used for colored cells.
const BLOCK: &str = "██";
const EMPTY: &str = "  ";

/// Render the board with colored cells, one two-column block per cell:
/// white free cells, cyan start, blue goal, red obstacles, yellow route.
///
/// Start and goal keep their own colors even when the route crosses them.
pub fn render_board(grid: &Grid, path: &[Point]) -> String {
    let on_path: HashSet<Point> = path.iter().copied().collect();
    let mut out = String::new();
    for (p, state) in grid.iter() {
        let block = match state {
            CellState::Start => EMPTY.on_cyan(),
            CellState::Goal => EMPTY.on_blue(),
            CellState::Blocked => BLOCK.red(),
            CellState::Free if on_path.contains(&p) => BLOCK.yellow(),
            CellState::Free => EMPTY.on_white(),
        };
        out.push_str(&block.to_string());
        if p.x == grid.width() - 1 {
            out.push('\n');
        }
    }
    out
}

/// Plain-text board dump: `.` free, `#` obstacle, `S`/`G` markers, `*` route.
pub fn render_plain(grid: &Grid, path: &[Point]) -> String {
    let on_path: HashSet<Point> = path.iter().copied().collect();
    let mut out = String::new();
    for (p, state) in grid.iter() {
        let ch = match state {
            CellState::Free if on_path.contains(&p) => '*',
            other => other.rune(),
        };
        out.push(ch);
        if p.x == grid.width() - 1 {
            out.push('\n');
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board() -> Grid {
        let mut g = Grid::new(4, 3, Point::new(0, 0), Point::new(3, 2)).unwrap();
        g.add_obstacle(Point::new(1, 1)).unwrap();
        g
    }

    #[test]
    fn plain_dump_without_route() {
        let g = board();
        assert_eq!(render_plain(&g, &[]), "S...\n.#..\n...G\n");
    }

    #[test]
    fn plain_dump_overlays_route_but_not_markers() {
        let g = board();
        let path = vec![
            Point::new(0, 0),
            Point::new(0, 1),
            Point::new(0, 2),
            Point::new(1, 2),
            Point::new(2, 2),
            Point::new(3, 2),
        ];
        assert_eq!(render_plain(&g, &path), "S...\n*#..\n***G\n");
    }

    #[test]
    fn colored_dump_has_one_line_per_row() {
        let g = board();
        let out = render_board(&g, &[]);
        assert_eq!(out.matches('\n').count(), 3);
        // Obstacles render as full blocks, free cells as spaces.
        assert!(out.contains(BLOCK));
        assert!(out.contains(EMPTY));
    }
}
