//! The occupancy [`Grid`]: cell states, start/goal markers, obstacle edits.

use crate::error::GridError;
use crate::geom::Point;

/// State of a single board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CellState {
    /// Open cell.
    #[default]
    Free,
    /// Obstacle.
    Blocked,
    /// The route origin marker.
    Start,
    /// The route destination marker.
    Goal,
}

impl CellState {
    /// Whether a cell in this state may appear on a route.
    #[inline]
    pub const fn is_traversable(self) -> bool {
        !matches!(self, Self::Blocked)
    }

    /// Character representation, for plain-text board dumps.
    pub const fn rune(self) -> char {
        match self {
            Self::Free => '.',
            Self::Blocked => '#',
            Self::Start => 'S',
            Self::Goal => 'G',
        }
    }
}

/// A fixed-size board of [`CellState`]s with one start and one goal marker.
///
/// The start and goal cells are set at construction and can never be turned
/// into obstacles; [`add_obstacle`](Grid::add_obstacle) and
/// [`remove_obstacle`](Grid::remove_obstacle) reject edits to them with
/// [`GridError::InvalidOperation`]. Dimensions are fixed for the grid's
/// lifetime.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Grid {
    cells: Vec<CellState>,
    width: i32,
    height: i32,
    start: Point,
    goal: Point,
}

impl Grid {
    /// Create a board with all cells free except the start and goal markers.
    ///
    /// Fails with [`GridError::InvalidConfiguration`] when `width` or
    /// `height` is not positive, when `start` or `goal` lies outside the
    /// board, or when they coincide.
    pub fn new(width: i32, height: i32, start: Point, goal: Point) -> Result<Self, GridError> {
        if width <= 0 || height <= 0 {
            return Err(GridError::InvalidConfiguration(format!(
                "dimensions must be positive, got {width}x{height}"
            )));
        }
        let in_bounds =
            |p: Point| p.x >= 0 && p.y >= 0 && p.x < width && p.y < height;
        if !in_bounds(start) {
            return Err(GridError::InvalidConfiguration(format!(
                "start {start} outside the {width}x{height} board"
            )));
        }
        if !in_bounds(goal) {
            return Err(GridError::InvalidConfiguration(format!(
                "goal {goal} outside the {width}x{height} board"
            )));
        }
        if start == goal {
            return Err(GridError::InvalidConfiguration(format!(
                "start and goal coincide at {start}"
            )));
        }

        let mut grid = Self {
            cells: vec![CellState::Free; (width * height) as usize],
            width,
            height,
            start,
            goal,
        };
        let si = grid.index(start);
        let gi = grid.index(goal);
        grid.cells[si] = CellState::Start;
        grid.cells[gi] = CellState::Goal;
        Ok(grid)
    }

    #[inline]
    fn index(&self, p: Point) -> usize {
        (p.y * self.width + p.x) as usize
    }

    /// Board width (number of columns).
    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Board height (number of rows).
    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Size as a point (width = x, height = y).
    #[inline]
    pub fn size(&self) -> Point {
        Point::new(self.width, self.height)
    }

    /// The start marker position.
    #[inline]
    pub fn start(&self) -> Point {
        self.start
    }

    /// The goal marker position.
    #[inline]
    pub fn goal(&self) -> Point {
        self.goal
    }

    /// Whether `p` lies inside the board.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        p.x >= 0 && p.y >= 0 && p.x < self.width && p.y < self.height
    }

    /// The state of the cell at `p`, or `None` if out of bounds.
    pub fn state_at(&self, p: Point) -> Option<CellState> {
        if !self.contains(p) {
            return None;
        }
        Some(self.cells[self.index(p)])
    }

    /// Mark the cell at `p` as an obstacle.
    ///
    /// Fails with [`GridError::OutOfBounds`] outside the board and with
    /// [`GridError::InvalidOperation`] on the start or goal cell.
    pub fn add_obstacle(&mut self, p: Point) -> Result<(), GridError> {
        let i = self.checked_edit_index(p)?;
        self.cells[i] = CellState::Blocked;
        Ok(())
    }

    /// Clear the obstacle at `p`. Clearing an already-free cell is a no-op.
    ///
    /// Fails with [`GridError::OutOfBounds`] outside the board and with
    /// [`GridError::InvalidOperation`] on the start or goal cell.
    pub fn remove_obstacle(&mut self, p: Point) -> Result<(), GridError> {
        let i = self.checked_edit_index(p)?;
        self.cells[i] = CellState::Free;
        Ok(())
    }

    fn checked_edit_index(&self, p: Point) -> Result<usize, GridError> {
        if !self.contains(p) {
            return Err(GridError::OutOfBounds(p));
        }
        let i = self.index(p);
        match self.cells[i] {
            CellState::Start | CellState::Goal => Err(GridError::InvalidOperation(p)),
            _ => Ok(i),
        }
    }

    /// Whether `p` is inside the board and not blocked.
    ///
    /// This is the sole admissibility gate used by route search: the start,
    /// goal and free cells are all traversable.
    #[inline]
    pub fn is_traversable(&self, p: Point) -> bool {
        self.contains(p) && self.cells[self.index(p)].is_traversable()
    }

    /// Row-major iterator over `(Point, CellState)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Point, CellState)> + '_ {
        let (w, h) = (self.width, self.height);
        (0..h)
            .flat_map(move |y| (0..w).map(move |x| Point::new(x, y)))
            .map(move |p| (p, self.cells[self.index(p)]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board() -> Grid {
        Grid::new(9, 6, Point::new(0, 0), Point::new(8, 5)).unwrap()
    }

    #[test]
    fn construction_places_markers() {
        let g = board();
        assert_eq!(g.state_at(Point::new(0, 0)), Some(CellState::Start));
        assert_eq!(g.state_at(Point::new(8, 5)), Some(CellState::Goal));
        assert_eq!(g.state_at(Point::new(4, 3)), Some(CellState::Free));
        assert_eq!(g.size(), Point::new(9, 6));
    }

    #[test]
    fn rejects_non_positive_dimensions() {
        for (w, h) in [(0, 6), (9, 0), (-1, 6), (9, -3)] {
            let err = Grid::new(w, h, Point::ZERO, Point::new(1, 0)).unwrap_err();
            assert!(matches!(err, GridError::InvalidConfiguration(_)));
        }
    }

    #[test]
    fn rejects_endpoints_outside_board() {
        let err = Grid::new(9, 6, Point::new(9, 0), Point::new(0, 0)).unwrap_err();
        assert!(matches!(err, GridError::InvalidConfiguration(_)));
        let err = Grid::new(9, 6, Point::new(0, 0), Point::new(0, 6)).unwrap_err();
        assert!(matches!(err, GridError::InvalidConfiguration(_)));
    }

    #[test]
    fn rejects_coinciding_endpoints() {
        let err = Grid::new(9, 6, Point::new(2, 2), Point::new(2, 2)).unwrap_err();
        assert!(matches!(err, GridError::InvalidConfiguration(_)));
    }

    #[test]
    fn obstacle_round_trip() {
        let mut g = board();
        let p = Point::new(4, 3);
        g.add_obstacle(p).unwrap();
        assert_eq!(g.state_at(p), Some(CellState::Blocked));
        assert!(!g.is_traversable(p));
        g.remove_obstacle(p).unwrap();
        assert_eq!(g.state_at(p), Some(CellState::Free));
        assert!(g.is_traversable(p));
    }

    #[test]
    fn removing_free_cell_is_noop() {
        let mut g = board();
        let p = Point::new(1, 1);
        g.remove_obstacle(p).unwrap();
        assert_eq!(g.state_at(p), Some(CellState::Free));
    }

    #[test]
    fn markers_cannot_be_edited() {
        let mut g = board();
        assert_eq!(
            g.add_obstacle(g.start()),
            Err(GridError::InvalidOperation(Point::new(0, 0)))
        );
        assert_eq!(
            g.remove_obstacle(g.goal()),
            Err(GridError::InvalidOperation(Point::new(8, 5)))
        );
        // Still intact.
        assert_eq!(g.state_at(g.start()), Some(CellState::Start));
        assert_eq!(g.state_at(g.goal()), Some(CellState::Goal));
    }

    #[test]
    fn out_of_bounds_edit_fails() {
        let mut g = board();
        let p = Point::new(9, 0);
        assert_eq!(g.add_obstacle(p), Err(GridError::OutOfBounds(p)));
        assert_eq!(g.remove_obstacle(p), Err(GridError::OutOfBounds(p)));
    }

    #[test]
    fn traversability() {
        let mut g = board();
        assert!(g.is_traversable(g.start()));
        assert!(g.is_traversable(g.goal()));
        assert!(g.is_traversable(Point::new(3, 3)));
        assert!(!g.is_traversable(Point::new(-1, 0)));
        assert!(!g.is_traversable(Point::new(0, 6)));
        g.add_obstacle(Point::new(3, 3)).unwrap();
        assert!(!g.is_traversable(Point::new(3, 3)));
    }

    #[test]
    fn iter_is_row_major_and_complete() {
        let g = board();
        let cells: Vec<_> = g.iter().collect();
        assert_eq!(cells.len(), 54);
        assert_eq!(cells[0], (Point::new(0, 0), CellState::Start));
        assert_eq!(cells[1], (Point::new(1, 0), CellState::Free));
        assert_eq!(cells[9], (Point::new(0, 1), CellState::Free));
        assert_eq!(cells[53], (Point::new(8, 5), CellState::Goal));
    }

    #[test]
    fn runes() {
        assert_eq!(CellState::Free.rune(), '.');
        assert_eq!(CellState::Blocked.rune(), '#');
        assert_eq!(CellState::Start.rune(), 'S');
        assert_eq!(CellState::Goal.rune(), 'G');
    }
}
