use ruta_core::{Grid, Point};

/// Map interface used by the search engine.
///
/// A map is a rectangle of cells anchored at the origin; the only question
/// the engine ever asks about a cell is whether it can be stepped on.
pub trait Traversable {
    /// Board size (width = x, height = y).
    fn size(&self) -> Point;

    /// Whether `p` is inside the board and free to step on.
    fn is_traversable(&self, p: Point) -> bool;
}

impl Traversable for Grid {
    fn size(&self) -> Point {
        Grid::size(self)
    }

    fn is_traversable(&self, p: Point) -> bool {
        Grid::is_traversable(self, p)
    }
}
