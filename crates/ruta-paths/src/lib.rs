//! **ruta-paths** — shortest-path search for occupancy grids.
//!
//! The engine is an A\* search with a Manhattan heuristic and uniform step
//! cost, restricted to cardinal movement:
//!
//! - [`PathFinder`] owns the search state (node table and frontier) and is
//!   reusable across searches on boards of one size.
//! - [`Traversable`] is the seam between the engine and a map: board size
//!   plus a single passability predicate. [`ruta_core::Grid`] implements it.
//! - [`shortest_path`] runs one search between a grid's own start and goal
//!   markers.

mod astar;
mod distance;
mod traits;

pub use astar::{PathFinder, shortest_path};
pub use distance::manhattan;
pub use traits::Traversable;
