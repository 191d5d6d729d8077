//! **ruta-core** — occupancy-grid model for the *ruta* route planner.
//!
//! This crate provides the board state shared by the search engine and the
//! interactive planner: the [`Point`] coordinate type, per-cell
//! [`CellState`], and the [`Grid`] that owns cell occupancy and the
//! start/goal markers.

pub mod error;
pub mod geom;
pub mod grid;

pub use error::GridError;
pub use geom::Point;
pub use grid::{CellState, Grid};
