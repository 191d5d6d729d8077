use std::collections::BinaryHeap;

use ruta_core::{Grid, Point};

use crate::distance::manhattan;
use crate::traits::Traversable;

/// Cost assigned to cells not yet reached by the current search.
const UNREACHED: i32 = i32::MAX;

/// Per-cell search bookkeeping.
///
/// `parent` indexes the node table; `usize::MAX` marks the start node.
/// `generation` tags the search run a node belongs to, so the table can be
/// reused without clearing it between runs.
#[derive(Clone)]
struct Node {
    g: i32,
    f: i32,
    parent: usize,
    generation: u32,
    open: bool,
}

impl Default for Node {
    fn default() -> Self {
        Self {
            g: UNREACHED,
            f: 0,
            parent: usize::MAX,
            generation: 0,
            open: false,
        }
    }
}

/// Reference into the node table, ordered by `f` for use in `BinaryHeap`.
#[derive(Clone, Copy, Eq, PartialEq)]
struct NodeRef {
    idx: usize,
    f: i32,
}

impl Ord for NodeRef {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reverse so BinaryHeap (a max-heap) pops smallest f first; equal f
        // falls back to the smaller cell index, keeping pops deterministic.
        other.f.cmp(&self.f).then_with(|| other.idx.cmp(&self.idx))
    }
}

impl PartialOrd for NodeRef {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// A\* search engine for boards of a fixed size.
///
/// The node table is allocated once; repeated searches reuse it, with a
/// generation counter lazily invalidating entries from earlier runs. One
/// call to [`find_path`](PathFinder::find_path) is one complete search.
pub struct PathFinder {
    width: usize,
    height: usize,
    nodes: Vec<Node>,
    generation: u32,
}

impl PathFinder {
    /// Create a finder sized for `map`. Any map of the same size can be
    /// searched with it afterwards.
    pub fn new(map: &impl Traversable) -> Self {
        let size = map.size();
        let w = size.x.max(0) as usize;
        let h = size.y.max(0) as usize;
        Self {
            width: w,
            height: h,
            nodes: vec![Node::default(); w * h],
            generation: 0,
        }
    }

    /// Convert a point to a flat table index. `None` if out of range.
    #[inline]
    fn idx(&self, p: Point) -> Option<usize> {
        if p.x >= 0 && p.y >= 0 && (p.x as usize) < self.width && (p.y as usize) < self.height {
            Some(p.y as usize * self.width + p.x as usize)
        } else {
            None
        }
    }

    /// Convert a flat table index back to a point.
    #[inline]
    fn point(&self, idx: usize) -> Point {
        Point::new((idx % self.width) as i32, (idx / self.width) as i32)
    }

    /// Compute the shortest path from `from` to `to` on `map`.
    ///
    /// Moves are cardinal with uniform cost 1 and gated solely by
    /// [`Traversable::is_traversable`]. Frontier entries are popped by
    /// smallest `f = g + h` with ties broken by smallest cell index; a cell
    /// may carry stale duplicate entries in the frontier, which are skipped
    /// when popped. Closed cells are never reopened — correct here because
    /// the Manhattan heuristic is consistent for this move set; do not reuse
    /// this loop with a heuristic that is not.
    ///
    /// Returns the full path including both endpoints, or `None` when no
    /// route exists (a normal outcome, not an error).
    pub fn find_path<M: Traversable>(
        &mut self,
        map: &M,
        from: Point,
        to: Point,
    ) -> Option<Vec<Point>> {
        let start_idx = self.idx(from)?;
        let goal_idx = self.idx(to)?;
        if !map.is_traversable(from) || !map.is_traversable(to) {
            return None;
        }
        if start_idx == goal_idx {
            return Some(vec![from]);
        }

        // Bump the generation to lazily invalidate all previous runs.
        self.generation = self.generation.wrapping_add(1);
        let cur_gen = self.generation;

        // Seed the frontier with the start node.
        {
            let node = &mut self.nodes[start_idx];
            node.g = 0;
            node.f = manhattan(from, to);
            node.parent = usize::MAX;
            node.generation = cur_gen;
            node.open = true;
        }

        let mut open: BinaryHeap<NodeRef> = BinaryHeap::new();
        open.push(NodeRef {
            idx: start_idx,
            f: self.nodes[start_idx].f,
        });

        let found = 'search: loop {
            let Some(current) = open.pop() else {
                break 'search false;
            };

            let ci = current.idx;

            // Skip stale entries: superseded duplicates and leftovers from
            // earlier generations.
            if self.nodes[ci].generation != cur_gen || !self.nodes[ci].open {
                continue;
            }

            if ci == goal_idx {
                break 'search true;
            }

            self.nodes[ci].open = false;
            let current_g = self.nodes[ci].g;
            let current_point = self.point(ci);

            for np in current_point.neighbors_4() {
                let Some(ni) = self.idx(np) else {
                    continue;
                };
                if !map.is_traversable(np) {
                    continue;
                }
                let tentative_g = current_g + 1;

                let n = &mut self.nodes[ni];
                if n.generation == cur_gen {
                    // Closed cells stay closed; open ones only improve.
                    if !n.open || tentative_g >= n.g {
                        continue;
                    }
                } else {
                    n.generation = cur_gen;
                    n.g = UNREACHED;
                }

                n.g = tentative_g;
                n.f = tentative_g + manhattan(np, to);
                n.parent = ci;
                n.open = true;

                open.push(NodeRef { idx: ni, f: n.f });
            }
        };

        if !found {
            return None;
        }

        // Reconstruct by walking parent links back to the start.
        let mut path = Vec::new();
        let mut ci = goal_idx;
        while ci != usize::MAX {
            path.push(self.point(ci));
            ci = self.nodes[ci].parent;
        }
        path.reverse();
        Some(path)
    }
}

/// Run one search over `grid` between its own start and goal markers.
pub fn shortest_path(grid: &Grid) -> Option<Vec<Point>> {
    let mut finder = PathFinder::new(grid);
    finder.find_path(grid, grid.start(), grid.goal())
}
