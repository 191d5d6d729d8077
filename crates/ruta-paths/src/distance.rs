use ruta_core::Point;

/// Manhattan (L1) distance between two points.
///
/// Admissible and consistent for cardinal movement with unit step cost,
/// which is the only move set this crate supports.
#[inline]
pub fn manhattan(a: Point, b: Point) -> i32 {
    (a.x - b.x).abs() + (a.y - b.y).abs()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manhattan_distance() {
        assert_eq!(manhattan(Point::new(0, 0), Point::new(8, 5)), 13);
        assert_eq!(manhattan(Point::new(3, 4), Point::new(3, 4)), 0);
        assert_eq!(manhattan(Point::new(2, 1), Point::new(-1, 5)), 7);
    }
}
