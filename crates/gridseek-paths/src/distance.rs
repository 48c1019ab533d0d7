use gridseek_core::Point;

/// Manhattan (L1) distance between two points.
///
/// On a 4-connected uniform-cost grid this never overestimates the remaining
/// path length, so it is an admissible and consistent A* heuristic.
#[inline]
pub fn manhattan(a: Point, b: Point) -> i32 {
    (a.x - b.x).abs() + (a.y - b.y).abs()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manhattan_is_symmetric() {
        let a = Point::new(1, 5);
        let b = Point::new(4, 1);
        assert_eq!(manhattan(a, b), 7);
        assert_eq!(manhattan(b, a), 7);
        assert_eq!(manhattan(a, a), 0);
    }
}
