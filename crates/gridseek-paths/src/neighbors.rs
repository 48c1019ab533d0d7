//! Fixed neighbor orders.
//!
//! Neighbor order decides tie-breaks in every strategy and the shape of
//! reconstructed paths on maps with several shortest paths, so both orders
//! are part of the public contract.

use gridseek_core::{Point, Range};

/// Offsets visited when a cell is expanded: up, down, left, right.
pub const EXPANSION_ORDER: [Point; 4] = [
    Point::new(0, -1),
    Point::new(0, 1),
    Point::new(-1, 0),
    Point::new(1, 0),
];

/// Offsets tried when walking a step ledger back to the start:
/// down, up, left, right.
pub const TRACE_ORDER: [Point; 4] = [
    Point::new(0, 1),
    Point::new(0, -1),
    Point::new(-1, 0),
    Point::new(1, 0),
];

/// In-bounds neighbors of `p` in [`EXPANSION_ORDER`].
#[inline]
pub fn expansion(p: Point, bounds: Range) -> impl Iterator<Item = Point> {
    ordered(p, bounds, EXPANSION_ORDER)
}

/// In-bounds neighbors of `p` in [`TRACE_ORDER`].
#[inline]
pub fn trace(p: Point, bounds: Range) -> impl Iterator<Item = Point> {
    ordered(p, bounds, TRACE_ORDER)
}

fn ordered(p: Point, bounds: Range, dirs: [Point; 4]) -> impl Iterator<Item = Point> {
    dirs.into_iter()
        .map(move |d| p + d)
        .filter(move |&n| bounds.contains(n))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expansion_order_interior() {
        let got: Vec<_> = expansion(Point::new(1, 1), Range::new(0, 0, 3, 3)).collect();
        assert_eq!(
            got,
            vec![
                Point::new(1, 0),
                Point::new(1, 2),
                Point::new(0, 1),
                Point::new(2, 1)
            ]
        );
    }

    #[test]
    fn trace_order_interior() {
        let got: Vec<_> = trace(Point::new(1, 1), Range::new(0, 0, 3, 3)).collect();
        assert_eq!(
            got,
            vec![
                Point::new(1, 2),
                Point::new(1, 0),
                Point::new(0, 1),
                Point::new(2, 1)
            ]
        );
    }

    #[test]
    fn corner_drops_out_of_bounds() {
        let got: Vec<_> = expansion(Point::new(0, 0), Range::new(0, 0, 3, 3)).collect();
        assert_eq!(got, vec![Point::new(0, 1), Point::new(1, 0)]);
        assert_eq!(expansion(Point::new(0, 0), Range::new(0, 0, 1, 1)).count(), 0);
    }
}
