//! Fixtures shared by the search tests.

use gridseek_core::{GridMap, Point, maptext};
use rand::rngs::SmallRng;
use rand::{RngExt, SeedableRng};

/// Parse a strict-format map, panicking on malformed fixtures.
pub(crate) fn map(s: &str) -> GridMap {
    maptext::parse(s).unwrap()
}

/// A `width` × `height` map with roughly `wall_pct` percent walls and a
/// distinct start and target on free cells.
pub(crate) fn random_map(seed: u64, width: i32, height: i32, wall_pct: u32) -> GridMap {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut m = GridMap::new(width, height);
    for p in m.range() {
        if rng.random_range(0..100) < wall_pct {
            m.set_wall(p, true).unwrap();
        }
    }
    let start = Point::new(rng.random_range(0..width), rng.random_range(0..height));
    let mut target = start;
    while target == start {
        target = Point::new(rng.random_range(0..width), rng.random_range(0..height));
    }
    for p in [start, target] {
        m.set_wall(p, false).unwrap();
    }
    m.set_start(start).unwrap();
    m.set_target(target).unwrap();
    m
}

/// Assert that `path` runs from start to target over 4-adjacent,
/// non-wall cells without repeating a cell.
pub(crate) fn assert_valid_path(m: &GridMap, path: &[Point]) {
    assert_eq!(path.first().copied(), m.start(), "path must begin at start");
    assert_eq!(path.last().copied(), m.target(), "path must end at target");
    for w in path.windows(2) {
        assert!(w[0].is_adjacent(w[1]), "{} and {} are not adjacent", w[0], w[1]);
    }
    for (i, p) in path.iter().enumerate() {
        assert!(!m.is_wall(*p), "path crosses wall at {p}");
        assert!(!path[i + 1..].contains(p), "path revisits {p}");
    }
}

/// Shortest start-to-target edge count found by enumerating simple paths.
///
/// Exponential; only meant for tiny maps.
pub(crate) fn brute_force_len(m: &GridMap) -> Option<usize> {
    let (start, target) = m.validate().ok()?;
    let mut on_path = vec![false; m.range().len()];
    let mut best = None;
    walk(m, start, target, 0, &mut on_path, &mut best);
    best
}

fn walk(
    m: &GridMap,
    p: Point,
    target: Point,
    len: usize,
    on_path: &mut [bool],
    best: &mut Option<usize>,
) {
    if p == target {
        *best = Some(best.map_or(len, |b: usize| b.min(len)));
        return;
    }
    if best.is_some_and(|b| len >= b) {
        return;
    }
    let Some(i) = m.range().index(p) else {
        return;
    };
    on_path[i] = true;
    for d in [(0, -1), (0, 1), (-1, 0), (1, 0)] {
        let n = p.shift(d.0, d.1);
        let free = n == target || m.is_free(n);
        if free && m.range().index(n).is_some_and(|j| !on_path[j]) {
            walk(m, n, target, len + 1, on_path, best);
        }
    }
    on_path[i] = false;
}
