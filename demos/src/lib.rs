//! Shared pieces of the gridseek demo: random maps and text rendering.

use std::fmt::Write as _;

use gridseek_core::{CellState, GridMap, Point};
use gridseek_paths::Search;
use rand::{Rng, RngExt};

/// Default map width, matching the bordered map files.
pub const WIDTH: i32 = 30;
/// Default map height, matching the bordered map files.
pub const HEIGHT: i32 = 20;

/// Fill a fresh `width` × `height` map with walls at random, each cell
/// becoming a wall with probability `wall_pct` percent.
pub fn random_map(rng: &mut impl Rng, width: i32, height: i32, wall_pct: u32) -> GridMap {
    GridMap::with_walls(width, height, |_| rng.random_range(0..100) < wall_pct)
}

/// What to print inside visited cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layer {
    /// Distance from the start (`g` for A*).
    Steps,
    /// A* estimate `f = g + h`; empty for other strategies.
    Estimate,
}

/// Render `map` with the search's ledger and an optional path overlay.
///
/// Each cell takes four columns: walls are `###`, the endpoints `S` and
/// `T`, path cells `*`, cells still in the frontier are marked with `+`.
pub fn render(map: &GridMap, search: &dyn Search, path: Option<&[Point]>, layer: Layer) -> String {
    let frontier = search.frontier();
    let mut out = String::new();
    for y in 0..map.height() {
        for x in 0..map.width() {
            let p = Point::new(x, y);
            let on_path = path.is_some_and(|path| path.contains(&p));
            let label = match map.cell(p) {
                Some(CellState::Wall) => "###".to_string(),
                Some(CellState::Start) => "S".to_string(),
                Some(CellState::Target) => "T".to_string(),
                _ if on_path => "*".to_string(),
                _ => match cell_value(search, p, layer) {
                    Some(v) if frontier.contains(&p) => format!("+{v}"),
                    Some(v) => v.to_string(),
                    None => ".".to_string(),
                },
            };
            let _ = write!(out, "{label:>4}");
        }
        out.push('\n');
    }
    out
}

fn cell_value(search: &dyn Search, p: Point, layer: Layer) -> Option<i32> {
    match layer {
        Layer::Steps => search.current_step(p).ok().flatten(),
        Layer::Estimate => search.current_score(p).ok().flatten().map(|s| s.f()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridseek_core::maptext;
    use gridseek_paths::{Method, SearchEngine};
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    #[test]
    fn random_map_respects_extremes() {
        let mut rng = SmallRng::seed_from_u64(1);
        assert_eq!(random_map(&mut rng, 6, 4, 0).wall_count(), 0);
        assert_eq!(random_map(&mut rng, 6, 4, 100).wall_count(), 24);
    }

    #[test]
    fn render_marks_path_and_steps() {
        let map = maptext::parse("S.#\n..T").unwrap();
        let mut engine = SearchEngine::new(&map, Method::Bfs);
        engine.run(None).unwrap();
        let path = engine.reconstruct_path().unwrap().unwrap();
        let text = render(&map, &engine, Some(&path), Layer::Steps);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "   S   * ###");
        assert_eq!(lines[1], "   1   *   T");
    }

    #[test]
    fn render_estimate_layer() {
        let map = maptext::parse("S.T").unwrap();
        let mut engine = SearchEngine::new(&map, Method::Astar);
        engine.advance().unwrap();
        let text = render(&map, &engine, None, Layer::Estimate);
        // (1,0) has g = 1, h = 1 and is still open
        assert_eq!(text, "   S  +2   T\n");
    }

    #[test]
    fn bundled_maze_contrasts_strategies() {
        let mut map = maptext::parse_bordered(include_str!("../maps/maze.txt"), WIDTH, HEIGHT);
        map.set_start(Point::new(0, 0)).unwrap();
        map.set_target(Point::new(WIDTH - 1, HEIGHT - 1)).unwrap();
        let mut lengths = Vec::new();
        for method in Method::ALL {
            let mut engine = SearchEngine::new(&map, method);
            engine.run(None).unwrap();
            let path = engine.reconstruct_path().unwrap().unwrap();
            lengths.push(path.len() - 1);
        }
        assert_eq!(lengths, vec![150, 152, 150]);
    }
}
