//! Walking a finished search back from the target to the start.
//!
//! Both walks return the route in start-to-target order, endpoints included.
//! A walk that runs out of predecessors fails loudly with
//! [`SearchError::ReconstructionFailure`] instead of returning a partial
//! route.

use gridseek_core::{GridMap, Point};

use crate::error::{SearchError, validated};
use crate::neighbors;
use crate::scoremap::ScoreMap;
use crate::stepmap::{StepMap, UNVISITED};

/// Rebuild a route from a step ledger.
///
/// From the target, repeatedly move to the first neighbor in
/// [`TRACE_ORDER`](neighbors::TRACE_ORDER) whose step is exactly one less.
pub fn trace_steps(map: &GridMap, steps: &StepMap) -> Result<Vec<Point>, SearchError> {
    let (start, target) = validated(map)?;
    let mut step = steps.at(target);
    if step == UNVISITED {
        return Err(failure(target));
    }

    let mut p = target;
    let mut path = vec![p];
    while p != start {
        p = neighbors::trace(p, map.range())
            .find(|&n| steps.at(n) == step - 1)
            .ok_or_else(|| failure(p))?;
        step -= 1;
        path.push(p);
    }
    path.reverse();
    Ok(path)
}

/// Rebuild a route by following A* back-pointers.
pub fn trace_parents(map: &GridMap, scores: &ScoreMap) -> Result<Vec<Point>, SearchError> {
    let (start, target) = validated(map)?;
    let mut p = target;
    let mut path = vec![p];
    while p != start {
        p = scores
            .get(p)
            .and_then(|s| s.parent)
            .ok_or_else(|| failure(p))?;
        path.push(p);
    }
    path.reverse();
    Ok(path)
}

fn failure(at: Point) -> SearchError {
    log::warn!("path reconstruction stuck at {at}");
    SearchError::ReconstructionFailure { at }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoremap::Score;
    use crate::testutil::map;

    #[test]
    fn steps_prefer_trace_order() {
        // Two equal routes around the corner.
        let m = map("S.\n.T");
        let mut steps = StepMap::new(m.range());
        steps.set(Point::new(0, 0), 0);
        steps.set(Point::new(1, 0), 1);
        steps.set(Point::new(0, 1), 1);
        steps.set(Point::new(1, 1), 2);
        let path = trace_steps(&m, &steps).unwrap();
        // down is out of bounds, up (1,0) qualifies before left (0,1)
        assert_eq!(
            path,
            vec![Point::new(0, 0), Point::new(1, 0), Point::new(1, 1)]
        );
    }

    #[test]
    fn steps_missing_predecessor_fails() {
        let m = map("S..T");
        let mut steps = StepMap::new(m.range());
        steps.set(Point::new(0, 0), 0);
        steps.set(Point::new(3, 0), 3);
        steps.set(Point::new(2, 0), 2);
        assert_eq!(
            trace_steps(&m, &steps),
            Err(SearchError::ReconstructionFailure {
                at: Point::new(2, 0)
            })
        );
    }

    #[test]
    fn steps_unreached_target_fails() {
        let m = map("S.T");
        let steps = StepMap::new(m.range());
        assert_eq!(
            trace_steps(&m, &steps),
            Err(SearchError::ReconstructionFailure {
                at: Point::new(2, 0)
            })
        );
    }

    #[test]
    fn parents_follow_back_pointers() {
        let m = map("S.\n.T");
        let mut scores = ScoreMap::new(m.range());
        let score = |g, parent| Score {
            g,
            h: 0,
            parent,
        };
        scores.insert(Point::new(0, 0), score(0, None));
        scores.insert(Point::new(0, 1), score(1, Some(Point::new(0, 0))));
        scores.insert(Point::new(1, 1), score(2, Some(Point::new(0, 1))));
        assert_eq!(
            trace_parents(&m, &scores),
            Ok(vec![Point::new(0, 0), Point::new(0, 1), Point::new(1, 1)])
        );
    }

    #[test]
    fn parents_missing_entry_fails() {
        let m = map("S..T");
        let mut scores = ScoreMap::new(m.range());
        scores.insert(
            Point::new(3, 0),
            Score {
                g: 3,
                h: 0,
                parent: Some(Point::new(2, 0)),
            },
        );
        assert_eq!(
            trace_parents(&m, &scores),
            Err(SearchError::ReconstructionFailure {
                at: Point::new(2, 0)
            })
        );
    }

    #[test]
    fn invalid_map_is_rejected() {
        let m = gridseek_core::GridMap::new(2, 2);
        let steps = StepMap::new(m.range());
        assert!(matches!(
            trace_steps(&m, &steps),
            Err(SearchError::InvalidConfiguration(_))
        ));
    }
}
