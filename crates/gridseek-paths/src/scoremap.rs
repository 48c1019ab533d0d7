use gridseek_core::{Point, Range};

/// A* bookkeeping for one discovered cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Score {
    /// Accumulated cost from the start along the best known path.
    pub g: i32,
    /// Heuristic estimate of the remaining cost to the target.
    pub h: i32,
    /// Predecessor on the best known path; `None` for the start.
    pub parent: Option<Point>,
}

impl Score {
    /// Estimated total cost, `g + h`.
    #[inline]
    pub fn f(&self) -> i32 {
        self.g + self.h
    }
}

/// Per-cell [`Score`] entries; a missing entry means undiscovered.
#[derive(Debug, Clone)]
pub struct ScoreMap {
    range: Range,
    scores: Vec<Option<Score>>,
}

impl ScoreMap {
    /// Create an empty map covering `range`.
    pub fn new(range: Range) -> Self {
        Self {
            range,
            scores: vec![None; range.len()],
        }
    }

    /// Forget every entry.
    pub fn clear(&mut self) {
        self.scores.fill(None);
    }

    /// Entry at `p`, if discovered.
    #[inline]
    pub fn get(&self, p: Point) -> Option<&Score> {
        self.range.index(p).and_then(|i| self.scores[i].as_ref())
    }

    #[inline]
    pub(crate) fn get_mut(&mut self, p: Point) -> Option<&mut Score> {
        self.range.index(p).and_then(|i| self.scores[i].as_mut())
    }

    /// Create or overwrite the entry at `p`. Out-of-range points are ignored.
    pub fn insert(&mut self, p: Point, score: Score) {
        if let Some(i) = self.range.index(p) {
            self.scores[i] = Some(score);
        }
    }

    /// Number of discovered cells.
    pub fn discovered(&self) -> usize {
        self.scores.iter().filter(|s| s.is_some()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_get_clear() {
        let mut sm = ScoreMap::new(Range::new(0, 0, 4, 4));
        assert!(sm.get(Point::new(1, 2)).is_none());
        let s = Score {
            g: 3,
            h: 4,
            parent: Some(Point::new(1, 1)),
        };
        sm.insert(Point::new(1, 2), s);
        sm.insert(Point::new(7, 7), s);
        assert_eq!(sm.get(Point::new(1, 2)), Some(&s));
        assert_eq!(sm.get(Point::new(1, 2)).map(Score::f), Some(7));
        assert_eq!(sm.discovered(), 1);

        if let Some(e) = sm.get_mut(Point::new(1, 2)) {
            e.g = 2;
        }
        assert_eq!(sm.get(Point::new(1, 2)).map(|s| s.g), Some(2));

        sm.clear();
        assert_eq!(sm.discovered(), 0);
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn score_round_trip() {
        let s = Score {
            g: 5,
            h: 2,
            parent: Some(Point::new(3, 7)),
        };
        let json = serde_json::to_string(&s).unwrap();
        let back: Score = serde_json::from_str(&json).unwrap();
        assert_eq!(back, s);
    }
}
