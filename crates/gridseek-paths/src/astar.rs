use std::collections::VecDeque;

use gridseek_core::{CellState, GridMap, Point};

use crate::distance::manhattan;
use crate::error::{SearchError, in_bounds, validated};
use crate::neighbors;
use crate::reconstruct;
use crate::scoremap::{Score, ScoreMap};
use crate::traits::{Search, SearchStatus};

/// Outcome of relaxing one neighbor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Relax {
    Target,
    Discovered,
    Improved,
    Skipped,
}

/// A* search with a Manhattan heuristic, one expansion per
/// [`advance`](Search::advance).
///
/// The open list is re-sorted by `f = g + h` before every expansion. There is
/// no closed set: a cell whose `g` improves after it was expanded goes back
/// into the open list and may be expanded again.
#[derive(Debug, Clone)]
pub struct Astar<'m> {
    map: &'m GridMap,
    scores: ScoreMap,
    open: VecDeque<Point>,
    status: SearchStatus,
    last: Option<Point>,
    expansions: usize,
}

impl<'m> Astar<'m> {
    /// Create a search over `map` in the [`SearchStatus::Ready`] state.
    pub fn new(map: &'m GridMap) -> Self {
        let mut astar = Self {
            map,
            scores: ScoreMap::new(map.range()),
            open: VecDeque::new(),
            status: SearchStatus::Ready,
            last: None,
            expansions: 0,
        };
        astar.reset();
        astar
    }

    /// The score ledger.
    pub fn scores(&self) -> &ScoreMap {
        &self.scores
    }

    fn relax(&mut self, cur: Point, cur_g: i32, n: Point, target: Point) -> Relax {
        let g = cur_g + 1;
        match self.map.cell(n) {
            Some(CellState::Target) => {
                self.scores.insert(
                    n,
                    Score {
                        g,
                        h: manhattan(n, target),
                        parent: Some(cur),
                    },
                );
                Relax::Target
            }
            Some(CellState::Free) => match self.scores.get_mut(n) {
                None => {
                    self.scores.insert(
                        n,
                        Score {
                            g,
                            h: manhattan(n, target),
                            parent: Some(cur),
                        },
                    );
                    self.open.push_back(n);
                    Relax::Discovered
                }
                Some(s) if s.g > g => {
                    s.g = g;
                    s.parent = Some(cur);
                    if !self.open.contains(&n) {
                        self.open.push_back(n);
                    }
                    Relax::Improved
                }
                Some(_) => Relax::Skipped,
            },
            _ => Relax::Skipped,
        }
    }
}

impl Search for Astar<'_> {
    fn advance(&mut self) -> Result<SearchStatus, SearchError> {
        if self.status.is_terminal() {
            return Ok(self.status);
        }
        let (_, target) = validated(self.map)?;

        let scores = &self.scores;
        self.open
            .make_contiguous()
            .sort_by_key(|&p| scores.get(p).map_or(i32::MAX, Score::f));
        let Some(cur) = self.open.pop_front() else {
            self.status = SearchStatus::Exhausted;
            return Ok(self.status);
        };
        let cur_g = self
            .scores
            .get(cur)
            .map(|s| s.g)
            .ok_or(SearchError::MissingScore(cur))?;
        self.expansions += 1;
        self.last = Some(cur);

        for n in neighbors::expansion(cur, self.map.range()) {
            match self.relax(cur, cur_g, n, target) {
                Relax::Target => {
                    log::info!("astar: reached target {n} with g = {}", cur_g + 1);
                    self.status = SearchStatus::Found;
                    return Ok(self.status);
                }
                Relax::Improved => log::debug!("astar: improved {n} to g = {}", cur_g + 1),
                Relax::Discovered | Relax::Skipped => {}
            }
        }
        log::debug!(
            "astar: expanded {cur} at g = {cur_g}, open length {}",
            self.open.len()
        );

        self.status = if self.open.is_empty() {
            log::info!("astar: target unreachable after {} expansions", self.expansions);
            SearchStatus::Exhausted
        } else {
            SearchStatus::Running
        };
        Ok(self.status)
    }

    fn status(&self) -> SearchStatus {
        self.status
    }

    fn reset(&mut self) {
        self.scores.clear();
        self.open.clear();
        if let Some(start) = self.map.start() {
            self.scores.insert(
                start,
                Score {
                    g: 0,
                    h: 0,
                    parent: None,
                },
            );
            self.open.push_back(start);
        }
        self.status = SearchStatus::Ready;
        self.last = None;
        self.expansions = 0;
    }

    fn reconstruct_path(&self) -> Result<Option<Vec<Point>>, SearchError> {
        if self.status != SearchStatus::Found {
            return Ok(None);
        }
        reconstruct::trace_parents(self.map, &self.scores).map(Some)
    }

    /// A* keeps no step ledger; the best known `g` plays that role.
    fn current_step(&self, p: Point) -> Result<Option<i32>, SearchError> {
        in_bounds(self.map, p)?;
        Ok(self.scores.get(p).map(|s| s.g))
    }

    fn current_score(&self, p: Point) -> Result<Option<Score>, SearchError> {
        in_bounds(self.map, p)?;
        Ok(self.scores.get(p).copied())
    }

    fn frontier(&self) -> Vec<Point> {
        self.open.iter().copied().collect()
    }

    fn last_expanded(&self) -> Option<Point> {
        self.last
    }

    fn expansions(&self) -> usize {
        self.expansions
    }
}
