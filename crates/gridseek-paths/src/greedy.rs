use std::collections::VecDeque;

use gridseek_core::{GridMap, Point};

use crate::distance::manhattan;
use crate::error::{SearchError, in_bounds, validated};
use crate::neighbors;
use crate::reconstruct;
use crate::scoremap::Score;
use crate::stepmap::{StepMap, Visit};
use crate::traits::{Search, SearchStatus};

/// Heuristic-ordered frontier search (the "DFS" strategy).
///
/// Uses the same step ledger and neighbor rule as [`Bfs`](crate::Bfs), but
/// always expands the frontier cell closest to the target by Manhattan
/// distance. There is no cost accounting in the ordering, so the path it
/// finds is not necessarily a shortest one.
#[derive(Debug, Clone)]
pub struct Greedy<'m> {
    map: &'m GridMap,
    steps: StepMap,
    open: VecDeque<Point>,
    status: SearchStatus,
    last: Option<Point>,
    expansions: usize,
}

impl<'m> Greedy<'m> {
    /// Create a search over `map` in the [`SearchStatus::Ready`] state.
    pub fn new(map: &'m GridMap) -> Self {
        let mut greedy = Self {
            map,
            steps: StepMap::new(map.range()),
            open: VecDeque::new(),
            status: SearchStatus::Ready,
            last: None,
            expansions: 0,
        };
        greedy.reset();
        greedy
    }

    /// The step ledger.
    pub fn steps(&self) -> &StepMap {
        &self.steps
    }
}

impl Search for Greedy<'_> {
    fn advance(&mut self) -> Result<SearchStatus, SearchError> {
        if self.status.is_terminal() {
            return Ok(self.status);
        }
        let (_, target) = validated(self.map)?;

        // Stable sort: equal distances keep their current relative order.
        self.open
            .make_contiguous()
            .sort_by_key(|&p| manhattan(p, target));
        let Some(cur) = self.open.pop_front() else {
            self.status = SearchStatus::Exhausted;
            return Ok(self.status);
        };
        self.expansions += 1;
        self.last = Some(cur);
        let cur_step = self.steps.at(cur);

        for n in neighbors::expansion(cur, self.map.range()) {
            match self.steps.visit(self.map, n, cur_step) {
                Visit::Target => {
                    log::info!("greedy: reached target {n} in {} steps", cur_step + 1);
                    self.status = SearchStatus::Found;
                    return Ok(self.status);
                }
                Visit::Improved => self.open.push_back(n),
                Visit::Skipped => {}
            }
        }
        log::debug!(
            "greedy: expanded {cur} at step {cur_step}, open length {}",
            self.open.len()
        );

        self.status = if self.open.is_empty() {
            log::info!("greedy: target unreachable after {} expansions", self.expansions);
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
        self.steps.reset();
        self.open.clear();
        if let Some(start) = self.map.start() {
            self.steps.set(start, 0);
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
        reconstruct::trace_steps(self.map, &self.steps).map(Some)
    }

    fn current_step(&self, p: Point) -> Result<Option<i32>, SearchError> {
        in_bounds(self.map, p)?;
        Ok(self.steps.get(p))
    }

    fn current_score(&self, p: Point) -> Result<Option<Score>, SearchError> {
        in_bounds(self.map, p)?;
        Ok(None)
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
