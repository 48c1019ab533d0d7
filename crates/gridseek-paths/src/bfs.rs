use std::collections::VecDeque;

use gridseek_core::{GridMap, Point};

use crate::error::{SearchError, in_bounds, validated};
use crate::neighbors;
use crate::reconstruct;
use crate::scoremap::Score;
use crate::stepmap::{StepMap, Visit};
use crate::traits::{Search, SearchStatus};

/// Breadth-first search over a [`GridMap`], one expansion per
/// [`advance`](Search::advance).
///
/// Every move costs 1, so the first step value recorded for the target is
/// the length of a shortest path.
#[derive(Debug, Clone)]
pub struct Bfs<'m> {
    map: &'m GridMap,
    steps: StepMap,
    queue: VecDeque<Point>,
    status: SearchStatus,
    last: Option<Point>,
    expansions: usize,
    depth: i32,
}

impl<'m> Bfs<'m> {
    /// Create a search over `map` in the [`SearchStatus::Ready`] state.
    pub fn new(map: &'m GridMap) -> Self {
        let mut bfs = Self {
            map,
            steps: StepMap::new(map.range()),
            queue: VecDeque::new(),
            status: SearchStatus::Ready,
            last: None,
            expansions: 0,
            depth: 0,
        };
        bfs.reset();
        bfs
    }

    /// The step ledger.
    pub fn steps(&self) -> &StepMap {
        &self.steps
    }

    /// Step value of the most recently expanded cell.
    ///
    /// Non-decreasing over a run; a driver can redraw whenever it grows to
    /// show the search one layer at a time.
    pub fn depth(&self) -> i32 {
        self.depth
    }
}

impl Search for Bfs<'_> {
    fn advance(&mut self) -> Result<SearchStatus, SearchError> {
        if self.status.is_terminal() {
            return Ok(self.status);
        }
        validated(self.map)?;
        let Some(cur) = self.queue.pop_front() else {
            self.status = SearchStatus::Exhausted;
            return Ok(self.status);
        };
        self.expansions += 1;
        self.last = Some(cur);
        let cur_step = self.steps.at(cur);
        self.depth = cur_step;

        for n in neighbors::expansion(cur, self.map.range()) {
            match self.steps.visit(self.map, n, cur_step) {
                Visit::Target => {
                    log::info!("bfs: reached target {n} in {} steps", cur_step + 1);
                    self.status = SearchStatus::Found;
                    return Ok(self.status);
                }
                Visit::Improved => self.queue.push_back(n),
                Visit::Skipped => {}
            }
        }
        log::debug!(
            "bfs: expanded {cur} at step {cur_step}, queue length {}",
            self.queue.len()
        );

        self.status = if self.queue.is_empty() {
            log::info!("bfs: target unreachable after {} expansions", self.expansions);
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
        self.queue.clear();
        if let Some(start) = self.map.start() {
            self.steps.set(start, 0);
            self.queue.push_back(start);
        }
        self.status = SearchStatus::Ready;
        self.last = None;
        self.expansions = 0;
        self.depth = 0;
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
        self.queue.iter().copied().collect()
    }

    fn last_expanded(&self) -> Option<Point> {
        self.last
    }

    fn expansions(&self) -> usize {
        self.expansions
    }
}
