use gridseek_core::{CellState, GridMap, Point, Range};

/// Sentinel step value for cells not reached yet.
pub const UNVISITED: i32 = i32::MAX;

/// What happened when a neighbor was offered a new step value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Visit {
    /// The neighbor is the target; its step was recorded.
    Target,
    /// The neighbor is free and its step improved; it joins the frontier.
    Improved,
    /// Wall, start, or no improvement.
    Skipped,
}

/// Per-cell distance-from-start ledger shared by BFS and the greedy search.
#[derive(Debug, Clone)]
pub struct StepMap {
    range: Range,
    steps: Vec<i32>,
}

impl StepMap {
    /// Create a ledger covering `range` with every cell unvisited.
    pub fn new(range: Range) -> Self {
        Self {
            range,
            steps: vec![UNVISITED; range.len()],
        }
    }

    /// Mark every cell unvisited.
    pub fn reset(&mut self) {
        self.steps.fill(UNVISITED);
    }

    /// Raw step value at `p`, [`UNVISITED`] if unvisited or out of range.
    #[inline]
    pub fn at(&self, p: Point) -> i32 {
        match self.range.index(p) {
            Some(i) => self.steps[i],
            None => UNVISITED,
        }
    }

    /// Step value at `p`, or `None` if unvisited or out of range.
    #[inline]
    pub fn get(&self, p: Point) -> Option<i32> {
        Some(self.at(p)).filter(|&s| s != UNVISITED)
    }

    /// Record `step` at `p`. Out-of-range points are ignored.
    #[inline]
    pub fn set(&mut self, p: Point, step: i32) {
        if let Some(i) = self.range.index(p) {
            self.steps[i] = step;
        }
    }

    /// Number of cells with a recorded step.
    pub fn visited(&self) -> usize {
        self.steps.iter().filter(|&&s| s != UNVISITED).count()
    }

    /// Offer neighbor `n` of a cell whose step is `cur_step`.
    ///
    /// The target is recorded unconditionally. A free cell is recorded only
    /// when `cur_step + 1` beats its current value.
    pub(crate) fn visit(&mut self, map: &GridMap, n: Point, cur_step: i32) -> Visit {
        let next = cur_step + 1;
        match map.cell(n) {
            Some(CellState::Target) => {
                self.set(n, next);
                Visit::Target
            }
            Some(CellState::Free) if self.at(n) > next => {
                self.set(n, next);
                Visit::Improved
            }
            _ => Visit::Skipped,
        }
    }
}
