use std::fmt;

use gridseek_core::Point;

use crate::error::SearchError;
use crate::scoremap::Score;

/// Where a search is in its life cycle.
///
/// `Ready → Running → {Found | Exhausted}`. `Found` and `Exhausted` are
/// terminal until the search is reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SearchStatus {
    Ready,
    Running,
    Found,
    Exhausted,
}

impl SearchStatus {
    /// Whether further calls to [`Search::advance`] do no work.
    #[inline]
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Found | Self::Exhausted)
    }
}

impl fmt::Display for SearchStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Ready => "ready",
            Self::Running => "running",
            Self::Found => "found",
            Self::Exhausted => "exhausted",
        };
        f.write_str(s)
    }
}

/// A resumable grid search driven one expansion at a time.
pub trait Search {
    /// Expand one frontier cell and report the resulting status.
    ///
    /// In a terminal state this does nothing and returns that state. Fails
    /// with [`SearchError::InvalidConfiguration`] if the map has no valid
    /// start/target pair.
    fn advance(&mut self) -> Result<SearchStatus, SearchError>;

    /// Current life-cycle state.
    fn status(&self) -> SearchStatus;

    /// Discard all progress and return to [`SearchStatus::Ready`].
    fn reset(&mut self);

    /// The route from start to target (inclusive), or `None` unless the
    /// status is [`SearchStatus::Found`].
    fn reconstruct_path(&self) -> Result<Option<Vec<Point>>, SearchError>;

    /// Recorded distance from the start at `p`, `None` if undiscovered.
    fn current_step(&self, p: Point) -> Result<Option<i32>, SearchError>;

    /// A* score entry at `p`. Strategies without scores report `None`.
    fn current_score(&self, p: Point) -> Result<Option<Score>, SearchError>;

    /// Cells waiting to be expanded, in their current order.
    fn frontier(&self) -> Vec<Point>;

    /// The cell expanded by the most recent [`advance`](Self::advance).
    fn last_expanded(&self) -> Option<Point>;

    /// Number of expansions since the last reset.
    fn expansions(&self) -> usize;

    /// Advance until a terminal status, or until `limit` expansions have
    /// been performed by this call.
    fn run(&mut self, limit: Option<usize>) -> Result<SearchStatus, SearchError> {
        let mut taken = 0;
        loop {
            let status = self.status();
            if status.is_terminal() || limit.is_some_and(|l| taken >= l) {
                return Ok(status);
            }
            self.advance()?;
            taken += 1;
        }
    }
}
