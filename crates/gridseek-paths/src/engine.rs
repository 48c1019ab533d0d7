use std::fmt;
use std::str::FromStr;

use gridseek_core::{GridMap, Point};

use crate::astar::Astar;
use crate::bfs::Bfs;
use crate::error::SearchError;
use crate::greedy::Greedy;
use crate::scoremap::Score;
use crate::traits::{Search, SearchStatus};

/// Which search strategy to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Method {
    /// Breadth-first search.
    #[default]
    Bfs,
    /// Frontier ordered by distance to the target ("DFS").
    Greedy,
    /// A* with a Manhattan heuristic.
    Astar,
}

impl Method {
    /// Every method, in menu order.
    pub const ALL: [Method; 3] = [Method::Bfs, Method::Greedy, Method::Astar];

    /// Short lowercase name, accepted back by [`FromStr`].
    pub fn name(self) -> &'static str {
        match self {
            Self::Bfs => "bfs",
            Self::Greedy => "dfs",
            Self::Astar => "astar",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned for an unknown method name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseMethodError(String);

impl fmt::Display for ParseMethodError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown search method \u{201c}{}\u{201d} (expected bfs, dfs or astar)",
            self.0
        )
    }
}

impl std::error::Error for ParseMethodError {}

impl FromStr for Method {
    type Err = ParseMethodError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bfs" | "breadth-first" => Ok(Self::Bfs),
            "dfs" | "greedy" => Ok(Self::Greedy),
            "astar" | "a*" | "a-star" => Ok(Self::Astar),
            _ => Err(ParseMethodError(s.to_string())),
        }
    }
}

/// A search over one map with the strategy picked at run time.
#[derive(Debug, Clone)]
pub enum SearchEngine<'m> {
    Bfs(Bfs<'m>),
    Greedy(Greedy<'m>),
    Astar(Astar<'m>),
}

impl<'m> SearchEngine<'m> {
    /// Create a [`SearchStatus::Ready`] search over `map` using `method`.
    pub fn new(map: &'m GridMap, method: Method) -> Self {
        match method {
            Method::Bfs => Self::Bfs(Bfs::new(map)),
            Method::Greedy => Self::Greedy(Greedy::new(map)),
            Method::Astar => Self::Astar(Astar::new(map)),
        }
    }

    /// The strategy this engine runs.
    pub fn method(&self) -> Method {
        match self {
            Self::Bfs(_) => Method::Bfs,
            Self::Greedy(_) => Method::Greedy,
            Self::Astar(_) => Method::Astar,
        }
    }

    fn inner(&self) -> &dyn Search {
        match self {
            Self::Bfs(s) => s,
            Self::Greedy(s) => s,
            Self::Astar(s) => s,
        }
    }

    fn inner_mut(&mut self) -> &mut dyn Search {
        match self {
            Self::Bfs(s) => s,
            Self::Greedy(s) => s,
            Self::Astar(s) => s,
        }
    }
}

impl Search for SearchEngine<'_> {
    fn advance(&mut self) -> Result<SearchStatus, SearchError> {
        self.inner_mut().advance()
    }

    fn status(&self) -> SearchStatus {
        self.inner().status()
    }

    fn reset(&mut self) {
        self.inner_mut().reset();
    }

    fn reconstruct_path(&self) -> Result<Option<Vec<Point>>, SearchError> {
        self.inner().reconstruct_path()
    }

    fn current_step(&self, p: Point) -> Result<Option<i32>, SearchError> {
        self.inner().current_step(p)
    }

    fn current_score(&self, p: Point) -> Result<Option<Score>, SearchError> {
        self.inner().current_score(p)
    }

    fn frontier(&self) -> Vec<Point> {
        self.inner().frontier()
    }

    fn last_expanded(&self) -> Option<Point> {
        self.inner().last_expanded()
    }

    fn expansions(&self) -> usize {
        self.inner().expansions()
    }
}
