//! Step-driven path search on occupancy grids.
//!
//! This crate provides three interchangeable strategies over a
//! [`GridMap`](gridseek_core::GridMap) with one start and one target:
//!
//! - **BFS** ([`Bfs`]): FIFO frontier, always finds a shortest path
//! - **Greedy** ([`Greedy`]): frontier re-sorted by Manhattan distance to the
//!   target before every expansion; fast to reach the target but not optimal
//! - **A\*** ([`Astar`]): open list re-sorted by `g + h`, no closed set
//!
//! Searches run incrementally. Each call to [`Search::advance`] expands one
//! frontier cell and returns a [`SearchStatus`], so a driver can observe or
//! animate progress and stop whenever it likes. After
//! [`SearchStatus::Found`], [`Search::reconstruct_path`] yields the route.
//!
//! | Strategy | Ledger | Path walk |
//! |---|---|---|
//! | [`Bfs`], [`Greedy`] | [`StepMap`] | step values, [`neighbors::TRACE_ORDER`] |
//! | [`Astar`] | [`ScoreMap`] | parent pointers |
//!
//! Neighbors are always expanded in [`neighbors::EXPANSION_ORDER`]
//! (up, down, left, right).

mod astar;
mod bfs;
mod distance;
mod engine;
mod error;
mod greedy;
pub mod neighbors;
pub mod reconstruct;
mod scoremap;
mod stepmap;
#[cfg(test)]
mod testutil;
mod traits;

pub use astar::Astar;
pub use bfs::Bfs;
pub use distance::manhattan;
pub use engine::{Method, ParseMethodError, SearchEngine};
pub use error::SearchError;
pub use greedy::Greedy;
pub use scoremap::{Score, ScoreMap};
pub use stepmap::{StepMap, UNVISITED};
pub use traits::{Search, SearchStatus};
