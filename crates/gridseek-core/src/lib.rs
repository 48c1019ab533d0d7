//! **gridseek-core** — grid geometry and occupancy maps.
//!
//! This crate provides the types shared by the *gridseek* search crates:
//! geometry primitives, the [`GridMap`] a search runs over, and a small text
//! format for building maps.

pub mod geom;
pub mod map;
pub mod maptext;

pub use geom::{ParsePointError, Point, Range};
pub use map::{CellState, GridMap, MapError};
