use std::fmt;

use gridseek_core::{GridMap, MapError, Point};

/// Errors reported by searches and path reconstruction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// A position argument lies outside the map.
    OutOfBounds(Point),
    /// The map is not searchable: start or target missing, on a wall, or
    /// coinciding. Fatal to the session.
    InvalidConfiguration(MapError),
    /// The step ledger or back-pointer chain has no predecessor for `at`.
    ReconstructionFailure { at: Point },
    /// A cell in the open frontier has no score entry.
    MissingScore(Point),
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds(p) => write!(f, "position {p} is out of bounds"),
            Self::InvalidConfiguration(e) => write!(f, "invalid search configuration: {e}"),
            Self::ReconstructionFailure { at } => {
                write!(f, "path reconstruction failed: no predecessor for {at}")
            }
            Self::MissingScore(p) => write!(f, "open cell {p} has no score entry"),
        }
    }
}

impl std::error::Error for SearchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidConfiguration(e) => Some(e),
            _ => None,
        }
    }
}

impl From<MapError> for SearchError {
    fn from(e: MapError) -> Self {
        match e {
            MapError::OutOfBounds(p) => Self::OutOfBounds(p),
            other => Self::InvalidConfiguration(other),
        }
    }
}

/// Validate `map` for searching, returning `(start, target)`.
pub(crate) fn validated(map: &GridMap) -> Result<(Point, Point), SearchError> {
    map.validate().map_err(|e| {
        log::warn!("refusing to search: {e}");
        SearchError::from(e)
    })
}

/// Reject positions outside `map`.
pub(crate) fn in_bounds(map: &GridMap, p: Point) -> Result<(), SearchError> {
    if map.contains(p) {
        Ok(())
    } else {
        Err(SearchError::OutOfBounds(p))
    }
}
