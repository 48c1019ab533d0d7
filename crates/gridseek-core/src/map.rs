//! Occupancy map for a single search session.
//!
//! A [`GridMap`] holds a fixed-size wall layer plus the designated start and
//! target cells. Walls are stored separately from the two markers, so a start
//! or target dropped onto a wall is representable; [`GridMap::validate`]
//! rejects that configuration before a search runs.

use std::fmt;

use crate::geom::{Point, Range};

/// The state of one map cell as seen by a search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CellState {
    Free,
    Wall,
    Start,
    Target,
}

/// A fixed-size grid of free and wall cells with a start and a target.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawGridMap"))]
pub struct GridMap {
    width: i32,
    height: i32,
    walls: Vec<bool>,
    start: Option<Point>,
    target: Option<Point>,
}

impl GridMap {
    /// Create a map of `width` × `height` free cells with no start or target.
    ///
    /// Negative dimensions are clamped to zero.
    pub fn new(width: i32, height: i32) -> Self {
        let width = width.max(0);
        let height = height.max(0);
        Self {
            width,
            height,
            walls: vec![false; (width as usize) * (height as usize)],
            start: None,
            target: None,
        }
    }

    /// Create a `width` × `height` map whose wall layer is set wherever
    /// `is_wall` returns true. Cells are visited in row-major order.
    pub fn with_walls(width: i32, height: i32, mut is_wall: impl FnMut(Point) -> bool) -> Self {
        let mut map = Self::new(width, height);
        for (i, p) in map.range().iter().enumerate() {
            map.walls[i] = is_wall(p);
        }
        map
    }

    /// Width in cells.
    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Height in cells.
    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// The map bounds as a range anchored at the origin.
    #[inline]
    pub fn range(&self) -> Range {
        Range::new(0, 0, self.width, self.height)
    }

    /// Size as a `Point` (width = x, height = y).
    #[inline]
    pub fn size(&self) -> Point {
        Point::new(self.width, self.height)
    }

    /// Whether `p` lies inside `[0, width) x [0, height)`.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.range().contains(p)
    }

    #[inline]
    fn idx(&self, p: Point) -> Option<usize> {
        self.range().index(p)
    }

    fn checked_idx(&self, p: Point) -> Result<usize, MapError> {
        self.idx(p).ok_or(MapError::OutOfBounds(p))
    }

    /// The state of the cell at `p`, or `None` if `p` is out of bounds.
    ///
    /// The start and target markers take precedence over the wall layer.
    pub fn cell(&self, p: Point) -> Option<CellState> {
        let i = self.idx(p)?;
        Some(if self.start == Some(p) {
            CellState::Start
        } else if self.target == Some(p) {
            CellState::Target
        } else if self.walls[i] {
            CellState::Wall
        } else {
            CellState::Free
        })
    }

    /// Whether the wall layer is set at `p`. Out-of-bounds cells are not walls.
    #[inline]
    pub fn is_wall(&self, p: Point) -> bool {
        self.idx(p).is_some_and(|i| self.walls[i])
    }

    /// Whether `p` is an in-bounds cell a search may step onto and record.
    ///
    /// The start and target cells are not free.
    #[inline]
    pub fn is_free(&self, p: Point) -> bool {
        self.cell(p) == Some(CellState::Free)
    }

    /// Set or clear the wall at `p`.
    pub fn set_wall(&mut self, p: Point, wall: bool) -> Result<(), MapError> {
        let i = self.checked_idx(p)?;
        self.walls[i] = wall;
        Ok(())
    }

    /// Designate `p` as the start cell, replacing any previous start.
    pub fn set_start(&mut self, p: Point) -> Result<(), MapError> {
        self.checked_idx(p)?;
        self.start = Some(p);
        Ok(())
    }

    /// Designate `p` as the target cell, replacing any previous target.
    pub fn set_target(&mut self, p: Point) -> Result<(), MapError> {
        self.checked_idx(p)?;
        self.target = Some(p);
        Ok(())
    }

    /// The start cell, if set.
    #[inline]
    pub fn start(&self) -> Option<Point> {
        self.start
    }

    /// The target cell, if set.
    #[inline]
    pub fn target(&self) -> Option<Point> {
        self.target
    }

    /// Iterate over every wall position in row-major order.
    pub fn walls(&self) -> impl Iterator<Item = Point> + '_ {
        self.range().iter().filter(|&p| self.is_wall(p))
    }

    /// Number of wall cells.
    pub fn wall_count(&self) -> usize {
        self.walls.iter().filter(|&&w| w).count()
    }

    /// Check that the map is ready for a search and return `(start, target)`.
    pub fn validate(&self) -> Result<(Point, Point), MapError> {
        let start = self.start.ok_or(MapError::MissingStart)?;
        let target = self.target.ok_or(MapError::MissingTarget)?;
        if self.is_wall(start) {
            return Err(MapError::StartOnWall(start));
        }
        if self.is_wall(target) {
            return Err(MapError::TargetOnWall(target));
        }
        if start == target {
            return Err(MapError::StartIsTarget(start));
        }
        Ok((start, target))
    }

    /// Render the map as text using `#`, `.`, `S` and `T`, one line per row.
    pub fn to_text(&self) -> String {
        self.to_string()
    }
}

/// Wire form of a [`GridMap`], checked before it becomes one.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawGridMap {
    width: i32,
    height: i32,
    walls: Vec<bool>,
    start: Option<Point>,
    target: Option<Point>,
}

#[cfg(feature = "serde")]
impl TryFrom<RawGridMap> for GridMap {
    type Error = MapError;

    fn try_from(raw: RawGridMap) -> Result<Self, Self::Error> {
        let mut map = GridMap::new(raw.width, raw.height);
        if raw.walls.len() != map.walls.len() {
            return Err(MapError::WallLayerSize {
                expected: map.walls.len(),
                found: raw.walls.len(),
            });
        }
        map.walls = raw.walls;
        if let Some(p) = raw.start {
            map.set_start(p)?;
        }
        if let Some(p) = raw.target {
            map.set_target(p)?;
        }
        Ok(map)
    }
}

impl fmt::Display for GridMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.height {
            if y > 0 {
                writeln!(f)?;
            }
            for x in 0..self.width {
                let ch = match self.cell(Point::new(x, y)) {
                    Some(CellState::Wall) => '#',
                    Some(CellState::Start) => 'S',
                    Some(CellState::Target) => 'T',
                    _ => '.',
                };
                write!(f, "{ch}")?;
            }
        }
        Ok(())
    }
}

/// Errors raised while building or validating a [`GridMap`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MapError {
    /// A position argument lies outside the map.
    OutOfBounds(Point),
    /// No start cell has been set.
    MissingStart,
    /// No target cell has been set.
    MissingTarget,
    /// The start cell is a wall.
    StartOnWall(Point),
    /// The target cell is a wall.
    TargetOnWall(Point),
    /// Start and target are the same cell.
    StartIsTarget(Point),
    /// Text rows have different widths; `line` is the first offending row.
    InconsistentSize { line: i32 },
    /// A character outside the map alphabet was found.
    InvalidRune { ch: char, pos: Point },
    /// A start or target marker appears more than once.
    DuplicateMarker { ch: char, pos: Point },
    /// A serialized wall layer does not hold `width * height` cells.
    WallLayerSize { expected: usize, found: usize },
}

impl fmt::Display for MapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds(p) => write!(f, "position {p} is out of bounds"),
            Self::MissingStart => write!(f, "no start cell set"),
            Self::MissingTarget => write!(f, "no target cell set"),
            Self::StartOnWall(p) => write!(f, "start cell {p} is a wall"),
            Self::TargetOnWall(p) => write!(f, "target cell {p} is a wall"),
            Self::StartIsTarget(p) => write!(f, "start and target are both {p}"),
            Self::InconsistentSize { line } => {
                write!(f, "map text: inconsistent row width at line {line}")
            }
            Self::InvalidRune { ch, pos } => {
                write!(f, "map text contains invalid rune \u{201c}{ch}\u{201d} at {pos}")
            }
            Self::DuplicateMarker { ch, pos } => {
                write!(f, "map text: duplicate \u{201c}{ch}\u{201d} marker at {pos}")
            }
            Self::WallLayerSize { expected, found } => {
                write!(f, "wall layer has {found} cells, expected {expected}")
            }
        }
    }
}

impl std::error::Error for MapError {}
