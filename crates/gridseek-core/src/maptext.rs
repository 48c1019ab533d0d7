//! Building a [`GridMap`] from text.
//!
//! Two layouts are understood:
//!
//! - the strict row format read by [`parse`]: every line has the same width,
//!   `#` or `1` is a wall, `.` or `0` is free, `S` marks the start and `T`
//!   the target;
//! - the bordered format read by [`parse_bordered`]: a decorative first line
//!   followed by rows where `1` is a wall and anything else is free, clipped
//!   or padded to a fixed size.

use std::str::FromStr;

use crate::geom::Point;
use crate::map::{GridMap, MapError};

/// Parse a map in the strict row format.
///
/// Leading and trailing whitespace is trimmed from the whole string but not
/// from individual lines. Windows line endings are accepted.
pub fn parse(s: &str) -> Result<GridMap, MapError> {
    let rows: Vec<&str> = s.trim().lines().collect();
    let width = rows.first().map_or(0, |r| r.chars().count()) as i32;
    for (y, row) in rows.iter().enumerate() {
        if row.chars().count() as i32 != width {
            return Err(MapError::InconsistentSize { line: y as i32 });
        }
    }

    let mut map = GridMap::new(width, rows.len() as i32);
    for (y, row) in rows.iter().enumerate() {
        for (x, ch) in row.chars().enumerate() {
            let pos = Point::new(x as i32, y as i32);
            match ch {
                '#' | '1' => map.set_wall(pos, true)?,
                '.' | '0' => {}
                'S' => {
                    if map.start().is_some() {
                        return Err(MapError::DuplicateMarker { ch, pos });
                    }
                    map.set_start(pos)?;
                }
                'T' => {
                    if map.target().is_some() {
                        return Err(MapError::DuplicateMarker { ch, pos });
                    }
                    map.set_target(pos)?;
                }
                _ => return Err(MapError::InvalidRune { ch, pos }),
            }
        }
    }
    Ok(map)
}

/// Parse a map in the bordered format into a `width` × `height` map.
///
/// The first line is skipped. Rows and columns beyond the requested size are
/// ignored; missing ones stay free. This never fails.
pub fn parse_bordered(s: &str, width: i32, height: i32) -> GridMap {
    let rows: Vec<Vec<char>> = s.lines().skip(1).map(|r| r.chars().collect()).collect();
    GridMap::with_walls(width, height, |p| {
        rows.get(p.y as usize)
            .and_then(|row| row.get(p.x as usize))
            .is_some_and(|&ch| ch == '1')
    })
}

impl FromStr for GridMap {
    type Err = MapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map::CellState;

    const ROOM: &str = "\
S..#
.#.#
...T";

    #[test]
    fn parse_strict() {
        let m = parse(ROOM).unwrap();
        assert_eq!(m.size(), Point::new(4, 3));
        assert_eq!(m.start(), Some(Point::new(0, 0)));
        assert_eq!(m.target(), Some(Point::new(3, 2)));
        assert_eq!(m.wall_count(), 3);
        assert_eq!(m.cell(Point::new(1, 1)), Some(CellState::Wall));
        assert_eq!(m.to_text(), ROOM);
    }

    #[test]
    fn parse_accepts_digits_and_crlf() {
        let m: GridMap = "S01\r\n00T".parse().unwrap();
        assert_eq!(m.size(), Point::new(3, 2));
        assert!(m.is_wall(Point::new(2, 0)));
        assert_eq!(m.target(), Some(Point::new(2, 1)));
    }

    #[test]
    fn parse_rejects_bad_input() {
        assert_eq!(parse("..\n..."), Err(MapError::InconsistentSize { line: 1 }));
        assert_eq!(
            parse("..\n.x"),
            Err(MapError::InvalidRune {
                ch: 'x',
                pos: Point::new(1, 1)
            })
        );
        assert_eq!(
            parse("S.\n.S"),
            Err(MapError::DuplicateMarker {
                ch: 'S',
                pos: Point::new(1, 1)
            })
        );
    }

    #[test]
    fn parse_empty() {
        let m = parse("  \n").unwrap();
        assert_eq!(m.size(), Point::new(0, 0));
    }

    #[test]
    fn bordered_skips_first_line_and_clips() {
        let text = "==========\n0100000\n1\n0011";
        let m = parse_bordered(text, 3, 2);
        assert_eq!(m.size(), Point::new(3, 2));
        assert!(m.is_wall(Point::new(1, 0)));
        assert!(m.is_wall(Point::new(0, 1)));
        // third row and fourth column are outside the requested size
        assert_eq!(m.wall_count(), 2);
        assert_eq!(m.start(), None);
    }

    #[test]
    fn bordered_pads_missing_rows() {
        let m = parse_bordered("border\n1", 4, 3);
        assert_eq!(m.size(), Point::new(4, 3));
        assert_eq!(m.walls().collect::<Vec<_>>(), vec![Point::new(0, 0)]);
    }
}
