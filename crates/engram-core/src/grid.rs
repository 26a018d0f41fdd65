//! Square grid geometry and the text pattern format.
//!
//! The memory and matcher never look at geometry; this module is for the
//! collaborators that author and display patterns as `size × size` pixel
//! grids, flattened row-major.
//!
//! ```text
//! #..#
//! .##.
//! .##.
//! #..#
//! ```

use crate::error::{EngramError, Result};
use crate::vector::BinaryVector;
use serde::{Deserialize, Serialize};

/// A square grid of side `size`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    size: usize,
}

impl Grid {
    pub fn new(size: usize) -> Self {
        Self { size }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of cells, i.e. the vector length.
    pub fn len(&self) -> usize {
        self.size * self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Row-major index of `(row, col)`.
    pub fn index(&self, row: usize, col: usize) -> Result<usize> {
        if row >= self.size || col >= self.size {
            return Err(EngramError::CellOutOfRange {
                row,
                col,
                size: self.size,
            });
        }
        Ok(row * self.size + col)
    }

    /// Parse a text pattern.
    ///
    /// On cells: `#`, `1`, `X`, `x`. Off cells: `.`, `0`, `-`, `_`.
    /// Whitespace inside a row and blank lines are ignored.
    pub fn parse(&self, text: &str) -> Result<BinaryVector> {
        let mut bits = Vec::with_capacity(self.len());
        let mut rows = 0;

        for (line_no, line) in text.lines().enumerate() {
            let line_no = line_no + 1;
            let cells: Vec<char> = line.chars().filter(|c| !c.is_whitespace()).collect();
            if cells.is_empty() {
                continue;
            }
            if cells.len() != self.size {
                return Err(EngramError::pattern_format(
                    line_no,
                    format!("expected {} cells, found {}", self.size, cells.len()),
                ));
            }
            for c in cells {
                bits.push(match c {
                    '#' | '1' | 'X' | 'x' => true,
                    '.' | '0' | '-' | '_' => false,
                    other => {
                        return Err(EngramError::pattern_format(
                            line_no,
                            format!("unexpected character '{}'", other),
                        ))
                    }
                });
            }
            rows += 1;
            if rows > self.size {
                return Err(EngramError::pattern_format(
                    line_no,
                    format!("more than {} rows", self.size),
                ));
            }
        }

        if rows != self.size {
            return Err(EngramError::pattern_format(
                text.lines().count(),
                format!("expected {} rows, found {}", self.size, rows),
            ));
        }

        Ok(BinaryVector::from(bits))
    }

    /// Render `vector` as text, one line per row.
    pub fn render(&self, vector: &BinaryVector, on: char, off: char) -> Result<String> {
        crate::error::ensure_len(self.len(), vector.len())?;
        let mut out = String::with_capacity(self.len() + self.size);
        for row in vector.bits().chunks(self.size.max(1)) {
            out.extend(row.iter().map(|&b| if b { on } else { off }));
            out.push('\n');
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_row_major() {
        let grid = Grid::new(2);
        let v = grid.parse("#.\n.#\n").unwrap();
        assert_eq!(v.to_u8_vec(), vec![1, 0, 0, 1]);
    }

    #[test]
    fn accepts_alternate_glyphs_and_spacing() {
        let grid = Grid::new(3);
        let v = grid.parse("1 0 x\n\n- _ X\n0 0 0\n").unwrap();
        assert_eq!(v.to_u8_vec(), vec![1, 0, 1, 0, 0, 1, 0, 0, 0]);
    }

    #[test]
    fn rejects_short_row() {
        let err = Grid::new(3).parse("##\n...\n...").unwrap_err();
        assert!(matches!(err, EngramError::PatternFormat { line: 1, .. }));
    }

    #[test]
    fn rejects_unknown_character() {
        let err = Grid::new(2).parse("#.\n.?").unwrap_err();
        assert!(matches!(err, EngramError::PatternFormat { line: 2, .. }));
    }

    #[test]
    fn rejects_missing_and_extra_rows() {
        assert!(Grid::new(2).parse("#.\n").is_err());
        assert!(Grid::new(2).parse("#.\n.#\n##\n").is_err());
    }

    #[test]
    fn render_then_parse_is_stable() {
        let grid = Grid::new(3);
        let text = "#..\n.#.\n..#\n";
        let v = grid.parse(text).unwrap();
        assert_eq!(grid.render(&v, '#', '.').unwrap(), text);
    }

    #[test]
    fn index_is_bounds_checked() {
        let grid = Grid::new(10);
        assert_eq!(grid.index(1, 2).unwrap(), 12);
        assert!(grid.index(10, 0).is_err());
        assert_eq!(grid.len(), 100);
    }

    #[test]
    fn out_of_range_cell_names_row_and_column() {
        let grid = Grid::new(3);
        assert_eq!(
            grid.index(1, 3).unwrap_err(),
            EngramError::CellOutOfRange { row: 1, col: 3, size: 3 }
        );
        assert_eq!(
            grid.index(3, 1).unwrap_err(),
            EngramError::CellOutOfRange { row: 3, col: 1, size: 3 }
        );
    }
}
