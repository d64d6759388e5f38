//! Grid: transient character buffer used by the transposition codec.
//!
//! Cells are stored in a single contiguous `Vec<char>` indexed by
//! `row * cols + col`. Dimensions are fixed at construction from the text
//! length and the key length, so the buffer never grows.

/// Character stored in cells that lie beyond the end of the text.
pub(crate) const PAD: char = ' ';

/// Fixed-size `rows × cols` grid of characters, pre-filled with [`PAD`].
pub(crate) struct Grid {
    cells: Vec<char>,
    rows: usize,
    cols: usize,
}

impl Grid {
    /// Allocates a grid large enough to hold `text_len` characters in
    /// `cols` columns.
    ///
    /// # Parameters
    /// - `text_len`: Number of characters to lay out.
    /// - `cols`: Number of columns (the key length, always > 0).
    ///
    /// # Returns
    /// A grid with `ceil(text_len / cols)` rows, every cell set to [`PAD`].
    pub(crate) fn new(text_len: usize, cols: usize) -> Self {
        debug_assert!(cols > 0, "grid needs at least one column");
        let rows = text_len.div_ceil(cols);
        Grid {
            cells: vec![PAD; rows * cols],
            rows,
            cols,
        }
    }

    pub(crate) fn rows(&self) -> usize {
        self.rows
    }

    pub(crate) fn cols(&self) -> usize {
        self.cols
    }

    /// Total number of cells, `rows * cols`.
    pub(crate) fn len(&self) -> usize {
        self.cells.len()
    }

    /// Writes `ch` into the cell at (`row`, `col`).
    pub(crate) fn set(&mut self, row: usize, col: usize, ch: char) {
        let idx = self.index(row, col);
        self.cells[idx] = ch;
    }

    #[cfg(test)]
    pub(crate) fn get(&self, row: usize, col: usize) -> char {
        self.cells[self.index(row, col)]
    }

    /// Iterates over column `col` from the top row to the bottom row.
    pub(crate) fn column(&self, col: usize) -> impl Iterator<Item = char> + '_ {
        debug_assert!(col < self.cols);
        self.cells.iter().skip(col).step_by(self.cols).copied()
    }

    /// Concatenates every cell row by row, left to right, pad cells included.
    pub(crate) fn to_row_major(&self) -> String {
        self.cells.iter().collect()
    }

    fn index(&self, row: usize, col: usize) -> usize {
        debug_assert!(row < self.rows && col < self.cols);
        row * self.cols + col
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimensions_exact_multiple() {
        let grid = Grid::new(12, 4);
        assert_eq!(grid.rows(), 3);
        assert_eq!(grid.cols(), 4);
        assert_eq!(grid.len(), 12);
    }

    #[test]
    fn test_dimensions_round_up() {
        let grid = Grid::new(25, 4);
        assert_eq!(grid.rows(), 7);
        assert_eq!(grid.len(), 28);
    }

    #[test]
    fn test_empty_grid() {
        let grid = Grid::new(0, 3);
        assert_eq!(grid.rows(), 0);
        assert_eq!(grid.len(), 0);
        assert_eq!(grid.to_row_major(), "");
        assert_eq!(grid.column(2).count(), 0);
    }

    #[test]
    fn test_cells_start_padded() {
        let grid = Grid::new(5, 2);
        assert!((0..grid.rows()).all(|r| (0..grid.cols()).all(|c| grid.get(r, c) == PAD)));
    }

    #[test]
    fn test_set_and_column_readout() {
        let mut grid = Grid::new(6, 3);
        for (i, ch) in "abcdef".chars().enumerate() {
            grid.set(i / 3, i % 3, ch);
        }
        assert_eq!(grid.column(0).collect::<String>(), "ad");
        assert_eq!(grid.column(1).collect::<String>(), "be");
        assert_eq!(grid.column(2).collect::<String>(), "cf");
        assert_eq!(grid.to_row_major(), "abcdef");
    }

    #[test]
    fn test_column_includes_pad_cells() {
        let mut grid = Grid::new(4, 3);
        for (i, ch) in "wxyz".chars().enumerate() {
            grid.set(i / 3, i % 3, ch);
        }
        assert_eq!(grid.column(0).collect::<String>(), "wz");
        assert_eq!(grid.column(2).collect::<String>(), "y ");
        assert_eq!(grid.to_row_major(), "wxyz  ");
    }
}
