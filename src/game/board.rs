pub const ROWS: usize = 6;
pub const COLS: usize = 7;

/// Length of the run that wins the game.
pub const WIN_LENGTH: usize = 4;

/// The four axes through a cell, as (row step, col step).
const AXES: [(isize, isize); 4] = [
    (0, 1),  // horizontal
    (1, 0),  // vertical
    (1, 1),  // diagonal \
    (1, -1), // diagonal /
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Red,
    Yellow,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    cells: [[Cell; COLS]; ROWS],
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("column is full")]
    ColumnFull,
    #[error("column is out of range")]
    InvalidColumn,
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Board {
            cells: [[Cell::Empty; COLS]; ROWS],
        }
    }

    /// Get the cell at a specific position
    /// Row 0 is the top, row 5 is the bottom
    ///
    /// # Panics
    ///
    /// Panics if `row >= ROWS` or `col >= COLS`.
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row][col]
    }

    /// Cell at a signed position, `None` when off the board.
    fn get_signed(&self, row: isize, col: isize) -> Option<Cell> {
        if row < 0 || col < 0 {
            return None;
        }
        self.cells
            .get(row as usize)
            .and_then(|r| r.get(col as usize))
            .copied()
    }

    /// Check if a column is full. Out-of-range columns count as full.
    pub fn is_column_full(&self, col: usize) -> bool {
        if col >= COLS {
            return true;
        }
        self.cells[0][col] != Cell::Empty
    }

    /// Row a piece dropped into `col` would land in, if the column has room.
    pub fn landing_row(&self, col: usize) -> Option<usize> {
        if col >= COLS {
            return None;
        }
        (0..ROWS).rev().find(|&row| self.cells[row][col] == Cell::Empty)
    }

    /// Drop a piece in a column, returns the row where it landed
    pub fn drop_piece(&mut self, col: usize, cell: Cell) -> Result<usize, MoveError> {
        if col >= COLS {
            return Err(MoveError::InvalidColumn);
        }

        let row = self.landing_row(col).ok_or(MoveError::ColumnFull)?;
        self.cells[row][col] = cell;
        Ok(row)
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        (0..COLS).all(|col| self.is_column_full(col))
    }

    /// Check if the piece stored at (row, col) is part of a winning run
    pub fn check_win(&self, row: usize, col: usize) -> bool {
        match self.get(row, col) {
            Cell::Empty => false,
            cell => detect_win(self, row, col, cell),
        }
    }

    /// Count `cell` pieces starting one step away from (row, col) and
    /// walking along (dr, dc) until the run breaks or leaves the board.
    fn count_direction(&self, row: usize, col: usize, dr: isize, dc: isize, cell: Cell) -> usize {
        let mut count = 0;
        let mut r = row as isize + dr;
        let mut c = col as isize + dc;
        while self.get_signed(r, c) == Some(cell) {
            count += 1;
            r += dr;
            c += dc;
        }
        count
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Check whether `cell` at (row, col) completes a run of [`WIN_LENGTH`] on
/// any of the four axes through that position.
///
/// Only the cells on those axes are inspected. The cell at (row, col) itself
/// is counted as `cell` whatever the board holds there, so the check can be
/// run before or after the piece is written.
pub fn detect_win(board: &Board, row: usize, col: usize, cell: Cell) -> bool {
    if cell == Cell::Empty || row >= ROWS || col >= COLS {
        return false;
    }

    AXES.iter().any(|&(dr, dc)| {
        let run = 1
            + board.count_direction(row, col, dr, dc, cell)
            + board.count_direction(row, col, -dr, -dc, cell);
        run >= WIN_LENGTH
    })
}

/// Cells of the first winning run through (row, col), ordered from one end
/// to the other. Runs longer than [`WIN_LENGTH`] are returned whole.
pub fn winning_run(board: &Board, row: usize, col: usize, cell: Cell) -> Option<Vec<(usize, usize)>> {
    if cell == Cell::Empty || row >= ROWS || col >= COLS {
        return None;
    }

    AXES.iter().find_map(|&(dr, dc)| {
        let back = board.count_direction(row, col, -dr, -dc, cell);
        let forward = board.count_direction(row, col, dr, dc, cell);
        if 1 + back + forward < WIN_LENGTH {
            return None;
        }

        let start_r = row as isize - dr * back as isize;
        let start_c = col as isize - dc * back as isize;
        let cells = (0..=(back + forward) as isize)
            .map(|i| ((start_r + dr * i) as usize, (start_c + dc * i) as usize))
            .collect();
        Some(cells)
    })
}
