//! Cursor movement across the grid
//!
//! Selection coordinates cover the regular cells plus the total lines:
//! `[0, n]×[0, n]` for an n×n grid, where index n on either axis is the
//! matching total line and `(n, n)` is the grand total. Requests that
//! would leave that range are ignored, so the cursor sticks at the
//! boundary instead of wrapping. Everything here is pure computation;
//! showing the cursor is the ui layer's job.

use crate::domain::cell::CellId;

/// A directional navigation step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// Selection coordinate, including the total lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    pub row: usize,
    pub col: usize,
}

impl Cursor {
    pub const ORIGIN: Cursor = Cursor { row: 0, col: 0 };

    pub fn new(row: usize, col: usize) -> Cursor {
        Cursor { row, col }
    }
}

/// Tracks the selected cell and computes the next one on input.
///
/// At most one cell is selected at a time; a fresh navigator selects
/// nothing until the first navigation or pointer request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigator {
    size: usize,
    selected: Option<Cursor>,
}

impl Navigator {
    /// Creates a navigator for an n×n grid.
    pub fn new(size: usize) -> Navigator {
        Navigator {
            size,
            selected: None,
        }
    }

    /// Currently selected coordinate, if any.
    pub fn selection(&self) -> Option<Cursor> {
        self.selected
    }

    /// Cell id of the current selection, if any.
    pub fn selected_cell(&self) -> Option<CellId> {
        self.selected
            .and_then(|cursor| CellId::at(cursor.row, cursor.col, self.size))
    }

    /// Deselects whatever is selected.
    pub fn clear(&mut self) {
        self.selected = None;
    }

    /// Selects the given coordinate. Out-of-range requests are ignored
    /// and the selection left unchanged.
    pub fn select(&mut self, row: usize, col: usize) {
        if row > self.size || col > self.size {
            return;
        }
        self.selected = Some(Cursor::new(row, col));
    }

    /// Moves one cell in the given direction.
    ///
    /// The first directional press with nothing selected lands on the
    /// origin cell without applying the direction. Steps that would
    /// leave the grid are ignored.
    pub fn step(&mut self, direction: Direction) {
        let Some(cursor) = self.selected else {
            self.selected = Some(Cursor::ORIGIN);
            return;
        };

        let (row, col) = (cursor.row as isize, cursor.col as isize);
        let (row, col) = match direction {
            Direction::Up => (row - 1, col),
            Direction::Down => (row + 1, col),
            Direction::Left => (row, col - 1),
            Direction::Right => (row, col + 1),
        };
        if row < 0 || col < 0 {
            return;
        }
        self.select(row as usize, col as usize);
    }

    /// Advances along the tab order: rightward through the row including
    /// its total, then to the start of the next row. A no-op on the
    /// grand total. With nothing selected the step is taken from the
    /// origin.
    pub fn tab_forward(&mut self) {
        let cursor = self.selected.unwrap_or(Cursor::ORIGIN);
        if cursor.col < self.size {
            self.select(cursor.row, cursor.col + 1);
        } else if cursor.row < self.size {
            self.select(cursor.row + 1, 0);
        }
    }

    /// Walks the tab order backwards: leftward through the row, then to
    /// the total column of the previous row. A no-op on the origin.
    pub fn tab_backward(&mut self) {
        let cursor = self.selected.unwrap_or(Cursor::ORIGIN);
        if cursor.col > 0 {
            self.select(cursor.row, cursor.col - 1);
        } else if cursor.row > 0 {
            self.select(cursor.row - 1, self.size);
        }
    }
}
