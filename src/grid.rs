use crate::input::Direction;

/// Grid position in logical cell coordinates.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns the neighbouring cell one step in `direction`, or `self` when
    /// no direction has been chosen yet.
    #[must_use]
    pub fn offset(self, direction: Option<Direction>) -> Self {
        match direction {
            None => self,
            Some(Direction::Up) => Self::new(self.x, self.y - 1),
            Some(Direction::Down) => Self::new(self.x, self.y + 1),
            Some(Direction::Left) => Self::new(self.x - 1, self.y),
            Some(Direction::Right) => Self::new(self.x + 1, self.y),
        }
    }
}

/// Logical grid dimensions plus the nominal pixel size of one cell.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct GridSize {
    pub width: u16,
    pub height: u16,
    pub cell_size: u16,
}

impl GridSize {
    /// Returns true when `cell` lies inside `[0, width) x [0, height)`.
    #[must_use]
    pub fn in_bounds(self, cell: Cell) -> bool {
        cell.x >= 0
            && cell.y >= 0
            && cell.x < i32::from(self.width)
            && cell.y < i32::from(self.height)
    }

    /// Returns the total number of cells in the grid.
    #[must_use]
    pub fn total_cells(self) -> usize {
        usize::from(self.width) * usize::from(self.height)
    }

    /// Returns the top-left pixel of `cell` at the configured cell size.
    #[must_use]
    pub fn pixel_origin(self, cell: Cell) -> (i32, i32) {
        let size = i32::from(self.cell_size);
        (cell.x * size, cell.y * size)
    }

    /// Returns the full board size in pixels.
    #[must_use]
    pub fn pixel_extent(self) -> (u32, u32) {
        let size = u32::from(self.cell_size);
        (u32::from(self.width) * size, u32::from(self.height) * size)
    }

    /// Returns the cell at the centre of the grid.
    #[must_use]
    pub fn center(self) -> Cell {
        Cell::new(i32::from(self.width / 2), i32::from(self.height / 2))
    }
}
