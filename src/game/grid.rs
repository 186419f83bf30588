use crate::consts;
use rand::Rng;
use ratatui::layout::{Position, Size};
#[cfg(test)]
use ratatui::layout::Rect;

/// The dimensions of the toroidal board the snake moves on, measured in
/// cells
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Grid {
    pub(crate) width: u16,
    pub(crate) height: u16,
}

impl Grid {
    /// Both dimensions must be nonzero.
    pub(crate) const fn new(width: u16, height: u16) -> Grid {
        Grid { width, height }
    }

    pub(crate) fn center(self) -> Position {
        Position::new(self.width / 2, self.height / 2)
    }

    /// Pick a cell uniformly at random
    pub(crate) fn random_cell<R: Rng>(self, rng: &mut R) -> Position {
        Position::new(
            rng.random_range(0..self.width),
            rng.random_range(0..self.height),
        )
    }
}

#[cfg(test)]
impl Grid {
    /// Iterate over every cell of the grid in row-major order
    pub(crate) fn positions(self) -> ratatui::layout::Positions {
        Rect::new(0, 0, self.width, self.height).positions()
    }

    pub(crate) fn cell_count(self) -> usize {
        usize::from(self.width) * usize::from(self.height)
    }
}

impl Default for Grid {
    fn default() -> Grid {
        Grid::from(consts::GRID_SIZE)
    }
}

impl From<Size> for Grid {
    fn from(size: Size) -> Grid {
        Grid::new(size.width, size.height)
    }
}
