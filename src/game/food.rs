use super::grid::Grid;
use rand::Rng;
use ratatui::layout::Position;
use std::collections::HashSet;

/// A single piece of food on the board
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Food {
    grid: Grid,
    pub(super) position: Position,
}

impl Food {
    /// Place a new piece of food on a random cell of `grid` not in
    /// `occupied`
    pub(crate) fn new<R: Rng>(grid: Grid, occupied: &HashSet<Position>, rng: &mut R) -> Food {
        let mut food = Food {
            grid,
            position: Position::ORIGIN,
        };
        food.relocate(occupied, rng);
        food
    }

    pub(crate) fn position(&self) -> Position {
        self.position
    }

    /// Move the food to a cell chosen uniformly at random from those not in
    /// `occupied`.
    ///
    /// Cells are drawn from the whole grid until one is free, so `occupied`
    /// must not cover the entire grid or this never returns.  The grid is far
    /// larger than any snake reached in play.
    pub(crate) fn relocate<R: Rng>(&mut self, occupied: &HashSet<Position>, rng: &mut R) {
        self.position = loop {
            let cell = self.grid.random_cell(rng);
            if !occupied.contains(&cell) {
                break cell;
            }
        };
        log::debug!("Placed food at {:?}", self.position);
    }
}
