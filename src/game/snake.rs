use super::grid::Grid;
use super::heading::Heading;
use crate::consts;
use rand::Rng;
use ratatui::layout::Position;
use std::collections::{HashSet, VecDeque};

/// Snake state.
///
/// The body is stored as the head plus the segments behind it, so a snake
/// always has at least one cell.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Snake {
    /// The board the snake moves on
    grid: Grid,

    /// The position of the snake's head
    pub(super) head: Position,

    /// The cells behind the head, nearest first
    pub(super) segments: VecDeque<Position>,

    /// The length the body should have once any pending growth is applied
    pub(super) target_len: usize,

    /// The direction in which the snake is currently moving
    pub(super) heading: Heading,

    /// Heading requested by the player, applied on the next advance
    pending_heading: Option<Heading>,

    /// The cell vacated by the tail on the most recent advance
    last_removed: Option<Position>,
}

impl Snake {
    /// Create a new snake of length
    /// [`INITIAL_SNAKE_LENGTH`][consts::INITIAL_SNAKE_LENGTH] in the center
    /// of `grid`, facing `heading`
    pub(crate) fn new(grid: Grid, heading: Heading) -> Snake {
        Snake {
            grid,
            head: grid.center(),
            segments: VecDeque::new(),
            target_len: consts::INITIAL_SNAKE_LENGTH,
            heading,
            pending_heading: None,
            last_removed: None,
        }
    }

    /// Return the position of the snake's head
    pub(crate) fn head(&self) -> Position {
        self.head
    }

    pub(crate) fn grid(&self) -> Grid {
        self.grid
    }

    pub(crate) fn heading(&self) -> Heading {
        self.heading
    }

    pub(crate) fn target_len(&self) -> usize {
        self.target_len
    }

    pub(crate) fn last_removed(&self) -> Option<Position> {
        self.last_removed
    }

    /// Return the number of cells in the body, head included
    pub(crate) fn len(&self) -> usize {
        self.segments.len() + 1
    }

    /// Iterate over the cells of the body, head first
    pub(crate) fn body(&self) -> impl DoubleEndedIterator<Item = Position> + '_ {
        std::iter::once(self.head).chain(self.segments.iter().copied())
    }

    /// Return the cells of the body as a set, for placing food around
    pub(crate) fn occupied(&self) -> HashSet<Position> {
        self.body().collect()
    }

    pub(crate) fn occupies(&self, cell: Position) -> bool {
        self.head == cell || self.segments.contains(&cell)
    }

    /// Has the head moved onto one of the segments behind it?
    pub(crate) fn self_collided(&self) -> bool {
        self.segments.contains(&self.head)
    }

    /// Ask the snake to turn towards `heading` on the next advance.  A
    /// request to reverse is only rejected once the advance happens, against
    /// whatever heading is current then.
    pub(crate) fn set_pending_heading(&mut self, heading: Heading) {
        self.pending_heading = Some(heading);
    }

    /// Move the snake forwards one cell, first applying any pending heading
    /// that isn't a reversal
    pub(crate) fn advance(&mut self) {
        if let Some(heading) = self.pending_heading.take() {
            if heading != self.heading.reverse() {
                if heading != self.heading {
                    log::trace!("Snake turning from {:?} to {heading:?}", self.heading);
                }
                self.heading = heading;
            }
        }
        let new_head = self.heading.advance(self.head, self.grid);
        self.segments.push_front(self.head);
        self.head = new_head;
        self.last_removed = if self.len() > self.target_len {
            self.segments.pop_back()
        } else {
            None
        };
    }

    /// Extend the snake's target length in response to eating food.  The body
    /// catches up on the next advance.
    pub(crate) fn grow(&mut self) {
        self.target_len += consts::SNAKE_GROWTH;
    }

    /// Return the snake to its starting state in the center of the grid,
    /// facing in a random direction
    pub(crate) fn reset<R: Rng>(&mut self, rng: &mut R) {
        *self = Snake::new(self.grid, rng.random());
    }
}
