use super::grid::Grid;
use enum_map::Enum;
use rand::{
    distr::{Distribution, StandardUniform},
    Rng,
};
use ratatui::layout::Position;

/// One of the four directions in which the snake can travel
#[derive(Clone, Copy, Debug, Enum, Eq, PartialEq)]
pub(crate) enum Heading {
    Up,
    Down,
    Left,
    Right,
}

impl Heading {
    /// Return the cell one step away from `pos` in this direction.  Leaving
    /// one edge of `grid` re-enters at the opposite edge.
    pub(crate) fn advance(self, pos: Position, grid: Grid) -> Position {
        let Position { mut x, mut y } = pos;
        match self {
            Heading::Up => y = decrement_wrapping(y, grid.height),
            Heading::Down => y = increment_wrapping(y, grid.height),
            Heading::Left => x = decrement_wrapping(x, grid.width),
            Heading::Right => x = increment_wrapping(x, grid.width),
        }
        Position { x, y }
    }

    pub(crate) fn reverse(self) -> Heading {
        match self {
            Heading::Up => Heading::Down,
            Heading::Down => Heading::Up,
            Heading::Left => Heading::Right,
            Heading::Right => Heading::Left,
        }
    }
}

/// Headings are sampled uniformly
impl Distribution<Heading> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Heading {
        Heading::from_usize(rng.random_range(0..Heading::LENGTH))
    }
}

fn decrement_wrapping(x: u16, max: u16) -> u16 {
    if x == 0 {
        max.saturating_sub(1)
    } else {
        x - 1
    }
}

fn increment_wrapping(x: u16, max: u16) -> u16 {
    if x.saturating_add(1) >= max {
        0
    } else {
        x + 1
    }
}
