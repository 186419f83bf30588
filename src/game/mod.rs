mod food;
mod grid;
mod heading;
mod render;
mod snake;
pub(crate) use self::heading::Heading;
pub(crate) use self::render::{Board, Entity, Palette, Scene};
use self::food::Food;
use self::grid::Grid;
use self::snake::Snake;
use crate::clock::TickRate;
use crate::command::Command;
use rand::Rng;
use std::io;

/// Source of player input, checked once per tick
pub(crate) trait InputSource {
    /// Return the command the player issued since the last poll, if any
    fn poll(&mut self) -> io::Result<Option<Command>>;
}

/// Draws the board after every tick
pub(crate) trait Renderer {
    fn draw(&mut self, scene: Scene<'_>) -> io::Result<()>;
}

/// Keeps the game loop to a fixed rate
pub(crate) trait Pacer {
    /// Block until the next tick is due
    fn tick(&mut self, rate: TickRate);
}

/// What happened to the snake during a tick
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Tick {
    Moved,
    Ate,
    /// The snake ran into itself at the given length and was reset
    Reset {
        length: usize,
    },
}

/// A game session: the snake, its food, and the rules tying them together
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Game<R = rand::rngs::ThreadRng> {
    rng: R,
    snake: Snake,
    food: Food,
    best_len: usize,
}

impl Game<rand::rngs::ThreadRng> {
    pub(crate) fn new() -> Self {
        Game::new_with_rng(Grid::default(), rand::rng())
    }
}

impl<R: Rng> Game<R> {
    pub(crate) fn new_with_rng(grid: Grid, mut rng: R) -> Game<R> {
        let snake = Snake::new(grid, rng.random());
        let food = Food::new(grid, &snake.occupied(), &mut rng);
        let best_len = snake.len();
        Game {
            rng,
            snake,
            food,
            best_len,
        }
    }

    /// Run the game until the player quits.  An initial frame is drawn before
    /// the first tick.
    pub(crate) fn run<I, D, P>(
        &mut self,
        input: &mut I,
        display: &mut D,
        pacer: &mut P,
        rate: TickRate,
    ) -> io::Result<()>
    where
        I: InputSource,
        D: Renderer,
        P: Pacer,
    {
        let grid = self.grid();
        log::info!("Starting game on a {}x{} grid at {rate}", grid.width, grid.height);
        display.draw(self.scene())?;
        loop {
            pacer.tick(rate);
            let turn = match input.poll()? {
                Some(Command::Quit) => {
                    log::info!("Quitting; best length this session was {}", self.best_len);
                    return Ok(());
                }
                Some(cmd) => cmd.heading(),
                None => None,
            };
            self.tick(turn);
            display.draw(self.scene())?;
        }
    }

    /// Advance the game by one step, first turning the snake towards `turn`
    /// if given
    pub(crate) fn tick(&mut self, turn: Option<Heading>) -> Tick {
        if let Some(heading) = turn {
            self.snake.set_pending_heading(heading);
        }
        self.snake.advance();
        self.best_len = self.best_len.max(self.snake.len());
        let mut outcome = Tick::Moved;
        if self.snake.head() == self.food.position() {
            self.snake.grow();
            self.food.relocate(&self.snake.occupied(), &mut self.rng);
            log::debug!("Snake ate; target length is now {}", self.snake.target_len());
            outcome = Tick::Ate;
        }
        if self.snake.self_collided() {
            let length = self.snake.len();
            log::info!("Snake ran into itself at length {length}; starting over");
            self.snake.reset(&mut self.rng);
            if self.snake.occupies(self.food.position()) {
                self.food.relocate(&self.snake.occupied(), &mut self.rng);
            }
            outcome = Tick::Reset { length };
        }
        outcome
    }
}

impl<R> Game<R> {
    pub(crate) fn grid(&self) -> Grid {
        self.snake.grid()
    }

    pub(crate) fn scene(&self) -> Scene<'_> {
        Scene {
            snake: &self.snake,
            food: &self.food,
            best_len: self.best_len,
        }
    }
}
