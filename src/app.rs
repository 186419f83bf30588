use crate::clock::{Clock, TickRate};
use crate::command::{latest_command, Command};
use crate::game::{Board, Game, InputSource, Palette, Renderer, Scene};
use crossterm::event::{poll, read};
use ratatui::{backend::Backend, Terminal};
use std::io;
use std::time::Duration;

/// The terminal frontend: wires a [`Game`] up to the keyboard, the screen, and
/// a real-time clock
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub(crate) struct App {
    tick_rate: TickRate,
    palette: Palette,
}

impl App {
    pub(crate) fn new(tick_rate: TickRate, palette: Palette) -> App {
        App { tick_rate, palette }
    }

    pub(crate) fn run<B: Backend>(self, terminal: Terminal<B>) -> io::Result<()> {
        let mut screen = Screen {
            terminal,
            palette: self.palette,
        };
        Game::new().run(
            &mut Keyboard,
            &mut screen,
            &mut Clock::default(),
            self.tick_rate,
        )
    }
}

/// Reads key presses from the terminal without blocking
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
struct Keyboard;

impl InputSource for Keyboard {
    fn poll(&mut self) -> io::Result<Option<Command>> {
        let mut events = Vec::new();
        while poll(Duration::ZERO)? {
            events.push(read()?);
        }
        Ok(latest_command(events))
    }
}

/// Draws the game on a terminal
#[derive(Debug)]
struct Screen<B: Backend> {
    terminal: Terminal<B>,
    palette: Palette,
}

impl<B: Backend> Renderer for Screen<B> {
    fn draw(&mut self, scene: Scene<'_>) -> io::Result<()> {
        let board = Board::new(scene, &self.palette);
        self.terminal
            .draw(|frame| frame.render_widget(board, frame.area()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;

    #[test]
    fn screen_draws_status_line() {
        let terminal = Terminal::new(TestBackend::new(80, 27)).unwrap();
        let mut screen = Screen {
            terminal,
            palette: Palette::default(),
        };
        let game = Game::new();
        screen.draw(game.scene()).unwrap();
        let buffer = screen.terminal.backend().buffer();
        let status = (0..9)
            .map(|x| buffer[(x, 0)].symbol())
            .collect::<String>();
        assert_eq!(status, " Length: ");
        assert_eq!(buffer[(7, 1)].symbol(), "·");
        assert_eq!(buffer[(72, 26)].symbol(), "·");
    }
}
