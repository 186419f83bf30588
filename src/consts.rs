//! Assorted constants & hard-coded configuration
use ratatui::{
    layout::Size,
    style::{Color, Modifier, Style},
};

/// Size of the playing area in "pixels"
pub(crate) const PLAYFIELD_PIXELS: Size = Size {
    width: 640,
    height: 480,
};

/// Width & height of a single grid cell in "pixels"
pub(crate) const CELL_PIXELS: u16 = 20;

/// Number of cells in the grid along each axis
pub(crate) const GRID_SIZE: Size = Size {
    width: PLAYFIELD_PIXELS.width / CELL_PIXELS,
    height: PLAYFIELD_PIXELS.height / CELL_PIXELS,
};

/// Number of terminal columns used to draw one grid cell, so that cells come
/// out roughly square
pub(crate) const CELL_COLUMNS: u16 = 2;

/// Draw everything inside a rectangle of this size in the center of the
/// terminal window: the bordered grid plus a status line.
///
/// Cf. [`crate::util::get_display_area()`]
pub(crate) const DISPLAY_SIZE: Size = Size {
    width: 80,
    height: GRID_SIZE.height + 3,
};

/// Default number of times per second that the snake moves
pub(crate) const DEFAULT_TICK_RATE: u32 = 20;

/// Highest tick rate accepted from the configuration file
pub(crate) const MAX_TICK_RATE: u32 = 60;

/// Length of the snake before any food has been eaten
pub(crate) const INITIAL_SNAKE_LENGTH: usize = 1;

/// How many cells the snake's length should increase by upon eating food
pub(crate) const SNAKE_GROWTH: usize = 1;

/// Glyph for the snake's head when it is moving up
pub(crate) const SNAKE_HEAD_UP_SYMBOL: &str = "▀▀";

/// Glyph for the snake's head when it is moving down
pub(crate) const SNAKE_HEAD_DOWN_SYMBOL: &str = "▄▄";

/// Glyph for the snake's head when it is moving left
pub(crate) const SNAKE_HEAD_LEFT_SYMBOL: &str = "▐█";

/// Glyph for the snake's head when it is moving right
pub(crate) const SNAKE_HEAD_RIGHT_SYMBOL: &str = "█▌";

/// Glyph for the parts of the snake's body
pub(crate) const SNAKE_BODY_SYMBOL: &str = "██";

/// Glyph for the food
pub(crate) const FOOD_SYMBOL: &str = "██";

/// Glyph for a cell that has been emptied
pub(crate) const BACKGROUND_SYMBOL: &str = "  ";

/// Style for the snake's head and body
pub(crate) const SNAKE_STYLE: Style = Style::new().fg(Color::Green);

/// Style for the food
pub(crate) const FOOD_STYLE: Style = Style::new().fg(Color::Red);

/// Style for the dotted border around the grid
pub(crate) const BORDER_STYLE: Style = Style::new().fg(Color::Cyan);

/// Style for the status line at the top of the game screen
pub(crate) const STATUS_STYLE: Style = Style::new().add_modifier(Modifier::REVERSED);
