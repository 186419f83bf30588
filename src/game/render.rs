use super::food::Food;
use super::grid::Grid;
use super::heading::Heading;
use super::snake::Snake;
use crate::consts;
use crate::util::{center_rect, get_display_area};
use enum_map::{enum_map, Enum, EnumMap};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Margin, Position, Rect, Size},
    style::Style,
    text::Line,
    widgets::Widget,
};

/// Something that occupies cells on the board and can be painted onto them
pub(crate) trait Renderable {
    /// The cells to paint, in painting order
    fn cells(&self) -> impl Iterator<Item = Position> + '_;

    /// Which palette entry to paint the cells with
    fn entity(&self) -> Entity;

    /// The glyph to paint at `cell`
    fn symbol(&self, cell: Position) -> &'static str;
}

#[derive(Clone, Copy, Debug, Enum, Eq, PartialEq)]
pub(crate) enum Entity {
    Snake,
    Food,
}

/// Styles used for drawing the game screen
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Palette {
    pub(crate) entities: EnumMap<Entity, Style>,
    pub(crate) border: Style,
    pub(crate) status: Style,
}

impl Default for Palette {
    fn default() -> Palette {
        Palette {
            entities: enum_map! {
                Entity::Snake => consts::SNAKE_STYLE,
                Entity::Food => consts::FOOD_STYLE,
            },
            border: consts::BORDER_STYLE,
            status: consts::STATUS_STYLE,
        }
    }
}

/// Everything that needs to be drawn after a tick
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Scene<'a> {
    pub(crate) snake: &'a Snake,
    pub(crate) food: &'a Food,
    /// The longest the snake has been this session
    pub(crate) best_len: usize,
}

impl Scene<'_> {
    pub(crate) fn grid(&self) -> Grid {
        self.snake.grid()
    }

    /// The cell emptied by the snake's tail on the last tick, if any
    pub(crate) fn vacated(&self) -> Option<Position> {
        self.snake.last_removed()
    }
}

/// A widget drawing a [`Scene`] with a [`Palette`]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Board<'a> {
    scene: Scene<'a>,
    palette: &'a Palette,
}

impl<'a> Board<'a> {
    pub(crate) fn new(scene: Scene<'a>, palette: &'a Palette) -> Board<'a> {
        Board { scene, palette }
    }
}

impl Widget for Board<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let display = get_display_area(area);
        let [status_area, block_area] =
            Layout::vertical([Constraint::Length(1), Constraint::Fill(1)]).areas(display);
        Line::styled(
            format!(
                " Length: {}  Best: {}",
                self.scene.snake.len(),
                self.scene.best_len
            ),
            self.palette.status,
        )
        .render(status_area, buf);

        let grid = self.scene.grid();
        let block_size = Size {
            width: grid
                .width
                .saturating_mul(consts::CELL_COLUMNS)
                .saturating_add(2),
            height: grid.height.saturating_add(2),
        };
        let block_area = center_rect(block_area, block_size);
        DottedBorder {
            style: self.palette.border,
        }
        .render(block_area, buf);

        let mut level = Canvas {
            area: block_area.inner(Margin::new(1, 1)),
            buf,
        };
        if let Some(cell) = self.scene.vacated() {
            level.draw_cell(cell, consts::BACKGROUND_SYMBOL, Style::reset());
        }
        level.paint(self.scene.food, self.palette);
        level.paint(self.scene.snake, self.palette);
    }
}

impl Renderable for Snake {
    fn cells(&self) -> impl Iterator<Item = Position> + '_ {
        // Paint the head last so that it ends up on top
        self.body().rev()
    }

    fn entity(&self) -> Entity {
        Entity::Snake
    }

    fn symbol(&self, cell: Position) -> &'static str {
        if cell != self.head() {
            consts::SNAKE_BODY_SYMBOL
        } else {
            match self.heading() {
                Heading::Up => consts::SNAKE_HEAD_UP_SYMBOL,
                Heading::Down => consts::SNAKE_HEAD_DOWN_SYMBOL,
                Heading::Left => consts::SNAKE_HEAD_LEFT_SYMBOL,
                Heading::Right => consts::SNAKE_HEAD_RIGHT_SYMBOL,
            }
        }
    }
}

impl Renderable for Food {
    fn cells(&self) -> impl Iterator<Item = Position> + '_ {
        std::iter::once(self.position())
    }

    fn entity(&self) -> Entity {
        Entity::Food
    }

    fn symbol(&self, _cell: Position) -> &'static str {
        consts::FOOD_SYMBOL
    }
}

#[derive(Debug, Eq, PartialEq)]
struct Canvas<'a> {
    area: Rect,
    buf: &'a mut Buffer,
}

impl Canvas<'_> {
    fn draw_char(&mut self, pos: Position, symbol: char, style: Style) {
        let Some(x) = self.area.x.checked_add(pos.x) else {
            return;
        };
        let Some(y) = self.area.y.checked_add(pos.y) else {
            return;
        };
        if let Some(cell) = self.buf.cell_mut((x, y)) {
            cell.set_char(symbol);
            cell.set_style(style);
        }
    }

    /// Draw `symbol` over the terminal columns making up grid cell `pos`
    fn draw_cell(&mut self, pos: Position, symbol: &str, style: Style) {
        let Some(x) = pos.x.checked_mul(consts::CELL_COLUMNS) else {
            return;
        };
        let style = Style::reset().patch(style);
        for (dx, ch) in (0..consts::CELL_COLUMNS).zip(symbol.chars()) {
            let Some(col) = x.checked_add(dx) else {
                return;
            };
            self.draw_char(Position::new(col, pos.y), ch, style);
        }
    }

    fn paint<T: Renderable>(&mut self, entity: &T, palette: &Palette) {
        let style = palette.entities[entity.entity()];
        for cell in entity.cells() {
            self.draw_cell(cell, entity.symbol(cell), style);
        }
    }
}

/// A border marking edges that the snake passes through
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
struct DottedBorder {
    style: Style,
}

impl Widget for DottedBorder {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }
        let size = area.as_size();
        let max_x = size.width.saturating_sub(1);
        let max_y = size.height.saturating_sub(1);
        let style = self.style;
        let mut canvas = Canvas { area, buf };
        canvas.draw_char(Position::ORIGIN, '·', style);
        canvas.draw_char(Position::new(max_x, 0), '·', style);
        canvas.draw_char(Position::new(max_x, max_y), '·', style);
        canvas.draw_char(Position::new(0, max_y), '·', style);
        for x in 1..max_x {
            canvas.draw_char(Position::new(x, 0), '⋯', style);
            canvas.draw_char(Position::new(x, max_y), '⋯', style);
        }
        for y in 1..max_y {
            canvas.draw_char(Position::new(0, y), '⋮', style);
            canvas.draw_char(Position::new(max_x, y), '⋮', style);
        }
    }
}
