use log::{debug, info, trace};

use crate::{
    image::{Image, Rect},
    Color, Grid, Palette, PaletteBar, Theme,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    Running,
    Stopped,
}

/// Window input, in window coordinates with the origin at the top left.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    Quit,
    PointerPress { x: i32, y: i32 },
}

/// The grid on top, the palette bar directly beneath it, and the current
/// selection.
pub struct App {
    state: State,
    grid: Grid,
    palette_bar: PaletteBar,
    selected_color: Color,
    selected_index: usize,
    frame: Image,
}

impl App {
    pub fn new(grid: Grid, palette: Palette, theme: Theme) -> Self {
        let palette_bar = PaletteBar::new(palette, grid.width(), theme.bar_height, theme);
        let selected_color = palette_bar.palette().entries()[0].color;
        let frame = Image::new(grid.width(), grid.height() + palette_bar.height());

        info!(
            "{}x{} cells, {} palette entries",
            grid.columns(),
            grid.rows(),
            palette_bar.palette().len()
        );

        Self {
            state: State::Running,
            grid,
            palette_bar,
            selected_color,
            selected_index: 0,
            frame,
        }
    }

    pub fn state(&self) -> State {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == State::Running
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn palette_bar(&self) -> &PaletteBar {
        &self.palette_bar
    }

    pub fn selected_color(&self) -> Color {
        self.selected_color
    }

    pub fn selected_index(&self) -> usize {
        self.selected_index
    }

    pub fn window_size(&self) -> (u32, u32) {
        (self.frame.width(), self.frame.height())
    }

    fn grid_rect(&self) -> Rect {
        Rect::new(0, 0, self.grid.width(), self.grid.height())
    }

    fn palette_bar_rect(&self) -> Rect {
        Rect::new(
            0,
            self.grid.height(),
            self.palette_bar.width(),
            self.palette_bar.height(),
        )
    }

    pub fn handle(&mut self, input: Input) {
        if self.state == State::Stopped {
            return;
        }

        match input {
            Input::Quit => {
                info!("quit requested");
                self.state = State::Stopped;
            }
            Input::PointerPress { x, y } => {
                let (Ok(x), Ok(y)) = (u32::try_from(x), u32::try_from(y)) else {
                    trace!("ignored press at ({x}, {y})");
                    return;
                };
                self.press(x, y);
            }
        }
    }

    /// Applies one tick's inputs in arrival order.
    pub fn handle_all(&mut self, inputs: impl IntoIterator<Item = Input>) {
        for input in inputs {
            self.handle(input);
        }
    }

    fn press(&mut self, x: u32, y: u32) {
        if self.grid_rect().contains(x, y) {
            self.grid.recolor_at(x, y, self.selected_color);
            return;
        }

        let bar = self.palette_bar_rect();
        if !bar.contains(x, y) {
            trace!("ignored press at ({x}, {y})");
            return;
        }

        match self.palette_bar.hit_test(x - bar.x, y - bar.y) {
            Some(index) => self.select(index),
            None => trace!("press at ({x}, {y}) missed every swatch"),
        }
    }

    fn select(&mut self, index: usize) {
        let Some(entry) = self.palette_bar.palette().entries().get(index) else {
            return;
        };
        debug!("selected swatch {index} ({})", entry.name);
        self.selected_color = entry.color;
        self.selected_index = index;
        self.palette_bar.select(index);
    }

    /// Renders the grid and composites it with the palette bar.
    pub fn frame(&mut self) -> &Image {
        let grid_height = self.grid.height();
        self.frame.blit(self.grid.render(), 0, 0);
        self.frame.blit(self.palette_bar.image(), 0, grid_height);
        &self.frame
    }
}
