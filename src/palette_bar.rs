use crate::{
    image::{self, Image, Rect},
    Palette, Theme,
};

/// Strip of clickable swatches, one per palette entry, left to right.
#[derive(Debug, Clone)]
pub struct PaletteBar {
    palette: Palette,
    theme: Theme,
    image: Image,
}

impl PaletteBar {
    /// Creates a bar of the given size, rendered with swatch 0 highlighted.
    pub fn new(palette: Palette, width: u32, height: u32, theme: Theme) -> Self {
        let mut bar = Self {
            palette,
            theme,
            image: Image::new(width, height),
        };
        bar.select(0);
        bar
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn image(&self) -> &Image {
        &self.image
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Every swatch is `width / N` pixels wide; any remainder on the right is
    /// left unpainted.
    pub fn swatch_width(&self) -> u32 {
        self.width() / self.palette.len() as u32
    }

    pub fn swatch_rect(&self, index: usize) -> Rect {
        let width = self.swatch_width();
        Rect::new(index as u32 * width, 0, width, self.height())
    }

    pub fn render(&mut self) {
        let label_height = image::text_height(self.theme.label_scale);
        for (i, entry) in self.palette.entries().iter().enumerate() {
            let rect = self.swatch_rect(i);
            self.image.fill_rect(rect, entry.color);

            let x = rect.x + self.theme.label_padding;
            let y = (rect.height / 2).saturating_sub(label_height / 2);
            self.image.draw_text(
                x,
                y,
                self.theme.label_scale,
                self.theme.label_color,
                &entry.name,
            );
        }

        self.image.draw_hline(0, self.theme.separator_color);
    }

    /// Outlines swatch `index`. Draws over the current image, so call
    /// [`PaletteBar::render`] first when moving the highlight.
    pub fn highlight(&mut self, index: usize) {
        let rect = self.swatch_rect(index);
        self.image.outline_rect(
            rect,
            self.theme.highlight_thickness,
            self.theme.highlight_color,
        );
    }

    pub fn select(&mut self, index: usize) {
        self.render();
        self.highlight(index);
    }

    /// Swatch index under `(x, y)`, relative to the bar's top-left corner.
    pub fn hit_test(&self, x: u32, y: u32) -> Option<usize> {
        let width = self.swatch_width();
        if width == 0 || y >= self.height() {
            return None;
        }
        let index = (x / width) as usize;
        (index < self.palette.len()).then_some(index)
    }
}
