use font8x8::{UnicodeFonts, BASIC_FONTS};

use crate::Color;

/// Glyph cell size of the bitmap font, before scaling.
pub const GLYPH_SIZE: u32 = 8;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    pub const fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn contains(&self, x: u32, y: u32) -> bool {
        x >= self.x && y >= self.y && x - self.x < self.width && y - self.y < self.height
    }
}

/// Packed RGB24 raster, row-major, three bytes per pixel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    width: u32,
    height: u32,
    buffer: Box<[u8]>,
}

impl Image {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            buffer: vec![0; width as usize * height as usize * 3].into_boxed_slice(),
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn buffer(&self) -> &[u8] {
        &self.buffer
    }

    /// Bytes per row.
    pub fn pitch(&self) -> usize {
        self.width as usize * 3
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let index = (x as usize + y as usize * self.width as usize) * 3;
        Some(Color::new(
            self.buffer[index],
            self.buffer[index + 1],
            self.buffer[index + 2],
        ))
    }

    pub fn draw_pixel(&mut self, x: u32, y: u32, color: Color) {
        if x >= self.width || y >= self.height {
            return;
        }
        let index = (x as usize + y as usize * self.width as usize) * 3;
        self.buffer[index] = color.r;
        self.buffer[index + 1] = color.g;
        self.buffer[index + 2] = color.b;
    }

    /// Fills `rect`, clipped to the image.
    pub fn fill_rect(&mut self, rect: Rect, color: Color) {
        let x_end = rect.x.saturating_add(rect.width).min(self.width);
        let y_end = rect.y.saturating_add(rect.height).min(self.height);
        for y in rect.y..y_end {
            for x in rect.x..x_end {
                self.draw_pixel(x, y, color);
            }
        }
    }

    /// Draws a border of `thickness` pixels along the inside of `rect`.
    pub fn outline_rect(&mut self, rect: Rect, thickness: u32, color: Color) {
        let t_x = thickness.min(rect.width);
        let t_y = thickness.min(rect.height);
        let right = rect.x + rect.width - t_x;
        let bottom = rect.y + rect.height - t_y;

        self.fill_rect(Rect::new(rect.x, rect.y, rect.width, t_y), color);
        self.fill_rect(Rect::new(rect.x, bottom, rect.width, t_y), color);
        self.fill_rect(Rect::new(rect.x, rect.y, t_x, rect.height), color);
        self.fill_rect(Rect::new(right, rect.y, t_x, rect.height), color);
    }

    pub fn draw_hline(&mut self, y: u32, color: Color) {
        self.fill_rect(Rect::new(0, y, self.width, 1), color);
    }

    /// Draws `text` with its top-left corner at `(x, y)`. Characters without a
    /// glyph still advance the pen.
    pub fn draw_text(&mut self, x: u32, y: u32, scale: u32, color: Color, text: &str) {
        let mut cx = x;
        for ch in text.chars() {
            if let Some(glyph) = BASIC_FONTS.get(ch) {
                for (row, bits) in glyph.iter().enumerate() {
                    for col in 0..GLYPH_SIZE {
                        if (bits >> col) & 1 == 1 {
                            self.fill_rect(
                                Rect::new(cx + col * scale, y + row as u32 * scale, scale, scale),
                                color,
                            );
                        }
                    }
                }
            }
            cx += GLYPH_SIZE * scale;
        }
    }

    /// Copies `source` into this image with its top-left corner at `(x, y)`,
    /// clipping whatever falls outside.
    pub fn blit(&mut self, source: &Image, x: u32, y: u32) {
        if x >= self.width || y >= self.height {
            return;
        }
        let columns = source.width.min(self.width - x) as usize;
        let rows = source.height.min(self.height - y);
        for row in 0..rows {
            let src = row as usize * source.pitch();
            let dst = (y + row) as usize * self.pitch() + x as usize * 3;
            self.buffer[dst..dst + columns * 3]
                .copy_from_slice(&source.buffer[src..src + columns * 3]);
        }
    }
}

pub fn text_height(scale: u32) -> u32 {
    GLYPH_SIZE * scale
}
