use crate::Color;

/// Rendering constants shared by the palette bar and the app.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub label_color: Color,
    pub separator_color: Color,
    pub highlight_color: Color,
    pub highlight_thickness: u32,
    /// Horizontal gap between a swatch's left edge and its label.
    pub label_padding: u32,
    pub label_scale: u32,
    pub bar_height: u32,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            label_color: Color::BLACK,
            separator_color: Color::WHITE,
            highlight_color: Color::PINK,
            highlight_thickness: 2,
            label_padding: 4,
            label_scale: 2,
            bar_height: 50,
        }
    }
}
