mod app;
mod color;
pub mod error;
pub mod grid;
pub mod image;
mod palette;
mod palette_bar;
mod theme;

pub use app::{App, Input, State};
pub use color::Color;
pub use error::{LoadError, PaletteError};
pub use grid::{Cell, Grid};
pub use image::Image;
pub use palette::{Palette, PaletteEntry};
pub use palette_bar::PaletteBar;
pub use theme::Theme;
