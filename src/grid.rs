use std::{fs, path::Path};

use log::{debug, info};

use crate::{
    error::LoadError,
    image::{Image, Rect},
    Color, Palette,
};

pub const CELL_WIDTH: u32 = 5;
pub const CELL_HEIGHT: u32 = 5;

pub const DELIMITER: char = ';';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    identity: usize,
    pub color: Color,
}

impl Cell {
    pub fn identity(&self) -> usize {
        self.identity
    }
}

#[derive(Debug, Clone)]
pub struct Grid {
    columns: usize,
    rows: usize,
    cells: Vec<Cell>,
    image: Image,
}

impl Grid {
    /// Builds a grid from rows of 1-based field values. Lines are numbered
    /// from 1 in the order the rows are given.
    ///
    /// # Errors
    ///
    /// Returns an error if there are no rows, a row's length differs from the
    /// first, a field isn't a positive integer, or a value has no palette entry.
    pub fn load<R, F>(rows: R, palette: &Palette) -> Result<Self, LoadError>
    where
        R: IntoIterator<Item = (usize, F)>,
        F: IntoIterator,
        F::Item: AsRef<str>,
    {
        let mut columns = None;
        let mut row_count = 0;
        let mut cells = Vec::new();

        for (line, fields) in rows {
            let start = cells.len();
            for (i, field) in fields.into_iter().enumerate() {
                let column = i + 1;
                let field = field.as_ref().trim();
                let value: usize = field.parse().map_err(|_| LoadError::InvalidValue {
                    line,
                    column,
                    value: field.to_string(),
                })?;
                let identity = value
                    .checked_sub(1)
                    .ok_or(LoadError::ZeroValue { line, column })?;
                let color = palette
                    .color(identity)
                    .map_err(|source| LoadError::Palette {
                        line,
                        column,
                        source,
                    })?;
                cells.push(Cell { identity, color });
            }

            let found = cells.len() - start;
            let expected = *columns.get_or_insert(found);
            if found != expected {
                return Err(LoadError::Shape {
                    line,
                    expected,
                    found,
                });
            }
            row_count += 1;
        }

        let columns = columns.ok_or(LoadError::Empty)?;
        let image = Image::new(columns as u32 * CELL_WIDTH, row_count as u32 * CELL_HEIGHT);

        Ok(Self {
            columns,
            rows: row_count,
            cells,
            image,
        })
    }

    /// Parses semicolon-delimited text. Blank lines are skipped.
    pub fn parse(text: &str, palette: &Palette) -> Result<Self, LoadError> {
        let rows = text
            .lines()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty())
            .map(|(i, line)| (i + 1, line.split(DELIMITER)));
        Self::load(rows, palette)
    }

    pub fn open(path: impl AsRef<Path>, palette: &Palette) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let grid = Self::parse(&text, palette)?;
        info!(
            "loaded {}x{} pattern from {}",
            grid.columns,
            grid.rows,
            path.display()
        );
        Ok(grid)
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn cell(&self, column: usize, row: usize) -> Option<&Cell> {
        if column >= self.columns || row >= self.rows {
            return None;
        }
        self.cells.get(row * self.columns + column)
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Pixel position to `(column, row)`. Not bounds-checked.
    pub fn pixel_to_cell(&self, x: u32, y: u32) -> (usize, usize) {
        ((x / CELL_WIDTH) as usize, (y / CELL_HEIGHT) as usize)
    }

    /// Paints every cell sharing the identity of the cell under `(x, y)`.
    /// A position outside the grid changes nothing.
    ///
    /// Returns the number of cells with that identity.
    pub fn recolor_at(&mut self, x: u32, y: u32, color: Color) -> usize {
        let (column, row) = self.pixel_to_cell(x, y);
        let Some(identity) = self.cell(column, row).map(Cell::identity) else {
            return 0;
        };

        let mut count = 0;
        for cell in self.cells.iter_mut().filter(|c| c.identity == identity) {
            cell.color = color;
            count += 1;
        }
        debug!("recolored {count} cells with identity {identity} to {color:?}");
        count
    }

    pub fn render(&mut self) -> &Image {
        for (i, cell) in self.cells.iter().enumerate() {
            let column = (i % self.columns) as u32;
            let row = (i / self.columns) as u32;
            self.image.fill_rect(
                Rect::new(
                    column * CELL_WIDTH,
                    row * CELL_HEIGHT,
                    CELL_WIDTH,
                    CELL_HEIGHT,
                ),
                cell.color,
            );
        }
        &self.image
    }

    pub fn image(&self) -> &Image {
        &self.image
    }
}

#[cfg(test)]
mod tests {
    use crate::{error::PaletteError, PaletteEntry};

    use super::*;

    const A: Color = Color::new(10, 0, 0);
    const B: Color = Color::new(0, 20, 0);
    const C: Color = Color::new(0, 0, 30);

    fn two_colors() -> Palette {
        Palette::new(vec![PaletteEntry::new("A", A), PaletteEntry::new("B", B)]).unwrap()
    }

    fn colors(grid: &Grid) -> Vec<Vec<Color>> {
        (0..grid.rows())
            .map(|row| {
                (0..grid.columns())
                    .map(|column| grid.cell(column, row).unwrap().color)
                    .collect()
            })
            .collect()
    }

    #[test]
    fn shape_matches_input() {
        let grid = Grid::parse("1;2;3\n3;2;1\n1;1;1\n5;4;5\n", &Palette::default()).unwrap();
        assert_eq!(grid.columns(), 3);
        assert_eq!(grid.rows(), 4);
        assert_eq!(grid.width(), 15);
        assert_eq!(grid.height(), 20);
    }

    #[test]
    fn initial_colors_follow_identity() {
        let palette = Palette::default();
        let grid = Grid::parse("1;2;3;4;5\r\n5;4;3;2;1\r\n", &palette).unwrap();
        for cell in grid.cells() {
            assert_eq!(Ok(cell.color), palette.color(cell.identity()));
        }
        assert_eq!(grid.cell(0, 1).unwrap().identity(), 4);
    }

    #[test]
    fn ragged_rows_fail() {
        let err = Grid::parse("1;2\n1;2;1\n", &two_colors()).unwrap_err();
        assert!(matches!(
            err,
            LoadError::Shape {
                line: 2,
                expected: 2,
                found: 3
            }
        ));
    }

    #[test]
    fn bad_values_fail() {
        let err = Grid::parse("1;x\n", &two_colors()).unwrap_err();
        assert!(
            matches!(err, LoadError::InvalidValue { line: 1, column: 2, ref value } if value == "x")
        );

        let err = Grid::parse("1;2\n0;1\n", &two_colors()).unwrap_err();
        assert!(matches!(err, LoadError::ZeroValue { line: 2, column: 1 }));

        let err = Grid::parse("1;-1\n", &two_colors()).unwrap_err();
        assert!(matches!(err, LoadError::InvalidValue { column: 2, .. }));
    }

    #[test]
    fn identity_past_palette_fails() {
        let err = Grid::parse("1;3\n", &two_colors()).unwrap_err();
        assert!(matches!(
            err,
            LoadError::Palette {
                line: 1,
                column: 2,
                source: PaletteError::IndexOutOfRange { index: 2, len: 2 }
            }
        ));
    }

    #[test]
    fn empty_input_fails() {
        assert!(matches!(
            Grid::parse("\n\n", &two_colors()),
            Err(LoadError::Empty)
        ));
    }

    #[test]
    fn missing_file_fails() {
        let err = Grid::open("does/not/exist.csv", &two_colors()).unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
    }

    #[test]
    fn blank_lines_keep_line_numbers() {
        let err = Grid::parse("1;2\n\n2\n", &two_colors()).unwrap_err();
        assert!(matches!(err, LoadError::Shape { line: 3, .. }));
    }

    #[test]
    fn pixel_to_cell_divides() {
        let grid = Grid::parse("1;2\n2;1\n", &two_colors()).unwrap();
        assert_eq!(grid.pixel_to_cell(0, 0), (0, 0));
        assert_eq!(grid.pixel_to_cell(4, 4), (0, 0));
        assert_eq!(grid.pixel_to_cell(5, 9), (1, 1));
        assert_eq!(grid.pixel_to_cell(12, 3), (2, 0));
    }

    #[test]
    fn recolor_by_identity() {
        let mut grid = Grid::parse("1;2\n2;1\n", &two_colors()).unwrap();
        assert_eq!(colors(&grid), [[A, B], [B, A]]);

        assert_eq!(grid.recolor_at(1, 1, C), 2);
        assert_eq!(colors(&grid), [[C, B], [B, C]]);
    }

    #[test]
    fn recolor_twice_is_recolor_once() {
        let mut once = Grid::parse("1;2;1\n2;2;1\n", &two_colors()).unwrap();
        let mut twice = once.clone();
        once.recolor_at(7, 2, C);
        twice.recolor_at(7, 2, C);
        twice.recolor_at(7, 2, C);
        assert_eq!(once.cells(), twice.cells());
    }

    #[test]
    fn recolor_outside_is_noop() {
        let mut grid = Grid::parse("1;2\n2;1\n", &two_colors()).unwrap();
        let before = grid.cells().to_vec();

        assert_eq!(grid.recolor_at(10, 0, C), 0);
        assert_eq!(grid.recolor_at(0, 10, C), 0);
        assert_eq!(grid.recolor_at(u32::MAX, u32::MAX, C), 0);
        assert_eq!(grid.cells(), before.as_slice());
    }

    #[test]
    fn render_paints_cells() {
        let mut grid = Grid::parse("1;2\n2;1\n", &two_colors()).unwrap();
        let image = grid.render();
        assert_eq!((image.width(), image.height()), (10, 10));
        assert_eq!(image.pixel(0, 0), Some(A));
        assert_eq!(image.pixel(5, 0), Some(B));
        assert_eq!(image.pixel(4, 9), Some(B));
        assert_eq!(image.pixel(9, 9), Some(A));

        grid.recolor_at(6, 1, C);
        let first = grid.render().clone();
        assert_eq!(first.pixel(0, 5), Some(C));
        assert_eq!(&first, grid.render());
    }
}
