use std::collections::HashSet;

use crate::{error::PaletteError, Color};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaletteEntry {
    pub name: String,
    pub color: Color,
}

impl PaletteEntry {
    pub fn new(name: impl Into<String>, color: Color) -> Self {
        Self {
            name: name.into(),
            color,
        }
    }
}

const BUILTIN: [(&str, Color); 5] = [
    ("BLANC", Color::from_hex(0xEFF0F2)),
    ("7715", Color::from_hex(0xB8BCC8)),
    ("Noir", Color::from_hex(0x090A0C)),
    ("7624", Color::from_hex(0x302F35)),
    ("7713", Color::from_hex(0x2B333D)),
];

/// Ordered set of named colors.
///
/// Entry order is the on-screen swatch order and the mapping from a cell
/// identity to its initial color.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    entries: Vec<PaletteEntry>,
}

impl Palette {
    /// # Errors
    ///
    /// Returns an error if `entries` is empty or two entries share a name.
    pub fn new(entries: Vec<PaletteEntry>) -> Result<Self, PaletteError> {
        if entries.is_empty() {
            return Err(PaletteError::Empty);
        }

        let mut seen = HashSet::new();
        for entry in &entries {
            if !seen.insert(entry.name.as_str()) {
                return Err(PaletteError::DuplicateName(entry.name.clone()));
            }
        }

        Ok(Self { entries })
    }

    pub fn entries(&self) -> &[PaletteEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn colors(&self) -> Vec<Color> {
        self.entries.iter().map(|entry| entry.color).collect()
    }

    /// Looks up the color at `index`. Indices past the end are an error, never a default.
    pub fn color(&self, index: usize) -> Result<Color, PaletteError> {
        self.entries
            .get(index)
            .map(|entry| entry.color)
            .ok_or(PaletteError::IndexOutOfRange {
                index,
                len: self.entries.len(),
            })
    }

    pub fn name(&self, index: usize) -> Option<&str> {
        self.entries.get(index).map(|entry| entry.name.as_str())
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            entries: BUILTIN
                .iter()
                .map(|&(name, color)| PaletteEntry::new(name, color))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_order() {
        let palette = Palette::default();
        let names: Vec<_> = palette.entries().iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["BLANC", "7715", "Noir", "7624", "7713"]);
        assert_eq!(palette.colors()[2], Color::new(0x09, 0x0A, 0x0C));
        assert_eq!(palette.color(4), Ok(Color::new(0x2B, 0x33, 0x3D)));
    }

    #[test]
    fn lookup_past_end_fails() {
        let palette = Palette::default();
        assert_eq!(
            palette.color(5),
            Err(PaletteError::IndexOutOfRange { index: 5, len: 5 })
        );
        assert_eq!(palette.name(5), None);
    }

    #[test]
    fn rejects_empty_and_duplicates() {
        assert_eq!(Palette::new(Vec::new()), Err(PaletteError::Empty));

        let entries = vec![
            PaletteEntry::new("A", Color::WHITE),
            PaletteEntry::new("A", Color::BLACK),
        ];
        assert_eq!(
            Palette::new(entries),
            Err(PaletteError::DuplicateName("A".into()))
        );
    }
}
