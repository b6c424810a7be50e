// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The grid model: one canonical color per codel.
//!
//! Codels are stored in a flat row-major arena indexed by `y * width + x`,
//! which is also the index the union-find in [`super::union_find`] uses.

use crate::error::GridError;
use crate::geometry::{Classifier, Color, Position, Rgb};

/// Immutable codel colors of a program.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    colors: Vec<Color>,
}

impl Grid {
    /// Build a grid from a row-major pixel source, classifying each pixel.
    ///
    /// # Errors
    ///
    /// [`GridError::Empty`] for a zero-sized grid, [`GridError::SizeMismatch`]
    /// if `pixels` does not yield exactly `width * height` values.
    pub fn load<C, I>(width: usize, height: usize, pixels: I, classifier: &C) -> Result<Self, GridError>
    where
        C: Classifier + ?Sized,
        I: IntoIterator<Item = Rgb>,
    {
        let colors = pixels.into_iter().map(|rgb| classifier.classify(rgb)).collect();
        Self::from_colors(width, height, colors)
    }

    /// Build a grid from already classified colors in row-major order.
    pub fn from_colors(width: usize, height: usize, colors: Vec<Color>) -> Result<Self, GridError> {
        if width == 0 || height == 0 {
            return Err(GridError::Empty);
        }
        let expected = width * height;
        if colors.len() != expected {
            return Err(GridError::SizeMismatch {
                expected,
                actual: colors.len(),
            });
        }
        Ok(Self {
            width,
            height,
            colors,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Total number of codels.
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Always false: empty grids are rejected at construction.
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn contains(&self, pos: Position) -> bool {
        pos.x < self.width && pos.y < self.height
    }

    /// Flat arena index of an in-bounds position.
    pub(crate) fn index(&self, pos: Position) -> usize {
        pos.y * self.width + pos.x
    }

    pub(crate) fn position(&self, index: usize) -> Position {
        Position::new(index % self.width, index / self.width)
    }

    /// Color of the codel at `pos`.
    ///
    /// # Errors
    ///
    /// [`GridError::OutOfBounds`] outside `[0,width) x [0,height)`.
    pub fn get(&self, pos: Position) -> Result<Color, GridError> {
        if !self.contains(pos) {
            return Err(GridError::OutOfBounds { x: pos.x, y: pos.y });
        }
        Ok(self.colors[self.index(pos)])
    }

    /// Color of the codel at `pos`, or `None` when it lies off the grid.
    pub fn color_at(&self, pos: Position) -> Option<Color> {
        self.get(pos).ok()
    }

    /// Row-major iterator over `(position, color)`.
    pub fn codels(&self) -> impl Iterator<Item = (Position, Color)> + '_ {
        self.colors
            .iter()
            .enumerate()
            .map(move |(i, &c)| (self.position(i), c))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{Hue, Lightness, StandardPalette};

    #[test]
    fn test_load_classifies() {
        let pixels = vec![
            Rgb(0xFF, 0, 0),
            Rgb(0, 0, 0),
            Rgb(1, 2, 3),
            Rgb(0xFF, 0xFF, 0xFF),
        ];
        let grid = Grid::load(2, 2, pixels, &StandardPalette).unwrap();
        assert_eq!(
            grid.get(Position::new(0, 0)),
            Ok(Color::new(Hue::Red, Lightness::Normal))
        );
        assert_eq!(grid.get(Position::new(1, 0)), Ok(Color::Black));
        assert_eq!(grid.get(Position::new(0, 1)), Ok(Color::White));
        assert_eq!(grid.get(Position::new(1, 1)), Ok(Color::White));
    }

    #[test]
    fn test_out_of_bounds() {
        let grid = Grid::from_colors(3, 1, vec![Color::White; 3]).unwrap();
        assert_eq!(
            grid.get(Position::new(3, 0)),
            Err(GridError::OutOfBounds { x: 3, y: 0 })
        );
        assert_eq!(grid.color_at(Position::new(0, 1)), None);
    }

    #[test]
    fn test_size_mismatch() {
        assert_eq!(
            Grid::from_colors(2, 2, vec![Color::White; 3]),
            Err(GridError::SizeMismatch {
                expected: 4,
                actual: 3
            })
        );
        assert_eq!(Grid::from_colors(0, 5, vec![]), Err(GridError::Empty));
    }

    #[test]
    fn test_index_round_trip() {
        let grid = Grid::from_colors(4, 3, vec![Color::White; 12]).unwrap();
        let p = Position::new(3, 2);
        assert_eq!(grid.index(p), 11);
        assert_eq!(grid.position(11), p);
        let order: Vec<Position> = grid.codels().map(|(p, _)| p).take(5).collect();
        assert_eq!(order[4], Position::new(0, 1));
    }
}
