// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Canonical codel colors.
//!
//! Piet uses 18 chromatic colors arranged on two cycles: six hues
//! (red → yellow → green → cyan → blue → magenta → red) and three
//! lightness levels (light → normal → dark → light). White and black are
//! outside both cycles and never form color blocks.
//!
//! Instructions are selected by the *difference* between two colors along
//! each cycle, see [`hue_light_diff`].

use std::fmt;
use strum_macros::{EnumCount as EnumCountMacro, EnumIter};

/// Number of hues in the hue cycle.
pub const NHUES: usize = 6;

/// Number of lightness levels in the lightness cycle.
pub const NLIGHTNESS: usize = 3;

/// Number of chromatic colors (NHUES × NLIGHTNESS).
pub const NCOLORS: usize = NHUES * NLIGHTNESS;

/// A position on the hue cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, EnumIter, EnumCountMacro)]
#[repr(u8)]
pub enum Hue {
    Red,
    Yellow,
    Green,
    Cyan,
    Blue,
    Magenta,
}

/// A position on the lightness cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, EnumIter, EnumCountMacro)]
#[repr(u8)]
pub enum Lightness {
    Light,
    Normal,
    Dark,
}

impl Hue {
    /// Index on the hue cycle (0..NHUES).
    pub fn index(self) -> usize {
        self as usize
    }
}

impl Lightness {
    /// Index on the lightness cycle (0..NLIGHTNESS).
    pub fn index(self) -> usize {
        self as usize
    }
}

/// The canonical color of one codel.
///
/// `White` also stands for every RGB value that is not part of the palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Chromatic { hue: Hue, lightness: Lightness },
    White,
    Black,
}

impl Color {
    /// Create a chromatic color.
    pub const fn new(hue: Hue, lightness: Lightness) -> Self {
        Color::Chromatic { hue, lightness }
    }

    /// White or black. Background codels never belong to a color block.
    pub fn is_background(self) -> bool {
        !matches!(self, Color::Chromatic { .. })
    }

    pub fn is_white(self) -> bool {
        self == Color::White
    }

    pub fn is_black(self) -> bool {
        self == Color::Black
    }

    /// Iterate over all 18 chromatic colors, lightness-major
    /// (light red, light yellow, ..., dark magenta).
    pub fn chromatic() -> impl Iterator<Item = Color> {
        use strum::IntoEnumIterator;
        Lightness::iter().flat_map(|lightness| Hue::iter().map(move |hue| Color::new(hue, lightness)))
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Chromatic { hue, lightness } => {
                let prefix = match lightness {
                    Lightness::Light => "light ",
                    Lightness::Normal => "",
                    Lightness::Dark => "dark ",
                };
                write!(f, "{}{:?}", prefix, hue)
            }
            Color::White => write!(f, "white"),
            Color::Black => write!(f, "black"),
        }
    }
}

/// Cyclic steps from `from` to `to`: `(Δhue mod 6, Δlightness mod 3)`.
///
/// Returns `None` if either color is white or black; the difference is only
/// defined between two chromatic colors.
///
/// # Example
///
/// ```
/// use piet_interp::geometry::{hue_light_diff, Color, Hue, Lightness};
///
/// let light_red = Color::new(Hue::Red, Lightness::Light);
/// let dark_yellow = Color::new(Hue::Yellow, Lightness::Dark);
/// assert_eq!(hue_light_diff(light_red, dark_yellow), Some((1, 2)));
/// assert_eq!(hue_light_diff(dark_yellow, light_red), Some((5, 1)));
/// ```
pub fn hue_light_diff(from: Color, to: Color) -> Option<(usize, usize)> {
    match (from, to) {
        (
            Color::Chromatic { hue: h1, lightness: l1 },
            Color::Chromatic { hue: h2, lightness: l2 },
        ) => Some((
            (h2.index() + NHUES - h1.index()) % NHUES,
            (l2.index() + NLIGHTNESS - l1.index()) % NLIGHTNESS,
        )),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chromatic_count() {
        assert_eq!(Color::chromatic().count(), NCOLORS);
        assert!(Color::chromatic().all(|c| !c.is_background()));
    }

    #[test]
    fn test_background() {
        assert!(Color::White.is_background());
        assert!(Color::Black.is_background());
        assert!(Color::White.is_white());
        assert!(!Color::White.is_black());
    }

    #[test]
    fn test_diff_wraps() {
        let magenta = Color::new(Hue::Magenta, Lightness::Dark);
        let red = Color::new(Hue::Red, Lightness::Light);
        assert_eq!(hue_light_diff(magenta, red), Some((1, 1)));
        assert_eq!(hue_light_diff(red, red), Some((0, 0)));
    }

    #[test]
    fn test_diff_undefined_for_background() {
        let red = Color::new(Hue::Red, Lightness::Normal);
        assert_eq!(hue_light_diff(red, Color::White), None);
        assert_eq!(hue_light_diff(Color::Black, red), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(Color::new(Hue::Cyan, Lightness::Dark).to_string(), "dark Cyan");
        assert_eq!(Color::new(Hue::Red, Lightness::Normal).to_string(), "Red");
        assert_eq!(Color::White.to_string(), "white");
    }
}
