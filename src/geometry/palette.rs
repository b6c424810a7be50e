// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! RGB ↔ canonical color classification.
//!
//! The interpreter only ever sees canonical [`Color`]s. Turning raw pixel
//! values into those is the job of a [`Classifier`]; [`StandardPalette`] is
//! the 20-entry table every Piet tool agrees on.
//!
//! | lightness | red | yellow | green | cyan | blue | magenta |
//! |-----------|-----|--------|-------|------|------|---------|
//! | light | `#FFC0C0` | `#FFFFC0` | `#C0FFC0` | `#C0FFFF` | `#C0C0FF` | `#FFC0FF` |
//! | normal | `#FF0000` | `#FFFF00` | `#00FF00` | `#00FFFF` | `#0000FF` | `#FF00FF` |
//! | dark | `#C00000` | `#C0C000` | `#00C000` | `#00C0C0` | `#0000C0` | `#C000C0` |
//!
//! plus white `#FFFFFF` and black `#000000`.

use super::color::{Color, Hue, Lightness};
use std::fmt;

/// A 3-channel pixel value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.0, self.1, self.2)
    }
}

/// Maps pixel values onto canonical colors.
pub trait Classifier {
    /// Classify one pixel. Anything unrecognised must come back as
    /// [`Color::White`].
    fn classify(&self, rgb: Rgb) -> Color;
}

/// The standard Piet palette.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardPalette;

const FULL: u8 = 0xFF;
const MID: u8 = 0xC0;

impl StandardPalette {
    /// Channel pair (on, off) for a lightness level.
    fn levels(lightness: Lightness) -> (u8, u8) {
        match lightness {
            Lightness::Light => (FULL, MID),
            Lightness::Normal => (FULL, 0),
            Lightness::Dark => (MID, 0),
        }
    }

    /// Which of the R, G, B channels are "on" for a hue.
    fn channels(hue: Hue) -> [bool; 3] {
        match hue {
            Hue::Red => [true, false, false],
            Hue::Yellow => [true, true, false],
            Hue::Green => [false, true, false],
            Hue::Cyan => [false, true, true],
            Hue::Blue => [false, false, true],
            Hue::Magenta => [true, false, true],
        }
    }

    /// The pixel value of a canonical color.
    pub fn to_rgb(color: Color) -> Rgb {
        match color {
            Color::White => Rgb(FULL, FULL, FULL),
            Color::Black => Rgb(0, 0, 0),
            Color::Chromatic { hue, lightness } => {
                let (on, off) = Self::levels(lightness);
                let [r, g, b] = Self::channels(hue).map(|lit| if lit { on } else { off });
                Rgb(r, g, b)
            }
        }
    }
}

impl Classifier for StandardPalette {
    fn classify(&self, rgb: Rgb) -> Color {
        match rgb {
            Rgb(0, 0, 0) => Color::Black,
            Rgb(FULL, FULL, FULL) => Color::White,
            _ => Color::chromatic()
                .find(|&c| Self::to_rgb(c) == rgb)
                .unwrap_or(Color::White),
        }
    }
}
