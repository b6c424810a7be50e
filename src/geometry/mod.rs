// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Geometric and chromatic primitives for Piet programs.
//!
//! This module contains the small value types everything else is built on:
//! - Color: the 18 canonical colors plus white and black
//! - Palette: RGB classification into canonical colors
//! - Position: codel coordinates
//! - Direction / Chooser: the DP and CC of the interpreter

pub mod color;
pub mod direction;
pub mod palette;

// Re-export for convenience
pub use color::{hue_light_diff, Color, Hue, Lightness, NCOLORS, NHUES, NLIGHTNESS};
pub use direction::{Chooser, Direction, Position};
pub use palette::{Classifier, Rgb, StandardPalette};
