// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Interpreter for Piet, the esoteric language whose programs are images.
//!
//! A Piet program is a grid of colored codels. Same-colored, 4-connected
//! codels form *color blocks*; the interpreter walks from block to block,
//! and the hue/lightness change at each step selects one of seventeen stack
//! instructions.
//!
//! # Architecture
//!
//! The implementation uses a two-tier memory model:
//!
//! ## Tier 1: MEMO Data (Immutable)
//!
//! Computed once when a program is loaded, never changed while it runs:
//! - Grid - canonical color of every codel
//! - Regions - color block labels and sizes, from a two-pass union-find
//! - BoundaryTable - the eight exit codels of each block
//!
//! ## Tier 2: DYNAMIC Data (Mutable)
//!
//! Owned by a single run:
//! - position, direction pointer, codel chooser
//! - step phase and obstruction counter
//! - the program stack
//!
//! Because Tier 1 is read-only, independent interpreters can share one
//! [`ProgramMemo`] across threads.
//!
//! # Example
//!
//! ```
//! use piet_interp::geometry::{Color, Hue, Lightness};
//! use piet_interp::io::{StringInput, StringOutput};
//! use piet_interp::memo::{Grid, ProgramMemo};
//! use piet_interp::Interpreter;
//!
//! let r = Color::new(Hue::Red, Lightness::Normal);
//! let d = Color::new(Hue::Red, Lightness::Dark);
//! let m = Color::new(Hue::Magenta, Lightness::Light);
//! let k = Color::Black;
//!
//! // push 3 (the red block's size), out(number), then get stuck in the
//! // magenta column
//! let grid = Grid::from_colors(
//!     4,
//!     3,
//!     vec![
//!         r, k, k, m, //
//!         r, r, d, m, //
//!         k, k, k, m,
//!     ],
//! )
//! .unwrap();
//! let memo = ProgramMemo::new(grid);
//! let mut interpreter = Interpreter::new(&memo, StringInput::new(""), StringOutput::new());
//! interpreter.run().unwrap();
//! assert_eq!(interpreter.output().as_str(), "3");
//! ```
//!
//! # References
//!
//! - David Morgan-Mar, "Piet". <https://www.dangermouse.net/esoteric/piet.html>

pub mod engine;
pub mod error;
pub mod geometry;
pub mod instructions;
pub mod io;
pub mod loader;
pub mod memo;
pub mod state;

// Re-export commonly used types
pub use engine::{EngineConfig, Interpreter, RunSummary, StepOutcome};
pub use error::{ExecutionError, GridError, LoadError};
pub use memo::ProgramMemo;
