// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Error types for loading and running Piet programs.
//!
//! Stack underflow is deliberately absent: an instruction that finds too few
//! operands does nothing, which is the language's defined behavior.

use crate::instructions::Instruction;
use std::path::PathBuf;
use thiserror::Error;

/// Errors from building or querying a [`Grid`](crate::memo::Grid).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    /// Coordinates outside `[0,width) x [0,height)`.
    #[error("codel ({x},{y}) is outside the grid")]
    OutOfBounds { x: usize, y: usize },

    /// The pixel source did not yield exactly `width * height` values.
    #[error("expected {expected} pixels, got {actual}")]
    SizeMismatch { expected: usize, actual: usize },

    /// Zero width or zero height.
    #[error("program image is empty")]
    Empty,
}

/// Errors from turning an image file into a grid. Execution never starts.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("could not read image {}: {source}", path.display())]
    Image {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error(transparent)]
    Grid(#[from] GridError),
}

/// Errors that end a run. Normal termination (eight consecutive
/// obstructions) is not an error.
#[derive(Debug, Error)]
pub enum ExecutionError {
    /// `divide` or `mod` with a zero divisor. The stack is left untouched.
    #[error("division by zero")]
    DivisionByZero,

    /// An arithmetic result does not fit in an `i64`. The stack is left untouched.
    #[error("integer overflow in {instruction}")]
    Overflow { instruction: Instruction },

    /// `out(char)` on a value that is not a Unicode scalar value.
    #[error("{0} is not a valid character code point")]
    InvalidCharacter(i64),

    /// The runaway-program safeguard tripped before the program terminated.
    #[error("step ceiling of {steps} steps exceeded")]
    StepCeilingExceeded { steps: u64 },

    /// A lookup that correct operation never makes. Indicates a bug.
    #[error("internal invariant violated: {0}")]
    Internal(#[from] GridError),

    /// The output collaborator failed.
    #[error("output failed: {0}")]
    Io(#[from] std::io::Error),
}
