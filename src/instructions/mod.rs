// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The Piet instruction set.
//!
//! An instruction fires when the interpreter crosses from one color block
//! directly into another. Which one is decided by the color difference
//! `(Δhue mod 6, Δlightness mod 3)`:
//!
//! | Δhue \ Δlight | 0 | 1 | 2 |
//! |---|---|---|---|
//! | 0 | - | push | pop |
//! | 1 | add | subtract | multiply |
//! | 2 | divide | mod | not |
//! | 3 | greater | pointer | switch |
//! | 4 | duplicate | roll | in(number) |
//! | 5 | in(char) | out(number) | out(char) |
//!
//! The `(0,0)` entry is unreachable: two adjacent codels of the same color
//! are always in the same block.
//!
//! Instructions that need more operands than the stack holds do nothing.

use crate::error::ExecutionError;
use crate::geometry::{hue_light_diff, Color, NHUES, NLIGHTNESS};
use crate::io::{CharInput, TextOutput};
use crate::state::{ArithmeticFault, ExecutionState};
use strum_macros::{Display, EnumCount as EnumCountMacro, EnumIter};

/// One of the seventeen operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumCountMacro)]
pub enum Instruction {
    #[strum(serialize = "push")]
    Push,
    #[strum(serialize = "pop")]
    Pop,
    #[strum(serialize = "add")]
    Add,
    #[strum(serialize = "subtract")]
    Subtract,
    #[strum(serialize = "multiply")]
    Multiply,
    #[strum(serialize = "divide")]
    Divide,
    #[strum(serialize = "mod")]
    Mod,
    #[strum(serialize = "not")]
    Not,
    #[strum(serialize = "greater")]
    Greater,
    #[strum(serialize = "pointer")]
    Pointer,
    #[strum(serialize = "switch")]
    Switch,
    #[strum(serialize = "duplicate")]
    Duplicate,
    #[strum(serialize = "roll")]
    Roll,
    #[strum(serialize = "in(number)")]
    InNumber,
    #[strum(serialize = "in(char)")]
    InChar,
    #[strum(serialize = "out(number)")]
    OutNumber,
    #[strum(serialize = "out(char)")]
    OutChar,
}

use Instruction::*;

/// Instruction table indexed `[Δhue][Δlightness]`.
const TABLE: [[Option<Instruction>; NLIGHTNESS]; NHUES] = [
    [None, Some(Push), Some(Pop)],
    [Some(Add), Some(Subtract), Some(Multiply)],
    [Some(Divide), Some(Mod), Some(Not)],
    [Some(Greater), Some(Pointer), Some(Switch)],
    [Some(Duplicate), Some(Roll), Some(InNumber)],
    [Some(InChar), Some(OutNumber), Some(OutChar)],
];

impl Instruction {
    /// Look up the instruction for a `(Δhue, Δlightness)` key.
    ///
    /// Keys are taken modulo the cycle lengths; `(0,0)` has no instruction.
    pub fn from_diff(hue_steps: usize, light_steps: usize) -> Option<Instruction> {
        TABLE[hue_steps % NHUES][light_steps % NLIGHTNESS]
    }

    /// The instruction fired by crossing from `from` into `to`, if any.
    ///
    /// ```
    /// use piet_interp::geometry::{Color, Hue, Lightness};
    /// use piet_interp::instructions::Instruction;
    ///
    /// let red = Color::new(Hue::Red, Lightness::Normal);
    /// let dark_red = Color::new(Hue::Red, Lightness::Dark);
    /// assert_eq!(Instruction::between(red, dark_red), Some(Instruction::Push));
    /// assert_eq!(Instruction::between(red, Color::White), None);
    /// ```
    pub fn between(from: Color, to: Color) -> Option<Instruction> {
        let (hue, light) = hue_light_diff(from, to)?;
        Self::from_diff(hue, light)
    }

    /// The `(Δhue, Δlightness)` key of this instruction.
    pub fn key(self) -> (usize, usize) {
        for (hue, row) in TABLE.iter().enumerate() {
            for (light, entry) in row.iter().enumerate() {
                if *entry == Some(self) {
                    return (hue, light);
                }
            }
        }
        unreachable!("every instruction appears in the table")
    }

    /// Run the instruction.
    ///
    /// `block_size` is the size of the block being left, used by `push`.
    /// Returns `Ok(false)` when the instruction did nothing because the
    /// stack was too shallow or input was unavailable.
    ///
    /// # Errors
    ///
    /// [`ExecutionError::DivisionByZero`], [`ExecutionError::Overflow`] and
    /// [`ExecutionError::InvalidCharacter`] leave the stack untouched.
    /// [`ExecutionError::Io`] if the output collaborator fails.
    pub fn execute<I, O>(
        self,
        state: &mut ExecutionState,
        block_size: usize,
        input: &mut I,
        output: &mut O,
    ) -> Result<bool, ExecutionError>
    where
        I: CharInput + ?Sized,
        O: TextOutput + ?Sized,
    {
        let stack = &mut state.stack;
        let arithmetic = |result: Result<bool, ArithmeticFault>| {
            result.map_err(|fault| match fault {
                ArithmeticFault::DivisionByZero => ExecutionError::DivisionByZero,
                ArithmeticFault::Overflow => ExecutionError::Overflow { instruction: self },
            })
        };
        match self {
            Push => {
                let size = i64::try_from(block_size)
                    .map_err(|_| ExecutionError::Overflow { instruction: self })?;
                stack.push(size);
                Ok(true)
            }
            Pop => Ok(stack.pop().is_some()),
            Add => arithmetic(stack.add()),
            Subtract => arithmetic(stack.subtract()),
            Multiply => arithmetic(stack.multiply()),
            Divide => arithmetic(stack.divide()),
            Mod => arithmetic(stack.modulo()),
            Not => Ok(stack.not()),
            Greater => Ok(stack.greater()),
            Pointer => match stack.pop() {
                Some(steps) => {
                    state.rotate_dp(steps);
                    Ok(true)
                }
                None => Ok(false),
            },
            Switch => match stack.pop() {
                Some(times) => {
                    state.switch_cc(times);
                    Ok(true)
                }
                None => Ok(false),
            },
            Duplicate => Ok(stack.duplicate()),
            Roll => Ok(stack.roll()),
            InNumber => match input.read_integer() {
                Some(value) => {
                    stack.push(value);
                    Ok(true)
                }
                None => Ok(false),
            },
            InChar => match input.read_char() {
                Some(c) => {
                    stack.push(i64::from(u32::from(c)));
                    Ok(true)
                }
                None => Ok(false),
            },
            OutNumber => match stack.pop() {
                Some(value) => {
                    output.write_text(&value.to_string())?;
                    Ok(true)
                }
                None => Ok(false),
            },
            OutChar => {
                let Some(value) = stack.peek() else {
                    return Ok(false);
                };
                let c = u32::try_from(value)
                    .ok()
                    .and_then(char::from_u32)
                    .ok_or(ExecutionError::InvalidCharacter(value))?;
                stack.pop();
                output.write_text(c.encode_utf8(&mut [0; 4]))?;
                Ok(true)
            }
        }
    }
}
