// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The Piet interpreter.
//!
//! This module drives a program: it walks from color block to color block
//! over an immutable [`ProgramMemo`], firing instructions against a mutable
//! [`ExecutionState`].
//!
//! # Execution Model
//!
//! Execution alternates between two kinds of phase-step:
//!
//! 1. **Resolve boundary** (`Phase::WithinRegion`): jump straight to the
//!    current block's exit codel for the current DP and CC.
//! 2. **Attempt cross** (`Phase::AtBoundary`): look at the codel one step
//!    along the DP.
//!    - Off the grid, or black: an *obstruction*.
//!    - White: slide along the DP through white codels. Running off the grid
//!      or into black is an obstruction; reaching a color is a crossing
//!      that fires no instruction.
//!    - A color: a crossing. The color difference selects an instruction,
//!      which runs before the position moves.
//!
//! A crossing clears the obstruction count. Each obstruction alternately
//! toggles the CC and rotates the DP clockwise; the eighth consecutive one
//! ends the program. That is the only normal way for a program to finish.
//!
//! # Example
//!
//! ```
//! use piet_interp::engine::{Interpreter, StepOutcome};
//! use piet_interp::geometry::{Color, Hue, Lightness};
//! use piet_interp::io::{StringInput, StringOutput};
//! use piet_interp::memo::{Grid, ProgramMemo};
//!
//! // A single red codel walled in by the grid edge: nothing to cross into.
//! let grid = Grid::from_colors(1, 1, vec![Color::new(Hue::Red, Lightness::Normal)]).unwrap();
//! let memo = ProgramMemo::new(grid);
//! let mut interpreter = Interpreter::new(&memo, StringInput::new(""), StringOutput::new());
//!
//! let summary = interpreter.run().unwrap();
//! assert_eq!(summary.steps, 16);
//! assert_eq!(interpreter.step().unwrap(), StepOutcome::Terminated);
//! ```

pub mod config;

pub use config::{EngineConfig, DEFAULT_MAX_STEPS};

use crate::error::ExecutionError;
use crate::geometry::{Color, Position};
use crate::instructions::Instruction;
use crate::io::{CharInput, TextOutput};
use crate::memo::{ProgramMemo, Region};
use crate::state::{Counters, ExecutionState, Phase, Retry, Statistics};
use tracing::{debug, info, trace, warn};

/// What one phase-step did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// Moved to the exit codel of the current block.
    ResolvedBoundary { position: Position },

    /// Entered a new block, possibly firing an instruction on the way.
    Crossed {
        from: Position,
        to: Position,
        instruction: Option<Instruction>,
    },

    /// Could not cross; DP or CC was adjusted. Carries the number of
    /// consecutive obstructions so far (1..=7).
    Obstructed { count: u8 },

    /// The program has finished.
    Terminated,
}

/// Summary of a completed run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    /// Phase-steps taken, including the terminating one.
    pub steps: u64,
    pub statistics: Statistics,
}

/// Runs one program against one execution state.
///
/// The memo is borrowed, so several interpreters can share it; the state,
/// input and output belong to this interpreter alone.
pub struct Interpreter<'m, I, O> {
    memo: &'m ProgramMemo,
    config: EngineConfig,
    state: ExecutionState,
    input: I,
    output: O,
    steps: u64,
    finished: bool,
}

impl<'m, I: CharInput, O: TextOutput> Interpreter<'m, I, O> {
    /// Create an interpreter in the initial state with the default config.
    pub fn new(memo: &'m ProgramMemo, input: I, output: O) -> Self {
        Self::with_config(memo, EngineConfig::default(), input, output)
    }

    pub fn with_config(memo: &'m ProgramMemo, config: EngineConfig, input: I, output: O) -> Self {
        Self {
            memo,
            config,
            state: ExecutionState::new(),
            input,
            output,
            steps: 0,
            finished: false,
        }
    }

    /// Run until the program terminates.
    ///
    /// # Errors
    ///
    /// [`ExecutionError::StepCeilingExceeded`] if the configured step ceiling
    /// is reached first; any error raised by an instruction or by an
    /// internal lookup ends the run as well.
    pub fn run(&mut self) -> Result<RunSummary, ExecutionError> {
        info!(
            width = self.memo.grid().width(),
            height = self.memo.grid().height(),
            blocks = self.memo.regions().len(),
            max_steps = self.config.max_steps,
            "running program"
        );
        loop {
            if self.finished {
                let summary = self.summary();
                info!(steps = summary.steps, stats = %summary.statistics, "program terminated");
                return Ok(summary);
            }
            if self.steps >= self.config.max_steps {
                warn!(steps = self.steps, "step ceiling reached, stopping program");
                return Err(ExecutionError::StepCeilingExceeded { steps: self.steps });
            }
            self.step()?;
        }
    }

    /// Execute one phase-step.
    ///
    /// Once the program has terminated every further call returns
    /// [`StepOutcome::Terminated`] without counting a step.
    pub fn step(&mut self) -> Result<StepOutcome, ExecutionError> {
        if self.finished {
            return Ok(StepOutcome::Terminated);
        }
        let outcome = match self.state.phase {
            Phase::WithinRegion => self.resolve_boundary()?,
            Phase::AtBoundary => self.attempt_cross()?,
        };
        self.steps += 1;
        Ok(outcome)
    }

    /// Jump to the exit codel of the current block. On white or black there
    /// is no block and the position stays put.
    fn resolve_boundary(&mut self) -> Result<StepOutcome, ExecutionError> {
        let pos = self.state.position;
        self.memo.grid().get(pos)?;
        if let Some(region) = self.memo.region_at(pos) {
            self.state.position = region.exit(self.state.dp, self.state.cc);
        }
        self.state.phase = Phase::AtBoundary;
        trace!(
            from = %pos,
            to = %self.state.position,
            dp = ?self.state.dp,
            cc = ?self.state.cc,
            "resolved boundary"
        );
        Ok(StepOutcome::ResolvedBoundary {
            position: self.state.position,
        })
    }

    /// The in-grid codel one step along the DP from `pos`, with its color.
    fn ahead(&self, pos: Position) -> Option<(Position, Color)> {
        let next = pos.step(self.state.dp)?;
        let color = self.memo.color_at(next)?;
        Some((next, color))
    }

    fn attempt_cross(&mut self) -> Result<StepOutcome, ExecutionError> {
        let from = self.state.position;
        let current = self.memo.grid().get(from)?;

        let Some((mut next, mut color)) = self.ahead(from) else {
            return Ok(self.obstruct());
        };

        let instruction = match color {
            Color::Black => return Ok(self.obstruct()),
            Color::White => {
                while color.is_white() {
                    match self.ahead(next) {
                        Some((p, c)) if !c.is_black() => (next, color) = (p, c),
                        _ => return Ok(self.obstruct()),
                    }
                }
                self.state.statistics.increment_counter(Counters::WhiteSlides);
                None
            }
            Color::Chromatic { .. } => Instruction::between(current, color),
        };

        if let Some(instruction) = instruction {
            let block_size = self.memo.region_at(from).map_or(0, Region::size);
            let applied =
                instruction.execute(&mut self.state, block_size, &mut self.input, &mut self.output)?;
            self.state.statistics.increment_counter(Counters::Instructions);
            debug!(
                %instruction,
                applied,
                from = %from,
                to = %next,
                stack = %self.state.stack,
                "crossed"
            );
        } else {
            trace!(from = %from, to = %next, "crossed without instruction");
        }

        self.state.crossed(next);
        Ok(StepOutcome::Crossed {
            from,
            to: next,
            instruction,
        })
    }

    fn obstruct(&mut self) -> StepOutcome {
        match self.state.obstructed() {
            Retry::Again(count) => {
                trace!(count, dp = ?self.state.dp, cc = ?self.state.cc, "obstructed");
                StepOutcome::Obstructed { count }
            }
            Retry::Exhausted => {
                self.finished = true;
                StepOutcome::Terminated
            }
        }
    }

    /// Steps and statistics so far.
    pub fn summary(&self) -> RunSummary {
        RunSummary {
            steps: self.steps,
            statistics: self.state.statistics.clone(),
        }
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn steps(&self) -> u64 {
        self.steps
    }

    pub fn state(&self) -> &ExecutionState {
        &self.state
    }

    /// Mutable access for setting up a starting state (tests, debuggers).
    pub fn state_mut(&mut self) -> &mut ExecutionState {
        &mut self.state
    }

    pub fn memo(&self) -> &ProgramMemo {
        self.memo
    }

    pub fn output(&self) -> &O {
        &self.output
    }

    pub fn into_output(self) -> O {
        self.output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{Chooser, Direction, Hue, Lightness};
    use crate::io::{StringInput, StringOutput};
    use crate::memo::Grid;

    const R: Color = Color::new(Hue::Red, Lightness::Normal);
    const DR: Color = Color::new(Hue::Red, Lightness::Dark);
    const W: Color = Color::White;
    const K: Color = Color::Black;

    fn memo(width: usize, colors: Vec<Color>) -> ProgramMemo {
        let height = colors.len() / width;
        ProgramMemo::new(Grid::from_colors(width, height, colors).unwrap())
    }

    fn interpreter(memo: &ProgramMemo) -> Interpreter<'_, StringInput, StringOutput> {
        Interpreter::new(memo, StringInput::new(""), StringOutput::new())
    }

    #[test]
    fn test_phases_alternate() {
        let m = memo(2, vec![R, DR]);
        let mut interp = interpreter(&m);
        assert_eq!(
            interp.step().unwrap(),
            StepOutcome::ResolvedBoundary {
                position: Position::new(0, 0)
            }
        );
        assert_eq!(interp.state().phase, Phase::AtBoundary);
        assert_eq!(
            interp.step().unwrap(),
            StepOutcome::Crossed {
                from: Position::new(0, 0),
                to: Position::new(1, 0),
                instruction: Some(Instruction::Push),
            }
        );
        assert_eq!(interp.state().phase, Phase::WithinRegion);
        assert_eq!(interp.state().stack.as_slice(), &[1]);
    }

    #[test]
    fn test_walled_in_block_terminates_after_eight_obstructions() {
        let m = memo(
            3,
            vec![
                R, R, K, //
                R, R, K, //
                K, K, K,
            ],
        );
        let mut interp = interpreter(&m);
        let summary = interp.run().unwrap();
        assert_eq!(summary.steps, 16);
        assert_eq!(summary.statistics.get(Counters::Obstructions), 8);
        assert_eq!(summary.statistics.get(Counters::Crossings), 0);
        assert!(interp.is_finished());
        assert!(interp.state().stack.is_empty());
    }

    #[test]
    fn test_white_slide_fires_nothing() {
        let m = memo(4, vec![R, W, W, DR]);
        let mut interp = interpreter(&m);
        interp.step().unwrap();
        assert_eq!(
            interp.step().unwrap(),
            StepOutcome::Crossed {
                from: Position::new(0, 0),
                to: Position::new(3, 0),
                instruction: None,
            }
        );
        assert!(interp.state().stack.is_empty());
        assert_eq!(interp.state().statistics.get(Counters::WhiteSlides), 1);
    }

    #[test]
    fn test_white_dead_end_is_obstruction() {
        let m = memo(4, vec![R, W, W, K]);
        let mut interp = interpreter(&m);
        interp.step().unwrap();
        assert_eq!(interp.step().unwrap(), StepOutcome::Obstructed { count: 1 });
        // Position stays on the block being left
        assert_eq!(interp.state().position, Position::new(0, 0));
        assert_eq!(interp.state().cc, Chooser::Right);
    }

    #[test]
    fn test_starting_on_white_slides() {
        let m = memo(3, vec![W, W, R]);
        let mut interp = interpreter(&m);
        assert_eq!(
            interp.step().unwrap(),
            StepOutcome::ResolvedBoundary {
                position: Position::new(0, 0)
            }
        );
        assert_eq!(
            interp.step().unwrap(),
            StepOutcome::Crossed {
                from: Position::new(0, 0),
                to: Position::new(2, 0),
                instruction: None,
            }
        );
    }

    #[test]
    fn test_step_ceiling() {
        // Two blocks bouncing forever: R ↔ DR via the right and left edges.
        let m = memo(2, vec![R, DR]);
        let config = EngineConfig::new().with_max_steps(50);
        let mut interp = Interpreter::with_config(&m, config, StringInput::new(""), StringOutput::new());
        match interp.run() {
            Err(ExecutionError::StepCeilingExceeded { steps }) => assert_eq!(steps, 50),
            other => panic!("expected step ceiling, got {:?}", other),
        }
        assert!(!interp.is_finished());
    }

    #[test]
    fn test_ceiling_equal_to_run_length_is_not_exceeded() {
        let m = memo(1, vec![R]);
        let config = EngineConfig::new().with_max_steps(16);
        let mut interp = Interpreter::with_config(&m, config, StringInput::new(""), StringOutput::new());
        assert_eq!(interp.run().unwrap().steps, 16);
    }

    #[test]
    fn test_division_error_ends_run() {
        // red → green is two hue steps: divide
        let green = Color::new(Hue::Green, Lightness::Normal);
        let m = memo(2, vec![R, green]);
        let mut interp = interpreter(&m);
        interp.state_mut().stack.push(5);
        interp.state_mut().stack.push(0);
        assert!(matches!(interp.run(), Err(ExecutionError::DivisionByZero)));
        assert_eq!(interp.state().stack.as_slice(), &[5, 0]);
        assert_eq!(interp.state().dp, Direction::Right);
        assert!(!interp.is_finished());
    }
}
