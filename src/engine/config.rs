// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Interpreter configuration.

/// Default step ceiling: one million phase-steps.
pub const DEFAULT_MAX_STEPS: u64 = 1_000_000;

/// Tunables for one interpreter run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    /// Phase-steps after which a still-running program is stopped with
    /// [`ExecutionError::StepCeilingExceeded`](crate::error::ExecutionError::StepCeilingExceeded).
    pub max_steps: u64,
}

impl EngineConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_steps(mut self, max_steps: u64) -> Self {
        self.max_steps = max_steps;
        self
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_steps: DEFAULT_MAX_STEPS,
        }
    }
}
