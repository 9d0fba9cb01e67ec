// Copyright (c) 2025 - Cowboy AI, Inc.
//! Chart extent as a state machine
//!
//! | Input           | Enabled when            |
//! |-----------------|-------------------------|
//! | `MoveLeft`      | `is_left_enabled()`     |
//! | `MoveRight`     | `is_right_enabled()`    |
//! | `MoveRightEdge` | always                  |
//! | `SwitchPeriod`  | always                  |

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ChartExtent;
use crate::period::Period;
use crate::state_machine::{StateMachine, TransitionError, TransitionResult};

/// Navigation inputs accepted by a [`ChartExtent`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExtentInput {
    /// One step back
    MoveLeft,
    /// One step forward
    MoveRight,
    /// Back to the most recent window
    MoveRightEdge,
    /// Change granularity
    SwitchPeriod(Period),
}

impl fmt::Display for ExtentInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MoveLeft => write!(f, "move_left"),
            Self::MoveRight => write!(f, "move_right"),
            Self::MoveRightEdge => write!(f, "move_right_edge"),
            Self::SwitchPeriod(period) => write!(f, "switch_period({period})"),
        }
    }
}

impl fmt::Display for ChartExtent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} [{}, {})",
            self.period,
            self.domain.start.to_rfc3339(),
            self.domain.end.to_rfc3339()
        )
    }
}

impl StateMachine for ChartExtent {
    type Input = ExtentInput;
    type Output = ();

    fn transition(&self, input: &Self::Input) -> TransitionResult<(Self, Self::Output)> {
        let enabled = match input {
            ExtentInput::MoveLeft => self.is_left_enabled(),
            ExtentInput::MoveRight => self.is_right_enabled(),
            ExtentInput::MoveRightEdge | ExtentInput::SwitchPeriod(_) => true,
        };
        if !enabled {
            return Err(TransitionError::Disabled {
                state: self.to_string(),
                input: input.to_string(),
            });
        }

        let mut next = self.clone();
        match input {
            ExtentInput::MoveLeft => next.move_left(),
            ExtentInput::MoveRight => next.move_right(),
            ExtentInput::MoveRightEdge => next.move_right_edge(),
            ExtentInput::SwitchPeriod(period) => next.set_period(*period),
        }
        Ok((next, ()))
    }

    fn valid_inputs(&self) -> Vec<Self::Input> {
        let mut inputs = Vec::new();
        if self.is_left_enabled() {
            inputs.push(ExtentInput::MoveLeft);
        }
        if self.is_right_enabled() {
            inputs.push(ExtentInput::MoveRight);
        }
        inputs.push(ExtentInput::MoveRightEdge);
        inputs.extend(
            Period::ALL
                .into_iter()
                .filter(|period| *period != self.period)
                .map(ExtentInput::SwitchPeriod),
        );
        inputs
    }
}
