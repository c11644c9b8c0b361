use std::collections::VecDeque;
use std::io::{BufRead, Write};

use tracing::warn;

use crate::errors::SimulationError;

use super::parameters::{LaunchParameters, Parameter};

pub const INVALID_INPUT_MESSAGE: &str = "Error - Invalid input.";

/// Interactive source of launch parameters.
///
/// Input is read as whitespace-separated tokens, one per field, so several
/// values may share a line. Each field is asked for until a token passes
/// that field's check; a rejected token is discarded on its own.
pub struct Prompter<R, W> {
    input: R,
    output: W,
    pending: VecDeque<String>,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Prompter {
            input,
            output,
            pending: VecDeque::new(),
        }
    }

    pub fn read_parameters(&mut self) -> Result<LaunchParameters, SimulationError> {
        let mut values = [0.0; 5];
        for (slot, parameter) in values.iter_mut().zip(Parameter::PROMPT_ORDER) {
            *slot = self.read_value(parameter)?;
        }
        let [initial_altitude, launch_angle, initial_velocity, time_step, duration] = values;

        Ok(LaunchParameters {
            initial_altitude,
            initial_velocity,
            launch_angle,
            time_step,
            duration,
        })
    }

    pub fn read_value(&mut self, parameter: Parameter) -> Result<f64, SimulationError> {
        loop {
            self.say(parameter.prompt())?;
            let token = self.next_token(parameter)?;

            match parameter.parse(&token) {
                Ok(value) => return Ok(value),
                Err(err) => {
                    warn!(%err, "rejected input");
                    self.say(INVALID_INPUT_MESSAGE)?;
                }
            }
        }
    }

    fn next_token(&mut self, parameter: Parameter) -> Result<String, SimulationError> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(token);
            }

            let mut line = String::new();
            let read = self
                .input
                .read_line(&mut line)
                .map_err(|e| SimulationError::InputError(e.to_string()))?;
            if read == 0 {
                return Err(SimulationError::InputError(format!(
                    "input closed while reading {}",
                    parameter.name()
                )));
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_owned));
        }
    }

    fn say(&mut self, message: &str) -> Result<(), SimulationError> {
        writeln!(self.output, "{}", message)
            .and_then(|_| self.output.flush())
            .map_err(|e| SimulationError::InputError(e.to_string()))
    }
}
