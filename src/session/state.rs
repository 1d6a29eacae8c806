use super::{Settings, MAX_PRECISION};
use crate::eval::evaluate;
use crate::history::{Calculation, History};
use crate::op::{Operation, CANCEL_TOKEN};
use crate::parse::{parse_command, parse_operand};
use std::io::Write;
use tracing::debug;

#[derive(Clone, Debug, PartialEq)]
pub enum Mode {
    AwaitingCommand,
    CollectingOperands {
        op: Operation,
        needed: usize,
        collected: Vec<f64>,
    },
    Terminated,
}

/// The whole session at one point in time. Each input line consumes the
/// current value and yields the next one.
#[derive(Clone, Debug, PartialEq)]
pub struct SessionState {
    pub history: History,
    pub mode: Mode,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            history: History::new(),
            mode: Mode::AwaitingCommand,
        }
    }
}

impl SessionState {
    pub fn prompt(&self) -> String {
        match &self.mode {
            Mode::CollectingOperands { collected, .. } => {
                format!("Enter operand {}: ", collected.len() + 1)
            }
            _ => String::from("> "),
        }
    }

    pub fn is_terminated(&self) -> bool {
        self.mode == Mode::Terminated
    }

    pub fn advance<W: Write>(
        self,
        line: &str,
        settings: &Settings,
        out: &mut W,
    ) -> anyhow::Result<Self> {
        let line = line.trim().to_lowercase();
        let Self { mut history, mode } = self;

        let mode = match mode {
            Mode::AwaitingCommand => dispatch(&line, &history, out)?,
            Mode::CollectingOperands {
                op,
                needed,
                mut collected,
            } => {
                if line == CANCEL_TOKEN {
                    debug!(%op, dropped = collected.len(), "operation cancelled");
                    writeln!(out, "Operation cancelled.")?;
                    return Ok(Self {
                        history,
                        mode: Mode::AwaitingCommand,
                    });
                }

                match parse_operand(&line) {
                    Err(e) => {
                        writeln!(out, "Error: {}", e)?;
                        Mode::CollectingOperands {
                            op,
                            needed,
                            collected,
                        }
                    }
                    Ok(value) if needed > 1 => {
                        collected.push(value);
                        Mode::CollectingOperands {
                            op,
                            needed: needed - 1,
                            collected,
                        }
                    }
                    Ok(value) => {
                        collected.push(value);
                        let outcome = evaluate(op, &collected);
                        match outcome {
                            Ok(v) => writeln!(
                                out,
                                "Result: {:.*}",
                                settings.precision.min(MAX_PRECISION),
                                v
                            )?,
                            Err(e) => writeln!(out, "Error: {}", e)?,
                        }
                        history.push(Calculation {
                            op,
                            operands: collected,
                            outcome,
                        });
                        debug!(%op, entries = history.len(), "calculation recorded");
                        Mode::AwaitingCommand
                    }
                }
            }
            Mode::Terminated => Mode::Terminated,
        };

        Ok(Self { history, mode })
    }

    /// Leaves the session as `exit` would, whatever was pending.
    pub fn terminate<W: Write>(self, out: &mut W) -> anyhow::Result<Self> {
        if !self.is_terminated() {
            writeln!(out, "Goodbye!")?;
        }
        Ok(Self {
            history: self.history,
            mode: Mode::Terminated,
        })
    }
}

fn dispatch<W: Write>(line: &str, history: &History, out: &mut W) -> anyhow::Result<Mode> {
    let op = match parse_command(line) {
        Ok(op) => op,
        Err(e) => {
            writeln!(out, "Error: {}", e)?;
            return Ok(Mode::AwaitingCommand);
        }
    };

    Ok(match op {
        Operation::History => {
            write!(out, "{}", history)?;
            Mode::AwaitingCommand
        }
        Operation::Cancel => {
            writeln!(out, "No operation to cancel.")?;
            Mode::AwaitingCommand
        }
        Operation::Exit => {
            writeln!(out, "Goodbye!")?;
            Mode::Terminated
        }
        op => match op.arity() {
            Some(needed) => {
                debug!(%op, needed, "collecting operands");
                Mode::CollectingOperands {
                    op,
                    needed,
                    collected: Vec::new(),
                }
            }
            None => Mode::AwaitingCommand,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CalcError;
    use pretty_assertions::assert_eq;

    fn feed(lines: &[&str]) -> (SessionState, String) {
        let settings = Settings::default();
        let mut out = Vec::new();
        let mut state = SessionState::default();
        for line in lines {
            state = state.advance(line, &settings, &mut out).unwrap();
        }
        (state, String::from_utf8(out).unwrap())
    }

    #[test]
    fn binary_operation_records_history() {
        let (state, out) = feed(&["+", "3", "4"]);
        assert_eq!(out, "Result: 7.000000\n");
        assert_eq!(state.mode, Mode::AwaitingCommand);
        assert_eq!(
            state.history.iter().cloned().collect::<Vec<_>>(),
            vec![Calculation {
                op: Operation::Add,
                operands: vec![3.0, 4.0],
                outcome: Ok(7.0),
            }]
        );
    }

    #[test]
    fn operand_prompt_counts_up() {
        let (state, _) = feed(&["^"]);
        assert_eq!(state.prompt(), "Enter operand 1: ");
        let (state, _) = feed(&["^", "2"]);
        assert_eq!(state.prompt(), "Enter operand 2: ");
        assert_eq!(
            state.mode,
            Mode::CollectingOperands {
                op: Operation::Power,
                needed: 1,
                collected: vec![2.0],
            }
        );
    }

    #[test]
    fn cancel_leaves_no_trace() {
        let (before, _) = feed(&["*", "2", "5"]);
        let (after, out) = feed(&["*", "2", "5", "+", "C"]);
        assert_eq!(after.history.len(), before.history.len());
        assert_eq!(after.mode, Mode::AwaitingCommand);
        assert_eq!(out, "Result: 10.000000\nOperation cancelled.\n");

        let (after, _) = feed(&["*", "2", "5", "/", "8", "c"]);
        assert_eq!(after.history, before.history);
    }

    #[test]
    fn cancel_without_pending_operation() {
        let (state, out) = feed(&["c"]);
        assert_eq!(out, "No operation to cancel.\n");
        assert_eq!(state, SessionState::default());
    }

    #[test]
    fn bad_operand_keeps_the_same_index() {
        let (state, out) = feed(&["-", "ten"]);
        assert_eq!(out, "Error: Invalid number. Please try again.\n");
        assert_eq!(state.prompt(), "Enter operand 1: ");

        let (state, out) = feed(&["-", "ten", "10", "x", "4"]);
        assert_eq!(
            out,
            "Error: Invalid number. Please try again.\n\
             Error: Invalid number. Please try again.\n\
             Result: 6.000000\n"
        );
        assert_eq!(state.history.len(), 1);
    }

    #[test]
    fn unknown_command() {
        let (state, out) = feed(&["modulo"]);
        assert_eq!(out, "Error: Invalid command. Please try again.\n");
        assert_eq!(state.mode, Mode::AwaitingCommand);
    }

    #[test]
    fn failed_evaluation_is_still_recorded() {
        let (state, out) = feed(&["sqrt", "-4"]);
        assert_eq!(
            out,
            "Error: Cannot take the square root of a negative number\n"
        );
        let last = state.history.iter().last().unwrap();
        assert_eq!(last.outcome, Err(CalcError::NegativeRadicand));
    }

    #[test]
    fn keywords_are_case_insensitive() {
        let (state, out) = feed(&["  SQRT ", " 16 "]);
        assert_eq!(out, "Result: 4.000000\n");
        assert_eq!(state.history.len(), 1);
    }

    #[test]
    fn exit_terminates() {
        let (state, out) = feed(&["exit"]);
        assert!(state.is_terminated());
        assert_eq!(out, "Goodbye!\n");
    }

    #[test]
    fn terminate_mid_collection() {
        let (state, _) = feed(&["+", "1"]);
        let mut out = Vec::new();
        let state = state.terminate(&mut out).unwrap();
        assert!(state.is_terminated());
        assert!(state.history.is_empty());
        assert_eq!(String::from_utf8(out).unwrap(), "Goodbye!\n");
    }
}
