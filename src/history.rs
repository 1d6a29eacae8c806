use crate::error::CalcError;
use crate::op::Operation;
use std::fmt;

/// One completed calculation. Cancelled attempts never become one.
#[derive(Clone, Debug, PartialEq)]
pub struct Calculation {
    pub op: Operation,
    pub operands: Vec<f64>,
    pub outcome: Result<f64, CalcError>,
}

impl fmt::Display for Calculation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ", self.op)?;
        for (i, operand) in self.operands.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write_number(f, *operand)?;
        }
        match self.outcome {
            Ok(value) => {
                f.write_str(" = ")?;
                write_number(f, value)
            }
            Err(e) => write!(f, " = Error: {}", e),
        }
    }
}

/// Plain decimal for everyday magnitudes, scientific notation outside them.
fn write_number(f: &mut fmt::Formatter<'_>, value: f64) -> fmt::Result {
    let magnitude = value.abs();
    if value.is_finite() && magnitude != 0.0 && !(1e-6..1e15).contains(&magnitude) {
        write!(f, "{:e}", value)
    } else {
        write!(f, "{}", value)
    }
}

#[derive(Clone, Default, Debug, PartialEq)]
pub struct History(Vec<Calculation>);

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, calc: Calculation) {
        self.0.push(calc);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Calculation> {
        self.0.iter()
    }
}

/// Numbered listing, oldest first.
impl fmt::Display for History {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return writeln!(f, "No calculations yet.");
        }
        for (i, calc) in self.iter().enumerate() {
            writeln!(f, "{}. {}", i + 1, calc)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn calc(op: Operation, operands: &[f64], outcome: Result<f64, CalcError>) -> Calculation {
        Calculation {
            op,
            operands: operands.to_vec(),
            outcome,
        }
    }

    #[test]
    fn empty_listing() {
        assert_eq!(History::new().to_string(), "No calculations yet.\n");
    }

    #[test]
    fn listing_is_numbered_oldest_first() {
        let mut history = History::new();
        history.push(calc(Operation::Add, &[3.0, 4.0], Ok(7.0)));
        history.push(calc(Operation::SquareRoot, &[6.25], Ok(2.5)));
        history.push(calc(
            Operation::Divide,
            &[1.0, 0.0],
            Err(CalcError::DivisionByZero),
        ));

        assert_eq!(history.len(), 3);
        assert_eq!(
            history.to_string(),
            "1. + 3, 4 = 7\n\
             2. sqrt 6.25 = 2.5\n\
             3. / 1, 0 = Error: Division by zero\n"
        );
    }

    #[test]
    fn extreme_magnitudes_use_scientific_notation() {
        let mut history = History::new();
        history.push(calc(Operation::Add, &[1e308, 1e308], Ok(f64::INFINITY)));
        history.push(calc(Operation::Multiply, &[2.5e20, -4.0], Ok(-1e21)));
        history.push(calc(Operation::Divide, &[1.0, 1e9], Ok(1e-9)));
        history.push(calc(Operation::Multiply, &[123456.75, 0.0], Ok(0.0)));

        assert_eq!(
            history.to_string(),
            "1. + 1e308, 1e308 = inf\n\
             2. * 2.5e20, -4 = -1e21\n\
             3. / 1, 1000000000 = 1e-9\n\
             4. * 123456.75, 0 = 0\n"
        );
    }
}
