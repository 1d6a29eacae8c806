use crate::error::CalcError;
use crate::op::Operation;
use std::f64::consts::PI;

pub fn evaluate(op: Operation, operands: &[f64]) -> Result<f64, CalcError> {
    let arity = op.arity().ok_or(CalcError::InvalidOperation)?;
    if operands.len() != arity {
        return Err(CalcError::InvalidArity);
    }

    match (op, operands) {
        (Operation::Add, &[a, b]) => Ok(a + b),
        (Operation::Subtract, &[a, b]) => Ok(a - b),
        (Operation::Multiply, &[a, b]) => Ok(a * b),
        (Operation::Divide, &[_, b]) if b == 0.0 => Err(CalcError::DivisionByZero),
        (Operation::Divide, &[a, b]) => Ok(a / b),
        (Operation::Power, &[a, b]) => Ok(a.powf(b)),
        (Operation::SquareRoot, &[x]) if x < 0.0 => Err(CalcError::NegativeRadicand),
        (Operation::SquareRoot, &[x]) => Ok(x.sqrt()),
        (Operation::Sine, &[deg]) => Ok(radians(deg).sin()),
        (Operation::Cosine, &[deg]) => Ok(radians(deg).cos()),
        (Operation::Tangent, &[deg]) => Ok(radians(deg).tan()),
        _ => Err(CalcError::InvalidOperation),
    }
}

fn radians(degrees: f64) -> f64 {
    degrees * PI / 180.0
}

/// Recursive factorial used by the `--demo` walkthrough.
pub fn factorial(n: i64) -> Result<u64, CalcError> {
    if n < 0 {
        return Err(CalcError::NegativeFactorial);
    }
    if n == 0 {
        return Ok(1);
    }
    factorial(n - 1)?
        .checked_mul(n as u64)
        .ok_or(CalcError::Overflow)
}
