use crate::eval::{evaluate, factorial};
use crate::op::Operation;
use std::io::Write;

/// Walks through the four arithmetic primitives and factorial without the
/// interactive loop.
pub fn run<W: Write>(a: f64, b: f64, n: i64, out: &mut W) -> anyhow::Result<()> {
    for op in &[
        Operation::Add,
        Operation::Subtract,
        Operation::Multiply,
        Operation::Divide,
    ] {
        match evaluate(*op, &[a, b]) {
            Ok(v) => writeln!(out, "{} {} {} = {}", a, op, b, v)?,
            Err(e) => writeln!(out, "{} {} {} = Error: {}", a, op, b, e)?,
        }
    }

    match factorial(n) {
        Ok(v) => writeln!(out, "{}! = {}", n, v)?,
        Err(e) => writeln!(out, "{}! = Error: {}", n, e)?,
    }
    Ok(())
}
