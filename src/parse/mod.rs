mod chars;

use crate::error::CalcError;
use crate::op::Operation;
use chars::{keyword, number};
use combine::parser::char::spaces;
use combine::{eof, EasyParser, Parser};

/// Resolves one command line to its operation tag.
pub fn parse_command(input: &str) -> Result<Operation, CalcError> {
    match spaces()
        .with(keyword())
        .skip(spaces())
        .skip(eof())
        .easy_parse(input)
    {
        Ok((name, _)) => Operation::new(name).ok_or(CalcError::InvalidCommand),
        Err(_) => Err(CalcError::InvalidCommand),
    }
}

pub fn parse_operand(input: &str) -> Result<f64, CalcError> {
    let literal = match spaces()
        .with(number())
        .skip(spaces())
        .skip(eof())
        .easy_parse(input)
    {
        Ok((s, _)) => s,
        Err(_) => return Err(CalcError::InvalidNumber),
    };

    match literal.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(CalcError::InvalidNumber),
    }
}
