use thiserror::Error;

/// Everything that can go wrong while reading or evaluating one calculation.
///
/// None of these end the session; the loop reports them and re-prompts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum CalcError {
    #[error("Invalid command. Please try again.")]
    InvalidCommand,
    #[error("Invalid number. Please try again.")]
    InvalidNumber,
    #[error("Invalid number of operands")]
    InvalidArity,
    #[error("Division by zero")]
    DivisionByZero,
    #[error("Cannot take the square root of a negative number")]
    NegativeRadicand,
    #[error("Invalid operation")]
    InvalidOperation,
    #[error("Factorial of a negative number is undefined")]
    NegativeFactorial,
    #[error("Result is too large")]
    Overflow,
}
