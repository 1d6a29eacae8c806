use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
    Power,
    SquareRoot,
    Sine,
    Cosine,
    Tangent,
    History,
    Exit,
    Cancel,
}

pub const CANCEL_TOKEN: &str = "c";

impl Operation {
    pub fn new<T: AsRef<str>>(name: T) -> Option<Self> {
        Some(match name.as_ref() {
            "+" => Self::Add,
            "-" => Self::Subtract,
            "*" => Self::Multiply,
            "/" => Self::Divide,
            "^" => Self::Power,
            "sqrt" => Self::SquareRoot,
            "sin" => Self::Sine,
            "cos" => Self::Cosine,
            "tan" => Self::Tangent,
            "history" => Self::History,
            "exit" => Self::Exit,
            CANCEL_TOKEN => Self::Cancel,
            _ => return None,
        })
    }

    /// Number of operands the operation consumes, or `None` for the tags
    /// that only steer the session loop.
    pub fn arity(self) -> Option<usize> {
        match self {
            Self::Add | Self::Subtract | Self::Multiply | Self::Divide | Self::Power => Some(2),
            Self::SquareRoot | Self::Sine | Self::Cosine | Self::Tangent => Some(1),
            Self::History | Self::Exit | Self::Cancel => None,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
            Self::Power => "^",
            Self::SquareRoot => "sqrt",
            Self::Sine => "sin",
            Self::Cosine => "cos",
            Self::Tangent => "tan",
            Self::History => "history",
            Self::Exit => "exit",
            Self::Cancel => CANCEL_TOKEN,
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}
