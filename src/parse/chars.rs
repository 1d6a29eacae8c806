use combine::parser::char::digit;
use combine::parser::combinator::recognize;
use combine::{choice, many1, one_of, optional, satisfy, skip_many, skip_many1, token};
use combine::{Parser, Stream};

pub fn keyword<I: Stream<Token = char>>() -> impl Parser<I, Output = String> {
    many1(satisfy(|c: char| !c.is_whitespace()))
}

/// Decimal literal: `3`, `-2.5`, `.5`, `4.`, `1e-3`.
pub fn number<I: Stream<Token = char>>() -> impl Parser<I, Output = String> {
    recognize((
        optional(sign()),
        choice((
            skip_many1(digit()).skip(optional(token('.').with(skip_many(digit())))),
            token('.').with(skip_many1(digit())),
        )),
        optional((one_of("eE".chars()), optional(sign()), skip_many1(digit()))),
    ))
}

fn sign<I: Stream<Token = char>>() -> impl Parser<I, Output = char> {
    one_of("+-".chars())
}
