use snafu::prelude::*;

pub type Result<T> = std::result::Result<T, Error>;

/// Lexical failures. Offsets are absolute byte positions into the source,
/// lines are 1-based.
#[derive(Debug, Clone, PartialEq, Snafu)]
pub enum Error {
    #[snafu(display("no closing quote for string starting at line {line}, byte {offset}"))]
    NoClosingQuoteForString { offset: usize, line: usize },

    #[snafu(display("no closing quote for identifier starting at line {line}, byte {offset}"))]
    NoClosingQuoteForIdentifier { offset: usize, line: usize },

    #[snafu(display("unexpected character `{c}` at line {line}, byte {offset}"))]
    UnexpectedChar { c: char, offset: usize, line: usize },
}
