use {crate::lexer, snafu::prelude::*};

pub type Result<T> = std::result::Result<T, Error>;

/// Parse failures. A single error aborts the whole call; there is no
/// statement-level recovery.
#[derive(Debug, PartialEq, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum Error {
    #[snafu(display("unexpected end of input"))]
    UnexpectedEnd,

    #[snafu(display("unexpected `{token}` at line {line}, byte {offset}"))]
    UnexpectedToken {
        token: String,
        offset: usize,
        line: usize,
    },

    #[snafu(display("expected {expected}, found `{token}` at line {line}, byte {offset}"))]
    ExpectedToken {
        expected: String,
        token: String,
        offset: usize,
        line: usize,
    },

    #[snafu(display("lexing failed"))]
    Lexing { source: lexer::Error },
}
