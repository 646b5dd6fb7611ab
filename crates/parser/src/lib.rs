mod common;
mod lexer;
mod parser;

pub use self::{
    lexer::Error as LexError,
    parser::{Error, Parser, Result},
};
