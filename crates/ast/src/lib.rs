mod common;
pub mod expr;
mod stmt;
pub mod token;

pub use crate::{common::*, stmt::*};

use ::common::pub_fields_struct;

pub_fields_struct! {
    /// One parsed statement: its structured form, the half-open byte range it
    /// consumed, and the exact source substring for that range.
    ///
    /// The terminating `;` of a statement belongs to its span, with one
    /// exception: the `;` after a `COMMENT ON TABLE` statement is carried by
    /// the statement that follows it instead.
    #[derive(Debug, PartialEq)]
    struct Statement {
        kind: StatementKind,
        span: Span,
        text: String,
    }
}

#[derive(Debug, PartialEq)]
pub enum StatementKind {
    CreateTable(CreateTableStmt),
    AlterTable(AlterTableStmt),
    CreateIndex(CreateIndexStmt),
    CreateSequence(CreateSequenceStmt),
    Comment(CommentStmt),
    Passthrough(PassthroughStmt),
}
