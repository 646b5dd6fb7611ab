use crate::common::Identifier;

/// A default-value expression. The grammar only needs literals, bare
/// identifiers (`SYSDATE`) and simple calls (`SYS_GUID()`); number literals
/// keep their source text so no numeric precision is lost.
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    Null,
    NumberLiteral(String),
    StringLiteral(String),
    Ident(Identifier),
    FunctionCall {
        name: Identifier,
        args: Vec<Expression>,
    },
}
