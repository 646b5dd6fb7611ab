use {
    super::{common::match_token, error::Error, error::Result, Parser},
    ast::{
        token::{Keyword, Token},
        CommentStmt, CommentTarget, Spanned, StatementKind, TableName,
    },
};

impl<'a> Parser<'a> {
    /// The `COMMENT` keyword has already been consumed.
    pub(super) fn parse_comment(&mut self) -> Result<StatementKind> {
        self.must_match(Token::Keyword(Keyword::ON))?;

        match_token!(self, {
            Spanned(Token::Keyword(Keyword::TABLE), _) => {
                let table = self.parse_table_name()?;
                self.must_match(Token::Keyword(Keyword::IS))?;
                let comment = self.parse_string()?;

                Ok(StatementKind::Comment(CommentStmt {
                    target: CommentTarget::Table,
                    table,
                    column: None,
                    comment,
                }))
            },
            Spanned(Token::Keyword(Keyword::COLUMN), _) => {
                // two parts name `table.column`, three parts name
                // `schema.table.column`
                let first = self.parse_identifier()?;
                self.must_match(Token::Period)?;
                let second = self.parse_identifier()?;
                let third = match self.try_match(Token::Period) {
                    Some(_) => Some(self.parse_identifier()?),
                    None => None,
                };

                let (table, column) = match third {
                    Some(column) => (
                        TableName {
                            schema: Some(first),
                            table: second,
                        },
                        column,
                    ),
                    None => (
                        TableName {
                            schema: None,
                            table: first,
                        },
                        second,
                    ),
                };

                self.must_match(Token::Keyword(Keyword::IS))?;
                let comment = self.parse_string()?;

                Ok(StatementKind::Comment(CommentStmt {
                    target: CommentTarget::Column,
                    table,
                    column: Some(column),
                    comment,
                }))
            },
        })
    }
}
