mod comment;
mod common;
mod ddl;
mod error;
mod expr;
mod sequence;

pub use self::error::{Error, Result};

use {
    self::{
        common::TokenStream,
        error::LexingSnafu,
    },
    crate::lexer::{self, Lexer},
    ast::{
        token::{Keyword, Token},
        CommentTarget, PassthroughStmt, Spanned, Statement, StatementKind,
    },
    snafu::prelude::*,
};

/// Statements whose structure is not modeled; they are still delimited
/// correctly at `;` or end of input and reappear in the output verbatim.
const PASSTHROUGH_KEYWORDS: &[Keyword] = &[Keyword::GRANT];

pub struct Parser<'a> {
    src: &'a str,
    tokens: TokenStream<'a>,
}

impl<'a> Parser<'a> {
    fn new(src: &'a str) -> Self {
        Self {
            src,
            tokens: TokenStream::new(Lexer::new(src)),
        }
    }

    /// Parses every statement in `sql`, in source order. The first error
    /// aborts the whole call; no partial list is returned.
    pub fn parse(sql: &'a str) -> Result<Vec<Statement>> {
        Self::new(sql).collect()
    }
}

impl Iterator for Parser<'_> {
    type Item = Result<Statement>;

    fn next(&mut self) -> Option<Self::Item> {
        // a `;` left unconsumed by a comment statement, or standing alone,
        // opens the span of whatever follows
        let mut leading = None;
        while let Some(Spanned(_, span)) = self.try_match(Token::Semicolon) {
            leading.get_or_insert(span.start);
        }

        let item = self.tokens.next()?;
        Some(self.parse_statement(item, leading))
    }
}

impl Parser<'_> {
    fn parse_statement(
        &mut self,
        item: lexer::Result<Spanned<Token>>,
        leading: Option<usize>,
    ) -> Result<Statement> {
        let Spanned(token, span) = item.context(LexingSnafu)?;
        let start = leading.unwrap_or(span.start);

        let kind = match token {
            Token::Keyword(Keyword::CREATE) => self.parse_create()?,
            Token::Keyword(Keyword::ALTER) => self.parse_alter()?,
            Token::Keyword(Keyword::COMMENT) => self.parse_comment()?,
            Token::Keyword(keyword) if PASSTHROUGH_KEYWORDS.contains(&keyword) => {
                self.parse_passthrough(keyword)?
            }
            _ => return Err(self.syntax_error(span)),
        };

        // the trailing `;` belongs to this statement, except after a table
        // comment, where it is left for the next span to pick up; a column
        // comment keeps its terminator like any other statement
        let drops_terminator = matches!(
            &kind,
            StatementKind::Comment(stmt) if stmt.target == CommentTarget::Table
        );
        if !drops_terminator {
            let _ = self.try_match(Token::Semicolon);
        }

        let span = start..self.tokens.last_end();
        Ok(Statement {
            text: self.src[span.clone()].to_string(),
            span,
            kind,
        })
    }

    fn parse_passthrough(&mut self, keyword: Keyword) -> Result<StatementKind> {
        loop {
            match self
                .tokens
                .next_if(|item| !matches!(item, Ok(Spanned(Token::Semicolon, _))))
            {
                Some(Ok(_)) => {}
                Some(Err(e)) => return Err(Error::Lexing { source: e }),
                None => break,
            }
        }

        Ok(StatementKind::Passthrough(PassthroughStmt { keyword }))
    }
}
