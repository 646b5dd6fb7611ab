use {
    super::{common::match_token, error::Error, error::Result, Parser},
    ast::{
        expr::Expression,
        token::{Keyword, Token},
        Identifier, Spanned,
    },
};

impl<'a> Parser<'a> {
    /// The small expression subset that appears in `DEFAULT` clauses:
    /// literals, `NULL`, bare identifiers and function calls. Numeric
    /// literals keep their source spelling.
    pub(super) fn parse_expression(&mut self) -> Result<Expression> {
        match_token!(self, {
            Spanned(Token::Keyword(Keyword::NULL), _) => Ok(Expression::Null),
            Spanned(Token::String, span) => {
                Ok(Expression::StringLiteral(self.string_from_span(span)))
            },
            Spanned(Token::Number { .. }, span) => {
                Ok(Expression::NumberLiteral(self.src[span].to_string()))
            },
            Spanned(Token::Minus, _) => match_token!(self, {
                Spanned(Token::Number { .. }, span) => {
                    Ok(Expression::NumberLiteral(format!("-{}", &self.src[span])))
                },
            }),
            Spanned(Token::Identifier, span) => {
                let name = self.identifier_from_span(span);
                self.parse_call_or_ident(name)
            },
            Spanned(Token::QuotedIdentifier, span) => {
                let name = self.quoted_identifier_from_span(span);
                self.parse_call_or_ident(name)
            },
        })
    }

    fn parse_call_or_ident(&mut self, name: Identifier) -> Result<Expression> {
        match self.tokens.peek() {
            Some(Ok(Spanned(Token::LeftParen, _))) => {
                let Spanned(args, _) =
                    self.parse_comma_separated_within_parentheses(Self::parse_expression, true)?;

                Ok(Expression::FunctionCall { name, args })
            }
            _ => Ok(Expression::Ident(name)),
        }
    }
}
