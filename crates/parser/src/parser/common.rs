use {
    super::{
        error::{Error, Result},
        Parser,
    },
    crate::{
        common::{MultiPeek, MultiPeekable},
        lexer::{self, Lexer},
    },
    ast::{
        token::{Keyword, Token},
        Identifier, Span, Spanned, TableName,
    },
    std::str::FromStr,
};

/// The lexer with lookahead, plus a record of where the last consumed
/// token ended. Statement span capture reads that watermark once the
/// grammar is done with a statement.
pub(super) struct TokenStream<'a> {
    iter: MultiPeekable<Lexer<'a>>,
    last_end: usize,
}

impl<'a> TokenStream<'a> {
    pub(super) fn new(lexer: Lexer<'a>) -> Self {
        Self {
            iter: lexer.multi_peekable(),
            last_end: 0,
        }
    }

    pub(super) fn peek(&mut self) -> Option<&lexer::Result<Spanned<Token>>> {
        self.iter.peek()
    }

    pub(super) fn next_if(
        &mut self,
        func: impl FnOnce(&lexer::Result<Spanned<Token>>) -> bool,
    ) -> Option<lexer::Result<Spanned<Token>>> {
        let item = self.iter.next_if(func);
        self.record(item.as_ref());
        item
    }

    pub(super) fn advance_n_if_each(
        &mut self,
        n: usize,
        func: impl Fn((usize, &lexer::Result<Spanned<Token>>)) -> bool,
    ) -> Option<lexer::Result<Spanned<Token>>> {
        let item = self.iter.advance_n_if_each(n, func);
        self.record(item.as_ref());
        item
    }

    pub(super) fn last_end(&self) -> usize {
        self.last_end
    }

    fn record(&mut self, item: Option<&lexer::Result<Spanned<Token>>>) {
        if let Some(Ok(Spanned(_, span))) = item {
            self.last_end = span.end;
        }
    }
}

impl Iterator for TokenStream<'_> {
    type Item = lexer::Result<Spanned<Token>>;

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.iter.next();
        self.record(item.as_ref());
        item
    }
}

/// Consumes the next token and dispatches on the given patterns; anything
/// else becomes an error return from the enclosing function.
macro_rules! match_token {
    ( $parser:expr, { $( $($t:pat_param)|* $(if $cond:expr)? => $e:expr, )* } ) => {
        match $parser.tokens.next() {
            $( $( Some(Ok($t)) )|* $(if $cond)? => $e,)*

            Some(Ok(Spanned(_, span))) => return Err($parser.syntax_error(span)),
            Some(Err(e)) => return Err(Error::Lexing { source: e }),
            None => return Err(Error::UnexpectedEnd),
        }
    };
}

pub(super) use match_token;

impl<'a> Parser<'a> {
    pub(super) fn identifier_from_span(&self, span: Span) -> Identifier {
        Identifier::unquoted(&self.src[span])
    }

    /// The span covers the surrounding double quotes; the enclosed text is
    /// taken verbatim.
    pub(super) fn quoted_identifier_from_span(&self, span: Span) -> Identifier {
        Identifier::quoted(&self.src[span.start + 1..span.end - 1])
    }

    /// Trims the enclosing single quotes and decodes doubled quotes.
    pub(super) fn string_from_span(&self, span: Span) -> String {
        self.src[span.start + 1..span.end - 1].replace("''", "'")
    }

    pub(super) fn number_from_span<T: FromStr>(&self, span: Span) -> Result<T> {
        self.src[span.clone()]
            .parse::<T>()
            .map_err(|_| self.syntax_error(span))
    }

    fn line_at(&self, offset: usize) -> usize {
        self.src[..offset].bytes().filter(|&b| b == b'\n').count() + 1
    }

    pub(super) fn syntax_error(&self, span: Span) -> Error {
        Error::UnexpectedToken {
            token: self.src[span.clone()].to_string(),
            line: self.line_at(span.start),
            offset: span.start,
        }
    }

    fn expectation_error(&self, expected: impl ToString, span: Span) -> Error {
        Error::ExpectedToken {
            expected: expected.to_string(),
            token: self.src[span.clone()].to_string(),
            line: self.line_at(span.start),
            offset: span.start,
        }
    }

    /// Turns whatever sits at the cursor into an error, consuming it.
    pub(super) fn unexpected_here(&mut self) -> Error {
        match self.tokens.next() {
            Some(Ok(Spanned(_, span))) => self.syntax_error(span),
            Some(Err(e)) => Error::Lexing { source: e },
            None => Error::UnexpectedEnd,
        }
    }

    pub(super) fn must_match(&mut self, token: Token) -> Result<Spanned<Token>> {
        match self.tokens.next() {
            Some(Ok(Spanned(t, span))) if t == token => Ok(Spanned(t, span)),
            Some(Ok(Spanned(_, span))) => Err(self.expectation_error(token, span)),
            Some(Err(e)) => Err(Error::Lexing { source: e }),
            None => Err(Error::UnexpectedEnd),
        }
    }

    pub(super) fn try_match(&mut self, token: Token) -> Option<Spanned<Token>> {
        match self
            .tokens
            .next_if(|item| matches!(item, Ok(Spanned(t, _)) if *t == token))
        {
            Some(Ok(spanned)) => Some(spanned),
            _ => None,
        }
    }

    pub(super) fn try_match_keyword(&mut self, keyword: Keyword) -> bool {
        self.try_match(Token::Keyword(keyword)).is_some()
    }

    /// Consumes the keywords only if all of them are present, in order.
    pub(super) fn match_keyword_sequence(&mut self, keywords: &[Keyword]) -> bool {
        self.tokens
            .advance_n_if_each(keywords.len(), |(i, item)| match item {
                Ok(Spanned(Token::Keyword(keyword), _)) => *keyword == keywords[i],
                _ => false,
            })
            .is_some()
    }

    pub(super) fn parse_identifier(&mut self) -> Result<Identifier> {
        match_token!(self, {
            Spanned(Token::Identifier, span) => Ok(self.identifier_from_span(span)),
            Spanned(Token::QuotedIdentifier, span) => Ok(self.quoted_identifier_from_span(span)),
        })
    }

    pub(super) fn parse_string(&mut self) -> Result<String> {
        match_token!(self, {
            Spanned(Token::String, span) => Ok(self.string_from_span(span)),
        })
    }

    pub(super) fn parse_integer<T>(&mut self) -> Result<T>
    where
        T: FromStr + std::ops::Neg<Output = T>,
    {
        let negative = self.try_match(Token::Minus).is_some();
        let value = match_token!(self, {
            Spanned(Token::Number { is_float: false }, span) => self.number_from_span::<T>(span)?,
        });

        Ok(match negative {
            true => -value,
            false => value,
        })
    }

    pub(super) fn parse_qualified_name(&mut self) -> Result<(Option<Identifier>, Identifier)> {
        let first = self.parse_identifier()?;

        Ok(match self.try_match(Token::Period) {
            Some(_) => (Some(first), self.parse_identifier()?),
            None => (None, first),
        })
    }

    pub(super) fn parse_table_name(&mut self) -> Result<TableName> {
        let (schema, table) = self.parse_qualified_name()?;
        Ok(TableName { schema, table })
    }

    pub(super) fn parse_comma_separated_within_parentheses<T>(
        &mut self,
        func: impl FnMut(&mut Parser<'a>) -> Result<T>,
        allow_empty: bool,
    ) -> Result<Spanned<Vec<T>>> {
        let Spanned(_, s1) = self.must_match(Token::LeftParen)?;

        Ok(match self.tokens.peek() {
            Some(Ok(Spanned(Token::RightParen, s2))) if allow_empty => {
                let end = s2.end;
                self.tokens.next();
                Spanned(Vec::new(), s1.start..end)
            }
            _ => {
                let result = self.parse_comma_separated(func)?;
                let Spanned(_, s2) = self.must_match(Token::RightParen)?;
                Spanned(result, s1.start..s2.end)
            }
        })
    }

    pub(super) fn parse_comma_separated<T>(
        &mut self,
        mut func: impl FnMut(&mut Parser<'a>) -> Result<T>,
    ) -> Result<Vec<T>> {
        let mut items = vec![func(self)?];

        while self.try_match(Token::Comma).is_some() {
            items.push(func(self)?);
        }

        Ok(items)
    }

    /// Consumes a balanced parenthesized token group without modeling its
    /// contents.
    pub(super) fn consume_parenthesized(&mut self) -> Result<()> {
        self.must_match(Token::LeftParen)?;

        let mut depth = 1usize;
        while depth > 0 {
            match self.tokens.next() {
                Some(Ok(Spanned(Token::LeftParen, _))) => depth += 1,
                Some(Ok(Spanned(Token::RightParen, _))) => depth -= 1,
                Some(Ok(_)) => {}
                Some(Err(e)) => return Err(Error::Lexing { source: e }),
                None => return Err(Error::UnexpectedEnd),
            }
        }

        Ok(())
    }
}
