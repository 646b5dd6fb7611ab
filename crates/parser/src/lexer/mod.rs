mod error;

pub use self::error::Error;
pub(crate) use self::error::Result;

use {
    ast::{
        token::{Keyword, Token},
        Spanned,
    },
    std::{
        iter::Peekable,
        str::{CharIndices, FromStr},
    },
};

/// Single-pass tokenizer over the raw source. Spans are half-open byte
/// ranges, so re-slicing the source at any span reproduces the original
/// bytes exactly; nothing is normalized or trimmed.
pub(crate) struct Lexer<'a> {
    src: &'a str,
    iter: Peekable<CharIndices<'a>>,
    line: usize,
    failed: bool,
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Result<Spanned<Token>>;

    fn next(&mut self) -> Option<Self::Item> {
        // an error is terminal; the rest of the input is not lexed
        if self.failed {
            return None;
        }

        self.skip_whitespace();

        let token = match self.iter.peek() {
            Some((_, '\'')) => self.scan_string(),
            Some((_, '"')) => self.scan_quoted_identifier(),
            Some((_, c)) if c.is_ascii_digit() => self.scan_number().map(Ok),
            Some((_, c)) if c.is_alphabetic() => self.scan_identifier().map(Ok),
            Some(_) => self.scan_symbol(),
            None => None,
        };

        let item = match token {
            None => self.iter.peek().map(|&(i, c)| {
                Err(Error::UnexpectedChar {
                    c,
                    offset: i,
                    line: self.line,
                })
            }),
            other => other,
        };

        if let Some(Err(_)) = &item {
            self.failed = true;
        }

        item
    }
}

impl<'a> Lexer<'a> {
    pub(crate) fn new(src: &'a str) -> Self {
        Self {
            src,
            iter: src.char_indices().peekable(),
            line: 1,
            failed: false,
        }
    }

    fn skip_whitespace(&mut self) {
        while let Some((_, c)) = self.iter.next_if(|(_, c)| c.is_whitespace()) {
            if c == '\n' {
                self.line += 1;
            }
        }
    }

    fn iter_next_while(&mut self, func: impl Fn(&char) -> bool) {
        while self.iter.next_if(|(_, c)| func(c)).is_some() {}
    }

    /// Byte offset one past the last consumed character.
    fn current_offset(&mut self) -> usize {
        self.iter.peek().map_or(self.src.len(), |&(i, _)| i)
    }

    fn scan_string(&mut self) -> Option<Result<Spanned<Token>>> {
        let begin = self.iter.next_if(|&(_, c)| c == '\'')?.0;
        let line = self.line;

        while let Some((i, c)) = self.iter.next() {
            match c {
                '\n' => self.line += 1,
                // a doubled quote stays inside the literal
                '\'' => match self.iter.peek() {
                    Some((_, '\'')) => _ = self.iter.next(),
                    _ => return Some(Ok(Spanned(Token::String, begin..i + 1))),
                },
                _ => {}
            }
        }

        Some(Err(Error::NoClosingQuoteForString {
            offset: begin,
            line,
        }))
    }

    fn scan_quoted_identifier(&mut self) -> Option<Result<Spanned<Token>>> {
        let begin = self.iter.next_if(|&(_, c)| c == '"')?.0;
        let line = self.line;

        while let Some((i, c)) = self.iter.next() {
            match c {
                '\n' => self.line += 1,
                '"' => return Some(Ok(Spanned(Token::QuotedIdentifier, begin..i + 1))),
                _ => {}
            }
        }

        Some(Err(Error::NoClosingQuoteForIdentifier {
            offset: begin,
            line,
        }))
    }

    fn scan_number(&mut self) -> Option<Spanned<Token>> {
        let begin = self.iter.next_if(|&(_, c)| c.is_ascii_digit())?.0;

        self.iter_next_while(|c| c.is_ascii_digit());

        let mut is_float = self.iter.next_if(|&(_, c)| c == '.').is_some();
        self.iter_next_while(|c| c.is_ascii_digit());

        if self.iter.next_if(|&(_, c)| c == 'e' || c == 'E').is_some() {
            is_float = true;
            self.iter.next_if(|&(_, c)| c == '+' || c == '-');
            self.iter_next_while(|c| c.is_ascii_digit());
        }

        Some(Spanned(
            Token::Number { is_float },
            begin..self.current_offset(),
        ))
    }

    fn scan_identifier(&mut self) -> Option<Spanned<Token>> {
        let begin = self.iter.next_if(|&(_, c)| c.is_alphabetic())?.0;

        self.iter_next_while(|&c| c.is_alphanumeric() || c == '_' || c == '$' || c == '#');

        let range = begin..self.current_offset();
        let token = Keyword::from_str(&self.src[range.clone()])
            .map(Token::Keyword)
            .unwrap_or(Token::Identifier);

        Some(Spanned(token, range))
    }

    fn scan_symbol(&mut self) -> Option<Result<Spanned<Token>>> {
        let &(begin, next_char) = self.iter.peek()?;

        let symbol = match next_char {
            '.' => Token::Period,
            ',' => Token::Comma,
            ';' => Token::Semicolon,
            '(' => Token::LeftParen,
            ')' => Token::RightParen,
            '*' => Token::Asterisk,
            '+' => Token::Plus,
            '-' => Token::Minus,
            '/' => Token::Slash,
            '%' => Token::Percent,
            '=' => Token::Equal,
            '<' => {
                self.iter.next();
                let token = match self.iter.next_if(|&(_, c)| c == '>' || c == '=') {
                    Some((_, '>')) => Token::LessOrGreaterThan,
                    Some(_) => Token::LessThanOrEqual,
                    None => Token::LessThan,
                };
                return Some(Ok(Spanned(token, begin..self.current_offset())));
            }
            '>' => {
                self.iter.next();
                let token = match self.iter.next_if(|&(_, c)| c == '=') {
                    Some(_) => Token::GreaterThanOrEqual,
                    None => Token::GreaterThan,
                };
                return Some(Ok(Spanned(token, begin..self.current_offset())));
            }
            '!' => {
                self.iter.next();
                return Some(match self.iter.next_if(|&(_, c)| c == '=') {
                    Some(_) => Ok(Spanned(Token::NotEqual, begin..self.current_offset())),
                    None => Err(Error::UnexpectedChar {
                        c: '!',
                        offset: begin,
                        line: self.line,
                    }),
                });
            }
            _ => return None,
        };

        self.iter.next();
        Some(Ok(Spanned(symbol, begin..self.current_offset())))
    }
}
