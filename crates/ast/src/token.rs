use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    Keyword(Keyword),

    Identifier,
    QuotedIdentifier,

    Number { is_float: bool },
    String,

    Comma,
    Period,
    Semicolon,
    LeftParen,
    RightParen,

    Equal,
    NotEqual,
    GreaterThan,
    GreaterThanOrEqual,
    LessThan,
    LessThanOrEqual,
    LessOrGreaterThan,

    Plus,
    Minus,
    Asterisk,
    Slash,
    Percent,
}

impl Display for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            Self::Keyword(keyword) => return keyword.fmt(f),
            Self::Identifier => "identifier",
            Self::QuotedIdentifier => "quoted identifier",
            Self::Number { .. } => "number",
            Self::String => "string literal",
            Self::Comma => "`,`",
            Self::Period => "`.`",
            Self::Semicolon => "`;`",
            Self::LeftParen => "`(`",
            Self::RightParen => "`)`",
            Self::Equal => "`=`",
            Self::NotEqual => "`!=`",
            Self::GreaterThan => "`>`",
            Self::GreaterThanOrEqual => "`>=`",
            Self::LessThan => "`<`",
            Self::LessThanOrEqual => "`<=`",
            Self::LessOrGreaterThan => "`<>`",
            Self::Plus => "`+`",
            Self::Minus => "`-`",
            Self::Asterisk => "`*`",
            Self::Slash => "`/`",
            Self::Percent => "`%`",
        };

        write!(f, "{}", text)
    }
}

macro_rules! keyword {
    ( $( $var:ident, )* ) => {
        /// The words the grammar dispatches on. Datatype names (`NUMBER`,
        /// `VARCHAR2`, ...) are deliberately absent: they lex as identifiers.
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        #[allow(non_camel_case_types)]
        pub enum Keyword {
            $($var,)*
        }

        #[derive(Debug)]
        pub struct NotKeywordError {}

        impl Display for NotKeywordError {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "not a keyword")
            }
        }
        impl std::error::Error for NotKeywordError {}

        impl std::str::FromStr for Keyword {
            type Err = NotKeywordError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.to_ascii_uppercase().as_str() {
                    $(stringify!($var) => Ok(Self::$var),)*
                    _ => Err(NotKeywordError {}),
                }
            }
        }

        impl Display for Keyword {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                let name = match self {
                    $(Self::$var => stringify!($var),)*
                };

                write!(f, "{}", name)
            }
        }
    };
}

keyword! {
    ACTION,
    ADD,
    ALTER,
    ASC,
    BY,
    CACHE,
    CASCADE,
    CHECK,
    COLLATE,
    COLUMN,
    COLUMNS,
    COMMENT,
    CONSTRAINT,
    CONSTRAINTS,
    CONTINUE,
    CREATE,
    CYCLE,
    DEFAULT,
    DELETE,
    DESC,
    DROP,
    FORCE,
    FOREIGN,
    GRANT,
    INCREMENT,
    INDEX,
    INVALIDATE,
    INVISIBLE,
    IS,
    KEY,
    MAXVALUE,
    MINVALUE,
    MODIFY,
    NO,
    NOCACHE,
    NOCYCLE,
    NOMAXVALUE,
    NOMINVALUE,
    NOORDER,
    NOT,
    NULL,
    ON,
    ONLINE,
    ORDER,
    PRIMARY,
    REFERENCES,
    RENAME,
    RESTRICT,
    SEQUENCE,
    SET,
    SORT,
    START,
    SUBSTITUTABLE,
    TABLE,
    TO,
    UNIQUE,
    UNUSED,
    UPDATE,
    VISIBLE,
    WITH,
}
