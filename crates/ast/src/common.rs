use {
    ::common::pub_fields_struct,
    std::fmt::{Display, Formatter, Result},
};

pub type Span = std::ops::Range<usize>;

#[derive(Debug, Clone, PartialEq)]
pub struct Spanned<T>(pub T, pub Span);

impl<T: Display> Display for Spanned<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        self.0.fmt(f)
    }
}

pub_fields_struct! {
    /// An identifier with its surrounding double quotes stripped. The value is
    /// never case-folded; `quoted` records which form the source used.
    #[derive(Debug, Clone, PartialEq)]
    struct Identifier {
        value: String,
        quoted: bool,
    }

    #[derive(Debug, Clone, PartialEq)]
    struct TableName {
        schema: Option<Identifier>,
        table: Identifier,
    }

    #[derive(Debug, Clone, PartialEq)]
    struct IndexName {
        schema: Option<Identifier>,
        index: Identifier,
    }

    #[derive(Debug, Clone, PartialEq)]
    struct SequenceName {
        schema: Option<Identifier>,
        sequence: Identifier,
    }
}

impl Identifier {
    pub fn unquoted(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            quoted: false,
        }
    }

    pub fn quoted(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            quoted: true,
        }
    }
}

impl Display for Identifier {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        if self.quoted {
            write!(f, "\"{}\"", self.value)
        } else {
            self.value.fmt(f)
        }
    }
}
