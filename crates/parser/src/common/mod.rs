mod multi_peekable;

pub(crate) use multi_peekable::{MultiPeek, MultiPeekable};
