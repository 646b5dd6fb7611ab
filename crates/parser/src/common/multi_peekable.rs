//! A peek-ahead iterator adapter in the spirit of the `itertools`
//! implementation. The grammar never backtracks, but a few rules need to
//! look more than one token ahead before committing.
use std::{collections::VecDeque, iter::Fuse};

pub struct MultiPeekable<I>
where
    I: Iterator,
{
    iter: Fuse<I>,
    buf: VecDeque<I::Item>,
}

pub trait MultiPeek: Iterator + Sized {
    fn multi_peekable(self) -> MultiPeekable<Self>;
}

impl<I: Iterator> MultiPeek for I {
    fn multi_peekable(self) -> MultiPeekable<I> {
        MultiPeekable {
            iter: self.fuse(),
            buf: VecDeque::new(),
        }
    }
}

impl<I: Iterator> MultiPeekable<I> {
    pub fn peek(&mut self) -> Option<&I::Item> {
        self.peek_nth(0)
    }

    pub fn peek_nth(&mut self, n: usize) -> Option<&I::Item> {
        let unbuffered_items = (n + 1).saturating_sub(self.buf.len());

        self.buf.extend(self.iter.by_ref().take(unbuffered_items));

        self.buf.get(n)
    }

    pub fn next_if(&mut self, func: impl FnOnce(&I::Item) -> bool) -> Option<I::Item> {
        match self.next()? {
            matched if func(&matched) => Some(matched),
            other => {
                // the rejected item goes back in front of anything still
                // buffered, or the stream would be reordered
                self.buf.push_front(other);
                None
            }
        }
    }

    /// Advances the iterator by `n` elements if each element meets the
    /// condition, returning the last of them.
    pub fn advance_n_if_each(
        &mut self,
        n: usize,
        func: impl Fn((usize, &I::Item)) -> bool,
    ) -> Option<I::Item> {
        let mut items = self.by_ref().take(n).collect::<VecDeque<_>>();

        if items.len() < n || !items.iter().enumerate().all(|item| func(item)) {
            items.append(&mut self.buf);
            self.buf = items;
            return None;
        }

        items.pop_back()
    }
}

impl<I> Iterator for MultiPeekable<I>
where
    I: Iterator,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        self.buf.pop_front().or_else(|| self.iter.next())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (mut low, mut high) = self.iter.size_hint();
        low = low.saturating_add(self.buf.len());
        high = high.and_then(|elt| elt.checked_add(self.buf.len()));
        (low, high)
    }
}
