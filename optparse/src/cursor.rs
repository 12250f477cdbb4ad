//! Cursor over the argument vector.

/// Walks the argument vector once, left to right.
///
/// [`ArgCursor::next_token`] yields the next token to route;
/// [`ArgCursor::claim_value`] takes the token right after the current one as
/// an option value, so it is never routed as a token itself.
#[derive(Debug)]
pub struct ArgCursor<'a> {
    args: &'a [String],
    next: usize,
}

impl<'a> ArgCursor<'a> {
    pub fn new(args: &'a [String]) -> Self {
        ArgCursor { args, next: 0 }
    }

    pub fn next_token(&mut self) -> Option<&'a str> {
        let token = self.args.get(self.next)?;
        self.next += 1;
        Some(token.as_str())
    }

    /// Take the token following the last one returned by `next_token`.
    /// `None` when the vector is exhausted.
    pub fn claim_value(&mut self) -> Option<&'a str> {
        self.next_token()
    }
}
