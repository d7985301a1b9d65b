//! Boundary checks for style matches.

use crate::config::BoundaryPolicy;

/// A single pattern match within the text a rule pass started from.
#[derive(Debug, Clone, Copy)]
pub struct MatchContext<'t> {
    /// Full matched text, delimiters included
    pub matched: &'t str,
    /// Byte offset of the match in `input`
    pub start: usize,
    /// Text the rule pass scanned
    pub input: &'t str,
}

impl<'t> MatchContext<'t> {
    pub fn new(input: &'t str, start: usize, end: usize) -> Self {
        Self {
            matched: &input[start..end],
            start,
            input,
        }
    }

    pub fn end(&self) -> usize {
        self.start + self.matched.len()
    }

    /// The match starts the text or follows whitespace.
    pub fn valid_before(&self) -> bool {
        self.start == 0
            || self.input[..self.start]
                .chars()
                .next_back()
                .is_none_or(char::is_whitespace)
    }

    /// The match ends the text or is followed by whitespace.
    pub fn valid_after(&self) -> bool {
        self.end() == self.input.len()
            || self.input[self.end()..]
                .chars()
                .next()
                .is_none_or(char::is_whitespace)
    }
}

/// Decide whether `html` may replace the match.
pub fn validate(ctx: &MatchContext<'_>, html: String, policy: BoundaryPolicy) -> Option<String> {
    let valid_before = ctx.valid_before();
    let valid_after = ctx.valid_after();

    match policy {
        BoundaryPolicy::Ignore => Some(html),
        BoundaryPolicy::Enforce if valid_before && valid_after => Some(html),
        BoundaryPolicy::Enforce => {
            log::trace!(
                "Rejecting {:?} at {} (before: {}, after: {})",
                ctx.matched,
                ctx.start,
                valid_before,
                valid_after
            );
            None
        }
    }
}
