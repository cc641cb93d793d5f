use std::collections::VecDeque;
use std::iter::FusedIterator;

use biotok_protocol::TokenSpan;

use crate::error::TokenizeError;
use crate::Tokenizer;

/// Pull-based token sequence over a stream of `(byte offset, char)` pairs.
///
/// Input is consumed only as far as needed to produce the next span. The
/// sequence is single-pass: once exhausted it stays exhausted.
pub struct Tokens<'l, I> {
    chars: I,
    tokenizer: Tokenizer<'l>,
    pending: VecDeque<TokenSpan>,
    finished: bool,
}

impl<'l, I> Tokens<'l, I>
where
    I: Iterator<Item = (usize, char)>,
{
    pub(crate) fn new(chars: I, tokenizer: Tokenizer<'l>) -> Self {
        Self {
            chars,
            tokenizer,
            pending: VecDeque::new(),
            finished: false,
        }
    }

    /// Whether another span is available. Never consumes a span, though it
    /// may pull input to find out.
    pub fn has_more(&mut self) -> bool {
        self.fill()
    }

    /// Like [`Iterator::next`], but reports exhaustion as an error.
    pub fn try_next(&mut self) -> Result<TokenSpan, TokenizeError> {
        self.next().ok_or(TokenizeError::Exhausted)
    }

    fn fill(&mut self) -> bool {
        while self.pending.is_empty() {
            if self.finished {
                return false;
            }
            match self.chars.next() {
                Some((index, ch)) => self.pending.extend(self.tokenizer.advance(ch, index)),
                None => {
                    self.finished = true;
                    self.pending.extend(self.tokenizer.finish());
                }
            }
        }
        true
    }
}

impl<I> Iterator for Tokens<'_, I>
where
    I: Iterator<Item = (usize, char)>,
{
    type Item = TokenSpan;

    fn next(&mut self) -> Option<TokenSpan> {
        if self.fill() {
            self.pending.pop_front()
        } else {
            None
        }
    }
}

impl<I> FusedIterator for Tokens<'_, I> where I: Iterator<Item = (usize, char)> {}
