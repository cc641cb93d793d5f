//! Decomposition of one buffered word into token spans.
//!
//! Stages run in a fixed order and each hands the sub-ranges it leaves
//! unresolved to the next:
//!
//! 1. mid-breaks: breaking symbols, hyphens, non-numeric commas
//! 2. start-breaks: leading quotes
//! 3. end-breaks: trailing contractions, quotes and commas
//! 4. unit suffixes after numbers (`2.5cm`)
//! 5. dimension splitting (`2x3x4`, `-2x3`)
//!
//! All sub-range positions are byte offsets into the word.

use biotok_protocol::TokenSpan;
use biotok_units::UnitLexicon;

use crate::charclass::{is_mid_break, is_start_quote};
use crate::patterns::{end_break_start, ends_with_dimension, unit_suffix_start};

/// Segments `word`, which begins at byte `offset` of the source, into spans
/// ordered left to right.
pub fn segment(word: &str, offset: usize, lexicon: &UnitLexicon) -> Vec<TokenSpan> {
    let mut segmenter = Segmenter {
        word,
        offset,
        lexicon,
        spans: Vec::new(),
    };
    segmenter.break_mid();
    segmenter.spans
}

struct Segmenter<'w, 'l> {
    word: &'w str,
    offset: usize,
    lexicon: &'l UnitLexicon,
    spans: Vec<TokenSpan>,
}

impl Segmenter<'_, '_> {
    fn break_mid(&mut self) {
        let word = self.word;
        let mut start = 0;
        let mut prev = None;
        let mut chars = word.char_indices().peekable();

        while let Some((at, c)) = chars.next() {
            let next = chars.peek().map(|&(_, n)| n);
            if is_mid_break(prev, c, next) {
                self.break_starts(start, at);
                start = at + c.len_utf8();
                self.push(at, start);
            }
            prev = Some(c);
        }

        self.break_starts(start, word.len());
    }

    fn break_starts(&mut self, mut start: usize, end: usize) {
        let word = self.word;
        while let Some(quote) = word[start..end].chars().next().filter(|&c| is_start_quote(c)) {
            let quote_end = start + quote.len_utf8();
            self.push(start, quote_end);
            start = quote_end;
        }

        if start < end {
            self.break_ends(start, end);
        }
    }

    fn break_ends(&mut self, start: usize, mut end: usize) {
        // Stacked suffixes are peeled right to left, then emitted in text order
        let word = self.word;
        let mut suffixes = Vec::new();
        while let Some(at) = end_break_start(&word[start..end]) {
            suffixes.push((start + at, end));
            end = start + at;
            if end == start {
                break;
            }
        }

        if start < end {
            self.break_units(start, end);
        }
        for (suffix_start, suffix_end) in suffixes.into_iter().rev() {
            self.push(suffix_start, suffix_end);
        }
    }

    fn break_units(&mut self, start: usize, end: usize) {
        let word = self.word;
        if let Some(at) = unit_suffix_start(&word[start..end]) {
            let unit_start = start + at;
            if self.lexicon.contains(&word[unit_start..end].to_ascii_lowercase()) {
                self.split_dimensions(start, unit_start);
                self.push(unit_start, end);
                return;
            }
        }

        self.split_dimensions(start, end);
    }

    fn split_dimensions(&mut self, start: usize, end: usize) {
        let word = self.word;
        let text = &word[start..end];
        if !ends_with_dimension(text) {
            self.push(start, end);
            return;
        }

        let mut prev = start;
        for (at, _) in text.match_indices(|c: char| c == 'x' || c == 'X') {
            let x_start = start + at;
            self.push(prev, x_start);
            self.push(x_start, x_start + 1);
            prev = x_start + 1;
        }
        self.push(prev, end);
    }

    fn push(&mut self, start: usize, end: usize) {
        if start < end {
            self.spans.push(TokenSpan::new(self.offset + start, self.offset + end));
        }
    }
}
