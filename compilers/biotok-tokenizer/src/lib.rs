//! Rule-based word tokenizer for biomedical text.
//!
//! Every [`TokenSpan`] is a half-open range of **UTF-8 byte offsets** into the
//! input, so `&text[span.range()]` is the token. Offsets count bytes, not
//! UTF-16 code units or chars: `"über"` is `[0, 5)`. Callers streaming
//! characters through [`Tokenizer::advance`] or [`tokenize_chars`] must pass
//! byte offsets, as [`str::char_indices`] yields them.

pub mod charclass;
pub mod error;
pub mod iter;
pub mod patterns;
pub mod segment;

use std::str::CharIndices;

pub use biotok_protocol::{TokenResult, TokenSpan};
pub use biotok_units::{LexiconConfig, UnitLexicon};
pub use charclass::is_separator;
pub use error::TokenizeError;
pub use iter::Tokens;

/// Accumulates word characters and segments each word once a separator (or
/// the end of input) closes it.
///
/// One instance serves one input at a time; the lexicon it borrows may be
/// shared freely.
#[derive(Debug, Clone)]
pub struct Tokenizer<'l> {
    lexicon: &'l UnitLexicon,
    word: String,
    start_index: Option<usize>,
}

impl Tokenizer<'static> {
    /// Uses the process-wide [`UnitLexicon::shared`].
    pub fn new() -> Self {
        Self::with_lexicon(UnitLexicon::shared())
    }
}

impl Default for Tokenizer<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'l> Tokenizer<'l> {
    pub fn with_lexicon(lexicon: &'l UnitLexicon) -> Self {
        Self {
            lexicon,
            word: String::new(),
            start_index: None,
        }
    }

    /// Feeds one character found at byte offset `index` of the source.
    ///
    /// Returns the spans of the word the character closes, if it is a
    /// separator; usually empty.
    pub fn advance(&mut self, ch: char, index: usize) -> Vec<TokenSpan> {
        if is_separator(ch) {
            return self.break_word();
        }

        if self.word.is_empty() {
            self.start_index = Some(index);
        }
        self.word.push(ch);
        Vec::new()
    }

    /// Flushes the word still buffered at the end of input.
    pub fn finish(&mut self) -> Vec<TokenSpan> {
        self.break_word()
    }

    fn break_word(&mut self) -> Vec<TokenSpan> {
        let Some(start) = self.start_index.take() else {
            return Vec::new();
        };

        let spans = segment::segment(&self.word, start, self.lexicon);
        tracing::trace!(start, len = self.word.len(), spans = spans.len(), "segmented word");

        self.word.clear();
        spans
    }
}

/// Tokenizes `text` eagerly with the shared unit lexicon.
pub fn all_tokens(text: &str) -> Vec<TokenSpan> {
    all_tokens_with(UnitLexicon::shared(), text)
}

pub fn all_tokens_with(lexicon: &UnitLexicon, text: &str) -> Vec<TokenSpan> {
    let mut tokenizer = Tokenizer::with_lexicon(lexicon);
    let mut spans = Vec::new();

    for (index, ch) in text.char_indices() {
        spans.extend(tokenizer.advance(ch, index));
    }
    spans.extend(tokenizer.finish());

    spans
}

/// Tokenizes `text` lazily with the shared unit lexicon.
pub fn tokenize(text: &str) -> Tokens<'static, CharIndices<'_>> {
    tokenize_with(UnitLexicon::shared(), text)
}

pub fn tokenize_with<'l, 't>(lexicon: &'l UnitLexicon, text: &'t str) -> Tokens<'l, CharIndices<'t>> {
    Tokens::new(text.char_indices(), Tokenizer::with_lexicon(lexicon))
}

/// Tokenizes a streamed source of `(byte offset, char)` pairs lazily.
pub fn tokenize_chars<I>(chars: I) -> Tokens<'static, I::IntoIter>
where
    I: IntoIterator<Item = (usize, char)>,
{
    Tokens::new(chars.into_iter(), Tokenizer::new())
}
