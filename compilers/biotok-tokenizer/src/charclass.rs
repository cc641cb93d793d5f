use bitflags::bitflags;
use unicode_general_category::{get_general_category, GeneralCategory};

bitflags! {
    /// Classes a character can fall into, derived from its Unicode general
    /// category (tables pinned by `unicode-general-category`).
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct CharClass: u8 {
        /// Ends the current word: Zs, Zl, Zp, Cf, or `\n` `\t` `\r`.
        const SEPARATOR = 1;
        /// Zs, Zl, Zp.
        const SPACE = 2;
        /// Sm, Sk and every punctuation category.
        const SYMBOL = 4;
        const LETTER = 8;
        const NUMBER = 16;
    }
}

impl CharClass {
    pub fn of(c: char) -> Self {
        use GeneralCategory::*;

        let mut class = match get_general_category(c) {
            SpaceSeparator | LineSeparator | ParagraphSeparator => CharClass::SPACE | CharClass::SEPARATOR,
            Format => CharClass::SEPARATOR,
            MathSymbol | ModifierSymbol => CharClass::SYMBOL,
            ConnectorPunctuation | DashPunctuation | OpenPunctuation | ClosePunctuation
            | InitialPunctuation | FinalPunctuation | OtherPunctuation => CharClass::SYMBOL,
            UppercaseLetter | LowercaseLetter | TitlecaseLetter | ModifierLetter | OtherLetter => CharClass::LETTER,
            DecimalNumber | LetterNumber | OtherNumber => CharClass::NUMBER,
            _ => CharClass::empty(),
        };

        if matches!(c, '\n' | '\t' | '\r') {
            class |= CharClass::SEPARATOR;
        }
        class
    }
}

pub fn is_separator(c: char) -> bool {
    CharClass::of(c).contains(CharClass::SEPARATOR)
}

/// Symbols that never split a word in the middle.
const GLUE_SYMBOLS: [char; 7] = ['.', ',', '\'', '\u{2019}', '-', '#', '$'];

/// Whether the character at a word position is a mid-word break.
///
/// `prev` and `next` are the neighbouring characters inside the same word.
pub fn is_mid_break(prev: Option<char>, c: char, next: Option<char>) -> bool {
    if CharClass::of(c).contains(CharClass::SYMBOL) && !GLUE_SYMBOLS.contains(&c) {
        return true;
    }

    match c {
        '-' => {
            let after_text = prev.is_some_and(|p| !CharClass::of(p).contains(CharClass::SPACE));
            let before_letter = next.is_some_and(|n| CharClass::of(n).contains(CharClass::LETTER));
            after_text || before_letter
        }
        // digit,digit is a thousands separator
        ',' => match (prev, next) {
            (Some(p), Some(n)) => !(is_number(p) && is_number(n)),
            _ => false,
        },
        _ => false,
    }
}

fn is_number(c: char) -> bool {
    CharClass::of(c).contains(CharClass::NUMBER)
}

pub fn is_start_quote(c: char) -> bool {
    matches!(c, '\'' | '\u{2019}')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_separators() {
        for c in [' ', '\n', '\t', '\r', '\u{00a0}', '\u{2028}', '\u{2029}', '\u{200b}', '\u{feff}'] {
            assert!(is_separator(c), "{:?} should separate", c);
        }
        for c in ['a', '1', '.', '-', '\u{0085}'] {
            assert!(!is_separator(c), "{:?} should not separate", c);
        }
    }

    #[test]
    fn test_symbol_breaks() {
        for c in ['(', ')', '%', '/', '+', '=', '^', ';', ':', '!', '?', '"', '\u{2013}', '_'] {
            assert!(is_mid_break(Some('a'), c, Some('b')), "{:?} should break", c);
        }
        for c in ['.', '\'', '\u{2019}', '#', '$', '\u{00b0}'] {
            assert!(!is_mid_break(Some('a'), c, Some('b')), "{:?} should glue", c);
        }
    }

    #[test]
    fn test_hyphen_rules() {
        assert!(is_mid_break(Some('a'), '-', Some('b')));
        assert!(is_mid_break(Some('5'), '-', Some('6')));
        assert!(is_mid_break(None, '-', Some('b')));
        assert!(!is_mid_break(None, '-', Some('5')));
        assert!(!is_mid_break(None, '-', None));
    }

    #[test]
    fn test_comma_rules() {
        assert!(!is_mid_break(Some('4'), ',', Some('0')));
        assert!(is_mid_break(Some('a'), ',', Some('0')));
        assert!(is_mid_break(Some('4'), ',', Some('b')));
        assert!(is_mid_break(Some('a'), ',', Some('b')));
        assert!(!is_mid_break(Some('a'), ',', None));
        assert!(!is_mid_break(None, ',', Some('a')));
    }
}
