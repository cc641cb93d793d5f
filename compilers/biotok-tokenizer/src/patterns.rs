use nom::{
    bytes::complete::take_while1,
    character::complete::{char, one_of},
    combinator::{all_consuming, opt, recognize, verify},
    multi::many1,
    sequence::{pair, preceded},
    IResult,
};

/// Contractions split off the end of a word, matched ignoring ASCII case.
const CONTRACTIONS: [&str; 7] = ["'s", "'d", "'m", "n't", "'ll", "'ve", "'re"];

/// Single characters split off the end of a word.
const TRAILING_MARKS: [char; 3] = ['\'', '\u{2019}', ','];

/// `[0-9.]*[0-9]`
fn number(input: &str) -> IResult<&str, &str> {
    verify(
        take_while1(|c: char| c.is_ascii_digit() || c == '.'),
        |run: &str| run.ends_with(|c: char| c.is_ascii_digit()),
    )(input)
}

/// `-?[0-9.xX]*[0-9]`
fn measured_number(input: &str) -> IResult<&str, &str> {
    recognize(pair(
        opt(char('-')),
        verify(
            take_while1(|c: char| c.is_ascii_digit() || matches!(c, '.' | 'x' | 'X')),
            |run: &str| run.ends_with(|c: char| c.is_ascii_digit()),
        ),
    ))(input)
}

/// `number ([xX] number)+`, e.g. `2x3x4` or `1.5X2`.
fn dimension(input: &str) -> IResult<&str, (&str, Vec<&str>)> {
    all_consuming(pair(number, many1(preceded(one_of("xX"), number))))(input)
}

/// Whether the text ends in a dimension; anything may come before it
/// (`-2x3`, `x2x3`).
pub fn ends_with_dimension(text: &str) -> bool {
    text.char_indices().any(|(at, _)| dimension(&text[at..]).is_ok())
}

/// Byte offset where a trailing alphabetic run starts, when the text is a
/// number followed directly by letters (`2.5cm` -> `Some(3)`).
pub fn unit_suffix_start(text: &str) -> Option<usize> {
    let split = text.trim_end_matches(|c: char| c.is_ascii_alphabetic()).len();
    if split == 0 || split == text.len() {
        return None;
    }

    let parsed: IResult<&str, &str> = all_consuming(measured_number)(&text[..split]);
    parsed.ok().map(|_| split)
}

/// Byte offset where a trailing contraction or quote/comma starts.
pub fn end_break_start(text: &str) -> Option<usize> {
    for suffix in CONTRACTIONS {
        if let Some(start) = text.len().checked_sub(suffix.len()) {
            if text.is_char_boundary(start) && text[start..].eq_ignore_ascii_case(suffix) {
                return Some(start);
            }
        }
    }

    text.char_indices()
        .next_back()
        .filter(|(_, c)| TRAILING_MARKS.contains(c))
        .map(|(start, _)| start)
}
