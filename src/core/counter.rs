use crate::domain::model::LetterCounts;
use crate::utils::error::{CountError, Result};
use regex::Regex;
use std::sync::LazyLock;

// General_Category=Letter (Lu, Ll, Lt, Lm, Lo). Marks, letter-like numbers
// and symbols such as 'Ⅻ' or 'Ⓐ' are not letters.
static LETTER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\p{L}$").expect("letter class pattern is valid"));

/// Counts the letters of `text`, case-insensitively.
///
/// Anything outside the Unicode Letter category is skipped. Letters are
/// folded to lowercase before counting, so `"aA"` yields `{'a': 2}`.
///
/// ```
/// use letter_count::count_letters;
///
/// let counts = count_letters("Hello, World!");
/// assert_eq!(counts.get('l'), 3);
/// assert_eq!(counts.get('o'), 2);
/// assert_eq!(counts.total(), 10);
/// ```
pub fn count_letters(text: &str) -> LetterCounts {
    count_chars(text.chars())
}

/// Same as [`count_letters`] over any single-pass character source.
pub fn count_chars<I>(chars: I) -> LetterCounts
where
    I: IntoIterator<Item = char>,
{
    let mut counts = LetterCounts::new();
    for c in chars.into_iter().filter(|c| is_letter(*c)) {
        counts.increment(fold_case(c));
    }
    counts
}

pub fn is_letter(c: char) -> bool {
    let mut buf = [0u8; 4];
    LETTER.is_match(c.encode_utf8(&mut buf))
}

// 'İ' 的小寫是 "i\u{307}"，只取第一個字元，所以 'İ' 會併入 'i' 的計數
fn fold_case(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}

/// Turns raw input bytes into text, rejecting anything that is not UTF-8.
pub fn decode_input(bytes: Vec<u8>, origin: &str) -> Result<String> {
    String::from_utf8(bytes).map_err(|e| CountError::InvalidArgument {
        message: format!(
            "{} is not valid UTF-8 (invalid byte at offset {})",
            origin,
            e.utf8_error().valid_up_to()
        ),
    })
}
