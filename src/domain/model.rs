use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Text counted when no input is given.
pub const SAMPLE_TEXT: &str = "Hello, World!";

/// Occurrence count per lowercase letter.
///
/// Entries keep the order in which letters were first seen. Equality ignores
/// that order, so two counts built from anagrams compare equal.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LetterCounts(IndexMap<char, usize>);

impl LetterCounts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one occurrence, inserting the letter at 1 when absent.
    pub fn increment(&mut self, letter: char) {
        *self.0.entry(letter).or_insert(0) += 1;
    }

    /// Count for `letter`, 0 when it never occurred.
    pub fn get(&self, letter: char) -> usize {
        self.0.get(&letter).copied().unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Sum of all counts.
    pub fn total(&self) -> usize {
        self.0.values().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (char, usize)> + '_ {
        self.0.iter().map(|(letter, count)| (*letter, *count))
    }

    /// Returns the same counts reordered. Sorting is stable, so frequency
    /// ties stay in first-seen order.
    pub fn sorted(mut self, order: SortOrder) -> Self {
        match order {
            SortOrder::FirstSeen => {}
            SortOrder::Alphabetical => self.0.sort_keys(),
            SortOrder::Frequency => self.0.sort_by(|_, a, _, b| b.cmp(a)),
        }
        self
    }
}

impl FromIterator<(char, usize)> for LetterCounts {
    fn from_iter<I: IntoIterator<Item = (char, usize)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

// 字母原樣輸出；char 的 Debug 會把 'ﾞ' 這類 Grapheme_Extend 字元轉成 '\u{ff9e}'
struct Quoted(char);

impl fmt::Debug for Quoted {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "'{}'", self.0)
    }
}

// {'h': 1, 'e': 1} 的映射表示法
impl fmt::Debug for LetterCounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.0.iter().map(|(letter, count)| (Quoted(*letter), count)))
            .finish()
    }
}

impl fmt::Display for LetterCounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceText {
    /// Where the text came from: `inline`, `stdin`, `sample` or a file path.
    pub origin: String,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CountReport {
    pub source: String,
    pub total_letters: usize,
    pub distinct_letters: usize,
    pub counts: LetterCounts,
}

impl CountReport {
    pub fn new(source: impl Into<String>, counts: LetterCounts) -> Self {
        Self {
            source: source.into(),
            total_letters: counts.total(),
            distinct_letters: counts.len(),
            counts,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    Inline(String),
    File(String),
    Stdin,
    Sample,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    /// `{'h': 1, 'e': 1}` map notation
    #[default]
    Debug,
    Json,
    Csv,
    Tsv,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "kebab-case")]
pub enum SortOrder {
    #[default]
    FirstSeen,
    Alphabetical,
    /// Most frequent first
    Frequency,
}
