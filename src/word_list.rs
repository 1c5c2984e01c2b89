/// An identifier for a word, based on its index in the `WordList`.
pub type WordId = usize;

/// A deduplicated, lexicographically sorted dictionary.
///
/// Sorting up front means ascending `WordId` order is alphabetical order,
/// which keeps candidate iteration (and therefore search order) reproducible
/// across runs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WordList {
    words: Vec<String>,
}

impl WordList {
    pub fn new(mut words: Vec<String>) -> WordList {
        words.sort();
        words.dedup();
        WordList { words }
    }

    pub fn word(&self, id: WordId) -> &str {
        &self.words[id]
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}
