use crate::puzzle::{Puzzle, VarId};
use crate::word_list::{WordId, WordList};

/// Per-variable candidate words, indexed by `VarId`.
///
/// Candidate lists stay in ascending `WordId` order, so search order is
/// reproducible. Domains are narrowed once before search (node consistency,
/// then arc consistency) and frozen while the search runs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Domains {
    candidates: Vec<Vec<WordId>>,
}

impl Domains {
    /// Seed every variable with the full dictionary.
    pub fn seed(puzzle: &Puzzle, words: &WordList) -> Domains {
        let all: Vec<WordId> = (0..words.len()).collect();
        Domains {
            candidates: vec![all; puzzle.variables().len()],
        }
    }

    /// Drop every candidate whose length differs from its variable's length,
    /// returning how many were dropped. This never fails; a variable with no
    /// word of the right length keeps an empty domain and surfaces as a
    /// no-solution result later.
    pub fn enforce_node_consistency(&mut self, puzzle: &Puzzle, words: &WordList) -> usize {
        let mut removed = 0;
        for (id, variable) in puzzle.variables().iter().enumerate() {
            let length = variable.length;
            removed += self.retain(id, |word| words.word(word).len() == length);
        }
        removed
    }

    pub fn candidates(&self, var: VarId) -> &[WordId] {
        &self.candidates[var]
    }

    pub fn size(&self, var: VarId) -> usize {
        self.candidates[var].len()
    }

    pub fn contains(&self, var: VarId, word: WordId) -> bool {
        self.candidates[var].binary_search(&word).is_ok()
    }

    /// Keep only the candidates of `var` accepted by `keep`; returns the
    /// number removed.
    pub(crate) fn retain<F: FnMut(WordId) -> bool>(&mut self, var: VarId, mut keep: F) -> usize {
        let before = self.candidates[var].len();
        self.candidates[var].retain(|&word| keep(word));
        before - self.candidates[var].len()
    }

    /// Replace a variable's candidates outright.
    #[cfg(test)]
    pub(crate) fn set(&mut self, var: VarId, mut candidates: Vec<WordId>) {
        candidates.sort_unstable();
        candidates.dedup();
        self.candidates[var] = candidates;
    }
}
