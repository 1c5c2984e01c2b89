use rustc_hash::{FxHashMap, FxHashSet};

use crate::puzzle::{Puzzle, VarId, Variable};
use crate::word_list::{WordId, WordList};

pub mod ac3;
pub mod backtrack;
pub mod domains;

/// A completed fill: every variable mapped to its word.
pub type Solution = FxHashMap<Variable, String>;

/// Outcome of a fill attempt. Running out of words and running out of time
/// are ordinary results, not errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FillOutcome {
    Filled(Solution),
    NoSolution,
    TimedOut,
}

/// An engine that tries to fill a puzzle from a word list.
pub trait Filler {
    fn fill(&mut self, puzzle: &Puzzle, words: &WordList) -> FillOutcome;
}

/// Counters describing how much work a fill performed.
#[derive(Debug, Default, Clone)]
pub struct FillStatistics {
    /// Tentative assignments explored by the search.
    pub states: usize,
    /// Choice points exhausted and undone.
    pub backtracks: usize,
    /// Calls to `ac3::revise`.
    pub revisions: usize,
    /// Candidate words removed while narrowing the domains.
    pub eliminations: usize,
}

/// A partial assignment of words to variables, indexed by `VarId`. A slot
/// holds `None` until the search commits a word to it.
#[derive(Debug, Clone)]
pub(crate) struct Assignment {
    chosen: Vec<Option<WordId>>,
    assigned: usize,
}

impl Assignment {
    pub(crate) fn new(variable_count: usize) -> Assignment {
        Assignment {
            chosen: vec![None; variable_count],
            assigned: 0,
        }
    }

    pub(crate) fn assign(&mut self, var: VarId, word: WordId) {
        if self.chosen[var].is_none() {
            self.assigned += 1;
        }
        self.chosen[var] = Some(word);
    }

    pub(crate) fn unassign(&mut self, var: VarId) {
        if self.chosen[var].is_some() {
            self.assigned -= 1;
        }
        self.chosen[var] = None;
    }

    pub(crate) fn get(&self, var: VarId) -> Option<WordId> {
        self.chosen[var]
    }

    pub(crate) fn is_assigned(&self, var: VarId) -> bool {
        self.chosen[var].is_some()
    }

    pub(crate) fn is_complete(&self) -> bool {
        self.assigned == self.chosen.len()
    }

    pub(crate) fn to_solution(&self, puzzle: &Puzzle, words: &WordList) -> Solution {
        self.chosen
            .iter()
            .enumerate()
            .filter_map(|(var, &word)| {
                word.map(|word| (puzzle.variable(var), words.word(word).to_string()))
            })
            .collect()
    }
}

/// Check the whole partial assignment: no word used twice anywhere in the
/// grid, every word the right length, and agreeing letters wherever two
/// assigned variables cross.
pub(crate) fn consistent(assignment: &Assignment, puzzle: &Puzzle, words: &WordList) -> bool {
    let mut used = FxHashSet::default();

    for var in 0..puzzle.variables().len() {
        let word = match assignment.get(var) {
            Some(word) => word,
            None => continue,
        };

        if !used.insert(word) {
            return false;
        }

        if words.word(word).len() != puzzle.variable(var).length {
            return false;
        }

        for &neighbor in puzzle.neighbors(var) {
            let other = match assignment.get(neighbor) {
                Some(other) => other,
                None => continue,
            };
            let (i, j) = puzzle
                .overlap(var, neighbor)
                .expect("neighboring variables must overlap");
            if words.word(word).as_bytes()[i] != words.word(other).as_bytes()[j] {
                return false;
            }
        }
    }

    true
}
