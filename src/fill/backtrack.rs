use std::time::{Duration, Instant};

use crate::fill::ac3::ac3;
use crate::fill::domains::Domains;
use crate::fill::{consistent, Assignment, FillOutcome, FillStatistics, Filler};
use crate::order::{order_domain_values, select_unassigned_variable};
use crate::puzzle::{Puzzle, VarId};
use crate::word_list::{WordId, WordList};

/// How many explored states between deadline checks.
const INTERRUPT_FREQUENCY: usize = 64;

/// Depth-first fill over an explicit stack of choice points. Keeping the
/// stack as data bounds call depth on large grids and gives the loop a fixed
/// point between choice points at which to honor a deadline.
pub struct BacktrackingFiller {
    deadline: Option<Duration>,
    pub stats: FillStatistics,
}

/// One open decision: a variable, its ordered candidates, and how many have
/// been tried so far.
struct ChoicePoint {
    var: VarId,
    candidates: Vec<WordId>,
    cursor: usize,
}

impl BacktrackingFiller {
    pub fn new() -> BacktrackingFiller {
        BacktrackingFiller {
            deadline: None,
            stats: FillStatistics::default(),
        }
    }

    /// Give up and report `TimedOut` once this much time has elapsed.
    pub fn with_deadline(deadline: Duration) -> BacktrackingFiller {
        BacktrackingFiller {
            deadline: Some(deadline),
            stats: FillStatistics::default(),
        }
    }

    fn open_choice_point(
        &self,
        puzzle: &Puzzle,
        domains: &Domains,
        assignment: &Assignment,
    ) -> ChoicePoint {
        let var = select_unassigned_variable(puzzle, domains, assignment);
        let candidates = order_domain_values(puzzle, domains, assignment, var);
        ChoicePoint {
            var,
            candidates,
            cursor: 0,
        }
    }

    fn deadline_hit(&self, start: Instant) -> bool {
        match self.deadline {
            Some(deadline) => {
                self.stats.states % INTERRUPT_FREQUENCY == 0 && start.elapsed() >= deadline
            }
            None => false,
        }
    }
}

impl Default for BacktrackingFiller {
    fn default() -> Self {
        BacktrackingFiller::new()
    }
}

impl Filler for BacktrackingFiller {
    fn fill(&mut self, puzzle: &Puzzle, words: &WordList) -> FillOutcome {
        let start = Instant::now();

        let mut domains = Domains::seed(puzzle, words);
        self.stats.eliminations += domains.enforce_node_consistency(puzzle, words);

        if !ac3(&mut domains, puzzle, words, None, &mut self.stats) {
            return FillOutcome::NoSolution;
        }

        let mut assignment = Assignment::new(puzzle.variables().len());
        if assignment.is_complete() {
            // A grid with no variables fills trivially.
            return FillOutcome::Filled(assignment.to_solution(puzzle, words));
        }

        let mut stack = vec![self.open_choice_point(puzzle, &domains, &assignment)];

        loop {
            if self.deadline_hit(start) {
                return FillOutcome::TimedOut;
            }

            let frame = match stack.last_mut() {
                Some(frame) => frame,
                // The root choice point ran dry: the tree is exhausted.
                None => return FillOutcome::NoSolution,
            };

            if frame.cursor == frame.candidates.len() {
                // Every candidate here failed; undo the choice one level up
                // and resume there.
                stack.pop();
                self.stats.backtracks += 1;
                if let Some(parent) = stack.last() {
                    assignment.unassign(parent.var);
                }
                continue;
            }

            let var = frame.var;
            let word = frame.candidates[frame.cursor];
            frame.cursor += 1;

            assignment.assign(var, word);
            self.stats.states += 1;

            if !consistent(&assignment, puzzle, words) {
                assignment.unassign(var);
                continue;
            }

            if assignment.is_complete() {
                return FillOutcome::Filled(assignment.to_solution(puzzle, words));
            }

            let next = self.open_choice_point(puzzle, &domains, &assignment);
            stack.push(next);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::BacktrackingFiller;
    use crate::fill::{FillOutcome, Filler, Solution};
    use crate::puzzle::{Direction, Puzzle, Variable};
    use crate::word_list::WordList;
    use std::time::Duration;

    fn word_list(words: &[&str]) -> WordList {
        WordList::new(words.iter().map(|w| String::from(*w)).collect())
    }

    fn solution_word(solution: &Solution, variable: Variable) -> &str {
        solution.get(&variable).map(String::as_str).unwrap()
    }

    #[test]
    fn fills_crossing_variables_with_agreeing_words() {
        // Across (0,0) and down (0,0) share their first letter.
        let puzzle = Puzzle::new(vec![
            vec![true, true, true],
            vec![true, false, false],
            vec![true, false, false],
        ])
        .unwrap();
        let words = word_list(&["cat", "dog", "car"]);

        let mut filler = BacktrackingFiller::new();
        let solution = match filler.fill(&puzzle, &words) {
            FillOutcome::Filled(solution) => solution,
            other => panic!("expected a fill, got {:?}", other),
        };

        let across = solution_word(
            &solution,
            Variable {
                row: 0,
                col: 0,
                direction: Direction::Across,
                length: 3,
            },
        );
        let down = solution_word(
            &solution,
            Variable {
                row: 0,
                col: 0,
                direction: Direction::Down,
                length: 3,
            },
        );

        assert_ne!(across, down);
        assert_eq!(across.as_bytes()[0], down.as_bytes()[0]);
        // Only "cat" and "car" share a first letter in this list.
        assert_eq!(across.as_bytes()[0], b'c');
    }

    #[test]
    fn fills_a_full_grid() {
        let puzzle = Puzzle::new(vec![vec![true; 3]; 3]).unwrap();
        let words = word_list(&["abc", "def", "ghi", "adg", "beh", "cfi"]);

        let mut filler = BacktrackingFiller::new();
        let solution = match filler.fill(&puzzle, &words) {
            FillOutcome::Filled(solution) => solution,
            other => panic!("expected a fill, got {:?}", other),
        };

        assert_eq!(solution.len(), 6);

        // Lengths match, words are unique, crossings agree.
        let mut seen = std::collections::HashSet::new();
        for (variable, word) in &solution {
            assert_eq!(variable.length, word.len());
            assert!(seen.insert(word.clone()));
        }
        for (x, x_var) in puzzle.variables().iter().enumerate() {
            for &y in puzzle.neighbors(x) {
                let y_var = puzzle.variable(y);
                let (i, j) = puzzle.overlap(x, y).unwrap();
                let x_word = solution_word(&solution, *x_var);
                let y_word = solution_word(&solution, y_var);
                assert_eq!(x_word.as_bytes()[i], y_word.as_bytes()[j]);
            }
        }

        assert!(filler.stats.states > 0);
    }

    #[test]
    fn fills_an_isolated_variable_without_propagation() {
        let puzzle = Puzzle::new(vec![vec![true, true, true]]).unwrap();
        let words = word_list(&["cat", "dog"]);

        let mut filler = BacktrackingFiller::new();
        let solution = match filler.fill(&puzzle, &words) {
            FillOutcome::Filled(solution) => solution,
            other => panic!("expected a fill, got {:?}", other),
        };

        assert_eq!(solution.len(), 1);
        assert_eq!(filler.stats.revisions, 0);
        assert_eq!(filler.stats.backtracks, 0);
    }

    #[test]
    fn reports_no_solution_when_uniqueness_cannot_hold() {
        // Two disjoint length-3 slots but only one length-3 word.
        let puzzle = Puzzle::new(vec![
            vec![true, true, true],
            vec![false, false, false],
            vec![true, true, true],
        ])
        .unwrap();
        let words = word_list(&["cat"]);

        let mut filler = BacktrackingFiller::new();
        assert_eq!(filler.fill(&puzzle, &words), FillOutcome::NoSolution);
        assert!(filler.stats.backtracks > 0);
    }

    #[test]
    fn reports_no_solution_for_an_empty_domain() {
        let puzzle = Puzzle::new(vec![vec![true, true, true]]).unwrap();
        let words = word_list(&["to", "abcd"]);

        let mut filler = BacktrackingFiller::new();
        assert_eq!(filler.fill(&puzzle, &words), FillOutcome::NoSolution);
    }

    #[test]
    fn reports_no_solution_when_crossings_cannot_agree() {
        let puzzle = Puzzle::new(vec![
            vec![true, true, true],
            vec![true, false, false],
            vec![true, false, false],
        ])
        .unwrap();
        // No two distinct words share a first letter.
        let words = word_list(&["cat", "dog", "elk"]);

        let mut filler = BacktrackingFiller::new();
        assert_eq!(filler.fill(&puzzle, &words), FillOutcome::NoSolution);
    }

    #[test]
    fn an_expired_deadline_times_out() {
        let puzzle = Puzzle::new(vec![vec![true; 3]; 3]).unwrap();
        let words = word_list(&["abc", "def", "ghi", "adg", "beh", "cfi"]);

        let mut filler = BacktrackingFiller::with_deadline(Duration::ZERO);
        assert_eq!(filler.fill(&puzzle, &words), FillOutcome::TimedOut);
    }
}
