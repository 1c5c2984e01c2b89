//! Crossword filling as constraint satisfaction: derive the variables of a
//! grid, narrow their candidate words by node and arc consistency, then run a
//! backtracking search with MRV/degree variable selection and
//! least-constraining-value ordering.

pub mod fill;
pub mod puzzle;
pub mod word_list;

mod order;

pub use fill::backtrack::BacktrackingFiller;
pub use fill::{FillOutcome, FillStatistics, Filler, Solution};
pub use puzzle::{Direction, Puzzle, VarId, Variable};
pub use word_list::{WordId, WordList};

/// Fill `puzzle` from `words`, returning the completed assignment or `None`
/// when no arrangement of the word list fits.
pub fn solve(puzzle: &Puzzle, words: &WordList) -> Option<Solution> {
    match BacktrackingFiller::new().fill(puzzle, words) {
        FillOutcome::Filled(solution) => Some(solution),
        FillOutcome::NoSolution | FillOutcome::TimedOut => None,
    }
}

#[cfg(test)]
mod tests {
    use crate::{solve, Puzzle, WordList};
    use std::fs::File;

    fn default_words() -> WordList {
        let file = File::open("testdata/words.json").unwrap();
        let words: Vec<String> =
            serde_json::from_reader(file).expect("JSON was not well-formatted");
        WordList::new(words)
    }

    #[test]
    fn solves_a_full_grid_with_the_default_word_list() {
        let puzzle = Puzzle::new(vec![vec![true; 3]; 3]).unwrap();
        let words = default_words();

        let solution = solve(&puzzle, &words).expect("grid should be fillable");

        assert_eq!(solution.len(), puzzle.variables().len());
        for (variable, word) in &solution {
            assert_eq!(variable.length, word.len());
        }
        for (x, x_var) in puzzle.variables().iter().enumerate() {
            for &y in puzzle.neighbors(x) {
                let (i, j) = puzzle.overlap(x, y).unwrap();
                let x_word = &solution[x_var];
                let y_word = &solution[&puzzle.variable(y)];
                assert_eq!(x_word.as_bytes()[i], y_word.as_bytes()[j]);
            }
        }
    }

    #[test]
    fn reports_none_for_an_unfillable_grid() {
        let puzzle = Puzzle::new(vec![vec![true; 6]]).unwrap();
        let words = default_words();

        // The list carries no six-letter words.
        assert_eq!(solve(&puzzle, &words), None);
    }
}
