//! Ordering heuristics for the backtracking search: minimum-remaining-values
//! variable selection with a degree tie-break, and least-constraining-value
//! candidate ordering.

use std::cmp::Reverse;

use crate::fill::domains::Domains;
use crate::fill::Assignment;
use crate::puzzle::{Puzzle, VarId};
use crate::word_list::WordId;

/// Pick the unassigned variable with the fewest remaining candidates,
/// breaking ties toward the variable with the most neighbors and then toward
/// the lowest id, so selection is deterministic.
pub(crate) fn select_unassigned_variable(
    puzzle: &Puzzle,
    domains: &Domains,
    assignment: &Assignment,
) -> VarId {
    (0..puzzle.variables().len())
        .filter(|&var| !assignment.is_assigned(var))
        .min_by_key(|&var| (domains.size(var), Reverse(puzzle.neighbors(var).len()), var))
        .expect("no unassigned variable left to select")
}

/// Rank `var`'s candidates so the least constraining come first: ascending by
/// how many unassigned neighbors currently list the same word. Membership is
/// the whole test, a coarse stand-in for counting the options the word would
/// actually knock out at the shared cell. The sort is stable, so tied words
/// stay in ascending id (alphabetical) order.
pub(crate) fn order_domain_values(
    puzzle: &Puzzle,
    domains: &Domains,
    assignment: &Assignment,
    var: VarId,
) -> Vec<WordId> {
    let mut candidates: Vec<WordId> = domains.candidates(var).to_vec();

    let unassigned_neighbors: Vec<VarId> = puzzle
        .neighbors(var)
        .iter()
        .copied()
        .filter(|&neighbor| !assignment.is_assigned(neighbor))
        .collect();

    candidates.sort_by_key(|&word| {
        unassigned_neighbors
            .iter()
            .filter(|&&neighbor| domains.contains(neighbor, word))
            .count()
    });

    candidates
}
