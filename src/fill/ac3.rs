//! Arc-consistency propagation over the overlap constraints, following the
//! classic AC-3 worklist scheme: revise one ordered pair at a time and requeue
//! the arcs a revision may have invalidated, until nothing changes anywhere.

use std::collections::VecDeque;

use crate::fill::domains::Domains;
use crate::fill::FillStatistics;
use crate::puzzle::{Puzzle, VarId};
use crate::word_list::WordList;

/// Make `x` arc-consistent with `y`: drop every candidate of `x` that no
/// candidate of `y` supports at the shared cell. Returns whether the domain
/// of `x` changed. A pair without an overlap is unconstrained and is left
/// untouched.
pub fn revise(
    domains: &mut Domains,
    puzzle: &Puzzle,
    words: &WordList,
    x: VarId,
    y: VarId,
    stats: &mut FillStatistics,
) -> bool {
    stats.revisions += 1;

    let (i, j) = match puzzle.overlap(x, y) {
        Some(overlap) => overlap,
        None => return false,
    };

    // A candidate of x is supported exactly when some candidate of y puts a
    // matching letter in the shared cell, so one pass over y's domain gives
    // the full support set.
    let mut supported = [false; 256];
    for &candidate in domains.candidates(y) {
        supported[words.word(candidate).as_bytes()[j] as usize] = true;
    }

    let removed = domains.retain(x, |word| supported[words.word(word).as_bytes()[i] as usize]);
    stats.eliminations += removed;
    removed > 0
}

/// Propagate until fixpoint. `arcs` seeds the worklist; `None` means every
/// ordered pair of distinct variables. Returns `false` as soon as any domain
/// empties; the puzzle is unfillable and earlier eliminations are not rolled
/// back.
pub fn ac3(
    domains: &mut Domains,
    puzzle: &Puzzle,
    words: &WordList,
    arcs: Option<Vec<(VarId, VarId)>>,
    stats: &mut FillStatistics,
) -> bool {
    let variable_count = puzzle.variables().len();

    let mut queue: VecDeque<(VarId, VarId)> = match arcs {
        Some(arcs) => arcs.into_iter().collect(),
        None => {
            let mut queue = VecDeque::with_capacity(variable_count * variable_count);
            for x in 0..variable_count {
                for y in 0..variable_count {
                    if x != y {
                        queue.push_back((x, y));
                    }
                }
            }
            queue
        }
    };

    while let Some((x, y)) = queue.pop_front() {
        if revise(domains, puzzle, words, x, y, stats) {
            if domains.size(x) == 0 {
                return false;
            }
            // Shrinking x can invalidate consistency for x's other
            // neighbors, so their arcs toward x go back on the worklist.
            for &neighbor in puzzle.neighbors(x) {
                if neighbor != y {
                    queue.push_back((neighbor, x));
                }
            }
        }
    }

    true
}
