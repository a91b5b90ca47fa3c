use super::trail::Trail;
use crate::algorithms::{compare_density, fractional_completion, total_cmp};
use crate::limits::{SearchLimits, Stopwatch};
use log::debug;
use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::rc::Rc;

/// One selectable item: an identifier, the value it contributes, and the
/// budget it consumes. Immutable once loaded.
#[derive(Clone, Debug, PartialEq)]
pub struct Candidate<I> {
    pub id: I,
    pub value: f64,
    pub cost: f64,
}

/// Sorts candidates by value density (value per unit of cost) in
/// descending order.
///
/// The enumerator requires this ordering: it is what makes the fractional
/// completion bound valid. The sort is stable, so candidates with equal
/// density keep their load order and repeated runs stay deterministic.
pub fn sort_candidates<I>(candidates: &mut [Candidate<I>]) {
    candidates.sort_by(|a, b| compare_density((a.value, a.cost), (b.value, b.cost)));
}

/// A complete selection: the chosen members with their inclusion
/// fractions, and the value and cost totals.
///
/// The enumerator only produces whole inclusions (fraction 1.0); the
/// fraction is part of the member type because divisible domains report
/// partial membership in their output.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Selection<I> {
    pub members: Vec<(I, f64)>,
    pub total_value: f64,
    pub total_cost: f64,
}

impl<I> Selection<I> {
    /// The empty selection with value 0, the result when nothing fits.
    pub fn empty() -> Self {
        Self {
            members: Vec::new(),
            total_value: 0.0,
            total_cost: 0.0,
        }
    }

    /// Returns whether no candidate was selected.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

/// Result of a bound-and-prune run.
#[derive(Clone, Debug)]
pub struct Enumeration<I> {
    /// Best selection found. The empty selection is a valid outcome, not
    /// an error.
    pub selection: Selection<I>,
    /// Number of branch nodes expanded.
    pub explored: usize,
    /// Elapsed time in seconds.
    pub time: f64,
    /// Whether every non-pruned branch was considered. `false` means a
    /// limit cut the run short and the selection is only the best found
    /// so far.
    pub complete: bool,
}

/// Partial selection ordered by descending optimistic bound, ties broken
/// by insertion order.
struct Branch {
    bound: f64,
    value: f64,
    spent: f64,
    depth: usize,
    picks: Rc<Trail<usize>>,
    seq: usize,
}

impl PartialEq for Branch {
    fn eq(&self, other: &Self) -> bool {
        self.seq == other.seq
    }
}

impl Eq for Branch {}

impl Ord for Branch {
    fn cmp(&self, other: &Self) -> Ordering {
        total_cmp(&self.bound, &other.bound).then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for Branch {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Maximizes the total value of a selection whose total cost stays within
/// `budget`, by branch and bound over the fixed candidate order.
///
/// `candidates` must be sorted by [`sort_candidates`]; the enumerator does
/// not check this, and an unsorted input invalidates the pruning bound.
/// Candidate costs must be positive.
///
/// Each tree level decides one candidate: include it (only when its cost
/// fits the remaining budget) or leave it out. A branch is pruned when an
/// optimistic completion of its budget (whole candidates in density
/// order, then a fraction of the first one that no longer fits) cannot
/// strictly beat the incumbent. Branches are explored best-bound-first
/// with include before exclude, so equal-value optima resolve to the
/// first one found and repeated runs return identical selections.
pub fn optimize<I>(
    candidates: &[Candidate<I>],
    budget: f64,
    limits: SearchLimits,
) -> Enumeration<I>
where
    I: Clone,
{
    let watch = Stopwatch::start();
    let mut frontier = BinaryHeap::new();
    let mut best = Selection::empty();
    let mut best_value = 0.0;
    let mut explored = 0;
    let mut seq = 0;
    let mut complete = true;

    let suffix_bound = |depth: usize, remaining: f64| {
        fractional_completion(
            remaining,
            candidates[depth..].iter().map(|c| (c.value, c.cost)),
        )
    };

    if budget > 0.0 {
        let bound = suffix_bound(0, budget);

        if bound > best_value {
            frontier.push(Branch {
                bound,
                value: 0.0,
                spent: 0.0,
                depth: 0,
                picks: Trail::root(),
                seq,
            });
        }
    }

    while let Some(branch) = frontier.pop() {
        if limits.out_of_time(&watch) || limits.out_of_expansions(explored) {
            debug!("enumeration cut short after {explored} branches");
            complete = false;
            break;
        }

        // The incumbent may have improved since this branch was pushed.
        if branch.bound <= best_value {
            continue;
        }

        if branch.depth == candidates.len() {
            if branch.value > best_value {
                debug!(
                    "new incumbent: value {value}, cost {spent}",
                    value = branch.value,
                    spent = branch.spent,
                );

                best_value = branch.value;
                best = Selection {
                    members: branch
                        .picks
                        .labels()
                        .into_iter()
                        .map(|i| (candidates[i].id.clone(), 1.0))
                        .collect(),
                    total_value: branch.value,
                    total_cost: branch.spent,
                };
            }

            continue;
        }

        let candidate = &candidates[branch.depth];

        if candidate.cost <= budget - branch.spent {
            let value = branch.value + candidate.value;
            let spent = branch.spent + candidate.cost;
            let bound = value + suffix_bound(branch.depth + 1, budget - spent);

            if bound > best_value {
                seq += 1;
                frontier.push(Branch {
                    bound,
                    value,
                    spent,
                    depth: branch.depth + 1,
                    picks: Trail::extend(&branch.picks, branch.depth),
                    seq,
                });
            }
        }

        let bound = branch.value + suffix_bound(branch.depth + 1, budget - branch.spent);

        if bound > best_value {
            seq += 1;
            frontier.push(Branch {
                bound,
                value: branch.value,
                spent: branch.spent,
                depth: branch.depth + 1,
                picks: branch.picks.clone(),
                seq,
            });
        }

        explored += 1;
    }

    debug!(
        "enumeration finished: value {value}, {explored} branches explored",
        value = best_value,
    );

    Enumeration {
        selection: best,
        explored,
        time: watch.elapsed(),
        complete,
    }
}
