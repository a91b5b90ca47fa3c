use super::trail::Trail;
use crate::algorithms::total_cmp;
use crate::limits::{SearchLimits, Stopwatch};
use crate::space::{Estimate, Keyed, SearchSpace};
use log::debug;
use num_traits::Zero;
use rustc_hash::FxHashSet;
use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::fmt::Display;
use std::hash::Hash;
use std::ops::Add;
use std::rc::Rc;

/// Why a search run stopped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Termination {
    /// A goal state was popped from the frontier.
    Goal,
    /// The frontier emptied without reaching a goal. This is the normal
    /// no-solution outcome, not a fault.
    Exhausted,
    /// The time limit was hit before the search could finish.
    TimeLimit,
    /// The expansion limit was hit before the search could finish.
    ExpansionLimit,
}

/// Result of a best-first search run.
#[derive(Clone, Debug)]
pub struct SearchReport<C, L> {
    /// Accumulated cost of the returned path, `None` when no goal was
    /// reached.
    pub cost: Option<C>,
    /// Move labels of the returned path, empty when no goal was reached.
    pub path: Vec<L>,
    /// Number of states expanded.
    pub expanded: usize,
    /// Number of frontier entries generated.
    pub generated: usize,
    /// Elapsed time in seconds.
    pub time: f64,
    /// Why the run stopped.
    pub termination: Termination,
}

impl<C, L> SearchReport<C, L> {
    /// Returns whether a goal was reached.
    pub fn found(&self) -> bool {
        self.termination == Termination::Goal
    }

    /// Returns whether the run was cut short by a limit rather than
    /// finishing on its own.
    pub fn aborted(&self) -> bool {
        matches!(
            self.termination,
            Termination::TimeLimit | Termination::ExpansionLimit
        )
    }
}

/// Frontier entry ordered by ascending priority, ties broken by insertion
/// order.
struct FrontierEntry<S, C, L> {
    priority: C,
    cost: C,
    seq: usize,
    state: S,
    trail: Rc<Trail<L>>,
}

impl<S, C, L> PartialEq for FrontierEntry<S, C, L> {
    fn eq(&self, other: &Self) -> bool {
        self.seq == other.seq
    }
}

impl<S, C, L> Eq for FrontierEntry<S, C, L> {}

impl<S, C, L> Ord for FrontierEntry<S, C, L>
where
    C: PartialOrd,
{
    fn cmp(&self, other: &Self) -> Ordering {
        // BinaryHeap is a max-heap: reverse the priority comparison so the
        // cheapest entry is popped first, and prefer the older entry on
        // ties.
        total_cmp(&other.priority, &self.priority).then_with(|| other.seq.cmp(&self.seq))
    }
}

impl<S, C, L> PartialOrd for FrontierEntry<S, C, L>
where
    C: PartialOrd,
{
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Best-first search over a state space.
///
/// The frontier is ordered by `accumulated cost + estimate`; with an
/// admissible estimate the first goal popped is optimal, and with a zero
/// estimate the search degrades to uniform-cost search. States are closed
/// when popped; stale frontier entries for already-closed states are
/// discarded without expansion, and successors whose state is already
/// closed are never generated.
///
/// Returns a [`SearchReport`] whose `termination` distinguishes the goal
/// outcome, the exhausted-frontier (no solution) outcome, and the two
/// aborted-by-limit outcomes.
pub fn search<P, S, C, L, K>(space: &P, limits: SearchLimits) -> SearchReport<C, L>
where
    P: SearchSpace<State = S, Cost = C, Label = L> + Estimate + Keyed<State = S, Key = K>,
    C: PartialOrd + Add<Output = C> + Zero + Copy + Display,
    L: Copy,
    K: Hash + Eq,
{
    let watch = Stopwatch::start();
    let mut frontier = BinaryHeap::new();
    let mut closed = FxHashSet::default();
    let mut expanded = 0;
    let mut generated = 0;
    let mut seq = 0;

    let initial = space.initial_state();
    frontier.push(FrontierEntry {
        priority: space.estimate(&initial),
        cost: C::zero(),
        seq,
        state: initial,
        trail: Trail::root(),
    });
    generated += 1;

    let report = |cost, path, expanded, generated, termination| SearchReport {
        cost,
        path,
        expanded,
        generated,
        time: watch.elapsed(),
        termination,
    };

    while let Some(entry) = frontier.pop() {
        if limits.out_of_time(&watch) {
            debug!("time limit reached after {expanded} expansions");

            return report(None, Vec::new(), expanded, generated, Termination::TimeLimit);
        }

        if !closed.insert(space.key(&entry.state)) {
            // Stale entry: a cheaper path to this state was expanded
            // earlier.
            continue;
        }

        if space.is_goal(&entry.state) {
            debug!(
                "goal reached with cost {cost}, expanded: {expanded}, generated: {generated}",
                cost = entry.cost,
            );

            return report(
                Some(entry.cost),
                entry.trail.labels(),
                expanded,
                generated,
                Termination::Goal,
            );
        }

        for (step_cost, successor, label) in space.successors(&entry.state) {
            if closed.contains(&space.key(&successor)) {
                continue;
            }

            let cost = entry.cost + step_cost;
            seq += 1;
            frontier.push(FrontierEntry {
                priority: cost + space.estimate(&successor),
                cost,
                seq,
                state: successor,
                trail: Trail::extend(&entry.trail, label),
            });
            generated += 1;
        }

        expanded += 1;

        if limits.out_of_expansions(expanded) {
            debug!("expansion limit reached after {expanded} expansions");

            return report(
                None,
                Vec::new(),
                expanded,
                generated,
                Termination::ExpansionLimit,
            );
        }
    }

    debug!("frontier exhausted, expanded: {expanded}, generated: {generated}");

    report(None, Vec::new(), expanded, generated, Termination::Exhausted)
}
