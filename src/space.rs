use num_traits::Zero;
use std::hash::Hash;
use std::ops::Add;

/// Trait for state spaces explored by best-first search.
///
/// A state space supplies an initial state, a successor generator, and a
/// goal predicate. Data necessary for the problem (move tables, graphs,
/// distance tables) should be stored in the struct that implements this
/// trait.
///
/// Successor generation must be a pure function of the state, produce
/// finitely many successors, and report non-negative step costs. The
/// engine does not validate any of this; violating it silently degrades
/// the search result.
///
/// # Examples
///
/// ```
/// use frontier::prelude::*;
///
/// struct Corridor {
///     length: i32,
/// }
///
/// impl SearchSpace for Corridor {
///     type State = i32;
///     type Cost = i32;
///     type Label = i32;
///
///     fn initial_state(&self) -> Self::State {
///         0
///     }
///
///     fn successors(
///         &self,
///         state: &Self::State,
///     ) -> impl IntoIterator<Item = (Self::Cost, Self::State, Self::Label)> {
///         [*state - 1, *state + 1]
///             .into_iter()
///             .filter(|next| (0..=self.length).contains(next))
///             .map(|next| (1, next, next))
///             .collect::<Vec<_>>()
///     }
///
///     fn is_goal(&self, state: &Self::State) -> bool {
///         *state == self.length
///     }
/// }
///
/// let corridor = Corridor { length: 3 };
/// assert_eq!(corridor.initial_state(), 0);
///
/// let successors: Vec<_> = corridor.successors(&0).into_iter().collect();
/// assert_eq!(successors, vec![(1, 1, 1)]);
///
/// assert!(!corridor.is_goal(&0));
/// assert!(corridor.is_goal(&3));
/// ```
pub trait SearchSpace {
    /// Type of the state.
    type State;
    /// Type of the path cost. Usually `u32` or `f64`.
    type Cost: PartialOrd + Add<Output = Self::Cost> + Zero + Copy;
    /// Type of the move label recorded on the returned path.
    type Label;

    /// Returns the initial state.
    fn initial_state(&self) -> Self::State;

    /// Returns the successors of a state as `(step_cost, state, label)`
    /// tuples.
    ///
    /// The easiest way to implement this method is to return a vector or an
    /// array; returning an iterator avoids allocating when the successors
    /// can be produced lazily.
    fn successors(
        &self,
        state: &Self::State,
    ) -> impl IntoIterator<Item = (Self::Cost, Self::State, Self::Label)>;

    /// Checks whether a state satisfies the goal condition.
    fn is_goal(&self, state: &Self::State) -> bool;
}

/// Trait for estimating the remaining cost from a state to the goal.
///
/// The estimate must be admissible: it never exceeds the true remaining
/// cost of the cheapest completion. The engine trusts the caller on this
/// and does not verify it; an inadmissible estimate degrades the search
/// to a suboptimal (but still terminating) one. An estimate that is
/// identically zero turns best-first search into uniform-cost search.
pub trait Estimate: SearchSpace {
    /// Returns a non-negative lower bound on the remaining cost.
    fn estimate(&self, state: &Self::State) -> Self::Cost;
}

/// Trait for extracting the closed-set key of a state.
///
/// Two states with equal keys are treated as the same state: once one of
/// them has been expanded, the other is never expanded. The key is usually
/// the state itself or a compact encoding of it.
pub trait Keyed {
    /// Type of the state.
    type State;
    /// Type of the key.
    type Key: Hash + Eq;

    /// Returns the key of a state.
    fn key(&self, state: &Self::State) -> Self::Key;
}
