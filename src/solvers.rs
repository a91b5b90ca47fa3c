//! Search engines: best-first search and bound-and-prune enumeration.

mod best_first;
mod branch_bound;
mod trail;

pub use best_first::{search, SearchReport, Termination};
pub use branch_bound::{optimize, sort_candidates, Candidate, Enumeration, Selection};
pub use trail::Trail;
