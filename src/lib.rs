pub mod algorithms;
pub mod io;
pub mod limits;
pub mod puzzle;
pub mod roadmap;
pub mod roster;
pub mod solvers;
mod space;

pub use space::{Estimate, Keyed, SearchSpace};

pub mod prelude {
    pub use super::limits::SearchLimits;
    pub use super::solvers::{
        optimize, search, Candidate, Enumeration, SearchReport, Selection, Termination,
    };
    pub use super::{Estimate, Keyed, SearchSpace};
}
