//! Game rules for m,n,k games.
//!
//! Pure functions and the stateless [`Evaluator`]. Rules are kept apart from
//! match state so they can be used on any board, including ones that never
//! belonged to a match.

pub mod evaluator;
pub mod win;

pub use evaluator::Evaluator;
pub use win::{Direction, Line, find_line, run_length};
