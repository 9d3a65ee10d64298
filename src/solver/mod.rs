//! Word tracing on a Boggle board
//!
//! Start discovery, neighbor enumeration, the greedy path selector, and the
//! orchestrator that runs one attempt per starting tile.

mod adjacency;
mod engine;
mod selector;
mod starts;

pub use adjacency::selectable;
pub use engine::{SearchMode, SearchOutcome, Searcher};
pub use selector::{AttemptOutcome, PathSelector, SearchState, select};
pub use starts::starting_tiles;
