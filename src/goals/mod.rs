// Goal tracking
//
// Goals outlive a single run: they are loaded before the session, offered for
// re-selection, and the resulting list replaces the stored one wholesale.

mod book;
mod goal;

pub use book::GoalBook;
pub use goal::{ensure_unique_names, Goal};
