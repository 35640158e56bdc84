// Journal - interactive journaling assistant
// Library exports

pub mod cli;
pub mod collect;
pub mod config;
pub mod errors;
pub mod goals;
pub mod prompts;
pub mod session;
