// CLI module
// Public interface for the interactive terminal

mod terminal;

pub use terminal::TerminalPrompter;
