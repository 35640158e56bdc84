// Configuration module
// Public interface for settings and prompt book loading

pub mod constants;
mod loader;
mod settings;

pub use loader::{default_settings_path, load_prompt_book, load_settings};
pub use settings::{journal_home, Settings};
