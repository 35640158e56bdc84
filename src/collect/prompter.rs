// Interactive I/O capabilities the collection strategies depend on
//
// The run loop owns one implementation and lends it to every strategy in turn.

use crate::errors::Result;

pub trait Prompter {
    /// Show context text ahead of a question
    fn describe(&mut self, text: &str);

    /// Show a plain informational line
    fn say(&mut self, text: &str);

    /// Show a warning (e.g. before re-asking)
    fn warn(&mut self, text: &str);

    /// Read one line of text
    fn line(&mut self, label: &str) -> Result<String>;

    /// Read a buffered block of text, ended by an out-of-band signal rather than a blank line
    fn block(&mut self, label: &str) -> Result<String>;

    /// Yes / no question
    fn confirm(&mut self, label: &str, default: bool) -> Result<bool>;

    /// Pick exactly one of `choices`
    fn select(&mut self, label: &str, choices: &[String], default: Option<&str>) -> Result<String>;

    /// Pick any subset of `choices`
    fn multiselect(
        &mut self,
        label: &str,
        choices: &[String],
        defaults: &[String],
    ) -> Result<Vec<String>>;
}

/// Blank = nothing but whitespace
pub fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}
