//! User input prompts for the interactive session.
//!
//! The session only needs one capability from the terminal: read a line of
//! text given a prompt. That capability is expressed as the `LineReader`
//! trait so tests can drive the session with a scripted reader instead of a
//! real terminal.

use crate::error::Result;
use dialoguer::{theme::ColorfulTheme, Input};

/// Blocking "read one line of text given a prompt" capability.
pub trait LineReader {
    /// Displays `prompt` and blocks until the user enters a line.
    ///
    /// Returns the raw text as entered, without a trailing newline.
    fn read_line(&mut self, prompt: &str) -> Result<String>;
}

/// `LineReader` over `dialoguer` prompts on the real terminal.
#[derive(Default)]
pub struct ConsoleReader {
    theme: ColorfulTheme,
}

impl LineReader for ConsoleReader {
    fn read_line(&mut self, prompt: &str) -> Result<String> {
        // Empty input is allowed here on purpose: blank names must reach
        // the registry so its validation can reject them.
        let line = Input::<String>::with_theme(&self.theme)
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()?;

        Ok(line)
    }
}
