//! Command handling and the interactive session loop.
//!
//! `App` owns the record registry and implements the two user-facing
//! operations (register an animal, look up a fee). `Session` is the
//! read-evaluate loop on top: it prompts for an action, gathers the inputs
//! that action needs, invokes `App`, and prints the outcome. Validation and
//! not-found failures are recovered here (printed, then forgotten), so the
//! loop only ever ends through the explicit `exit` action.

use crate::cli::prompt::LineReader;
use crate::error::{AppError, Result};
use crate::registry::Registry;
use clap::{ArgAction, Parser};
use colored::*;
use std::io::Write;
use tracing::{debug, error, info};

/// CLI tool for pet shelter adoption record keeping.
///
/// All record operations run through the interactive session; the argument
/// surface only configures the process itself.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Increase log verbosity (-v: info, -vv: debug)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

/// Application state: the registry plus the operations the session exposes.
pub struct App {
    registry: Registry,
}

impl App {
    /// Creates the application with an empty registry.
    pub fn new() -> Self {
        Self {
            registry: Registry::new(),
        }
    }

    /// Read access to the registry (session-end logging and tests).
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Registers an animal from raw user input and prints a confirmation.
    ///
    /// The fee arrives as text and is parsed here; parse failures are
    /// reported as the same `InvalidRecord` error as a negative fee or a
    /// blank name, so nothing unparseable is ever stored.
    ///
    /// # Errors
    ///
    /// Returns `AppError::InvalidRecord` for invalid input, or an I/O error
    /// from writing the confirmation.
    pub fn add(&mut self, name: &str, fee_text: &str, out: &mut impl Write) -> Result<()> {
        let fee = parse_fee(fee_text)?;
        self.registry.add(name, fee)?;

        writeln!(out, "{} added with a fee of ${}.", name, fee)?;
        Ok(())
    }

    /// Looks up an animal's adoption fee and prints it.
    ///
    /// # Errors
    ///
    /// Returns `AppError::NotFound` if no record matches, or an I/O error
    /// from writing the result.
    pub fn fee(&self, name: &str, out: &mut impl Write) -> Result<()> {
        let fee = self.registry.adoption_fee(name)?;

        writeln!(out, "{}'s adoption fee is ${}.", name, fee)?;
        Ok(())
    }
}

/// Parses user-entered fee text into a number.
///
/// Surrounding whitespace is not meaningful in line-based input and is
/// trimmed. Text that does not parse maps to `InvalidRecord`; text that
/// parses to a non-finite value (e.g. "NaN") is left for the registry's
/// range check to reject.
fn parse_fee(text: &str) -> Result<f64> {
    text.trim()
        .parse::<f64>()
        .map_err(|_| AppError::InvalidRecord)
}

/// The interactive command loop.
///
/// Reads input through a `LineReader` and writes all user-facing output to
/// the owned `Write` sink (stdout in production, a byte buffer in tests).
pub struct Session<R, W> {
    app: App,
    input: R,
    out: W,
}

impl<R: LineReader, W: Write> Session<R, W> {
    /// Creates a session over `app`, reading from `input` and writing to `out`.
    pub fn new(app: App, input: R, out: W) -> Self {
        Self { app, input, out }
    }

    /// Runs the loop until the user chooses `exit`.
    ///
    /// Action matching is case-insensitive. Validation and not-found
    /// failures are printed and the loop continues; only infrastructure
    /// failures (prompt I/O) end the session early.
    ///
    /// # Errors
    ///
    /// Returns an error only if reading input or writing output fails.
    pub fn run(&mut self) -> Result<()> {
        writeln!(
            self.out,
            "{}",
            "Welcome to the Pet Shelter System".cyan().bold()
        )?;

        loop {
            let action = self
                .input
                .read_line("Choose an action: 'add', 'fee', or 'exit'")?
                .to_lowercase();

            match action.as_str() {
                "add" => {
                    let name = self.input.read_line("Enter the animal's name")?;
                    let fee_text = self.input.read_line("Enter the adoption fee")?;

                    if let Err(e) = self.app.add(&name, &fee_text, &mut self.out) {
                        error!("Failed to register {:?}: {}", name, e);
                        writeln!(self.out, "{}", e.to_string().red())?;
                    }
                },
                "fee" => {
                    let name = self
                        .input
                        .read_line("Enter the animal's name to find its adoption fee")?;

                    if let Err(e) = self.app.fee(&name, &mut self.out) {
                        error!("Fee lookup failed for {:?}: {}", name, e);
                        writeln!(self.out, "{}", e.to_string().red())?;
                    }
                },
                "exit" => {
                    writeln!(self.out, "{}", "Goodbye!".green())?;
                    break;
                },
                _ => {
                    writeln!(
                        self.out,
                        "Invalid action. Please choose 'add', 'fee', or 'exit'."
                    )?;
                },
            }
        }

        if self.app.registry().is_empty() {
            debug!("Session ended with no records stored");
        } else {
            info!(
                "Session ended with {} record(s) stored",
                self.app.registry().len()
            );
        }

        Ok(())
    }
}
