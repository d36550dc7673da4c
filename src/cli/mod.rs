//! Handles Command Line Interface (CLI) related functionalities.
//!
//! Includes parsing arguments, sequencing the interactive prompts and printing
//! the calculated result.

mod commands;

pub use commands::*;
