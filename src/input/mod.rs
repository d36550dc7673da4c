//! Reads validated numeric values from an interactive line source.
//!
//! Includes:
//! - `read_validated`: generic retry-until-valid reader.
//! - `read_quantity`: the weight/height instantiation.

mod reader;
#[cfg(test)]
mod reader_test;

pub use reader::*;
