//! Defines the data structures and models used throughout the application.
//!
//! This covers the measured quantities the user is prompted for and the BMI
//! calculation performed on them.

mod bmi;

pub use bmi::*;
