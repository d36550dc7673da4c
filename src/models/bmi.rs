//! Body Mass Index calculation and the quantities it is computed from.
//!
//! Includes:
//! - `Quantity`: the prompted measurements (weight and height) with their prompt text,
//!   unit and rejection message.
//! - `BmiReport`: the outcome of a completed session.
//! - `calculate_bmi`, `round_to` and `format_scalar` helpers.

/// Number of decimal places the BMI is reported with.
pub const BMI_DECIMALS: usize = 2;

/// Unit the BMI is reported in.
pub const BMI_UNIT: &str = "kg/m^2";

/// Message shown when the entered text is not a number at all.
pub const INVALID_NUMBER_MESSAGE: &str = "Invalid input. Please enter a number.";

/// A measurement the user is asked to enter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quantity {
    /// Body weight in kilograms.
    Weight,
    /// Body height in meters.
    Height,
}

impl Quantity {
    /// Lowercase name used in messages and logs.
    pub fn name(&self) -> &'static str {
        match self {
            Quantity::Weight => "weight",
            Quantity::Height => "height",
        }
    }

    /// Unit symbol appended when echoing the value back.
    pub fn unit(&self) -> &'static str {
        match self {
            Quantity::Weight => "kg",
            Quantity::Height => "m",
        }
    }

    /// Prompt written before each attempt (no trailing newline).
    pub fn prompt(&self) -> &'static str {
        match self {
            Quantity::Weight => "Enter weight in kg: ",
            Quantity::Height => "Enter height in meters: ",
        }
    }

    /// Message shown when the entered number is not an acceptable value.
    pub fn rejection_message(&self) -> &'static str {
        match self {
            Quantity::Weight => "Please enter a valid weight.",
            Quantity::Height => "Please enter a valid height.",
        }
    }

    /// Line echoing an accepted value back to the user, e.g. `Your weight is: 70.0 kg`.
    pub fn confirmation(&self, value: f64) -> String {
        format!(
            "Your {} is: {} {}",
            self.name(),
            format_scalar(value),
            self.unit()
        )
    }
}

/// Returns true for values a weight or height may take: strictly positive (rejects NaN).
pub fn is_valid_measurement(value: &f64) -> bool {
    *value > 0.0
}

/// Result of a completed calculation session.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BmiReport {
    pub weight: f64,
    pub height: f64,
    pub bmi: f64,
}

impl BmiReport {
    /// Builds a report by computing the BMI for the given measurements.
    pub fn new(weight: f64, height: f64) -> Self {
        Self {
            weight,
            height,
            bmi: calculate_bmi(weight, height),
        }
    }

    /// Final labelled result line, e.g. `Your BMI is: 22.86 kg/m^2`.
    pub fn summary(&self) -> String {
        format!("Your BMI is: {} {}", format_scalar(self.bmi), BMI_UNIT)
    }
}

/// Computes `weight / height²` rounded to two decimal places.
///
/// Callers must pass a non-zero height; the input reader only ever yields
/// strictly positive values.
pub fn calculate_bmi(weight: f64, height: f64) -> f64 {
    round_to(weight / height.powi(2), BMI_DECIMALS)
}

/// Rounds `value` to `places` decimal places.
///
/// Rounding works on the exact binary value of `value`, so `23.925` (stored as
/// `23.92500000000000071...`) becomes `23.93`. Only exact ties go to the even neighbour.
pub fn round_to(value: f64, places: usize) -> f64 {
    format!("{:.*}", places, value).parse().unwrap_or(value)
}

/// Formats a number for display.
///
/// Whole values keep one decimal (`70.0`), others use the shortest round-trip form
/// (`1.75`). Magnitudes below `1e-4` or from `1e16` up switch to exponent notation
/// with a signed two-digit exponent (`1e-05`, `1.25e+17`).
pub fn format_scalar(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    if value != 0.0 {
        let scientific = format!("{:e}", value);
        if let Some((mantissa, exponent)) = scientific.split_once('e') {
            if let Ok(exponent) = exponent.parse::<i32>() {
                if !(-4..16).contains(&exponent) {
                    let sign = if exponent < 0 { '-' } else { '+' };
                    return format!("{}e{}{:02}", mantissa, sign, exponent.abs());
                }
            }
        }
    }
    if value.fract() == 0.0 {
        format!("{:.1}", value)
    } else {
        format!("{}", value)
    }
}
