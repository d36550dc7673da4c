use crate::error::{AppError, Result};
use crate::input::{parse_number, read_quantity};
use crate::models::{is_valid_measurement, BmiReport, Quantity};
use clap::Parser;
use colored::*;
use std::io::{BufRead, Write};
use tracing::info;

/// Greeting printed before the first prompt.
pub const WELCOME_BANNER: &str =
    "Welcome to the BMI calculator! Enter your weight and height in meters.";

/// CLI Tool for Body Mass Index calculation
#[derive(Parser, Debug, Default)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Weight in kilograms; skips the weight prompt when given
    #[arg(long, value_name = "KG", value_parser = parse_measurement_arg)]
    pub weight: Option<f64>,

    /// Height in meters; skips the height prompt when given
    #[arg(long, value_name = "M", value_parser = parse_measurement_arg)]
    pub height: Option<f64>,
}

/// Validates a measurement passed on the command line with the same rules as the prompts.
fn parse_measurement_arg(text: &str) -> Result<f64> {
    match parse_number(text.trim()) {
        Some(value) if is_valid_measurement(&value) => Ok(value),
        Some(_) => Err(AppError::Cli(format!(
            "'{}' must be a positive number",
            text
        ))),
        None => Err(AppError::Cli(format!("'{}' is not a number", text))),
    }
}

/// CLI application
pub struct App {
    weight: Option<f64>,
    height: Option<f64>,
    styled: bool,
}

impl App {
    /// Create a new CLI application from parsed arguments
    pub fn new(cli: Cli) -> Self {
        Self {
            weight: cli.weight,
            height: cli.height,
            styled: false,
        }
    }

    /// Enable terminal colours for the banner
    pub fn styled(mut self, styled: bool) -> Self {
        self.styled = styled;
        self
    }

    /// Run one calculation session: greet, gather both measurements, then report the BMI.
    pub fn run<R: BufRead, W: Write>(&self, input: &mut R, output: &mut W) -> Result<BmiReport> {
        if self.styled {
            writeln!(output, "{}", WELCOME_BANNER.cyan().bold())?;
        } else {
            writeln!(output, "{}", WELCOME_BANNER)?;
        }

        let weight = self.measurement(input, output, Quantity::Weight, self.weight)?;
        let height = self.measurement(input, output, Quantity::Height, self.height)?;

        let report = BmiReport::new(weight, height);
        info!(
            "Calculated BMI {} for weight {} kg and height {} m",
            report.bmi, report.weight, report.height
        );

        writeln!(output)?;
        writeln!(output, "{}", report.summary())?;
        output.flush()?;

        Ok(report)
    }

    /// Use the pre-supplied value if any, otherwise prompt for it; then echo it back.
    fn measurement<R: BufRead, W: Write>(
        &self,
        input: &mut R,
        output: &mut W,
        quantity: Quantity,
        preset: Option<f64>,
    ) -> Result<f64> {
        let value = match preset {
            Some(value) => {
                info!("Using {} from command line: {}", quantity.name(), value);
                value
            },
            None => read_quantity(input, output, quantity)?,
        };
        writeln!(output, "{}", quantity.confirmation(value))?;
        Ok(value)
    }
}
