use crate::error::{AppError, Result};
use crate::models::{is_valid_measurement, Quantity, INVALID_NUMBER_MESSAGE};
use std::io::{BufRead, Write};
use tracing::{debug, info};

/// Prompts on `output` and reads lines from `input` until one is accepted.
///
/// Each attempt writes `prompt` without a newline, reads a single line and hands the
/// trimmed text to `parse`. Text that does not parse gets [`INVALID_NUMBER_MESSAGE`];
/// a parsed value failing `accept` gets `rejection`. There is no attempt limit.
///
/// # Errors
///
/// Returns `AppError::InputClosed` with `field` when `input` reaches end of stream,
/// or `AppError::Io` if reading or writing fails.
pub fn read_validated<R, W, T, P, A>(
    input: &mut R,
    output: &mut W,
    field: &'static str,
    prompt: &str,
    parse: P,
    accept: A,
    rejection: &str,
) -> Result<T>
where
    R: BufRead,
    W: Write,
    P: Fn(&str) -> Option<T>,
    A: Fn(&T) -> bool,
{
    let mut line = String::new();
    loop {
        write!(output, "{}", prompt)?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            debug!("Input closed while waiting for {}", field);
            return Err(AppError::InputClosed(field));
        }

        let entered = line.trim();
        match parse(entered) {
            Some(value) if accept(&value) => return Ok(value),
            Some(_) => {
                debug!("Rejected {} value: {:?}", field, entered);
                writeln!(output, "{}", rejection)?;
            },
            None => {
                debug!("Unparseable {} input: {:?}", field, entered);
                writeln!(output, "{}", INVALID_NUMBER_MESSAGE)?;
            },
        }
    }
}

/// Parses a floating point number, returning `None` for anything non-numeric.
///
/// Single underscores between digits are accepted as group separators (`1_000.5`).
pub fn parse_number(text: &str) -> Option<f64> {
    if !text.contains('_') {
        return text.parse::<f64>().ok();
    }

    let chars: Vec<char> = text.chars().collect();
    let grouped_correctly = chars.iter().enumerate().all(|(i, c)| {
        *c != '_'
            || (i > 0
                && chars[i - 1].is_ascii_digit()
                && chars.get(i + 1).map_or(false, |next| next.is_ascii_digit()))
    });
    if !grouped_correctly {
        return None;
    }
    text.replace('_', "").parse::<f64>().ok()
}

/// Reads a strictly positive weight or height, re-prompting until one is entered.
pub fn read_quantity<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    quantity: Quantity,
) -> Result<f64> {
    let value = read_validated(
        input,
        output,
        quantity.name(),
        quantity.prompt(),
        parse_number,
        is_valid_measurement,
        quantity.rejection_message(),
    )?;
    info!("Accepted {}: {} {}", quantity.name(), value, quantity.unit());
    Ok(value)
}
