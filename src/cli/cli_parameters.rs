use crate::Kinetics::arrhenius::ReactionOrder;
use crate::Kinetics::kinetics_errors::KineticsError;
use std::io::{BufRead, Write};

/// One trimmed line, `None` at end of input.
pub fn read_line<R: BufRead>(input: &mut R) -> Result<Option<String>, KineticsError> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

pub fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    text: &str,
) -> Result<Option<String>, KineticsError> {
    write!(out, "\x1b[36m{}\x1b[0m", text)?;
    out.flush()?;
    read_line(input)
}

/// `None` on end of input or when the answer is not a number.
pub fn ask_number<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    text: &str,
) -> Result<Option<f64>, KineticsError> {
    let Some(answer) = prompt(input, out, text)? else {
        return Ok(None);
    };
    match answer.replace(',', ".").parse::<f64>() {
        Ok(value) => Ok(Some(value)),
        Err(_) => {
            writeln!(out, "Invalid number: '{}'", answer)?;
            Ok(None)
        }
    }
}

pub fn ask_order<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
) -> Result<Option<ReactionOrder>, KineticsError> {
    writeln!(out, "\nReaction Order:")?;
    writeln!(out, "1. {}", ReactionOrder::First)?;
    writeln!(out, "2. {}", ReactionOrder::Second)?;
    let Some(answer) = prompt(input, out, "Enter choice (1-2): ")? else {
        return Ok(None);
    };
    match answer.parse::<ReactionOrder>() {
        Ok(order) => Ok(Some(order)),
        Err(e) => {
            writeln!(out, "{}", e)?;
            Ok(None)
        }
    }
}
