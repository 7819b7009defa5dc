/*!
 * Operator input collection
 */

use std::io::{BufRead, Write};

use crate::error::{CourierError, Result};

/// Everything the operator supplies for one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunInput {
    /// The array to be sorted remotely
    pub values: Vec<i64>,

    /// The message to be delivered remotely
    pub message: String,
}

/// Collect the run input: array size, that many integers one per line,
/// then the message text.
///
/// Prompts are written to `out`. Malformed numeric input is fatal; the run
/// terminates instead of re-prompting.
pub fn collect<R: BufRead, W: Write>(reader: &mut R, out: &mut W) -> Result<RunInput> {
    write!(out, "Array size: ")?;
    out.flush()?;

    let size_line = read_line(reader)?;
    let size: usize = size_line.trim().parse().map_err(|_| {
        CourierError::Input(format!(
            "array size must be a number, got {:?}",
            size_line.trim()
        ))
    })?;

    if size > 0 {
        writeln!(out, "Enter the {} array elements, one per line:", size)?;
    }

    let mut values = Vec::with_capacity(size);
    for _ in 0..size {
        let line = read_line(reader)?;
        let value: i64 = line.trim().parse().map_err(|_| {
            CourierError::Input(format!(
                "array element must be an integer, got {:?}",
                line.trim()
            ))
        })?;
        values.push(value);
    }

    write!(out, "Message to send: ")?;
    out.flush()?;

    let message = read_line(reader)?
        .trim_end_matches(['\n', '\r'])
        .to_string();

    Ok(RunInput { values, message })
}

fn read_line<R: BufRead>(reader: &mut R) -> Result<String> {
    let mut line = String::new();
    let read = reader.read_line(&mut line)?;
    if read == 0 {
        return Err(CourierError::Input("unexpected end of input".to_string()));
    }
    Ok(line)
}
