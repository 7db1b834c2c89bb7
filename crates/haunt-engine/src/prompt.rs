//! Interactive hunter name entry.

use std::io::{BufRead, Write};

use crate::error::EngineError;

/// Ask for up to `max` hunter names. A blank line or end of input stops
/// early; surrounding whitespace is trimmed and repeated names are asked
/// again.
pub fn read_hunter_names<R: BufRead, W: Write>(
    mut input: R,
    mut output: W,
    max: usize,
) -> Result<Vec<String>, EngineError> {
    let mut names: Vec<String> = Vec::with_capacity(max);
    let mut line = String::new();
    while names.len() < max {
        write!(
            output,
            "Hunter {} name (blank to start): ",
            names.len().saturating_add(1)
        )?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            break;
        }
        let name = line.trim();
        if name.is_empty() {
            break;
        }
        if names.iter().any(|n| n == name) {
            writeln!(output, "{name} is already on the team")?;
            continue;
        }
        names.push(name.to_owned());
    }
    Ok(names)
}
