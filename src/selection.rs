//! Menu of input files and resolution of the user's choice.

use std::io::{BufRead, Write};

use log::debug;

use crate::error::{Result, StatsError};

/// Menu number to filename.
pub const FILE_TABLE: &[(u8, &str)] = &[(1, "File 1.txt"), (2, "File 2.txt"), (3, "File 3.txt")];

/// Write the file menu followed by the choice prompt and flush, so the prompt
/// is visible before input is read.
pub fn write_menu<W: Write>(out: &mut W) -> Result<()> {
    writeln!(out, "Choose a file to read:")?;
    for (number, filename) in FILE_TABLE {
        writeln!(out, "{}. {}", number, filename)?;
    }
    write!(out, "Enter choice (1-{}): ", FILE_TABLE.len())?;
    out.flush()?;
    Ok(())
}

/// Map one line of user input to a filename from [FILE_TABLE]. Only the line
/// terminator is stripped; surrounding spaces make the choice invalid.
pub fn resolve(input: &str) -> Result<&'static str> {
    let choice = input
        .strip_suffix('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .unwrap_or(input);
    let number = choice
        .parse::<i64>()
        .map_err(|_| StatsError::InvalidSelection(choice.to_string()))?;

    FILE_TABLE
        .iter()
        .find(|(entry, _)| i64::from(*entry) == number)
        .map(|(_, filename)| *filename)
        .ok_or_else(|| StatsError::InvalidSelection(choice.to_string()))
}

/// Read one line from `input` and resolve it. End of input counts as an
/// invalid choice. Bytes that are not UTF-8 are replaced rather than
/// rejected, so they too end up as an invalid choice.
pub fn read_selection<R: BufRead>(input: &mut R) -> Result<&'static str> {
    let mut raw = Vec::new();
    let read = input
        .read_until(b'\n', &mut raw)
        .map_err(StatsError::ReadError)?;
    if read == 0 {
        return Err(StatsError::InvalidSelection(String::new()));
    }

    let line = String::from_utf8_lossy(&raw);
    let filename = resolve(&line)?;
    debug!("Choice `{}` resolved to `{}`", line.trim_end(), filename);
    Ok(filename)
}
