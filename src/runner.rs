//! One run of the program: menu, load, display, statistics.

use std::io::{BufRead, Write};
use std::path::Path;

use log::{debug, warn};

use crate::display::{two_decimals, write_numbers};
use crate::error::{Result, StatsError};
use crate::loader::load_numbers;
use crate::selection::{read_selection, write_menu};
use crate::stats::Statistics;

/// Returns at the first error without writing a diagnostic for it.
pub fn run<R, W>(input: &mut R, out: &mut W, dir: &Path) -> Result<Statistics>
where
    R: BufRead,
    W: Write,
{
    write_menu(out)?;
    let filename = read_selection(input)?;

    let mut numbers = load_numbers(&dir.join(filename))?;
    numbers.sort_unstable();

    writeln!(out, "Numbers in the file:")?;
    write_numbers(out, &numbers)?;

    let stats = Statistics::from_sorted(&numbers);
    writeln!(out, "Mean: {}", two_decimals(stats.mean))?;
    writeln!(out, "Median: {}", two_decimals(stats.median))?;
    out.flush()?;

    debug!(
        "Mean {} and median {} over {} numbers",
        stats.mean,
        stats.median,
        numbers.len()
    );
    Ok(stats)
}

pub fn run_and_report<R, W>(input: &mut R, out: &mut W, dir: &Path) -> Result<Option<Statistics>>
where
    R: BufRead,
    W: Write,
{
    match run(input, out, dir) {
        Ok(stats) => Ok(Some(stats)),
        Err(err @ StatsError::Output(_)) => Err(err),
        Err(err) => {
            warn!("Run aborted: {}", err);
            writeln!(out, "{}", err.user_message())?;
            out.flush()?;
            Ok(None)
        }
    }
}
