use anyhow::{bail, Context, Result};
use log::debug;
use std::io::{BufRead, Write};

/// Whether `w` splits into two positive even parts.
pub fn can_divide(w: i32) -> bool {
    w > 2 && w % 2 == 0
}

pub fn verdict(w: i32) -> &'static str {
    if can_divide(w) {
        "YES"
    } else {
        "NO"
    }
}

/// Reads a single integer from the first line of `input` and writes `YES` or `NO`.
pub fn solve(mut input: impl BufRead, mut output: impl Write) -> Result<()> {
    let mut line = String::new();
    input.read_line(&mut line).context("Failed to read input")?;

    let raw = line.trim();
    if raw.is_empty() {
        bail!("Missing input: expected an integer w");
    }
    let w: i32 = raw
        .parse()
        .with_context(|| format!("Invalid integer input: {:?}", raw))?;
    debug!("Read w = {}", w);

    writeln!(output, "{}", verdict(w))?;
    output.flush()?;
    Ok(())
}
