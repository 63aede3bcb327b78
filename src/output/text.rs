use std::io::Write;

use crate::error::AppResult;

const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

pub fn clear_screen<W: Write>(out: &mut W) -> AppResult<()> {
    write!(out, "{CLEAR_SCREEN}")?;
    out.flush()?;
    Ok(())
}

pub fn write_block<W: Write>(out: &mut W, block: &str) -> AppResult<()> {
    writeln!(out, "{block}")?;
    out.flush()?;
    Ok(())
}
