use std::io::Write;

use serde::Serialize;

use crate::error::AppResult;

pub fn write<W: Write, T: Serialize>(out: &mut W, value: &T) -> AppResult<()> {
    let payload = serde_json::to_string_pretty(value)?;
    writeln!(out, "{payload}")?;
    out.flush()?;
    Ok(())
}
