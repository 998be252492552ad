//! Writers for the exported formats

use anyhow::Context;
use serde::Serialize;
use std::io::Write;

/// WHR lines, newline terminated
pub fn write_lines<W: Write>(mut writer: W, lines: &[String]) -> crate::error::Result<()> {
    for line in lines {
        writeln!(writer, "{}", line)?;
    }
    writer.flush()?;
    Ok(())
}

/// Rows as CSV with a header taken from the field names
pub fn write_csv<T: Serialize, W: Write>(writer: W, rows: &[T]) -> crate::error::Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for row in rows {
        csv_writer
            .serialize(row)
            .context("Failed to write CSV row")?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Any serializable value as pretty JSON
pub fn write_json<T: Serialize, W: Write>(mut writer: W, value: &T) -> crate::error::Result<()> {
    serde_json::to_writer_pretty(&mut writer, value).context("Failed to write JSON")?;
    writeln!(writer)?;
    Ok(())
}
