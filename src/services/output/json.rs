use std::io::Write;

use crate::error::Result;
use crate::models::DatasetProfile;

/// Pretty-printed with two-space indentation, followed by a newline.
pub fn write_json<W: Write>(profile: &DatasetProfile, writer: &mut W) -> Result<()> {
    serde_json::to_writer_pretty(&mut *writer, profile)?;
    writeln!(writer)?;
    Ok(())
}

pub fn read_json(input: &str) -> Result<DatasetProfile> {
    Ok(serde_json::from_str(input)?)
}
