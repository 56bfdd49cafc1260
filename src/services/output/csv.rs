use std::io::Write;

use super::format_float;
use crate::error::Result;
use crate::models::DatasetProfile;

const HEADERS: [&str; 10] = [
    "Column",
    "Type",
    "Missing Count",
    "Missing %",
    "Unique Count",
    "Min",
    "Max",
    "Mean",
    "Median",
    "Std Dev",
];

pub fn write_csv<W: Write>(profile: &DatasetProfile, writer: &mut W) -> Result<()> {
    let mut out = ::csv::Writer::from_writer(writer);
    out.write_record(HEADERS)?;

    for col in &profile.columns {
        let stats = col.numeric_stats();
        out.write_record([
            col.name.clone(),
            col.inferred_type.to_string(),
            col.missing_count.to_string(),
            format!("{:.2}", col.missing_pct),
            col.unique_count.to_string(),
            format_float(stats.map(|s| s.min)),
            format_float(stats.map(|s| s.max)),
            format_float(stats.map(|s| s.mean)),
            format_float(stats.map(|s| s.median)),
            format_float(stats.map(|s| s.std_dev)),
        ])?;
    }

    out.flush()?;
    Ok(())
}
