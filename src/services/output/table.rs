use std::io::{self, Write};

use chrono::Local;

use crate::error::Result;
use crate::models::{ColumnProfile, ColumnStats, DatasetProfile};

const RULE: &str = "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━";
const MAX_SAMPLE_TEXT: usize = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QualityVerdict {
    HighMissing,
    Acceptable,
    Clean,
}

impl QualityVerdict {
    pub fn from_missing_pct(pct: f64) -> Self {
        if pct > 10.0 {
            QualityVerdict::HighMissing
        } else if pct > 0.0 {
            QualityVerdict::Acceptable
        } else {
            QualityVerdict::Clean
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            QualityVerdict::HighMissing => "⚠️  Warning: High percentage of missing data",
            QualityVerdict::Acceptable => "✓ Acceptable level of missing data",
            QualityVerdict::Clean => "✓ No missing data detected",
        }
    }
}

pub fn write_table<W: Write>(profile: &DatasetProfile, writer: &mut W) -> Result<()> {
    writeln!(writer, "\n📊 Dataset Profile: {}", profile.file_name)?;
    writeln!(writer, "{RULE}")?;
    writeln!(writer, "Rows:    {}", profile.row_count)?;
    writeln!(writer, "Columns: {}", profile.column_count)?;
    writeln!(
        writer,
        "Time:    {}\n",
        profile
            .processed_time
            .with_timezone(&Local)
            .format("%Y-%m-%d %H:%M:%S")
    )?;

    let mut table = TextTable::new(&["Column", "Type", "Missing", "Missing %", "Unique", "Stats"]);
    for col in &profile.columns {
        table.push_row(vec![
            col.name.clone(),
            col.inferred_type.to_string(),
            col.missing_count.to_string(),
            format!("{:.1}%", col.missing_pct),
            col.unique_count.to_string(),
            stats_summary(col),
        ]);
    }
    table.render(writer)?;

    let (columns_with_missing, total_missing) = profile.missing_totals();
    let total_cells = profile.total_cells();
    let overall_pct = if total_cells == 0 {
        0.0
    } else {
        total_missing as f64 / total_cells as f64 * 100.0
    };

    writeln!(writer, "\n🔍 Data Quality Summary:")?;
    writeln!(writer, "{RULE}")?;
    writeln!(
        writer,
        "Columns with missing values: {} / {}",
        columns_with_missing, profile.column_count
    )?;
    writeln!(
        writer,
        "Total missing cells: {} / {} ({:.2}%)",
        total_missing, total_cells, overall_pct
    )?;
    writeln!(writer, "{}", QualityVerdict::from_missing_pct(overall_pct).message())?;
    writeln!(writer)?;

    Ok(())
}

/// Multi-line cell content for the Stats column.
pub fn stats_summary(col: &ColumnProfile) -> String {
    let mut parts = Vec::new();

    match &col.stats {
        Some(ColumnStats::Numeric(stats)) => {
            parts.push(format!("Range: [{:.2}, {:.2}]", stats.min, stats.max));
            parts.push(format!("Mean: {:.2}", stats.mean));
            parts.push(format!("Median: {:.2}", stats.median));
        }
        Some(ColumnStats::Text(stats)) => {
            parts.push(format!("Len: [{}, {}]", stats.min_length, stats.max_length));
            parts.push(format!("Avg: {:.1}", stats.avg_length));
        }
        None => {}
    }

    if !col.sample_values.is_empty() {
        parts.push(format!("Ex: {}", truncate_samples(&col.sample_values.join(", "))));
    }

    parts.join("\n")
}

fn truncate_samples(samples: &str) -> String {
    if samples.chars().count() <= MAX_SAMPLE_TEXT {
        return samples.to_string();
    }
    let kept: String = samples.chars().take(MAX_SAMPLE_TEXT - 3).collect();
    format!("{kept}...")
}

/// Bordered grid with a separator after every row. Cells may span several lines.
struct TextTable {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl TextTable {
    fn new(headers: &[&str]) -> Self {
        Self {
            headers: headers.iter().map(|h| h.to_uppercase()).collect(),
            rows: Vec::new(),
        }
    }

    fn push_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    fn widths(&self) -> Vec<usize> {
        let mut widths: Vec<usize> = self.headers.iter().map(|h| h.chars().count()).collect();
        for row in &self.rows {
            for (idx, cell) in row.iter().enumerate() {
                let widest = cell.lines().map(|l| l.chars().count()).max().unwrap_or(0);
                if let Some(width) = widths.get_mut(idx) {
                    *width = (*width).max(widest);
                }
            }
        }
        widths
    }

    fn render<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        let widths = self.widths();
        let separator = widths
            .iter()
            .map(|w| "-".repeat(w + 2))
            .collect::<Vec<_>>()
            .join("+");
        let separator = format!("+{separator}+");

        writeln!(writer, "{separator}")?;
        let header_cells: Vec<String> = self
            .headers
            .iter()
            .zip(&widths)
            .map(|(h, &w)| format!(" {:^w$} ", h, w = w))
            .collect();
        writeln!(writer, "|{}|", header_cells.join("|"))?;
        writeln!(writer, "{separator}")?;

        for row in &self.rows {
            let cell_lines: Vec<Vec<&str>> = row.iter().map(|c| c.lines().collect()).collect();
            let height = cell_lines.iter().map(Vec::len).max().unwrap_or(0).max(1);

            for line_idx in 0..height {
                let line: Vec<String> = widths
                    .iter()
                    .enumerate()
                    .map(|(col_idx, &w)| {
                        let text = cell_lines
                            .get(col_idx)
                            .and_then(|lines| lines.get(line_idx))
                            .copied()
                            .unwrap_or("");
                        format!(" {:<w$} ", text, w = w)
                    })
                    .collect();
                writeln!(writer, "|{}|", line.join("|"))?;
            }
            writeln!(writer, "{separator}")?;
        }

        Ok(())
    }
}
