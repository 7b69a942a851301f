// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

use std::{fmt, io::Write};

use clap::ValueEnum;
use itertools::Itertools;

use crate::errors::GcError;
use crate::gc::GcResult;
use crate::seq::fasta::wrap_lines;
use crate::seq::record::SeqRecord;

pub const RESULTS_TITLE: &str = "GC-content analysis results:";
pub const TRUNCATION_NOTE: &str = "... [Output Truncated] ...";

#[derive(Copy, Clone, Debug, Default, PartialEq, ValueEnum)]
pub enum ReportFormat {
    #[default]
    #[clap(name = "text")]
    #[clap(alias = "t")]
    Text,
    #[clap(name = "json")]
    #[clap(alias = "j")]
    Json,
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ReportFormat::Text => "text",
            ReportFormat::Json => "json",
        };
        write!(f, "{}", s)
    }
}

/// Percentage shown with six decimals, e.g. "50.000000%".
pub fn format_pct(gc_content: f64) -> String {
    format!("{:.6}%", gc_content)
}

pub fn write_report<W: Write>(
    writer: &mut W,
    results: &[GcResult],
    format: ReportFormat,
) -> Result<(), GcError> {
    match format {
        ReportFormat::Text => {
            writeln!(writer, "{}", RESULTS_TITLE)?;
            for result in results {
                writeln!(writer, "{}", result.header)?;
                writeln!(writer, "GC-content: {}", format_pct(result.gc_content))?;
                writeln!(writer)?;
            }
        }
        ReportFormat::Json => {
            serde_json::to_writer_pretty(&mut *writer, results).map_err(std::io::Error::from)?;
            writeln!(writer)?;
        }
    }
    Ok(())
}

// Header plus the first `preview_lines` wrapped lines of a generated sequence. Only the display
// is cut short; the record itself is untouched.
pub fn write_generated_preview<W: Write>(
    writer: &mut W,
    record: &SeqRecord,
    width: usize,
    preview_lines: usize,
) -> Result<(), GcError> {
    writeln!(writer, "\nGenerated FASTA Format:")?;
    writeln!(writer, "{}", record.header)?;
    let mut lines = wrap_lines(&record.sequence, width);
    let shown = lines.by_ref().take(preview_lines).join("\n");
    if !shown.is_empty() {
        writeln!(writer, "{}", shown)?;
    }
    if lines.next().is_some() {
        writeln!(writer, "{}", TRUNCATION_NOTE)?;
    }
    Ok(())
}
