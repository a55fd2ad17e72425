//! Human-readable and JSON report output

use crate::report::{Aggregate, VerificationReport};
use owo_colors::OwoColorize;
use playprep_core::config::VerifyConfig;
use serde::Serialize;
use std::io::{self, Write};

/// Marker for an entry that exists
pub const PRESENT_MARKER: &str = "✅";
/// Marker for an entry that is missing
pub const MISSING_MARKER: &str = "❌";

const BANNER_WIDTH: usize = 60;
const RULE_WIDTH: usize = 40;

/// Options controlling the text report
#[derive(Debug, Clone, Default)]
pub struct RenderOptions {
    /// Colourize the aggregate verdict
    pub color: bool,
    /// Steps listed when every file is present
    pub next_steps: Vec<String>,
    /// Document the closing line points to
    pub details_doc: Option<String>,
}

impl RenderOptions {
    /// Options taken from the verify configuration, without colour
    pub fn from_config(config: &VerifyConfig) -> Self {
        Self {
            color: false,
            next_steps: config.next_steps.clone(),
            details_doc: Some(config.details_doc.clone()).filter(|d| !d.is_empty()),
        }
    }

    /// Enable or disable colour
    #[must_use]
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }
}

/// Write the status report
///
/// Exactly one line is written per entry, in report order, as
/// `<marker> <label>: <path>`.
pub fn render_report(report: &VerificationReport, options: &RenderOptions, out: &mut impl Write) -> io::Result<()> {
    let banner = "=".repeat(BANNER_WIDTH);
    let rule = "-".repeat(RULE_WIDTH);

    writeln!(out, "{banner}")?;
    writeln!(out, "GOOGLE PLAY PUBLISHING FILES VERIFICATION")?;
    writeln!(out, "{banner}")?;
    writeln!(out)?;

    writeln!(out, "Checking required files:")?;
    writeln!(out, "{rule}")?;
    for status in &report.entries {
        let marker = if status.present { PRESENT_MARKER } else { MISSING_MARKER };
        writeln!(out, "{marker} {}: {}", status.entry.label, status.entry.path.display())?;
    }

    writeln!(out)?;
    writeln!(out, "{rule}")?;
    match report.aggregate() {
        Aggregate::AllPresent => {
            let verdict = format!("{PRESENT_MARKER} ALL REQUIRED FILES ARE PRESENT");
            if options.color {
                writeln!(out, "{}", verdict.green().bold())?;
            } else {
                writeln!(out, "{verdict}")?;
            }
            if !options.next_steps.is_empty() {
                writeln!(out)?;
                writeln!(out, "Next steps:")?;
                for (i, step) in options.next_steps.iter().enumerate() {
                    writeln!(out, "{}. {step}", i + 1)?;
                }
            }
        }
        Aggregate::SomeMissing => {
            let verdict = format!("{MISSING_MARKER} SOME FILES ARE MISSING");
            if options.color {
                writeln!(out, "{}", verdict.red().bold())?;
            } else {
                writeln!(out, "{verdict}")?;
            }
            writeln!(out, "Please check the list above and ensure all required files are present.")?;
        }
    }

    if let Some(doc) = &options.details_doc {
        writeln!(out)?;
        writeln!(out, "For detailed instructions, see {doc}")?;
    }

    Ok(())
}

#[derive(Serialize)]
struct JsonReport<'a> {
    aggregate: Aggregate,
    all_present: bool,
    total: usize,
    present: usize,
    #[serde(flatten)]
    report: &'a VerificationReport,
}

/// Write the report as pretty-printed JSON
pub fn render_json(report: &VerificationReport, out: &mut impl Write) -> playprep_core::Result<()> {
    let json = JsonReport {
        aggregate: report.aggregate(),
        all_present: report.all_present(),
        total: report.entries.len(),
        present: report.present_count(),
        report,
    };
    serde_json::to_writer_pretty(&mut *out, &json)?;
    writeln!(out)?;
    Ok(())
}

/// Write a failed run as the JSON form of `error`
pub fn render_error_json(error: &playprep_core::Error, out: &mut impl Write) -> playprep_core::Result<()> {
    serde_json::to_writer_pretty(&mut *out, &error.to_report())?;
    writeln!(out)?;
    Ok(())
}
