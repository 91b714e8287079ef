use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::codec::{self, format_timestamp};
use crate::models::Selection;
use crate::series::commands::load_series_file;
use crate::session::LabelingSession;
use crate::settings::Settings;
use crate::log_info;

const ENABLE_LOGS: bool = true;

/// Inputs shared by every command that works on a labeled series.
#[derive(Debug, Clone, Default)]
pub struct LabelingInput {
    pub series: PathBuf,
    pub selections: Option<PathBuf>,
    /// Positional removals, applied in order after all selections are added.
    pub remove: Vec<usize>,
}

pub fn load_selections(path: &Path) -> Result<Vec<Selection>> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read selections from {}", path.display()))?;
    serde_json::from_str(&text)
        .with_context(|| format!("Invalid selections file {}", path.display()))
}

/// Load the series, apply every selection as a label, then perform removals.
pub fn build_session(settings: &Settings, input: &LabelingInput) -> Result<LabelingSession> {
    let mut session = LabelingSession::new(settings);
    load_series_file(&mut session, &input.series)?;

    if let Some(path) = &input.selections {
        for selection in load_selections(path)? {
            session.apply_label(selection.range(), &selection.label);
        }
    }

    for &index in &input.remove {
        session
            .remove_label(index)
            .with_context(|| format!("Cannot remove segment {index}"))?;
    }

    Ok(session)
}

/// Print the segment table: index, label, start, end, color.
pub fn list_segments<W: Write>(settings: &Settings, input: &LabelingInput, out: &mut W) -> Result<()> {
    let session = build_session(settings, input)?;
    for (index, segment) in session.segments().iter().enumerate() {
        writeln!(
            out,
            "{index}\t{}\t{}\t{}\t{}",
            segment.label,
            format_timestamp(&segment.start),
            format_timestamp(&segment.end),
            segment.color
        )?;
    }
    Ok(())
}

/// Print the chart feed as pretty JSON.
pub fn chart<W: Write>(settings: &Settings, input: &LabelingInput, out: &mut W) -> Result<()> {
    let session = build_session(settings, input)?;
    serde_json::to_writer_pretty(&mut *out, &session.chart_feed())?;
    writeln!(out)?;
    Ok(())
}

/// Where the labeled CSV should go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportTarget {
    Stdout,
    File(PathBuf),
}

impl ExportTarget {
    /// `-` means stdout; no path means `<tag>_labelled.csv` in the current
    /// directory.
    pub fn resolve(output: Option<&Path>, tag: Option<&str>) -> Self {
        match output {
            Some(path) if path == Path::new("-") => ExportTarget::Stdout,
            Some(path) => ExportTarget::File(path.to_path_buf()),
            None => ExportTarget::File(PathBuf::from(codec::export_file_name(tag))),
        }
    }
}

/// Write the labeled export. Returns the file written, if any.
pub fn export<W: Write>(
    settings: &Settings,
    input: &LabelingInput,
    tag: Option<&str>,
    output: Option<&Path>,
    stdout: &mut W,
) -> Result<Option<PathBuf>> {
    let session = build_session(settings, input)?;
    let csv = session.export_csv()?;
    let tag = tag.or(session.source());

    match ExportTarget::resolve(output, tag) {
        ExportTarget::Stdout => {
            stdout.write_all(csv.as_bytes())?;
            Ok(None)
        }
        ExportTarget::File(path) => {
            fs::write(&path, csv)
                .with_context(|| format!("Failed to write export to {}", path.display()))?;
            log_info!(
                "Exported {} samples to {}",
                session.series().len(),
                path.display()
            );
            Ok(Some(path))
        }
    }
}
