use std::fs;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};

use crate::session::{LabelingSession, LoadReport};
use crate::settings::Settings;
use crate::stats::source_name;

/// Read a series CSV into `session`, naming the series after the file.
pub fn load_series_file(session: &mut LabelingSession, path: &Path) -> Result<LoadReport> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read series from {}", path.display()))?;
    let name = path
        .file_name()
        .map(|name| source_name(&name.to_string_lossy()).to_string());
    Ok(session.load_csv(&text, name))
}

/// Print the stats row (name, min, max, standard deviation) for a series file.
pub fn stats<W: Write>(settings: &Settings, path: &Path, out: &mut W) -> Result<()> {
    let mut session = LabelingSession::new(settings);
    load_series_file(&mut session, path)?;

    let row = session
        .stats_row()
        .with_context(|| format!("No usable samples in {}", path.display()))?;
    writeln!(out, "{}", row.format(settings.stats_precision))?;
    Ok(())
}
