use csv::{QuoteStyle, Terminator, WriterBuilder};

use crate::codec::timestamp::format_timestamp;
use crate::error::{LabelError, Result};
use crate::models::Sample;
use crate::segmentation::LabelResolver;

pub const EXPORT_COLUMNS: [&str; 3] = ["Timestamp", "ValueNumeric", "Label"];

/// Render `series` as labeled CSV, one `\n`-terminated line per sample in
/// series order.
///
/// Fields are never quoted: a label containing a comma yields an extra column.
pub fn serialize_labeled(series: &[Sample], resolver: &LabelResolver<'_>) -> Result<String> {
    let mut writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Never)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::with_capacity(32 + series.len() * 40));

    writer.write_record(EXPORT_COLUMNS)?;
    for sample in series {
        writer.write_record([
            format_timestamp(&sample.timestamp).as_str(),
            sample.value.to_string().as_str(),
            resolver.resolve(sample),
        ])?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|err| LabelError::Csv(err.to_string()))?;
    String::from_utf8(bytes).map_err(|err| LabelError::Csv(err.to_string()))
}

/// File name for a labeled export of `tag`; `data` when no tag is selected.
pub fn export_file_name(tag: Option<&str>) -> String {
    let tag = tag.map(str::trim).filter(|t| !t.is_empty()).unwrap_or("data");
    format!("{tag}_labelled.csv")
}
