use crate::codec::{self, Parsed};
use crate::error::Result;
use crate::models::{Sample, Segment, TimeRange};
use crate::segmentation::{ChartFeed, ColorAllocator, LabelResolver, LabelingConfig, SegmentStore};
use crate::series::SeriesStore;
use crate::settings::Settings;
use crate::stats::{self, StatsRow, Summary};
use crate::{log_info, log_warn};

const ENABLE_LOGS: bool = true;

/// Row counts of a CSV load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadReport {
    pub loaded: usize,
    pub skipped: usize,
}

/// All state of one labeling session: the loaded series, the segments drawn
/// over it and the label color map.
///
/// The color map lives for the whole session, so a label keeps its color
/// across series loads and segment removals.
#[derive(Debug, Clone)]
pub struct LabelingSession {
    config: LabelingConfig,
    clear_segments_on_load: bool,
    series: SeriesStore,
    segments: SegmentStore,
    colors: ColorAllocator,
    source: Option<String>,
}

impl Default for LabelingSession {
    fn default() -> Self {
        Self::new(&Settings::default())
    }
}

impl LabelingSession {
    pub fn new(settings: &Settings) -> Self {
        let config = settings.labeling();
        Self {
            colors: ColorAllocator::new(&config),
            config,
            clear_segments_on_load: settings.clear_segments_on_load,
            series: SeriesStore::new(),
            segments: SegmentStore::new(),
            source: None,
        }
    }

    /// Replace the series. Existing segments are dropped unless the session
    /// was configured to keep them across loads.
    pub fn load_series(&mut self, samples: Vec<Sample>, source: Option<String>) {
        if self.clear_segments_on_load {
            self.segments.clear();
        } else if !self.segments.is_empty() {
            log_warn!(
                "Keeping {} segments from the previous series",
                self.segments.len()
            );
        }

        self.series.load(samples);
        log_info!(
            "Loaded {} samples from {}",
            self.series.len(),
            source.as_deref().unwrap_or("<unnamed>")
        );
        self.source = source;
    }

    /// Parse `text` as a series CSV and load it.
    pub fn load_csv(&mut self, text: &str, source: Option<String>) -> LoadReport {
        let Parsed { rows, skipped } = codec::parse_samples_detailed(text);
        if skipped > 0 {
            log_warn!("Skipped {skipped} malformed rows");
        }
        let loaded = rows.len();
        self.load_series(rows, source);
        LoadReport { loaded, skipped }
    }

    pub fn series(&self) -> &[Sample] {
        self.series.current()
    }

    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    pub fn segments(&self) -> &[Segment] {
        self.segments.all()
    }

    /// Label the selected range. An empty label is stored as the configured
    /// empty label ("N" by default).
    pub fn apply_label(&mut self, range: TimeRange, label: &str) -> Segment {
        let label = if label.is_empty() {
            self.config.empty_label.as_str()
        } else {
            label
        };
        self.segments.add(range, label, &mut self.colors)
    }

    pub fn remove_label(&mut self, index: usize) -> Result<Segment> {
        self.segments.remove_at(index)
    }

    pub fn remove_label_by_id(&mut self, id: &str) -> Result<Segment> {
        self.segments.remove_by_id(id)
    }

    pub fn color_of(&self, label: &str) -> Option<&str> {
        self.colors.get(label)
    }

    pub fn resolver(&self) -> LabelResolver<'_> {
        LabelResolver::new(self.segments.all(), &self.config.default_label)
    }

    pub fn summary(&self) -> Result<Summary> {
        stats::summarize(self.series.current())
    }

    pub fn stats_row(&self) -> Result<StatsRow> {
        Ok(StatsRow {
            name: self.source.clone().unwrap_or_default(),
            summary: self.summary()?,
        })
    }

    pub fn chart_feed(&self) -> ChartFeed {
        ChartFeed::build(self.series.current(), self.segments.all())
    }

    pub fn export_csv(&self) -> Result<String> {
        codec::serialize_labeled(self.series.current(), &self.resolver())
    }

    pub fn export_file_name(&self) -> String {
        codec::export_file_name(self.source.as_deref())
    }

    /// Forget the series, segments and color assignments.
    pub fn reset(&mut self) {
        self.series.clear();
        self.segments.clear();
        self.colors.clear();
        self.source = None;
    }
}
