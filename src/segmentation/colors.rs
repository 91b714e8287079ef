use std::collections::HashMap;

use crate::segmentation::config::LabelingConfig;

/// Assigns each distinct label a color, in order of first appearance.
///
/// The n-th new label gets hue `n * hue_step % 360`, so a label's color
/// depends only on when it was introduced, never on how many segments use it.
#[derive(Debug, Clone)]
pub struct ColorAllocator {
    assigned: HashMap<String, String>,
    hue_step: u32,
    saturation: u8,
    lightness: u8,
}

impl Default for ColorAllocator {
    fn default() -> Self {
        Self::new(&LabelingConfig::default())
    }
}

impl ColorAllocator {
    pub fn new(config: &LabelingConfig) -> Self {
        Self {
            assigned: HashMap::new(),
            hue_step: config.hue_step,
            saturation: config.saturation,
            lightness: config.lightness,
        }
    }

    /// Color for `label`, allocating one if the label is new.
    pub fn color_for(&mut self, label: &str) -> String {
        if let Some(color) = self.assigned.get(label) {
            return color.clone();
        }

        let seen = self.assigned.len() as u64;
        let hue = seen * u64::from(self.hue_step) % 360;
        let color = format!("hsl({}, {}%, {}%)", hue, self.saturation, self.lightness);
        self.assigned.insert(label.to_string(), color.clone());
        color
    }

    /// Previously assigned color, without allocating.
    pub fn get(&self, label: &str) -> Option<&str> {
        self.assigned.get(label).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.assigned.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assigned.is_empty()
    }

    pub fn clear(&mut self) {
        self.assigned.clear();
    }
}
