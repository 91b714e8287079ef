/// Labeling policy knobs: default labels and the color wheel used for
/// new labels.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelingConfig {
    /// Label for samples outside every segment
    pub default_label: String,

    /// Label stored when the user applies an empty label
    pub empty_label: String,

    /// Hue rotation per newly seen label, in degrees (wraps at 360)
    pub hue_step: u32,
    pub saturation: u8,
    pub lightness: u8,
}

impl Default for LabelingConfig {
    fn default() -> Self {
        Self {
            default_label: "Normal".into(),
            empty_label: "N".into(),
            hue_step: 60,
            saturation: 70,
            lightness: 50,
        }
    }
}
