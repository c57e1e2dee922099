use crate::features::Feature;

/// Rendered output of one feature.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub feature: Feature,
    /// Text rows, without line terminators.
    pub rows: Vec<String>,
}

impl Artifact {
    pub fn new(feature: Feature, rows: Vec<String>) -> Self {
        Self { feature, rows }
    }
}
