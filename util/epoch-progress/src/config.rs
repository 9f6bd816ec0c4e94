use serde::{Deserialize, Serialize};

use crate::LabelStyle;

/// The label of an epoch which has reached its end.
pub const DEFAULT_ENDED_LABEL: &str = "Epoch ended";
/// The label of an epoch whose bounds are not loaded yet.
pub const DEFAULT_UNKNOWN_LABEL: &str = "";

/// Label policy of the progress computation.
///
/// It is the `[progress]` table of `explorer.toml`, every field is optional.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProgressConfig {
    /// How the remaining time is rendered.
    pub style: LabelStyle,
    /// The label once the epoch has ended.
    pub ended_label: String,
    /// The label while the epoch bounds are unknown.
    pub unknown_label: String,
}

impl Default for ProgressConfig {
    fn default() -> Self {
        ProgressConfig {
            style: LabelStyle::default(),
            ended_label: DEFAULT_ENDED_LABEL.to_owned(),
            unknown_label: DEFAULT_UNKNOWN_LABEL.to_owned(),
        }
    }
}
