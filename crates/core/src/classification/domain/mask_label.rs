use std::fmt;

use serde::Serialize;

/// Mask-wearing category predicted for a face.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MaskLabel {
    WithoutMask,
    WithMask,
    MaskWearedIncorrect,
}

/// Labels in model output order: `LABELS[i]` names score `i`.
pub const LABELS: [MaskLabel; 3] = [
    MaskLabel::WithoutMask,
    MaskLabel::WithMask,
    MaskLabel::MaskWearedIncorrect,
];

impl MaskLabel {
    pub fn from_index(index: usize) -> Option<Self> {
        LABELS.get(index).copied()
    }

    pub fn as_str(self) -> &'static str {
        match self {
            MaskLabel::WithoutMask => "without_mask",
            MaskLabel::WithMask => "with_mask",
            MaskLabel::MaskWearedIncorrect => "mask_weared_incorrect",
        }
    }
}

impl fmt::Display for MaskLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
