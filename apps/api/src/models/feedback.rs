use serde::{Deserialize, Serialize};

/// Whether a piece of feedback affirms what the resume already does well
/// or suggests an improvement. Drives glyph and color selection in the
/// report components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TipKind {
    Good,
    Improve,
}

/// A single suggestion shown in the ATS score panel.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Suggestion {
    #[serde(rename = "type")]
    pub kind: TipKind,
    pub tip: String,
}

/// A detailed tip shown in the feedback breakdown. Superset of `Suggestion`:
/// carries a long-form explanation alongside the short label.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tip {
    #[serde(rename = "type")]
    pub kind: TipKind,
    pub tip: String,
    /// Long-form explanation. Absent values render as an empty block.
    #[serde(default)]
    pub explanation: Option<String>,
}

/// One aspect of feedback with its own score and ordered tip list.
/// Tip order is rendering order; nothing downstream sorts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub title: String,
    pub score: u32,
    pub tips: Vec<Tip>,
}

/// The full categorized feedback record produced by the upstream analyzer.
/// The four keys are fixed and required, not a dynamic collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Feedback {
    pub tone_and_style: Category,
    pub content: Category,
    pub structure: Category,
    pub skills: Category,
}
