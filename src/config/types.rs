//! Configuration type definitions.

use crate::draw::FontCandidate;
use crate::draw::font::default_candidates;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Output file settings.
#[derive(Debug, Default, Clone, Serialize, Deserialize, JsonSchema)]
pub struct OutputConfig {
    /// Where to write the PNG. A leading `~/` expands to the home directory.
    /// When unset, `personal_center_ui.png` is written next to the executable.
    #[serde(default)]
    pub path: Option<PathBuf>,
}

/// Font lookup settings.
///
/// Candidates are tried in order; the first whose file exists and whose
/// family Pango can load wins. An empty list always uses the generic
/// fallback family.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct FontConfig {
    /// Ordered font candidates, e.g.
    /// `{ path = "/usr/share/fonts/noto/NotoSansCJK-Regular.ttc", family = "Noto Sans CJK SC" }`
    #[serde(default = "default_candidates")]
    pub candidates: Vec<FontCandidate>,
}

impl Default for FontConfig {
    fn default() -> Self {
        Self {
            candidates: default_candidates(),
        }
    }
}
