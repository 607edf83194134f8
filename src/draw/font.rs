//! Font resolution for text rendering.
//!
//! Fonts are picked from an ordered list of [`FontCandidate`]s. A candidate
//! names a font file and the family that file provides; the resolver only
//! accepts it when the file exists and Pango actually loads that family.
//! When nothing matches, the generic [`FALLBACK_FAMILY`] is used, so
//! resolution never fails.

use pango::prelude::*;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::cell::Cell;
use std::path::{Path, PathBuf};

/// Family used when no candidate can be loaded. Fontconfig always maps it
/// to some installed face.
pub const FALLBACK_FAMILY: &str = "Sans";

/// A font file to try, together with the family name it registers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct FontCandidate {
    /// Path of the font file on disk
    ///
    /// Only its existence is checked. Pango loads `family` through
    /// fontconfig, so a damaged file whose family is installed elsewhere
    /// still resolves.
    pub path: PathBuf,

    /// Family name the file provides (e.g. "PingFang SC", "Noto Sans CJK SC")
    pub family: String,
}

impl FontCandidate {
    pub fn new(path: impl Into<PathBuf>, family: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            family: family.into(),
        }
    }
}

/// Where a resolved font came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FontSource {
    /// Loaded from the candidate at this path
    Candidate(PathBuf),
    /// No candidate loaded; the generic fallback family is used
    Fallback,
}

/// A font ready to be handed to a Pango layout.
#[derive(Debug, Clone)]
pub struct ResolvedFont {
    pub description: pango::FontDescription,
    pub source: FontSource,
}

impl ResolvedFont {
    pub fn is_fallback(&self) -> bool {
        self.source == FontSource::Fallback
    }
}

/// Resolves fonts by pixel size and weight against an ordered candidate list.
pub struct FontResolver {
    candidates: Vec<FontCandidate>,
    font_map: pango::FontMap,
    context: pango::Context,
    warned_fallback: Cell<bool>,
}

impl FontResolver {
    /// Creates a resolver over the given candidates, tried in order.
    pub fn new(candidates: Vec<FontCandidate>) -> Self {
        let font_map = pangocairo::FontMap::default();
        let context = font_map.create_context();
        Self {
            candidates,
            font_map,
            context,
            warned_fallback: Cell::new(false),
        }
    }

    /// Returns a font of `size` pixels, bold or regular.
    ///
    /// Candidates whose file is missing or whose family Pango cannot load are
    /// skipped. Falls back to [`FALLBACK_FAMILY`] when none succeed.
    pub fn resolve(&self, size: f64, bold: bool) -> ResolvedFont {
        for candidate in &self.candidates {
            if let Some(description) = self.try_candidate(candidate, size, bold) {
                return ResolvedFont {
                    description,
                    source: FontSource::Candidate(candidate.path.clone()),
                };
            }
        }

        if !self.warned_fallback.replace(true) {
            log::warn!(
                "No font candidate could be loaded, falling back to '{}'",
                FALLBACK_FAMILY
            );
        }
        ResolvedFont {
            description: describe(FALLBACK_FAMILY, size, bold),
            source: FontSource::Fallback,
        }
    }

    fn try_candidate(
        &self,
        candidate: &FontCandidate,
        size: f64,
        bold: bool,
    ) -> Option<pango::FontDescription> {
        if !candidate.path.exists() {
            log::debug!("Font file not found: {}", candidate.path.display());
            return None;
        }

        let description = describe(&candidate.family, size, bold);
        let Some(font) = self.font_map.load_font(&self.context, &description) else {
            log::debug!(
                "Pango could not load '{}' from {}",
                candidate.family,
                candidate.path.display()
            );
            return None;
        };

        let loaded = font.describe();
        let loaded_family = loaded.family().map(|f| f.to_string()).unwrap_or_default();
        if !loaded_family.eq_ignore_ascii_case(&candidate.family) {
            log::debug!(
                "Font '{}' resolved to '{}' instead, skipping {}",
                candidate.family,
                loaded_family,
                candidate.path.display()
            );
            return None;
        }

        Some(description)
    }
}

/// Builds a Pango description for `family` at `size` pixels.
fn describe(family: &str, size: f64, bold: bool) -> pango::FontDescription {
    let mut description = pango::FontDescription::new();
    description.set_family(family);
    description.set_weight(if bold {
        pango::Weight::Bold
    } else {
        pango::Weight::Normal
    });
    description.set_absolute_size(size * pango::SCALE as f64);
    description
}

/// Ordered font candidates for the current platform.
///
/// CJK-capable faces come first since every label in the mockup is Chinese.
pub fn default_candidates() -> Vec<FontCandidate> {
    platform_candidates()
        .iter()
        .map(|(path, family)| FontCandidate::new(Path::new(path), *family))
        .collect()
}

#[cfg(target_os = "macos")]
fn platform_candidates() -> &'static [(&'static str, &'static str)] {
    &[
        ("/System/Library/Fonts/PingFang.ttc", "PingFang SC"),
        ("/System/Library/Fonts/PingFangHK.ttc", "PingFang HK"),
        ("/System/Library/Fonts/SFNSRounded.ttf", "SF Pro Rounded"),
        ("/System/Library/Fonts/SFNSDisplay.ttf", "SF Pro Display"),
        ("/System/Library/Fonts/Helvetica.ttc", "Helvetica"),
    ]
}

#[cfg(not(target_os = "macos"))]
fn platform_candidates() -> &'static [(&'static str, &'static str)] {
    &[
        (
            "/usr/share/fonts/opentype/noto/NotoSansCJK-Regular.ttc",
            "Noto Sans CJK SC",
        ),
        (
            "/usr/share/fonts/noto-cjk/NotoSansCJK-Regular.ttc",
            "Noto Sans CJK SC",
        ),
        (
            "/usr/share/fonts/google-noto-cjk/NotoSansCJK-Regular.ttc",
            "Noto Sans CJK SC",
        ),
        (
            "/usr/share/fonts/truetype/wqy/wqy-microhei.ttc",
            "WenQuanYi Micro Hei",
        ),
        (
            "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
            "DejaVu Sans",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_candidates_fall_back() {
        let resolver = FontResolver::new(vec![
            FontCandidate::new("/nonexistent/fonts/A.ttc", "Alpha"),
            FontCandidate::new("/nonexistent/fonts/B.ttf", "Beta"),
        ]);
        let font = resolver.resolve(24.0, true);
        assert!(font.is_fallback());
        assert_eq!(
            font.description.family().map(|f| f.to_string()),
            Some(FALLBACK_FAMILY.to_string())
        );
        assert_eq!(font.description.weight(), pango::Weight::Bold);
        assert!(font.description.is_size_absolute());
        assert_eq!(font.description.size(), 24 * pango::SCALE);
    }

    #[test]
    fn empty_candidate_list_falls_back() {
        let resolver = FontResolver::new(Vec::new());
        let font = resolver.resolve(18.0, false);
        assert!(font.is_fallback());
        assert_eq!(font.description.weight(), pango::Weight::Normal);
    }

    #[test]
    fn existing_file_with_unknown_family_is_skipped() {
        let manifest = Path::new(env!("CARGO_MANIFEST_DIR")).join("Cargo.toml");
        let resolver = FontResolver::new(vec![FontCandidate::new(
            manifest,
            "Definitely Not An Installed Family 42",
        )]);
        assert!(resolver.resolve(16.0, false).is_fallback());
    }

    #[test]
    fn default_candidates_are_not_empty() {
        let candidates = default_candidates();
        assert!(!candidates.is_empty());
        assert!(candidates.iter().all(|c| c.path.is_absolute()));
    }
}
