//! RGBA color type and the mockup palette.

/// Represents an RGBA color with 8-bit components.
///
/// All components are in the range 0 (minimum) to 255 (maximum).
///
/// # Examples
///
/// ```
/// use coffeenote_mockup::draw::Color;
/// let accent = Color::rgb(214, 181, 143);
/// let translucent_card = Color::rgba(255, 255, 255, 230);
/// assert_eq!(accent.a, 255);
/// assert_eq!(translucent_card.a, 230);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    /// Red component
    pub r: u8,
    /// Green component
    pub g: u8,
    /// Blue component
    pub b: u8,
    /// Alpha/transparency (0 = fully transparent, 255 = fully opaque)
    pub a: u8,
}

impl Color {
    /// Creates an opaque color from RGB components.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Creates a color from RGBA components.
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Returns the same color with a different alpha.
    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    /// Sets this color as the source of a Cairo context.
    pub fn apply(&self, ctx: &cairo::Context) {
        ctx.set_source_rgba(
            channel(self.r),
            channel(self.g),
            channel(self.b),
            channel(self.a),
        );
    }
}

fn channel(value: u8) -> f64 {
    value as f64 / 255.0
}

// ============================================================================
// Palette
// ============================================================================

/// Background gradient, top row
pub const BG_TOP: Color = Color::rgb(250, 245, 238);

/// Background gradient, bottom row
pub const BG_BOTTOM: Color = Color::rgb(238, 226, 214);

/// Light coffee accent used for glows, buttons and the active tab
pub const ACCENT: Color = Color::rgb(214, 181, 143);

/// Dark coffee accent used for titles and chevrons
pub const ACCENT_DARK: Color = Color::rgb(142, 109, 79);

/// Primary text
pub const TEXT_PRIMARY: Color = Color::rgb(51, 51, 51);

/// Secondary text
pub const TEXT_SECONDARY: Color = Color::rgb(136, 136, 136);

/// Peach highlight for the lower-right background glow
pub const PEACH: Color = Color::rgb(255, 210, 180);

/// Avatar placeholder fill
pub const AVATAR_FILL: Color = Color::rgb(240, 230, 220);

/// Bean photo placeholder fill
pub const PHOTO_FILL: Color = Color::rgb(244, 229, 213);

/// "Running low" badge
pub const WARNING: Color = Color::rgb(242, 153, 74);

/// Opaque white
pub const WHITE: Color = Color::rgb(255, 255, 255);

/// Fully transparent color
pub const TRANSPARENT: Color = Color::rgba(0, 0, 0, 0);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rgb_is_opaque() {
        assert_eq!(ACCENT.a, 255);
        assert_eq!(Color::rgb(1, 2, 3), Color::rgba(1, 2, 3, 255));
    }

    #[test]
    fn with_alpha_keeps_channels() {
        let card = WHITE.with_alpha(230);
        assert_eq!(card, Color::rgba(255, 255, 255, 230));
    }
}
