//! Color utilities
//!
//! The interface palette and the client's `<col=rrggbb>` text markup.

/// 24-bit RGB color as understood by the client's widgets (0xRRGGBB)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color(pub u32);

impl Color {
    pub const YELLOW: Color = Color(0xFFFF00);
    pub const LIGHT_ORANGE: Color = Color(0xFF9900);
    pub const ORANGE: Color = Color(0xFF6600);
    pub const RED: Color = Color(0xFF0000);
    pub const LIGHT_BLUE: Color = Color(0x00BBFF);
    pub const BLUE: Color = Color(0x0066FF);
    pub const GREEN: Color = Color(0x00FF00);
    pub const DARK_GREEN: Color = Color(0x00CC00);

    /// Raw 0xRRGGBB value
    pub fn rgb(self) -> u32 {
        self.0 & 0xFFFFFF
    }

    /// Lowercase "rrggbb", the form used inside color tags
    pub fn to_hex(self) -> String {
        format!("{:06x}", self.rgb())
    }
}

/// Wrap text in the client's color tag markup
///
/// # Examples
///
/// ```
/// use improved_tears_interface::core::color::{wrap_with_color_tag, Color};
///
/// assert_eq!(wrap_with_color_tag("Ticks Left:", Color::YELLOW), "<col=ffff00>Ticks Left:</col>");
/// ```
pub fn wrap_with_color_tag(text: &str, color: Color) -> String {
    format!("<col={}>{}</col>", color.to_hex(), text)
}

/// Pick between two colors depending on the flash phase
pub fn flash(do_flash: bool, flash_color: Color, steady_color: Color) -> Color {
    if do_flash {
        flash_color
    } else {
        steady_color
    }
}
