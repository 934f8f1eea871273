//! Formatting utilities for interface text.

use super::color::{wrap_with_color_tag, Color};

/// Format a count delta as `+N` / `-N`.
pub fn format_delta(delta: i32) -> String {
    if delta < 0 {
        format!("-{}", delta.unsigned_abs())
    } else {
        format!("+{}", delta)
    }
}

/// Time slot text: yellow "Ticks Left:" label followed by `displayed / max`.
pub fn format_ticks_left(displayed: u32, max: u32) -> String {
    format!(
        "{} {} / {}",
        wrap_with_color_tag("Ticks Left:", Color::YELLOW),
        displayed,
        max
    )
}

/// Countdown text shown once the start is close.
pub fn format_starting_in(ticks: u32) -> String {
    if ticks == 1 {
        format!("Starting in: {} tick", ticks)
    } else {
        format!("Starting in: {} ticks", ticks)
    }
}
