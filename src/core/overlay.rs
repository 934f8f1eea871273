//! +/- overlay
//!
//! Floats the last few tears-count changes up from the counter, each for
//! `DELTA_ANIMATION_WINDOW`. Nothing here is scheduled: every frame simply
//! recomputes where each still-young event should be.

use std::time::Instant;

use super::color::Color;
use super::constants::{
    DELTA_ANIMATION_WINDOW, DELTA_RISE_HEIGHTS, DELTA_START_OFFSET_X, DELTA_START_OFFSET_Y,
};
use super::delta_buffer::DeltaEventBuffer;
use super::format::format_delta;
use super::traits::{InterfaceWidgets, OverlayCanvas};
use super::types::{Bounds, InterfaceSlot};

/// One piece of overlay text, positioned in screen space
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FloatingText {
    pub text: String,
    pub color: Color,
    pub x: i32,
    pub y: i32,
    pub outline: bool,
}

/// Lays out and draws the +/- indicators
#[derive(Debug, Clone, Copy)]
pub struct DeltaOverlayRenderer {
    enabled: bool,
}

impl DeltaOverlayRenderer {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Compute the indicators for this frame, anchored to the counter bounds.
    pub fn layout(
        &self,
        deltas: &DeltaEventBuffer,
        anchor: Bounds,
        now: Instant,
    ) -> Vec<FloatingText> {
        let x = anchor.x + anchor.width + DELTA_START_OFFSET_X;
        let y = anchor.y + anchor.height + DELTA_START_OFFSET_Y;
        let h = anchor.height as f64;
        let window_ms = DELTA_ANIMATION_WINDOW.as_millis() as f64;

        deltas
            .iter()
            .filter(|event| event.delta != 0)
            .filter_map(|event| {
                // Stamped after `now`: not started yet
                let elapsed = now.checked_duration_since(event.observed_at)?;
                let ratio = elapsed.as_millis() as f64 / window_ms;
                if !(0.0..=1.0).contains(&ratio) {
                    return None;
                }
                Some(FloatingText {
                    text: format_delta(event.delta),
                    color: if event.delta > 0 {
                        Color::GREEN
                    } else {
                        Color::RED
                    },
                    x,
                    y: y - (ratio * h * DELTA_RISE_HEIGHTS) as i32,
                    outline: false,
                })
            })
            .collect()
    }

    /// Draw this frame's indicators. Returns how many were drawn.
    pub fn render<I: InterfaceWidgets, C: OverlayCanvas>(
        &self,
        deltas: &DeltaEventBuffer,
        widgets: &I,
        canvas: &mut C,
        now: Instant,
    ) -> usize {
        if !self.enabled || deltas.is_empty() {
            return 0;
        }
        let Some(anchor) = widgets.bounds(InterfaceSlot::CountText) else {
            return 0;
        };

        let texts = self.layout(deltas, anchor, now);
        for text in &texts {
            canvas.draw_text(text);
        }
        texts.len()
    }
}
