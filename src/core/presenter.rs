//! Interface text presenter
//!
//! Turns a tick's `SessionView` into text and colors for the three interface
//! slots. Slots that are not loaded are skipped.

use tracing::trace;

use super::color::{flash, wrap_with_color_tag, Color};
use super::constants::{DEFAULT_TIME_TEXT, DEFAULT_WATER_TEXT, TICKS_FOR_START_TIMER};
use super::format::{format_starting_in, format_ticks_left};
use super::resource_scanner::CollectingState;
use super::tracker::{SessionPhase, SessionView};
use super::traits::InterfaceWidgets;
use super::types::InterfaceSlot;

const NOT_COLLECTING_TEXT: &str = "Not Collecting";
const EMPTY_VEIN_TEXT: &str = "Empty Tear Vein!";
const MINIGAME_STARTING_TEXT: &str = "Get Ready!";
const MINIGAME_ENDING_TEXT: &str = "Time Up!";

/// Color of the tick timer for the remaining fraction of the minigame
pub fn time_color(displayed: u32, max: u32, do_flash: bool) -> Color {
    if displayed == 0 || max == 0 {
        return Color::RED;
    }
    let part = displayed as f64 / max as f64;
    if part < 0.15 {
        flash(do_flash, Color::ORANGE, Color::RED)
    } else if part < 0.3 {
        Color::LIGHT_ORANGE
    } else if part < 0.6 {
        Color::YELLOW
    } else {
        Color::GREEN
    }
}

/// Status slot text and color
pub fn status_line(view: &SessionView, do_flash: bool) -> (String, Color) {
    match view.phase {
        SessionPhase::Starting { countdown } => {
            let text = if countdown >= TICKS_FOR_START_TIMER {
                MINIGAME_STARTING_TEXT.to_string()
            } else {
                format_starting_in(countdown)
            };
            (text, flash(do_flash, Color::DARK_GREEN, Color::GREEN))
        }
        SessionPhase::Ending => (
            MINIGAME_ENDING_TEXT.to_string(),
            flash(do_flash, Color::ORANGE, Color::RED),
        ),
        SessionPhase::Active => match view.collecting_state {
            CollectingState::CollectingBlue => (
                collecting_text("Blue", Color::GREEN),
                flash(do_flash, Color::BLUE, Color::LIGHT_BLUE),
            ),
            CollectingState::CollectingGreen => (
                collecting_text("Green", Color::RED),
                flash(do_flash, Color::RED, Color::GREEN),
            ),
            CollectingState::EmptyVein => (
                EMPTY_VEIN_TEXT.to_string(),
                flash(do_flash, Color::LIGHT_ORANGE, Color::ORANGE),
            ),
            CollectingState::NotCollecting => (NOT_COLLECTING_TEXT.to_string(), Color::YELLOW),
        },
        SessionPhase::Idle => (NOT_COLLECTING_TEXT.to_string(), Color::YELLOW),
    }
}

/// "Collecting <kind> Tears" with the outer words tinted so they contrast
/// with the slot color
fn collecting_text(kind: &str, accent: Color) -> String {
    format!(
        "{} {} {}",
        wrap_with_color_tag("Collecting", accent),
        kind,
        wrap_with_color_tag("Tears", accent)
    )
}

/// Counter color for the last tick's change
pub fn count_color(delta: i32) -> Color {
    match delta {
        d if d > 0 => Color::GREEN,
        d if d < 0 => Color::RED,
        _ => Color::YELLOW,
    }
}

/// Writes session state into the interface slots
#[derive(Debug, Clone, Copy)]
pub struct InterfaceTextPresenter {
    flashing_text: bool,
}

impl InterfaceTextPresenter {
    pub fn new(flashing_text: bool) -> Self {
        Self { flashing_text }
    }

    pub fn set_flashing_text(&mut self, flashing_text: bool) {
        self.flashing_text = flashing_text;
    }

    /// Write one tick's view. Returns how many slots were available.
    pub fn present<I: InterfaceWidgets>(
        &self,
        view: &SessionView,
        flash_tick: bool,
        widgets: &mut I,
    ) -> usize {
        let do_flash = self.flashing_text && flash_tick;
        let mut written = 0;

        let time_text = format_ticks_left(view.displayed_ticks_left, view.max_ticks);
        let time = time_color(view.displayed_ticks_left, view.max_ticks, do_flash);
        if write_slot(widgets, InterfaceSlot::TimeText, Some(&time_text), time) {
            written += 1;
        }

        let (status_text, status) = status_line(view, do_flash);
        if write_slot(widgets, InterfaceSlot::StatusText, Some(&status_text), status) {
            written += 1;
        }

        if write_slot(
            widgets,
            InterfaceSlot::CountText,
            None,
            count_color(view.tick_delta),
        ) {
            written += 1;
        }

        written
    }

    /// Put the client's default labels back.
    pub fn restore_defaults<I: InterfaceWidgets>(&self, widgets: &mut I) -> usize {
        [
            write_slot(
                widgets,
                InterfaceSlot::TimeText,
                Some(DEFAULT_TIME_TEXT),
                Color::YELLOW,
            ),
            write_slot(
                widgets,
                InterfaceSlot::StatusText,
                Some(DEFAULT_WATER_TEXT),
                Color::YELLOW,
            ),
            write_slot(widgets, InterfaceSlot::CountText, None, Color::YELLOW),
        ]
        .into_iter()
        .filter(|&ok| ok)
        .count()
    }
}

fn write_slot<I: InterfaceWidgets>(
    widgets: &mut I,
    slot: InterfaceSlot,
    text: Option<&str>,
    color: Color,
) -> bool {
    // Color write first: it tells us whether the slot exists at all
    if !widgets.set_text_color(slot, color) {
        trace!(?slot, "[PRESENTER] Slot not loaded, skipping");
        return false;
    }
    if let Some(text) = text {
        widgets.set_text(slot, text);
    }
    true
}
