//! Core module - platform-independent tracking, presentation and overlay

pub mod color;
pub mod constants;
pub mod delta_buffer;
pub mod format;
pub mod geofence;
pub mod overlay;
pub mod presenter;
pub mod resource_scanner;
pub mod session;
pub mod shared;
pub mod snapshot;
pub mod tracker;
pub mod traits;
pub mod types;

pub use color::Color;
pub use overlay::{DeltaOverlayRenderer, FloatingText};
pub use presenter::InterfaceTextPresenter;
pub use resource_scanner::CollectingState;
pub use session::TearsSession;
pub use shared::SharedTearsSession;
pub use tracker::{SessionEvent, SessionPhase, SessionStateTracker, SessionView};
pub use traits::{InterfaceWidgets, OverlayCanvas, SignalReader, WorldReader};
pub use types::{Bounds, GameState, InterfaceSlot, WorldPoint};
