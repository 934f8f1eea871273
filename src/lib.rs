// Improved Tears of Guthix interface
//
// The host client implements the traits in `core::traits` and drives a
// `TearsSession` from its tick, render and lifecycle callbacks.

pub mod config;
pub mod core;
pub mod logging;

pub use crate::config::{Config, ConfigError, InterfaceSettings};
pub use crate::core::{SharedTearsSession, TearsSession};
