//! Polyplanner Settings Crate
//!
//! Handles planner configuration: style pass-through values, initial layout
//! ratios and interaction tolerances, with clamping and file persistence.

pub mod color;
pub mod config;
pub mod error;

pub use color::Color;
pub use config::{
    clamp_padding, clamp_ratio, default_config_path, InteractionSettings, LayoutSettings,
    PlannerConfig, StyleSettings,
};
pub use error::SettingsError;
