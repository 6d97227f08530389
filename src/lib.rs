//! # Polyplanner
//!
//! Editing of a closed polygon region laid over an image. The user drags
//! either a single vertex or the whole shape, and the polygon is kept inside
//! a padded container.
//!
//! ## Architecture
//!
//! Polyplanner is organized as a workspace with multiple crates:
//!
//! 1. **polyplanner-core** - Error types and the pointer event model
//! 2. **polyplanner-geometry** - Points, segments, polygons, containment
//! 3. **polyplanner-settings** - Style, layout and interaction configuration
//! 4. **polyplanner-interaction** - Drag state machine, listeners, render contract
//! 5. **polyplanner** - This facade crate
//!
//! ## Usage
//!
//! ```rust
//! use polyplanner::{Planner, PointerEvent};
//!
//! let mut planner = Planner::new();
//! planner.set_container_size(300.0, 300.0);
//!
//! planner.handle_pointer_event(PointerEvent::press(225.0, 225.0)).unwrap();
//! planner.handle_pointer_event(PointerEvent::moved(260.0, 260.0)).unwrap();
//! planner.handle_pointer_event(PointerEvent::release(260.0, 260.0)).unwrap();
//!
//! let corner = planner.vertices().unwrap()[2];
//! assert_eq!((corner.x, corner.y), (250.0, 250.0));
//! ```

use std::path::Path;

use anyhow::Context;

pub use polyplanner_core::{Error, GeometryError, PointerEvent, PointerPhase, Result};

pub use polyplanner_geometry::{
    BoundingBox, CrossPrecision, LineForm, Orientation, Point, Polygon, PolygonBuilder, Segment,
    SideIndex,
};

pub use polyplanner_settings::{
    default_config_path, Color, InteractionSettings, LayoutSettings, PlannerConfig,
    SettingsError, StyleSettings,
};

pub use polyplanner_interaction::{
    CoordinatesListener, Draggable, InteractionController, ListenerHandle, Marker, Planner,
    PlannerState, RenderScene, RenderSurface, SceneColors,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Console output with pretty formatting
/// - RUST_LOG environment variable support
///
/// Fails if a global subscriber is already installed.
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stdout)
        .with_target(true)
        .with_level(true)
        .with_line_number(true)
        .pretty();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .context("failed to install tracing subscriber")?;

    Ok(())
}

/// Creates a planner from the configuration file at `path`, or from the
/// default location when `path` is `None`. A missing file yields the
/// default configuration.
pub fn load_planner(path: Option<&Path>) -> anyhow::Result<Planner> {
    let path = match path {
        Some(path) => path.to_path_buf(),
        None => default_config_path().context("could not locate the configuration directory")?,
    };

    let config = PlannerConfig::load_or_default(&path)
        .with_context(|| format!("failed to load configuration from {}", path.display()))?;
    tracing::info!("Loaded planner configuration from {}", path.display());

    Ok(Planner::from_config(&config))
}
