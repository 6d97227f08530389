//! # Polyplanner Core
//!
//! Core types shared by every Polyplanner crate.
//! Provides the error taxonomy and the pointer event model consumed by the
//! interaction layer.

pub mod error;
pub mod event;

pub use error::{Error, GeometryError, Result};
pub use event::{PointerEvent, PointerPhase};
