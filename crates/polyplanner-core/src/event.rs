//! Pointer event model
//!
//! The host toolkit delivers discrete pointer events; the interaction layer
//! only needs the phase of the gesture and the pointer position in container
//! coordinates.

use std::fmt;

/// Phase of a pointer gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerPhase {
    /// Pointer went down
    Press,
    /// Pointer moved while down
    Move,
    /// Pointer went up
    Release,
}

impl fmt::Display for PointerPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Press => write!(f, "press"),
            Self::Move => write!(f, "move"),
            Self::Release => write!(f, "release"),
        }
    }
}

/// A single pointer event in container coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    /// Gesture phase.
    pub phase: PointerPhase,
    /// Pointer X position.
    pub x: f64,
    /// Pointer Y position.
    pub y: f64,
}

impl PointerEvent {
    /// Creates a new pointer event.
    pub fn new(phase: PointerPhase, x: f64, y: f64) -> Self {
        Self { phase, x, y }
    }

    /// Creates a press event.
    pub fn press(x: f64, y: f64) -> Self {
        Self::new(PointerPhase::Press, x, y)
    }

    /// Creates a move event.
    pub fn moved(x: f64, y: f64) -> Self {
        Self::new(PointerPhase::Move, x, y)
    }

    /// Creates a release event.
    pub fn release(x: f64, y: f64) -> Self {
        Self::new(PointerPhase::Release, x, y)
    }

    /// Returns the pointer position as an `(x, y)` pair.
    pub fn position(&self) -> (f64, f64) {
        (self.x, self.y)
    }
}

impl fmt::Display for PointerEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at ({}, {})", self.phase, self.x, self.y)
    }
}
