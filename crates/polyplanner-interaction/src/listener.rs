//! Coordinate listener interface
//!
//! Listeners are told about the polygon after every handled pointer event.

use polyplanner_geometry::Polygon;
use uuid::Uuid;

/// Handle for a registered coordinates listener.
///
/// Uniquely identifies a listener subscription. Can be used to unsubscribe
/// from polygon updates.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ListenerHandle(pub String);

impl ListenerHandle {
    fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }
}

/// Listener trait for polygon updates
///
/// Implement this trait (or pass a closure) to observe the polygon after
/// each pointer event, whether or not the event changed it.
pub trait CoordinatesListener {
    fn on_coordinates_updated(&self, polygon: &Polygon);
}

impl<F> CoordinatesListener for F
where
    F: Fn(&Polygon),
{
    fn on_coordinates_updated(&self, polygon: &Polygon) {
        self(polygon)
    }
}

/// Listeners in registration order.
#[derive(Default)]
pub struct ListenerRegistry {
    listeners: Vec<(ListenerHandle, Box<dyn CoordinatesListener>)>,
}

impl ListenerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, listener: Box<dyn CoordinatesListener>) -> ListenerHandle {
        let handle = ListenerHandle::generate();
        self.listeners.push((handle.clone(), listener));
        handle
    }

    /// Removes the listener behind `handle`. Returns false if it was not
    /// registered.
    pub fn unregister(&mut self, handle: &ListenerHandle) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(registered, _)| registered != handle);
        self.listeners.len() != before
    }

    pub fn notify(&self, polygon: &Polygon) {
        for (_, listener) in &self.listeners {
            listener.on_coordinates_updated(polygon);
        }
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }
}

impl std::fmt::Debug for ListenerRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ListenerRegistry")
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
