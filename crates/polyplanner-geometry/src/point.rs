use std::fmt;

/// A mutable 2D coordinate.
///
/// Integer sources normalize to `f64` through [`Point::from_ints`] or the
/// `From<(i32, i32)>` conversion.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn from_ints(x: i32, y: i32) -> Self {
        Self::new(f64::from(x), f64::from(y))
    }

    /// Euclidean distance to `other`.
    pub fn distance_to(&self, other: &Point) -> f64 {
        let dx = (self.x - other.x).abs();
        let dy = (self.y - other.y).abs();
        dx.hypot(dy)
    }

    /// Overwrites this point with the coordinates of `other`.
    pub fn update(&mut self, other: Point) {
        self.x = other.x;
        self.y = other.y;
    }

    /// Overwrites both coordinates in place.
    pub fn set(&mut self, x: f64, y: f64) {
        self.x = x;
        self.y = y;
    }

    /// Shifts the point in place by `(dx, dy)`.
    pub fn translate(&mut self, dx: f64, dy: f64) {
        self.x += dx;
        self.y += dy;
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self::from_ints(x, y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
