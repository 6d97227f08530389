//! Directed line segments over live vertices.
//!
//! A [`Segment`] borrows its endpoints instead of copying them. Polygon sides
//! are resolved into segments on demand, so a segment always reflects the
//! current vertex positions.

use crate::point::Point;

/// Line equation of a segment: `y = a * x + b`, or vertical.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LineForm {
    /// Finite slope `a` and intercept `b`.
    Sloped { a: f64, b: f64 },
    /// `end.x == start.x`
    Vertical,
}

/// A directed segment between two borrowed points.
#[derive(Debug, Clone, Copy)]
pub struct Segment<'a> {
    start: &'a Point,
    end: &'a Point,
    form: LineForm,
}

impl<'a> Segment<'a> {
    /// Creates a segment from `start` to `end` and derives its line form.
    pub fn new(start: &'a Point, end: &'a Point) -> Self {
        let form = if end.x != start.x {
            let a = (end.y - start.y) / (end.x - start.x);
            LineForm::Sloped {
                a,
                b: start.y - a * start.x,
            }
        } else {
            LineForm::Vertical
        };

        Self { start, end, form }
    }

    pub fn start(&self) -> &'a Point {
        self.start
    }

    pub fn end(&self) -> &'a Point {
        self.end
    }

    pub fn line_form(&self) -> LineForm {
        self.form
    }

    pub fn is_vertical(&self) -> bool {
        matches!(self.form, LineForm::Vertical)
    }

    /// Slope of the line, `None` when vertical.
    pub fn slope(&self) -> Option<f64> {
        match self.form {
            LineForm::Sloped { a, .. } => Some(a),
            LineForm::Vertical => None,
        }
    }

    /// Y intercept of the line, `None` when vertical.
    pub fn intercept(&self) -> Option<f64> {
        match self.form {
            LineForm::Sloped { b, .. } => Some(b),
            LineForm::Vertical => None,
        }
    }

    pub fn length(&self) -> f64 {
        self.start.distance_to(self.end)
    }

    /// Returns true when `point` lies inside the axis-aligned extent of the
    /// segment (inclusive). Only an on-segment test for axis-aligned segments.
    pub fn contains_extent(&self, point: &Point) -> bool {
        let (min_x, max_x) = ordered(self.start.x, self.end.x);
        let (min_y, max_y) = ordered(self.start.y, self.end.y);

        point.x >= min_x && point.x <= max_x && point.y >= min_y && point.y <= max_y
    }
}

fn ordered(a: f64, b: f64) -> (f64, f64) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}
