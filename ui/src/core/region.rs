//! Plain geometry for hit testing, independent of any DOM.

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned rectangle in client coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// Something that can say whether a pointer position falls inside it.
pub trait Region {
    fn contains(&self, point: Point) -> bool;
}

impl Region for Rect {
    /// Edges are inclusive.
    fn contains(&self, point: Point) -> bool {
        point.x >= self.x
            && point.x <= self.x + self.width
            && point.y >= self.y
            && point.y <= self.y + self.height
    }
}

/// An unmeasured region contains nothing.
impl<R: Region> Region for Option<R> {
    fn contains(&self, point: Point) -> bool {
        self.as_ref().is_some_and(|region| region.contains(point))
    }
}
