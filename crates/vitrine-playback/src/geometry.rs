//! Viewport geometry for visibility tracking.
//!
//! [Intersection Observer § 2.1](https://w3c.github.io/IntersectionObserver/#intersectionobserver)
//!
//! "The intersection ratio is the ratio of the intersectionRect to the
//! boundingClientRect."

/// An axis-aligned rectangle in page coordinates.
///
/// `y` grows downward; scrolling the page moves the viewport rectangle
/// down the same axis.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
    /// Horizontal position of the top-left corner.
    pub x: f32,
    /// Vertical position of the top-left corner.
    pub y: f32,
    /// Width of the rectangle.
    pub width: f32,
    /// Height of the rectangle.
    pub height: f32,
}

impl Rect {
    /// Create a rectangle from its top-left corner and size.
    #[must_use]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Area of the rectangle.
    #[must_use]
    pub fn area(self) -> f32 {
        self.width * self.height
    }

    /// Horizontal position of the right edge.
    #[must_use]
    pub fn right(self) -> f32 {
        self.x + self.width
    }

    /// Vertical position of the bottom edge.
    #[must_use]
    pub fn bottom(self) -> f32 {
        self.y + self.height
    }

    /// The overlapping region of two rectangles; zero-sized when they are
    /// disjoint.
    #[must_use]
    pub fn intersection(self, other: Rect) -> Rect {
        let x = self.x.max(other.x);
        let y = self.y.max(other.y);
        let width = (self.right().min(other.right()) - x).max(0.0);
        let height = (self.bottom().min(other.bottom()) - y).max(0.0);
        Rect::new(x, y, width, height)
    }
}

/// Fraction of `element`'s area currently inside `viewport`.
///
/// [Intersection Observer § 3.3](https://w3c.github.io/IntersectionObserver/#intersection-observer-entry)
///
/// A degenerate (zero-area) element reports 0.0: it can never reach the
/// playback threshold, so it never plays.
#[must_use]
pub fn intersection_ratio(element: Rect, viewport: Rect) -> f32 {
    let element_area = element.area();
    if element_area <= 0.0 {
        return 0.0;
    }
    element.intersection(viewport).area() / element_area
}
