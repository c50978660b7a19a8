use crate::Point;

#[cfg(test)]
#[path = "geometry_test.rs"]
mod geometry_test;

/// On-screen box of an element, as reported by `getBoundingClientRect`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    fn is_degenerate(&self) -> bool {
        !(self.width > 0.0 && self.height > 0.0)
            || !self.left.is_finite()
            || !self.top.is_finite()
    }
}

/// Intrinsic bitmap size of a canvas (its `width`/`height` attributes).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SurfaceSize {
    pub width: f64,
    pub height: f64,
}

impl SurfaceSize {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

pub fn normalize_point(point: Point) -> Option<Point> {
    if !point.is_finite() {
        return None;
    }
    Some(point)
}

/// Maps client coordinates into canvas pixels, undoing any CSS scaling of the element.
pub fn client_to_canvas(client: Point, rect: Rect, size: SurfaceSize) -> Option<Point> {
    if rect.is_degenerate() {
        return None;
    }
    let client = normalize_point(client)?;
    normalize_point(Point {
        x: (client.x - rect.left) * size.width / rect.width,
        y: (client.y - rect.top) * size.height / rect.height,
    })
}
