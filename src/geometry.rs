use std::f64::consts::TAU;

/// Pixel position. Menu-local coordinates put the origin at the menu center with y growing down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Square of side `2 * radius + 1` so the center pixel sits exactly in the middle.
    /// Saturates at the `i32` range instead of overflowing.
    pub fn around(center: Point, radius: i32) -> Self {
        let side = radius.saturating_mul(2).saturating_add(1);
        Self::new(
            center.x.saturating_sub(radius),
            center.y.saturating_sub(radius),
            side,
            side,
        )
    }

    pub fn local_center(&self) -> Point {
        Point::new(self.width / 2, self.height / 2)
    }

    pub fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

/// Wraps an angle into `[0, 2π)`.
pub fn normalize_radians(angle: f64) -> f64 {
    let wrapped = angle.rem_euclid(TAU);
    // rem_euclid can round up to TAU for tiny negative inputs
    if wrapped >= TAU { 0.0 } else { wrapped }
}
