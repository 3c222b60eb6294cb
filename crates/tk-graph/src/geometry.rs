//! Planar scene geometry: points, tank rectangles and pipe routes.
//!
//! Coordinates are screen-style: `y` grows downward, so a tank's outlet
//! sits on its bottom edge and its inlet on its top edge.

/// A point in scene coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn distance(self, other: Point) -> f32 {
        ((other.x - self.x).powi(2) + (other.y - self.y).powi(2)).sqrt()
    }

    fn lerp(self, other: Point, t: f32) -> Point {
        Point::new(
            self.x + (other.x - self.x) * t,
            self.y + (other.y - self.y) * t,
        )
    }

    fn coincides(self, other: Point) -> bool {
        (self.x - other.x).abs() < f32::EPSILON && (self.y - other.y).abs() < f32::EPSILON
    }
}

impl From<[f32; 2]> for Point {
    fn from([x, y]: [f32; 2]) -> Self {
        Self { x, y }
    }
}

impl From<Point> for [f32; 2] {
    fn from(p: Point) -> Self {
        [p.x, p.y]
    }
}

/// Axis-aligned bounding rectangle of a tank.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const DEFAULT_WIDTH: f32 = 100.0;
    pub const DEFAULT_HEIGHT: f32 = 140.0;

    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Rectangle of default tank size with its top-left corner at `(x, y)`.
    pub const fn at(x: f32, y: f32) -> Self {
        Self::new(x, y, Self::DEFAULT_WIDTH, Self::DEFAULT_HEIGHT)
    }

    /// Bottom centre: where liquid leaves the tank.
    pub fn outlet(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height)
    }

    /// Top centre: where liquid enters the tank.
    pub fn inlet(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y)
    }

    pub fn min(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn max(&self) -> Point {
        Point::new(self.x + self.width, self.y + self.height)
    }
}

/// Route a pipe from an outlet to an inlet: down to mid-height, across, then down.
pub fn elbow_route(from: Point, to: Point) -> Vec<Point> {
    let mid_y = (from.y + to.y) / 2.0;
    normalize_orthogonal(&[
        from,
        Point::new(from.x, mid_y),
        Point::new(to.x, mid_y),
        to,
    ])
}

/// Drop repeated points and interior points that lie on a straight run.
pub fn normalize_orthogonal(points: &[Point]) -> Vec<Point> {
    let mut out: Vec<Point> = Vec::with_capacity(points.len());
    for point in points {
        if out.last().is_some_and(|p| p.coincides(*point)) {
            continue;
        }
        out.push(*point);
    }

    let mut i = 1usize;
    while i + 1 < out.len() {
        let prev = out[i - 1];
        let curr = out[i];
        let next = out[i + 1];
        let collinear = (prev.x - curr.x).abs() < f32::EPSILON
            && (curr.x - next.x).abs() < f32::EPSILON
            || (prev.y - curr.y).abs() < f32::EPSILON && (curr.y - next.y).abs() < f32::EPSILON;
        if collinear {
            out.remove(i);
        } else {
            i += 1;
        }
    }

    out
}

pub fn polyline_length(points: &[Point]) -> f32 {
    points.windows(2).map(|w| w[0].distance(w[1])).sum()
}

/// Point halfway along the polyline, measured by arc length.
pub fn polyline_midpoint(points: &[Point]) -> Point {
    if points.len() < 2 {
        return points.first().copied().unwrap_or_default();
    }

    let total_len = polyline_length(points);
    if total_len <= f32::EPSILON {
        return points[0];
    }

    let half = total_len * 0.5;
    let mut accum = 0.0;
    for segment in points.windows(2) {
        let seg_len = segment[0].distance(segment[1]);
        if accum + seg_len >= half {
            let t = (half - accum) / seg_len;
            return segment[0].lerp(segment[1], t);
        }
        accum += seg_len;
    }

    points[points.len() - 1]
}
