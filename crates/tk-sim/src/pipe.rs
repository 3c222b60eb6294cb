//! Pipe geometry and flow indicator.

use tk_graph::geometry::{Point, polyline_midpoint};

/// A drawn pipe between two tanks.
///
/// `flowing` is recomputed by the controller on every tick and only
/// selects the accent colour when rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct Pipe {
    points: Vec<Point>,
    thickness: f32,
    flowing: bool,
}

impl Pipe {
    pub const DEFAULT_THICKNESS: f32 = 12.0;

    pub fn new(points: Vec<Point>) -> Self {
        Self::with_thickness(points, Self::DEFAULT_THICKNESS)
    }

    pub fn with_thickness(points: Vec<Point>, thickness: f32) -> Self {
        Self {
            points,
            thickness,
            flowing: false,
        }
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn thickness(&self) -> f32 {
        self.thickness
    }

    pub fn is_flowing(&self) -> bool {
        self.flowing
    }

    pub fn set_flowing(&mut self, flowing: bool) {
        self.flowing = flowing;
    }

    /// Where a label for this pipe should sit.
    pub fn midpoint(&self) -> Point {
        polyline_midpoint(&self.points)
    }
}
