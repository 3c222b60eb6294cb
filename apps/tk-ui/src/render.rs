//! Scene painting: tanks, pipes and the scene-to-screen transform.

use egui::{Align2, Color32, FontId, Pos2, Rect, Shape, Stroke, Vec2};
use tk_graph::Point;
use tk_project::schema::SceneDef;
use tk_sim::{PipeView, SimSnapshot, TankView};

pub const BACKGROUND: Color32 = Color32::from_rgb(0x22, 0x22, 0x22);
pub const PIPE_BODY: Color32 = Color32::GRAY;
pub const PIPE_LIQUID: Color32 = Color32::from_rgb(0, 180, 255);
pub const TANK_LIQUID: Color32 = Color32::from_rgba_premultiplied(0, 94, 200, 200);
pub const TANK_OUTLINE: Color32 = Color32::WHITE;
pub const ALARM: Color32 = Color32::from_rgb(230, 60, 60);

const OUTLINE_WIDTH: f32 = 4.0;
const LIQUID_INSET: f32 = 3.0;
const LABEL_GAP: f32 = 10.0;

/// Uniform scale plus offset that fits the scene inside a screen rectangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenTransform {
    pub scale: f32,
    pub offset: Vec2,
}

impl ScreenTransform {
    /// Fit `scene` into `screen`, preserving aspect ratio and centring the slack.
    pub fn fit(scene: SceneDef, screen: Rect) -> Self {
        let sx = screen.width() / scene.width.max(1.0);
        let sy = screen.height() / scene.height.max(1.0);
        let scale = sx.min(sy).max(0.01);
        let used = Vec2::new(scene.width * scale, scene.height * scale);
        let offset = screen.min.to_vec2() + (screen.size() - used) * 0.5;
        Self { scale, offset }
    }

    pub fn point(&self, p: Point) -> Pos2 {
        Pos2::new(p.x * self.scale, p.y * self.scale) + self.offset
    }

    pub fn rect(&self, r: tk_graph::Rect) -> Rect {
        Rect::from_min_max(self.point(r.min()), self.point(r.max()))
    }

    pub fn length(&self, v: f32) -> f32 {
        v * self.scale
    }
}

/// Draw a whole frame: pipes first so tanks sit on top of their ends.
pub fn draw_snapshot(painter: &egui::Painter, snapshot: &SimSnapshot, xf: &ScreenTransform) {
    for pipe in &snapshot.pipes {
        draw_pipe(painter, pipe, xf);
    }
    for tank in &snapshot.tanks {
        draw_tank(painter, tank, xf);
    }
}

pub fn draw_pipe(painter: &egui::Painter, pipe: &PipeView, xf: &ScreenTransform) {
    if pipe.points.len() < 2 {
        return;
    }
    let points: Vec<Pos2> = pipe.points.iter().map(|p| xf.point(*p)).collect();
    let thickness = xf.length(pipe.thickness);

    stroke_round(painter, &points, thickness, PIPE_BODY);
    if pipe.flowing {
        stroke_round(painter, &points, (thickness - xf.length(4.0)).max(1.0), PIPE_LIQUID);
    }
}

/// Polyline with round caps and joins.
fn stroke_round(painter: &egui::Painter, points: &[Pos2], width: f32, color: Color32) {
    painter.add(Shape::line(points.to_vec(), Stroke::new(width, color)));
    for p in points {
        painter.circle_filled(*p, width * 0.5, color);
    }
}

pub fn draw_tank(painter: &egui::Painter, tank: &TankView, xf: &ScreenTransform) {
    let rect = xf.rect(tank.rect);

    if tank.fraction > 0.0 {
        let inner = rect.shrink(xf.length(LIQUID_INSET));
        let height = inner.height() * tank.fraction as f32;
        let liquid = Rect::from_min_max(Pos2::new(inner.min.x, inner.max.y - height), inner.max);
        painter.rect_filled(liquid, 0.0, TANK_LIQUID);
    }

    let outline = if tank.full { ALARM } else { TANK_OUTLINE };
    painter.rect_stroke(rect, 0.0, Stroke::new(xf.length(OUTLINE_WIDTH), outline));

    let label_pos = rect.left_top() - Vec2::new(0.0, xf.length(LABEL_GAP));
    painter.text(
        label_pos,
        Align2::LEFT_BOTTOM,
        &tank.label,
        FontId::proportional(14.0),
        Color32::WHITE,
    );

    let readout = format!("{:.1} / {:.0}", tank.volume, tank.capacity);
    painter.text(
        rect.center(),
        Align2::CENTER_CENTER,
        readout,
        FontId::monospace(12.0),
        Color32::WHITE,
    );

    if tank.full {
        painter.text(
            rect.right_top() - Vec2::new(0.0, xf.length(LABEL_GAP)),
            Align2::RIGHT_BOTTOM,
            "FULL",
            FontId::proportional(13.0),
            ALARM,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fit_preserves_aspect_and_centres() {
        let scene = SceneDef {
            width: 1000.0,
            height: 500.0,
        };
        let screen = Rect::from_min_size(Pos2::new(10.0, 20.0), Vec2::new(500.0, 500.0));
        let xf = ScreenTransform::fit(scene, screen);
        assert_eq!(xf.scale, 0.5);
        assert_eq!(xf.point(Point::new(0.0, 0.0)), Pos2::new(10.0, 145.0));
        assert_eq!(xf.point(Point::new(1000.0, 500.0)), Pos2::new(510.0, 395.0));
    }

    #[test]
    fn tank_rect_maps_corners() {
        let scene = SceneDef {
            width: 1000.0,
            height: 650.0,
        };
        let screen = Rect::from_min_size(Pos2::ZERO, Vec2::new(1000.0, 650.0));
        let xf = ScreenTransform::fit(scene, screen);
        let r = xf.rect(tk_graph::Rect::at(50.0, 50.0));
        assert_eq!(r.min, Pos2::new(50.0, 50.0));
        assert_eq!(r.max, Pos2::new(150.0, 190.0));
        assert_eq!(xf.length(12.0), 12.0);
    }
}
