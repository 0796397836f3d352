use std::time::Duration;

use egui::{Align2, FontId, Mesh, Pos2, Rect, Shape};

use super::state::WeightChart;
use crate::chart::{ChartFrame, DrawCommand, LinearGradient};
use crate::storage::KeyValueStore;

const CHART_HEIGHT: f32 = 260.0;

impl WeightChart {
    pub fn show(&mut self, ui: &mut egui::Ui, store: &mut dyn KeyValueStore, now: Duration) {
        ui.heading("Weight Progress");

        ui.horizontal(|ui| {
            ui.label("Weight (kg):");
            let response = ui.add(egui::TextEdit::singleline(&mut self.entry).desired_width(80.0));
            let submitted = response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
            if ui.button("Add").clicked() || submitted {
                self.submit_entry(store);
            }
            if ui.button("Clear").clicked() {
                self.confirm_clear = true;
            }
        });

        if let Some(message) = &self.message {
            ui.colored_label(ui.visuals().warn_fg_color, message);
        }

        if self.confirm_clear {
            let mut confirmed = false;
            let mut cancelled = false;
            egui::Window::new("Clear weights")
                .collapsible(false)
                .resizable(false)
                .anchor(Align2::CENTER_CENTER, egui::Vec2::ZERO)
                .show(ui.ctx(), |ui| {
                    ui.label("Clear all saved weight entries?");
                    ui.horizontal(|ui| {
                        confirmed = ui.button("Clear").clicked();
                        cancelled = ui.button("Cancel").clicked();
                    });
                });
            if confirmed {
                self.clear(store);
            } else if cancelled {
                self.confirm_clear = false;
            }
        }

        let (rect, _) = ui.allocate_exact_size(
            egui::vec2(ui.available_width(), CHART_HEIGHT),
            egui::Sense::hover(),
        );
        self.set_surface(rect.size(), now);

        let pixel_density = ui.ctx().pixels_per_point();
        if let Some(frame) = self.refresh(store, now, pixel_density) {
            paint_frame(&ui.painter_at(rect), rect, frame);
        }
    }
}

/// Replays `frame` with its logical origin at `rect.min`.
///
/// egui already scales points by `pixels_per_point`, so the frame's own
/// transform is not reapplied.
pub fn paint_frame(painter: &egui::Painter, rect: Rect, frame: &ChartFrame) {
    let origin = rect.min.to_vec2();
    for command in &frame.commands {
        match command {
            DrawCommand::SetTransform { .. } => {}
            DrawCommand::Clear { .. } => {
                painter.rect_filled(rect, 4.0, painter.ctx().style().visuals.extreme_bg_color);
            }
            DrawCommand::StrokeSegments { segments, stroke } => {
                for [a, b] in segments {
                    painter.line_segment([*a + origin, *b + origin], *stroke);
                }
            }
            DrawCommand::StrokePolyline { points, stroke } => {
                let points = points.iter().map(|p| *p + origin).collect();
                painter.add(Shape::line(points, *stroke));
            }
            DrawCommand::FillGradient { polygon, gradient } => {
                if let Some(mesh) = gradient_mesh(polygon, gradient, origin) {
                    painter.add(Shape::mesh(mesh));
                }
            }
            DrawCommand::FillCircle { center, radius, color } => {
                painter.circle_filled(*center + origin, *radius, *color);
            }
            DrawCommand::Text { pos, text, size, color } => {
                painter.text(
                    *pos + origin,
                    Align2::LEFT_BOTTOM,
                    text,
                    FontId::proportional(*size),
                    *color,
                );
            }
        }
    }
}

/// Tessellates the area under a polyline into vertical trapezoids.
///
/// `polygon` is `[bottom-left, points.., bottom-right]`, as the chart emits it.
fn gradient_mesh(polygon: &[Pos2], gradient: &LinearGradient, origin: egui::Vec2) -> Option<Mesh> {
    let baseline = polygon.first()?.y;
    let line = polygon.get(1..polygon.len().checked_sub(1)?)?;
    if line.len() < 2 {
        return None;
    }

    let mut mesh = Mesh::default();
    for pair in line.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        let base = mesh.vertices.len() as u32;
        mesh.colored_vertex(a + origin, gradient.color_at(a.y));
        mesh.colored_vertex(b + origin, gradient.color_at(b.y));
        mesh.colored_vertex(egui::pos2(b.x, baseline) + origin, gradient.color_at(baseline));
        mesh.colored_vertex(egui::pos2(a.x, baseline) + origin, gradient.color_at(baseline));
        mesh.add_triangle(base, base + 1, base + 2);
        mesh.add_triangle(base, base + 2, base + 3);
    }
    Some(mesh)
}
