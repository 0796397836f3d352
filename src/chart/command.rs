use egui::{Color32, Pos2, Stroke};

/// Vertical gradient between two y positions in logical units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearGradient {
    pub from_y: f32,
    pub to_y: f32,
    pub from: Color32,
    pub to: Color32,
}

impl LinearGradient {
    /// Colour at `y`, clamped to the gradient ends.
    pub fn color_at(&self, y: f32) -> Color32 {
        let span = self.to_y - self.from_y;
        let t = if span.abs() < f32::EPSILON {
            0.0
        } else {
            ((y - self.from_y) / span).clamp(0.0, 1.0)
        };
        lerp_color(self.from, self.to, t)
    }
}

fn lerp_color(a: Color32, b: Color32, t: f32) -> Color32 {
    let mix = |x: u8, y: u8| (x as f32 + (y as f32 - x as f32) * t).round() as u8;
    Color32::from_rgba_premultiplied(
        mix(a.r(), b.r()),
        mix(a.g(), b.g()),
        mix(a.b(), b.b()),
        mix(a.a(), b.a()),
    )
}

/// One drawing step, in logical units unless stated otherwise.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Scale from logical units to physical pixels.
    SetTransform { scale: f32 },
    Clear { width: f32, height: f32 },
    /// Disjoint straight segments stroked as one path.
    StrokeSegments { segments: Vec<[Pos2; 2]>, stroke: Stroke },
    StrokePolyline { points: Vec<Pos2>, stroke: Stroke },
    /// Closed polygon filled with a vertical gradient.
    FillGradient { polygon: Vec<Pos2>, gradient: LinearGradient },
    FillCircle { center: Pos2, radius: f32, color: Color32 },
    /// Text whose bottom-left corner sits at `pos`.
    Text { pos: Pos2, text: String, size: f32, color: Color32 },
}

/// Everything needed to paint one chart.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartFrame {
    /// Physical pixel buffer size.
    pub buffer_width: u32,
    pub buffer_height: u32,
    pub commands: Vec<DrawCommand>,
}

impl ChartFrame {
    pub fn circles(&self) -> impl Iterator<Item = Pos2> + '_ {
        self.commands.iter().filter_map(|cmd| match cmd {
            DrawCommand::FillCircle { center, .. } => Some(*center),
            _ => None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gradient_clamps_to_ends() {
        let gradient = LinearGradient {
            from_y: 10.0,
            to_y: 110.0,
            from: Color32::from_rgba_premultiplied(0, 200, 0, 200),
            to: Color32::from_rgba_premultiplied(0, 0, 0, 0),
        };
        assert_eq!(gradient.color_at(0.0), gradient.from);
        assert_eq!(gradient.color_at(500.0), gradient.to);
        assert_eq!(gradient.color_at(60.0).a(), 100);
    }
}
