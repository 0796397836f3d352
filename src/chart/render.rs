use egui::{pos2, Color32, Pos2, Stroke};

use super::{ChartFrame, DrawCommand, LinearGradient};
use crate::weights::{SampleSeries, WeightSample};

/// Space kept free on every side of the plot, in logical units.
pub const MARGIN: f32 = 42.0;

const GRID_INTERVALS: usize = 4;

#[derive(Debug, Clone)]
pub struct ChartStyle {
    pub grid: Color32,
    pub area_top: Color32,
    pub area_bottom: Color32,
    pub line: Color32,
    pub line_width: f32,
    pub point: Color32,
    pub point_radius: f32,
    pub label: Color32,
    pub label_size: f32,
    pub latest: Color32,
    pub latest_size: f32,
    pub status: Color32,
    pub status_size: f32,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            grid: Color32::from_rgba_unmultiplied(255, 255, 255, 15),
            area_top: Color32::from_rgba_unmultiplied(24, 210, 110, 46),
            area_bottom: Color32::from_rgba_unmultiplied(24, 210, 110, 5),
            line: Color32::from_rgb(0x18, 0xd2, 0x6e),
            line_width: 2.6,
            point: Color32::WHITE,
            point_radius: 3.6,
            label: Color32::from_rgb(0xdf, 0xff, 0xe8),
            label_size: 13.0,
            latest: Color32::WHITE,
            latest_size: 16.0,
            status: Color32::from_rgba_unmultiplied(200, 255, 220, 230),
            status_size: 14.0,
        }
    }
}

/// The rectangle inside the margins where samples are plotted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotArea {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl PlotArea {
    pub fn for_surface(width: f32, height: f32) -> Self {
        Self {
            left: MARGIN,
            top: MARGIN,
            width: (width - 2.0 * MARGIN).max(0.0),
            height: (height - 2.0 * MARGIN).max(0.0),
        }
    }

    pub fn right(&self) -> f32 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }
}

/// Padded weight range mapped onto the plot height.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValueRange {
    pub min: f64,
    pub max: f64,
    pub range: f64,
}

impl ValueRange {
    pub fn for_series(series: &SampleSeries) -> Option<Self> {
        let (lo, hi) = series.weight_bounds()?;
        let min = lo - 1.0;
        let max = hi + 1.0;
        Some(Self {
            min,
            max,
            range: (max - min).max(1.0),
        })
    }

    /// Fraction of the plot height `weight` sits above the bottom edge.
    pub fn normalize(&self, weight: f64) -> f32 {
        ((weight - self.min) / self.range) as f32
    }
}

pub fn render(series: &SampleSeries, width: f32, height: f32, pixel_density: f32) -> ChartFrame {
    render_with_style(series, width, height, pixel_density, &ChartStyle::default())
}

/// Produces the drawing commands for `series` on a `width` x `height` surface.
///
/// Coordinates are logical units; the frame's buffer size is in physical
/// pixels at `pixel_density`.
pub fn render_with_style(
    series: &SampleSeries,
    width: f32,
    height: f32,
    pixel_density: f32,
    style: &ChartStyle,
) -> ChartFrame {
    let dpr = pixel_density.max(1.0);
    let mut frame = ChartFrame {
        buffer_width: (width * dpr).round() as u32,
        buffer_height: (height * dpr).round() as u32,
        commands: Vec::new(),
    };

    let Some(values) = ValueRange::for_series(series) else {
        frame.commands.push(DrawCommand::Clear { width, height });
        frame.commands.push(DrawCommand::Text {
            pos: pos2(16.0, 36.0),
            text: "No entries yet, add weight to see progress".to_owned(),
            size: style.status_size,
            color: style.status,
        });
        return frame;
    };

    let area = PlotArea::for_surface(width, height);
    let cmds = &mut frame.commands;
    cmds.push(DrawCommand::SetTransform { scale: dpr });
    cmds.push(DrawCommand::Clear { width, height });

    let grid = (0..=GRID_INTERVALS)
        .map(|i| {
            let y = area.top + area.height / GRID_INTERVALS as f32 * i as f32;
            [pos2(area.left, y), pos2(area.right(), y)]
        })
        .collect();
    cmds.push(DrawCommand::StrokeSegments {
        segments: grid,
        stroke: Stroke::new(1.0, style.grid),
    });

    let points = plot_points(series, &area, &values);
    let (Some(first), Some(last)) = (points.first().copied(), points.last().copied()) else {
        return frame;
    };

    let mut polygon = Vec::with_capacity(points.len() + 2);
    polygon.push(pos2(first.x, area.bottom()));
    polygon.extend_from_slice(&points);
    polygon.push(pos2(last.x, area.bottom()));
    cmds.push(DrawCommand::FillGradient {
        polygon,
        gradient: LinearGradient {
            from_y: area.top,
            to_y: area.bottom(),
            from: style.area_top,
            to: style.area_bottom,
        },
    });

    cmds.push(DrawCommand::StrokePolyline {
        points: points.clone(),
        stroke: Stroke::new(style.line_width, style.line),
    });

    for &center in &points {
        cmds.push(DrawCommand::FillCircle {
            center,
            radius: style.point_radius,
            color: style.point,
        });
    }

    for (point, sample) in points.iter().zip(series.iter()) {
        cmds.push(DrawCommand::Text {
            pos: pos2(point.x - 18.0, area.bottom() + 18.0),
            text: sample.short_date(),
            size: style.label_size,
            color: style.label,
        });
    }

    if let Some(latest) = series.latest() {
        cmds.push(DrawCommand::Text {
            pos: pos2(area.left, 22.0),
            text: format!("Latest: {} kg", latest.weight()),
            size: style.latest_size,
            color: style.latest,
        });
    }

    frame
}

fn plot_points(series: &SampleSeries, area: &PlotArea, values: &ValueRange) -> Vec<Pos2> {
    let step = area.width / (series.len().saturating_sub(1).max(1)) as f32;
    series
        .iter()
        .map(WeightSample::weight)
        .enumerate()
        .map(|(i, weight)| {
            let x = area.left + step * i as f32;
            let y = area.top + area.height - values.normalize(weight) * area.height;
            pos2(x, y)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;
    use crate::weights;
    use chrono::{TimeZone, Utc};

    fn series_of(values: &[f64]) -> SampleSeries {
        values
            .iter()
            .enumerate()
            .map(|(i, &w)| {
                let ts = Utc.with_ymd_and_hms(2024, 5, 1 + i as u32, 9, 0, 0).unwrap();
                WeightSample::new(ts, w)
            })
            .collect()
    }

    fn assert_close(a: f32, b: f32) {
        assert!((a - b).abs() < 1e-3, "{a} != {b}");
    }

    #[test]
    fn test_empty_series_draws_status_only() {
        let frame = render(&SampleSeries::new(), 600.0, 300.0, 2.0);
        assert_eq!(frame.commands.len(), 2);
        assert!(matches!(frame.commands[0], DrawCommand::Clear { .. }));
        match &frame.commands[1] {
            DrawCommand::Text { text, pos, .. } => {
                assert!(text.starts_with("No entries yet"));
                assert_eq!(*pos, pos2(16.0, 36.0));
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_buffer_matches_pixel_density() {
        let frame = render(&series_of(&[70.0]), 333.3, 200.2, 1.5);
        assert_eq!((frame.buffer_width, frame.buffer_height), (500, 300));
        assert_eq!(frame.commands[0], DrawCommand::SetTransform { scale: 1.5 });

        let frame = render(&SampleSeries::new(), 100.4, 50.0, 0.5);
        assert_eq!((frame.buffer_width, frame.buffer_height), (100, 50));
    }

    #[test]
    fn test_grid_has_five_lines() {
        let frame = render(&series_of(&[70.0, 71.0]), 484.0, 284.0, 1.0);
        let segments = frame
            .commands
            .iter()
            .find_map(|cmd| match cmd {
                DrawCommand::StrokeSegments { segments, .. } => Some(segments.clone()),
                _ => None,
            })
            .unwrap();
        let ys: Vec<f32> = segments.iter().map(|s| s[0].y).collect();
        assert_eq!(ys, vec![42.0, 92.0, 142.0, 192.0, 242.0]);
        assert!(segments.iter().all(|s| s[0].x == 42.0 && s[1].x == 442.0));
    }

    #[test]
    fn test_single_sample_sits_on_left_margin() {
        let frame = render(&series_of(&[81.0]), 400.0, 250.0, 1.0);
        let points: Vec<_> = frame.circles().collect();
        assert_eq!(points.len(), 1);
        assert_close(points[0].x, MARGIN);
        assert!(points[0].y.is_finite());
    }

    #[test]
    fn test_equal_weights_share_mid_height() {
        let series = series_of(&[70.0, 70.0, 70.0]);
        let values = ValueRange::for_series(&series).unwrap();
        assert_eq!((values.min, values.max, values.range), (69.0, 71.0, 2.0));

        let area = PlotArea::for_surface(500.0, 300.0);
        let frame = render(&series, 500.0, 300.0, 1.0);
        let points: Vec<_> = frame.circles().collect();
        assert_eq!(points.len(), 3);
        for p in &points {
            assert_close(p.y, area.top + area.height / 2.0);
        }
        assert_close(points[2].x, area.right());
    }

    #[test]
    fn test_three_appends_scenario() {
        let mut store = MemoryStore::default();
        for w in [80.0, 79.5, 79.0] {
            weights::append(&mut store, w).unwrap();
        }
        let series = weights::load(&store);
        assert_eq!(series.len(), 3);

        let values = ValueRange::for_series(&series).unwrap();
        assert_eq!((values.min, values.max, values.range), (78.0, 81.0, 3.0));

        let area = PlotArea::for_surface(600.0, 342.0);
        let frame = render(&series, 600.0, 342.0, 2.0);
        let third = frame.circles().nth(2).unwrap();
        assert_close(third.y, area.top + 2.0 / 3.0 * area.height);
        assert_close(third.x, area.right());
    }

    #[test]
    fn test_draw_order_and_labels() {
        let frame = render(&series_of(&[80.0, 79.5]), 500.0, 300.0, 1.0);
        let kinds: Vec<&str> = frame
            .commands
            .iter()
            .map(|cmd| match cmd {
                DrawCommand::SetTransform { .. } => "transform",
                DrawCommand::Clear { .. } => "clear",
                DrawCommand::StrokeSegments { .. } => "grid",
                DrawCommand::FillGradient { .. } => "area",
                DrawCommand::StrokePolyline { .. } => "line",
                DrawCommand::FillCircle { .. } => "point",
                DrawCommand::Text { .. } => "text",
            })
            .collect();
        assert_eq!(
            kinds,
            ["transform", "clear", "grid", "area", "line", "point", "point", "text", "text", "text"]
        );

        let texts: Vec<&str> = frame
            .commands
            .iter()
            .filter_map(|cmd| match cmd {
                DrawCommand::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(texts, ["05-01", "05-02", "Latest: 79.5 kg"]);
    }

    #[test]
    fn test_area_closes_on_plot_bottom() {
        let frame = render(&series_of(&[80.0, 82.0, 81.0]), 500.0, 300.0, 1.0);
        let area = PlotArea::for_surface(500.0, 300.0);
        let polygon = frame
            .commands
            .iter()
            .find_map(|cmd| match cmd {
                DrawCommand::FillGradient { polygon, .. } => Some(polygon.clone()),
                _ => None,
            })
            .unwrap();
        assert_eq!(polygon.len(), 5);
        assert_eq!(polygon[0], pos2(area.left, area.bottom()));
        assert_eq!(polygon[4], pos2(area.right(), area.bottom()));
    }

    #[test]
    fn test_area_line_markers_and_label_placement() {
        let series = series_of(&[80.0, 82.0, 81.0]);
        let area = PlotArea::for_surface(500.0, 300.0);
        let frame = render(&series, 500.0, 300.0, 1.0);

        let gradient = frame
            .commands
            .iter()
            .find_map(|cmd| match cmd {
                DrawCommand::FillGradient { gradient, .. } => Some(*gradient),
                _ => None,
            })
            .unwrap();
        assert_eq!(gradient.from_y, area.top);
        assert_eq!(gradient.to_y, area.bottom());
        assert!(gradient.from.a() > gradient.to.a());

        let line_width = frame
            .commands
            .iter()
            .find_map(|cmd| match cmd {
                DrawCommand::StrokePolyline { stroke, .. } => Some(stroke.width),
                _ => None,
            })
            .unwrap();
        assert_eq!(line_width, 2.6);

        let radii: Vec<f32> = frame
            .commands
            .iter()
            .filter_map(|cmd| match cmd {
                DrawCommand::FillCircle { radius, .. } => Some(*radius),
                _ => None,
            })
            .collect();
        assert_eq!(radii, [3.6, 3.6, 3.6]);

        let points: Vec<Pos2> = frame.circles().collect();
        let labels: Vec<Pos2> = frame
            .commands
            .iter()
            .filter_map(|cmd| match cmd {
                DrawCommand::Text { pos, .. } => Some(*pos),
                _ => None,
            })
            .collect();
        assert_eq!(labels.len(), 4);
        for (label, point) in labels.iter().zip(&points) {
            assert_close(label.x, point.x - 18.0);
            assert_close(label.y, area.bottom() + 18.0);
        }
        assert_eq!(labels[3], pos2(area.left, 22.0));
    }
}
