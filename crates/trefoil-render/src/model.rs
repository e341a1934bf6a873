use crate::config::Circle;
use crate::geom::Point;
use crate::text::TextAnchor;
use serde::Serialize;
use trefoil_core::{Area, Status};

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LayoutPoint {
    pub x: f64,
    pub y: f64,
}

impl From<Point> for LayoutPoint {
    fn from(p: Point) -> Self {
        Self { x: p.x, y: p.y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CircleLayout {
    pub circle: Circle,
    pub label: &'static str,
    pub center: LayoutPoint,
}

/// Arc geometry of one ring segment.
///
/// Angles are degrees in `[0, 360)`; the four corner points are precomputed so the SVG writer
/// never touches trigonometry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RingArc {
    pub start_angle: f64,
    pub end_angle: f64,
    pub sweep: f64,
    pub large_arc: bool,
    pub outer_start: LayoutPoint,
    pub outer_end: LayoutPoint,
    pub inner_start: LayoutPoint,
    pub inner_end: LayoutPoint,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SegmentLabel {
    pub position: LayoutPoint,
    pub angle: f64,
    pub anchor: TextAnchor,
    pub lines: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SegmentLayout {
    pub area: Area,
    pub name: &'static str,
    pub circle: Circle,
    /// Position within the circle's sweep (0 starts at the circle's start angle).
    pub position: usize,
    pub status: Status,
    pub fill: String,
    pub arc: RingArc,
    pub label: SegmentLabel,
}

/// Lens-shaped overlap between two rings, bounded by two arcs of radius `radius`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OverlapLayout {
    pub circles: [Circle; 2],
    pub radius: f64,
    pub p1: LayoutPoint,
    pub p2: LayoutPoint,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DiagramLayout {
    pub width: f64,
    pub height: f64,
    pub outer_radius: f64,
    pub inner_radius: f64,
    pub circles: Vec<CircleLayout>,
    /// Nine segments, grouped by circle in sweep order.
    pub segments: Vec<SegmentLayout>,
    pub overlaps: Vec<OverlapLayout>,
}

impl DiagramLayout {
    pub fn segment(&self, area: Area) -> Option<&SegmentLayout> {
        self.segments.iter().find(|s| s.area == area)
    }
}
