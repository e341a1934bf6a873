//! Status map to positioned geometry.

use crate::Result;
use crate::config::{Circle, CirclePlacement, DiagramConfig};
use crate::geom::{ArcSpan, Point, circle_intersections, point, polar};
use crate::model::{
    CircleLayout, DiagramLayout, OverlapLayout, RingArc, SegmentLabel, SegmentLayout,
};
use crate::text::{TextAnchor, wrap_words};
use trefoil_core::StatusMap;

pub fn layout_diagram(statuses: &StatusMap, config: &DiagramConfig) -> Result<DiagramLayout> {
    config.validate()?;

    let circles: Vec<CircleLayout> = config
        .circles
        .iter()
        .map(|p| CircleLayout {
            circle: p.circle,
            label: p.circle.label(),
            center: center_of(p).into(),
        })
        .collect();

    let mut segments = Vec::with_capacity(9);
    for placement in &config.circles {
        layout_segments(placement, statuses, config, &mut segments);
    }

    let mut overlaps = Vec::new();
    for (i, a) in config.circles.iter().enumerate() {
        for b in &config.circles[i + 1..] {
            match circle_intersections(
                center_of(a),
                config.outer_radius,
                center_of(b),
                config.outer_radius,
            ) {
                Some((p1, p2)) => overlaps.push(OverlapLayout {
                    circles: [a.circle, b.circle],
                    radius: config.outer_radius,
                    p1: p1.into(),
                    p2: p2.into(),
                }),
                None => tracing::trace!(
                    a = a.circle.label(),
                    b = b.circle.label(),
                    "circles do not overlap; omitting lens"
                ),
            }
        }
    }

    tracing::debug!(
        segments = segments.len(),
        overlaps = overlaps.len(),
        "laid out diagram"
    );

    Ok(DiagramLayout {
        width: config.width,
        height: config.height,
        outer_radius: config.outer_radius,
        inner_radius: config.inner_radius,
        circles,
        segments,
        overlaps,
    })
}

fn center_of(p: &CirclePlacement) -> Point {
    point(p.cx, p.cy)
}

fn layout_segments(
    placement: &CirclePlacement,
    statuses: &StatusMap,
    config: &DiagramConfig,
    out: &mut Vec<SegmentLayout>,
) {
    let center = center_of(placement);
    let span = ArcSpan::between(placement.start_angle, placement.end_angle);
    let areas = Circle::areas(placement.circle);

    for (position, (area, sub)) in areas.into_iter().zip(span.subdivide(3)).enumerate() {
        let status = statuses.get(area);
        let arc = RingArc {
            start_angle: sub.start,
            end_angle: sub.end,
            sweep: sub.sweep,
            large_arc: sub.is_large(),
            outer_start: polar(center, config.outer_radius, sub.start).into(),
            outer_end: polar(center, config.outer_radius, sub.end).into(),
            inner_start: polar(center, config.inner_radius, sub.start).into(),
            inner_end: polar(center, config.inner_radius, sub.end).into(),
        };

        let angle = sub.mid_angle();
        let label = SegmentLabel {
            position: polar(center, config.outer_radius + config.label_offset, angle).into(),
            angle,
            anchor: TextAnchor::for_angle(angle),
            lines: wrap_words(area.display_name(), config.label_wrap_width),
        };

        out.push(SegmentLayout {
            area,
            name: area.display_name(),
            circle: placement.circle,
            position,
            status,
            fill: config.palette.fill(status).to_string(),
            arc,
            label,
        });
    }
}
