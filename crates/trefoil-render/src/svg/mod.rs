//! SVG serialization of a [`DiagramLayout`].
//!
//! Layers are emitted bottom to top: background, neutral base discs, status-colored ring
//! segments, overlap lenses, outlines, circle titles, segment labels. Each segment path carries
//! `class="segment"` and a `data-area` attribute holding the area id.

mod util;

use crate::config::DiagramConfig;
use crate::model::{DiagramLayout, LayoutPoint, OverlapLayout, SegmentLayout};
use base64::Engine as _;
use std::fmt::Write as _;

use util::{escape_xml, escape_xml_into, fmt, fmt_into, fmt_path, fmt_path_into};

#[derive(Debug, Clone)]
pub struct SvgRenderOptions {
    /// Root element id. CSS rules are scoped to it so several diagrams can share a page.
    pub diagram_id: Option<String>,
    /// Accessible title, emitted as `<title>` and referenced via `aria-labelledby`.
    pub title: Option<String>,
    /// When false the white background rect is omitted.
    pub include_background: bool,
    /// When false segment labels are omitted (circle titles are always drawn).
    pub include_segment_labels: bool,
}

impl Default for SvgRenderOptions {
    fn default() -> Self {
        Self {
            diagram_id: None,
            title: None,
            include_background: true,
            include_segment_labels: true,
        }
    }
}

pub fn render_svg(
    layout: &DiagramLayout,
    config: &DiagramConfig,
    options: &SvgRenderOptions,
) -> String {
    let diagram_id = options.diagram_id.as_deref().unwrap_or("trefoil");
    let id = escape_xml(diagram_id);
    let palette = &config.palette;

    let mut out = String::with_capacity(8 * 1024);
    let w = fmt(layout.width);
    let h = fmt(layout.height);
    let _ = write!(
        &mut out,
        r#"<svg id="{id}" xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}" role="img" aria-roledescription="trefoil""#
    );
    if options.title.is_some() {
        let _ = write!(&mut out, r#" aria-labelledby="{id}-title""#);
    }
    out.push('>');
    if let Some(title) = options.title.as_deref() {
        let _ = write!(&mut out, r#"<title id="{id}-title">"#);
        escape_xml_into(&mut out, title);
        out.push_str("</title>");
    }

    out.push_str("<style>");
    write_css(&mut out, &id, config);
    out.push_str("</style>");

    if options.include_background {
        let _ = write!(
            &mut out,
            r#"<rect class="background" x="0" y="0" width="{w}" height="{h}" fill="{}"/>"#,
            escape_xml(&palette.background)
        );
    }

    let outer = fmt(layout.outer_radius);
    out.push_str(r#"<g class="base-circles">"#);
    for c in &layout.circles {
        let _ = write!(
            &mut out,
            r#"<circle cx="{}" cy="{}" r="{outer}" fill="{}"/>"#,
            fmt(c.center.x),
            fmt(c.center.y),
            escape_xml(&palette.neutral)
        );
    }
    out.push_str("</g>");

    out.push_str(r#"<g class="segments">"#);
    for seg in &layout.segments {
        write_segment(&mut out, seg, layout);
    }
    out.push_str("</g>");

    out.push_str(r#"<g class="overlaps">"#);
    for lens in &layout.overlaps {
        write_overlap(&mut out, lens, &palette.overlap);
    }
    out.push_str("</g>");

    out.push_str(r#"<g class="outlines">"#);
    for c in &layout.circles {
        let _ = write!(
            &mut out,
            r#"<circle cx="{}" cy="{}" r="{outer}" fill="none" stroke="{}" stroke-width="{}"/>"#,
            fmt(c.center.x),
            fmt(c.center.y),
            escape_xml(&palette.outline),
            fmt(config.outline_width)
        );
    }
    out.push_str("</g>");

    out.push_str(r#"<g class="category-labels">"#);
    for c in &layout.circles {
        let _ = write!(
            &mut out,
            r#"<text class="category-label" x="{}" y="{}" text-anchor="middle">{}</text>"#,
            fmt(c.center.x),
            fmt(c.center.y),
            escape_xml(c.label)
        );
    }
    out.push_str("</g>");

    if options.include_segment_labels {
        out.push_str(r#"<g class="segment-labels">"#);
        for seg in &layout.segments {
            write_segment_label(&mut out, seg, config.label_line_height);
        }
        out.push_str("</g>");
    }

    out.push_str("</svg>\n");
    out
}

fn write_css(out: &mut String, id: &str, config: &DiagramConfig) {
    let font = escape_xml(&config.font_family);
    let _ = write!(
        out,
        "#{id} .category-label{{font-family:{font};font-size:{}px;font-weight:bold;fill:{};}}",
        fmt(config.category_font_size),
        escape_xml(&config.palette.category_text)
    );
    let _ = write!(
        out,
        "#{id} .segment-label{{font-family:{font};font-size:{}px;fill:{};}}",
        fmt(config.segment_font_size),
        escape_xml(&config.palette.segment_text)
    );
}

fn push_point(out: &mut String, p: LayoutPoint) {
    fmt_path_into(out, p.x);
    out.push(',');
    fmt_path_into(out, p.y);
}

/// Outer arc counter-clockwise from start to end, then the inner arc back.
fn ring_segment_path(seg: &SegmentLayout, outer_r: f64, inner_r: f64) -> String {
    let arc = &seg.arc;
    let large = if arc.large_arc { 1 } else { 0 };
    let (ro, ri) = (fmt_path(outer_r), fmt_path(inner_r));

    let mut d = String::with_capacity(128);
    d.push('M');
    push_point(&mut d, arc.outer_start);
    let _ = write!(&mut d, "A{ro},{ro},0,{large},0,");
    push_point(&mut d, arc.outer_end);
    d.push('L');
    push_point(&mut d, arc.inner_end);
    let _ = write!(&mut d, "A{ri},{ri},0,{large},1,");
    push_point(&mut d, arc.inner_start);
    d.push('Z');
    d
}

fn write_segment(out: &mut String, seg: &SegmentLayout, layout: &DiagramLayout) {
    let d = ring_segment_path(seg, layout.outer_radius, layout.inner_radius);
    let _ = write!(
        out,
        r#"<path class="segment" data-area="{}" d="{d}" fill="{}"/>"#,
        seg.area.id(),
        escape_xml(&seg.fill)
    );
}

fn lens_path(lens: &OverlapLayout) -> String {
    let r = fmt_path(lens.radius);
    let mut d = String::with_capacity(96);
    d.push('M');
    push_point(&mut d, lens.p1);
    let _ = write!(&mut d, "A{r},{r},0,0,0,");
    push_point(&mut d, lens.p2);
    let _ = write!(&mut d, "A{r},{r},0,0,0,");
    push_point(&mut d, lens.p1);
    d.push('Z');
    d
}

fn write_overlap(out: &mut String, lens: &OverlapLayout, fill: &str) {
    let [a, b] = lens.circles;
    let _ = write!(
        out,
        r#"<path class="overlap" data-circles="{} {}" d="{}" fill="{}"/>"#,
        a.label().to_ascii_lowercase(),
        b.label().to_ascii_lowercase(),
        lens_path(lens),
        escape_xml(fill)
    );
}

fn write_segment_label(out: &mut String, seg: &SegmentLayout, line_height: f64) {
    let label = &seg.label;
    let x = fmt(label.position.x);
    let y = fmt(label.position.y);
    let _ = write!(
        out,
        r#"<text class="segment-label" data-area="{}" x="{x}" y="{y}" text-anchor="{}">"#,
        seg.area.id(),
        label.anchor.as_str()
    );
    if let [only] = label.lines.as_slice() {
        escape_xml_into(out, only);
    } else {
        for (i, line) in label.lines.iter().enumerate() {
            if i == 0 {
                let _ = write!(out, r#"<tspan x="{x}" y="{y}">"#);
            } else {
                out.push_str(r#"<tspan x=""#);
                out.push_str(&x);
                out.push_str(r#"" dy=""#);
                fmt_into(out, line_height);
                out.push_str(r#"">"#);
            }
            escape_xml_into(out, line);
            out.push_str("</tspan>");
        }
    }
    out.push_str("</text>");
}

/// Wraps an SVG document as a base64 `data:` URI suitable for `<img src>`.
pub fn svg_data_uri(svg: &str) -> String {
    let encoded = base64::engine::general_purpose::STANDARD.encode(svg.as_bytes());
    format!("data:image/svg+xml;base64,{encoded}")
}
