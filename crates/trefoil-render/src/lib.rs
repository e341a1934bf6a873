#![forbid(unsafe_code)]

//! Headless renderer for the trefoil three-circle status diagram.
//!
//! Rendering is split into two stages:
//! - [`layout_diagram`]: a [`StatusMap`] plus [`DiagramConfig`] become a [`DiagramLayout`]
//!   (ring segments, overlap lenses, label positions), all plain numbers
//! - [`svg::render_svg`]: a layout becomes a self-contained SVG document
//!
//! [`render_diagram`] runs both. Name-keyed input from untyped sources goes through
//! [`render_diagram_from_names`], which validates every key and value before any geometry is
//! computed.

pub mod config;
pub mod geom;
pub mod input;
pub mod layout;
pub mod model;
pub mod svg;
pub mod text;

pub use config::{Circle, CirclePlacement, DiagramConfig, Palette};
pub use input::{DiagramInputError, InvalidStatus, status_map_from_names};
pub use layout::layout_diagram;
pub use model::{
    CircleLayout, DiagramLayout, LayoutPoint, OverlapLayout, RingArc, SegmentLabel, SegmentLayout,
};
pub use svg::{SvgRenderOptions, render_svg, svg_data_uri};

use trefoil_core::StatusMap;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    InvalidInput(#[from] DiagramInputError),
    #[error("invalid diagram config: {message}")]
    InvalidConfig { message: String },
    #[error("diagram config JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

/// Renders with the default layout and SVG options.
pub fn render_diagram(statuses: &StatusMap) -> Result<String> {
    render_diagram_with(statuses, &DiagramConfig::default(), &SvgRenderOptions::default())
}

pub fn render_diagram_with(
    statuses: &StatusMap,
    config: &DiagramConfig,
    options: &SvgRenderOptions,
) -> Result<String> {
    let layout = layout_diagram(statuses, config)?;
    Ok(render_svg(&layout, config, options))
}

/// Validates display-name keyed status tags, then renders with the given config.
///
/// Nothing is drawn unless all nine areas are present with a recognised tag and no unknown key
/// appears; the error lists every offending name.
pub fn render_diagram_from_names<I, K, V>(
    entries: I,
    config: &DiagramConfig,
    options: &SvgRenderOptions,
) -> Result<String>
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    let statuses = status_map_from_names(entries)?;
    render_diagram_with(&statuses, config, options)
}
