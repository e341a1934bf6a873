#![forbid(unsafe_code)]

//! `trefoil` scores a 27-question business diagnostic and draws the result as three overlapping
//! rings (Cash, Capacity, Customers), each split into three status-colored segments.
//!
//! # Features
//!
//! - `render`: enable layout + SVG rendering (`trefoil::render`)
//! - `raster`: enable PNG/JPG output and PNG data URIs via pure-Rust SVG rasterization

pub use trefoil_core::*;

#[cfg(feature = "render")]
pub mod render {
    pub use trefoil_render::{
        Circle, CirclePlacement, DiagramConfig, DiagramInputError, DiagramLayout, InvalidStatus,
        Palette, SvgRenderOptions, layout_diagram, render_svg, status_map_from_names,
        svg_data_uri,
    };
    pub use trefoil_render::Error as RenderError;

    #[cfg(feature = "raster")]
    pub mod raster;

    use trefoil_core::{Answers, AssessmentResults, StatusMap};

    #[derive(Debug, thiserror::Error)]
    pub enum HeadlessError {
        #[error(transparent)]
        Input(#[from] trefoil_core::Error),
        #[error(transparent)]
        Render(#[from] trefoil_render::Error),
    }

    pub type Result<T> = std::result::Result<T, HeadlessError>;

    /// Converts an arbitrary string into a conservative SVG `id` token, so several diagrams can
    /// be inlined into one page without their scoped CSS colliding.
    ///
    /// This helper:
    /// - trims whitespace
    /// - replaces unsupported characters with `-`
    /// - ensures the id starts with an ASCII letter by prefixing `t-` when needed
    pub fn sanitize_svg_id(raw: &str) -> String {
        let raw = raw.trim();
        if raw.is_empty() {
            return "t-untitled".to_string();
        }

        let mut out = String::with_capacity(raw.len() + 4);
        for ch in raw.chars() {
            let ok = ch.is_ascii_alphanumeric() || ch == '-' || ch == '_' || ch == '.';
            out.push(if ok { ch } else { '-' });
        }

        if !out.chars().next().is_some_and(|c| c.is_ascii_alphabetic()) {
            out.insert_str(0, "t-");
        }
        while out.contains("--") {
            out = out.replace("--", "-");
        }
        let out = out.trim_matches('-');
        if out.is_empty() || out == "t" {
            return "t-untitled".to_string();
        }
        out.to_string()
    }

    pub fn render_statuses_svg(
        statuses: &StatusMap,
        config: &DiagramConfig,
        options: &SvgRenderOptions,
    ) -> Result<String> {
        Ok(trefoil_render::render_diagram_with(statuses, config, options)?)
    }

    pub fn render_results_svg(
        results: &AssessmentResults,
        config: &DiagramConfig,
        options: &SvgRenderOptions,
    ) -> Result<String> {
        render_statuses_svg(&results.status_map(), config, options)
    }

    /// A scored assessment together with its rendered diagram.
    #[derive(Debug, Clone)]
    pub struct Report {
        pub results: AssessmentResults,
        pub svg: String,
    }

    impl Report {
        pub fn svg_data_uri(&self) -> String {
            svg_data_uri(&self.svg)
        }
    }

    /// Scores `answers` against the built-in catalogue and renders the status diagram.
    pub fn assess(
        answers: &Answers,
        config: &DiagramConfig,
        options: &SvgRenderOptions,
    ) -> Result<Report> {
        let results = trefoil_core::compute_results(answers);
        tracing::debug!(
            weakest = results.weakest_area.result.area.id(),
            total = results.overall_health.total_score,
            "scored assessment"
        );
        let svg = render_results_svg(&results, config, options)?;
        Ok(Report { results, svg })
    }

    /// Parses a JSON answers object, then scores and renders it.
    pub fn assess_json(
        answers_json: &str,
        config: &DiagramConfig,
        options: &SvgRenderOptions,
    ) -> Result<Report> {
        let answers = Answers::from_json_str(answers_json)?;
        assess(&answers, config, options)
    }

}
