#![forbid(unsafe_code)]

//! Scoring core for the trefoil business diagnostic.
//!
//! - a fixed catalogue of nine [`Area`]s with their questions and narrative copy
//! - [`ScoringEngine`]: answers to per-area scores, statuses, overall health and the weakest area
//! - [`StatusMap`]: the typed status-per-area projection consumed by the diagram renderer
//!
//! Everything here is synchronous and free of shared mutable state.

pub mod answers;
pub mod area;
pub mod catalogue;
pub mod error;
pub mod scoring;
pub mod status;

pub use answers::Answers;
pub use area::Area;
pub use catalogue::{AreaDefinition, Catalogue, Question, ScoreBands, StatusText};
pub use error::{CatalogueError, Error, ParseStatusError, Result};
pub use scoring::{
    AreaResult, AssessmentResults, OverallHealth, ScoringEngine, WeakestArea, compute_results,
};
pub use status::{Status, StatusCounts, StatusMap};
