use crate::area::Area;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Catalogue(#[from] CatalogueError),

    #[error(transparent)]
    ParseStatus(#[from] ParseStatusError),

    #[error("answers JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A catalogue that cannot be scored deterministically.
///
/// These are configuration bugs, never answer-shape issues.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogueError {
    #[error("area `{}` is defined more than once", area.id())]
    DuplicateArea { area: Area },

    #[error("area `{}` is missing from the catalogue", area.id())]
    MissingArea { area: Area },

    #[error("question id `{id}` is defined more than once")]
    DuplicateQuestion { id: String },

    #[error("area `{}` has {actual} questions, expected {expected}", area.id())]
    QuestionCount {
        area: Area,
        expected: u32,
        actual: u32,
    },

    #[error("unsupported questions per area: {count} (expected 3 or 5)")]
    UnsupportedQuestionCount { count: u32 },

    #[error(
        "score bands do not partition 0..={max_score}: low ends at {low_max}, medium ends at {medium_max}"
    )]
    Bands {
        low_max: u32,
        medium_max: u32,
        max_score: u32,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown status tag `{tag}` (expected low, medium or high)")]
pub struct ParseStatusError {
    pub tag: String,
}
