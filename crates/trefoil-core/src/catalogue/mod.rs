//! Immutable area and question catalogue.
//!
//! The catalogue is process-wide configuration: [`Catalogue::standard`] builds and validates
//! the built-in content once, and every scoring call borrows it.

mod builtin;

use crate::area::Area;
use crate::error::CatalogueError;
use crate::status::Status;
use rustc_hash::FxHashSet;
use serde::Serialize;
use std::ops::RangeInclusive;
use std::sync::OnceLock;

pub const RATING_MIN: i64 = 1;
pub const RATING_MAX: i64 = 5;

/// Description variants, one per status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatusText {
    pub low: &'static str,
    pub medium: &'static str,
    pub high: &'static str,
}

impl StatusText {
    pub fn for_status(&self, status: Status) -> &'static str {
        match status {
            Status::Low => self.low,
            Status::Medium => self.medium,
            Status::High => self.high,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AreaDefinition {
    #[serde(rename = "id")]
    pub area: Area,
    pub chaos_name: &'static str,
    pub tagline: &'static str,
    pub shadow: &'static str,
    pub chaos: &'static str,
    /// What happens if the area is left unaddressed.
    pub crisis: &'static str,
    pub descriptions: StatusText,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub id: &'static str,
    #[serde(rename = "areaId")]
    pub area: Area,
    pub text: &'static str,
    /// Human label for ratings 1 through 5.
    pub scale_labels: [&'static str; 5],
}

impl Question {
    pub fn scale_label(&self, rating: i64) -> Option<&'static str> {
        if !(RATING_MIN..=RATING_MAX).contains(&rating) {
            return None;
        }
        self.scale_labels.get((rating - RATING_MIN) as usize).copied()
    }
}

/// Inclusive upper bounds of the low and medium bands; high runs to the maximum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBands {
    pub low_max: u32,
    pub medium_max: u32,
}

impl ScoreBands {
    /// Bands scaled from the 15-point layout (low 0..=5, medium 6..=11, high 12..=15).
    pub fn proportional(max_score: u32) -> Self {
        Self {
            low_max: max_score / 3,
            medium_max: max_score * 11 / 15,
        }
    }

    pub fn validate(&self, max_score: u32) -> Result<(), CatalogueError> {
        if self.low_max < self.medium_max && self.medium_max < max_score {
            return Ok(());
        }
        Err(CatalogueError::Bands {
            low_max: self.low_max,
            medium_max: self.medium_max,
            max_score,
        })
    }

    /// Total over every `u32`: anything above `medium_max` is high.
    pub fn classify(&self, score: u32) -> Status {
        if score <= self.low_max {
            Status::Low
        } else if score <= self.medium_max {
            Status::Medium
        } else {
            Status::High
        }
    }

    pub fn range(&self, status: Status, max_score: u32) -> RangeInclusive<u32> {
        match status {
            Status::Low => 0..=self.low_max,
            Status::Medium => (self.low_max + 1)..=self.medium_max,
            Status::High => (self.medium_max + 1)..=max_score,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalogue {
    version: &'static str,
    areas: Vec<AreaDefinition>,
    questions: Vec<Question>,
    questions_per_area: u32,
    bands: ScoreBands,
    by_area: [Vec<usize>; Area::COUNT],
}

impl Catalogue {
    pub fn new(
        version: &'static str,
        areas: Vec<AreaDefinition>,
        questions: Vec<Question>,
        questions_per_area: u32,
        bands: ScoreBands,
    ) -> Result<Self, CatalogueError> {
        if !matches!(questions_per_area, 3 | 5) {
            return Err(CatalogueError::UnsupportedQuestionCount {
                count: questions_per_area,
            });
        }

        let mut seen = [false; Area::COUNT];
        for def in &areas {
            let slot = &mut seen[def.area.index()];
            if *slot {
                return Err(CatalogueError::DuplicateArea { area: def.area });
            }
            *slot = true;
        }
        if let Some(area) = Area::ALL.into_iter().find(|a| !seen[a.index()]) {
            return Err(CatalogueError::MissingArea { area });
        }

        let mut ids: FxHashSet<&str> = FxHashSet::default();
        let mut by_area: [Vec<usize>; Area::COUNT] = std::array::from_fn(|_| Vec::new());
        for (idx, q) in questions.iter().enumerate() {
            if !ids.insert(q.id) {
                return Err(CatalogueError::DuplicateQuestion {
                    id: q.id.to_string(),
                });
            }
            by_area[q.area.index()].push(idx);
        }
        for def in &areas {
            let actual = by_area[def.area.index()].len() as u32;
            if actual != questions_per_area {
                return Err(CatalogueError::QuestionCount {
                    area: def.area,
                    expected: questions_per_area,
                    actual,
                });
            }
        }

        bands.validate(questions_per_area * RATING_MAX as u32)?;

        Ok(Self {
            version,
            areas,
            questions,
            questions_per_area,
            bands,
            by_area,
        })
    }

    /// The built-in catalogue, validated on first use.
    ///
    /// # Panics
    ///
    /// Panics if the built-in content fails validation. That is a build defect, not an input
    /// error, and is covered by tests.
    pub fn standard() -> &'static Catalogue {
        static STANDARD: OnceLock<Catalogue> = OnceLock::new();
        STANDARD.get_or_init(|| {
            let max = builtin::QUESTIONS_PER_AREA * RATING_MAX as u32;
            Catalogue::new(
                builtin::VERSION,
                builtin::areas(),
                builtin::questions(),
                builtin::QUESTIONS_PER_AREA,
                ScoreBands::proportional(max),
            )
            .unwrap_or_else(|err| panic!("built-in catalogue is malformed: {err}"))
        })
    }

    pub fn version(&self) -> &'static str {
        self.version
    }

    /// Area definitions in catalogue order.
    pub fn areas(&self) -> &[AreaDefinition] {
        &self.areas
    }

    pub fn area(&self, area: Area) -> Option<&AreaDefinition> {
        self.areas.iter().find(|d| d.area == area)
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn questions_for(&self, area: Area) -> impl Iterator<Item = &Question> + '_ {
        self.by_area[area.index()]
            .iter()
            .map(|&idx| &self.questions[idx])
    }

    pub fn questions_per_area(&self) -> u32 {
        self.questions_per_area
    }

    pub fn max_score(&self) -> u32 {
        self.questions_per_area * RATING_MAX as u32
    }

    pub fn bands(&self) -> ScoreBands {
        self.bands
    }
}
