//! Answers to classified area results.
//!
//! Scoring is pure: every call builds a fresh [`AssessmentResults`] from the borrowed catalogue
//! and never mutates shared state.

use crate::answers::Answers;
use crate::area::Area;
use crate::catalogue::{AreaDefinition, Catalogue, RATING_MAX, RATING_MIN};
use crate::status::{Status, StatusCounts, StatusMap};
use indexmap::IndexMap;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AreaResult {
    #[serde(rename = "areaId")]
    pub area: Area,
    pub name: &'static str,
    pub chaos_name: &'static str,
    pub score: u32,
    pub max_score: u32,
    pub percentage: u32,
    pub status: Status,
    pub status_label: &'static str,
    pub description: &'static str,
}

/// The lowest-scoring area with its narrative fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeakestArea {
    #[serde(flatten)]
    pub result: AreaResult,
    pub tagline: &'static str,
    pub shadow: &'static str,
    pub chaos: &'static str,
    pub crisis: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OverallHealth {
    pub total_score: u32,
    pub max_possible: u32,
    pub percentage: u32,
    pub status_counts: StatusCounts,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentResults {
    pub catalogue_version: &'static str,
    /// One entry per area, in catalogue order.
    pub area_results: Vec<AreaResult>,
    pub overall_health: OverallHealth,
    pub weakest_area: WeakestArea,
}

impl AssessmentResults {
    pub fn in_catalogue_order(&self) -> &[AreaResult] {
        &self.area_results
    }

    /// Ascending by score; ties keep catalogue order.
    pub fn sorted_by_score(&self) -> Vec<&AreaResult> {
        let mut out: Vec<&AreaResult> = self.area_results.iter().collect();
        out.sort_by_key(|r| r.score);
        out
    }

    pub fn get(&self, area: Area) -> Option<&AreaResult> {
        self.area_results.iter().find(|r| r.area == area)
    }

    /// Projection consumed by the diagram renderer.
    pub fn status_map(&self) -> StatusMap {
        let mut map = StatusMap::uniform(Status::Low);
        for r in &self.area_results {
            map.set(r.area, r.status);
        }
        map
    }

    /// Display-name keyed statuses for collaborators that take plain maps.
    pub fn named_status_map(&self) -> IndexMap<&'static str, Status> {
        self.area_results.iter().map(|r| (r.name, r.status)).collect()
    }
}

/// Rounded integer percentage, ties rounding up.
fn percent(part: u32, whole: u32) -> u32 {
    if whole == 0 {
        return 0;
    }
    let (part, whole) = (u64::from(part), u64::from(whole));
    ((part * 200 + whole) / (whole * 2)) as u32
}

#[derive(Debug, Clone, Copy)]
pub struct ScoringEngine<'a> {
    catalogue: &'a Catalogue,
}

impl Default for ScoringEngine<'static> {
    fn default() -> Self {
        Self {
            catalogue: Catalogue::standard(),
        }
    }
}

impl ScoringEngine<'static> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<'a> ScoringEngine<'a> {
    pub fn with_catalogue(catalogue: &'a Catalogue) -> Self {
        Self { catalogue }
    }

    pub fn catalogue(&self) -> &'a Catalogue {
        self.catalogue
    }

    /// Scores one area. Missing and out-of-range ratings count as 0.
    pub fn score_area(&self, area: Area, answers: &Answers) -> u32 {
        self.catalogue
            .questions_for(area)
            .map(|q| {
                if let Some(raw) = answers.get(q.id) {
                    if !(RATING_MIN..=RATING_MAX).contains(&raw) {
                        tracing::warn!(
                            question = q.id,
                            rating = raw,
                            "ignoring out-of-range rating"
                        );
                    }
                }
                answers.rating(q.id)
            })
            .sum()
    }

    pub fn classify(&self, score: u32) -> Status {
        self.catalogue.bands().classify(score)
    }

    fn area_result(&self, def: &AreaDefinition, answers: &Answers) -> AreaResult {
        let max_score = self.catalogue.max_score();
        let score = self.score_area(def.area, answers);
        let status = self.classify(score);
        tracing::debug!(
            area = def.area.id(),
            score,
            max_score,
            status = status.as_str(),
            "scored area"
        );
        AreaResult {
            area: def.area,
            name: def.area.display_name(),
            chaos_name: def.chaos_name,
            score,
            max_score,
            percentage: percent(score, max_score),
            status,
            status_label: status.label(),
            description: def.descriptions.for_status(status),
        }
    }

    pub fn compute(&self, answers: &Answers) -> AssessmentResults {
        let defs = self.catalogue.areas();
        let area_results: Vec<AreaResult> = defs
            .iter()
            .map(|def| self.area_result(def, answers))
            .collect();

        // First strictly-lowest score in catalogue order wins ties.
        let mut weakest = 0usize;
        for (idx, r) in area_results.iter().enumerate().skip(1) {
            if r.score < area_results[weakest].score {
                weakest = idx;
            }
        }
        let def = &defs[weakest];
        let weakest_area = WeakestArea {
            result: area_results[weakest].clone(),
            tagline: def.tagline,
            shadow: def.shadow,
            chaos: def.chaos,
            crisis: def.crisis,
        };
        tracing::debug!(
            area = def.area.id(),
            score = weakest_area.result.score,
            "selected weakest area"
        );

        let total_score: u32 = area_results.iter().map(|r| r.score).sum();
        let max_possible = self.catalogue.max_score() * area_results.len() as u32;
        let mut status_counts = StatusCounts::default();
        for r in &area_results {
            status_counts.record(r.status);
        }

        AssessmentResults {
            catalogue_version: self.catalogue.version(),
            area_results,
            overall_health: OverallHealth {
                total_score,
                max_possible,
                percentage: percent(total_score, max_possible),
                status_counts,
            },
            weakest_area,
        }
    }
}

/// Scores `answers` against the built-in catalogue.
pub fn compute_results(answers: &Answers) -> AssessmentResults {
    ScoringEngine::new().compute(answers)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percent_rounds_half_up() {
        assert_eq!(percent(0, 15), 0);
        assert_eq!(percent(7, 15), 47);
        assert_eq!(percent(15, 15), 100);
        assert_eq!(percent(1, 8), 13);
        assert_eq!(percent(3, 0), 0);
    }

    #[test]
    fn empty_answers_score_zero_everywhere() {
        let results = compute_results(&Answers::new());
        assert!(results.area_results.iter().all(|r| r.score == 0));
        assert!(results.area_results.iter().all(|r| r.status == Status::Low));
        assert_eq!(results.weakest_area.result.area, Area::FinancialControl);
        assert_eq!(results.overall_health.total_score, 0);
        assert_eq!(results.overall_health.max_possible, 135);
        assert_eq!(results.overall_health.percentage, 0);
    }

    #[test]
    fn sorted_by_score_is_stable_on_ties() {
        let answers: Answers = [("dc-1", 5), ("dc-2", 5), ("sa-1", 2)].into_iter().collect();
        let results = compute_results(&answers);
        let sorted: Vec<Area> = results.sorted_by_score().iter().map(|r| r.area).collect();
        assert_eq!(sorted[0], Area::FinancialControl);
        assert_eq!(sorted[7], Area::SystemsAutomation);
        assert_eq!(sorted[8], Area::DriveChange);
    }

    #[test]
    fn status_map_projects_every_area() {
        let answers: Answers = [("ml-1", 5), ("ml-2", 5), ("ml-3", 5)].into_iter().collect();
        let results = compute_results(&answers);
        let map = results.status_map();
        assert_eq!(map.get(Area::MarketingLeads), Status::High);
        assert_eq!(map.get(Area::SellingSales), Status::Low);
        let named = results.named_status_map();
        assert_eq!(named.len(), Area::COUNT);
        assert_eq!(named["Marketing & Leads"], Status::High);
    }
}
