//! Validation of loosely-typed diagram input (display name to status tag).

use std::fmt;
use trefoil_core::{Area, Status, StatusMap};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidStatus {
    pub area: String,
    pub value: String,
}

/// Everything wrong with a name-keyed status map, collected in one pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiagramInputError {
    /// Display names with no entry, in catalogue order.
    pub missing: Vec<String>,
    /// Entries whose value is not a status tag, sorted by name.
    pub invalid: Vec<InvalidStatus>,
    /// Keys that are not area display names, sorted.
    pub unknown: Vec<String>,
}

impl DiagramInputError {
    pub fn is_empty(&self) -> bool {
        self.missing.is_empty() && self.invalid.is_empty() && self.unknown.is_empty()
    }
}

impl fmt::Display for DiagramInputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("invalid diagram input")?;
        let mut sep = ": ";
        if !self.missing.is_empty() {
            write!(f, "{sep}missing areas: {}", self.missing.join(", "))?;
            sep = "; ";
        }
        if !self.invalid.is_empty() {
            let pairs: Vec<String> = self
                .invalid
                .iter()
                .map(|i| format!("{}: {}", i.area, i.value))
                .collect();
            write!(
                f,
                "{sep}invalid statuses (expected low, medium or high): {}",
                pairs.join(", ")
            )?;
            sep = "; ";
        }
        if !self.unknown.is_empty() {
            write!(f, "{sep}unknown areas: {}", self.unknown.join(", "))?;
        }
        Ok(())
    }
}

impl std::error::Error for DiagramInputError {}

/// Builds a [`StatusMap`] from display-name keyed status tags.
///
/// Tags are the canonical `low`/`medium`/`high` or the `red`/`amber`/`green` aliases. When a
/// key repeats, the last value wins.
pub fn status_map_from_names<I, K, V>(entries: I) -> Result<StatusMap, DiagramInputError>
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    let mut slots: [Option<Result<Status, String>>; Area::COUNT] = Default::default();
    let mut unknown = Vec::new();

    for (key, value) in entries {
        let (key, value) = (key.as_ref(), value.as_ref());
        match Area::from_display_name(key) {
            Some(area) => {
                let parsed = Status::from_tag(value).ok_or_else(|| value.to_string());
                slots[area.index()] = Some(parsed);
            }
            None => unknown.push(key.to_string()),
        }
    }

    let mut err = DiagramInputError::default();
    let mut statuses = [Status::Low; Area::COUNT];
    for area in Area::ALL {
        match &slots[area.index()] {
            None => err.missing.push(area.display_name().to_string()),
            Some(Err(value)) => err.invalid.push(InvalidStatus {
                area: area.display_name().to_string(),
                value: value.clone(),
            }),
            Some(Ok(status)) => statuses[area.index()] = *status,
        }
    }
    err.invalid.sort_by(|a, b| a.area.cmp(&b.area));
    unknown.sort();
    unknown.dedup();
    err.unknown = unknown;

    if err.is_empty() {
        Ok(StatusMap::from_fn(|area| statuses[area.index()]))
    } else {
        tracing::debug!(
            missing = err.missing.len(),
            invalid = err.invalid.len(),
            unknown = err.unknown.len(),
            "rejected diagram input"
        );
        Err(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full() -> Vec<(&'static str, &'static str)> {
        Area::ALL
            .iter()
            .map(|a| (a.display_name(), "medium"))
            .collect()
    }

    #[test]
    fn complete_input_builds_a_map() {
        let mut entries = full();
        entries[0].1 = "red";
        entries[4].1 = "high";
        let map = status_map_from_names(entries).unwrap();
        assert_eq!(map.get(Area::FinancialControl), Status::Low);
        assert_eq!(map.get(Area::SellingSales), Status::High);
        assert_eq!(map.get(Area::DriveChange), Status::Medium);
    }

    #[test]
    fn every_problem_is_reported_together() {
        let mut entries = full();
        entries.retain(|(k, _)| *k != "Drive Change" && *k != "Growth Strategy");
        entries.push(("Financial Control", "purple"));
        entries.push(("Happiness", "high"));
        let err = status_map_from_names(entries).unwrap_err();
        assert_eq!(err.missing, ["Growth Strategy", "Drive Change"]);
        assert_eq!(
            err.invalid,
            [InvalidStatus {
                area: "Financial Control".to_string(),
                value: "purple".to_string()
            }]
        );
        assert_eq!(err.unknown, ["Happiness"]);

        let msg = err.to_string();
        for needle in [
            "Growth Strategy",
            "Drive Change",
            "Financial Control: purple",
            "Happiness",
        ] {
            assert!(msg.contains(needle), "{msg}");
        }
    }

    #[test]
    fn empty_input_lists_all_nine_missing() {
        let err = status_map_from_names(Vec::<(String, String)>::new()).unwrap_err();
        assert_eq!(err.missing.len(), 9);
        assert!(err.invalid.is_empty() && err.unknown.is_empty());
    }
}
