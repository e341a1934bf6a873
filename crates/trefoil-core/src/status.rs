use crate::area::Area;
use crate::error::ParseStatusError;
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Three-valued classification of an area's aggregated score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Low,
    Medium,
    High,
}

impl Status {
    pub const ALL: [Status; 3] = [Status::Low, Status::Medium, Status::High];

    pub fn as_str(self) -> &'static str {
        match self {
            Status::Low => "low",
            Status::Medium => "medium",
            Status::High => "high",
        }
    }

    /// Traffic-light alias accepted on input and used by collaborators.
    pub fn rag(self) -> &'static str {
        match self {
            Status::Low => "red",
            Status::Medium => "amber",
            Status::High => "green",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Status::Low => "Needs Urgent Attention",
            Status::Medium => "Room for Improvement",
            Status::High => "Functioning Well",
        }
    }

    /// Accepts the canonical tag or its RAG alias. Case-sensitive.
    pub fn from_tag(tag: &str) -> Option<Status> {
        match tag {
            "low" | "red" => Some(Status::Low),
            "medium" | "amber" => Some(Status::Medium),
            "high" | "green" => Some(Status::High),
            _ => None,
        }
    }
}

impl FromStr for Status {
    type Err = ParseStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Status::from_tag(s).ok_or_else(|| ParseStatusError { tag: s.to_string() })
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Number of areas per status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StatusCounts {
    pub low: u32,
    pub medium: u32,
    pub high: u32,
}

impl StatusCounts {
    pub fn record(&mut self, status: Status) {
        match status {
            Status::Low => self.low += 1,
            Status::Medium => self.medium += 1,
            Status::High => self.high += 1,
        }
    }

    pub fn get(&self, status: Status) -> u32 {
        match status {
            Status::Low => self.low,
            Status::Medium => self.medium,
            Status::High => self.high,
        }
    }

    pub fn total(&self) -> u32 {
        self.low + self.medium + self.high
    }
}

/// A status for every area, indexed by [`Area`].
///
/// This is the typed form of the diagram input: it cannot be missing a key or
/// hold an unknown tag. Serializes as a map keyed by display name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StatusMap([Status; Area::COUNT]);

impl StatusMap {
    pub fn uniform(status: Status) -> Self {
        Self([status; Area::COUNT])
    }

    pub fn from_fn(mut f: impl FnMut(Area) -> Status) -> Self {
        Self(Area::ALL.map(&mut f))
    }

    pub fn get(&self, area: Area) -> Status {
        self.0[area.index()]
    }

    pub fn set(&mut self, area: Area, status: Status) {
        self.0[area.index()] = status;
    }

    pub fn with(mut self, area: Area, status: Status) -> Self {
        self.set(area, status);
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = (Area, Status)> + '_ {
        Area::ALL.into_iter().map(|a| (a, self.get(a)))
    }
}

impl Serialize for StatusMap {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(Area::COUNT))?;
        for (area, status) in self.iter() {
            map.serialize_entry(area.display_name(), &status)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_and_rag_aliases_parse() {
        for status in Status::ALL {
            assert_eq!(status.as_str().parse::<Status>(), Ok(status));
            assert_eq!(Status::from_tag(status.rag()), Some(status));
        }
        let err = "purple".parse::<Status>().unwrap_err();
        assert_eq!(err.tag, "purple");
        assert_eq!(Status::from_tag("LOW"), None);
    }

    #[test]
    fn counts_total_follows_records() {
        let mut counts = StatusCounts::default();
        counts.record(Status::Low);
        counts.record(Status::Low);
        counts.record(Status::High);
        assert_eq!(counts.get(Status::Low), 2);
        assert_eq!(counts.get(Status::Medium), 0);
        assert_eq!(counts.total(), 3);
    }

    #[test]
    fn status_map_serializes_by_display_name() {
        let map = StatusMap::uniform(Status::High).with(Area::DriveChange, Status::Low);
        let value = serde_json::to_value(map).unwrap();
        assert_eq!(value["Drive Change"], "low");
        assert_eq!(value["Lifestyle & Exit Plan"], "high");
        assert_eq!(value.as_object().unwrap().len(), Area::COUNT);
    }
}
