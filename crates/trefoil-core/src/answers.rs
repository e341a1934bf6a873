use crate::catalogue::{RATING_MAX, RATING_MIN};
use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Raw ratings keyed by question id, in the order they were given.
///
/// Integer values are kept as given; [`Answers::rating`] is what scoring reads. When parsed from
/// JSON, entries whose value is not an integer (strings, `null`, `4.0`) are dropped, so they
/// score like absent answers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Answers(IndexMap<String, i64>);

impl<'de> Deserialize<'de> for Answers {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = IndexMap::<String, Value>::deserialize(deserializer)?;
        let mut out = IndexMap::with_capacity(raw.len());
        for (key, value) in raw {
            match value.as_i64() {
                Some(rating) => {
                    out.insert(key, rating);
                }
                None => {
                    tracing::warn!(key = %key, value = %value, "ignoring non-integer answer");
                }
            }
        }
        Ok(Self(out))
    }
}

impl Answers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json_str(text: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn insert(&mut self, question_id: impl Into<String>, rating: i64) -> Option<i64> {
        self.0.insert(question_id.into(), rating)
    }

    pub fn get(&self, question_id: &str) -> Option<i64> {
        self.0.get(question_id).copied()
    }

    /// The rating that counts towards a score: absent or out-of-range values are 0.
    pub fn rating(&self, question_id: &str) -> u32 {
        match self.get(question_id) {
            Some(v) if (RATING_MIN..=RATING_MAX).contains(&v) => v as u32,
            _ => 0,
        }
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, i64)> + '_ {
        self.0.iter().map(|(k, v)| (k.as_str(), *v))
    }
}

impl<K: Into<String>> FromIterator<(K, i64)> for Answers {
    fn from_iter<T: IntoIterator<Item = (K, i64)>>(iter: T) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rating_ignores_missing_and_out_of_range() {
        let answers: Answers = [("fc-1", 4), ("fc-2", 0), ("fc-3", 9), ("gs-1", -2)]
            .into_iter()
            .collect();
        assert_eq!(answers.rating("fc-1"), 4);
        assert_eq!(answers.rating("fc-2"), 0);
        assert_eq!(answers.rating("fc-3"), 0);
        assert_eq!(answers.rating("gs-1"), 0);
        assert_eq!(answers.rating("nope"), 0);
        assert_eq!(answers.get("fc-3"), Some(9));
    }

    #[test]
    fn parses_a_flat_json_object() {
        let answers = Answers::from_json_str(r#"{"fc-1": 5, "sa-3": 1}"#).unwrap();
        assert_eq!(answers.len(), 2);
        assert_eq!(answers.rating("sa-3"), 1);
        assert!(Answers::from_json_str("[1, 2]").is_err());
    }

    #[test]
    fn non_integer_values_read_as_absent() {
        let answers =
            Answers::from_json_str(r#"{"name": "Ada", "fc-1": null, "fc-2": 3, "fc-3": 4.0}"#)
                .unwrap();
        assert_eq!(answers.len(), 1);
        assert_eq!(answers.get("name"), None);
        assert_eq!(answers.rating("fc-1"), 0);
        assert_eq!(answers.rating("fc-2"), 3);
        assert_eq!(answers.rating("fc-3"), 0);
    }
}
