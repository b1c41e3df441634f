use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::warn;

/// How a measure is aggregated. Parsing is lenient: anything unrecognized becomes [`Sum`].
///
/// [`Sum`]: Aggregation::Sum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Aggregation {
    #[default]
    Sum,
    Avg,
    Count,
    CountDistinct,
    Max,
    Min,
}

impl Aggregation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Aggregation::Sum => "SUM",
            Aggregation::Avg => "AVG",
            Aggregation::Count => "COUNT",
            Aggregation::CountDistinct => "COUNT_DISTINCT",
            Aggregation::Max => "MAX",
            Aggregation::Min => "MIN",
        }
    }

    fn alias_suffix(&self) -> &'static str {
        match self {
            Aggregation::Sum => "sum",
            Aggregation::Avg => "avg",
            Aggregation::Count => "count",
            Aggregation::CountDistinct => "count_distinct",
            Aggregation::Max => "max",
            Aggregation::Min => "min",
        }
    }
}

impl From<&str> for Aggregation {
    fn from(value: &str) -> Self {
        match value.trim().to_ascii_uppercase().as_str() {
            "SUM" => Aggregation::Sum,
            "AVG" => Aggregation::Avg,
            "COUNT" => Aggregation::Count,
            "COUNT_DISTINCT" => Aggregation::CountDistinct,
            "MAX" => Aggregation::Max,
            "MIN" => Aggregation::Min,
            _ => {
                warn!(aggregation = value, "unrecognized aggregation, using SUM");
                Aggregation::Sum
            }
        }
    }
}

impl From<String> for Aggregation {
    fn from(value: String) -> Self {
        Aggregation::from(value.as_str())
    }
}

impl From<Aggregation> for String {
    fn from(value: Aggregation) -> Self {
        value.as_str().to_string()
    }
}

/// The output column alias for `field` aggregated by `aggregation`.
///
/// The query compiler names its columns with this and the chart generators read rows with it, so
/// the two never disagree.
pub fn resolve_alias(field: &str, aggregation: Aggregation) -> String {
    format!("{}_{}", field, aggregation.alias_suffix())
}

/// Measure field name → aggregation. Fields without an entry are summed.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Aggregations(HashMap<String, Aggregation>);

impl Aggregations {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: &str) -> Aggregation {
        self.0.get(field).copied().unwrap_or_default()
    }

    pub fn insert(&mut self, field: impl Into<String>, aggregation: Aggregation) {
        self.0.insert(field.into(), aggregation);
    }

    /// Alias of `field` under its configured aggregation.
    pub fn alias_for(&self, field: &str) -> String {
        resolve_alias(field, self.get(field))
    }
}

impl<K: Into<String>> FromIterator<(K, Aggregation)> for Aggregations {
    fn from_iter<I: IntoIterator<Item = (K, Aggregation)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_alias() {
        assert_eq!(resolve_alias("sales", Aggregation::Sum), "sales_sum");
        assert_eq!(resolve_alias("sales", Aggregation::Avg), "sales_avg");
        assert_eq!(resolve_alias("sales", Aggregation::Count), "sales_count");
        assert_eq!(
            resolve_alias("sales", Aggregation::CountDistinct),
            "sales_count_distinct"
        );
        assert_eq!(resolve_alias("sales", Aggregation::Max), "sales_max");
        assert_eq!(resolve_alias("sales", Aggregation::Min), "sales_min");
    }

    #[test]
    fn test_unrecognized_falls_back_to_sum() {
        assert_eq!(Aggregation::from("BOGUS"), Aggregation::Sum);
        assert_eq!(resolve_alias("sales", Aggregation::from("BOGUS")), "sales_sum");
        assert_eq!(Aggregation::from(""), Aggregation::Sum);
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(Aggregation::from("avg"), Aggregation::Avg);
        assert_eq!(Aggregation::from("Count_Distinct"), Aggregation::CountDistinct);
    }

    #[test]
    fn test_aggregations_default_to_sum() {
        let aggregations: Aggregations = [("sales", Aggregation::Avg)].into_iter().collect();
        assert_eq!(aggregations.get("sales"), Aggregation::Avg);
        assert_eq!(aggregations.get("qty"), Aggregation::Sum);
        assert_eq!(aggregations.alias_for("qty"), "qty_sum");
    }

    #[test]
    fn test_deserialize_aggregations() {
        let aggregations: Aggregations =
            serde_json::from_str(r#"{"sales":"MAX","qty":"NOPE"}"#).unwrap();
        assert_eq!(aggregations.get("sales"), Aggregation::Max);
        assert_eq!(aggregations.get("qty"), Aggregation::Sum);
    }
}
