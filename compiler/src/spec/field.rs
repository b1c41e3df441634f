use serde::{Deserialize, Serialize};

/// Type names which mark a field as numeric. Matching is by case-folded substring, so `BIGINT`,
/// `decimal(10,2)` and `unsigned int` all count.
const NUMERIC_TYPE_FRAGMENTS: [&str; 7] = [
    "int", "integer", "bigint", "decimal", "float", "double", "number",
];

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FieldRef {
    pub field: String,
    /// Free-text column type as reported by the data source, e.g. `varchar(255)`.
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub data_type: Option<String>,
}

impl FieldRef {
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            data_type: None,
        }
    }

    pub fn typed(field: impl Into<String>, data_type: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            data_type: Some(data_type.into()),
        }
    }

    pub fn role(&self) -> FieldRole {
        if is_dimension(self) {
            FieldRole::Dimension
        } else {
            FieldRole::Measure
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldRole {
    /// Categorical; used for grouping and as the category axis.
    Dimension,
    /// Numeric; aggregated.
    Measure,
}

/// Advisory classification. The compiler itself never calls this; callers use it to pre-populate
/// a chart spec from column metadata.
pub fn is_dimension(field: &FieldRef) -> bool {
    let Some(data_type) = &field.data_type else {
        return true;
    };
    let data_type = data_type.to_lowercase();
    !NUMERIC_TYPE_FRAGMENTS
        .iter()
        .any(|fragment| data_type.contains(fragment))
}

/// Split column metadata into `(dimensions, measures)`, preserving input order within each group.
pub fn partition_fields(fields: &[FieldRef]) -> (Vec<FieldRef>, Vec<FieldRef>) {
    fields.iter().cloned().partition(is_dimension)
}
