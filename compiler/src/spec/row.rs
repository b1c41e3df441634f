use std::collections::HashMap;
use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// One cell of a result row, as returned by the query executor.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    #[default]
    Null,
    Number(f64),
    Text(String),
}

impl Scalar {
    pub const ZERO: Scalar = Scalar::Number(0.0);

    /// Null and empty strings carry no value.
    pub fn is_blank(&self) -> bool {
        match self {
            Scalar::Null => true,
            Scalar::Number(_) => false,
            Scalar::Text(s) => s.is_empty(),
        }
    }

    /// The value itself, or zero when it is blank.
    pub fn or_zero(&self) -> Scalar {
        if self.is_blank() {
            Scalar::ZERO
        } else {
            self.clone()
        }
    }

    /// Numeric reading of the value. Text is parsed after trimming; anything that does not parse
    /// to a finite number (and null) reads as zero.
    pub fn as_f64_or_zero(&self) -> f64 {
        let n = match self {
            Scalar::Null => 0.0,
            Scalar::Number(n) => *n,
            Scalar::Text(s) => s.trim().parse::<f64>().unwrap_or(0.0),
        };
        if n.is_finite() {
            n
        } else {
            0.0
        }
    }
}

impl Display for Scalar {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Scalar::Null => write!(f, "null"),
            Scalar::Number(n) => write!(f, "{}", n),
            Scalar::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<f64> for Scalar {
    fn from(value: f64) -> Self {
        Scalar::Number(value)
    }
}

impl From<i64> for Scalar {
    fn from(value: i64) -> Self {
        Scalar::Number(value as f64)
    }
}

impl From<&str> for Scalar {
    fn from(value: &str) -> Self {
        Scalar::Text(value.to_string())
    }
}

impl From<String> for Scalar {
    fn from(value: String) -> Self {
        Scalar::Text(value)
    }
}

/// Column alias → value.
pub type ResultRow = HashMap<String, Scalar>;
