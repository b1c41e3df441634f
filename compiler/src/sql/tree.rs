use crate::spec::SortOrder;

pub use super::expr::SqlExpr;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Select {
    pub base_table: String,
    pub columns: Vec<Column>,
    pub conditions: Vec<Condition>,
    pub grouping: Vec<SqlExpr>,
    pub sorting: Option<SortEntry>,
    pub limit: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    pub expr: SqlExpr,
    /// Unquoted. Quoted by the dialect at render time.
    pub alias: Option<String>,
}

impl Column {
    pub fn new(expr: SqlExpr, alias: Option<String>) -> Self {
        Self { expr, alias }
    }
}

/// One conjunct of the `WHERE` clause.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Condition {
    /// A filter clause whose value is still unrendered. Whether the value becomes an escaped
    /// literal or a bind parameter is decided only when the statement is rendered.
    Comparison {
        column: SqlExpr,
        /// Already spelled for the target dialect.
        operator: &'static str,
        value: String,
    },
    /// Matches no rows. Stands in for a filter that could not be compiled, so the result is
    /// never wider than what was asked for.
    Never,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComparisonOperator {
    Eq,
    NotEq,
    Lt,
    Lte,
    Gt,
    Gte,
    Like,
    NotLike,
    ILike,
    NotILike,
    Regexp,
    NotRegexp,
}

impl ComparisonOperator {
    /// Parse operator text as typed by a user. Returns `None` for anything outside the supported
    /// set, so arbitrary text never reaches the SQL.
    pub fn parse(operator: &str) -> Option<Self> {
        let normalized = operator
            .split_whitespace()
            .map(|part| part.to_ascii_uppercase())
            .collect::<Vec<_>>()
            .join(" ");
        match normalized.as_str() {
            "=" | "==" => Some(Self::Eq),
            "!=" | "<>" => Some(Self::NotEq),
            "<" => Some(Self::Lt),
            "<=" => Some(Self::Lte),
            ">" => Some(Self::Gt),
            ">=" => Some(Self::Gte),
            "LIKE" => Some(Self::Like),
            "NOT LIKE" => Some(Self::NotLike),
            "ILIKE" => Some(Self::ILike),
            "NOT ILIKE" => Some(Self::NotILike),
            "REGEXP" | "RLIKE" | "~" => Some(Self::Regexp),
            "NOT REGEXP" | "NOT RLIKE" | "!~" => Some(Self::NotRegexp),
            _ => None,
        }
    }

    /// The operator's spelling in standard SQL. Dialects may spell some differently, see
    /// [`Dialect::comparison_operator`](super::Dialect::comparison_operator).
    pub fn as_sql(&self) -> &'static str {
        match self {
            Self::Eq => "=",
            Self::NotEq => "<>",
            Self::Lt => "<",
            Self::Lte => "<=",
            Self::Gt => ">",
            Self::Gte => ">=",
            Self::Like => "LIKE",
            Self::NotLike => "NOT LIKE",
            Self::ILike => "ILIKE",
            Self::NotILike => "NOT ILIKE",
            Self::Regexp => "REGEXP",
            Self::NotRegexp => "NOT REGEXP",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortEntry {
    pub expr: SqlExpr,
    pub direction: SortOrder,
}

impl From<String> for Select {
    fn from(base_table: String) -> Self {
        Self {
            base_table,
            columns: vec![],
            conditions: vec![],
            grouping: vec![],
            sorting: None,
            limit: 0,
        }
    }
}
