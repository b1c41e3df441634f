use crate::errors::Error;

use super::{tree::ComparisonOperator, MySql, Postgres};

pub trait Dialect {
    /// Quote a table or column for use in SQL.
    fn quote_identifier(&self, ident: &str) -> String;

    /// Quote a string for use in SQL, escaping anything that could end the literal early.
    fn quote_string(&self, string: &str) -> String;

    /// The bind-parameter marker for the parameter at `index` (zero-based).
    fn placeholder(&self, index: usize) -> String;

    /// How this dialect spells `operator`, or `None` when it has no equivalent.
    fn comparison_operator(&self, operator: ComparisonOperator) -> Option<&'static str> {
        Some(operator.as_sql())
    }
}

/// Look up a dialect by its lowercase name.
pub fn dialect_from_name(name: &str) -> Result<Box<dyn Dialect>, Error> {
    match name.to_ascii_lowercase().as_str() {
        "mysql" => Ok(Box::new(MySql())),
        "postgres" | "postgresql" => Ok(Box::new(Postgres())),
        _ => Err(Error::UnknownDialect(name.to_string())),
    }
}
