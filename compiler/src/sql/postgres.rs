use super::{dialect::Dialect, tree::ComparisonOperator};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Postgres();

// Assumes standard_conforming_strings (the default since 9.1), under which backslashes in an
// ordinary string literal are not escapes.
impl Dialect for Postgres {
    fn quote_identifier(&self, ident: &str) -> String {
        format!(r#""{}""#, ident.replace('"', r#""""#))
    }

    fn quote_string(&self, string: &str) -> String {
        format!("'{}'", string.replace('\'', "''"))
    }

    fn placeholder(&self, index: usize) -> String {
        format!("${}", index + 1)
    }

    fn comparison_operator(&self, operator: ComparisonOperator) -> Option<&'static str> {
        match operator {
            ComparisonOperator::Regexp => Some("~"),
            ComparisonOperator::NotRegexp => Some("!~"),
            _ => Some(operator.as_sql()),
        }
    }
}
