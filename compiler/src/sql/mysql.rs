use super::{dialect::Dialect, tree::ComparisonOperator};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MySql();

impl Dialect for MySql {
    fn quote_identifier(&self, ident: &str) -> String {
        format!("`{}`", ident.replace('`', "``"))
    }

    // Backslash is an escape character in MySQL string literals unless NO_BACKSLASH_ESCAPES is
    // set, so it has to be doubled along with the quote.
    fn quote_string(&self, string: &str) -> String {
        format!("'{}'", string.replace('\\', r"\\").replace('\'', "''"))
    }

    fn placeholder(&self, _index: usize) -> String {
        "?".to_string()
    }

    fn comparison_operator(&self, operator: ComparisonOperator) -> Option<&'static str> {
        match operator {
            ComparisonOperator::ILike | ComparisonOperator::NotILike => None,
            _ => Some(operator.as_sql()),
        }
    }
}
