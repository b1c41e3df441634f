use std::fmt::{Display, Formatter};

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SqlExpr {
    pub content: String,
    pub precedence: SqlExprPrecedence,
}

impl SqlExpr {
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    pub fn atom(content: String) -> SqlExpr {
        SqlExpr {
            content,
            precedence: SqlExprPrecedence::Atom,
        }
    }

    fn parenthesize(&mut self) {
        self.content = format!("({})", self.content);
        self.precedence = SqlExprPrecedence::Atom;
    }

    pub fn for_precedence(mut self, precedence: SqlExprPrecedence) -> SqlExpr {
        if precedence > self.precedence {
            self.parenthesize();
        }
        self
    }
}

impl Display for SqlExpr {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.content)
    }
}

/// The subset of operator precedence levels the chart queries use.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum SqlExprPrecedence {
    /// A literal value, a column name, a function call, or parentheses.
    #[default]
    Atom = 0,
    /// `=` `<>` `>` `>=` `<` `<=` `LIKE` `NOT LIKE`
    Comparison = -3,
    /// `AND`
    LogicalAnd = -5,
}
