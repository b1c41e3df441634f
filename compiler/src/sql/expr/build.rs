use itertools::Itertools;

use super::{SqlExpr, SqlExprPrecedence};

fn binary_op(a: SqlExpr, op: &str, b: SqlExpr, precedence: SqlExprPrecedence) -> SqlExpr {
    SqlExpr {
        content: format!(
            "{} {} {}",
            a.for_precedence(precedence),
            op,
            b.for_precedence(precedence)
        ),
        precedence,
    }
}

fn sql_func(name: &str, args: impl IntoIterator<Item = SqlExpr>) -> SqlExpr {
    SqlExpr::atom(format!("{}({})", name, args.into_iter().join(", ")))
}

pub mod agg {
    use super::*;

    pub fn avg(a: SqlExpr) -> SqlExpr {
        sql_func("AVG", [a])
    }

    pub fn count_star() -> SqlExpr {
        SqlExpr::atom("COUNT(*)".to_string())
    }

    pub fn count_distinct(a: SqlExpr) -> SqlExpr {
        SqlExpr::atom(format!("COUNT(DISTINCT {})", a.content))
    }

    pub fn max(a: SqlExpr) -> SqlExpr {
        sql_func("MAX", [a])
    }

    pub fn min(a: SqlExpr) -> SqlExpr {
        sql_func("MIN", [a])
    }

    pub fn sum(a: SqlExpr) -> SqlExpr {
        sql_func("SUM", [a])
    }
}

pub mod cmp {
    use super::*;

    /// Conditions joined by `AND`. Empty conditions are skipped.
    pub fn and(conditions: impl IntoIterator<Item = SqlExpr>) -> SqlExpr {
        let precedence = SqlExprPrecedence::LogicalAnd;
        SqlExpr {
            content: conditions
                .into_iter()
                .filter(|e| !e.is_empty())
                .map(|c| c.for_precedence(precedence).content)
                .join(" AND "),
            precedence,
        }
    }

    pub fn comparison(a: SqlExpr, op: &str, b: SqlExpr) -> SqlExpr {
        binary_op(a, op, b, SqlExprPrecedence::Comparison)
    }

    /// A predicate no row satisfies.
    pub fn never() -> SqlExpr {
        comparison(SqlExpr::atom("1".to_string()), "=", SqlExpr::atom("0".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn col(name: &str) -> SqlExpr {
        SqlExpr::atom(format!("`{}`", name))
    }

    #[test]
    fn test_aggregates() {
        assert_eq!(agg::sum(col("sales")).content, "SUM(`sales`)");
        assert_eq!(agg::avg(col("sales")).content, "AVG(`sales`)");
        assert_eq!(agg::max(col("sales")).content, "MAX(`sales`)");
        assert_eq!(agg::min(col("sales")).content, "MIN(`sales`)");
        assert_eq!(agg::count_star().content, "COUNT(*)");
        assert_eq!(
            agg::count_distinct(col("sales")).content,
            "COUNT(DISTINCT `sales`)"
        );
    }

    #[test]
    fn test_and() {
        let a = cmp::comparison(col("a"), "=", SqlExpr::atom("?".to_string()));
        let b = cmp::comparison(col("b"), ">", SqlExpr::atom("?".to_string()));
        assert_eq!(
            cmp::and([a, SqlExpr::default(), b]).content,
            "`a` = ? AND `b` > ?"
        );
        assert!(cmp::and(Vec::<SqlExpr>::new()).is_empty());
    }
}
