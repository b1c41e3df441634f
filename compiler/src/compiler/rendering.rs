use itertools::Itertools;

use crate::sql::{
    expr::build::cmp,
    tree::{Column, Condition, Select, SortEntry, SqlExpr},
    Dialect,
};

/// State for turning a [`Select`] into text.
///
/// This is the only place filter values are turned into SQL. In inline mode they are escaped
/// string literals; in parameterized mode they are collected in order and replaced by the
/// dialect's placeholders.
pub struct RenderContext<'a> {
    dialect: &'a dyn Dialect,
    params: Option<Vec<String>>,
}

impl<'a> RenderContext<'a> {
    pub fn inline(dialect: &'a dyn Dialect) -> Self {
        Self {
            dialect,
            params: None,
        }
    }

    pub fn parameterized(dialect: &'a dyn Dialect) -> Self {
        Self {
            dialect,
            params: Some(Vec::new()),
        }
    }

    fn value(&mut self, value: &str) -> SqlExpr {
        match &mut self.params {
            Some(params) => {
                let placeholder = self.dialect.placeholder(params.len());
                params.push(value.to_string());
                SqlExpr::atom(placeholder)
            }
            None => SqlExpr::atom(self.dialect.quote_string(value)),
        }
    }

    /// Parameters collected so far, in placeholder order. Empty in inline mode.
    pub fn into_params(self) -> Vec<String> {
        self.params.unwrap_or_default()
    }
}

pub trait Render {
    fn render(&self, cx: &mut RenderContext) -> String;
}

impl Render for Select {
    fn render(&self, cx: &mut RenderContext) -> String {
        let columns = self.columns.render(cx);
        let from = format!("FROM {}", cx.dialect.quote_identifier(&self.base_table));
        let where_ = if self.conditions.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", self.conditions.render(cx))
        };
        let group = if self.grouping.is_empty() {
            String::new()
        } else {
            format!("GROUP BY {}", self.grouping.iter().join(", "))
        };
        let order = self
            .sorting
            .as_ref()
            .map(|s| format!("ORDER BY {}", s.render(cx)))
            .unwrap_or_default();
        let limit = format!("LIMIT {}", self.limit);
        [format!("SELECT {columns}"), from, where_, group, order, limit]
            .into_iter()
            .filter(|s| !s.is_empty())
            .join(" ")
    }
}

impl Render for Vec<Column> {
    fn render(&self, cx: &mut RenderContext) -> String {
        if self.is_empty() {
            "*".to_string()
        } else {
            self.iter().map(|c| c.render(cx)).join(", ")
        }
    }
}

impl Render for Column {
    fn render(&self, cx: &mut RenderContext) -> String {
        let alias = self
            .alias
            .as_ref()
            .map(|a| format!(" AS {}", cx.dialect.quote_identifier(a)))
            .unwrap_or_default();
        format!("{}{}", self.expr, alias)
    }
}

impl Render for Vec<Condition> {
    fn render(&self, cx: &mut RenderContext) -> String {
        let conditions = self
            .iter()
            .map(|condition| match condition {
                Condition::Comparison {
                    column,
                    operator,
                    value,
                } => {
                    let value = cx.value(value);
                    cmp::comparison(column.clone(), operator, value)
                }
                Condition::Never => cmp::never(),
            })
            .collect::<Vec<_>>();
        cmp::and(conditions).to_string()
    }
}

impl Render for SortEntry {
    fn render(&self, _: &mut RenderContext) -> String {
        format!("{} {}", self.expr, self.direction.as_str())
    }
}
