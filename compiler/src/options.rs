use std::collections::HashMap;

use crate::{
    sql::{Dialect, MySql},
    utils::FlexMap,
};

/// How chart generators find an alias among the columns of a result row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IdentifierResolution {
    /// The column label must equal the alias exactly.
    #[default]
    Strict,
    /// Case and punctuation are ignored, for executors which re-case column labels.
    Flexible,
}

pub struct Options {
    pub dialect: Box<dyn Dialect>,
    pub identifier_resolution: IdentifierResolution,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            dialect: Box::new(MySql()),
            identifier_resolution: IdentifierResolution::default(),
        }
    }
}

impl Options {
    pub fn resolve_identifier<'b, T>(
        &self,
        map: &'b HashMap<String, T>,
        identifier: &str,
    ) -> Option<&'b T> {
        match self.identifier_resolution {
            IdentifierResolution::Strict => map.get(identifier),
            IdentifierResolution::Flexible => map.flex_get(identifier),
        }
    }
}
