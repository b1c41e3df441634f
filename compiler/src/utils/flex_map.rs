use std::collections::HashMap;

use itertools::Itertools;

fn flex_chars(s: &str) -> impl Iterator<Item = char> + '_ {
    s.chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|c| c.to_ascii_lowercase())
}

/// Keys are equal when their ASCII letters and digits match, ignoring case. So `sales_sum`,
/// `SALES_SUM` and `Sales Sum` are all the same key.
fn flex_eq(a: &str, b: &str) -> bool {
    flex_chars(a).eq(flex_chars(b))
}

pub trait FlexMap<T> {
    /// Exact lookup first, then a unique loose match. Ambiguous loose matches yield `None`.
    fn flex_get(&self, key: &str) -> Option<&T>;
}

impl<T> FlexMap<T> for HashMap<String, T> {
    fn flex_get(&self, search_key: &str) -> Option<&T> {
        if let Some(value) = self.get(search_key) {
            return Some(value);
        }
        self.iter()
            .filter(|(key, _)| flex_eq(key, search_key))
            .map(|(_, value)| value)
            .exactly_one()
            .ok()
    }
}
