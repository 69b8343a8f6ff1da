//! Filter selections of a search and their representation in the URL query string
//!
//! A filter maps a key (e.g. `sort`, `genres`) to either a single value or a set of values.
//! Multi-valued keys are written to the query string comma-separated, which is also how the
//! search endpoints read them.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

/// The query string key holding the search text
pub const QUERY_TEXT_KEY: &str = "q";
pub const SORT_KEY: &str = "sort";
pub const GENRES_KEY: &str = "genres";

/// The selection for a single filter key
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FilterValue {
    Single(String),
    Multi(BTreeSet<String>),
}
impl FilterValue {
    /// An empty value of the same shape as `self`
    fn emptied(&self) -> Self {
        match self {
            Self::Single(_) => Self::Single(String::new()),
            Self::Multi(_) => Self::Multi(BTreeSet::new()),
        }
    }

    /// The value as it goes into the query string (not yet percent-encoded)
    pub fn to_param(&self) -> String {
        match self {
            Self::Single(s) => s.clone(),
            Self::Multi(set) => set.iter().cloned().collect::<Vec<_>>().join(","),
        }
    }

    /// Read a raw query string value in the shape of `template`
    fn from_param(template: &Self, raw: &str) -> Self {
        match template {
            Self::Single(_) => Self::Single(raw.to_string()),
            Self::Multi(_) => Self::Multi(
                raw.split(',')
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .map(str::to_string)
                    .collect(),
            ),
        }
    }

    pub fn contains(&self, value: &str) -> bool {
        match self {
            Self::Single(s) => s == value,
            Self::Multi(set) => set.contains(value),
        }
    }
}

/// The current selection of all filters of one search
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct SearchFilter(BTreeMap<String, FilterValue>);
impl SearchFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert of a single-valued key
    pub fn with_single(mut self, key: &str, value: &str) -> Self {
        self.0
            .insert(key.to_string(), FilterValue::Single(value.to_string()));
        self
    }

    /// Builder-style insert of a multi-valued key
    pub fn with_multi<I, S>(mut self, key: &str, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.0.insert(
            key.to_string(),
            FilterValue::Multi(values.into_iter().map(Into::into).collect()),
        );
        self
    }

    pub fn get(&self, key: &str) -> Option<&FilterValue> {
        self.0.get(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Set a single-valued key
    pub fn set_single(&mut self, key: &str, value: &str) {
        self.0
            .insert(key.to_string(), FilterValue::Single(value.to_string()));
    }

    /// Add `value` to a multi-valued key if it is not selected, remove it otherwise
    ///
    /// A single-valued key is set to `value` instead.
    pub fn toggle(&mut self, key: &str, value: &str) {
        match self.0.get_mut(key) {
            Some(FilterValue::Multi(set)) => {
                if !set.remove(value) {
                    set.insert(value.to_string());
                }
            }
            Some(FilterValue::Single(s)) => {
                *s = value.to_string();
            }
            None => {
                self.0.insert(
                    key.to_string(),
                    FilterValue::Multi(BTreeSet::from([value.to_string()])),
                );
            }
        }
    }

    /// Is this the same selection as `default`?
    ///
    /// Every key is compared on its own: sets as sets, single values by equality. A key
    /// missing on one side counts as the empty value.
    pub fn is_default(&self, default: &SearchFilter) -> bool {
        self.0
            .keys()
            .chain(default.0.keys())
            .all(|key| match (self.0.get(key), default.0.get(key)) {
                (Some(a), Some(b)) => a == b,
                (Some(a), None) => *a == a.emptied(),
                (None, Some(b)) => *b == b.emptied(),
                (None, None) => true,
            })
    }

    /// The key-value pairs for the query string, in key order
    pub fn to_params(&self) -> Vec<(String, String)> {
        self.0
            .iter()
            .map(|(k, v)| (k.clone(), v.to_param()))
            .collect()
    }

    /// Read the filter from a query string, using `default` for keys (and value shapes)
    ///
    /// Keys not present in `default` are ignored; keys missing from the query string take the
    /// default value.
    pub fn from_query_string(query_string: &str, default: &SearchFilter) -> Self {
        let params = parse_query_string(query_string);
        Self(
            default
                .0
                .iter()
                .map(|(key, template)| {
                    let value = params
                        .iter()
                        .find(|(k, _)| k == key)
                        .map(|(_, raw)| FilterValue::from_param(template, raw))
                        .unwrap_or_else(|| template.clone());
                    (key.clone(), value)
                })
                .collect(),
        )
    }
}

/// Build a query string (without the leading `?`) from the search text and a filter
pub fn build_query_string(text: &str, filter: &SearchFilter) -> String {
    std::iter::once((QUERY_TEXT_KEY.to_string(), text.trim().to_string()))
        .chain(filter.to_params())
        .map(|(k, v)| format!("{}={}", urlencoding::encode(&k), urlencoding::encode(&v)))
        .collect::<Vec<_>>()
        .join("&")
}

/// Split a query string into decoded key-value pairs
///
/// A leading `?` is ignored, `+` is read as a space. Pairs that cannot be decoded are skipped.
pub fn parse_query_string(query_string: &str) -> Vec<(String, String)> {
    query_string
        .trim_start_matches('?')
        .split('&')
        .filter(|pair| !pair.is_empty())
        .filter_map(|pair| {
            let (k, v) = pair.split_once('=').unwrap_or((pair, ""));
            let key = urlencoding::decode(&k.replace('+', " ")).ok()?.into_owned();
            let value = urlencoding::decode(&v.replace('+', " ")).ok()?.into_owned();
            Some((key, value))
        })
        .collect()
}

/// Read the search text from a query string
pub fn query_text_from(query_string: &str) -> String {
    parse_query_string(query_string)
        .into_iter()
        .find(|(k, _)| k == QUERY_TEXT_KEY)
        .map(|(_, v)| v)
        .unwrap_or_default()
}

#[cfg(test)]
mod test;
