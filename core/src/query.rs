//! Query-string construction for GET requests.
//!
//! # Design
//! Callers hand over structured `(key, value)` pairs and the generic GET
//! encodes them in one place, so no wrapper has to remember to escape its
//! arguments. Pairs keep insertion order and duplicates are allowed.

use std::fmt::Display;

use serde_json::Value;

/// Ordered list of query parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    pairs: Vec<(String, String)>,
}

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`Query::push`].
    pub fn with(mut self, key: impl Into<String>, value: impl Display) -> Self {
        self.push(key, value);
        self
    }

    pub fn push(&mut self, key: impl Into<String>, value: impl Display) {
        self.pairs.push((key.into(), value.to_string()));
    }

    /// Append every pair of `other` after the existing ones.
    pub fn append(&mut self, other: Query) {
        self.pairs.extend(other.pairs);
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }

    /// Percent-encoded `k1=v1&k2=v2`, without the leading `?`.
    pub fn encode(&self) -> String {
        self.pairs
            .iter()
            .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&")
    }
}

impl<K: Into<String>, V: Display> FromIterator<(K, V)> for Query {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut query = Query::new();
        for (k, v) in iter {
            query.push(k, v);
        }
        query
    }
}

/// Offset/count parameters accepted by the list endpoints.
///
/// `sort`, `query` and `fields` are JSON documents; the server expects them
/// as compact JSON strings in the query string.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListOptions {
    pub offset: Option<u64>,
    pub count: Option<u64>,
    pub sort: Option<Value>,
    pub query: Option<Value>,
    pub fields: Option<Value>,
}

impl ListOptions {
    pub fn page(offset: u64, count: u64) -> Self {
        Self {
            offset: Some(offset),
            count: Some(count),
            ..Self::default()
        }
    }
}

impl From<&ListOptions> for Query {
    fn from(opts: &ListOptions) -> Self {
        let mut query = Query::new();
        if let Some(offset) = opts.offset {
            query.push("offset", offset);
        }
        if let Some(count) = opts.count {
            query.push("count", count);
        }
        if let Some(sort) = &opts.sort {
            query.push("sort", sort);
        }
        if let Some(q) = &opts.query {
            query.push("query", q);
        }
        if let Some(fields) = &opts.fields {
            query.push("fields", fields);
        }
        query
    }
}

/// Parameters for the `*.history` endpoints. Timestamps are ISO-8601
/// strings as the server stores them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HistoryOptions {
    pub latest: Option<String>,
    pub oldest: Option<String>,
    pub inclusive: Option<bool>,
    pub offset: Option<u64>,
    pub count: Option<u64>,
    pub unreads: Option<bool>,
}

impl From<&HistoryOptions> for Query {
    fn from(opts: &HistoryOptions) -> Self {
        let mut query = Query::new();
        if let Some(latest) = &opts.latest {
            query.push("latest", latest);
        }
        if let Some(oldest) = &opts.oldest {
            query.push("oldest", oldest);
        }
        if let Some(inclusive) = opts.inclusive {
            query.push("inclusive", inclusive);
        }
        if let Some(offset) = opts.offset {
            query.push("offset", offset);
        }
        if let Some(count) = opts.count {
            query.push("count", count);
        }
        if let Some(unreads) = opts.unreads {
            query.push("unreads", unreads);
        }
        query
    }
}
