//! Domain types shared by the collector, matcher and CLI.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Origin assigned to a guide whose source record carries none.
pub const DEFAULT_ORIGIN: &str = "main";

/// Guide content: either a single string or an ordered list of
/// highlighted excerpts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Excerpts {
    One(String),
    Many(Vec<String>),
}

/// A single searchable guide collected from a host corpus.
///
/// - `title`: display string
/// - `kind`: category tag ("guide", "tutorial", ...), serialized as `type`
/// - `url`: absolute or relative link target
/// - `summary`/`keywords`: free text, may be empty
/// - `content`: optional excerpt(s), carried for rendering but not searched
/// - `categories`: free-text string matched via substring, not a structured set
/// - `origin`: source system tag, [`DEFAULT_ORIGIN`] when absent
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Guide {
    #[serde(default)]
    pub title: String,
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub keywords: String,
    #[serde(default)]
    pub content: Option<Excerpts>,
    #[serde(default)]
    pub categories: String,
    #[serde(default = "default_origin")]
    pub origin: String,
}

fn default_origin() -> String {
    DEFAULT_ORIGIN.to_string()
}

/// A structured local-search request: free-text terms plus category filters.
///
/// Built fresh per search and discarded after matching.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    pub q: Option<String>,
    pub categories: Vec<String>,
}

impl Query {
    pub fn new<S: Into<String>>(q: S) -> Self {
        Self { q: Some(q.into()), categories: Vec::new() }
    }

    pub fn with_categories<S: Into<String>>(mut self, categories: Vec<S>) -> Self {
        self.categories = categories.into_iter().map(Into::into).collect();
        self
    }

    /// Build a query from an untyped parameter bag (the widget's form data).
    ///
    /// Recognized keys are `q` (string) and `categories` (string or array of
    /// strings). A malformed `categories` shape degrades to "no category
    /// filter" rather than failing.
    pub fn from_params(params: &Value) -> Self {
        let q = params
            .get("q")
            .and_then(Value::as_str)
            .map(ToString::to_string);
        let categories = match params.get("categories") {
            Some(Value::String(s)) => vec![s.clone()],
            Some(Value::Array(items)) => items
                .iter()
                .filter_map(Value::as_str)
                .map(ToString::to_string)
                .collect(),
            _ => Vec::new(),
        };
        Self { q, categories }
    }

    /// Whitespace-split, trimmed, lowercased free-text terms.
    /// Empty or absent `q` yields zero terms.
    pub fn terms(&self) -> Vec<String> {
        self.q
            .as_deref()
            .unwrap_or("")
            .split_whitespace()
            .map(|t| t.trim().to_lowercase())
            .filter(|t| !t.is_empty())
            .collect()
    }
}

/// The result envelope handed to the caller after a local search: all hits
/// at once, so there is never a further page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocalResult {
    pub hits: Vec<Guide>,
    pub total: usize,
    pub has_more_hits: bool,
}

impl LocalResult {
    pub fn from_hits(hits: Vec<Guide>) -> Self {
        let total = hits.len();
        Self { hits, total, has_more_hits: false }
    }
}
