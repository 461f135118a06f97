//! guidesearch-local
//!
//! The fallback search path: collects an in-memory guide corpus from a host
//! source and filters it by substring, case-insensitively, with no ranking.
//! See `collector`, `matcher` and `sources`.

pub mod collector;
pub mod matcher;
pub mod sources;

pub use sources::{DirSource, JsonFileSource, MemorySource};

use guidesearch_core::traits::{GuideSearch, GuideSource};
use guidesearch_core::types::{Guide, LocalResult, Query};

/// Session-scoped owner of the local corpus.
///
/// The corpus is built on `activate` and only read afterwards; calling
/// `activate` again replaces it wholesale. Until an activation succeeds,
/// every search returns `None` so the caller can fall through to another
/// search path.
#[derive(Default)]
pub struct LocalSearch {
    guides: Option<Vec<Guide>>,
}

impl LocalSearch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Collect the corpus from `source`, replacing any previous one.
    pub fn activate(&mut self, source: &dyn GuideSource) {
        self.guides = collector::collect(source);
        match &self.guides {
            Some(guides) => {
                tracing::info!(guides = guides.len(), "local search is ready");
            }
            None => tracing::warn!("local search source unavailable"),
        }
    }

    pub fn is_active(&self) -> bool {
        self.guides.is_some()
    }

    pub fn guides(&self) -> Option<&[Guide]> {
        self.guides.as_deref()
    }

    /// Run the matcher. `None` until activation succeeds; `Some(vec![])`
    /// for an activated corpus with zero hits.
    pub fn search(&self, query: &Query) -> Option<Vec<Guide>> {
        matcher::match_guides(self.guides.as_deref(), query)
    }

    /// Like `search`, wrapped in the result envelope the renderer consumes.
    /// Local search returns everything at once, so `has_more_hits` is
    /// always false.
    pub fn search_result(&self, query: &Query) -> Option<LocalResult> {
        self.search(query).map(LocalResult::from_hits)
    }
}

impl GuideSearch for LocalSearch {
    fn search(&self, query: &Query) -> Option<Vec<Guide>> {
        LocalSearch::search(self, query)
    }
}
