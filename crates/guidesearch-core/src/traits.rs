use crate::types::{Excerpts, Guide, Query};

/// A record-like object exposing the guide attributes as named string
/// fields, the shape a host page or corpus file presents to the collector.
pub trait GuideRecord {
    /// Value of the named attribute, or `None` when the record lacks it.
    fn field(&self, name: &str) -> Option<String>;

    /// Guide content, which unlike the other attributes may be a list of
    /// excerpts. Sources with list-valued records override this.
    fn content(&self) -> Option<Excerpts> {
        self.field("content").map(Excerpts::One)
    }
}

/// A queryable set of guide records.
pub trait GuideSource: Send + Sync {
    /// All records in source order, or `None` when the source itself is
    /// unavailable. An available source with zero records returns an empty
    /// vec, never `None`.
    fn records(&self) -> Option<Vec<Box<dyn GuideRecord + '_>>>;
}

/// The surface a search path exposes to the form controller.
///
/// `None` means the path is unavailable and the caller should fall through
/// to another one; `Some(vec![])` means zero hits.
pub trait GuideSearch: Send + Sync {
    fn search(&self, query: &Query) -> Option<Vec<Guide>>;
}
