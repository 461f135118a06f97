use guidesearch_core::traits::{GuideRecord, GuideSource};
use guidesearch_core::types::{Guide, DEFAULT_ORIGIN};

/// Build the in-memory corpus from a source, preserving source order.
///
/// Returns `None` when the source itself is unavailable; an available
/// source with zero records yields an empty vec. Individual records with
/// missing fields degrade to empty values, never to a failure.
pub fn collect(source: &dyn GuideSource) -> Option<Vec<Guide>> {
    let records = source.records()?;
    let mut guides = Vec::with_capacity(records.len());
    for record in &records {
        guides.push(guide_from_record(record.as_ref()));
    }
    Some(guides)
}

// Explicit per-field mapping; record keys outside this list are ignored.
fn guide_from_record(record: &dyn GuideRecord) -> Guide {
    Guide {
        title: record.field("title").unwrap_or_default(),
        kind: record.field("type").unwrap_or_default(),
        url: record.field("url").unwrap_or_default(),
        summary: record.field("summary").unwrap_or_default(),
        keywords: record.field("keywords").unwrap_or_default(),
        content: record.content(),
        categories: record.field("categories").unwrap_or_default(),
        origin: record
            .field("origin")
            .unwrap_or_else(|| DEFAULT_ORIGIN.to_string()),
    }
}
