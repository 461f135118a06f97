use guidesearch_core::types::{Guide, Query};

/// Case-insensitive AND filter over the corpus.
///
/// `None` in means the corpus was never activated, so `None` comes back
/// ("local search unavailable", distinct from zero hits). Matching guides
/// keep their original relative order; there is no re-ranking.
pub fn match_guides(corpus: Option<&[Guide]>, query: &Query) -> Option<Vec<Guide>> {
    let corpus = corpus?;
    let terms = query.terms();
    let categories = &query.categories;

    let hits = corpus
        .iter()
        .filter(|g| {
            let mut matched = true;
            if !categories.is_empty() {
                matched = contains_all_case_insensitive(&g.categories, categories);
            }
            if matched && !terms.is_empty() {
                // One haystack per guide; a term may straddle a field
                // boundary, which is accepted as an inexact match.
                let haystack =
                    format!("{}{}{}{}", g.keywords, g.summary, g.title, g.categories);
                matched = contains_all_case_insensitive(&haystack, &terms);
            }
            matched
        })
        .cloned()
        .collect();
    Some(hits)
}

fn contains_all_case_insensitive(text: &str, needles: &[String]) -> bool {
    let text = text.to_lowercase();
    needles.iter().all(|n| text.contains(&n.to_lowercase()))
}
