//! Filtering and sorting of spooled file lists.

use std::cmp::Ordering;

use splf_core::{SortOptions, SortOrder, SpooledFile};

/// Keep the spooled files matching any of the space separated search words.
///
/// A file matches a word when the word occurs anywhere in its field values.
/// No words keeps every file.
pub fn filter_spooled_files(files: Vec<SpooledFile>, search_words: Option<&str>) -> Vec<SpooledFile> {
    let terms: Vec<&str> = search_words
        .map(|words| words.split_whitespace().collect())
        .unwrap_or_default();
    if terms.is_empty() {
        return files;
    }

    files
        .into_iter()
        .filter(|splf| {
            let text = splf.searchable_text();
            terms.iter().any(|term| text.contains(term))
        })
        .collect()
}

/// Sort spooled files by name or creation date; ties are ordered by number.
pub fn sort_spooled_files(files: &mut [SpooledFile], sort: SortOptions) {
    files.sort_by(|a, b| {
        let ordering = compare(a, b, sort.order);
        if sort.ascending {
            ordering
        } else {
            ordering.reverse()
        }
    });
}

fn compare(a: &SpooledFile, b: &SpooledFile, order: SortOrder) -> Ordering {
    let key = match order {
        SortOrder::Name => a.name.cmp(&b.name),
        SortOrder::Date => a.creation_timestamp.cmp(&b.creation_timestamp),
    };
    key.then(a.number.cmp(&b.number))
}
