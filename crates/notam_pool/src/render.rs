//! Display ordering and text rendering.

use common::Notam;

use crate::NotamSet;

/// Render the pool as display-ready text blocks, most recent first.
///
/// Ordering is start-validity descending; notices without one sort as the
/// lowest possible value and land at the end. Equal timestamps fall back
/// to `pk` ascending so repeated runs over identical input print
/// identically.
pub fn render(notams: &NotamSet) -> Vec<String> {
    let mut ordered: Vec<&Notam> = notams.values().collect();
    // Option<String> orders None below every Some, so undated notices
    // land at the end of a descending sort.
    ordered.sort_by(|a, b| {
        b.start_validity
            .cmp(&a.start_validity)
            .then_with(|| a.pk.cmp(&b.pk))
    });

    ordered
        .into_iter()
        .map(|notam| match &notam.start_validity {
            Some(start) => format!("{}\n{}", start, notam.text),
            None => notam.text.clone(),
        })
        .collect()
}
