//! Deduplication pool.

use std::collections::HashMap;

use common::Notam;
use tracing::debug;

/// Deduplicated notices keyed by primary key.
pub type NotamSet = HashMap<String, Notam>;

/// Fold notices into a set keyed by `pk`.
///
/// Overlapping search radii return the same physical notice for several
/// airports; a later record with the same key overwrites an earlier one,
/// so the fold is idempotent under repeated identical input. Pure: no
/// state is shared across calls.
pub fn aggregate(records: impl IntoIterator<Item = Notam>) -> NotamSet {
    let mut pool = NotamSet::new();
    for notam in records {
        pool.insert(notam.pk.clone(), notam);
    }
    debug!("Pooled {} unique notices", pool.len());
    pool
}
