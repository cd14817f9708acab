//! Folding a fetched page into the accumulated item list.

use std::collections::HashSet;

use crate::catalog::ListItem;

/// How an incoming page combines with the existing items.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeMode {
    /// The incoming page becomes the whole list (page 0 of an epoch).
    Replace,
    /// The incoming page extends the list (page > 0 of the same epoch).
    Append,
}

/// Merge `incoming` into `existing` without duplicating ids.
///
/// Pure function. In `Append` mode every incoming element whose id is already
/// present is skipped; the relative order of the survivors is preserved, so
/// re-merging an already-seen page leaves the list unchanged. The result
/// never contains two elements with the same id, even when the backend sends
/// a duplicate within a single page.
pub fn merge<T: ListItem>(existing: Vec<T>, incoming: Vec<T>, mode: MergeMode) -> Vec<T> {
    let existing = match mode {
        MergeMode::Replace => Vec::new(),
        MergeMode::Append => existing,
    };

    let mut seen: HashSet<i64> = existing.iter().map(|item| item.id()).collect();
    let mut merged = existing;
    for item in incoming {
        if seen.insert(item.id()) {
            merged.push(item);
        }
    }
    merged
}
