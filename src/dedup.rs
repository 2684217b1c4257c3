//! First-occurrence-order deduplication.
//!
//! All of these share one algorithm: walk the input left to right with a
//! hash set of values already seen, keep an element iff its insert into the
//! set succeeds. That is the only scheme that is both linear time and
//! stable; sorting first loses the order, a nested membership scan is
//! quadratic and falls over at the hundred-thousand element inputs these
//! functions are built for.

use fxhash::FxHashSet;
#[cfg(feature = "indexmap")]
use indexmap::IndexSet;
use std::hash::Hash;

/// Return a new vec containing each distinct value of `input` exactly once,
/// in order of first appearance. The input is not modified.
///
/// Values are compared by exact equality, nothing is normalized. Runs in
/// O(n) time with O(u) auxiliary space for u unique values, and always
/// succeeds; `dedup(&[])` is `vec![]`.
pub fn dedup<T: Hash + Eq + Clone>(input: &[T]) -> Vec<T> {
    let mut seen: FxHashSet<&T> = FxHashSet::default();
    let mut out = Vec::new();
    for t in input {
        if seen.insert(t) {
            out.push(t.clone());
        }
    }
    out
}

/// Remove later duplicates from `v` in place, keeping the first occurrence
/// of each value and the relative order of the survivors.
///
/// The seen set stores a clone of each retained value, so this buys nothing
/// over [`dedup`] unless the caller wants to reuse the vec's allocation.
pub fn dedup_in_place<T: Hash + Eq + Clone>(v: &mut Vec<T>) {
    let mut seen: FxHashSet<T> = FxHashSet::default();
    v.retain(|t| seen.insert(t.clone()));
}

/// Collect the distinct values of `input` into a set that remembers first
/// occurrence order. For callers that want membership queries on the result
/// as well as ordered iteration.
#[cfg(feature = "indexmap")]
pub fn unique<T: Hash + Eq + Clone>(input: &[T]) -> IndexSet<T> {
    input.iter().cloned().collect()
}

/// Iterator adapter created by [`DedupExt::dedup_first`].
pub struct DedupFirst<I: Iterator> {
    iter: I,
    seen: FxHashSet<I::Item>,
}

impl<I> Iterator for DedupFirst<I>
where
    I: Iterator,
    I::Item: Hash + Eq + Clone,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let t = self.iter.next()?;
            if self.seen.insert(t.clone()) {
                break Some(t);
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        // every remaining element could be a repeat
        (0, self.iter.size_hint().1)
    }
}

/// Extension trait adding stable deduplication to any iterator.
pub trait DedupExt: Iterator + Sized {
    /// Yield each distinct element once, at the position of its first
    /// occurrence. Later repeats are skipped.
    fn dedup_first(self) -> DedupFirst<Self> {
        DedupFirst {
            iter: self,
            seen: FxHashSet::default(),
        }
    }
}

impl<I: Iterator> DedupExt for I {}
