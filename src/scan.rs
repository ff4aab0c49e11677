//! Interchangeable ways of walking a [`GroupingIndex`] in ascending key order.
//!
//! All strategies yield the same `(key, group)` pairs. They differ in how
//! much of the key space they touch, which every iterator reports through
//! [`EntryScan::iterations`].

use std::collections::btree_map::{self, BTreeMap};
use std::fmt;
use std::ops::Bound::{Excluded, Unbounded};

use clap::ValueEnum;

use crate::index::GroupingIndex;
use crate::key::{KeyFn, ScanKey};

/// Iterator over `(key, group)` pairs that counts its own loop steps.
pub trait EntryScan<'a, K>: Iterator<Item = (K, &'a [String])> {
    /// Loop steps performed so far.
    fn iterations(&self) -> usize;
}

/// Names a traversal strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Strategy {
    /// Probe every integer from zero up to the largest key
    Dense,
    /// Probe integers from zero until all keys were found
    Counted,
    /// Walk the ordered map directly
    Ordered,
    /// Step from the first key through successive higher keys
    Successor,
}

impl Strategy {
    /// Every strategy, in the order `--compare` prints them.
    pub const ALL: [Strategy; 4] = [Strategy::Dense, Strategy::Counted, Strategy::Ordered, Strategy::Successor];

    /// Name used on the command line.
    pub fn name(self) -> &'static str {
        match self {
            Strategy::Dense => "dense",
            Strategy::Counted => "counted",
            Strategy::Ordered => "ordered",
            Strategy::Successor => "successor",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Probes every value from zero to the largest key present, testing each
/// for membership. Costs `max_key + 1` steps however sparse the keys are.
pub struct DenseScan<'a, K> {
    groups: &'a BTreeMap<K, Vec<String>>,
    /// Next value to probe
    cursor: Option<K>,
    /// Largest key present when the scan started
    last: Option<K>,
    iterations: usize,
}

impl<'a, K: ScanKey> DenseScan<'a, K> {
    pub(crate) fn new(groups: &'a BTreeMap<K, Vec<String>>) -> Self {
        let last = groups.keys().next_back().copied();
        DenseScan { groups, cursor: last.map(|_| K::ORIGIN), last, iterations: 0 }
    }
}

impl<'a, K: ScanKey> Iterator for DenseScan<'a, K> {
    type Item = (K, &'a [String]);

    fn next(&mut self) -> Option<Self::Item> {
        let last = self.last?;
        while let Some(key) = self.cursor {
            self.iterations += 1;
            self.cursor = if key < last { key.successor() } else { None };
            if let Some(group) = self.groups.get(&key) {
                return Some((key, group.as_slice()));
            }
        }
        None
    }
}

impl<'a, K: ScanKey> EntryScan<'a, K> for DenseScan<'a, K> {
    fn iterations(&self) -> usize {
        self.iterations
    }
}

/// Probes values upward from zero until as many keys were found as the
/// index holds. Needs no upper bound, but still costs `max_key + 1` steps.
pub struct CountedScan<'a, K> {
    groups: &'a BTreeMap<K, Vec<String>>,
    cursor: Option<K>,
    /// Keys found so far
    found: usize,
    iterations: usize,
}

impl<'a, K: ScanKey> CountedScan<'a, K> {
    pub(crate) fn new(groups: &'a BTreeMap<K, Vec<String>>) -> Self {
        CountedScan { groups, cursor: Some(K::ORIGIN), found: 0, iterations: 0 }
    }
}

impl<'a, K: ScanKey> Iterator for CountedScan<'a, K> {
    type Item = (K, &'a [String]);

    fn next(&mut self) -> Option<Self::Item> {
        while self.found < self.groups.len() {
            let key = self.cursor?;
            self.iterations += 1;
            self.cursor = key.successor();
            if let Some(group) = self.groups.get(&key) {
                self.found += 1;
                return Some((key, group.as_slice()));
            }
        }
        None
    }
}

impl<'a, K: ScanKey> EntryScan<'a, K> for CountedScan<'a, K> {
    fn iterations(&self) -> usize {
        self.iterations
    }
}

/// Walks the populated keys through the map's own ordered iterator.
///
/// This is what [`GroupingIndex::entries`] returns.
pub struct OrderedScan<'a, K> {
    inner: btree_map::Iter<'a, K, Vec<String>>,
    iterations: usize,
}

impl<'a, K> OrderedScan<'a, K> {
    pub(crate) fn new(groups: &'a BTreeMap<K, Vec<String>>) -> Self {
        OrderedScan { inner: groups.iter(), iterations: 0 }
    }
}

impl<'a, K: Copy> Iterator for OrderedScan<'a, K> {
    type Item = (K, &'a [String]);

    fn next(&mut self) -> Option<Self::Item> {
        let (key, group) = self.inner.next()?;
        self.iterations += 1;
        Some((*key, group.as_slice()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a, K: Copy> DoubleEndedIterator for OrderedScan<'a, K> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let (key, group) = self.inner.next_back()?;
        self.iterations += 1;
        Some((*key, group.as_slice()))
    }
}

impl<'a, K: Copy> ExactSizeIterator for OrderedScan<'a, K> {}

impl<'a, K: Copy> EntryScan<'a, K> for OrderedScan<'a, K> {
    fn iterations(&self) -> usize {
        self.iterations
    }
}

/// Starts at the smallest key and repeatedly looks up the next higher one.
pub struct SuccessorScan<'a, K> {
    groups: &'a BTreeMap<K, Vec<String>>,
    cursor: Option<K>,
    iterations: usize,
}

impl<'a, K: Ord + Copy> SuccessorScan<'a, K> {
    pub(crate) fn new(groups: &'a BTreeMap<K, Vec<String>>) -> Self {
        SuccessorScan { groups, cursor: groups.keys().next().copied(), iterations: 0 }
    }
}

impl<'a, K: Ord + Copy> Iterator for SuccessorScan<'a, K> {
    type Item = (K, &'a [String]);

    fn next(&mut self) -> Option<Self::Item> {
        let key = self.cursor?;
        self.iterations += 1;
        let mut rest = self.groups.range((Excluded(key), Unbounded));
        self.cursor = rest.next().map(|(k, _)| *k);
        self.groups.get(&key).map(|group| (key, group.as_slice()))
    }
}

impl<'a, K: Ord + Copy> EntryScan<'a, K> for SuccessorScan<'a, K> {
    fn iterations(&self) -> usize {
        self.iterations
    }
}

impl<F: KeyFn> GroupingIndex<F> {
    /// Same as [`entries`](Self::entries).
    pub fn ordered_scan(&self) -> OrderedScan<'_, F::Key> {
        OrderedScan::new(&self.groups)
    }

    /// Walks from the first key through successive higher keys.
    pub fn successor_scan(&self) -> SuccessorScan<'_, F::Key> {
        SuccessorScan::new(&self.groups)
    }
}

impl<F> GroupingIndex<F>
where
    F: KeyFn,
    F::Key: ScanKey,
{
    /// Probes every value from zero to the largest key.
    pub fn dense_scan(&self) -> DenseScan<'_, F::Key> {
        DenseScan::new(&self.groups)
    }

    /// Probes values from zero until every key was found.
    pub fn counted_scan(&self) -> CountedScan<'_, F::Key> {
        CountedScan::new(&self.groups)
    }

    /// Walks the index with the given strategy.
    pub fn scan(&self, strategy: Strategy) -> Box<dyn EntryScan<'_, F::Key> + '_> {
        match strategy {
            Strategy::Dense => Box::new(self.dense_scan()),
            Strategy::Counted => Box::new(self.counted_scan()),
            Strategy::Ordered => Box::new(self.ordered_scan()),
            Strategy::Successor => Box::new(self.successor_scan()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DEMO_LINES;

    fn animals() -> GroupingIndex {
        let mut index = GroupingIndex::new();
        for line in DEMO_LINES {
            index.insert_line(line);
        }
        index
    }

    #[test]
    fn strategies_agree_on_animals() {
        let index = animals();
        let expected: Vec<_> = index.entries().collect();
        for strategy in Strategy::ALL {
            let got: Vec<_> = index.scan(strategy).collect();
            assert_eq!(got, expected, "{} differs", strategy);
        }
    }

    #[test]
    fn iteration_counts() {
        let index = animals();
        let counts: Vec<usize> = Strategy::ALL
            .iter()
            .map(|&strategy| {
                let mut scan = index.scan(strategy);
                scan.by_ref().for_each(drop);
                scan.iterations()
            })
            .collect();
        assert_eq!(counts, vec![13, 13, 5, 5]);
    }

    #[test]
    fn sparse_keys_are_not_assumed_dense() {
        let mut index = GroupingIndex::with_key_fn(|word: &str| if word.starts_with('a') { 2u32 } else { 100 });
        index.insert_line("ant zebra ape");
        let mut dense = index.dense_scan();
        let keys: Vec<u32> = dense.by_ref().map(|(key, _)| key).collect();
        assert_eq!(keys, vec![2, 100]);
        assert_eq!(dense.iterations(), 101);

        let mut counted = index.counted_scan();
        assert_eq!(counted.by_ref().count(), 2);
        assert_eq!(counted.iterations(), 101);
    }

    #[test]
    fn zero_key_is_found() {
        let mut index = GroupingIndex::with_key_fn(|word: &str| word.len() as u8 - 1);
        index.insert_line("a bb");
        assert_eq!(index.dense_scan().map(|(key, _)| key).collect::<Vec<_>>(), vec![0, 1]);
        assert_eq!(index.counted_scan().map(|(key, _)| key).collect::<Vec<_>>(), vec![0, 1]);
    }

    #[test]
    fn max_key_does_not_overflow() {
        let mut index = GroupingIndex::with_key_fn(|word: &str| if word == "top" { u8::MAX } else { 1 });
        index.insert_line("top ox");
        for strategy in Strategy::ALL {
            let keys: Vec<u8> = index.scan(strategy).map(|(key, _)| key).collect();
            assert_eq!(keys, vec![1, u8::MAX], "{}", strategy);
        }
    }

    #[test]
    fn empty_index_scans_nothing() {
        let index = GroupingIndex::new();
        for strategy in Strategy::ALL {
            let mut scan = index.scan(strategy);
            assert!(scan.next().is_none());
            assert_eq!(scan.iterations(), 0, "{}", strategy);
        }
    }

    #[test]
    fn successor_scan_works_for_non_integer_keys() {
        let mut index = GroupingIndex::with_key_fn(|word: &str| word.chars().last().unwrap_or(' '));
        index.insert_line("cat dog bee ant");
        let keys: Vec<char> = index.successor_scan().map(|(key, _)| key).collect();
        assert_eq!(keys, vec!['e', 'g', 't']);
    }
}
