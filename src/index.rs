use std::collections::btree_map::{self, BTreeMap};
use std::fmt;
use std::ops::Bound::{Excluded, Unbounded};

use tracing::trace;

use crate::key::{KeyFn, WordLength};
use crate::scan::OrderedScan;
use crate::tokenize::tokenize;

/// Words grouped by a derived key, kept in ascending key order.
///
/// Every key present maps to a non-empty group, and each group holds its
/// words in the order they were inserted (duplicates included). The index
/// never stores the empty string.
///
/// Insertion needs `&mut self`; readers only borrow the index, so any number
/// of enumerations may run side by side. To share one index between
/// inserting threads, put it behind a `Mutex`.
pub struct GroupingIndex<F: KeyFn = WordLength> {
    /// Groups by key
    pub(crate) groups: BTreeMap<F::Key, Vec<String>>,
    /// Key derivation applied to every inserted word
    key_fn: F,
    /// Number of words over all groups
    words: usize,
}

impl GroupingIndex<WordLength> {
    /// Creates an empty index keyed by word length.
    pub fn new() -> Self {
        Self::with_key_fn(WordLength)
    }
}

impl Default for GroupingIndex<WordLength> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: KeyFn> GroupingIndex<F> {
    /// Creates an empty index keyed by `key_fn`.
    pub fn with_key_fn(key_fn: F) -> Self {
        GroupingIndex { groups: BTreeMap::new(), key_fn, words: 0 }
    }

    /// Appends `word` to the group of its key, creating the group if needed.
    ///
    /// Empty words are ignored.
    pub fn insert<W: Into<String>>(&mut self, word: W) {
        let word = word.into();
        if word.is_empty() {
            trace!("ignoring empty word");
            return;
        }
        let key = self.key_fn.key(&word);
        self.groups.entry(key).or_default().push(word);
        self.words += 1;
    }

    /// Tokenizes `line` and inserts every word in order.
    pub fn insert_line(&mut self, line: &str) {
        for word in tokenize(line) {
            self.insert(word);
        }
    }

    /// Number of distinct keys.
    pub fn size(&self) -> usize {
        self.groups.len()
    }

    /// Same as [`size`](Self::size).
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// `true` when nothing was inserted yet.
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Number of words stored over all groups.
    pub fn word_count(&self) -> usize {
        self.words
    }

    /// The key derivation used by this index.
    pub fn key_fn(&self) -> &F {
        &self.key_fn
    }

    /// The group of `key`, if any word with that key was inserted.
    pub fn group_for(&self, key: &F::Key) -> Option<&[String]> {
        self.groups.get(key).map(Vec::as_slice)
    }

    /// Whether a group exists for `key`.
    pub fn contains_key(&self, key: &F::Key) -> bool {
        self.groups.contains_key(key)
    }

    /// The smallest key present.
    pub fn first_key(&self) -> Option<F::Key> {
        self.groups.keys().next().copied()
    }

    /// The largest key present.
    pub fn last_key(&self) -> Option<F::Key> {
        self.groups.keys().next_back().copied()
    }

    /// The least key strictly greater than `key`.
    pub fn higher_key(&self, key: &F::Key) -> Option<F::Key> {
        self.groups.range((Excluded(*key), Unbounded)).next().map(|(k, _)| *k)
    }

    /// The greatest key strictly less than `key`.
    pub fn lower_key(&self, key: &F::Key) -> Option<F::Key> {
        self.groups.range(..*key).next_back().map(|(k, _)| *k)
    }

    /// Keys in ascending order.
    ///
    /// Each call returns a fresh iterator over the current contents.
    pub fn ascending_keys(&self) -> Keys<'_, F::Key> {
        Keys { inner: self.groups.keys() }
    }

    /// `(key, group)` pairs in ascending key order.
    pub fn entries(&self) -> OrderedScan<'_, F::Key> {
        OrderedScan::new(&self.groups)
    }

    /// `(key, group)` pairs in descending key order.
    pub fn descending_entries(&self) -> std::iter::Rev<OrderedScan<'_, F::Key>> {
        self.entries().rev()
    }

    /// Moves every word of `other` to the end of the matching group here.
    ///
    /// Words are keyed by `other`'s key function, which is expected to agree
    /// with this one.
    pub fn merge(&mut self, other: GroupingIndex<F>) {
        self.words += other.words;
        for (key, mut group) in other.groups {
            match self.groups.entry(key) {
                btree_map::Entry::Vacant(slot) => {
                    slot.insert(group);
                }
                btree_map::Entry::Occupied(mut slot) => slot.get_mut().append(&mut group),
            }
        }
    }
}

impl<F> Clone for GroupingIndex<F>
where
    F: KeyFn + Clone,
{
    fn clone(&self) -> Self {
        GroupingIndex { groups: self.groups.clone(), key_fn: self.key_fn.clone(), words: self.words }
    }
}

impl<F> fmt::Debug for GroupingIndex<F>
where
    F: KeyFn,
    F::Key: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GroupingIndex")
            .field("groups", &self.groups)
            .field("words", &self.words)
            .finish()
    }
}

impl<F: KeyFn> Extend<String> for GroupingIndex<F> {
    fn extend<I: IntoIterator<Item = String>>(&mut self, words: I) {
        for word in words {
            self.insert(word);
        }
    }
}

impl FromIterator<String> for GroupingIndex<WordLength> {
    fn from_iter<I: IntoIterator<Item = String>>(words: I) -> Self {
        let mut index = GroupingIndex::new();
        index.extend(words);
        index
    }
}

impl<'a, F: KeyFn> IntoIterator for &'a GroupingIndex<F> {
    type Item = (F::Key, &'a [String]);
    type IntoIter = OrderedScan<'a, F::Key>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries()
    }
}

/// Iterator over the keys of a [`GroupingIndex`] in ascending order.
pub struct Keys<'a, K> {
    inner: btree_map::Keys<'a, K, Vec<String>>,
}

impl<'a, K: Copy> Iterator for Keys<'a, K> {
    type Item = K;

    fn next(&mut self) -> Option<K> {
        self.inner.next().copied()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a, K: Copy> DoubleEndedIterator for Keys<'a, K> {
    fn next_back(&mut self) -> Option<K> {
        self.inner.next_back().copied()
    }
}

impl<'a, K: Copy> ExactSizeIterator for Keys<'a, K> {}
