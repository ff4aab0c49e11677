/// Derives the grouping key of a word.
///
/// Implemented by [`WordLength`] and by every closure `Fn(&str) -> K`, so an
/// index can be keyed by anything totally ordered, e.g.
/// `GroupingIndex::with_key_fn(|word: &str| word.len() as u32 % 4)`.
pub trait KeyFn {
    /// The key type. Enumeration follows its `Ord` implementation.
    type Key: Ord + Copy;

    /// Computes the key of `word`. Must be deterministic.
    fn key(&self, word: &str) -> Self::Key;
}

/// Keys a word by its length in characters (Unicode scalar values).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WordLength;

impl KeyFn for WordLength {
    type Key = usize;

    fn key(&self, word: &str) -> usize {
        word.chars().count()
    }
}

impl<K, F> KeyFn for F
where
    K: Ord + Copy,
    F: Fn(&str) -> K,
{
    type Key = K;

    fn key(&self, word: &str) -> K {
        self(word)
    }
}

/// Integer keys that can be enumerated by probing the key space one value at
/// a time, starting from zero.
///
/// Needed only by the scanning strategies (`DenseScan`, `CountedScan`).
pub trait ScanKey: Ord + Copy {
    /// The first value probed by a scan.
    const ORIGIN: Self;

    /// The next value to probe, or `None` once the type is exhausted.
    fn successor(self) -> Option<Self>;
}

macro_rules! impl_scan_key {
    ($($t:ty),*) => {
        $(
            impl ScanKey for $t {
                const ORIGIN: Self = 0;

                fn successor(self) -> Option<Self> {
                    self.checked_add(1)
                }
            }
        )*
    };
}

impl_scan_key!(u8, u16, u32, u64, usize);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_length_counts_chars() {
        assert_eq!(WordLength.key("hippopotamus"), 12);
        assert_eq!(WordLength.key("straße"), 6);
        assert_eq!(WordLength.key(""), 0);
    }

    #[test]
    fn closures_are_key_fns() {
        let first_byte = |word: &str| word.bytes().next().unwrap_or(0);
        assert_eq!(first_byte.key("ant"), b'a');
    }

    #[test]
    fn successor_stops_at_max() {
        assert_eq!(0u8.successor(), Some(1));
        assert_eq!(u8::MAX.successor(), None);
        assert_eq!(usize::ORIGIN, 0);
    }
}
