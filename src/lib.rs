mod build;
mod error;
mod index;
mod key;
mod lines;
mod scan;
mod tokenize;

pub use build::{build_parallel, Config};
pub use error::{Error, Result};
pub use index::{GroupingIndex, Keys};
pub use key::{KeyFn, ScanKey, WordLength};
pub use lines::{render, write_entries, Entry, IntoLine};
pub use scan::{CountedScan, DenseScan, EntryScan, OrderedScan, Strategy, SuccessorScan};
pub use tokenize::{tokenize, Tokens};

/// A small sample that exercises several groups and a sparse key range.
pub const DEMO_LINES: [&str; 5] = [
    "alligator ant ape",
    "bat bear bison",
    "cat camel",
    "deer dog dragonfly",
    "hippopotamus",
];
