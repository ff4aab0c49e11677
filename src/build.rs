use std::io;
use std::mem;
use std::sync::mpsc::{self, Sender};

use threadpool::ThreadPool;
use tracing::debug;

use crate::error::{Error, Result};
use crate::index::GroupingIndex;
use crate::key::KeyFn;

/// Tuning for [`build_parallel`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Number of worker threads
    pub threads: usize,
    /// Number of lines indexed by one job
    pub chunk_lines: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config { threads: num_cpus::get(), chunk_lines: 4096 }
    }
}

fn spawn_chunk<F>(
    pool: &ThreadPool,
    tx: &Sender<(usize, GroupingIndex<F>)>,
    chunk: usize,
    lines: Vec<String>,
    key_fn: F,
) where
    F: KeyFn + Send + 'static,
    F::Key: Send + 'static,
{
    let tx = tx.clone();
    pool.execute(move || {
        let mut index = GroupingIndex::with_key_fn(key_fn);
        for line in &lines {
            index.insert_line(line);
        }
        // The receiver is gone only if the build already failed.
        let _ = tx.send((chunk, index));
    });
}

/// Builds an index from `lines` on a thread pool.
///
/// Lines are cut into chunks of `config.chunk_lines`, every chunk is indexed
/// by a worker, and the partial indexes are merged in input order. The
/// result equals inserting the same lines one by one.
pub fn build_parallel<I, F>(lines: I, key_fn: F, config: &Config) -> Result<GroupingIndex<F>>
where
    I: IntoIterator<Item = io::Result<String>>,
    F: KeyFn + Clone + Send + 'static,
    F::Key: Send + 'static,
{
    let chunk_lines = config.chunk_lines.max(1);
    let pool = ThreadPool::new(config.threads.max(1));
    let (tx, rx) = mpsc::channel();

    let mut chunks = 0;
    let mut chunk = Vec::with_capacity(chunk_lines);
    for line in lines {
        chunk.push(line?);
        if chunk.len() == chunk_lines {
            let full = mem::replace(&mut chunk, Vec::with_capacity(chunk_lines));
            spawn_chunk(&pool, &tx, chunks, full, key_fn.clone());
            chunks += 1;
        }
    }
    if !chunk.is_empty() {
        spawn_chunk(&pool, &tx, chunks, chunk, key_fn.clone());
        chunks += 1;
    }
    drop(tx);
    debug!(chunks, threads = pool.max_count(), "indexing chunks");

    let mut partials: Vec<Option<GroupingIndex<F>>> = (0..chunks).map(|_| None).collect();
    for (chunk, partial) in rx.iter() {
        partials[chunk] = Some(partial);
    }

    let mut index = GroupingIndex::with_key_fn(key_fn);
    for (chunk, partial) in partials.into_iter().enumerate() {
        match partial {
            Some(partial) => index.merge(partial),
            None => return Err(Error::Worker { chunk }),
        }
    }
    debug!(keys = index.size(), words = index.word_count(), "merged partial indexes");
    Ok(index)
}
