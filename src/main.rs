use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;
use wordgroups::{build_parallel, write_entries, Config, Strategy, WordLength, DEMO_LINES};

/// Groups the words of the input by length and prints the groups in
/// ascending order of length.
#[derive(Parser, Debug)]
#[command(name = "wordgroups", version)]
struct Args {
    /// Input files; standard input is read when none are given or for `-`
    files: Vec<PathBuf>,

    /// Traversal used to print the groups
    #[arg(long, value_enum, default_value_t = Strategy::Ordered)]
    strategy: Strategy,

    /// Print the groups with every strategy, with iteration counts
    #[arg(long, conflicts_with = "strategy")]
    compare: bool,

    /// Worker threads used to build the index (defaults to the CPU count)
    #[arg(long)]
    threads: Option<usize>,

    /// Lines indexed per job
    #[arg(long)]
    chunk_lines: Option<usize>,

    /// Use a built-in sample instead of reading input
    #[arg(long, conflicts_with = "files")]
    demo: bool,
}

type Lines = Box<dyn Iterator<Item = io::Result<String>>>;

fn open(path: &Path) -> io::Result<Lines> {
    if path == Path::new("-") {
        return Ok(Box::new(io::stdin().lock().lines()));
    }
    Ok(Box::new(BufReader::new(File::open(path)?).lines()))
}

fn input(args: &Args) -> io::Result<Lines> {
    if args.demo {
        return Ok(Box::new(DEMO_LINES.iter().map(|line| Ok(line.to_string()))));
    }
    if args.files.is_empty() {
        return Ok(Box::new(io::stdin().lock().lines()));
    }
    let mut lines: Lines = Box::new(std::iter::empty());
    for path in &args.files {
        lines = Box::new(lines.chain(open(path)?));
    }
    Ok(lines)
}

fn main() -> wordgroups::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let mut config = Config::default();
    if let Some(threads) = args.threads {
        config.threads = threads;
    }
    if let Some(chunk_lines) = args.chunk_lines {
        config.chunk_lines = chunk_lines;
    }

    let index = build_parallel(input(&args)?, WordLength, &config)?;
    info!(keys = index.size(), words = index.word_count(), "index built");

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    if args.compare {
        for strategy in Strategy::ALL {
            writeln!(out, "{}:", strategy)?;
            let mut scan = index.scan(strategy);
            write_entries(&mut out, scan.by_ref())?;
            writeln!(out, "({} iterations)\n", scan.iterations())?;
        }
    } else {
        write_entries(&mut out, index.scan(args.strategy))?;
    }
    out.flush()?;
    Ok(())
}
