use std::fs::File;
use std::io::{BufRead, BufReader, Write};

use tempfile::NamedTempFile;
use wordgroups::{build_parallel, render, Config, WordLength, DEMO_LINES};

#[test]
fn builds_from_file_lines() {
    let mut file = NamedTempFile::new().unwrap();
    for line in DEMO_LINES {
        writeln!(file, "{}", line).unwrap();
    }
    writeln!(file, "!!! ---").unwrap();
    file.flush().unwrap();

    let lines = BufReader::new(File::open(file.path()).unwrap()).lines();
    let config = Config { threads: 2, chunk_lines: 2 };
    let index = build_parallel(lines, WordLength, &config).unwrap();

    assert_eq!(
        render(&index),
        "3 = ant ape bat cat dog\n\
         4 = bear deer\n\
         5 = bison camel\n\
         9 = alligator dragonfly\n\
         12 = hippopotamus\n"
    );
}

#[test]
fn mixed_case_and_punctuation() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "The CAT, the Dog; and THE bird.").unwrap();
    file.flush().unwrap();

    let lines = BufReader::new(File::open(file.path()).unwrap()).lines();
    let index = build_parallel(lines, WordLength, &Config::default()).unwrap();

    assert_eq!(render(&index), "3 = the cat the dog and the\n4 = bird\n");
}
