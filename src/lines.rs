use std::fmt::{self, Display};
use std::io::{self, Write};

/// One group of an index together with its key.
///
/// Displays as the key, `" ="` and then each word preceded by a space,
/// e.g. `"3 = ant ape bat"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Entry<'a, K> {
    pub key: K,
    pub group: &'a [String],
}

impl<'a, K> From<(K, &'a [String])> for Entry<'a, K> {
    fn from((key, group): (K, &'a [String])) -> Self {
        Entry { key, group }
    }
}

impl<'a, K: Display> Display for Entry<'a, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} =", self.key)?;
        for word in self.group {
            write!(f, " {}", word)?;
        }
        Ok(())
    }
}

/// Converts a value into a single line of output.
pub trait IntoLine {
    /// Performs the conversion. The resulting line is the [`Entry`] form
    /// followed by `'\n'`.
    fn into_line(self) -> String;
}

impl<K: Display> IntoLine for (K, &[String]) {
    fn into_line(self) -> String {
        format!("{}\n", Entry::from(self))
    }
}

/// Renders all entries, one line per group.
pub fn render<'a, K, I>(entries: I) -> String
where
    K: Display,
    I: IntoIterator<Item = (K, &'a [String])>,
{
    let mut out = String::new();
    for entry in entries {
        out.push_str(&entry.into_line());
    }
    out
}

/// Writes all entries to `out`, one line per group.
pub fn write_entries<'a, W, K, I>(out: &mut W, entries: I) -> io::Result<()>
where
    W: Write,
    K: Display,
    I: IntoIterator<Item = (K, &'a [String])>,
{
    for entry in entries {
        writeln!(out, "{}", Entry::from(entry))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{GroupingIndex, DEMO_LINES};

    #[test]
    fn renders_one_group() {
        let words = vec!["bison".to_string(), "camel".to_string()];
        assert_eq!((5, &words[..]).into_line(), "5 = bison camel\n");
    }

    #[test]
    fn entry_displays_without_newline() {
        let words = vec!["alligator".to_string(), "dragonfly".to_string()];
        let entry = Entry { key: 9, group: &words[..] };
        assert_eq!(entry.to_string(), "9 = alligator dragonfly");
        assert_eq!(Entry::from((9, &words[..])), entry);
    }

    #[test]
    fn renders_animals() {
        let mut index = GroupingIndex::new();
        for line in DEMO_LINES {
            index.insert_line(line);
        }
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
    fn writes_to_any_writer() -> io::Result<()> {
        let mut index = GroupingIndex::new();
        index.insert_line("ox");
        let mut out = Vec::new();
        write_entries(&mut out, index.entries())?;
        assert_eq!(out, b"2 = ox\n");
        Ok(())
    }

    #[test]
    fn empty_index_renders_nothing() {
        assert_eq!(render(&GroupingIndex::new()), "");
    }
}
