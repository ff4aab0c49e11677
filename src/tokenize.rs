use std::str::Split;

/// Returns `true` for characters that separate words: everything except
/// letters, digits and the underscore.
fn is_separator(ch: char) -> bool {
    !(ch.is_alphanumeric() || ch == '_')
}

/// Iterator over the normalized words of a single line.
///
/// Created by [`tokenize`].
pub struct Tokens<'a> {
    /// Raw pieces of the line between separator characters
    parts: Split<'a, fn(char) -> bool>,
}

impl<'a> Iterator for Tokens<'a> {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let part = self.parts.next()?.trim();
            if !part.is_empty() {
                return Some(part.to_lowercase());
            }
        }
    }
}

/// Splits `line` into lower-cased words.
///
/// Any run of characters other than letters, digits and `_` separates two
/// words. Empty pieces are skipped, so the iterator never yields an empty
/// string. Works for any input, including the empty line.
pub fn tokenize(line: &str) -> Tokens<'_> {
    Tokens { parts: line.split(is_separator as fn(char) -> bool) }
}
