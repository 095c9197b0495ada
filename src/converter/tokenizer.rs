/// Characters that separate words in the input text.
pub const WORD_SEPARATORS: &[char] = &[' ', '\t', '\n'];

/// Hyphen splitting a compound into independently converted parts.
pub const HYPHEN: char = '-';

/// Split `text` on any run of the given delimiter characters,
/// discarding empty fragments.
pub fn split<'a>(text: &'a str, delimiters: &[char]) -> Vec<&'a str> {
    text.split(|ch| delimiters.contains(&ch))
        .filter(|fragment| !fragment.is_empty())
        .collect()
}
