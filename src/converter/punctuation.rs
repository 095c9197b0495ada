use lazy_static::lazy_static;
use std::collections::HashSet;

lazy_static! {
    // Characters restored at their original distance from the end of the word
    static ref PUNCTUATION: HashSet<char> = ['\'', '.', ',', ';', ':'].into_iter().collect();
}

/// A punctuation character anchored to its distance from the end of the word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mark {
    pub from_back: usize,
    pub ch: char,
}

pub fn is_punctuation(ch: char) -> bool {
    PUNCTUATION.contains(&ch)
}

/// Scan a word for punctuation marks, returned nearest-end-first.
pub fn find_marks(word: &str) -> Vec<Mark> {
    let length = word.chars().count();
    let mut marks: Vec<Mark> = word
        .chars()
        .enumerate()
        .filter(|(_, ch)| is_punctuation(*ch))
        .map(|(i, ch)| Mark {
            from_back: length - (i + 1),
            ch,
        })
        .collect();

    marks.reverse();
    marks
}

/// Remove every punctuation character, preserving the order of the rest.
pub fn strip(word: &str) -> String {
    word.chars().filter(|ch| !is_punctuation(*ch)).collect()
}

/// Insert marks back into a transformed word at their recorded distance
/// from the end, recomputing the offset against the growing string.
///
/// The scan phase guarantees `from_back` never exceeds the current length
/// for marks processed nearest-end-first.
pub fn reinsert(word: &str, marks: &[Mark]) -> String {
    let mut chars: Vec<char> = word.chars().collect();

    for mark in marks {
        let offset = chars.len() - mark.from_back;
        chars.insert(offset, mark.ch);
    }

    chars.into_iter().collect()
}
