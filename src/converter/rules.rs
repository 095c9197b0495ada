use lazy_static::lazy_static;
use std::collections::HashSet;

/// Words already ending with this suffix skip conversion entirely.
pub const STATIC_SUFFIX: &str = "way";

const VOWEL_SUFFIX: &str = "way";
const CONSONANT_SUFFIX: &str = "ay";

lazy_static! {
    static ref VOWELS: HashSet<char> = "aeiou".chars().collect();
    static ref CONSONANTS: HashSet<char> = "bcdfghjklmnpqrstvwxyz".chars().collect();
}

/// Apply the letter-shuffling rule to a cleaned, lowercase word.
///
/// Vowel-leading words keep their order and take "way"; consonant-leading
/// words rotate the first letter to the end and take "ay". Empty words and
/// words with an unclassified leading character (digits, symbols) pass
/// through unchanged.
pub fn apply(word: &str) -> String {
    let mut chars = word.chars();

    match chars.next() {
        Some(first) if VOWELS.contains(&first) => format!("{}{}", word, VOWEL_SUFFIX),
        Some(first) if CONSONANTS.contains(&first) => {
            format!("{}{}{}", chars.as_str(), first, CONSONANT_SUFFIX)
        }
        _ => word.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vowel_word() {
        assert_eq!(apply("ahoj"), "ahojway");
        assert_eq!(apply("a"), "away");
    }

    #[test]
    fn test_consonant_word() {
        assert_eq!(apply("hello"), "ellohay");
        assert_eq!(apply("h"), "hay");
    }

    #[test]
    fn test_empty_word() {
        assert_eq!(apply(""), "");
    }

    #[test]
    fn test_unclassified_leading_character() {
        assert_eq!(apply("123"), "123");
        assert_eq!(apply("!hej"), "!hej");
    }
}
