pub mod case;
pub mod punctuation;
pub mod rules;
pub mod tokenizer;

use tokenizer::{HYPHEN, WORD_SEPARATORS};

/// Convert free-form text into Pig Latin.
///
/// Words are split on runs of whitespace, hyphenated compounds are
/// converted part by part, and punctuation placement and capitalization
/// pattern survive the conversion. Whitespace runs collapse to a single
/// space in the output.
pub fn convert(input: &str) -> String {
    tokenizer::split(input, WORD_SEPARATORS)
        .into_iter()
        .map(convert_compound)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Number of whitespace-delimited words in the input.
pub fn word_count(input: &str) -> usize {
    tokenizer::split(input, WORD_SEPARATORS).len()
}

fn convert_compound(compound: &str) -> String {
    tokenizer::split(compound, &[HYPHEN])
        .into_iter()
        .map(convert_word)
        .collect::<Vec<_>>()
        .join("-")
}

/// Convert a single word, free of whitespace and hyphens.
///
/// Metadata is captured from the original word before any transformation:
/// capital offsets and punctuation marks first, then lowercase, strip,
/// rotate, reinsert, recapitalize. The stage order is load-bearing for the
/// offset bookkeeping.
fn convert_word(word: &str) -> String {
    if word.is_empty() || word.ends_with(rules::STATIC_SUFFIX) {
        return word.to_string();
    }

    let capital_indices = case::find_capital_indices(word);
    let marks = punctuation::find_marks(word);

    // Per-char lowercasing keeps a 1:1 mapping with the captured offsets
    let lowered: String = word
        .chars()
        .map(|ch| ch.to_lowercase().next().unwrap_or(ch))
        .collect();
    let cleaned = punctuation::strip(&lowered);
    let rotated = rules::apply(&cleaned);

    let reinserted = punctuation::reinsert(&rotated, &marks);
    case::capitalize(&reinserted, &capital_indices)
}
