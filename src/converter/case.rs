/// Offsets of uppercase characters in `word`, ascending.
pub fn find_capital_indices(word: &str) -> Vec<usize> {
    word.chars()
        .enumerate()
        .filter(|(_, ch)| ch.is_uppercase())
        .map(|(i, _)| i)
        .collect()
}

/// Uppercase the character at each given offset of the target word,
/// leaving every other character untouched.
///
/// Offsets were captured from the original word; the transformed word is
/// never shorter than the original, so every index lands on a character.
pub fn capitalize(word: &str, indices: &[usize]) -> String {
    let mut chars: Vec<char> = word.chars().collect();

    for &index in indices {
        if let Some(ch) = chars.get_mut(index) {
            *ch = ch.to_uppercase().next().unwrap_or(*ch);
        }
    }

    chars.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_capital_indices() {
        assert_eq!(find_capital_indices("aH'j'V.Bn"), vec![1, 5, 7]);
        assert_eq!(find_capital_indices("ahoj"), Vec::<usize>::new());
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("ah'j'v.bn", &[1, 5, 7]), "aH'j'V.Bn");
    }

    #[test]
    fn test_capitalize_no_indices() {
        assert_eq!(capitalize("ahoj", &[]), "ahoj");
    }

    #[test]
    fn test_capitalize_ignores_out_of_range_index() {
        assert_eq!(capitalize("ab", &[5]), "ab");
    }
}
