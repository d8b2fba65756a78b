//! Tokenizer turning free text into normalized lookup words.

/// Split text into lowercase words.
///
/// Punctuation is removed (anything that is neither a word character nor
/// whitespace), so `"don't"` becomes `"dont"`. Order and duplicates are kept.
///
/// ```
/// use signbridge_common::text::tokenize;
///
/// assert_eq!(tokenize("Thank you, Mother!"), vec!["thank", "you", "mother"]);
/// assert!(tokenize(" ?! ").is_empty());
/// ```
pub fn tokenize(text: &str) -> Vec<String> {
    let stripped: String = text
        .chars()
        .filter(|c| is_word_char(*c) || c.is_whitespace())
        .collect();

    stripped
        .split_whitespace()
        .map(|word| word.to_lowercase())
        .collect()
}

/// Normalize a single label the way registration stores it.
pub fn normalize_label(label: &str) -> String {
    label.trim().to_lowercase()
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_basic() {
        assert_eq!(tokenize("hello world"), vec!["hello", "world"]);
    }

    #[test]
    fn test_tokenize_lowercases_and_strips_punctuation() {
        assert_eq!(
            tokenize("Hello, how ARE you?"),
            vec!["hello", "how", "are", "you"]
        );
        assert_eq!(tokenize("don't"), vec!["dont"]);
        assert_eq!(tokenize("well-known"), vec!["wellknown"]);
    }

    #[test]
    fn test_tokenize_keeps_order_and_duplicates() {
        assert_eq!(tokenize("go go GO"), vec!["go", "go", "go"]);
    }

    #[test]
    fn test_tokenize_mixed_whitespace() {
        assert_eq!(tokenize("  eat\tfood\n\nnow  "), vec!["eat", "food", "now"]);
    }

    #[test]
    fn test_tokenize_keeps_digits_underscores_and_unicode() {
        assert_eq!(tokenize("room_2 café"), vec!["room_2", "café"]);
    }

    #[test]
    fn test_tokenize_empty() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("   ").is_empty());
        assert!(tokenize("...!!!").is_empty());
    }

    #[test]
    fn test_normalize_label() {
        assert_eq!(normalize_label("  Hello "), "hello");
    }
}
