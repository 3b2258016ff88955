//! Find/replace and word counting over the configured input text.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextSummary {
    pub processed: String,
    /// Whitespace-delimited tokens in the original text.
    pub word_count: usize,
}

/// Replace every non-overlapping `find` in `text` with `replace`.
///
/// An empty `find` leaves the text unchanged. The word count always comes
/// from the input, never from the replaced text.
pub fn process_text(text: &str, find: &str, replace: &str) -> TextSummary {
    let processed = if find.is_empty() {
        text.to_string()
    } else {
        text.replace(find, replace)
    };
    TextSummary {
        processed,
        word_count: count_words(text),
    }
}

pub fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}
