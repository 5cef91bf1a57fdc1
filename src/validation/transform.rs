//! Value transforms applied after a field passes its rules

/// Title-case a name: split on whitespace, upper-case the first character of
/// each word, rejoin with single spaces. The rest of each word is kept as typed.
pub fn capitalize_words(input: &str) -> String {
    input
        .split_whitespace()
        .map(capitalize_first)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
