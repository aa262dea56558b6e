//! Rendering stage.

/// Join sentences, appending `separator` after each one (the last included).
pub fn render_summary<'a>(sentences: impl IntoIterator<Item = &'a str>, separator: &str) -> String {
    let mut summary = String::new();
    for sentence in sentences {
        summary.push_str(sentence);
        summary.push_str(separator);
    }
    summary
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_separator() {
        assert_eq!(render_summary(["A.", "B."], "+++++"), "A.+++++B.+++++");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(render_summary(std::iter::empty(), "+++++"), "");
    }
}
