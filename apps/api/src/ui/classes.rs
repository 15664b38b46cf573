/// Joins non-empty class fragments into a single class string.
///
/// Mirrors the class-list helper the front end uses: callers pass `""` for a
/// branch that contributes nothing. Plain concatenation, no deduplication.
pub fn cn(parts: &[&str]) -> String {
    parts
        .iter()
        .filter(|p| !p.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_joins_with_single_spaces() {
        assert_eq!(cn(&["a", "b c", "d"]), "a b c d");
    }

    #[test]
    fn test_skips_empty_fragments() {
        assert_eq!(cn(&["flex", "", "items-center"]), "flex items-center");
    }

    #[test]
    fn test_empty_input_yields_empty_string() {
        assert_eq!(cn(&[]), "");
    }
}
