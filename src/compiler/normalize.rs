//! Whitespace purging for template sources.

use std::borrow::Cow;

/// Characters removed when whitespace purging is enabled.
const PURGED: [char; 3] = ['\n', '\r', '\t'];

/// Remove newline, carriage-return and tab characters from a template
/// source. Only these three characters are removed, with no replacement.
/// When disabled, the input is returned unchanged.
pub fn purge_whitespace(source: &str, enabled: bool) -> Cow<'_, str> {
    if !enabled || !source.contains(PURGED) {
        return Cow::Borrowed(source);
    }
    Cow::Owned(source.chars().filter(|c| !PURGED.contains(c)).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_returns_input_unchanged() {
        let source = "line one\n\tline two\r\n";
        assert_eq!(purge_whitespace(source, false), source);
    }

    #[test]
    fn test_purges_only_the_three_characters() {
        let source = "a\nb\rc\td  e";
        let purged = purge_whitespace(source, true);
        assert_eq!(purged, "abcd  e");
    }

    #[test]
    fn test_length_shrinks_by_purged_count() {
        let source = "{{#each items}}\n\t<li>{{this}}</li>\r\n{{/each}}\n";
        let count = source.chars().filter(|c| PURGED.contains(c)).count();
        let purged = purge_whitespace(source, true);
        assert_eq!(purged.len(), source.len() - count);
        assert!(!purged.contains(PURGED));
    }

    #[test]
    fn test_noop_on_clean_input_borrows() {
        let source = "<p>{{hello}}</p>";
        assert!(matches!(
            purge_whitespace(source, true),
            Cow::Borrowed(_)
        ));
    }
}
