//! Reusable per-request name filter.

use super::matcher::{is_wildcard, matches_chars};
use super::ASTERISK;

/// A search pattern decoded once and applied to many candidate names.
///
/// Directory enumeration builds one `NameFilter` from the client's pattern
/// and runs it against every entry. Matching follows
/// [`is_name_in_expression`](crate::is_name_in_expression) exactly.
///
/// Runs of consecutive `*` are collapsed when the filter is built; they
/// select the same names as a single `*` and would only multiply the
/// backtracking work.
///
/// # Example
///
/// ```
/// use dokanrs::NameFilter;
///
/// let filter = NameFilter::new("*.log", true);
/// let entries = ["app.LOG", "app.txt", "trace.log"];
/// let hits: Vec<_> = filter.filter(entries).collect();
/// assert_eq!(hits, ["app.LOG", "trace.log"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameFilter {
    pattern: Vec<char>,
    ignore_case: bool,
    has_wildcards: bool,
}

impl NameFilter {
    /// Creates a filter for `pattern`.
    pub fn new(pattern: &str, ignore_case: bool) -> Self {
        let mut chars: Vec<char> = pattern.chars().collect();
        chars.dedup_by(|a, b| *a == ASTERISK && *b == ASTERISK);
        let has_wildcards = chars.iter().copied().any(is_wildcard);

        Self {
            pattern: chars,
            ignore_case,
            has_wildcards,
        }
    }

    /// Returns `true` if `name` is selected by this filter.
    pub fn matches(&self, name: &str) -> bool {
        if self.is_match_all() {
            return true;
        }
        let name: Vec<char> = name.chars().collect();
        matches_chars(&self.pattern, &name, self.ignore_case)
    }

    /// Yields only the candidates this filter selects.
    pub fn filter<'a, I, S>(&'a self, names: I) -> impl Iterator<Item = S> + 'a
    where
        I: IntoIterator<Item = S>,
        I::IntoIter: 'a,
        S: AsRef<str>,
    {
        names.into_iter().filter(move |name| self.matches(name.as_ref()))
    }

    /// Returns `true` if the pattern is `*`, which selects every name.
    pub fn is_match_all(&self) -> bool {
        self.pattern == [ASTERISK]
    }

    /// Returns `true` if the pattern holds any wildcard token.
    pub fn has_wildcards(&self) -> bool {
        self.has_wildcards
    }

    /// Returns whether literals are compared case-insensitively.
    pub fn ignore_case(&self) -> bool {
        self.ignore_case
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::is_name_in_expression;

    #[test]
    fn test_collapses_asterisk_runs() {
        let filter = NameFilter::new("***", false);
        assert!(filter.is_match_all());
        assert!(filter.matches(""));
        assert!(filter.matches("x.y"));
    }

    #[test]
    fn test_agrees_with_free_function() {
        let names = ["", "a", "a.b", "f0_001.txt", "F0_001.TXT", "ab.c.d", "noext"];
        let patterns = ["*", "<", "F0_<\"*", "a>b", "*.*", "?.?", "a**b", "<\"", ">>>"];
        for pattern in patterns {
            for ignore_case in [false, true] {
                let filter = NameFilter::new(pattern, ignore_case);
                for name in names {
                    assert_eq!(
                        filter.matches(name),
                        is_name_in_expression(pattern, name, ignore_case),
                        "pattern={pattern:?} name={name:?} ignore_case={ignore_case}"
                    );
                }
            }
        }
    }

    #[test]
    fn test_filter_owned_strings() {
        let filter = NameFilter::new("<.rs", false);
        let names = vec![
            String::from("lib.rs"),
            String::from("mod.rs.orig"),
            String::from("main.rs"),
        ];
        let hits: Vec<String> = filter.filter(names).collect();
        assert_eq!(hits, ["lib.rs", "main.rs"]);
    }

    #[test]
    fn test_wildcard_flags() {
        assert!(!NameFilter::new("exact.txt", true).has_wildcards());
        assert!(NameFilter::new("ex?ct.txt", true).has_wildcards());
        assert!(!NameFilter::new("*.txt", true).is_match_all());
        assert!(NameFilter::new("a", true).ignore_case());
    }
}
