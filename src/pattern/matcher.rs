//! NT-compatible wildcard matching.
//!
//! Implements the rules of the kernel's `FsRtlIsNameInExpression` as Dokan
//! exposes them through `DokanIsNameInExpression`: `*` and `?` plus the three
//! DOS-era tokens `<`, `>` and `"`.
//!
//! The matcher walks a pair of cursors `(ei, ni)` over the pattern and the
//! name. Star tokens backtrack by re-entering the matcher on the remaining
//! pattern and name suffixes; no state survives between calls. Recursion
//! depth is bounded by the number of star tokens in the pattern.

use super::{ASTERISK, DOS_DOT, DOS_QM, DOS_STAR, QUESTION_MARK};
use crate::util::fold_case;

/// Returns `true` if `name` is selected by the wildcard `pattern`.
///
/// Comparison is per Unicode scalar. With `ignore_case`, literals are
/// compared through their simple uppercase mapping; no locale is consulted.
///
/// | Token | Meaning |
/// |-------|---------|
/// | `*`   | zero or more characters |
/// | `?`   | exactly one character |
/// | `<`   | zero or more characters up to the final `.` of the name |
/// | `>`   | one character, or nothing at a `.` that starts the extension |
/// | `"`   | a literal `.`, or nothing when it ends the pattern at name end |
///
/// Never fails: malformed or empty patterns simply do not match.
///
/// # Example
///
/// ```
/// use dokanrs::is_name_in_expression;
///
/// assert!(is_name_in_expression("*", "anything.txt", false));
/// assert!(is_name_in_expression("F0_<\"*", "f0_001.txt", true));
/// assert!(!is_name_in_expression("F0_<\"*", "f0_001.txt", false));
/// assert!(is_name_in_expression("a?c", "abc", false));
/// assert!(!is_name_in_expression("a?c", "ac", false));
/// ```
pub fn is_name_in_expression(pattern: &str, name: &str, ignore_case: bool) -> bool {
    let pattern: Vec<char> = pattern.chars().collect();
    let name: Vec<char> = name.chars().collect();
    matches_chars(&pattern, &name, ignore_case)
}

/// Returns `true` if `pattern` contains any of the five wildcard tokens.
///
/// A pattern without wildcards selects exactly one name, so callers can look
/// it up directly instead of filtering an enumeration.
///
/// # Example
///
/// ```
/// use dokanrs::contains_wildcards;
///
/// assert!(contains_wildcards("*.txt"));
/// assert!(contains_wildcards("FILE<"));
/// assert!(!contains_wildcards("readme.md"));
/// ```
pub fn contains_wildcards(pattern: &str) -> bool {
    pattern.chars().any(is_wildcard)
}

#[inline]
pub(crate) fn is_wildcard(c: char) -> bool {
    matches!(c, ASTERISK | QUESTION_MARK | DOS_STAR | DOS_QM | DOS_DOT)
}

/// Tokens allowed to remain unconsumed once the name is exhausted.
#[inline]
fn is_null_matcher(c: char) -> bool {
    matches!(c, ASTERISK | DOS_STAR | DOS_DOT)
}

pub(crate) fn matches_chars(expr: &[char], name: &[char], ignore_case: bool) -> bool {
    let mut ei = 0;
    let mut ni = 0;

    while ei < expr.len() && ni < name.len() {
        match expr[ei] {
            ASTERISK => {
                ei += 1;
                if ei == expr.len() {
                    return true;
                }
                // Every split point, name end included.
                return (ni..=name.len())
                    .any(|split| matches_chars(&expr[ei..], &name[split..], ignore_case));
            }
            DOS_STAR => {
                let last_dot = name.iter().rposition(|&c| c == '.');
                ei += 1;

                loop {
                    let end_reached =
                        ni >= name.len() || last_dot.is_some_and(|dot| ni > dot);
                    if end_reached {
                        break;
                    }
                    if matches_chars(&expr[ei..], &name[ni..], ignore_case) {
                        return true;
                    }
                    ni += 1;
                }
            }
            DOS_QM => {
                ei += 1;
                // At a dot, only consume it if another dot follows; otherwise
                // the dot starts the extension and `>` matches nothing.
                if name[ni] != '.' || name[ni + 1..].contains(&'.') {
                    ni += 1;
                }
            }
            DOS_DOT => {
                let is_last = ei + 1 == expr.len();
                if name[ni] == '.' {
                    ni += 1;
                } else if !is_last {
                    return false;
                }
                ei += 1;
            }
            QUESTION_MARK => {
                ei += 1;
                ni += 1;
            }
            literal => {
                let same = if ignore_case {
                    fold_case(literal) == fold_case(name[ni])
                } else {
                    literal == name[ni]
                };
                if !same {
                    return false;
                }
                ei += 1;
                ni += 1;
            }
        }
    }

    ni == name.len() && expr[ei..].iter().all(|&c| is_null_matcher(c))
}
