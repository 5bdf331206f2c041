//! Wildcard name matching.
//!
//! - [`is_name_in_expression`] - One-shot match of a name against a pattern
//! - [`NameFilter`] - Pattern decoded once, applied per enumeration entry
//! - [`contains_wildcards`] - Whether a pattern needs matching at all

mod filter;
mod matcher;

pub use filter::NameFilter;
pub use matcher::{contains_wildcards, is_name_in_expression};

/// Matches zero or more characters.
pub const ASTERISK: char = '*';

/// Matches exactly one character.
pub const QUESTION_MARK: char = '?';

/// Matches zero or more characters up to the final `.` of the name.
pub const DOS_STAR: char = '<';

/// Matches one character, or nothing before the extension dot.
pub const DOS_QM: char = '>';

/// Matches a `.`, or nothing at the end of the name when last in the pattern.
pub const DOS_DOT: char = '"';
