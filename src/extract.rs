//! Line and tuple extraction
//!
//! Turns raw file contents into the sorted unique set of accepted numbers.
//! Each trimmed non-empty line yields at most one candidate:
//!
//! - Tuple line: the first `(...)` group, split on `,`. Exactly 3 parts
//!   required; the 3rd part is parsed as a base-10 integer with truncating
//!   semantics (`"3.7"` -> 3). Any other part count discards the line.
//! - Bare line: the line itself parsed as a float via its longest leading
//!   numeric prefix (`"3.9"` -> 3.9, fraction kept).
//!
//! The two paths deliberately disagree on fractions; callers depend on the
//! tuple path truncating while the bare path does not.

use crate::dedup::NumericSet;
use regex::Regex;

/// Inclusive lower bound of the accepted range.
pub const MIN_VALUE: f64 = -1023.0;
/// Inclusive upper bound of the accepted range.
pub const MAX_VALUE: f64 = 1023.0;

/// Result of extracting one file's contents.
#[derive(Debug, Clone, PartialEq)]
pub struct Extraction {
    /// Accepted unique values, sorted ascending.
    pub values: Vec<f64>,
    /// Non-empty lines examined.
    pub lines: u64,
    /// Accepted candidates that collapsed into an existing entry.
    pub duplicates: u64,
}

impl Extraction {
    fn empty() -> Self {
        Self {
            values: Vec::new(),
            lines: 0,
            duplicates: 0,
        }
    }
}

/// Check whether a candidate lies in the accepted range. NaN never passes.
#[inline]
pub fn in_range(value: f64) -> bool {
    (MIN_VALUE..=MAX_VALUE).contains(&value)
}

/// Extractor with pre-compiled line patterns.
pub struct LineExtractor {
    tuple_re: Regex,
    float_re: Regex,
}

impl LineExtractor {
    pub fn new() -> Self {
        Self {
            tuple_re: Regex::new(r"\(([^)]+)\)").unwrap(),
            float_re: Regex::new(r"^[+-]?(?:[0-9]+(?:\.[0-9]*)?|\.[0-9]+)(?:[eE][+-]?[0-9]+)?")
                .unwrap(),
        }
    }

    /// Candidate number for one trimmed line, before range filtering.
    ///
    /// A line with a parenthesized group never falls back to the bare-line
    /// parse: a malformed tuple contributes no candidate at all.
    pub fn candidate(&self, line: &str) -> Option<f64> {
        if let Some(caps) = self.tuple_re.captures(line) {
            let parts: Vec<&str> = caps[1].split(',').map(str::trim).collect();
            if parts.len() != 3 {
                return None;
            }
            parse_int_prefix(parts[2]).map(|n| n as f64)
        } else {
            self.float_re
                .find(line)
                .and_then(|m| m.as_str().parse::<f64>().ok())
        }
    }

    /// Extract the ascending-sorted unique accepted values from one file's
    /// contents. The set is created here and consumed here; nothing carries
    /// over between calls.
    pub fn extract_unique(&self, content: &str) -> Extraction {
        if content.trim().is_empty() {
            return Extraction::empty();
        }

        let mut set = NumericSet::new();
        let mut lines = 0u64;
        let mut duplicates = 0u64;

        for line in content.split('\n').map(str::trim).filter(|l| !l.is_empty()) {
            lines += 1;

            let Some(value) = self.candidate(line) else {
                continue;
            };

            if !in_range(value) {
                continue;
            }

            if !set.insert(value) {
                duplicates += 1;
            }
        }

        Extraction {
            values: set.into_sorted(),
            lines,
            duplicates,
        }
    }
}

impl Default for LineExtractor {
    fn default() -> Self {
        Self::new()
    }
}

/// Integer parse with truncating semantics: optional sign, then the longest
/// run of ASCII digits; anything after the run is ignored ("3.7" -> 3,
/// "12abc" -> 12, "0x10" -> 0). No leading digits means no candidate.
fn parse_int_prefix(s: &str) -> Option<i64> {
    let (sign, digits) = match s.as_bytes().first()? {
        b'+' => (1i64, &s[1..]),
        b'-' => (-1i64, &s[1..]),
        _ => (1i64, s),
    };

    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }

    let magnitude: i64 = digits[..end].parse().ok()?;
    Some(sign * magnitude)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tuple_line() {
        let extractor = LineExtractor::new();
        assert_eq!(extractor.candidate("(1, 2, 42)"), Some(42.0));
        assert_eq!(extractor.candidate("(1,2,-7)"), Some(-7.0));
    }

    #[test]
    fn test_tuple_third_element_truncates() {
        let extractor = LineExtractor::new();
        assert_eq!(extractor.candidate("(1, 2, 3.9)"), Some(3.0));
        assert_eq!(extractor.candidate("(1, 2, 12abc)"), Some(12.0));
        assert_eq!(extractor.candidate("(1, 2, 0x10)"), Some(0.0));
    }

    #[test]
    fn test_bare_line_keeps_fraction() {
        let extractor = LineExtractor::new();
        assert_eq!(extractor.candidate("3.9"), Some(3.9));
        assert_eq!(extractor.candidate("-0.5"), Some(-0.5));
        assert_eq!(extractor.candidate(".5"), Some(0.5));
        assert_eq!(extractor.candidate("1e2"), Some(100.0));
    }

    #[test]
    fn test_wrong_tuple_arity_discards_line() {
        let extractor = LineExtractor::new();
        assert_eq!(extractor.candidate("(1,2,3,4)"), None);
        assert_eq!(extractor.candidate("(1,2)"), None);
    }

    #[test]
    fn test_malformed_tuple_does_not_fall_back() {
        let extractor = LineExtractor::new();
        // Parenthesized group present, so "42" outside it is never tried.
        assert_eq!(extractor.candidate("42 (a, b, c)"), None);
    }

    #[test]
    fn test_first_group_wins() {
        let extractor = LineExtractor::new();
        assert_eq!(extractor.candidate("(1,2,3) (4,5,6)"), Some(3.0));
        assert_eq!(extractor.candidate("noise(7, 8, 9)trailing"), Some(9.0));
    }

    #[test]
    fn test_garbage_lines() {
        let extractor = LineExtractor::new();
        assert_eq!(extractor.candidate("hello"), None);
        assert_eq!(extractor.candidate("()"), None);
        assert_eq!(extractor.candidate("-"), None);
    }

    #[test]
    fn test_in_range() {
        assert!(in_range(0.0));
        assert!(in_range(-1023.0));
        assert!(in_range(1023.0));
        assert!(!in_range(-1024.0));
        assert!(!in_range(1023.5));
        assert!(!in_range(f64::NAN));
    }

    #[test]
    fn test_extract_unique_sorted_and_deduped() {
        let extractor = LineExtractor::new();
        let result = extractor.extract_unique("5\n5\n-2000\n5.0\n(1, 2, 42)\n3.9\n");

        assert_eq!(result.values, vec![3.9, 5.0, 42.0]);
        assert_eq!(result.lines, 6);
        assert_eq!(result.duplicates, 2); // second "5" and "5.0"
    }

    #[test]
    fn test_extract_empty_content() {
        let extractor = LineExtractor::new();
        assert_eq!(extractor.extract_unique(""), Extraction::empty());
        assert_eq!(extractor.extract_unique("  \n \t \n"), Extraction::empty());
    }

    #[test]
    fn test_extract_out_of_range_excluded() {
        let extractor = LineExtractor::new();
        let result = extractor.extract_unique("-2000\n2000\n(1,2,5000)\n1023\n-1023");

        assert_eq!(result.values, vec![-1023.0, 1023.0]);
    }

    #[test]
    fn test_extract_is_idempotent() {
        let extractor = LineExtractor::new();
        let content = "(9, 8, 7)\n3.9\n3.9\n-12\n";

        let first = extractor.extract_unique(content);
        let second = extractor.extract_unique(content);
        assert_eq!(first, second);
    }

    #[test]
    fn test_parse_int_prefix() {
        assert_eq!(parse_int_prefix("42"), Some(42));
        assert_eq!(parse_int_prefix("+5"), Some(5));
        assert_eq!(parse_int_prefix("-12x"), Some(-12));
        assert_eq!(parse_int_prefix("3.7"), Some(3));
        assert_eq!(parse_int_prefix(""), None);
        assert_eq!(parse_int_prefix("abc"), None);
        assert_eq!(parse_int_prefix("-"), None);
    }
}
