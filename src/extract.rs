//! Number and coordinate pair extraction from job file lines

use once_cell::sync::Lazy;
use regex::Regex;

/// Optional sign, then `digits.digits` (leading digits optional) or bare
/// digits. ASCII digits only, so every match parses as `f64`.
const NUM: &str = r"[-+]?[0-9]*\.[0-9]+|[-+]?[0-9]+";

static NUMBER_RE: Lazy<Regex> = Lazy::new(|| Regex::new(NUM).expect("valid number pattern"));

static PAIR_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"\(({NUM})\s+({NUM})\)")).expect("valid pair pattern")
});

/// Extract every `(a b)` pair in the line, left to right.
///
/// Parenthesized groups that do not hold exactly two numbers separated by
/// whitespace produce nothing.
pub fn extract_pairs(line: &str) -> Vec<(f64, f64)> {
    PAIR_RE
        .captures_iter(line)
        .filter_map(|caps| {
            let a = caps.get(1)?.as_str().parse::<f64>().ok()?;
            let b = caps.get(2)?.as_str().parse::<f64>().ok()?;
            Some((a, b))
        })
        .collect()
}

/// Extract every numeric token in the line, ignoring any parenthesization
pub fn extract_numbers(line: &str) -> Vec<f64> {
    NUMBER_RE
        .find_iter(line)
        .filter_map(|m| m.as_str().parse::<f64>().ok())
        .collect()
}

/// The first `N` pairs of the line, or `None` when the line holds fewer
pub fn first_pairs<const N: usize>(line: &str) -> Option<[(f64, f64); N]> {
    let pairs = extract_pairs(line);
    if pairs.len() < N {
        return None;
    }
    let mut out = [(0.0, 0.0); N];
    out.copy_from_slice(&pairs[..N]);
    Some(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pairs_in_order_of_appearance() {
        let pairs = extract_pairs("SEGMENT (1.5 -2) (3 4.25) (+5 .5)");
        assert_eq!(pairs, vec![(1.5, -2.0), (3.0, 4.25), (5.0, 0.5)]);
    }

    #[test]
    fn malformed_groups_are_skipped() {
        let pairs = extract_pairs("SEGMENT (1 2 3) (x 4) (5) ( 6 7) (8 9)");
        assert_eq!(pairs, vec![(8.0, 9.0)]);
    }

    #[test]
    fn numbers_ignore_parentheses() {
        let nums = extract_numbers("CLIP=(1.0 2) -3.5 4 9");
        assert_eq!(nums, vec![1.0, 2.0, -3.5, 4.0, 9.0]);
    }

    #[test]
    fn non_ascii_digits_do_not_match() {
        // Arabic-Indic one: the group is malformed, not silently dropped
        assert_eq!(extract_pairs("BEZIER (\u{661} 0) (1 2)"), vec![(1.0, 2.0)]);
        assert_eq!(extract_numbers("CLIP=\u{661} 2 3 4 5"), vec![2.0, 3.0, 4.0, 5.0]);
        assert_eq!(first_pairs::<2>("SEGMENT (\u{661} 0) (1 2)"), None);
    }

    #[test]
    fn first_pairs_requires_enough_pairs() {
        assert_eq!(
            first_pairs::<2>("SEGMENT (0 0) (1 1) (2 2)"),
            Some([(0.0, 0.0), (1.0, 1.0)])
        );
        assert_eq!(first_pairs::<4>("BEZIER (0 0) (1 1) (2 2)"), None);
    }
}
