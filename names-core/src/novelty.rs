//! Rejection of candidates too close to names already known.
//!
//! The similarity score is a bag-of-characters overlap, not an edit
//! distance: it only has to catch near-copies of short seed names.

/// Fraction of `candidate`'s characters that occur anywhere in `other`,
/// relative to the longer of the two strings.
///
/// Counts characters of `candidate` with multiplicity, so `"aaa"` against
/// `"a"` scores `1.0`. Both inputs are compared as given; callers lowercase.
pub fn overlap_ratio(candidate: &str, other: &str) -> f64 {
	let longest = candidate.chars().count().max(other.chars().count());
	if longest == 0 {
		return 0.0;
	}
	let common = candidate.chars().filter(|c| other.contains(*c)).count();
	common as f64 / longest as f64
}

/// Returns `true` if `candidate` is an exact match, a substring match or a
/// near-copy of any name in `existing`.
///
/// # Notes
/// - Case-insensitive throughout.
/// - The overlap check only applies when both names are longer than two
///   characters; `threshold` is clamped to `0.0..=1.0`.
pub fn is_too_similar<I, S>(candidate: &str, existing: I, threshold: f64) -> bool
where
	I: IntoIterator<Item = S>,
	S: AsRef<str>,
{
	let threshold = threshold.clamp(0.0, 1.0);
	let name = candidate.to_lowercase();
	let name_len = name.chars().count();

	existing.into_iter().any(|other| {
		let other = other.as_ref().to_lowercase();
		if name == other || name.contains(&other) || other.contains(&name) {
			return true;
		}
		name_len > 2 && other.chars().count() > 2 && overlap_ratio(&name, &other) > threshold
	})
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn exact_match_is_too_similar() {
		assert!(is_too_similar("Kara", ["Kara"], 0.7));
		assert!(is_too_similar("KARA", ["kara"], 0.7));
	}

	#[test]
	fn unrelated_name_passes() {
		assert!(!is_too_similar("Zoltan", ["Kara"], 0.7));
		assert!(!is_too_similar("Zoltan", Vec::<String>::new(), 0.7));
	}

	#[test]
	fn substrings_both_ways() {
		assert!(is_too_similar("Brakka", ["Brak"], 1.0));
		assert!(is_too_similar("Ryn", ["Bryn"], 1.0));
	}

	#[test]
	fn overlap_above_threshold() {
		// "rako" against "kora": all four letters shared
		assert!((overlap_ratio("rako", "kora") - 1.0).abs() < f64::EPSILON);
		assert!(is_too_similar("Rako", ["Kora"], 0.7));
		assert!(!is_too_similar("Rako", ["Kora"], 1.0));
	}

	#[test]
	fn short_names_skip_overlap() {
		// "ox" vs "xo": full overlap but both too short to score
		assert!(!is_too_similar("Ox", ["Xo"], 0.0));
	}

	#[test]
	fn ratio_uses_longest_length() {
		assert!((overlap_ratio("ab", "abcd") - 0.5).abs() < f64::EPSILON);
		assert_eq!(overlap_ratio("", ""), 0.0);
	}
}
