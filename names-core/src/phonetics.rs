//! Pronounceability heuristics.

/// Characters treated as vowels. Everything else counts as a consonant.
pub const VOWELS: &str = "aeiouy";

/// Consonants used by fallback synthesis (`y` is a vowel here).
pub const CONSONANTS: &str = "bcdfghjklmnpqrstvwxz";

/// Longest run of consecutive vowels or consecutive consonants allowed.
const MAX_RUN: usize = 3;

/// Returns `true` if `c` belongs to the vowel class (case-insensitive).
pub fn is_vowel(c: char) -> bool {
	VOWELS.contains(c.to_ascii_lowercase())
}

/// Accepts names with at least one vowel and no run of four or more
/// vowels or consonants.
pub fn is_plausible(name: &str) -> bool {
	if name.is_empty() || !name.chars().any(is_vowel) {
		return false;
	}

	let mut vowels = 0;
	let mut consonants = 0;
	for c in name.chars() {
		if is_vowel(c) {
			vowels += 1;
			consonants = 0;
		} else {
			consonants += 1;
			vowels = 0;
		}
		if vowels > MAX_RUN || consonants > MAX_RUN {
			return false;
		}
	}
	true
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn rejects_empty_and_vowelless() {
		assert!(!is_plausible(""));
		assert!(!is_plausible("Brk"));
	}

	#[test]
	fn rejects_long_runs() {
		assert!(!is_plausible("Zzzz"));
		assert!(!is_plausible("Aeiou"));
		assert!(!is_plausible("Ostrnk"));
	}

	#[test]
	fn accepts_ordinary_names() {
		assert!(is_plausible("Mira"));
		assert!(is_plausible("Thrak"));
		assert!(is_plausible("Aei"));
		assert!(is_plausible("Lyx"));
	}

	#[test]
	fn y_is_a_vowel_and_case_is_ignored() {
		assert!(is_vowel('Y'));
		assert!(is_vowel('e'));
		assert!(!is_vowel('K'));
		assert!(!is_vowel('-'));
	}
}
