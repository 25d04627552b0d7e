use rand::Rng;

use super::transition_model::{END_CHAR, START_CHAR, TransitionModel};
use crate::config::LengthBounds;
use crate::phonetics::{is_plausible, is_vowel, CONSONANTS, VOWELS};

/// Hard cap on model steps for a single walk.
const MAX_STEPS: usize = 100;

/// Samples one name from `model`.
///
/// # Parameters
/// - `bounds`: accepted length range of the result.
/// - `attempts`: number of model walks to try before falling back.
///
/// # Behavior
/// - Each walk starts from the start symbol and stops at the end symbol,
///   an unknown context, `bounds.max()` characters or `MAX_STEPS` steps.
/// - A walk is kept when it is long enough and passes [`is_plausible`].
/// - When every attempt fails (or `attempts` is 0), a fallback name is
///   synthesized instead. This never fails.
///
/// # Notes
/// - The result is always capitalized (first char upper, rest lower).
pub fn sample<R: Rng + ?Sized>(model: &TransitionModel, bounds: LengthBounds, attempts: usize, rng: &mut R) -> String {
	for _ in 0..attempts {
		let name = walk(model, bounds.max(), rng);
		if name.chars().count() >= bounds.min() && is_plausible(&name) {
			return capitalize(&name);
		}
	}

	log::debug!("no acceptable walk after {attempts} attempts, using fallback");
	fallback_name(bounds, rng)
}

/// Walks the model once from the start symbol.
///
/// Returns the raw generated characters (no markers, case untouched).
/// An empty or degenerate model yields an empty string.
pub fn walk<R: Rng + ?Sized>(model: &TransitionModel, max_length: usize, rng: &mut R) -> String {
	let order = model.order();
	let mut global_prefix: Vec<char> = vec![START_CHAR];
	let mut name = String::new();
	let mut len = 0;

	for _ in 0..MAX_STEPS {
		if len >= max_length {
			break;
		}

		let context: String = global_prefix[global_prefix.len().saturating_sub(order)..].iter().collect();
		match model.predict(&context, rng) {
			Some(c) if c != END_CHAR => {
				name.push(c);
				global_prefix.push(c);
				len += 1;
			}
			_ => break,
		}
	}

	name
}

/// Synthesizes an alternating consonant/vowel name within `bounds`.
///
/// Starts from a random consonant, then adds between `min - 1` and
/// `max - 1` characters, switching class each time.
pub fn fallback_name<R: Rng + ?Sized>(bounds: LengthBounds, rng: &mut R) -> String {
	let consonants = CONSONANTS.as_bytes();
	let vowels = VOWELS.as_bytes();

	let mut last = consonants[rng.random_range(0..consonants.len())] as char;
	let mut name = String::from(last);
	let extra = rng.random_range(bounds.min() - 1..=bounds.max() - 1);
	for _ in 0..extra {
		let pool = if is_vowel(last) { consonants } else { vowels };
		last = pool[rng.random_range(0..pool.len())] as char;
		name.push(last);
	}

	capitalize(&name)
}

/// Upper-cases the first character and lower-cases the rest.
pub fn capitalize(name: &str) -> String {
	let mut chars = name.chars();
	match chars.next() {
		Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
		None => String::new(),
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::corpus::{Corpus, PILOT};
	use rand::SeedableRng;
	use rand::rngs::StdRng;

	fn model(names: &[&str], order: usize) -> TransitionModel {
		TransitionModel::build(&Corpus::from_static(names), order).unwrap()
	}

	#[test]
	fn capitalize_normalizes_case() {
		assert_eq!(capitalize("kIRA"), "Kira");
		assert_eq!(capitalize("x"), "X");
		assert_eq!(capitalize(""), "");
	}

	#[test]
	fn single_name_model_reproduces_it() {
		let m = model(&["Mira"], 1);
		let mut rng = StdRng::seed_from_u64(5);
		assert_eq!(walk(&m, 10, &mut rng), "Mira");
	}

	#[test]
	fn walk_respects_max_length() {
		let m = model(&["Abababababab"], 1);
		let mut rng = StdRng::seed_from_u64(5);
		let walks: Vec<String> = (0..50).map(|_| walk(&m, 4, &mut rng)).collect();
		assert!(walks.iter().all(|w| w.chars().count() <= 4));
		assert!(walks.iter().any(|w| w == "Abab"));
	}

	#[test]
	fn empty_model_falls_back() {
		let m = TransitionModel::new(1).unwrap();
		let mut rng = StdRng::seed_from_u64(11);
		let bounds = LengthBounds::new(4, 6);
		assert_eq!(walk(&m, 10, &mut rng), "");
		let name = sample(&m, bounds, 5, &mut rng);
		assert!(bounds.contains(name.chars().count()), "{name}");
		assert!(is_plausible(&name));
	}

	#[test]
	fn zero_attempts_goes_straight_to_fallback() {
		let m = model(&["Mira"], 1);
		let mut rng = StdRng::seed_from_u64(2);
		let name = sample(&m, LengthBounds::new(6, 6), 0, &mut rng);
		assert_eq!(name.chars().count(), 6);
		assert_ne!(name, "Mira");
	}

	#[test]
	fn fallback_alternates_classes() {
		let mut rng = StdRng::seed_from_u64(99);
		for _ in 0..200 {
			let name = fallback_name(LengthBounds::new(3, 8), &mut rng);
			let chars: Vec<char> = name.chars().collect();
			assert!((3..=8).contains(&chars.len()));
			assert!(!is_vowel(chars[0]));
			assert!(chars.windows(2).all(|w| is_vowel(w[0]) != is_vowel(w[1])), "{name}");
			assert_eq!(name, capitalize(&name));
		}
	}

	#[test]
	fn samples_stay_in_bounds() {
		let m = model(PILOT, 1);
		let mut rng = StdRng::seed_from_u64(1234);
		let bounds = LengthBounds::new(3, 6);
		for _ in 0..200 {
			let name = sample(&m, bounds, 5, &mut rng);
			assert!(bounds.contains(name.chars().count()), "{name}");
			assert!(is_plausible(&name), "{name}");
		}
	}

	#[test]
	fn second_order_model_generates() {
		let m = model(PILOT, 2);
		let mut rng = StdRng::seed_from_u64(8);
		let produced = (0..20).filter(|_| !walk(&m, 10, &mut rng).is_empty()).count();
		assert_eq!(produced, 20);
	}
}
