use std::collections::BTreeMap;

use rand::Rng;

use serde::{Deserialize, Serialize};


/// Represents a context in a transition model.
///
/// A `State` corresponds to one context (`key`, up to `order` characters)
/// and stores all observed transitions from this context to the next
/// character, the end symbol included.
///
/// Conceptually, this is a node in a Markov chain where outgoing edges
/// are weighted by their number of observations.
///
/// ## Invariants
/// - All transitions belong to the same `key`
/// - Each transition occurrence count is strictly positive
/// - Transitions are kept in character order, so a seeded RNG always picks
///   the same successor
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct State {
	/// Identifier of the state (the context).
	key: String,
	/// Outgoing transitions indexed by the next character.
	/// The value represents how many times this transition was observed.
	/// Example: { 'a' => 3, 'e' => 42 }
	transitions: BTreeMap<char, usize>
}

impl State {
	/// Creates a new empty state for the given context.
	pub fn new(key: &str) -> Self {
		Self {
			key: key.to_owned(),
			transitions: BTreeMap::new(),
		}
	}

	/// The context this state was built for.
	pub fn key(&self) -> &str {
		&self.key
	}

	/// Records an occurrence of a transition toward `next_char`.
	pub fn add_transition(&mut self, next_char: char) {
		*self.transitions.entry(next_char).or_insert(0) += 1;
	}

	/// Number of times `next_char` followed this context.
	pub fn count(&self, next_char: char) -> usize {
		self.transitions.get(&next_char).copied().unwrap_or(0)
	}

	/// Total number of observed transitions from this context.
	pub fn total(&self) -> usize {
		self.transitions.values().sum()
	}

	/// Predicts the next character using weighted random sampling.
	///
	/// The probability of selecting a character is proportional to its
	/// occurrence count. Performs an O(n) scan with cumulative subtraction.
	///
	/// Returns `None` if the state has no transitions.
	pub fn predict<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<char> {
		let total = self.total();
		if total == 0 {
			return None;
		}

		let mut r = rng.random_range(0..total);
		for (next_char, occurrence) in &self.transitions {
			if r < *occurrence {
				return Some(*next_char);
			}
			r -= occurrence;
		}

		// Unreachable while counts sum to `total`
		self.transitions.keys().next_back().copied()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rand::SeedableRng;
	use rand::rngs::StdRng;

	#[test]
	fn counts_accumulate() {
		let mut state = State::new("a");
		state.add_transition('n');
		state.add_transition('n');
		state.add_transition('>');
		assert_eq!(state.key(), "a");
		assert_eq!(state.count('n'), 2);
		assert_eq!(state.count('x'), 0);
		assert_eq!(state.total(), 3);
	}

	#[test]
	fn empty_state_predicts_nothing() {
		let mut rng = StdRng::seed_from_u64(1);
		assert_eq!(State::new("a").predict(&mut rng), None);
	}

	#[test]
	fn single_transition_is_certain() {
		let mut rng = StdRng::seed_from_u64(7);
		let mut state = State::new("q");
		state.add_transition('u');
		for _ in 0..20 {
			assert_eq!(state.predict(&mut rng), Some('u'));
		}
	}

	#[test]
	fn prediction_follows_weights() {
		let mut rng = StdRng::seed_from_u64(42);
		let mut state = State::new("x");
		for _ in 0..9 {
			state.add_transition('a');
		}
		state.add_transition('b');

		let hits = (0..1000).filter(|_| state.predict(&mut rng) == Some('a')).count();
		assert!(hits > 800, "expected ~900 hits, got {hits}");
	}
}
