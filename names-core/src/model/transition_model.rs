use super::state::State;
use crate::corpus::Corpus;
use crate::error::{NameError, NameResult};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Marks the beginning of a wrapped name.
pub const START_CHAR: char = '<';

/// Marks the end of a wrapped name. Valid as a successor, never as context.
pub const END_CHAR: char = '>';

/// Character-transition model learned from a corpus.
///
/// The `TransitionModel` stores one state per context: the `order`
/// characters preceding a position, or the shorter prefix available at
/// the start of a wrapped name (`"<"`, `"<A"`, ...).
///
/// # Responsibilities
/// - Build the model from a corpus of names
/// - Accumulate transition counts for each context
/// - Predict the next character given a context
///
/// # Invariants
/// - `order` is always >= 1
/// - Each state in `states` corresponds to a unique context
/// - For every context, the counts sum to the number of times the context
///   was followed by a character in the corpus
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct TransitionModel {
	/// Width of the context window
	order: usize, // must be >= 1

	/// Mapping from a context to its corresponding state
	states: HashMap<String, State>,
}

impl Default for TransitionModel {
	/// An empty first-order model.
	fn default() -> Self {
		Self { order: 1, states: HashMap::new() }
	}
}

impl TransitionModel {
	/// Creates a new, empty model of the given order.
	///
	/// # Errors
	/// Returns an error if `order < 1`.
	pub fn new(order: usize) -> NameResult<Self> {
		if order < 1 {
			return Err(NameError::InvalidOrder(order));
		}
		Ok(Self { order, states: HashMap::new() })
	}

	/// Builds a model from every name of `corpus`.
	///
	/// An empty corpus yields an empty model.
	pub fn build(corpus: &Corpus, order: usize) -> NameResult<Self> {
		let mut model = Self::new(order)?;
		for name in corpus.names() {
			model.add_name(name);
		}
		log::debug!(
			"built order-{} model: {} names, {} contexts",
			order,
			corpus.len(),
			model.states.len()
		);
		Ok(model)
	}

	/// Adds one name to the model.
	///
	/// # Notes
	/// - Whitespace and reserved start/end symbols are removed first.
	/// - Case is kept as-is.
	/// - Names left empty after cleanup are ignored.
	pub fn add_name(&mut self, name: &str) {
		let mut chars: Vec<char> = Vec::with_capacity(name.len() + 2);
		chars.push(START_CHAR);
		chars.extend(
			name.chars()
				.filter(|c| !c.is_whitespace() && *c != START_CHAR && *c != END_CHAR),
		);
		if chars.len() == 1 {
			return;
		}
		chars.push(END_CHAR);

		// Every character after the start symbol is a successor of the
		// (at most) `order` characters preceding it
		for i in 1..chars.len() {
			let context: String = chars[i.saturating_sub(self.order)..i].iter().collect();
			let state = self.states.entry(context.clone()).or_insert_with(|| State::new(&context));
			state.add_transition(chars[i]);
		}
	}

	pub fn order(&self) -> usize {
		self.order
	}

	/// Returns `true` when no name was learned.
	pub fn is_empty(&self) -> bool {
		self.states.is_empty()
	}

	/// Iterates over every known context.
	pub fn contexts(&self) -> impl Iterator<Item = &str> {
		self.states.values().map(State::key)
	}

	/// Number of times `next_char` followed `context`.
	pub fn count(&self, context: &str, next_char: char) -> usize {
		self.states.get(context).map_or(0, |state| state.count(next_char))
	}

	/// Total number of transitions observed from `context`.
	pub fn total(&self, context: &str) -> usize {
		self.states.get(context).map_or(0, State::total)
	}

	/// Predicts the next character following `context`.
	///
	/// Returns `None` if the context is unknown or contains the end symbol.
	pub fn predict<R: Rng + ?Sized>(&self, context: &str, rng: &mut R) -> Option<char> {
		if context.contains(END_CHAR) {
			return None;
		}
		self.states.get(context)?.predict(rng)
	}
}
