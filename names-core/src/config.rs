//! Generation settings shared by the orchestrator and the sampler.

use serde::{Deserialize, Serialize};

/// Longest name any [`LengthBounds`] allows, in characters.
pub const MAX_NAME_LENGTH: usize = 64;

/// Inclusive length range for a generated name, in characters.
///
/// # Invariants
/// - `min >= 1`
/// - `max >= min`
/// - `max <= MAX_NAME_LENGTH`
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(from = "RawBounds")]
pub struct LengthBounds {
	min: usize,
	max: usize,
}

#[derive(Deserialize)]
struct RawBounds {
	min: usize,
	max: usize,
}

impl From<RawBounds> for LengthBounds {
	fn from(raw: RawBounds) -> Self {
		Self::new(raw.min, raw.max)
	}
}

impl LengthBounds {
	/// Creates a range, clamping `min` to 1, `max` to at least `min` and both
	/// to at most [`MAX_NAME_LENGTH`].
	pub const fn new(min: usize, max: usize) -> Self {
		let min = if min == 0 { 1 } else if min > MAX_NAME_LENGTH { MAX_NAME_LENGTH } else { min };
		let max = if max < min { min } else if max > MAX_NAME_LENGTH { MAX_NAME_LENGTH } else { max };
		Self { min, max }
	}

	pub fn min(&self) -> usize {
		self.min
	}

	pub fn max(&self) -> usize {
		self.max
	}

	/// Returns `true` if a name of `len` characters fits the range.
	pub fn contains(&self, len: usize) -> bool {
		(self.min..=self.max).contains(&len)
	}
}

/// Per-call overrides for first-name and surname generation.
///
/// `None` fields fall back to the generator's [`GeneratorConfig`].
#[derive(Deserialize, Clone, Copy, Debug, Default, PartialEq)]
pub struct NameOptions {
	pub min_length: Option<usize>,
	pub max_length: Option<usize>,
	pub order: Option<usize>,
}

impl NameOptions {
	/// Resolves the caller's bounds against `defaults`.
	pub fn bounds_or(&self, defaults: LengthBounds) -> LengthBounds {
		LengthBounds::new(
			self.min_length.unwrap_or(defaults.min()),
			self.max_length.unwrap_or(defaults.max()),
		)
	}

	/// Resolves the model order, never below 1.
	pub fn order_or(&self, default: usize) -> usize {
		self.order.unwrap_or(default).max(1)
	}
}

/// Configuration of a [`NameGenerator`](crate::generator::NameGenerator).
///
/// All fields have defaults matching the built-in archetype catalog, so a
/// partial document (for example `{ "order": 2 }`) deserializes cleanly.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct GeneratorConfig {
	/// Bounds used when the archetype defines none.
	pub default_bounds: LengthBounds,
	/// Bounds used for surnames.
	pub surname_bounds: LengthBounds,
	/// Context width of the transition model.
	pub order: usize,
	/// Model walks tried by the sampler before fallback synthesis.
	pub sample_attempts: usize,
	/// Sampling budget per requested name.
	pub attempts_per_name: usize,
	/// Overlap ratio above which a candidate is rejected.
	pub similarity_threshold: f64,
}

impl Default for GeneratorConfig {
	fn default() -> Self {
		Self {
			default_bounds: LengthBounds::new(3, 10),
			surname_bounds: LengthBounds::new(4, 8),
			order: 1,
			sample_attempts: 5,
			attempts_per_name: 10,
			similarity_threshold: 0.7,
		}
	}
}

impl GeneratorConfig {
	/// Set the model order (at least 1).
	pub fn with_order(mut self, order: usize) -> Self {
		self.order = order.max(1);
		self
	}

	/// Set the default first-name bounds.
	pub fn with_default_bounds(mut self, bounds: LengthBounds) -> Self {
		self.default_bounds = bounds;
		self
	}

	/// Set the surname bounds.
	pub fn with_surname_bounds(mut self, bounds: LengthBounds) -> Self {
		self.surname_bounds = bounds;
		self
	}

	/// Set the sampler retry budget.
	pub fn with_sample_attempts(mut self, attempts: usize) -> Self {
		self.sample_attempts = attempts;
		self
	}

	/// Set the per-name sampling budget (at least 1).
	pub fn with_attempts_per_name(mut self, attempts: usize) -> Self {
		self.attempts_per_name = attempts.max(1);
		self
	}

	/// Set the similarity threshold (clamped to 0.0..=1.0).
	pub fn with_similarity_threshold(mut self, threshold: f64) -> Self {
		self.similarity_threshold = threshold.clamp(0.0, 1.0);
		self
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn bounds_are_clamped() {
		let b = LengthBounds::new(0, 0);
		assert_eq!((b.min(), b.max()), (1, 1));
		let b = LengthBounds::new(6, 3);
		assert_eq!((b.min(), b.max()), (6, 6));
		assert!(LengthBounds::new(3, 6).contains(6));
		assert!(!LengthBounds::new(3, 6).contains(2));
	}

	#[test]
	fn bounds_are_capped() {
		let b = LengthBounds::new(20_000_000, 20_000_000);
		assert_eq!((b.min(), b.max()), (MAX_NAME_LENGTH, MAX_NAME_LENGTH));
		let b = LengthBounds::new(4, usize::MAX);
		assert_eq!((b.min(), b.max()), (4, MAX_NAME_LENGTH));

		let opts = NameOptions { min_length: Some(1_000), max_length: Some(2_000), order: None };
		assert_eq!(opts.bounds_or(LengthBounds::new(3, 10)).max(), MAX_NAME_LENGTH);
	}

	#[test]
	fn default_config() {
		let cfg = GeneratorConfig::default();
		assert_eq!(cfg.default_bounds, LengthBounds::new(3, 10));
		assert_eq!(cfg.surname_bounds, LengthBounds::new(4, 8));
		assert_eq!(cfg.order, 1);
		assert_eq!(cfg.sample_attempts, 5);
		assert_eq!(cfg.attempts_per_name, 10);
	}

	#[test]
	fn builder_methods_clamp() {
		let cfg = GeneratorConfig::default()
			.with_order(0)
			.with_attempts_per_name(0)
			.with_similarity_threshold(3.0);
		assert_eq!(cfg.order, 1);
		assert_eq!(cfg.attempts_per_name, 1);
		assert_eq!(cfg.similarity_threshold, 1.0);
	}

	#[test]
	fn options_resolve_against_defaults() {
		let opts = NameOptions { min_length: Some(5), max_length: None, order: Some(0) };
		let b = opts.bounds_or(LengthBounds::new(3, 10));
		assert_eq!((b.min(), b.max()), (5, 10));
		assert_eq!(opts.order_or(2), 1);
		assert_eq!(NameOptions::default().order_or(2), 2);
	}
}
