use crate::archetype::{ArchetypeCatalog, ArchetypeKind, ArchetypeProfile};
use crate::config::{GeneratorConfig, LengthBounds, NameOptions};
use crate::corpus::{self, Corpus};
use crate::designation;
use crate::error::{NameError, NameResult};
use crate::model::sampler;
use crate::model::transition_model::TransitionModel;
use crate::novelty::is_too_similar;
use rand::Rng;

/// Fallback candidates tried per missing name before novelty checks are
/// relaxed to plain duplicate checks.
const FALLBACK_TRIES_PER_NAME: usize = 100;

/// High-level name generator over an archetype catalog.
///
/// # Responsibilities
/// - Resolve archetype labels to corpora and length bounds
/// - Build one transition model per request and sample from it
/// - Keep results unique and away from the seed names
/// - Fall back to synthesized names when the model runs dry
///
/// Immutable after construction; every call builds its own model, so a
/// single instance can be shared between threads.
#[derive(Debug, Clone)]
pub struct NameGenerator {
	catalog: ArchetypeCatalog,
	surnames: Corpus,
	config: GeneratorConfig,
}

impl Default for NameGenerator {
	/// Built-in archetypes, built-in surnames, default configuration.
	fn default() -> Self {
		Self::new(
			ArchetypeCatalog::default(),
			Corpus::from_static(corpus::SURNAMES),
			GeneratorConfig::default(),
		)
	}
}

impl NameGenerator {
	pub fn new(catalog: ArchetypeCatalog, surnames: Corpus, config: GeneratorConfig) -> Self {
		Self { catalog, surnames, config }
	}

	pub fn catalog(&self) -> &ArchetypeCatalog {
		&self.catalog
	}

	pub fn config(&self) -> &GeneratorConfig {
		&self.config
	}

	/// Resolves a label, falling back to the default archetype.
	///
	/// Returns the profile and whether the label was recognized.
	fn resolve(&self, archetype: &str) -> (&ArchetypeProfile, bool) {
		match self.catalog.get(archetype) {
			Some(profile) => (profile, true),
			None => {
				log::warn!(
					"unknown archetype '{}', using '{}'",
					archetype,
					self.catalog.default_profile().name()
				);
				(self.catalog.default_profile(), false)
			}
		}
	}

	/// Generates `count` first names for `archetype` with the thread RNG.
	pub fn generate_for_archetype(&self, archetype: &str, count: usize) -> Vec<String> {
		self.generate_for_archetype_with(archetype, count, &NameOptions::default(), &mut rand::rng())
	}

	/// Generates `count` first names for `archetype`.
	///
	/// # Behavior
	/// - Designation archetypes return `count` independent codes.
	/// - Unknown labels use the default archetype's corpus with the
	///   caller's bounds.
	/// - Known labels use their own bounds when they define some.
	/// - `count == 0` returns an empty list.
	///
	/// Never fails: names the model cannot supply are synthesized.
	pub fn generate_for_archetype_with<R: Rng + ?Sized>(
		&self,
		archetype: &str,
		count: usize,
		options: &NameOptions,
		rng: &mut R,
	) -> Vec<String> {
		let (profile, known) = self.resolve(archetype);
		let bounds = match profile.bounds() {
			Some(bounds) if known => bounds,
			_ => options.bounds_or(self.config.default_bounds),
		};
		self.generate_from_profile(profile, count, bounds, options.order_or(self.config.order), rng)
	}

	/// Strict variant of [`Self::generate_for_archetype_with`].
	///
	/// # Errors
	/// Returns [`NameError::UnknownArchetype`] instead of substituting the
	/// default archetype.
	pub fn try_generate_for_archetype<R: Rng + ?Sized>(
		&self,
		archetype: &str,
		count: usize,
		options: &NameOptions,
		rng: &mut R,
	) -> NameResult<Vec<String>> {
		let profile = self
			.catalog
			.get(archetype)
			.ok_or_else(|| NameError::UnknownArchetype(archetype.to_owned()))?;
		let bounds = profile.bounds().unwrap_or_else(|| options.bounds_or(self.config.default_bounds));
		Ok(self.generate_from_profile(profile, count, bounds, options.order_or(self.config.order), rng))
	}

	fn generate_from_profile<R: Rng + ?Sized>(
		&self,
		profile: &ArchetypeProfile,
		count: usize,
		bounds: LengthBounds,
		order: usize,
		rng: &mut R,
	) -> Vec<String> {
		let corpus = match profile.kind() {
			ArchetypeKind::Designation => {
				return (0..count).map(|_| designation::generate_code_with(&mut *rng)).collect();
			}
			ArchetypeKind::Statistical(corpus) => corpus,
		};
		if count == 0 {
			return Vec::new();
		}

		let model = self.build_model(corpus, order);
		let seeds = corpus.names();
		let mut result: Vec<String> = Vec::with_capacity(count);

		let max_attempts = count.saturating_mul(self.config.attempts_per_name);
		let mut attempts = 0;
		while result.len() < count && attempts < max_attempts {
			attempts += 1;
			let name = sampler::sample(&model, bounds, self.config.sample_attempts, rng);
			if !contains_ignore_case(&result, &name)
				&& !is_too_similar(&name, result.iter().chain(seeds), self.config.similarity_threshold)
			{
				result.push(name);
			}
		}

		if result.len() < count {
			log::debug!(
				"'{}': {} of {} names after {} samples, filling with fallbacks",
				profile.name(),
				result.len(),
				count,
				attempts
			);
			self.fill_with_fallbacks(&mut result, count, seeds, bounds, rng);
		}
		result
	}

	/// Tops `result` up to `count` with synthesized names.
	///
	/// Candidates must not exact- or substring-match a result or a seed.
	/// Past a first ceiling only exact duplicates are refused; past a second
	/// one any candidate is taken so the call always terminates.
	fn fill_with_fallbacks<R: Rng + ?Sized>(
		&self,
		result: &mut Vec<String>,
		count: usize,
		seeds: &[String],
		bounds: LengthBounds,
		rng: &mut R,
	) {
		let strict_ceiling = count.saturating_mul(FALLBACK_TRIES_PER_NAME);
		let relaxed_ceiling = strict_ceiling.saturating_mul(2);
		let mut tries = 0usize;

		while result.len() < count {
			tries += 1;
			let name = sampler::fallback_name(bounds, rng);
			let accept = if tries <= strict_ceiling {
				// Threshold 1.0 keeps only the exact and substring checks
				!is_too_similar(&name, result.iter().chain(seeds), 1.0)
			} else if tries <= relaxed_ceiling {
				!contains_ignore_case(result, &name)
			} else {
				log::warn!("fallback ceiling reached, accepting '{}' unchecked", name);
				true
			};
			if accept {
				result.push(name);
			}
		}
	}

	fn build_model(&self, corpus: &Corpus, order: usize) -> TransitionModel {
		TransitionModel::build(corpus, order).unwrap_or_else(|err| {
			log::warn!("{err}, sampling from an empty model");
			TransitionModel::default()
		})
	}

	/// Generates one surname with the thread RNG.
	pub fn generate_surname(&self) -> String {
		self.generate_surname_with(&NameOptions::default(), &mut rand::rng())
	}

	/// Generates one surname from the surname corpus.
	///
	/// Bounds default to the configured surname bounds (4-8).
	pub fn generate_surname_with<R: Rng + ?Sized>(&self, options: &NameOptions, rng: &mut R) -> String {
		let bounds = options.bounds_or(self.config.surname_bounds);
		let model = self.build_model(&self.surnames, options.order_or(self.config.order));
		sampler::sample(&model, bounds, self.config.sample_attempts, rng)
	}

	/// Generates `count` full names with the thread RNG.
	pub fn generate_full_name(&self, archetype: &str, count: usize) -> Vec<String> {
		self.generate_full_name_with(archetype, count, &mut rand::rng())
	}

	/// Pairs each first name with an independently generated surname.
	///
	/// Designation entries stand alone, without a surname.
	pub fn generate_full_name_with<R: Rng + ?Sized>(&self, archetype: &str, count: usize, rng: &mut R) -> Vec<String> {
		let profile = self.catalog.get(archetype).unwrap_or_else(|| self.catalog.default_profile());
		let firsts = self.generate_for_archetype_with(archetype, count, &NameOptions::default(), rng);
		self.pair_with_surnames(profile, firsts, rng)
	}

	/// Strict variant of [`Self::generate_full_name_with`]; `options` apply
	/// to the first names only.
	///
	/// # Errors
	/// Returns [`NameError::UnknownArchetype`] for an unknown label.
	pub fn try_generate_full_name<R: Rng + ?Sized>(
		&self,
		archetype: &str,
		count: usize,
		options: &NameOptions,
		rng: &mut R,
	) -> NameResult<Vec<String>> {
		let firsts = self.try_generate_for_archetype(archetype, count, options, rng)?;
		let profile = self
			.catalog
			.get(archetype)
			.ok_or_else(|| NameError::UnknownArchetype(archetype.to_owned()))?;
		Ok(self.pair_with_surnames(profile, firsts, rng))
	}

	fn pair_with_surnames<R: Rng + ?Sized>(
		&self,
		profile: &ArchetypeProfile,
		firsts: Vec<String>,
		rng: &mut R,
	) -> Vec<String> {
		if profile.is_designation() {
			return firsts;
		}
		firsts
			.into_iter()
			.map(|first| {
				let last = self.generate_surname_with(&NameOptions::default(), &mut *rng);
				format!("{first} {last}")
			})
			.collect()
	}

	/// Numbered full-name suggestions, one line each (`"1. Kira Varn"`).
	pub fn suggest_names<R: Rng + ?Sized>(&self, archetype: &str, count: usize, rng: &mut R) -> Vec<String> {
		self.generate_full_name_with(archetype, count, rng)
			.into_iter()
			.enumerate()
			.map(|(i, name)| format!("{}. {}", i + 1, name))
			.collect()
	}
}

fn contains_ignore_case(names: &[String], name: &str) -> bool {
	names.iter().any(|n| n.eq_ignore_ascii_case(name))
}
