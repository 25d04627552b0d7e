//! Archetype profiles and the catalog mapping labels to them.

use std::collections::BTreeMap;
use std::path::Path;

use crate::config::LengthBounds;
use crate::corpus::{self, Corpus};
use crate::error::{NameError, NameResult};
use crate::io;

/// How names of an archetype are produced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ArchetypeKind {
	/// Learned from a seed corpus.
	Statistical(Corpus),
	/// Template-based codes, see [`crate::designation`].
	Designation,
}

/// One named character category.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArchetypeProfile {
	name: String,
	kind: ArchetypeKind,
	bounds: Option<LengthBounds>,
}

impl ArchetypeProfile {
	/// Statistical archetype learned from `corpus`.
	pub fn statistical(name: &str, corpus: Corpus, bounds: Option<LengthBounds>) -> Self {
		Self { name: normalize_label(name), kind: ArchetypeKind::Statistical(corpus), bounds }
	}

	/// Archetype whose names are designations.
	pub fn designation(name: &str) -> Self {
		Self { name: normalize_label(name), kind: ArchetypeKind::Designation, bounds: None }
	}

	pub fn name(&self) -> &str {
		&self.name
	}

	pub fn kind(&self) -> &ArchetypeKind {
		&self.kind
	}

	/// Length override, if the archetype defines one.
	pub fn bounds(&self) -> Option<LengthBounds> {
		self.bounds
	}

	/// Seed names, empty for designation archetypes.
	pub fn seeds(&self) -> &[String] {
		match &self.kind {
			ArchetypeKind::Statistical(corpus) => corpus.names(),
			ArchetypeKind::Designation => &[],
		}
	}

	pub fn is_designation(&self) -> bool {
		matches!(self.kind, ArchetypeKind::Designation)
	}
}

/// Canonical form of an archetype label.
///
/// Trimmed, lower-cased, with spaces and dashes turned into underscores:
/// `" Star Knight "` → `"star_knight"`.
pub fn normalize_label(label: &str) -> String {
	label
		.trim()
		.chars()
		.map(|c| if c == ' ' || c == '-' { '_' } else { c.to_ascii_lowercase() })
		.collect()
}

/// Read-only mapping from archetype label to profile.
///
/// # Invariants
/// - The default archetype is always present
/// - Labels are stored normalized
#[derive(Clone, Debug)]
pub struct ArchetypeCatalog {
	profiles: BTreeMap<String, ArchetypeProfile>,
	default: String,
}

impl Default for ArchetypeCatalog {
	/// The built-in archetypes. `aristocrat` is the default.
	fn default() -> Self {
		let mut catalog = Self::new(ArchetypeProfile::statistical(
			"aristocrat",
			Corpus::from_static(corpus::ARISTOCRAT),
			Some(LengthBounds::new(4, 8)),
		));

		let builtin = [
			("mercenary", corpus::MERCENARY, LengthBounds::new(3, 6)),
			("pilot", corpus::PILOT, LengthBounds::new(3, 6)),
			("star_knight", corpus::STAR_KNIGHT, LengthBounds::new(4, 8)),
			("alien_brute", corpus::ALIEN_BRUTE, LengthBounds::new(4, 6)),
			("alien_mystic", corpus::ALIEN_MYSTIC, LengthBounds::new(4, 7)),
		];
		for (name, names, bounds) in builtin {
			let profile = ArchetypeProfile::statistical(name, Corpus::from_static(names), Some(bounds));
			catalog.profiles.insert(profile.name.clone(), profile);
		}

		let robot = ArchetypeProfile::designation("robot");
		catalog.profiles.insert(robot.name.clone(), robot);
		catalog
	}
}

impl ArchetypeCatalog {
	/// Creates a catalog holding only `default`.
	pub fn new(default: ArchetypeProfile) -> Self {
		let label = default.name.clone();
		let mut profiles = BTreeMap::new();
		profiles.insert(label.clone(), default);
		Self { profiles, default: label }
	}

	/// Registers a profile.
	///
	/// # Errors
	/// Returns an error if the label is already taken.
	pub fn insert(&mut self, profile: ArchetypeProfile) -> NameResult<()> {
		if self.profiles.contains_key(&profile.name) {
			return Err(NameError::DuplicateArchetype(profile.name));
		}
		self.profiles.insert(profile.name.clone(), profile);
		Ok(())
	}

	/// Adds one statistical archetype per `.dat` file of `dir`.
	///
	/// # Behavior
	/// - The label is the file stem (`data/smuggler.dat` → `smuggler`).
	/// - Each line is a name; blank lines and `#` comments are skipped.
	/// - Loaded archetypes have no length override.
	///
	/// Returns the number of archetypes added.
	///
	/// # Errors
	/// - The path is not a directory or cannot be read.
	/// - A file holds no usable name, or its label is already registered.
	pub fn load_dir<P: AsRef<Path>>(&mut self, dir: P) -> NameResult<usize> {
		let folder = io::normalize_folder(dir.as_ref());
		if !folder.is_dir() {
			return Err(NameError::Io(std::io::Error::new(
				std::io::ErrorKind::NotFound,
				format!("Expected a directory, got: {}", folder.display()),
			)));
		}

		let mut added = 0;
		for path in io::list_files(&folder, "dat")? {
			let label = io::get_filename(&path)?;
			let corpus = Corpus::from_lines(io::read_file(&path)?);
			if corpus.is_empty() {
				return Err(NameError::EmptyCorpus(label));
			}
			log::debug!("loaded corpus '{}' ({} names)", label, corpus.len());
			self.insert(ArchetypeProfile::statistical(&label, corpus, None))?;
			added += 1;
		}
		Ok(added)
	}

	/// Looks up a label (normalized first).
	pub fn get(&self, label: &str) -> Option<&ArchetypeProfile> {
		self.profiles.get(&normalize_label(label))
	}

	/// Profile used for unrecognized labels.
	pub fn default_profile(&self) -> &ArchetypeProfile {
		// Present by construction
		&self.profiles[&self.default]
	}

	/// All labels, sorted.
	pub fn labels(&self) -> impl Iterator<Item = &str> {
		self.profiles.keys().map(String::as_str)
	}

	pub fn len(&self) -> usize {
		self.profiles.len()
	}

	pub fn is_empty(&self) -> bool {
		self.profiles.is_empty()
	}
}
